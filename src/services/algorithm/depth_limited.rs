//! 深度受限搜索模块
//!
//! 不超过固定边数的深度优先搜索。已访问集合只记录当前路径上的节点，
//! 回溯时移除，因此经由两条分支都能到达的节点会被两条分支各尝试一次。
//! 使用显式栈代替递归，路径长度不受线程栈大小限制。

use std::collections::HashSet;

use crate::core::graph::{Graph, NodeId};
use crate::core::path::PathResult;

/// 深度受限搜索结构体
pub struct DepthLimited;

/// 栈帧：当前节点与下一个待尝试邻居的下标
struct Frame<N> {
    node: N,
    next: usize,
}

impl DepthLimited {
    /// 查找一条不超过 `limit` 条边的路径
    ///
    /// # 参数
    /// - `graph`: 无向带权图
    /// - `start`: 起始节点
    /// - `goal`: 目标节点
    /// - `limit`: 最大边数
    ///
    /// # 返回
    /// 找到的路径，代价为跳数。`None` 只表示限制内没有路径，
    /// 并不证明目标不可达。
    pub fn search<N: NodeId>(
        graph: &Graph<N>,
        start: &N,
        goal: &N,
        limit: usize,
    ) -> Option<PathResult<N>> {
        if start == goal {
            return Some(PathResult::from_hops(vec![start.clone()]));
        }

        let mut on_path: HashSet<N> = HashSet::new();
        let mut stack: Vec<Frame<N>> = vec![Frame {
            node: start.clone(),
            next: 0,
        }];
        on_path.insert(start.clone());

        loop {
            let depth = stack.len().saturating_sub(1);
            let frame = stack.last_mut()?;
            let neighbors = graph.neighbors(&frame.node);

            // 深度用尽或邻居试完：回溯
            if depth >= limit || frame.next >= neighbors.len() {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.node);
                }
                continue;
            }

            let (neighbor, _) = &neighbors[frame.next];
            frame.next += 1;

            if on_path.contains(neighbor) {
                continue;
            }

            if neighbor == goal {
                let mut path: Vec<N> = stack.into_iter().map(|f| f.node).collect();
                path.push(neighbor.clone());
                log::debug!("DLS 在深度 {} 找到 '{}'", path.len() - 1, goal);
                return Some(PathResult::from_hops(path));
            }

            on_path.insert(neighbor.clone());
            stack.push(Frame {
                node: neighbor.clone(),
                next: 0,
            });
        }
    }
}
