//! 广度优先搜索模块
//!
//! 忽略边权：返回的代价是跳数，路径的边数最少。

use std::collections::VecDeque;

use crate::core::graph::{Graph, NodeId};
use crate::core::path::{PathResult, Predecessors};

/// 广度优先搜索结构体
pub struct Bfs;

impl Bfs {
    /// 查找从 `start` 到 `goal` 跳数最少的路径
    ///
    /// 节点进入前驱表即视为已访问，因此每个节点最多入队一次。
    ///
    /// # 参数
    /// - `graph`: 无向带权图（权重被忽略）
    /// - `start`: 起始节点
    /// - `goal`: 目标节点
    ///
    /// # 返回
    /// 最短路径，代价为跳数
    pub fn search<N: NodeId>(graph: &Graph<N>, start: &N, goal: &N) -> Option<PathResult<N>> {
        let mut queue: VecDeque<N> = VecDeque::new();
        let mut parents = Predecessors::with_root(start);

        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            if current == *goal {
                let path = parents.reconstruct(goal);
                log::debug!("BFS 到达 '{}'，共发现 {} 个节点", goal, parents.len());
                return Some(PathResult::from_hops(path));
            }

            for (neighbor, _) in graph.neighbors(&current) {
                if !parents.contains(neighbor) {
                    parents.set(neighbor.clone(), current.clone());
                    queue.push_back(neighbor.clone());
                }
            }
        }

        log::debug!("BFS 遍历 {} 个节点后未到达 '{}'", parents.len(), goal);
        None
    }
}
