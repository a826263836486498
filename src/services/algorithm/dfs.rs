//! 深度优先搜索模块
//!
//! 显式后进先出栈。邻居按邻接顺序的逆序入栈，使排在最前的邻居最先出栈。
//! 返回的是搜索实际走过的路径，不一定最短。

use crate::core::graph::{Graph, NodeId};
use crate::core::path::{PathResult, Predecessors};

/// 深度优先搜索结构体
pub struct Dfs;

impl Dfs {
    /// 查找从 `start` 到 `goal` 的一条路径，代价为跳数
    pub fn search<N: NodeId>(graph: &Graph<N>, start: &N, goal: &N) -> Option<PathResult<N>> {
        let mut stack: Vec<N> = vec![start.clone()];
        let mut parents = Predecessors::with_root(start);

        while let Some(current) = stack.pop() {
            if current == *goal {
                let path = parents.reconstruct(goal);
                log::debug!("DFS 到达 '{}'，共发现 {} 个节点", goal, parents.len());
                return Some(PathResult::from_hops(path));
            }

            let came_from = parents.parent(&current).cloned();

            for (neighbor, _) in graph.neighbors(&current).iter().rev() {
                // 不沿来时的边直接退回
                if came_from.as_ref() == Some(neighbor) {
                    continue;
                }
                if !parents.contains(neighbor) {
                    parents.set(neighbor.clone(), current.clone());
                    stack.push(neighbor.clone());
                }
            }
        }

        log::debug!("DFS 遍历 {} 个节点后未到达 '{}'", parents.len(), goal);
        None
    }
}
