//! 一致代价搜索模块（到达目标即停止的 Dijkstra）

use std::convert::Infallible;

use crate::core::graph::{Graph, NodeId};
use crate::core::path::PathResult;
use crate::services::algorithm::astar::AStar;

/// 一致代价搜索结构体
pub struct UniformCost;

impl UniformCost {
    /// 查找总权重最小的路径，要求权重非负
    pub fn search<N: NodeId>(graph: &Graph<N>, start: &N, goal: &N) -> Option<PathResult<N>> {
        match AStar::best_first(graph, start, goal, |_| Ok::<f64, Infallible>(0.0)) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }
}
