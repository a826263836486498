//! 迭代加深深度优先搜索模块

use crate::core::graph::{Graph, NodeId};
use crate::core::path::PathResult;
use crate::services::algorithm::depth_limited::DepthLimited;

/// 未配置时使用的最大深度
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// 迭代加深搜索结构体
pub struct IterativeDeepening;

impl IterativeDeepening {
    /// 依次以 `0..=max_depth` 为限制运行深度受限搜索，返回第一个结果
    ///
    /// 限制从小到大尝试，因此只要最少边数不超过 `max_depth`，
    /// 返回的路径就是边数最少的路径。
    ///
    /// # 参数
    /// - `graph`: 无向带权图
    /// - `start`: 起始节点
    /// - `goal`: 目标节点
    /// - `max_depth`: 深度上限
    ///
    /// # 返回
    /// 边数最少的路径，代价为跳数
    pub fn search<N: NodeId>(
        graph: &Graph<N>,
        start: &N,
        goal: &N,
        max_depth: usize,
    ) -> Option<PathResult<N>> {
        // 简单路径最多 node_count - 1 条边，更大的限制不会有新结果
        let ceiling = max_depth.min(graph.node_count());

        for limit in 0..=ceiling {
            log::trace!("IDDFS 尝试深度 {}", limit);
            if let Some(result) = DepthLimited::search(graph, start, goal, limit) {
                log::debug!("IDDFS 在深度 {} 找到 '{}'", result.hops(), goal);
                return Some(result);
            }
        }

        log::debug!("IDDFS 在深度 {} 内未找到 '{}'", ceiling, goal);
        None
    }
}
