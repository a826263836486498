//! 查询入口
//!
//! 为单个请求构建图，检查所选算法的前置条件，运行算法并报告结果。
//! 前置条件不满足是错误；"无路径" 是正常的 [`SearchOutcome::NotFound`]。

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::config::SearchConfig;
use crate::core::error::{NodeRole, SearchError, SearchResult};
use crate::core::graph::{Coordinates, Graph, NodeId};
use crate::core::path::PathResult;
use crate::services::algorithm::{
    AStar, Bfs, DepthLimited, Dfs, Greedy, IterativeDeepening, UniformCost,
};

/// 算法选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    DepthLimited,
    IterativeDeepening,
    UniformCost,
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::DepthLimited,
        Algorithm::IterativeDeepening,
        Algorithm::UniformCost,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::DepthLimited => "DLS",
            Algorithm::IterativeDeepening => "IDDFS",
            Algorithm::UniformCost => "Uniform-Cost",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
        }
    }

    pub fn needs_coordinates(&self) -> bool {
        matches!(self, Algorithm::Greedy | Algorithm::AStar)
    }

    pub fn needs_limit(&self) -> bool {
        matches!(self, Algorithm::DepthLimited)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "dls" | "depth-limited" => Ok(Algorithm::DepthLimited),
            "iddfs" | "iterative-deepening" => Ok(Algorithm::IterativeDeepening),
            "uniform-cost" | "uniform cost" | "ucs" | "costo uniforme" => {
                Ok(Algorithm::UniformCost)
            }
            "greedy" | "avara" | "ávara" => Ok(Algorithm::Greedy),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

/// 调用方提交的一次查询
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// `"A-B" -> 权重`，保持输入顺序
    pub edges: Vec<(String, f64)>,
    pub coordinates: Coordinates,
    pub start: String,
    pub goal: String,
    pub algorithm: String,
    /// DLS 的深度限制；其他算法忽略（IDDFS 使用配置的上限）
    pub limit: Option<usize>,
}

/// 通过校验的查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(PathResult),
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&PathResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            SearchOutcome::NotFound => None,
        }
    }

    /// 响应体：`{path, cost}` 或 `{message}`
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SearchOutcome::Found(result) => json!({
                "path": result.path,
                "cost": result.cost,
            }),
            SearchOutcome::NotFound => json!({
                "message": "no path found",
            }),
        }
    }
}

impl From<Option<PathResult>> for SearchOutcome {
    fn from(result: Option<PathResult>) -> Self {
        result.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

/// 按 `algorithm` 的前置条件检查请求
///
/// 起点和终点必须是图中节点，DLS 需要深度限制，有信息搜索需要目标坐标。
///
/// # 参数
/// - `algorithm`: 已解析的算法
/// - `graph`: 已构建的图
/// - `coordinates`: 节点坐标
/// - `start`: 起始节点
/// - `goal`: 目标节点
/// - `limit`: 请求中的深度限制
///
/// # 返回
/// 满足前置条件时返回 `Ok(())`
pub fn validate<N: NodeId>(
    algorithm: Algorithm,
    graph: &Graph<N>,
    coordinates: &Coordinates<N>,
    start: &N,
    goal: &N,
    limit: Option<usize>,
) -> SearchResult<()> {
    if !graph.contains(start) {
        return Err(SearchError::unknown_node(NodeRole::Start, start));
    }
    if !graph.contains(goal) {
        return Err(SearchError::unknown_node(NodeRole::Goal, goal));
    }

    if algorithm.needs_limit() && limit.is_none() {
        return Err(SearchError::MissingDepthLimit(algorithm.to_string()));
    }

    if algorithm.needs_coordinates() && !coordinates.contains_key(goal) {
        return Err(SearchError::missing_coordinates(goal));
    }

    if matches!(algorithm, Algorithm::UniformCost | Algorithm::AStar) && graph.is_unweighted() {
        log::warn!("图中没有权重，{} 将把每条边按 1 计算", algorithm);
    }

    Ok(())
}

/// 构建图之前拒绝负数、NaN 和无穷大权重
pub fn check_weights(edges: &[(String, f64)]) -> SearchResult<()> {
    match edges
        .iter()
        .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
    {
        Some((edge, weight)) => Err(SearchError::InvalidWeight {
            edge: edge.clone(),
            weight: *weight,
        }),
        None => Ok(()),
    }
}

/// 在已构建的图上运行已通过校验的查询
pub fn dispatch<N: NodeId>(
    algorithm: Algorithm,
    graph: &Graph<N>,
    coordinates: &Coordinates<N>,
    start: &N,
    goal: &N,
    limit: usize,
) -> SearchResult<Option<PathResult<N>>> {
    let result = match algorithm {
        Algorithm::Bfs => Bfs::search(graph, start, goal),
        Algorithm::Dfs => Dfs::search(graph, start, goal),
        Algorithm::DepthLimited => DepthLimited::search(graph, start, goal, limit),
        Algorithm::IterativeDeepening => IterativeDeepening::search(graph, start, goal, limit),
        Algorithm::UniformCost => UniformCost::search(graph, start, goal),
        Algorithm::Greedy => Greedy::search(graph, coordinates, start, goal),
        Algorithm::AStar => AStar::search(graph, coordinates, start, goal)?,
    };
    Ok(result)
}

/// 请求级搜索服务
#[derive(Debug, Clone, Default)]
pub struct SearchService {
    config: SearchConfig,
}

impl SearchService {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// 执行一次查询
    ///
    /// 校验顺序：权重、起点、终点、算法名、DLS 深度限制、目标坐标。
    pub fn run(&self, request: &SearchRequest) -> SearchResult<SearchOutcome> {
        check_weights(&request.edges)?;
        let graph = Graph::from_edges(request.edges.iter().map(|(label, w)| (label, *w)));

        // 节点标识在边标签、起止点和坐标键中统一去除首尾空白
        let start = request.start.trim().to_string();
        let goal = request.goal.trim().to_string();
        let coordinates: Coordinates = request
            .coordinates
            .iter()
            .map(|(node, point)| (node.trim().to_string(), *point))
            .collect();

        // 未知节点先于未知算法报告
        if !graph.contains(&start) {
            return Err(SearchError::unknown_node(NodeRole::Start, &start));
        }
        if !graph.contains(&goal) {
            return Err(SearchError::unknown_node(NodeRole::Goal, &goal));
        }

        let algorithm: Algorithm = request.algorithm.parse()?;
        validate(
            algorithm,
            &graph,
            &coordinates,
            &start,
            &goal,
            request.limit,
        )?;

        let limit = match algorithm {
            Algorithm::IterativeDeepening => {
                if let Some(ignored) = request.limit {
                    log::debug!(
                        "IDDFS 忽略请求的深度限制 {}，使用配置上限 {}",
                        ignored,
                        self.config.max_depth
                    );
                }
                self.config.max_depth
            }
            _ => request.limit.unwrap_or_default(),
        };

        let result = dispatch(
            algorithm,
            &graph,
            &coordinates,
            &start,
            &goal,
            limit,
        )?;

        match &result {
            Some(found) => log::info!(
                "{} {} -> {}: {} 跳，代价 {}",
                algorithm,
                start,
                goal,
                found.hops(),
                found.cost
            ),
            None => log::info!("{} {} -> {}: 无路径", algorithm, start, goal),
        }

        Ok(result.into())
    }
}
