//! A*算法模块
//!
//! 按 `g + h` 排序的最佳优先搜索，`g` 为累计边权，`h` 为到目标的直线距离。
//! 一致代价搜索是 `h = 0` 时的同一循环（见 [`super::uniform_cost`]）。
//!
//! 开放列表是允许重复条目的二叉堆：松弛节点时压入新条目，
//! 旧条目在节点关闭后出堆时跳过。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::error::SearchResult;
use crate::core::graph::{Coordinates, Graph, NodeId};
use crate::core::heuristic::{Heuristic, HeuristicPolicy};
use crate::core::path::{PathResult, Predecessors};

/// A*算法结构体
pub struct AStar;

/// 开放列表条目
///
/// 按 `f` 构成最小堆；`f` 相同时按入堆顺序出堆。
#[derive(Debug, Clone)]
struct FrontierEntry<N> {
    node: N,
    g: f64, // 从起点到当前节点的实际代价
    f: f64, // g + 启发式估计
    seq: u64,
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：f 小的优先，其次 seq 小的优先
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl AStar {
    /// 使用欧氏距离启发式查找最小权重路径
    ///
    /// 每个需要计算启发值的节点（起点、目标以及每个被松弛的邻居）都必须有
    /// 坐标，否则返回 [`SearchError::MissingCoordinates`](crate::core::error::SearchError)。
    /// 当每条边的权重不小于两端点的直线距离时，启发式可采纳，结果最优。
    ///
    /// # 参数
    /// - `graph`: 无向带权图
    /// - `coordinates`: 节点坐标
    /// - `start`: 起始节点
    /// - `goal`: 目标节点
    ///
    /// # 返回
    /// 最短路径和总代价；不可达时为 `Ok(None)`
    pub fn search<N: NodeId>(
        graph: &Graph<N>,
        coordinates: &Coordinates<N>,
        start: &N,
        goal: &N,
    ) -> SearchResult<Option<PathResult<N>>> {
        let heuristic = Heuristic::new(coordinates, goal, HeuristicPolicy::Strict);
        Self::best_first(graph, start, goal, |node| heuristic.estimate(node))
    }

    /// A* 与一致代价搜索共用的松弛循环
    ///
    /// 错误类型由估计函数决定，估计函数失败时搜索立即终止。
    pub(crate) fn best_first<N, H, E>(
        graph: &Graph<N>,
        start: &N,
        goal: &N,
        mut estimate: H,
    ) -> Result<Option<PathResult<N>>, E>
    where
        N: NodeId,
        H: FnMut(&N) -> Result<f64, E>,
    {
        let mut open_set: BinaryHeap<FrontierEntry<N>> = BinaryHeap::new();
        let mut closed_set: HashSet<N> = HashSet::new();
        let mut g_scores: HashMap<N, f64> = HashMap::new();
        let mut parents = Predecessors::with_root(start);
        let mut seq: u64 = 0;

        g_scores.insert(start.clone(), 0.0);
        open_set.push(FrontierEntry {
            node: start.clone(),
            g: 0.0,
            f: estimate(start)?,
            seq,
        });

        while let Some(current) = open_set.pop() {
            if closed_set.contains(&current.node) {
                continue;
            }

            log::trace!(
                "展开 '{}' g={:.2} h={:.2} f={:.2}",
                current.node,
                current.g,
                current.f - current.g,
                current.f
            );

            if current.node == *goal {
                log::debug!(
                    "最佳优先搜索到达 '{}'，代价 {}，已关闭 {} 个节点",
                    goal,
                    current.g,
                    closed_set.len()
                );
                return Ok(Some(PathResult::new(parents.reconstruct(goal), current.g)));
            }

            closed_set.insert(current.node.clone());

            for (neighbor, weight) in graph.neighbors(&current.node) {
                if closed_set.contains(neighbor) {
                    continue;
                }

                let tentative = current.g + weight;
                let improves = g_scores
                    .get(neighbor)
                    .map_or(true, |known| tentative < *known);

                if improves {
                    g_scores.insert(neighbor.clone(), tentative);
                    parents.set(neighbor.clone(), current.node.clone());

                    seq += 1;
                    open_set.push(FrontierEntry {
                        node: neighbor.clone(),
                        g: tentative,
                        f: tentative + estimate(neighbor)?,
                        seq,
                    });
                }
            }
        }

        log::debug!("最佳优先搜索关闭 {} 个节点后未到达 '{}'", closed_set.len(), goal);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SearchError;

    fn triangle() -> (Graph<&'static str>, Coordinates<&'static str>) {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("A", "C", 5.0);

        // 目标为 C 时 h(A) = 2, h(B) = 1
        let mut coords = Coordinates::new();
        coords.insert("A", (0.0, 0.0));
        coords.insert("B", (1.0, 0.0));
        coords.insert("C", (2.0, 0.0));
        (graph, coords)
    }

    #[test]
    fn test_triangle_prefers_cheap_detour() {
        let (g, coords) = triangle();

        let result = AStar::search(&g, &coords, &"A", &"C")
            .expect("Search should not fail in test")
            .expect("Path should exist in test");
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_relaxation_rewrites_predecessor() {
        // C 先由 S 以代价 10 到达，之后经 A 以代价 2 到达
        let mut g = Graph::new();
        g.add_edge("S", "C", 10.0);
        g.add_edge("S", "A", 1.0);
        g.add_edge("A", "C", 1.0);
        g.add_edge("C", "G", 1.0);

        let mut coords = Coordinates::new();
        for node in ["S", "A", "C", "G"] {
            coords.insert(node, (0.0, 0.0));
        }

        let result = AStar::search(&g, &coords, &"S", &"G")
            .expect("Search should not fail in test")
            .expect("Path should exist in test");
        assert_eq!(result.path, vec!["S", "A", "C", "G"]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_missing_coordinates_is_fatal() {
        let (g, mut coords) = triangle();
        coords.remove("B");

        let err = AStar::search(&g, &coords, &"A", &"C").expect_err("Search should fail in test");
        assert_eq!(err, SearchError::missing_coordinates("B"));
    }

    #[test]
    fn test_missing_goal_coordinates_is_fatal() {
        let (g, mut coords) = triangle();
        coords.remove("C");

        let err = AStar::search(&g, &coords, &"A", &"C").expect_err("Search should fail in test");
        assert_eq!(err, SearchError::missing_coordinates("C"));
    }

    #[test]
    fn test_unreachable_goal() {
        let (mut g, mut coords) = triangle();
        g.add_edge("X", "Y", 1.0);
        coords.insert("Y", (9.0, 9.0));
        coords.insert("X", (8.0, 8.0));

        let result = AStar::search(&g, &coords, &"A", &"Y").expect("Search should not fail in test");
        assert!(result.is_none());
    }

    #[test]
    fn test_equal_keys_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for (seq, node) in ["first", "second", "third"].into_iter().enumerate() {
            heap.push(FrontierEntry {
                node,
                g: 1.0,
                f: 1.0,
                seq: seq as u64,
            });
        }
        heap.push(FrontierEntry {
            node: "cheapest",
            g: 0.5,
            f: 0.5,
            seq: 9,
        });

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["cheapest", "first", "second", "third"]);
    }
}
