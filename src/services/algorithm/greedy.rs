//! 贪心最佳优先搜索模块
//!
//! 开放列表只按到目标的直线距离排序，累计代价仅用于报告。
//! 没有坐标的节点估计值为 0，会被提前展开而不是报错。

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::graph::{Coordinates, Graph, NodeId};
use crate::core::heuristic::{Heuristic, HeuristicPolicy};
use crate::core::path::{PathResult, Predecessors};

/// 贪心搜索结构体
pub struct Greedy;

impl Greedy {
    /// 总是展开看起来离目标最近的节点
    ///
    /// # 参数
    /// - `graph`: 无向带权图
    /// - `coordinates`: 节点坐标，缺失的节点按 0 估计
    /// - `start`: 起始节点
    /// - `goal`: 目标节点
    ///
    /// # 返回
    /// 找到的路径及其累计权重（不一定最小）
    pub fn search<N: NodeId>(
        graph: &Graph<N>,
        coordinates: &Coordinates<N>,
        start: &N,
        goal: &N,
    ) -> Option<PathResult<N>> {
        let heuristic = Heuristic::new(coordinates, goal, HeuristicPolicy::ZeroFallback);

        let mut frontier: VecDeque<(f64, N)> = VecDeque::new();
        let mut queued: HashSet<N> = HashSet::new();
        let mut visited: HashSet<N> = HashSet::new();
        let mut cost_total: HashMap<N, f64> = HashMap::new();
        let mut parents = Predecessors::with_root(start);

        frontier.push_back((0.0, start.clone()));
        queued.insert(start.clone());
        cost_total.insert(start.clone(), 0.0);

        while let Some((_, current)) = frontier.pop_front() {
            queued.remove(&current);

            if current == *goal {
                let cost = cost_total.get(goal).copied().unwrap_or_default();
                log::debug!("贪心搜索到达 '{}'，共展开 {} 个节点", goal, visited.len());
                return Some(PathResult::new(parents.reconstruct(goal), cost));
            }

            visited.insert(current.clone());
            let base = cost_total.get(&current).copied().unwrap_or_default();

            for (neighbor, weight) in graph.neighbors(&current) {
                if visited.contains(neighbor) || queued.contains(neighbor) {
                    continue;
                }

                parents.set(neighbor.clone(), current.clone());
                cost_total.insert(neighbor.clone(), base + weight);

                // ZeroFallback 不会返回错误
                let h = heuristic.estimate(neighbor).unwrap_or(0.0);
                let at = frontier.partition_point(|(queued_h, _)| *queued_h <= h);
                frontier.insert(at, (h, neighbor.clone()));
                queued.insert(neighbor.clone());
            }
        }

        log::debug!("贪心搜索展开 {} 个节点后未到达 '{}'", visited.len(), goal);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_heuristic_not_cost() {
        // A-B-G 在空间上更近，但 B-G 代价很高
        let mut g = Graph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 1.0);
        g.add_edge("B", "G", 100.0);
        g.add_edge("C", "G", 1.0);

        let mut coords = Coordinates::new();
        coords.insert("A", (0.0, 0.0));
        coords.insert("B", (4.0, 0.0));
        coords.insert("C", (0.0, 3.0));
        coords.insert("G", (5.0, 0.0));

        let result = Greedy::search(&g, &coords, &"A", &"G").expect("Path should exist in test");
        assert_eq!(result.path, vec!["A", "B", "G"]);
        assert_eq!(result.cost, 101.0);
    }

    #[test]
    fn test_frontier_is_globally_sorted() {
        // 展开 A 后开放列表为 [C(h=1), B(h=6)]；C 的子节点 D 的 h=5，
        // 虽然 B 先入队，D 仍先于 B 展开
        let mut g = Graph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 1.0);
        g.add_edge("C", "D", 1.0);
        g.add_edge("D", "G", 1.0);
        g.add_edge("B", "G", 1.0);

        let mut coords = Coordinates::new();
        coords.insert("A", (0.0, 0.0));
        coords.insert("B", (-6.0, 0.0));
        coords.insert("C", (-1.0, 0.0));
        coords.insert("D", (-5.0, 0.0));
        coords.insert("G", (0.0, 0.0));

        let result = Greedy::search(&g, &coords, &"A", &"G").expect("Path should exist in test");
        assert_eq!(result.path, vec!["A", "C", "D", "G"]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_missing_coordinates_fall_back_to_zero() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 2.0);
        g.add_edge("B", "C", 2.0);

        let coords: Coordinates<&str> = Coordinates::new();
        let result = Greedy::search(&g, &coords, &"A", &"C").expect("Path should exist in test");
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.cost, 4.0);
    }

    #[test]
    fn test_unreachable() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("C", "D", 1.0);
        let coords: Coordinates<&str> = Coordinates::new();
        assert!(Greedy::search(&g, &coords, &"A", &"D").is_none());
    }
}
