//! 直线距离启发式
//!
//! A* 与贪心最佳优先对没有坐标的节点处理不同：A* 拒绝查询，
//! 贪心把该节点估值为 0。这个差异由 [`HeuristicPolicy`] 显式表达。

use crate::core::error::{SearchError, SearchResult};
use crate::core::graph::{Coordinates, NodeId};

/// 节点或目标缺少坐标时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicPolicy {
    /// 缺少坐标视为前置条件失败
    Strict,
    /// 缺少坐标时估值为 0
    ZeroFallback,
}

/// 两点间的欧氏距离
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// 两个节点间的欧氏距离
///
/// # 返回
/// 任一节点没有坐标时返回 `None`
pub fn distance<N: NodeId>(a: &N, b: &N, coordinates: &Coordinates<N>) -> Option<f64> {
    let pa = coordinates.get(a)?;
    let pb = coordinates.get(b)?;
    Some(euclidean(*pa, *pb))
}

/// 绑定到单次查询的到目标距离估计器
pub struct Heuristic<'a, N> {
    coordinates: &'a Coordinates<N>,
    goal: &'a N,
    policy: HeuristicPolicy,
}

impl<'a, N: NodeId> Heuristic<'a, N> {
    pub fn new(coordinates: &'a Coordinates<N>, goal: &'a N, policy: HeuristicPolicy) -> Self {
        Self {
            coordinates,
            goal,
            policy,
        }
    }

    /// 估计从 `node` 到目标的剩余代价
    ///
    /// # 参数
    /// - `node`: 待估值的节点
    ///
    /// # 返回
    /// 估计值；严格策略下缺少坐标返回 `MissingCoordinates`
    pub fn estimate(&self, node: &N) -> SearchResult<f64> {
        match distance(node, self.goal, self.coordinates) {
            Some(h) => Ok(h),
            None => match self.policy {
                HeuristicPolicy::ZeroFallback => Ok(0.0),
                HeuristicPolicy::Strict => {
                    let missing = if self.coordinates.contains_key(node) {
                        self.goal
                    } else {
                        node
                    };
                    Err(SearchError::missing_coordinates(missing))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Coordinates<&'static str> {
        let mut coords = Coordinates::new();
        coords.insert("A", (0.0, 0.0));
        coords.insert("B", (3.0, 4.0));
        coords
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(euclidean((1.0, 1.0), (1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_distance_missing() {
        let coords = coords();
        assert_eq!(distance(&"A", &"B", &coords), Some(5.0));
        assert_eq!(distance(&"A", &"C", &coords), None);
    }

    #[test]
    fn test_strict_policy_reports_missing_node() {
        let coords = coords();
        let h = Heuristic::new(&coords, &"B", HeuristicPolicy::Strict);
        assert_eq!(h.estimate(&"A"), Ok(5.0));
        assert_eq!(
            h.estimate(&"C"),
            Err(SearchError::missing_coordinates("C"))
        );
    }

    #[test]
    fn test_strict_policy_reports_missing_goal() {
        let coords = coords();
        let h = Heuristic::new(&coords, &"Z", HeuristicPolicy::Strict);
        assert_eq!(
            h.estimate(&"A"),
            Err(SearchError::missing_coordinates("Z"))
        );
    }

    #[test]
    fn test_zero_fallback() {
        let coords = coords();
        let h = Heuristic::new(&coords, &"B", HeuristicPolicy::ZeroFallback);
        assert_eq!(h.estimate(&"C"), Ok(0.0));
    }
}
