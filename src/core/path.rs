//! 路径重建
//!
//! 每种搜索都为已发现的节点记录其来源节点，起点映射到 `None`。
//! 最终路径沿这条链从目标走回起点，再反转得到。

use std::collections::HashMap;

use serde::Serialize;

use crate::core::graph::NodeId;

/// 找到的路径及其代价
///
/// `cost` 的含义取决于算法：无信息搜索为跳数，基于代价的搜索为累计边权。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N = String> {
    pub path: Vec<N>,
    pub cost: f64,
}

impl<N> PathResult<N> {
    pub fn new(path: Vec<N>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// 以边数作为代价的路径
    pub fn from_hops(path: Vec<N>) -> Self {
        let hops = path.len().saturating_sub(1);
        Self {
            path,
            cost: hops as f64,
        }
    }

    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// 前驱表：节点 -> 到达它的节点
#[derive(Debug, Clone)]
pub struct Predecessors<N> {
    parents: HashMap<N, Option<N>>,
}

impl<N: NodeId> Predecessors<N> {
    /// 以 `start -> None` 初始化
    pub fn with_root(start: &N) -> Self {
        let mut parents = HashMap::new();
        parents.insert(start.clone(), None);
        Self { parents }
    }

    /// 有记录即视为已发现，包括根节点
    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(node)
    }

    /// 记录 `node` 的前驱（松弛时覆盖）
    pub fn set(&mut self, node: N, parent: N) {
        self.parents.insert(node, Some(parent));
    }

    /// `node` 的前驱；根节点和未知节点返回 `None`
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// 从 `goal` 回溯到根节点
    ///
    /// # 返回
    /// 从起点开始的路径
    pub fn reconstruct(&self, goal: &N) -> Vec<N> {
        let mut path = vec![goal.clone()];
        let mut current = goal;

        while let Some(parent) = self.parent(current) {
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_chain() {
        let mut preds = Predecessors::with_root(&"A");
        preds.set("B", "A");
        preds.set("C", "B");

        assert_eq!(preds.reconstruct(&"C"), vec!["A", "B", "C"]);
        assert_eq!(preds.reconstruct(&"A"), vec!["A"]);
    }

    #[test]
    fn test_overwrite_on_relaxation() {
        let mut preds = Predecessors::with_root(&"A");
        preds.set("C", "A");
        preds.set("B", "A");
        preds.set("C", "B");

        assert_eq!(preds.parent(&"C"), Some(&"B"));
        assert_eq!(preds.reconstruct(&"C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_root_has_no_parent() {
        let preds = Predecessors::with_root(&"A");
        assert!(preds.contains(&"A"));
        assert_eq!(preds.parent(&"A"), None);
        assert_eq!(preds.len(), 1);
    }

    #[test]
    fn test_from_hops() {
        let result = PathResult::from_hops(vec!["A", "B", "C"]);
        assert_eq!(result.cost, 2.0);
        assert_eq!(result.hops(), 2);

        let single = PathResult::from_hops(vec!["A"]);
        assert_eq!(single.cost, 0.0);
    }
}
