//! 图模型
//!
//! 无向带权邻接表。每个节点的邻居按边加入的顺序保存，
//! 这个顺序就是无信息搜索的平局顺序，因此不排序。

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// 边标签中两个端点的分隔符，例如 `"A-B"`
pub const EDGE_SEPARATOR: char = '-';

/// 输入未给出权重时使用的默认权重
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// 节点标识需要满足的约束
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> NodeId for T {}

/// 节点的二维坐标，仅供启发式函数使用
pub type Coordinates<N = String> = HashMap<N, (f64, f64)>;

/// 单次查询内不可变的邻接结构
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    adjacency: HashMap<N, Vec<(N, f64)>>,
    order: Vec<N>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一条无向边，两个方向使用相同权重
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) {
        self.entry(a.clone()).push((b.clone(), weight));
        self.entry(b).push((a, weight));
    }

    /// 添加孤立节点；节点已存在时不做任何事
    pub fn add_node(&mut self, node: N) {
        self.entry(node);
    }

    fn entry(&mut self, node: N) -> &mut Vec<(N, f64)> {
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.adjacency.entry(node).or_default()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// 按插入顺序返回 `node` 的邻居；未知节点返回空切片
    pub fn neighbors(&self, node: &N) -> &[(N, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 按首次出现顺序遍历节点
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// 无向边数量（每条边存储两次）
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// `a` 与 `b` 之间第一条边的权重
    pub fn weight(&self, a: &N, b: &N) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|(neighbor, _)| neighbor == b)
            .map(|(_, weight)| *weight)
    }

    /// 所有边都是默认权重时返回 true
    pub fn is_unweighted(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .all(|(_, weight)| *weight == DEFAULT_WEIGHT)
    }
}

impl Graph<String> {
    /// 从 `"A-B" -> 权重` 列表构建图
    ///
    /// 每个标签只按 [`EDGE_SEPARATOR`] 切分一次，无法得到两个非空端点的
    /// 标签直接丢弃。同一对端点（`A-B` 与 `B-A` 视为同一对）只保留一条边：
    /// 位置取第一次出现，权重取最后一次出现。
    ///
    /// # 参数
    /// - `edges`: 按输入顺序排列的边标签与权重
    ///
    /// # 返回
    /// 对称的邻接结构
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut unique: Vec<(String, String, f64)> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for (label, weight) in edges {
            let Some((a, b)) = parse_edge_label(label.as_ref()) else {
                log::debug!("丢弃格式错误的边标签 '{}'", label.as_ref());
                continue;
            };

            let key = if a <= b {
                (a.to_string(), b.to_string())
            } else {
                (b.to_string(), a.to_string())
            };
            match index.get(&key) {
                Some(&at) => {
                    log::debug!("边 '{}' 重复，使用最后的权重 {}", label.as_ref(), weight);
                    unique[at].2 = weight;
                }
                None => {
                    index.insert(key, unique.len());
                    unique.push((a.to_string(), b.to_string(), weight));
                }
            }
        }

        let mut graph = Graph::new();
        for (a, b, weight) in unique {
            graph.add_edge(a, b, weight);
        }
        graph
    }
}

/// 把边标签切分成两个端点
pub fn parse_edge_label(label: &str) -> Option<(&str, &str)> {
    let (a, b) = label.split_once(EDGE_SEPARATOR)?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a, b))
}
