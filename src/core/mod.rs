//! 核心类型：图模型、路径重建、启发式与错误

pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;

pub use error::{NodeRole, SearchError, SearchResult};
pub use graph::{Coordinates, Graph, NodeId};
pub use heuristic::{Heuristic, HeuristicPolicy};
pub use path::{PathResult, Predecessors};
