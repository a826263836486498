//! 搜索算法模块
//!
//! 无信息搜索：广度优先、深度优先、深度受限、迭代加深。
//! 有信息搜索：贪心最佳优先、A*。一致代价搜索即启发值为零的 A*。
//!
//! 每次调用各自分配开放列表、访问集合和前驱表，调用之间不保留状态。

pub mod astar;
pub mod bfs;
pub mod depth_limited;
pub mod dfs;
pub mod greedy;
pub mod iddfs;
pub mod uniform_cost;

pub use astar::AStar;
pub use bfs::Bfs;
pub use depth_limited::DepthLimited;
pub use dfs::Dfs;
pub use greedy::Greedy;
pub use iddfs::{IterativeDeepening, DEFAULT_MAX_DEPTH};
pub use uniform_cost::UniformCost;
