//! 服务层
//!
//! 搜索算法，以及负责校验请求并分派给算法的请求级服务。

pub mod algorithm;
pub mod search;

pub use algorithm::*;
pub use search::{Algorithm, SearchOutcome, SearchRequest, SearchService};
