//! 公共输入工具

pub mod graph_file;

pub use graph_file::{load_graph_file, parse_graph_file, GraphFile};
