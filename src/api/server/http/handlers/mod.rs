pub mod health;
pub mod search;

pub use health::check;
pub use search::{execute, SearchBody};
