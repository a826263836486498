//! PathSearch - uninformed and informed path search over weighted graphs
//!
//! Breadth-first, depth-first, depth-limited, iterative-deepening,
//! uniform-cost, greedy best-first and A* search over an undirected graph
//! with optional 2-D node coordinates, plus an HTTP boundary and a CLI.

#[cfg(feature = "server")]
pub mod api;
pub mod common;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;
