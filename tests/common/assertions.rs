//! Assertion helpers

use pathsearch::core::graph::Graph;

/// Assert `path` is a simple walk from `start` to `goal` along graph edges.
pub fn assert_valid_walk(graph: &Graph<String>, path: &[String], start: &str, goal: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start), "path must begin at start");
    assert_eq!(path.last().map(String::as_str), Some(goal), "path must end at goal");

    for pair in path.windows(2) {
        assert!(
            graph.weight(&pair[0], &pair[1]).is_some(),
            "'{}' and '{}' are not adjacent in path {:?}",
            pair[0],
            pair[1],
            path
        );
    }

    let mut seen = std::collections::HashSet::new();
    for node in path {
        assert!(seen.insert(node), "node '{}' repeats in path {:?}", node, path);
    }
}

/// Sum of edge weights along `path`
pub fn path_weight(graph: &Graph<String>, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).expect("consecutive nodes should be adjacent"))
        .sum()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
