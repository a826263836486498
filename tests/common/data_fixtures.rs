//! Graph fixtures and an independent shortest-path oracle

use std::collections::HashMap;

use pathsearch::core::graph::{Coordinates, Graph};
use pathsearch::services::search::SearchRequest;

pub fn node(i: usize) -> String {
    format!("n{}", i)
}

/// Triangle A-B:1, B-C:1, A-C:5 with coordinates giving h(A) = 2 towards C
pub fn triangle_request(algorithm: &str) -> SearchRequest {
    SearchRequest {
        edges: vec![
            ("A-B".to_string(), 1.0),
            ("B-C".to_string(), 1.0),
            ("A-C".to_string(), 5.0),
        ],
        coordinates: [
            ("A".to_string(), (0.0, 0.0)),
            ("B".to_string(), (1.0, 1.0)),
            ("C".to_string(), (2.0, 0.0)),
        ]
        .into_iter()
        .collect(),
        start: "A".to_string(),
        goal: "C".to_string(),
        algorithm: algorithm.to_string(),
        limit: None,
    }
}

/// Triangle plus an isolated pair D-E; D is unreachable from A
pub fn disconnected_request(algorithm: &str) -> SearchRequest {
    let mut request = triangle_request(algorithm);
    request.edges.push(("D-E".to_string(), 1.0));
    request.coordinates.insert("D".to_string(), (10.0, 10.0));
    request.coordinates.insert("E".to_string(), (11.0, 10.0));
    request.goal = "D".to_string();
    request.limit = Some(10);
    request
}

/// Random-graph description used by the property tests
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub node_count: usize,
    pub points: Vec<(f64, f64)>,
    /// (a, b, extra weight on top of the straight-line distance)
    pub edges: Vec<(usize, usize, f64)>,
}

impl RandomGraph {
    /// Weighted graph whose weights are never below the Euclidean distance,
    /// so the straight-line heuristic is admissible.
    pub fn build(&self) -> (Graph<String>, Coordinates) {
        let mut graph = Graph::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..self.node_count {
            graph.add_node(node(i));
        }

        for &(a, b, extra) in &self.edges {
            let (a, b) = (a % self.node_count, b % self.node_count);
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            let (pa, pb) = (self.points[a], self.points[b]);
            let straight = (pb.0 - pa.0).hypot(pb.1 - pa.1).ceil();
            graph.add_edge(node(a), node(b), straight + extra);
        }

        let coordinates = (0..self.node_count)
            .map(|i| (node(i), self.points[i]))
            .collect();
        (graph, coordinates)
    }
}

/// All-pairs shortest distances (Floyd-Warshall). With `hops` set every edge
/// counts as 1.
pub fn all_pairs(graph: &Graph<String>, hops: bool) -> HashMap<(String, String), f64> {
    let nodes: Vec<String> = graph.nodes().cloned().collect();
    let mut dist: HashMap<(String, String), f64> = HashMap::new();

    for a in &nodes {
        dist.insert((a.clone(), a.clone()), 0.0);
        for (b, w) in graph.neighbors(a) {
            let w = if hops { 1.0 } else { *w };
            let entry = dist.entry((a.clone(), b.clone())).or_insert(f64::INFINITY);
            if w < *entry {
                *entry = w;
            }
        }
    }

    for k in &nodes {
        for i in &nodes {
            for j in &nodes {
                let through = dist.get(&(i.clone(), k.clone())).copied().unwrap_or(f64::INFINITY)
                    + dist.get(&(k.clone(), j.clone())).copied().unwrap_or(f64::INFINITY);
                let current = dist.entry((i.clone(), j.clone())).or_insert(f64::INFINITY);
                if through < *current {
                    *current = through;
                }
            }
        }
    }

    dist
}
