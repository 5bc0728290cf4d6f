#![allow(dead_code)]

use std::path::PathBuf;

use hexpath_lib::Graph;

/// Seven-node weighted graph used across the search tests. Edges are added
/// in this order, which fixes each node's adjacency order.
pub fn letter_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for letter in ["A", "B", "C", "D", "E", "F", "G"] {
        graph.add_node(letter);
    }

    let edges = [
        ("A", "F", 2.0),
        ("A", "C", 3.0),
        ("B", "D", 1.0),
        ("B", "E", 2.0),
        ("B", "F", 6.0),
        ("B", "G", 2.0),
        ("C", "D", 4.0),
        ("C", "E", 1.0),
        ("C", "F", 2.0),
        ("E", "F", 3.0),
        ("G", "F", 5.0),
    ];
    for (from, to, weight) in edges {
        graph
            .add_weighted_edge(from, to, weight)
            .expect("fixture weights are valid");
    }
    graph
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
