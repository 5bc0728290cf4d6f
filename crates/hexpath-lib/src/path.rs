use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Graph, NodeId};
use crate::queue::PriorityQueue;

/// Supported pathfinding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Breadth-first search (fewest edges, weights ignored).
    Bfs,
    /// Dijkstra's algorithm (lowest total weight).
    #[default]
    Dijkstra,
    /// A* search guided by a heuristic.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::Bfs => "bfs",
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for PathAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(PathAlgorithm::Bfs),
            "dijkstra" => Ok(PathAlgorithm::Dijkstra),
            "a-star" | "a_star" | "astar" => Ok(PathAlgorithm::AStar),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Ordered payloads from start to goal (inclusive) plus the path cost.
///
/// For weighted searches `distance` is the summed edge weight; for
/// breadth-first search it is the hop count.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<T> {
    pub nodes: Vec<T>,
    pub distance: f64,
}

impl<T> GraphPath<T> {
    /// Number of edges walked.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Heuristic that estimates nothing; A* with it explores like Dijkstra.
pub fn zero_heuristic<T>(_: &T) -> f64 {
    0.0
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Run the requested algorithm. A* uses [`zero_heuristic`].
    pub fn find_path(&self, algorithm: PathAlgorithm, from: &T, to: &T) -> Option<GraphPath<T>> {
        match algorithm {
            PathAlgorithm::Bfs => self.breadth_first_search(from, to),
            PathAlgorithm::Dijkstra => self.dijkstra(from, to),
            PathAlgorithm::AStar => self.a_star(from, to, zero_heuristic::<T>),
        }
    }

    /// Lowest-weight path via Dijkstra's algorithm. Returns `None` when either
    /// endpoint is absent or the goal is unreachable.
    pub fn dijkstra(&self, from: &T, to: &T) -> Option<GraphPath<T>> {
        let start = self.node_id(from)?;
        let goal = self.node_id(to)?;

        let mut distances = vec![f64::INFINITY; self.capacity()];
        let mut parents: Vec<Option<NodeId>> = vec![None; self.capacity()];
        let mut visited = vec![false; self.capacity()];
        let mut queue = PriorityQueue::new();
        let mut expanded = 0usize;

        distances[start.index()] = 0.0;
        queue.enqueue(start, 0.0);

        while let Some(current) = queue.dequeue() {
            // Improved distances are pushed again rather than decreased, so
            // older copies of a node surface here and are skipped.
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            expanded += 1;

            if current == goal {
                break;
            }

            let current_distance = distances[current.index()];
            for edge in self.neighbours(current) {
                let next = edge.target;
                if visited[next.index()] {
                    continue;
                }
                let next_distance = current_distance + edge.weight;
                if next_distance < distances[next.index()] {
                    distances[next.index()] = next_distance;
                    parents[next.index()] = Some(current);
                    queue.enqueue(next, next_distance);
                }
            }
        }

        let path = visited[goal.index()]
            .then(|| self.build_path(&parents, start, goal, distances[goal.index()]))
            .flatten();
        debug!(
            algorithm = %PathAlgorithm::Dijkstra,
            expanded,
            found = path.is_some(),
            "search finished"
        );
        path
    }

    /// A* search using `f = g + heuristic(node)`. The heuristic must not
    /// overestimate the remaining cost for the result to be optimal; this is
    /// not checked.
    pub fn a_star<H>(&self, from: &T, to: &T, heuristic: H) -> Option<GraphPath<T>>
    where
        H: Fn(&T) -> f64,
    {
        let start = self.node_id(from)?;
        let goal = self.node_id(to)?;

        let mut g_score = vec![f64::INFINITY; self.capacity()];
        let mut came_from: Vec<Option<NodeId>> = vec![None; self.capacity()];
        let mut open = PriorityQueue::new();
        let mut expanded = 0usize;
        let mut reached = false;

        g_score[start.index()] = 0.0;
        open.enqueue((start, 0.0), heuristic(from));

        while let Some((current, cost)) = open.dequeue() {
            if cost > g_score[current.index()] {
                continue;
            }
            expanded += 1;

            if current == goal {
                reached = true;
                break;
            }

            for edge in self.neighbours(current) {
                let next = edge.target;
                let tentative = cost + edge.weight;
                if tentative < g_score[next.index()] {
                    g_score[next.index()] = tentative;
                    came_from[next.index()] = Some(current);
                    let estimate = self.data(next).map(&heuristic).unwrap_or(0.0);
                    open.enqueue((next, tentative), tentative + estimate);
                }
            }
        }

        let path = reached
            .then(|| self.build_path(&came_from, start, goal, g_score[goal.index()]))
            .flatten();
        debug!(
            algorithm = %PathAlgorithm::AStar,
            expanded,
            found = path.is_some(),
            "search finished"
        );
        path
    }

    /// Fewest-edge path via breadth-first search; `distance` is the hop count.
    pub fn breadth_first_search(&self, from: &T, to: &T) -> Option<GraphPath<T>> {
        let start = self.node_id(from)?;
        let goal = self.node_id(to)?;
        if start == goal {
            return Some(GraphPath {
                nodes: vec![from.clone()],
                distance: 0.0,
            });
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; self.capacity()];
        let mut seen = vec![false; self.capacity()];
        let mut queue = VecDeque::new();
        let mut expanded = 0usize;

        seen[start.index()] = true;
        queue.push_back(start);

        let mut path = None;
        'search: while let Some(current) = queue.pop_front() {
            expanded += 1;
            for edge in self.neighbours(current) {
                let next = edge.target;
                if seen[next.index()] {
                    continue;
                }
                seen[next.index()] = true;
                parents[next.index()] = Some(current);
                if next == goal {
                    path = self.build_path(&parents, start, goal, 0.0);
                    break 'search;
                }
                queue.push_back(next);
            }
        }

        let path = path.map(|mut path: GraphPath<T>| {
            path.distance = path.hop_count() as f64;
            path
        });
        debug!(
            algorithm = %PathAlgorithm::Bfs,
            expanded,
            found = path.is_some(),
            "search finished"
        );
        path
    }

    fn build_path(
        &self,
        parents: &[Option<NodeId>],
        start: NodeId,
        goal: NodeId,
        distance: f64,
    ) -> Option<GraphPath<T>> {
        let mut ids = Vec::new();
        let mut current = Some(goal);
        while let Some(node) = current {
            ids.push(node);
            if node == start {
                break;
            }
            current = parents[node.index()];
        }
        if ids.last() != Some(&start) {
            return None;
        }
        ids.reverse();

        let nodes = ids
            .into_iter()
            .map(|id| self.data(id).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(GraphPath { nodes, distance })
    }
}
