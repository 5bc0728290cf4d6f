use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};

/// Weight used by [`Graph::add_edge`].
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Opaque handle to a node owned by a [`Graph`].
///
/// Handles are never reused, so a handle to a removed node simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Undirected edge as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// A payload plus its adjacency list, in edge insertion order.
#[derive(Debug, Clone)]
pub struct GraphNode<T> {
    data: T,
    adjacent: Vec<Edge>,
}

impl<T> GraphNode<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            adjacent: Vec::new(),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn adjacent(&self) -> &[Edge] {
        &self.adjacent
    }

    pub fn weight_to(&self, target: NodeId) -> Option<f64> {
        self.adjacent
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    pub fn is_connected(&self, target: NodeId) -> bool {
        self.weight_to(target).is_some()
    }

    fn set_adjacent(&mut self, target: NodeId, weight: f64) {
        match self.adjacent.iter_mut().find(|edge| edge.target == target) {
            Some(edge) => edge.weight = weight,
            None => self.adjacent.push(Edge { target, weight }),
        }
    }

    fn remove_adjacent(&mut self, target: NodeId) {
        self.adjacent.retain(|edge| edge.target != target);
    }
}

/// Undirected weighted graph keyed by payload value.
///
/// Nodes live in a dense arena addressed by [`NodeId`]; a payload index maps
/// each distinct `T` to its handle. Every edge is stored on both endpoints
/// with the same weight.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Vec<Option<GraphNode<T>>>,
    index: HashMap<T, NodeId>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `data`, or return the handle it already has.
    pub fn add_node(&mut self, data: T) -> NodeId {
        if let Some(&id) = self.index.get(&data) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(data.clone(), id);
        self.nodes.push(Some(GraphNode::new(data)));
        id
    }

    /// Remove the node holding `data` and sever its edges on both sides.
    /// The returned node has an empty adjacency list.
    pub fn remove_node(&mut self, data: &T) -> Option<GraphNode<T>> {
        let id = self.index.remove(data)?;
        let mut removed = self.nodes.get_mut(id.0)?.take()?;

        for edge in removed.adjacent.drain(..) {
            if let Some(neighbour) = self.node_mut(edge.target) {
                neighbour.remove_adjacent(id);
            }
        }

        Some(removed)
    }

    /// Connect `from` and `to` with [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, from: T, to: T) -> Result<()> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Connect `from` and `to` in both directions, adding either endpoint if
    /// it is missing. Re-adding an existing edge replaces its weight.
    /// Self-loops are ignored.
    pub fn add_weighted_edge(&mut self, from: T, to: T, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }

        let from_id = self.add_node(from);
        let to_id = self.add_node(to);
        if from_id == to_id {
            debug!(node = from_id.0, "ignoring self-loop edge");
            return Ok(());
        }

        if let Some(node) = self.node_mut(from_id) {
            node.set_adjacent(to_id, weight);
        }
        if let Some(node) = self.node_mut(to_id) {
            node.set_adjacent(from_id, weight);
        }
        Ok(())
    }

    /// Remove the edge between `from` and `to`. Does nothing when either
    /// endpoint is missing.
    pub fn remove_edge(&mut self, from: &T, to: &T) {
        let (Some(from_id), Some(to_id)) = (self.node_id(from), self.node_id(to)) else {
            return;
        };
        if let Some(node) = self.node_mut(from_id) {
            node.remove_adjacent(to_id);
        }
        if let Some(node) = self.node_mut(to_id) {
            node.remove_adjacent(from_id);
        }
    }

    pub fn node_id(&self, data: &T) -> Option<NodeId> {
        self.index.get(data).copied()
    }

    pub fn get(&self, data: &T) -> Option<&GraphNode<T>> {
        self.node_id(data).and_then(|id| self.node(id))
    }

    pub fn contains(&self, data: &T) -> bool {
        self.index.contains_key(data)
    }

    /// Weight of the edge between two payloads, if they are connected.
    pub fn weight(&self, from: &T, to: &T) -> Option<f64> {
        let to_id = self.node_id(to)?;
        self.get(from)?.weight_to(to_id)
    }

    pub fn is_connected(&self, from: &T, to: &T) -> bool {
        self.weight(from, to).is_some()
    }
}

impl<T> Graph<T> {
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut GraphNode<T>> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(GraphNode::data)
    }

    /// Return the neighbours of a node; empty for unknown handles.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.node(id).map(GraphNode::adjacent).unwrap_or(&[])
    }

    /// Live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.as_ref().map(|node| (NodeId(index), node)))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes().map(|(_, node)| node.adjacent.len()).sum::<usize>() / 2
    }

    /// Upper bound on handle indices, used to size per-search scratch space.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }
}
