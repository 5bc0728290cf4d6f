//! Hexpath library entry points.
//!
//! This crate provides cube and axial hex coordinates with the usual grid
//! algebra (distance, lines, ranges, rings, rotation), an undirected weighted
//! graph with Dijkstra, A* and breadth-first search, and hex maps that tie the
//! two together. The CLI only depends on what is exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod hex;
pub mod map;
pub mod path;
pub mod queue;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphNode, NodeId, DEFAULT_WEIGHT};
pub use hex::{
    intersection, sort_by_rows, AxialCoord, CubeCoord, Direction, DirectionBetween, DirectionRef,
    NeighborType, Orientation,
};
pub use map::{generate_random_map, Hex, HexMetadata, MapDocument, MapPath, Terrain, WorldMap};
pub use path::{zero_heuristic, GraphPath, PathAlgorithm};
pub use queue::PriorityQueue;
