//! Hex maps: the persisted map document and the in-memory world built from it.
//!
//! A [`WorldMap`] keeps every hex in a lookup keyed by
//! [`CubeCoord::to_key`] and mirrors grid adjacency in a [`Graph`]: each hex
//! is linked to every present side neighbour with weight 1. Paths are then
//! answered by the graph searches.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::hex::{sort_by_rows, AxialCoord, CubeCoord, Orientation};
use crate::path::PathAlgorithm;

/// Ground type of a single hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Grass,
    Forest,
    River,
    Ocean,
    Desert,
    Mountain,
    Snow,
    Tundra,
}

impl Terrain {
    pub const ALL: [Terrain; 8] = [
        Terrain::Grass,
        Terrain::Forest,
        Terrain::River,
        Terrain::Ocean,
        Terrain::Desert,
        Terrain::Mountain,
        Terrain::Snow,
        Terrain::Tundra,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Terrain::Grass => "grass",
            Terrain::Forest => "forest",
            Terrain::River => "river",
            Terrain::Ocean => "ocean",
            Terrain::Desert => "desert",
            Terrain::Mountain => "mountain",
            Terrain::Snow => "snow",
            Terrain::Tundra => "tundra",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One record of a map document: `{"coord": [q, r], "terrain": "grass"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexMetadata {
    pub coord: AxialCoord,
    pub terrain: Terrain,
}

/// The persisted form of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub name: String,
    pub hexes: Vec<HexMetadata>,
}

impl MapDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading map document");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// A document covering every hex within `radius` of the origin, with
    /// random terrain.
    pub fn random<R: Rng + ?Sized>(name: impl Into<String>, radius: u32, rng: &mut R) -> Self {
        Self {
            name: name.into(),
            hexes: generate_random_map(radius, rng),
        }
    }
}

/// Records for every hex within `radius` of the origin, laid out row by row
/// (ascending r, then ascending s) with uniformly random terrain.
pub fn generate_random_map<R: Rng + ?Sized>(radius: u32, rng: &mut R) -> Vec<HexMetadata> {
    let mut coords = CubeCoord::ORIGIN.range(radius);
    sort_by_rows(&mut coords);
    coords
        .into_iter()
        .map(|coord| HexMetadata {
            coord: coord.to_axial(),
            terrain: Terrain::ALL.choose(rng).copied().unwrap_or_default(),
        })
        .collect()
}

/// A hex placed on a [`WorldMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hex {
    pub coord: CubeCoord,
    pub terrain: Terrain,
}

impl Hex {
    pub fn new(coord: CubeCoord, terrain: Terrain) -> Self {
        Self { coord, terrain }
    }

    pub fn key(&self) -> String {
        self.coord.to_key()
    }

    /// Build a hex from a document record, rejecting coordinates that are not
    /// whole-number hex centres.
    pub fn from_metadata(metadata: &HexMetadata) -> Result<Self> {
        let cube = metadata.coord.to_cube();
        let coord = CubeCoord::from_values(cube.q, cube.r, cube.s)?;
        if coord.round() != coord {
            return Err(Error::OffGridCoordinate {
                q: coord.q,
                r: coord.r,
                s: coord.s,
            });
        }
        Ok(Self::new(coord, metadata.terrain))
    }

    pub fn to_metadata(&self) -> HexMetadata {
        HexMetadata {
            coord: self.coord.to_axial(),
            terrain: self.terrain,
        }
    }
}

/// Ordered hexes of a path across a [`WorldMap`] plus its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPath {
    pub algorithm: PathAlgorithm,
    pub hexes: Vec<Hex>,
    pub cost: f64,
}

impl MapPath {
    pub fn hop_count(&self) -> usize {
        self.hexes.len().saturating_sub(1)
    }
}

/// A named set of hexes with their adjacency graph.
#[derive(Debug, Clone)]
pub struct WorldMap {
    name: String,
    orientation: Orientation,
    hexes: HashMap<String, Hex>,
    graph: Graph<String>,
}

impl WorldMap {
    /// Build a map from hexes. Duplicate coordinates are rejected.
    pub fn new(
        name: impl Into<String>,
        hexes: impl IntoIterator<Item = Hex>,
        orientation: Orientation,
    ) -> Result<Self> {
        let mut map = Self {
            name: name.into(),
            orientation,
            hexes: HashMap::new(),
            graph: Graph::new(),
        };

        for hex in hexes {
            let key = hex.key();
            if map.hexes.contains_key(&key) {
                return Err(Error::DuplicateHex { key });
            }
            map.graph.add_node(key.clone());
            map.hexes.insert(key, hex);
        }

        let coords: Vec<CubeCoord> = map.hexes().map(|hex| hex.coord).collect();
        for coord in coords {
            map.link_neighbours(coord)?;
        }

        info!(
            name = %map.name,
            hexes = map.len(),
            edges = map.graph.edge_count(),
            orientation = %orientation,
            "built world map"
        );
        Ok(map)
    }

    pub fn from_document(document: &MapDocument, orientation: Orientation) -> Result<Self> {
        let hexes = document
            .hexes
            .iter()
            .map(Hex::from_metadata)
            .collect::<Result<Vec<_>>>()?;
        Self::new(document.name.clone(), hexes, orientation)
    }

    pub fn from_path(path: &Path, orientation: Orientation) -> Result<Self> {
        Self::from_document(&MapDocument::from_path(path)?, orientation)
    }

    /// Records in insertion order.
    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            name: self.name.clone(),
            hexes: self.hexes().map(Hex::to_metadata).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn get(&self, coord: &CubeCoord) -> Option<&Hex> {
        self.hexes.get(&coord.to_key())
    }

    pub fn contains(&self, coord: &CubeCoord) -> bool {
        self.hexes.contains_key(&coord.to_key())
    }

    /// Hexes in insertion order.
    pub fn hexes(&self) -> impl Iterator<Item = &Hex> {
        self.graph
            .nodes()
            .filter_map(|(_, node)| self.hexes.get(node.data()))
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Place a hex and link it to the neighbours already on the map. Returns
    /// the hex it replaced, if any; a replaced hex keeps its edges.
    pub fn insert_hex(&mut self, hex: Hex) -> Result<Option<Hex>> {
        let key = hex.key();
        self.graph.add_node(key.clone());
        let previous = self.hexes.insert(key, hex);
        self.link_neighbours(hex.coord)?;
        Ok(previous)
    }

    /// Take a hex off the map, severing its edges.
    pub fn remove_hex(&mut self, coord: &CubeCoord) -> Option<Hex> {
        let key = coord.to_key();
        self.graph.remove_node(&key);
        self.hexes.remove(&key)
    }

    /// Path between two hexes. A* is guided by hex distance, which never
    /// overestimates on a unit-weight grid.
    pub fn find_path(
        &self,
        algorithm: PathAlgorithm,
        from: &CubeCoord,
        to: &CubeCoord,
    ) -> Option<MapPath> {
        let from_key = from.to_key();
        let to_key = to.to_key();
        let goal = *to;

        let path = match algorithm {
            PathAlgorithm::AStar => self.graph.a_star(&from_key, &to_key, |key| {
                self.hexes
                    .get(key)
                    .map(|hex| hex.coord.distance(goal))
                    .unwrap_or(0.0)
            }),
            other => self.graph.find_path(other, &from_key, &to_key),
        }?;

        let hexes = path
            .nodes
            .iter()
            .map(|key| self.hexes.get(key).copied())
            .collect::<Option<Vec<_>>>()?;
        Some(MapPath {
            algorithm,
            hexes,
            cost: path.distance,
        })
    }

    fn link_neighbours(&mut self, coord: CubeCoord) -> Result<()> {
        let key = coord.to_key();
        for neighbour in coord.neighbors(self.orientation) {
            let neighbour_key = neighbour.to_key();
            if self.hexes.contains_key(&neighbour_key) {
                self.graph.add_edge(key.clone(), neighbour_key)?;
            }
        }
        Ok(())
    }
}
