use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CubeCoord;
use crate::error::{Error, Result};

/// Whether hexagons are drawn with a vertex or a flat side at the top.
///
/// Each orientation exposes a different six-of-eight subset of [`Direction`]
/// for side neighbours and another for diagonal neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Pointy,
    Flat,
}

impl Orientation {
    /// Side directions in table order. Ring walks follow this order.
    pub fn sides(self) -> &'static [(Direction, [i8; 3]); 6] {
        match self {
            Orientation::Pointy => &POINTY_SIDES,
            Orientation::Flat => &FLAT_SIDES,
        }
    }

    /// Diagonal directions in table order.
    pub fn diagonals(self) -> &'static [(Direction, [i8; 3]); 6] {
        match self {
            Orientation::Pointy => &POINTY_DIAGONALS,
            Orientation::Flat => &FLAT_DIAGONALS,
        }
    }

    /// The side direction a ring walk starts from.
    pub fn ring_start(self) -> Direction {
        match self {
            Orientation::Pointy => Direction::West,
            Orientation::Flat => Direction::SouthWest,
        }
    }

    /// Unit offset for a side direction, or [`Error::InvalidDirection`].
    pub fn side(self, direction: Direction) -> Result<CubeCoord> {
        lookup(self.sides(), direction).ok_or(Error::InvalidDirection {
            direction,
            orientation: self,
        })
    }

    /// Offset for a diagonal direction, or [`Error::InvalidDirection`].
    pub fn diagonal(self, direction: Direction) -> Result<CubeCoord> {
        lookup(self.diagonals(), direction).ok_or(Error::InvalidDirection {
            direction,
            orientation: self,
        })
    }

    /// Resolve a named direction through the side table first, then the
    /// diagonal table.
    pub fn resolve(self, direction: Direction) -> Result<CubeCoord> {
        lookup(self.sides(), direction)
            .or_else(|| lookup(self.diagonals(), direction))
            .ok_or(Error::InvalidDirection {
                direction,
                orientation: self,
            })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Orientation::Pointy => "pointy",
            Orientation::Flat => "flat",
        };
        f.write_str(value)
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pointy" | "pointy-top" => Ok(Orientation::Pointy),
            "flat" | "flat-top" => Ok(Orientation::Flat),
            other => Err(format!("unknown orientation '{other}'")),
        }
    }
}

/// Eight named compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::North => "NORTH",
            Direction::NorthEast => "NORTH_EAST",
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTH_EAST",
            Direction::South => "SOUTH",
            Direction::SouthWest => "SOUTH_WEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTH_WEST",
        };
        f.write_str(value)
    }
}

/// Result tag of classifying the displacement between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborType {
    Side,
    Diagonal,
}

impl fmt::Display for NeighborType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborType::Side => f.write_str("side"),
            NeighborType::Diagonal => f.write_str("diagonal"),
        }
    }
}

/// Either a named direction or a raw displacement vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectionRef {
    Named(Direction),
    Vector(CubeCoord),
}

impl From<Direction> for DirectionRef {
    fn from(direction: Direction) -> Self {
        DirectionRef::Named(direction)
    }
}

impl From<CubeCoord> for DirectionRef {
    fn from(vector: CubeCoord) -> Self {
        DirectionRef::Vector(vector)
    }
}

fn lookup(table: &[(Direction, [i8; 3]); 6], direction: Direction) -> Option<CubeCoord> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == direction)
        .map(|(_, offset)| CubeCoord::from_offset(*offset))
}

const POINTY_SIDES: [(Direction, [i8; 3]); 6] = [
    (Direction::NorthEast, [1, -1, 0]),
    (Direction::East, [1, 0, -1]),
    (Direction::SouthEast, [0, 1, -1]),
    (Direction::SouthWest, [-1, 1, 0]),
    (Direction::West, [-1, 0, 1]),
    (Direction::NorthWest, [0, -1, 1]),
];

const POINTY_DIAGONALS: [(Direction, [i8; 3]); 6] = [
    (Direction::North, [1, -2, 1]),
    (Direction::NorthEast, [2, -1, -1]),
    (Direction::East, [1, 1, -2]),
    (Direction::South, [-1, 2, -1]),
    (Direction::SouthWest, [-2, 1, 1]),
    (Direction::NorthWest, [-1, -1, 2]),
];

const FLAT_SIDES: [(Direction, [i8; 3]); 6] = [
    (Direction::North, [0, -1, 1]),
    (Direction::NorthEast, [1, -1, 0]),
    (Direction::SouthEast, [1, 0, -1]),
    (Direction::South, [0, 1, -1]),
    (Direction::SouthWest, [-1, 1, 0]),
    (Direction::NorthWest, [-1, 0, 1]),
];

const FLAT_DIAGONALS: [(Direction, [i8; 3]); 6] = [
    (Direction::NorthEast, [1, -2, 1]),
    (Direction::East, [2, -1, -1]),
    (Direction::SouthEast, [1, 1, -2]),
    (Direction::SouthWest, [-1, 2, -1]),
    (Direction::West, [-2, 1, 1]),
    (Direction::NorthWest, [-1, -1, 2]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointy_has_no_north_side() {
        let error = Orientation::Pointy
            .side(Direction::North)
            .expect_err("north is diagonal-only for pointy grids");
        assert!(matches!(
            error,
            Error::InvalidDirection {
                direction: Direction::North,
                orientation: Orientation::Pointy
            }
        ));
    }

    #[test]
    fn flat_has_no_east_side() {
        assert!(Orientation::Flat.side(Direction::East).is_err());
        assert!(Orientation::Flat.diagonal(Direction::North).is_err());
    }

    #[test]
    fn resolve_prefers_side_table() {
        let offset = Orientation::Pointy.resolve(Direction::East).unwrap();
        assert_eq!(offset, CubeCoord::new(1.0, 0.0, -1.0));
        let offset = Orientation::Pointy.resolve(Direction::North).unwrap();
        assert_eq!(offset, CubeCoord::new(1.0, -2.0, 1.0));
    }

    #[test]
    fn every_table_entry_is_a_valid_coordinate() {
        for orientation in [Orientation::Pointy, Orientation::Flat] {
            for (_, offset) in orientation.sides().iter().chain(orientation.diagonals()) {
                assert!(CubeCoord::from_offset(*offset).is_valid());
            }
        }
    }

    #[test]
    fn orientation_parses_case_insensitively() {
        assert_eq!("FLAT".parse::<Orientation>(), Ok(Orientation::Flat));
        assert_eq!("pointy-top".parse::<Orientation>(), Ok(Orientation::Pointy));
        assert!("square".parse::<Orientation>().is_err());
    }
}
