//! Hex-grid coordinate algebra.
//!
//! Positions use cube coordinates `(q, r, s)` with `q + r + s = 0`; see
//! <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>. Components
//! are stored as `f64` because interpolation and scaling legitimately produce
//! fractional intermediates. Call [`CubeCoord::round`] before comparing derived
//! values: equality is exact component-wise float comparison.
//!
//! Nothing in this module holds global state. Operations whose result depends
//! on how hexagons are drawn take an explicit [`Orientation`].

mod direction;
mod region;

pub use direction::{Direction, DirectionRef, NeighborType, Orientation};
pub use region::intersection;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// Offset added to a line's destination so that lines running exactly along
/// hex edges always pick the same side.
pub const LINE_EPSILON: CubeCoord = CubeCoord::new(1e-6, 2e-6, -3e-6);

/// A hexagon position (or displacement) in cube coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct CubeCoord {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

/// Classification returned by [`CubeCoord::direction_between`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionBetween {
    /// Unit side vector, or the diagonal vector scaled down to its smallest
    /// integer multiple.
    pub vector: CubeCoord,
    pub neighbor_type: NeighborType,
}

impl CubeCoord {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a coordinate without checking the `q + r + s = 0` invariant.
    /// Use [`CubeCoord::from_values`] for untrusted input.
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// The zero coordinate.
    pub const fn create() -> Self {
        Self::ORIGIN
    }

    /// Build a validated coordinate.
    pub fn from_values(q: f64, r: f64, s: f64) -> Result<Self> {
        let coord = Self::new(q, r, s);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(Error::InvalidCoordinate { q, r, s })
        }
    }

    /// Replace all three components, validating the result. On error `self`
    /// is left untouched.
    pub fn set_values(&mut self, q: f64, r: f64, s: f64) -> Result<()> {
        *self = Self::from_values(q, r, s)?;
        Ok(())
    }

    pub(crate) fn from_offset(offset: [i8; 3]) -> Self {
        Self::new(offset[0].into(), offset[1].into(), offset[2].into())
    }

    /// `true` when the components sum to zero after rounding, which tolerates
    /// drift from repeated scale/lerp operations.
    pub fn is_valid(&self) -> bool {
        round_half_up(self.q + self.r + self.s) == 0.0
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.q * k, self.r * k, self.s * k)
    }

    /// Linear interpolation from `self` (t = 0) towards `other` (t = 1).
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
            self.s + (other.s - self.s) * t,
        )
    }

    /// Snap to the nearest valid hex. The component with the largest rounding
    /// error is recomputed from the other two; q is checked first, then r,
    /// and s absorbs every remaining tie.
    pub fn round(self) -> Self {
        let mut q = round_half_up(self.q);
        let mut r = round_half_up(self.r);
        let mut s = round_half_up(self.s);

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        Self::new(q, r, s)
    }

    /// Hex distance: the minimum number of single steps between two hexes.
    pub fn distance(self, other: Self) -> f64 {
        let delta = self - other;
        delta.q.abs().max(delta.r.abs()).max(delta.s.abs())
    }

    /// Classify the displacement from `self` to `destination` as a side or
    /// diagonal direction. Returns `None` when the two hexes are not related
    /// by a whole multiple of either.
    pub fn direction_between(self, destination: Self) -> Option<DirectionBetween> {
        let delta = destination - self;

        if delta.q == 0.0 || delta.r == 0.0 || delta.s == 0.0 {
            return Some(DirectionBetween {
                vector: Self::new(sign(delta.q), sign(delta.r), sign(delta.s)),
                neighbor_type: NeighborType::Side,
            });
        }

        let components = [delta.q, delta.r, delta.s];
        let min = delta.q.abs().min(delta.r.abs()).min(delta.s.abs());
        let min_count = components.iter().filter(|c| c.abs() == min).count();
        if min_count != 2 {
            return None;
        }

        Some(DirectionBetween {
            vector: Self::new(delta.q / min, delta.r / min, delta.s / min),
            neighbor_type: NeighborType::Diagonal,
        })
    }

    /// `self + direction * distance`. Named directions are looked up in the
    /// side table, then the diagonal table, of `orientation`.
    pub fn at_distance(
        self,
        direction: impl Into<DirectionRef>,
        distance: f64,
        orientation: Orientation,
    ) -> Result<Self> {
        let vector = match direction.into() {
            DirectionRef::Named(direction) => orientation.resolve(direction)?,
            DirectionRef::Vector(vector) => vector,
        };
        Ok(self + vector.scale(distance))
    }

    pub fn neighbor(self, direction: Direction, orientation: Orientation) -> Result<Self> {
        Ok(self + orientation.side(direction)?)
    }

    pub fn diagonal_neighbor(self, direction: Direction, orientation: Orientation) -> Result<Self> {
        Ok(self + orientation.diagonal(direction)?)
    }

    /// The six side neighbours, in table order.
    pub fn neighbors(self, orientation: Orientation) -> [Self; 6] {
        orientation
            .sides()
            .map(|(_, offset)| self + Self::from_offset(offset))
    }

    /// The six diagonal neighbours, in table order.
    pub fn diagonal_neighbors(self, orientation: Orientation) -> [Self; 6] {
        orientation
            .diagonals()
            .map(|(_, offset)| self + Self::from_offset(offset))
    }

    /// Rotate 60° clockwise around the origin.
    pub fn rotate_cw(self) -> Self {
        Self::new(-self.r, -self.s, -self.q)
    }

    /// Rotate 60° counter-clockwise around the origin.
    pub fn rotate_ccw(self) -> Self {
        Self::new(-self.s, -self.q, -self.r)
    }

    pub fn reflect_q(self) -> Self {
        Self::new(self.q, self.s, self.r)
    }

    pub fn reflect_r(self) -> Self {
        Self::new(self.s, self.r, self.q)
    }

    pub fn reflect_s(self) -> Self {
        Self::new(self.r, self.q, self.s)
    }

    pub fn to_axial(self) -> AxialCoord {
        AxialCoord::new(self.q, self.r)
    }

    /// Canonical `"q,r,s"` lookup key with integer components.
    pub fn to_key(self) -> String {
        self.to_string()
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;

    fn add(self, rhs: CubeCoord) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, rhs: CubeCoord) -> Self::Output {
        Self::new(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

impl Mul<f64> for CubeCoord {
    type Output = CubeCoord;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for CubeCoord {
    type Output = CubeCoord;

    fn neg(self) -> Self::Output {
        Self::new(-self.q, -self.r, -self.s)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            key_component(self.q),
            key_component(self.r),
            key_component(self.s)
        )
    }
}

impl FromStr for CubeCoord {
    type Err = Error;

    /// Parse a `"q,r,s"` key as produced by [`CubeCoord::to_key`].
    fn from_str(key: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinateKey {
            key: key.to_string(),
        };
        let parts = key
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match parts.as_slice() {
            [q, r, s] => Self::from_values(*q, *r, *s),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<[f64; 3]> for CubeCoord {
    type Error = Error;

    fn try_from(value: [f64; 3]) -> Result<Self> {
        Self::from_values(value[0], value[1], value[2])
    }
}

impl From<CubeCoord> for [f64; 3] {
    fn from(coord: CubeCoord) -> Self {
        [coord.q, coord.r, coord.s]
    }
}

/// Two-axis hex position; `s` is implied as `-q - r`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct AxialCoord {
    pub q: f64,
    pub r: f64,
}

impl AxialCoord {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    pub fn to_cube(self) -> CubeCoord {
        CubeCoord::new(self.q, self.r, self.s())
    }
}

impl From<[f64; 2]> for AxialCoord {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(axial: AxialCoord) -> Self {
        axial.to_cube()
    }
}

impl From<CubeCoord> for AxialCoord {
    fn from(cube: CubeCoord) -> Self {
        cube.to_axial()
    }
}

// Map files carry whole numbers, so integral components are written without a
// fractional part (`[1, -2]` rather than `[1.0, -2.0]`).
impl Serialize for AxialCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(2)?;
        for component in [self.q, self.r] {
            if component.fract() == 0.0 && component.abs() < i64::MAX as f64 {
                tuple.serialize_element(&(component as i64))?;
            } else {
                tuple.serialize_element(&component)?;
            }
        }
        tuple.end()
    }
}

/// Order coordinates row by row: ascending r, then ascending s.
pub fn sort_by_rows(coords: &mut [CubeCoord]) {
    coords.sort_by(|a, b| compare_rows(a, b));
}

pub(crate) fn compare_rows(a: &CubeCoord, b: &CubeCoord) -> Ordering {
    a.r.total_cmp(&b.r).then_with(|| a.s.total_cmp(&b.s))
}

/// Round half towards positive infinity, so `-0.5` becomes `0` and `2.5`
/// becomes `3`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn key_component(value: f64) -> i64 {
    // `as` saturates and maps -0.0 to 0, which keeps keys canonical.
    round_half_up(value) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(q: f64, r: f64, s: f64) -> CubeCoord {
        CubeCoord::from_values(q, r, s).expect("valid coordinate")
    }

    #[test]
    fn from_values_rejects_bad_sum() {
        let error = CubeCoord::from_values(1.0, 2.0, 3.0).expect_err("1+2+3 != 0");
        assert!(matches!(error, Error::InvalidCoordinate { .. }));
        assert!(format!("{error}").contains("q + r + s must be 0"));
    }

    #[test]
    fn from_values_tolerates_drift() {
        assert!(CubeCoord::from_values(0.1, 0.2, -0.3000001).is_ok());
    }

    #[test]
    fn set_values_keeps_old_value_on_error() {
        let mut coord = cube(1.0, -1.0, 0.0);
        assert!(coord.set_values(1.0, 1.0, 1.0).is_err());
        assert_eq!(coord, cube(1.0, -1.0, 0.0));
        coord.set_values(2.0, -1.0, -1.0).unwrap();
        assert_eq!(coord, cube(2.0, -1.0, -1.0));
    }

    #[test]
    fn arithmetic_matches_reference_values() {
        let a = cube(-1.0, -1.0, 2.0);
        let b = cube(1.0, 1.0, -2.0);

        assert_eq!(a + b, CubeCoord::ORIGIN);
        assert_eq!(a - b, CubeCoord::new(-2.0, -2.0, 4.0));
        assert_eq!(a + (-b), a - b);
        assert_eq!(a * 3.0, CubeCoord::new(-3.0, -3.0, 6.0));
        assert_eq!(a.distance(b), 4.0);
        assert_eq!(a.lerp(b, 0.5), CubeCoord::ORIGIN);
    }

    #[test]
    fn round_snaps_to_nearest_hex() {
        let rounded = CubeCoord::new(-2.1, -2.1, 4.1).round();
        assert_eq!(rounded, CubeCoord::new(-2.0, -2.0, 4.0));
        assert_eq!(rounded.round(), rounded);
    }

    #[test]
    fn round_tie_recomputes_s_last() {
        // q and r are exact, s is the only component with error.
        let rounded = CubeCoord::new(1.0, -1.0, 0.4).round();
        assert_eq!(rounded, CubeCoord::new(1.0, -1.0, 0.0));

        // Equal q and r errors fall through to recomputing r over q.
        let rounded = CubeCoord::new(0.5, 0.5, -1.0).round();
        assert_eq!(rounded, CubeCoord::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn direction_between_classifies_diagonal() {
        let a = cube(3.0, -3.0, 0.0);
        let b = cube(1.0, 1.0, -2.0);

        let direction = a.direction_between(b).expect("diagonal");
        assert_eq!(direction.vector, CubeCoord::new(-1.0, 2.0, -1.0));
        assert_eq!(direction.neighbor_type, NeighborType::Diagonal);

        assert!(a.direction_between(cube(2.0, 0.0, -2.0)).is_none());
    }

    #[test]
    fn direction_between_classifies_side() {
        let a = cube(0.0, 0.0, 0.0);
        let direction = a.direction_between(cube(3.0, 0.0, -3.0)).expect("side");
        assert_eq!(direction.vector, CubeCoord::new(1.0, 0.0, -1.0));
        assert_eq!(direction.neighbor_type, NeighborType::Side);
    }

    #[test]
    fn at_distance_accepts_vectors_and_names() {
        let a = cube(3.0, -3.0, 0.0);
        let vector = CubeCoord::new(-1.0, 2.0, -1.0);
        let target = a.at_distance(vector, 2.0, Orientation::Pointy).unwrap();
        assert_eq!(target, cube(1.0, 1.0, -2.0));

        let target = CubeCoord::ORIGIN
            .at_distance(Direction::South, 2.0, Orientation::Pointy)
            .unwrap();
        assert_eq!(target, CubeCoord::new(-2.0, 4.0, -2.0));

        assert!(CubeCoord::ORIGIN
            .at_distance(Direction::South, 1.0, Orientation::Flat)
            .is_ok());
    }

    #[test]
    fn neighbors_follow_direction_tables() {
        let east = cube(1.0, 0.0, -1.0);
        assert_eq!(
            east.neighbor(Direction::West, Orientation::Pointy).unwrap(),
            CubeCoord::ORIGIN
        );
        let north = cube(1.0, -2.0, 1.0);
        assert_eq!(
            north
                .diagonal_neighbor(Direction::South, Orientation::Pointy)
                .unwrap(),
            CubeCoord::ORIGIN
        );
        assert!(east.neighbor(Direction::North, Orientation::Pointy).is_err());

        for neighbor in CubeCoord::ORIGIN.neighbors(Orientation::Flat) {
            assert_eq!(CubeCoord::ORIGIN.distance(neighbor), 1.0);
        }
        for neighbor in CubeCoord::ORIGIN.diagonal_neighbors(Orientation::Pointy) {
            assert_eq!(CubeCoord::ORIGIN.distance(neighbor), 2.0);
        }
    }

    #[test]
    fn rotation_has_order_six() {
        let start = cube(2.0, -3.0, 1.0);
        let mut coord = start;
        for _ in 0..6 {
            coord = coord.rotate_cw();
        }
        assert_eq!(coord, start);
        assert_eq!(start.rotate_cw().rotate_ccw(), start);
        assert_eq!(start.rotate_ccw().rotate_cw(), start);
    }

    #[test]
    fn reflections_are_involutions() {
        let a = cube(2.0, -3.0, 1.0);
        assert_eq!(a.reflect_q(), CubeCoord::new(2.0, 1.0, -3.0));
        assert_eq!(a.reflect_q().reflect_q(), a);
        assert_eq!(a.reflect_r().reflect_r(), a);
        assert_eq!(a.reflect_s().reflect_s(), a);
    }

    #[test]
    fn keys_use_integer_components() {
        assert_eq!(cube(1.0, -2.0, 1.0).to_key(), "1,-2,1");
        assert_eq!(CubeCoord::new(-0.0, 0.0, -0.0).to_key(), "0,0,0");
        assert_eq!(CubeCoord::new(0.9999999, -1.0, 0.0000001).to_key(), "1,-1,0");
    }

    #[test]
    fn keys_parse_back() {
        let coord: CubeCoord = "3, -1, -2".parse().unwrap();
        assert_eq!(coord, cube(3.0, -1.0, -2.0));
        assert!(matches!(
            "3,-1".parse::<CubeCoord>(),
            Err(Error::InvalidCoordinateKey { .. })
        ));
        assert!(matches!(
            "1,1,1".parse::<CubeCoord>(),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn axial_round_trips_through_cube() {
        let axial = AxialCoord::new(2.0, -5.0);
        let cube: CubeCoord = axial.into();
        assert_eq!(cube, CubeCoord::new(2.0, -5.0, 3.0));
        assert_eq!(AxialCoord::from(cube), axial);
    }

    #[test]
    fn serde_uses_arrays() {
        let json = serde_json::to_string(&AxialCoord::new(1.0, -2.0)).unwrap();
        assert_eq!(json, "[1,-2]");
        let cube: CubeCoord = serde_json::from_str("[1, -2, 1]").unwrap();
        assert_eq!(cube, CubeCoord::new(1.0, -2.0, 1.0));
        assert!(serde_json::from_str::<CubeCoord>("[1, 2, 3]").is_err());
    }

    #[test]
    fn sort_by_rows_orders_r_then_s() {
        let mut coords = vec![cube(0.0, 1.0, -1.0), cube(1.0, 0.0, -1.0), cube(0.0, 0.0, 0.0)];
        sort_by_rows(&mut coords);
        assert_eq!(
            coords,
            vec![cube(1.0, 0.0, -1.0), cube(0.0, 0.0, 0.0), cube(0.0, 1.0, -1.0)]
        );
    }
}
