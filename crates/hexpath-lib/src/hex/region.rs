use super::{CubeCoord, Orientation, LINE_EPSILON};

impl CubeCoord {
    /// Hexes on the straight line from `self` to `destination`, both ends
    /// included. Always `distance + 1` entries.
    pub fn line_to(self, destination: Self) -> Vec<Self> {
        let steps = self.distance(destination);
        if steps == 0.0 {
            return vec![self.round()];
        }

        let nudged = destination + LINE_EPSILON;
        let step = 1.0 / steps;
        (0..=steps as usize)
            .map(|i| self.lerp(nudged, step * i as f64).round())
            .collect()
    }

    /// Every hex within `radius` steps, ordered by q then r.
    pub fn range(self, radius: u32) -> Vec<Self> {
        let n = i64::from(radius);
        let mut results = Vec::with_capacity(hex_count(radius));
        for q in -n..=n {
            // Plain [-n, n] for r would produce a rhombus.
            let r_min = (-n).max(-q - n);
            let r_max = n.min(-q + n);
            for r in r_min..=r_max {
                let offset = CubeCoord::new(q as f64, r as f64, (-q - r) as f64);
                results.push(self + offset);
            }
        }
        debug_assert_eq!(results.len(), hex_count(radius), "expected 3r²+3r+1 hexes");
        results
    }

    /// Hexes at exactly `radius` steps, walked in side-table order starting
    /// from the orientation's ring start direction.
    pub fn ring(self, radius: u32, orientation: Orientation) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }

        let sides = orientation.sides();
        let start = sides
            .iter()
            .find(|(direction, _)| *direction == orientation.ring_start())
            .map(|(_, offset)| CubeCoord::from_offset(*offset))
            .unwrap_or_default();

        let mut results = Vec::with_capacity(6 * radius as usize);
        let mut hex = self + start.scale(f64::from(radius));
        for (_, offset) in sides {
            let step = CubeCoord::from_offset(*offset);
            for _ in 0..radius {
                hex = hex + step;
                results.push(hex);
            }
        }
        results
    }

    /// `self` followed by each ring from 1 to `radius`.
    pub fn spiral(self, radius: u32, orientation: Orientation) -> Vec<Self> {
        let mut results = Vec::with_capacity(hex_count(radius));
        results.push(self);
        for ring in 1..=radius {
            results.extend(self.ring(ring, orientation));
        }
        results
    }
}

/// Coordinates of `a` that also appear in `b`, keeping the order of `a`.
pub fn intersection(a: &[CubeCoord], b: &[CubeCoord]) -> Vec<CubeCoord> {
    a.iter()
        .filter(|candidate| b.contains(candidate))
        .copied()
        .collect()
}

/// Number of hexes within `radius` steps: 1, 7, 19, 37, ...
pub(crate) fn hex_count(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
