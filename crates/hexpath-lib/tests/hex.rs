use hexpath_lib::{intersection, sort_by_rows, CubeCoord, Direction, Error, NeighborType, Orientation};

fn cube(q: f64, r: f64, s: f64) -> CubeCoord {
    CubeCoord::from_values(q, r, s).expect("valid coordinate")
}

fn sample_hexes() -> Vec<CubeCoord> {
    cube(0.0, 0.0, 0.0).range(3)
}

#[test]
fn range_ring_and_spiral_counts() {
    let center = cube(2.0, -5.0, 3.0);
    for radius in 0..6u32 {
        let expected = (3 * radius * radius + 3 * radius + 1) as usize;
        assert_eq!(center.range(radius).len(), expected);
        for orientation in [Orientation::Pointy, Orientation::Flat] {
            assert_eq!(center.spiral(radius, orientation).len(), expected);
            let ring = center.ring(radius, orientation);
            assert_eq!(ring.len(), if radius == 0 { 1 } else { 6 * radius as usize });
            assert!(ring.iter().all(|hex| center.distance(*hex) == f64::from(radius)));
        }
    }
}

#[test]
fn range_stays_within_radius() {
    let center = cube(-1.0, 4.0, -3.0);
    for hex in center.range(4) {
        assert!(hex.is_valid());
        assert!(center.distance(hex) <= 4.0);
    }
}

#[test]
fn spiral_covers_range() {
    let center = CubeCoord::ORIGIN;
    let mut spiral = center.spiral(3, Orientation::Flat);
    let mut range = center.range(3);
    sort_by_rows(&mut spiral);
    sort_by_rows(&mut range);
    assert_eq!(spiral, range);
}

#[test]
fn lines_have_distance_plus_one_steps() {
    let hexes = sample_hexes();
    let origin = CubeCoord::ORIGIN;
    for target in &hexes {
        let line = origin.line_to(*target);
        assert_eq!(line.len(), origin.distance(*target) as usize + 1);
        assert_eq!(line.first(), Some(&origin));
        assert_eq!(line.last(), Some(target));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1.0);
        }
    }
}

#[test]
fn distance_is_symmetric_and_zero_on_self() {
    let hexes = sample_hexes();
    for a in &hexes {
        assert_eq!(a.distance(*a), 0.0);
        for b in hexes.iter().step_by(5) {
            assert_eq!(a.distance(*b), b.distance(*a));
            assert_eq!(a.distance(*b), (*a - *b).distance(CubeCoord::ORIGIN));
        }
    }
}

#[test]
fn rotations_preserve_distance_and_cycle() {
    for hex in sample_hexes() {
        let mut rotated = hex;
        for _ in 0..6 {
            rotated = rotated.rotate_cw();
            assert_eq!(rotated.distance(CubeCoord::ORIGIN), hex.distance(CubeCoord::ORIGIN));
        }
        assert_eq!(rotated, hex);
        assert_eq!(hex.rotate_cw().rotate_ccw(), hex);
    }
}

#[test]
fn reflections_are_involutions() {
    for hex in sample_hexes() {
        assert_eq!(hex.reflect_q().reflect_q(), hex);
        assert_eq!(hex.reflect_r().reflect_r(), hex);
        assert_eq!(hex.reflect_s().reflect_s(), hex);
        assert_eq!(hex.reflect_q().q, hex.q);
    }
}

#[test]
fn round_is_idempotent() {
    let a = cube(3.0, -3.0, 0.0);
    let b = cube(-2.0, 1.0, 1.0);
    for step in 0..=10 {
        let rounded = a.lerp(b, f64::from(step) / 10.0).round();
        assert!(rounded.is_valid());
        assert_eq!(rounded.round(), rounded);
    }
}

#[test]
fn every_neighbor_is_one_step_away() {
    let center = cube(1.0, -2.0, 1.0);
    for orientation in [Orientation::Pointy, Orientation::Flat] {
        for neighbor in center.neighbors(orientation) {
            assert_eq!(center.distance(neighbor), 1.0);
            let between = center.direction_between(neighbor).expect("adjacent");
            assert_eq!(between.neighbor_type, NeighborType::Side);
        }
        for diagonal in center.diagonal_neighbors(orientation) {
            assert_eq!(center.distance(diagonal), 2.0);
            let between = center.direction_between(diagonal).expect("diagonal");
            assert_eq!(between.neighbor_type, NeighborType::Diagonal);
        }
    }
}

#[test]
fn orientation_tables_reject_foreign_directions() {
    // Pointy-top hexes have no north or south side.
    let error = CubeCoord::ORIGIN
        .neighbor(Direction::North, Orientation::Pointy)
        .expect_err("no north side");
    assert!(matches!(error, Error::InvalidDirection { .. }));
    assert!(CubeCoord::ORIGIN
        .neighbor(Direction::North, Orientation::Flat)
        .is_ok());
}

#[test]
fn keys_parse_back_to_coordinates() {
    for hex in sample_hexes() {
        let parsed: CubeCoord = hex.to_key().parse().expect("key parses");
        assert_eq!(parsed, hex);
    }
    assert!(matches!(
        "1,2".parse::<CubeCoord>(),
        Err(Error::InvalidCoordinateKey { .. })
    ));
    assert!(matches!(
        "1,2,3".parse::<CubeCoord>(),
        Err(Error::InvalidCoordinate { .. })
    ));
}

#[test]
fn intersection_of_disjoint_ranges_is_empty() {
    let a = cube(-5.0, 0.0, 5.0).range(1);
    let b = cube(5.0, 0.0, -5.0).range(1);
    assert!(intersection(&a, &b).is_empty());
    assert_eq!(intersection(&a, &a), a);
}

#[test]
fn adding_a_negation_subtracts() {
    let hexes = sample_hexes();
    for a in hexes.iter().step_by(3) {
        for b in hexes.iter().step_by(4) {
            assert_eq!(*a + -*b, *a - *b);
        }
    }
}
