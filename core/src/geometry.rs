//! Pure hex-lattice geometry shared by the world and every system.
//!
//! All functions are total and stateless. Axial coordinates map to
//! continuous world-plane positions through a fixed pointy-top layout, and
//! arbitrary world points map back to the nearest cell through fractional
//! cube coordinates with constraint-preserving rounding. Both conversion
//! directions share [`HEX_SIZE`], so round trips through tile centers are
//! exact.

use glam::Vec2;

use crate::AxialCoord;

/// Distance from a hex center to any of its corners, in world units.
///
/// The single size constant used by both conversion directions and by
/// collaborators that express margins in hexes.
pub const HEX_SIZE: f32 = 50.0;

const SQRT_3: f32 = 1.732_050_8;

/// Axial offsets of the six neighbors, ordered clockwise from the east side.
const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Maps an axial coordinate to its center position on the world plane.
///
/// Deterministic and pure: equal coordinates always produce bit-identical
/// output.
#[must_use]
pub fn to_world(coord: AxialCoord) -> Vec2 {
    let q = coord.q() as f32;
    let r = coord.r() as f32;
    Vec2::new(HEX_SIZE * SQRT_3 * (q + r * 0.5), HEX_SIZE * 1.5 * r)
}

/// Resolves the hex cell whose center lies nearest to the world point.
///
/// Computes fractional cube coordinates, rounds each component
/// independently, then re-derives the component with the largest rounding
/// error so `q + r + s = 0` holds exactly. Rounding each axis naively
/// produces wrong cells near hex boundaries.
#[must_use]
pub fn nearest_coordinate(point: Vec2) -> AxialCoord {
    let q = (SQRT_3 / 3.0 * point.x - point.y / 3.0) / HEX_SIZE;
    let r = (2.0 / 3.0 * point.y) / HEX_SIZE;
    cube_round(q, r)
}

fn cube_round(q: f32, r: f32) -> AxialCoord {
    let s = -q - r;
    let mut rounded_q = q.round();
    let mut rounded_r = r.round();
    let rounded_s = s.round();

    let q_error = (rounded_q - q).abs();
    let r_error = (rounded_r - r).abs();
    let s_error = (rounded_s - s).abs();

    if q_error > r_error && q_error > s_error {
        rounded_q = -rounded_r - rounded_s;
    } else if r_error > s_error {
        rounded_r = -rounded_q - rounded_s;
    }

    AxialCoord::new(rounded_q as i32, rounded_r as i32)
}

/// The six coordinates adjacent to `coord`, in a fixed stable order.
#[must_use]
pub fn neighbors(coord: AxialCoord) -> [AxialCoord; 6] {
    NEIGHBOR_OFFSETS.map(|(dq, dr)| coord.offset(dq, dr))
}

/// Enumerates every coordinate at exactly hex distance `radius` from the
/// center, in a stable order; radius 0 yields just the center.
#[must_use]
pub fn ring(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    if radius == 0 {
        return vec![center];
    }

    let steps = i32::try_from(radius).unwrap_or(i32::MAX);
    let mut cells = Vec::with_capacity(radius as usize * 6);
    let mut cursor = center.offset(-steps, steps);
    for (dq, dr) in NEIGHBOR_OFFSETS {
        for _ in 0..radius {
            cells.push(cursor);
            cursor = cursor.offset(dq, dr);
        }
    }
    cells
}

/// Enumerates the union of all rings from distance 0 up to `radius`.
///
/// The sequence contains no duplicates and its length is always
/// [`disk_len`] of the radius.
#[must_use]
pub fn disk(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    let mut cells = Vec::with_capacity(disk_len(radius));
    for k in 0..=radius {
        cells.extend(ring(center, k));
    }
    cells
}

/// Closed-form cell count of [`disk`]: `3 * radius * (radius + 1) + 1`.
#[must_use]
pub const fn disk_len(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn to_world_is_reproducible_for_equal_coordinates() {
        let coord = AxialCoord::new(-5, 9);
        let first = to_world(coord);
        let second = to_world(coord);
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
    }

    #[test]
    fn nearest_coordinate_inverts_to_world_across_a_disk() {
        for coord in disk(AxialCoord::ORIGIN, 12) {
            assert_eq!(
                nearest_coordinate(to_world(coord)),
                coord,
                "round trip failed for {coord:?}",
            );
        }
    }

    #[test]
    fn nearest_coordinate_snaps_points_offset_from_centers() {
        for coord in disk(AxialCoord::ORIGIN, 4) {
            let center = to_world(coord);
            let nudged = center + Vec2::new(HEX_SIZE * 0.3, -HEX_SIZE * 0.2);
            assert_eq!(nearest_coordinate(nudged), coord);
        }
    }

    #[test]
    fn neighbors_are_unique_and_at_distance_one() {
        let center = AxialCoord::new(3, -2);
        let adjacent = neighbors(center);
        let unique: HashSet<_> = adjacent.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        for coord in adjacent {
            assert_eq!(center.distance(coord), 1);
        }
    }

    #[test]
    fn ring_zero_yields_only_the_center() {
        let center = AxialCoord::new(2, 2);
        assert_eq!(ring(center, 0), vec![center]);
    }

    #[test]
    fn ring_cells_sit_at_the_requested_distance() {
        let center = AxialCoord::new(-1, 4);
        for radius in 1..6 {
            let cells = ring(center, radius);
            assert_eq!(cells.len(), radius as usize * 6);
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
            for coord in cells {
                assert_eq!(center.distance(coord), u64::from(radius));
            }
        }
    }

    #[test]
    fn disk_size_matches_closed_form_for_every_radius() {
        for radius in 0..=10 {
            let cells = disk(AxialCoord::ORIGIN, radius);
            assert_eq!(cells.len(), disk_len(radius));
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len(), "disk produced duplicates");
        }
        assert_eq!(disk_len(3), 37);
        assert_eq!(disk_len(8), 217);
    }

    #[test]
    fn disk_contains_only_cells_within_the_radius() {
        let center = AxialCoord::new(5, -3);
        for coord in disk(center, 4) {
            assert!(center.distance(coord) <= 4);
        }
    }
}
