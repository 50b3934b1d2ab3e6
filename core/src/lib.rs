#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hexhaven engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. The [`geometry`] module holds
//! the pure hex-lattice mathematics shared by every layer.

pub mod geometry;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Address of a single hex cell expressed in axial `(q, r)` coordinates.
///
/// The implicit third cube coordinate is `s = -q - r`; it is derived on
/// demand and never stored. Coordinates are pure values with no identity:
/// any integer pair is legal, including pairs with no corresponding tile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AxialCoord {
    q: i32,
    r: i32,
}

impl AxialCoord {
    /// Coordinate at the center of the playable area.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new axial coordinate. No validation is performed.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// First axial component.
    #[must_use]
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// Second axial component.
    #[must_use]
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Derived third cube component satisfying `q + r + s = 0`.
    #[must_use]
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Returns the coordinate displaced by the provided axial deltas.
    #[must_use]
    pub const fn offset(self, dq: i32, dr: i32) -> Self {
        Self::new(self.q.saturating_add(dq), self.r.saturating_add(dr))
    }

    /// Computes the hex distance between two coordinates.
    ///
    /// Equals `max(|dq|, |dr|, |ds|)` over the cube-coordinate differences.
    #[must_use]
    pub fn distance(self, other: Self) -> u64 {
        let dq = (i64::from(self.q) - i64::from(other.q)).unsigned_abs();
        let dr = (i64::from(self.r) - i64::from(other.r)).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }
}

/// Terrain classification assigned to every generated tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Open buildable ground; statistically dominant and always at the origin.
    Grass,
    /// Water cell that blocks placement.
    Water,
    /// Rock cell that blocks placement.
    Rock,
}

/// Opaque handle identifying the entity occupying a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccupantId(u32);

impl OccupantId {
    /// Creates a new occupant identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Axis-aligned rectangle in world units with inclusive containment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    min: Vec2,
    max: Vec2,
}

impl WorldRect {
    /// Constructs a rectangle from two corner points, normalising the order.
    #[must_use]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Computes the minimal rectangle covering every provided point.
    ///
    /// Returns `None` when the iterator yields no points.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for point in iter {
            min = min.min(point);
            max = max.max(point);
        }
        Some(Self { min, max })
    }

    /// Lower-left corner of the rectangle.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner of the rectangle.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Width of the rectangle in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Reports whether the point lies within the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the rectangle grown outward by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Populates the playable area with a disk of tiles around the origin.
    ///
    /// Idempotent: once a world has been generated this command is a no-op
    /// that leaves the existing tile set untouched.
    GenerateWorld {
        /// Hex radius of the generated disk.
        radius: u32,
    },
    /// Clears and rebuilds the playable area unconditionally.
    ///
    /// Escape hatch for tooling and tests that need to verify deterministic
    /// regeneration; not part of normal gameplay flow.
    RegenerateWorld {
        /// Hex radius of the regenerated disk.
        radius: u32,
    },
    /// Records that an entity occupies the provided coordinate.
    ///
    /// Marking an already-occupied coordinate replaces the previous marker;
    /// callers that require exclusivity must check occupancy first.
    MarkOccupied {
        /// Coordinate claimed by the occupant.
        coord: AxialCoord,
        /// Opaque handle identifying the occupying entity.
        occupant: OccupantId,
    },
    /// Releases the occupancy marker at the provided coordinate, if any.
    ClearOccupied {
        /// Coordinate whose marker should be removed.
        coord: AxialCoord,
    },
    /// Removes every occupancy marker unconditionally.
    ///
    /// Full-reset primitive used between scenarios.
    ClearAllOccupied,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that world generation completed, exactly once per build.
    WorldGenerated {
        /// Number of tiles in the freshly populated registry.
        tile_count: usize,
    },
    /// Confirms that an occupancy marker was stored.
    CoordOccupied {
        /// Coordinate that was claimed.
        coord: AxialCoord,
        /// Marker that now occupies the coordinate.
        occupant: OccupantId,
        /// Marker that was displaced by the write, if any.
        replaced: Option<OccupantId>,
    },
    /// Confirms that an occupancy marker was removed.
    OccupancyCleared {
        /// Coordinate that was released.
        coord: AxialCoord,
        /// Marker that previously occupied the coordinate.
        occupant: OccupantId,
    },
    /// Confirms that the occupancy ledger was reset.
    OccupancyReset {
        /// Number of markers removed by the reset.
        cleared: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{AxialCoord, OccupantId, TerrainKind, WorldRect};
    use glam::Vec2;
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn cube_constraint_holds_for_arbitrary_coordinates() {
        let coords = [
            AxialCoord::ORIGIN,
            AxialCoord::new(1, 0),
            AxialCoord::new(-3, 5),
            AxialCoord::new(i32::MAX, i32::MIN),
        ];
        for coord in coords {
            assert_eq!(i64::from(coord.q()) + i64::from(coord.r()) + coord.s(), 0);
        }
    }

    #[test]
    fn distance_is_symmetric_and_matches_expectation() {
        let a = AxialCoord::new(1, 1);
        let b = AxialCoord::new(-2, 3);
        assert_eq!(a.distance(b), 3);
        assert_eq!(b.distance(a), 3);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn offset_displaces_both_components() {
        let coord = AxialCoord::new(2, -1).offset(-3, 4);
        assert_eq!(coord, AxialCoord::new(-1, 3));
    }

    #[test]
    fn rect_containment_is_inclusive_on_edges() {
        let rect = WorldRect::new(Vec2::new(-1.0, -2.0), Vec2::new(3.0, 4.0));
        assert!(rect.contains(Vec2::new(-1.0, -2.0)));
        assert!(rect.contains(Vec2::new(3.0, 4.0)));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains(Vec2::new(3.1, 0.0)));
    }

    #[test]
    fn rect_from_points_covers_every_point() {
        let points = [
            Vec2::new(1.0, 5.0),
            Vec2::new(-4.0, 2.0),
            Vec2::new(3.0, -1.0),
        ];
        let rect = WorldRect::from_points(points).expect("non-empty input");
        for point in points {
            assert!(rect.contains(point));
        }
        assert_eq!(rect.min(), Vec2::new(-4.0, -1.0));
        assert_eq!(rect.max(), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn rect_from_points_is_none_for_empty_input() {
        assert!(WorldRect::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn rect_expanded_contains_the_original() {
        let rect = WorldRect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let grown = rect.expanded(5.0);
        assert!(grown.contains(rect.min()));
        assert!(grown.contains(rect.max()));
        assert_eq!(grown.min(), Vec2::splat(-5.0));
        assert_eq!(grown.max(), Vec2::splat(15.0));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn axial_coord_round_trips_through_bincode() {
        assert_round_trip(&AxialCoord::new(-7, 12));
    }

    #[test]
    fn terrain_kind_round_trips_through_bincode() {
        assert_round_trip(&TerrainKind::Water);
    }

    #[test]
    fn occupant_id_round_trips_through_bincode() {
        assert_round_trip(&OccupantId::new(42));
    }
}
