//! Tile registry owning the generated playable area.

use std::collections::HashMap;

use glam::Vec2;
use hexhaven_core::{geometry, AxialCoord, TerrainKind, WorldRect};

use crate::terrain;

/// Side length of one spatial bucket in the derived position index.
const BUCKET_SIZE: f32 = geometry::HEX_SIZE * 4.0;

/// One generated grid cell.
///
/// Created exactly once during generation; terrain and position are
/// write-once and the position always equals `geometry::to_world(coord)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    coord: AxialCoord,
    terrain: TerrainKind,
    position: Vec2,
}

impl Tile {
    pub(crate) fn new(coord: AxialCoord) -> Self {
        Self {
            coord,
            terrain: terrain::classify(coord),
            position: geometry::to_world(coord),
        }
    }

    /// Axial coordinate the tile occupies.
    #[must_use]
    pub const fn coord(&self) -> AxialCoord {
        self.coord
    }

    /// Terrain classification assigned at creation.
    #[must_use]
    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    /// World-plane position derived once from the coordinate.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }
}

/// Indexed store of every tile in the current playable area.
///
/// Tiles are indexed by coordinate (primary) and by a coarse bucket derived
/// from their world position, which answers rectangle queries without
/// scanning the full set. At most one tile exists per coordinate: the
/// insertion path is driven solely by `geometry::disk`, whose output has no
/// duplicates.
#[derive(Debug, Default)]
pub(crate) struct TileRegistry {
    tiles: HashMap<AxialCoord, Tile>,
    buckets: HashMap<(i32, i32), Vec<AxialCoord>>,
}

impl TileRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a fully populated registry for a disk of the given radius.
    ///
    /// The registry is assembled locally and returned whole, so callers can
    /// swap it in atomically and no partially built world is ever
    /// observable.
    pub(crate) fn generate(radius: u32) -> Self {
        let coords = geometry::disk(AxialCoord::ORIGIN, radius);
        let mut tiles = HashMap::with_capacity(coords.len());
        let mut buckets: HashMap<(i32, i32), Vec<AxialCoord>> = HashMap::new();

        for coord in coords {
            let tile = Tile::new(coord);
            buckets
                .entry(bucket_key(tile.position()))
                .or_default()
                .push(coord);
            let _ = tiles.insert(coord, tile);
        }

        Self { tiles, buckets }
    }

    pub(crate) fn tile_at(&self, coord: AxialCoord) -> Option<Tile> {
        self.tiles.get(&coord).copied()
    }

    pub(crate) fn contains(&self, coord: AxialCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Minimal axis-aligned rectangle covering every tile position.
    ///
    /// Recomputed from the current tile set on each call; a zero rectangle
    /// stands in while the registry is empty.
    pub(crate) fn bounds(&self) -> WorldRect {
        WorldRect::from_points(self.tiles.values().map(Tile::position))
            .unwrap_or_else(|| WorldRect::new(Vec2::ZERO, Vec2::ZERO))
    }

    /// Collects every tile whose position lies inside the rectangle.
    ///
    /// Consults only the buckets overlapping the query rectangle and
    /// returns the hits in coordinate order.
    pub(crate) fn tiles_in_rect(&self, rect: WorldRect) -> Vec<Tile> {
        let (min_x, min_y) = bucket_key(rect.min());
        let (max_x, max_y) = bucket_key(rect.max());

        let mut found = Vec::new();
        for bucket_x in min_x..=max_x {
            for bucket_y in min_y..=max_y {
                let Some(coords) = self.buckets.get(&(bucket_x, bucket_y)) else {
                    continue;
                };
                for coord in coords {
                    if let Some(tile) = self.tiles.get(coord) {
                        if rect.contains(tile.position()) {
                            found.push(*tile);
                        }
                    }
                }
            }
        }
        found.sort_by_key(Tile::coord);
        found
    }
}

fn bucket_key(position: Vec2) -> (i32, i32) {
    (
        (position.x / BUCKET_SIZE).floor() as i32,
        (position.y / BUCKET_SIZE).floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_indexes_every_disk_coordinate() {
        let registry = TileRegistry::generate(3);
        assert_eq!(registry.len(), geometry::disk_len(3));
        for coord in geometry::disk(AxialCoord::ORIGIN, 3) {
            assert!(registry.contains(coord));
        }
    }

    #[test]
    fn tile_positions_follow_the_grid_geometry() {
        let registry = TileRegistry::generate(2);
        for tile in registry.iter() {
            assert_eq!(tile.position(), geometry::to_world(tile.coord()));
        }
    }

    #[test]
    fn empty_registry_reports_zero_bounds() {
        let registry = TileRegistry::new();
        let bounds = registry.bounds();
        assert_eq!(bounds.min(), Vec2::ZERO);
        assert_eq!(bounds.max(), Vec2::ZERO);
    }

    #[test]
    fn rect_query_over_full_bounds_returns_every_tile() {
        let registry = TileRegistry::generate(4);
        let hits = registry.tiles_in_rect(registry.bounds());
        assert_eq!(hits.len(), registry.len());
    }

    #[test]
    fn rect_query_filters_positions_outside_the_rectangle() {
        let registry = TileRegistry::generate(4);
        let center = geometry::to_world(AxialCoord::ORIGIN);
        let rect = WorldRect::new(
            center - Vec2::splat(geometry::HEX_SIZE),
            center + Vec2::splat(geometry::HEX_SIZE),
        );
        let hits = registry.tiles_in_rect(rect);
        assert!(!hits.is_empty());
        assert!(hits.len() < registry.len());
        for tile in hits {
            assert!(rect.contains(tile.position()));
        }
    }
}
