#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Hexhaven.
//!
//! The world owns the tile registry and the occupancy ledger. Mutations
//! arrive exclusively through [`apply`], which executes [`Command`] values
//! deterministically and broadcasts [`Event`] values for systems to react
//! to. Read access goes through the [`query`] module, whose functions never
//! fault on absence.

mod occupancy;
mod terrain;
mod tiles;

use hexhaven_core::{Command, Event};

use crate::{occupancy::OccupancyLedger, tiles::TileRegistry};

pub use crate::tiles::Tile;

/// Lifecycle of the playable area.
///
/// A single one-way transition: the first successful generation moves the
/// world to `Generated`, and only the explicit regenerate path rebuilds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GenerationState {
    Ungenerated,
    Generated,
}

/// Represents the authoritative Hexhaven world state.
#[derive(Debug)]
pub struct World {
    registry: TileRegistry,
    occupancy: OccupancyLedger,
    state: GenerationState,
}

impl World {
    /// Creates an ungenerated world with an empty occupancy ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TileRegistry::new(),
            occupancy: OccupancyLedger::new(),
            state: GenerationState::Ungenerated,
        }
    }

    fn install_registry(&mut self, registry: TileRegistry, out_events: &mut Vec<Event>) {
        let tile_count = registry.len();
        self.registry = registry;
        self.state = GenerationState::Generated;
        out_events.push(Event::WorldGenerated { tile_count });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::GenerateWorld { radius } => {
            if world.state == GenerationState::Generated {
                return;
            }
            world.install_registry(TileRegistry::generate(radius), out_events);
        }
        Command::RegenerateWorld { radius } => {
            world.install_registry(TileRegistry::generate(radius), out_events);
        }
        Command::MarkOccupied { coord, occupant } => {
            let replaced = world.occupancy.mark(coord, occupant);
            out_events.push(Event::CoordOccupied {
                coord,
                occupant,
                replaced,
            });
        }
        Command::ClearOccupied { coord } => {
            if let Some(occupant) = world.occupancy.clear(coord) {
                out_events.push(Event::OccupancyCleared { coord, occupant });
            }
        }
        Command::ClearAllOccupied => {
            let cleared = world.occupancy.clear_all();
            out_events.push(Event::OccupancyReset { cleared });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use glam::Vec2;
    use hexhaven_core::{geometry, AxialCoord, OccupantId, WorldRect};

    use super::{GenerationState, Tile, World};

    /// Retrieves the tile at the provided coordinate, if one was generated.
    #[must_use]
    pub fn tile_at(world: &World, coord: AxialCoord) -> Option<Tile> {
        world.registry.tile_at(coord)
    }

    /// Resolves the nearest hex cell to the world point and returns its
    /// tile, if one was generated there.
    #[must_use]
    pub fn tile_at_world(world: &World, point: Vec2) -> Option<Tile> {
        world.registry.tile_at(geometry::nearest_coordinate(point))
    }

    /// Reports whether a tile was generated at the coordinate.
    #[must_use]
    pub fn has_tile(world: &World, coord: AxialCoord) -> bool {
        world.registry.contains(coord)
    }

    /// Number of tiles in the current playable area.
    #[must_use]
    pub fn tile_count(world: &World) -> usize {
        world.registry.len()
    }

    /// Reports whether the playable area has been generated.
    #[must_use]
    pub fn is_generated(world: &World) -> bool {
        world.state == GenerationState::Generated
    }

    /// Captures a read-only snapshot of every generated tile.
    #[must_use]
    pub fn all_tiles(world: &World) -> TileView {
        let mut tiles: Vec<Tile> = world.registry.iter().copied().collect();
        tiles.sort_by_key(Tile::coord);
        TileView { tiles }
    }

    /// Collects the tiles whose positions lie inside the rectangle.
    #[must_use]
    pub fn tiles_in_rect(world: &World, rect: WorldRect) -> Vec<Tile> {
        world.registry.tiles_in_rect(rect)
    }

    /// Minimal axis-aligned rectangle covering every tile position.
    #[must_use]
    pub fn bounds(world: &World) -> WorldRect {
        world.registry.bounds()
    }

    /// Returns the marker occupying the coordinate, if any.
    #[must_use]
    pub fn occupant_at(world: &World, coord: AxialCoord) -> Option<OccupantId> {
        world.occupancy.occupant(coord)
    }

    /// Reports whether the coordinate is currently claimed by an entity.
    #[must_use]
    pub fn is_occupied(world: &World, coord: AxialCoord) -> bool {
        world.occupancy.is_occupied(coord)
    }

    /// Read-only snapshot of the generated tiles in coordinate order.
    #[derive(Clone, Debug)]
    pub struct TileView {
        tiles: Vec<Tile>,
    }

    impl TileView {
        /// Iterator over the captured tiles in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &Tile> {
            self.tiles.iter()
        }

        /// Consumes the view, yielding the underlying tiles.
        #[must_use]
        pub fn into_vec(self) -> Vec<Tile> {
            self.tiles
        }

        /// Number of tiles captured by the snapshot.
        #[must_use]
        pub fn len(&self) -> usize {
            self.tiles.len()
        }

        /// Reports whether the snapshot is empty.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.tiles.is_empty()
        }
    }
}
