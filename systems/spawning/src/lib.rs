#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawn-proposal system driven by the generation-complete
//! event.
//!
//! The system stays idle until the world publishes its tile count, then
//! walks a seeded pseudo-random sequence over a disk around the origin and
//! proposes starting positions on unoccupied grass tiles. Entity creation
//! itself belongs to an external layer; this system only decides where.

use glam::Vec2;
use hexhaven_core::{geometry, AxialCoord, Event, TerrainKind};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_count: usize,
    search_radius: u32,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided target count, search
    /// radius around the origin, and seed.
    #[must_use]
    pub const fn new(spawn_count: usize, search_radius: u32, rng_seed: u64) -> Self {
        Self {
            spawn_count,
            search_radius,
            rng_seed,
        }
    }
}

/// Proposed starting location for an externally owned entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    /// Tile the entity should start on.
    pub coord: AxialCoord,
    /// World-plane position derived from the coordinate.
    pub position: Vec2,
}

/// Pure system that proposes spawn locations once the world exists.
#[derive(Debug)]
pub struct Spawning {
    spawn_count: usize,
    search_radius: u32,
    rng_state: u64,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            spawn_count: config.spawn_count,
            search_radius: config.search_radius,
            rng_state: config.rng_seed,
        }
    }

    /// Consumes events and tile queries to propose spawn locations.
    ///
    /// Proposals are produced only in response to a generation-complete
    /// event and land exclusively on unoccupied grass tiles. The `terrain_at`
    /// and `is_occupied` closures should mirror the world's query helpers.
    pub fn handle<F, G>(
        &mut self,
        events: &[Event],
        mut terrain_at: F,
        mut is_occupied: G,
        out: &mut Vec<SpawnRequest>,
    ) where
        F: FnMut(AxialCoord) -> Option<TerrainKind>,
        G: FnMut(AxialCoord) -> bool,
    {
        let generated = events
            .iter()
            .any(|event| matches!(event, Event::WorldGenerated { .. }));
        if !generated || self.spawn_count == 0 {
            return;
        }

        let candidates = geometry::disk(AxialCoord::ORIGIN, self.search_radius);
        let attempt_limit = candidates.len() * 4;
        let mut picked = 0;

        for _ in 0..attempt_limit {
            if picked == self.spawn_count {
                break;
            }

            let value = self.advance_rng();
            let coord = candidates[(value % candidates.len() as u64) as usize];

            if terrain_at(coord) != Some(TerrainKind::Grass) {
                continue;
            }
            if is_occupied(coord) {
                continue;
            }
            if out.iter().any(|request| request.coord == coord) {
                continue;
            }

            out.push(SpawnRequest {
                coord,
                position: geometry::to_world(coord),
            });
            picked += 1;
        }
    }

    fn advance_rng(&mut self) -> u64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        self.rng_state
    }
}
