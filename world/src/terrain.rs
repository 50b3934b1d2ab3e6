//! Deterministic per-coordinate terrain classification.
//!
//! Terrain is a pure function of the coordinate: the axial pair is mixed
//! into a 64-bit key, the key seeds a dedicated RNG, and a single draw
//! classifies the cell. No call-order, wall-clock, or counter state is
//! involved, so regenerating any radius reproduces the exact same terrain
//! per coordinate.

use hexhaven_core::{AxialCoord, TerrainKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TERRAIN_SEED: u64 = 0x8f3c_9a2d_41b7_06e5;
const MIX_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-hundred share of cells classified as grass.
const GRASS_WEIGHT: u32 = 70;
/// Per-hundred share of cells classified as water.
const WATER_WEIGHT: u32 = 18;

/// Classifies the terrain for the provided coordinate.
///
/// The origin is unconditionally grass so the starting tile is always safe.
pub(crate) fn classify(coord: AxialCoord) -> TerrainKind {
    if coord == AxialCoord::ORIGIN {
        return TerrainKind::Grass;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(coordinate_key(coord));
    let roll = rng.gen_range(0..100_u32);
    if roll < GRASS_WEIGHT {
        TerrainKind::Grass
    } else if roll < GRASS_WEIGHT + WATER_WEIGHT {
        TerrainKind::Water
    } else {
        TerrainKind::Rock
    }
}

fn coordinate_key(coord: AxialCoord) -> u64 {
    let q = coord.q() as u64;
    let r = coord.r() as u64;
    let mixed = TERRAIN_SEED ^ q.wrapping_mul(MIX_MULTIPLIER);
    (mixed.rotate_left(29) ^ r.wrapping_mul(MIX_MULTIPLIER)).wrapping_mul(MIX_MULTIPLIER)
}
