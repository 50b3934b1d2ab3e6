#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Camera-bounds collaborator deriving the pannable viewport rectangle.
//!
//! The world only guarantees that its bounds tightly cover every tile
//! position; how far past the edge a camera may pan is presentation policy.
//! This system converts a margin expressed in hexes into world units and
//! expands the bounds accordingly.

use hexhaven_core::{geometry, WorldRect};

/// Viewport margin configuration, measured in hexes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    margin_in_hexes: f32,
}

impl Config {
    /// Creates a new configuration with the provided margin factor.
    #[must_use]
    pub const fn new(margin_in_hexes: f32) -> Self {
        Self { margin_in_hexes }
    }

    /// Margin converted into world units using the shared hex size.
    #[must_use]
    pub fn margin(&self) -> f32 {
        geometry::HEX_SIZE * self.margin_in_hexes
    }
}

/// Computes the pannable rectangle from the world bounds and the margin.
///
/// Negative margins are clamped to zero so the result always contains the
/// input bounds.
#[must_use]
pub fn pan_bounds(bounds: WorldRect, config: Config) -> WorldRect {
    bounds.expanded(config.margin().max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use hexhaven_core::{Command, Event};
    use hexhaven_world::{apply, query, World};

    #[test]
    fn margin_scales_with_the_hex_size_constant() {
        let config = Config::new(3.0);
        assert_eq!(config.margin(), geometry::HEX_SIZE * 3.0);
    }

    #[test]
    fn pan_bounds_grows_each_side_by_the_margin() {
        let bounds = WorldRect::new(Vec2::new(-10.0, -20.0), Vec2::new(30.0, 40.0));
        let config = Config::new(2.0);

        let pannable = pan_bounds(bounds, config);

        let margin = config.margin();
        assert_eq!(pannable.min(), bounds.min() - Vec2::splat(margin));
        assert_eq!(pannable.max(), bounds.max() + Vec2::splat(margin));
    }

    #[test]
    fn negative_margin_never_shrinks_the_bounds() {
        let bounds = WorldRect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let pannable = pan_bounds(bounds, Config::new(-5.0));
        assert_eq!(pannable, bounds);
    }

    #[test]
    fn pannable_rect_contains_every_generated_tile() {
        let mut world = World::new();
        let mut events: Vec<Event> = Vec::new();
        apply(&mut world, Command::GenerateWorld { radius: 4 }, &mut events);

        let pannable = pan_bounds(query::bounds(&world), Config::new(1.5));

        for tile in query::all_tiles(&world).iter() {
            assert!(pannable.contains(tile.position()));
        }
    }
}
