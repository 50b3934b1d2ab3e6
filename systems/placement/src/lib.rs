#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure placement system responsible for emitting occupancy commands.
//!
//! The system validates the hovered cell against tile existence and the
//! occupancy ledger, produces a declarative preview, and translates
//! confirmed input into [`Command`] batches. It enforces exclusivity at the
//! edge: an occupied or tile-less cell is never placeable, so the world's
//! overwrite-permitting ledger is only ever written to free coordinates on
//! this path.

use glam::Vec2;
use hexhaven_core::{geometry, AxialCoord, Command, OccupantId};

/// Declarative preview describing a potential placement under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementPreview {
    /// Coordinate the placement would claim.
    pub coord: AxialCoord,
    /// World-plane anchor position for the placed entity.
    pub position: Vec2,
    /// Indicates whether the coordinate can currently be claimed.
    pub placeable: bool,
}

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementInput {
    /// Indicates whether the player confirmed a placement on this frame.
    pub confirm_action: bool,
    /// Indicates whether the player requested removal on this frame.
    pub remove_action: bool,
    /// Cell currently hovered by the cursor, if any.
    pub cursor_coord: Option<AxialCoord>,
}

/// Placement system that translates previews + input into occupancy commands.
#[derive(Debug, Default)]
pub struct Placement {
    next_occupant: u32,
}

impl Placement {
    /// Creates a new placement system with a reset identifier counter.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_occupant: 0 }
    }

    /// Computes the preview for the hovered cell, if any.
    ///
    /// The `has_tile` and `occupant_at` closures should mirror the world's
    /// query helpers. An absent cursor yields no preview, so callers can
    /// probe without guarding against missing coordinates.
    #[must_use]
    pub fn preview<F, G>(
        cursor: Option<AxialCoord>,
        mut has_tile: F,
        mut occupant_at: G,
    ) -> Option<PlacementPreview>
    where
        F: FnMut(AxialCoord) -> bool,
        G: FnMut(AxialCoord) -> Option<OccupantId>,
    {
        let coord = cursor?;
        let placeable = has_tile(coord) && occupant_at(coord).is_none();
        Some(PlacementPreview {
            coord,
            position: geometry::to_world(coord),
            placeable,
        })
    }

    /// Consumes the preview and input to emit occupancy commands.
    pub fn handle<G>(
        &mut self,
        preview: Option<PlacementPreview>,
        input: PlacementInput,
        mut occupant_at: G,
        out: &mut Vec<Command>,
    ) where
        G: FnMut(AxialCoord) -> Option<OccupantId>,
    {
        if input.confirm_action {
            if let Some(preview) = preview {
                if preview.placeable {
                    out.push(Command::MarkOccupied {
                        coord: preview.coord,
                        occupant: self.allocate(),
                    });
                }
            }
        }

        if input.remove_action {
            if let Some(coord) = input.cursor_coord {
                if occupant_at(coord).is_some() {
                    out.push(Command::ClearOccupied { coord });
                }
            }
        }
    }

    fn allocate(&mut self) -> OccupantId {
        let id = OccupantId::new(self.next_occupant);
        self.next_occupant = self.next_occupant.wrapping_add(1);
        id
    }
}
