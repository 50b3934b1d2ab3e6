//! Occupancy ledger tracking which coordinates are claimed by entities.

use std::collections::HashMap;

use hexhaven_core::{AxialCoord, OccupantId};

/// Mapping from coordinate to the occupying entity's opaque handle.
///
/// Independent of tile existence: a coordinate may carry a marker even when
/// no tile was generated there. At most one marker exists per coordinate.
#[derive(Debug, Default)]
pub(crate) struct OccupancyLedger {
    entries: HashMap<AxialCoord, OccupantId>,
}

impl OccupancyLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records occupation, returning the marker that was replaced, if any.
    pub(crate) fn mark(&mut self, coord: AxialCoord, occupant: OccupantId) -> Option<OccupantId> {
        self.entries.insert(coord, occupant)
    }

    pub(crate) fn occupant(&self, coord: AxialCoord) -> Option<OccupantId> {
        self.entries.get(&coord).copied()
    }

    pub(crate) fn is_occupied(&self, coord: AxialCoord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Releases the marker at the coordinate, returning it if one existed.
    pub(crate) fn clear(&mut self, coord: AxialCoord) -> Option<OccupantId> {
        self.entries.remove(&coord)
    }

    /// Removes every marker unconditionally, reporting how many were held.
    pub(crate) fn clear_all(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }
}
