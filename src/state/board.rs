use crate::api::ApiError;
use crate::models::StatusSnapshot;

use super::display::DisplayState;

/// Marks one poll cycle; later cycles carry larger sequence numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleTicket(u64);

impl CycleTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Current display plus the bookkeeping that keeps settles in cycle order.
///
/// Cycles may overlap when a request outlives the poll interval. Only a
/// completion newer than the last applied one may touch the display.
#[derive(Debug, Default)]
pub struct StatusBoard {
    display: DisplayState,
    issued: u64,
    applied: u64,
}

impl StatusBoard {
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Open a new cycle
    pub fn begin_cycle(&mut self) -> CycleTicket {
        self.issued += 1;
        CycleTicket(self.issued)
    }

    /// Apply a cycle's outcome, returning the new display if it was applied.
    ///
    /// Returns `None` for a stale completion (an older cycle settling after a
    /// newer one already did).
    pub fn settle(
        &mut self,
        ticket: CycleTicket,
        outcome: Result<StatusSnapshot, ApiError>,
    ) -> Option<DisplayState> {
        if ticket.0 <= self.applied {
            log::debug!(
                "Discarding stale wall-eno status from cycle {} (cycle {} already shown)",
                ticket.0,
                self.applied
            );
            return None;
        }

        self.applied = ticket.0;
        self.display = self.display.settle(&outcome);
        Some(self.display.clone())
    }
}
