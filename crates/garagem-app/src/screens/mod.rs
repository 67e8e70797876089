//! Per-screen controller state.
//!
//! Each screen instance on the navigation stack owns one of these. Fetches
//! are tagged with a sequence number from the screen's [`FetchTracker`]; only
//! the latest issued fetch may update the screen.

mod detail;
mod form;
mod list;

pub use detail::DetailScreen;
pub use form::{FormMode, FormScreen};
pub use list::ListScreen;

/// Monotonic request sequence for one screen instance ("last fetch wins")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTracker {
    latest: u64,
}

impl FetchTracker {
    /// Issue a new sequence number, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}
