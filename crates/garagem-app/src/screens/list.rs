//! Vehicle list controller state

use garagem_core::{FilterField, LoadPhase, Vehicle, VehicleFilter};

use super::FetchTracker;

/// Snapshot of the remote collection plus the filtered view over it
#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    pub phase: LoadPhase,
    snapshot: Vec<Vehicle>,
    filter: VehicleFilter,
    /// Indices into `snapshot` passing `filter`, in snapshot order
    visible: Vec<usize>,
    /// Index into `visible`
    selected: usize,
    /// Filter bar has keyboard focus
    pub editing_filter: bool,
    pub filter_focus: FilterField,
    fetch: FetchTracker,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a full refresh; returns the sequence the response must carry.
    pub fn begin_fetch(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.fetch.begin()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.fetch.is_current(seq)
    }

    /// Replace the snapshot with a fresh `list()` result.
    ///
    /// Returns `false` (and changes nothing) for a superseded response.
    pub fn apply_vehicles(&mut self, seq: u64, vehicles: Vec<Vehicle>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        let selected_id = self.selected_vehicle().map(|v| v.id.clone());
        self.snapshot = vehicles;
        self.phase = LoadPhase::Ready;
        self.recompute();

        // Keep the cursor on the same record across refreshes when possible
        if let Some(id) = selected_id {
            if let Some(pos) = self
                .visible
                .iter()
                .position(|&i| self.snapshot[i].id.same_as(&id))
            {
                self.selected = pos;
            }
        }
        true
    }

    /// Record a failed `list()`. The previous snapshot is kept but hidden.
    pub fn apply_error(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.phase = LoadPhase::Error;
        true
    }

    pub fn snapshot(&self) -> &[Vehicle] {
        &self.snapshot
    }

    pub fn filter(&self) -> &VehicleFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, field: FilterField, text: impl Into<String>) {
        self.filter.set(field, text);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    /// The filtered view, in snapshot order
    pub fn visible(&self) -> impl Iterator<Item = &Vehicle> {
        self.visible.iter().map(|&i| &self.snapshot[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.visible.get(self.selected).map(|&i| &self.snapshot[i])
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn recompute(&mut self) {
        self.visible = self.filter.apply(&self.snapshot);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}
