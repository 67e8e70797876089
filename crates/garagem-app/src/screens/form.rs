//! Vehicle form controller state

use garagem_core::{
    FieldErrors, FormField, LoadPhase, Vehicle, VehicleForm, VehicleId, VehiclePayload,
};

use super::FetchTracker;

/// Selected at mount by the presence of a vehicle id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(VehicleId),
}

#[derive(Debug, Clone)]
pub struct FormScreen {
    pub mode: FormMode,
    pub form: VehicleForm,
    pub focused: FormField,
    /// Inline validation errors from the last submit
    pub errors: FieldErrors,
    /// `create`/`update` in flight
    pub busy: bool,
    /// Hydration state; create mode starts `Ready`
    pub phase: LoadPhase,
    fetch: FetchTracker,
}

impl FormScreen {
    pub fn new(vehicle_id: Option<VehicleId>) -> Self {
        let (mode, phase) = match vehicle_id {
            Some(id) => (FormMode::Edit(id), LoadPhase::Loading),
            None => (FormMode::Create, LoadPhase::Ready),
        };
        Self {
            mode,
            form: VehicleForm::new(),
            focused: FormField::default(),
            errors: FieldErrors::new(),
            busy: false,
            phase,
            fetch: FetchTracker::default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn vehicle_id(&self) -> Option<&VehicleId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Start loading the record being edited.
    ///
    /// Returns `None` in create mode and once the draft has been hydrated, so
    /// regaining focus never overwrites the user's edits.
    pub fn begin_hydration(&mut self) -> Option<(u64, VehicleId)> {
        let id = self.vehicle_id()?.clone();
        if self.phase.is_ready() {
            return None;
        }
        self.phase = LoadPhase::Loading;
        Some((self.fetch.begin(), id))
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.fetch.is_current(seq)
    }

    pub fn apply_vehicle(&mut self, seq: u64, vehicle: &Vehicle) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.form = VehicleForm::from_vehicle(vehicle);
        self.errors.clear();
        self.phase = LoadPhase::Ready;
        true
    }

    pub fn apply_error(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.phase = LoadPhase::Error;
        true
    }

    /// Input is disabled while loading, after a failed hydration and while
    /// a save is in flight.
    pub fn accepts_input(&self) -> bool {
        self.phase.is_ready() && !self.busy
    }

    /// Replace a field's text and clear its inline error.
    pub fn set_input(&mut self, field: FormField, text: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.form.set(field, text);
        self.errors.remove(&field);
        true
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Validate the draft and, when valid, mark the form busy.
    ///
    /// Returns the payload to send, or `None` if the submit is blocked
    /// (busy, not hydrated, or invalid; invalid fields land in `errors`).
    pub fn begin_submit(&mut self, fallback_year: i32) -> Option<VehiclePayload> {
        if !self.accepts_input() {
            return None;
        }
        match self.form.to_payload(fallback_year) {
            Ok(payload) => {
                self.errors.clear();
                self.busy = true;
                Some(payload)
            }
            Err(errors) => {
                if let Some(first) = errors.keys().next() {
                    self.focused = *first;
                }
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.busy = false;
    }
}
