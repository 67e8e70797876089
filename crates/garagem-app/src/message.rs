//! Message types for the application (TEA pattern)

use garagem_core::{FilterField, FormField, Vehicle, VehicleId};

use crate::input_key::InputKey;
use crate::navigation::ScreenId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// The top screen became the visible one (initial mount, or return from
    /// another screen). List and detail screens refetch on every focus.
    FocusGained,

    /// Manual refresh: issues the same fetch a focus event would
    Refresh,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    /// Pop the top screen
    NavigateBack,

    /// Close the blocking notice
    DismissNotice,

    /// Move the confirmation dialog highlight
    DialogSelectNext,
    DialogSelectPrevious,

    /// Activate the highlighted dialog option
    DialogActivate,

    // ─────────────────────────────────────────────────────────
    // Vehicle List
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,

    /// Open the detail screen for the selected row
    OpenSelected,

    /// Open the detail screen for a given vehicle
    OpenVehicle { vehicle_id: VehicleId },

    /// Open the form in create mode
    NewVehicle,

    /// Enter filter editing mode
    StartFilterEdit,

    /// Leave filter editing mode (filters keep their values)
    StopFilterEdit,

    NextFilterField,
    PreviousFilterField,

    /// Replace the text of one filter field
    FilterInput { field: FilterField, text: String },

    ClearFilters,

    /// `list()` finished
    VehiclesLoaded {
        screen: ScreenId,
        seq: u64,
        vehicles: Vec<Vehicle>,
    },

    /// `list()` failed
    VehiclesLoadFailed {
        screen: ScreenId,
        seq: u64,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Vehicle Detail
    // ─────────────────────────────────────────────────────────
    /// Open the form in edit mode for the shown vehicle
    EditVehicle,

    /// `get(id)` finished (detail fetch or form hydration)
    VehicleLoaded {
        screen: ScreenId,
        seq: u64,
        vehicle: Vehicle,
    },

    /// `get(id)` failed
    VehicleLoadFailed {
        screen: ScreenId,
        seq: u64,
        error: String,
    },

    /// Open the delete confirmation prompt (no network call)
    RequestDelete,

    /// Accept the delete confirmation prompt
    ConfirmDelete,

    /// Dismiss the delete confirmation prompt
    CancelDelete,

    /// `delete(id)` finished
    VehicleDeleted { screen: ScreenId },

    /// `delete(id)` failed
    VehicleDeleteFailed { screen: ScreenId, error: String },

    // ─────────────────────────────────────────────────────────
    // Vehicle Form
    // ─────────────────────────────────────────────────────────
    FormFocusNext,
    FormFocusPrevious,

    /// Replace the text of one form field
    FormInput { field: FormField, text: String },

    /// Validate and dispatch create/update
    SubmitForm,

    /// `create`/`update` finished
    VehicleSaved {
        screen: ScreenId,
        vehicle: Vehicle,
        created: bool,
    },

    /// `create`/`update` failed
    VehicleSaveFailed { screen: ScreenId, error: String },
}

impl Message {
    /// Messages produced by a background action task.
    ///
    /// Every dispatched action reports exactly one of these.
    pub fn is_action_result(&self) -> bool {
        matches!(
            self,
            Message::VehiclesLoaded { .. }
                | Message::VehiclesLoadFailed { .. }
                | Message::VehicleLoaded { .. }
                | Message::VehicleLoadFailed { .. }
                | Message::VehicleDeleted { .. }
                | Message::VehicleDeleteFailed { .. }
                | Message::VehicleSaved { .. }
                | Message::VehicleSaveFailed { .. }
        )
    }
}
