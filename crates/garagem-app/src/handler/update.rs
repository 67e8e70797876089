//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::navigation::Route;
use crate::state::AppState;

use super::{detail, form, keys::handle_key, list, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        Message::FocusGained | Message::Refresh => navigation::handle_focus_gained(state),

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::NavigateBack => navigation::navigate_back(state),

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        Message::DialogSelectNext => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }

        Message::DialogSelectPrevious => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_previous();
            }
            UpdateResult::none()
        }

        Message::DialogActivate => {
            match state.confirm_dialog.as_ref().and_then(|d| d.selected_message()) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Vehicle List
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => list::handle_select_next(state),
        Message::SelectPrevious => list::handle_select_previous(state),
        Message::OpenSelected => list::handle_open_selected(state),
        Message::OpenVehicle { vehicle_id } => {
            navigation::navigate_to(state, Route::VehicleDetail { vehicle_id })
        }
        Message::NewVehicle => list::handle_new_vehicle(state),
        Message::StartFilterEdit => list::handle_start_filter_edit(state),
        Message::StopFilterEdit => list::handle_stop_filter_edit(state),
        Message::NextFilterField => list::handle_next_filter_field(state),
        Message::PreviousFilterField => list::handle_previous_filter_field(state),
        Message::FilterInput { field, text } => list::handle_filter_input(state, field, text),
        Message::ClearFilters => list::handle_clear_filters(state),
        Message::VehiclesLoaded {
            screen,
            seq,
            vehicles,
        } => list::handle_vehicles_loaded(state, screen, seq, vehicles),
        Message::VehiclesLoadFailed { screen, seq, error } => {
            list::handle_vehicles_load_failed(state, screen, seq, error)
        }

        // ─────────────────────────────────────────────────────────
        // Vehicle Detail
        // ─────────────────────────────────────────────────────────
        Message::EditVehicle => detail::handle_edit_vehicle(state),
        Message::VehicleLoaded {
            screen,
            seq,
            vehicle,
        } => detail::handle_vehicle_loaded(state, screen, seq, vehicle),
        Message::VehicleLoadFailed { screen, seq, error } => {
            detail::handle_vehicle_load_failed(state, screen, seq, error)
        }
        Message::RequestDelete => detail::handle_request_delete(state),
        Message::ConfirmDelete => detail::handle_confirm_delete(state),
        Message::CancelDelete => detail::handle_cancel_delete(state),
        Message::VehicleDeleted { screen } => detail::handle_vehicle_deleted(state, screen),
        Message::VehicleDeleteFailed { screen, error } => {
            detail::handle_vehicle_delete_failed(state, screen, error)
        }

        // ─────────────────────────────────────────────────────────
        // Vehicle Form
        // ─────────────────────────────────────────────────────────
        Message::FormFocusNext => form::handle_focus_next(state),
        Message::FormFocusPrevious => form::handle_focus_previous(state),
        Message::FormInput { field, text } => form::handle_form_input(state, field, text),
        Message::SubmitForm => form::handle_submit(state),
        Message::VehicleSaved {
            screen,
            vehicle,
            created,
        } => form::handle_vehicle_saved(state, screen, vehicle, created),
        Message::VehicleSaveFailed { screen, error } => {
            form::handle_vehicle_save_failed(state, screen, error)
        }
    }
}
