//! Vehicle detail handlers (and form hydration results, which share `get`)

use garagem_core::prelude::*;
use garagem_core::Vehicle;

use crate::confirm_dialog::ConfirmDialogState;
use crate::navigation::{Route, Screen, ScreenId};
use crate::notice::{self, Notice};
use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

pub fn handle_edit_vehicle(state: &mut AppState) -> UpdateResult {
    let vehicle_id = match state.navigator.top().screen.as_detail() {
        Some(detail) if detail.accepts_record_actions() => detail.vehicle_id.clone(),
        _ => return UpdateResult::none(),
    };
    navigation::navigate_to(
        state,
        Route::VehicleForm {
            vehicle_id: Some(vehicle_id),
        },
    )
}

/// First phase of delete: only opens the prompt.
pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    match state.navigator.top().screen.as_detail() {
        Some(detail) if detail.accepts_record_actions() => {
            state.confirm_dialog = Some(ConfirmDialogState::delete_confirmation());
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Second phase of delete: the prompt was accepted.
///
/// Only honoured while the delete prompt is the open dialog.
pub fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    if !state.confirm_dialog.as_ref().is_some_and(|d| d.is_delete()) {
        debug!("Ignoring delete confirmation without an open delete prompt");
        return UpdateResult::none();
    }
    state.confirm_dialog = None;

    let entry = state.navigator.top_mut();
    let screen = entry.id;
    let Some(detail) = entry.screen.as_detail_mut() else {
        return UpdateResult::none();
    };
    if detail.deleting {
        return UpdateResult::none();
    }

    detail.deleting = true;
    info!("Deleting vehicle {}", detail.vehicle_id);
    UpdateResult::action(UpdateAction::DeleteVehicle {
        screen,
        vehicle_id: detail.vehicle_id.clone(),
    })
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    debug!("Delete cancelled");
    UpdateResult::none()
}

pub fn handle_vehicle_loaded(
    state: &mut AppState,
    screen: ScreenId,
    seq: u64,
    vehicle: Vehicle,
) -> UpdateResult {
    let applied = match state.navigator.get_mut(screen) {
        Some(Screen::Detail(detail)) => detail.apply_vehicle(seq, vehicle),
        Some(Screen::Form(form)) => form.apply_vehicle(seq, &vehicle),
        _ => {
            debug!("Discarding vehicle for closed screen {}", screen);
            return UpdateResult::none();
        }
    };
    if !applied {
        debug!("Discarding stale vehicle for {} (seq {})", screen, seq);
    }
    UpdateResult::none()
}

pub fn handle_vehicle_load_failed(
    state: &mut AppState,
    screen: ScreenId,
    seq: u64,
    error: String,
) -> UpdateResult {
    let applied = match state.navigator.get_mut(screen) {
        Some(Screen::Detail(detail)) => detail.apply_error(seq),
        Some(Screen::Form(form)) => form.apply_error(seq),
        _ => {
            debug!("Discarding load failure for closed screen {}: {}", screen, error);
            return UpdateResult::none();
        }
    };

    if applied {
        warn!("Failed to load vehicle for {}: {}", screen, error);
        state.show_notice(Notice::error(notice::LOAD_VEHICLE_FAILED));
    } else {
        debug!("Discarding stale load failure for {} (seq {}): {}", screen, seq, error);
    }
    UpdateResult::none()
}

/// Delete succeeded: back to the caller, unconditionally.
pub fn handle_vehicle_deleted(state: &mut AppState, screen: ScreenId) -> UpdateResult {
    match state.navigator.get_mut(screen).and_then(Screen::as_detail_mut) {
        Some(detail) => {
            detail.deleting = false;
            info!("Vehicle {} deleted", detail.vehicle_id);
        }
        None => {
            debug!("Delete finished for closed screen {}", screen);
            return UpdateResult::none();
        }
    }

    if state.navigator.is_top(screen) {
        navigation::pop_screen(state)
    } else {
        UpdateResult::none()
    }
}

/// Delete failed: nothing was mutated locally, so only report it.
pub fn handle_vehicle_delete_failed(
    state: &mut AppState,
    screen: ScreenId,
    error: String,
) -> UpdateResult {
    if let Some(detail) = state.navigator.get_mut(screen).and_then(Screen::as_detail_mut) {
        detail.deleting = false;
    }
    warn!("Failed to delete vehicle: {}", error);
    state.show_notice(Notice::error(notice::DELETE_FAILED));
    UpdateResult::none()
}
