//! Vehicle form handlers

use garagem_core::prelude::*;
use garagem_core::{current_year, FormField, Vehicle};

use crate::navigation::{Screen, ScreenId};
use crate::notice::{self, Notice};
use crate::screens::{FormMode, FormScreen};
use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

fn top_form(state: &mut AppState) -> Option<&mut FormScreen> {
    state.navigator.top_mut().screen.as_form_mut()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(form) = top_form(state) {
        form.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    if let Some(form) = top_form(state) {
        form.focus_previous();
    }
    UpdateResult::none()
}

pub fn handle_form_input(state: &mut AppState, field: FormField, text: String) -> UpdateResult {
    if let Some(form) = top_form(state) {
        if !form.set_input(field, &text) {
            trace!("Form input ignored while busy or loading");
        }
    }
    UpdateResult::none()
}

/// Validate, then dispatch create or update. Invalid drafts never reach the
/// network.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let entry = state.navigator.top_mut();
    let screen = entry.id;
    let Some(form) = entry.screen.as_form_mut() else {
        return UpdateResult::none();
    };

    if form.busy {
        debug!("Submit ignored: save already in flight");
        return UpdateResult::none();
    }

    let Some(payload) = form.begin_submit(current_year()) else {
        debug!("Submit blocked: {} field error(s)", form.errors.len());
        return UpdateResult::none();
    };

    let action = match &form.mode {
        FormMode::Create => UpdateAction::CreateVehicle { screen, payload },
        FormMode::Edit(vehicle_id) => UpdateAction::UpdateVehicle {
            screen,
            vehicle_id: vehicle_id.clone(),
            payload,
        },
    };
    UpdateResult::action(action)
}

/// Save succeeded: confirm and return to the caller.
pub fn handle_vehicle_saved(
    state: &mut AppState,
    screen: ScreenId,
    vehicle: Vehicle,
    created: bool,
) -> UpdateResult {
    if let Some(form) = state.navigator.get_mut(screen).and_then(Screen::as_form_mut) {
        form.finish_submit();
    }

    info!(
        "Vehicle {} {}",
        vehicle.id,
        if created { "created" } else { "updated" }
    );
    state.show_notice(Notice::success(if created {
        notice::CREATED
    } else {
        notice::UPDATED
    }));

    if state.navigator.is_top(screen) {
        navigation::pop_screen(state)
    } else {
        UpdateResult::none()
    }
}

/// Save failed: keep every entered value for a retry.
pub fn handle_vehicle_save_failed(
    state: &mut AppState,
    screen: ScreenId,
    error: String,
) -> UpdateResult {
    if let Some(form) = state.navigator.get_mut(screen).and_then(Screen::as_form_mut) {
        form.finish_submit();
    }
    warn!("Failed to save vehicle: {}", error);
    state.show_notice(Notice::error(notice::SAVE_FAILED));
    UpdateResult::none()
}
