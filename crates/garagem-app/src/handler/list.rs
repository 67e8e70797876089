//! Vehicle list handlers

use garagem_core::prelude::*;
use garagem_core::{FilterField, Vehicle};

use crate::navigation::{Route, ScreenId};
use crate::notice::{self, Notice};
use crate::screens::ListScreen;
use crate::state::AppState;

use super::{navigation, UpdateResult};

fn top_list(state: &mut AppState) -> Option<&mut ListScreen> {
    state.navigator.top_mut().screen.as_list_mut()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.select_next();
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.select_previous();
    }
    UpdateResult::none()
}

pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    let vehicle_id = state
        .navigator
        .top()
        .screen
        .as_list()
        .filter(|list| list.phase.is_ready())
        .and_then(ListScreen::selected_vehicle)
        .map(|v| v.id.clone());

    match vehicle_id {
        Some(vehicle_id) => navigation::navigate_to(state, Route::VehicleDetail { vehicle_id }),
        None => UpdateResult::none(),
    }
}

pub fn handle_new_vehicle(state: &mut AppState) -> UpdateResult {
    if top_list(state).is_none() {
        return UpdateResult::none();
    }
    navigation::navigate_to(state, Route::VehicleForm { vehicle_id: None })
}

pub fn handle_start_filter_edit(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.editing_filter = true;
    }
    UpdateResult::none()
}

pub fn handle_stop_filter_edit(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.editing_filter = false;
    }
    UpdateResult::none()
}

pub fn handle_next_filter_field(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.filter_focus = list.filter_focus.next();
    }
    UpdateResult::none()
}

pub fn handle_previous_filter_field(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.filter_focus = list.filter_focus.prev();
    }
    UpdateResult::none()
}

pub fn handle_filter_input(state: &mut AppState, field: FilterField, text: String) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.set_filter(field, text);
    }
    UpdateResult::none()
}

pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    if let Some(list) = top_list(state) {
        list.clear_filters();
    }
    UpdateResult::none()
}

pub fn handle_vehicles_loaded(
    state: &mut AppState,
    screen: ScreenId,
    seq: u64,
    vehicles: Vec<Vehicle>,
) -> UpdateResult {
    let Some(list) = state.navigator.get_mut(screen).and_then(|s| s.as_list_mut()) else {
        debug!("Discarding vehicle list for closed screen {}", screen);
        return UpdateResult::none();
    };

    let count = vehicles.len();
    if list.apply_vehicles(seq, vehicles) {
        debug!("List {} refreshed with {} vehicles", screen, count);
    } else {
        debug!("Discarding stale vehicle list for {} (seq {})", screen, seq);
    }
    UpdateResult::none()
}

pub fn handle_vehicles_load_failed(
    state: &mut AppState,
    screen: ScreenId,
    seq: u64,
    error: String,
) -> UpdateResult {
    let Some(list) = state.navigator.get_mut(screen).and_then(|s| s.as_list_mut()) else {
        debug!("Discarding list failure for closed screen {}: {}", screen, error);
        return UpdateResult::none();
    };

    if list.apply_error(seq) {
        warn!("Failed to load vehicles: {}", error);
        state.show_notice(Notice::error(notice::LOAD_LIST_FAILED));
    } else {
        debug!("Discarding stale list failure for {} (seq {}): {}", screen, seq, error);
    }
    UpdateResult::none()
}
