//! Focus, push and pop

use garagem_core::prelude::*;

use crate::message::Message;
use crate::navigation::{Route, Screen};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// The top screen became visible: list and detail refetch unconditionally,
/// an edit form hydrates once.
pub fn handle_focus_gained(state: &mut AppState) -> UpdateResult {
    let entry = state.navigator.top_mut();
    let screen = entry.id;

    match &mut entry.screen {
        Screen::List(list) => {
            let seq = list.begin_fetch();
            debug!("List {} focused, fetching (seq {})", screen, seq);
            UpdateResult::action(UpdateAction::FetchVehicles { screen, seq })
        }
        Screen::Detail(detail) => {
            if detail.deleting {
                return UpdateResult::none();
            }
            let seq = detail.begin_fetch();
            debug!(
                "Detail {} focused, fetching vehicle {} (seq {})",
                screen, detail.vehicle_id, seq
            );
            UpdateResult::action(UpdateAction::FetchVehicle {
                screen,
                seq,
                vehicle_id: detail.vehicle_id.clone(),
            })
        }
        Screen::Form(form) => match form.begin_hydration() {
            Some((seq, vehicle_id)) => {
                debug!("Form {} hydrating vehicle {} (seq {})", screen, vehicle_id, seq);
                UpdateResult::action(UpdateAction::FetchVehicle {
                    screen,
                    seq,
                    vehicle_id,
                })
            }
            None => UpdateResult::none(),
        },
    }
}

/// Push a screen; it receives focus next.
pub fn navigate_to(state: &mut AppState, route: Route) -> UpdateResult {
    let id = state.navigator.push(route);
    debug!(
        "Navigated to {} {} (depth {})",
        state.navigator.top().screen.title(),
        id,
        state.navigator.depth()
    );
    UpdateResult::message(Message::FocusGained)
}

/// User-initiated back. Ignored while the top screen has a mutation in flight.
pub fn navigate_back(state: &mut AppState) -> UpdateResult {
    let busy = match &state.navigator.top().screen {
        Screen::Form(form) => form.busy,
        Screen::Detail(detail) => detail.deleting,
        Screen::List(_) => false,
    };
    if busy {
        debug!("Back ignored: request in flight");
        return UpdateResult::none();
    }
    pop_screen(state)
}

/// Pop the top screen; the one below regains focus.
pub fn pop_screen(state: &mut AppState) -> UpdateResult {
    match state.navigator.pop() {
        Some(entry) => {
            debug!("Closed {} {}", entry.screen.title(), entry.id);
            UpdateResult::message(Message::FocusGained)
        }
        None => {
            debug!("Back ignored at root screen");
            UpdateResult::none()
        }
    }
}
