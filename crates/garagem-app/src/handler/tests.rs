//! Tests for handler module

use garagem_core::{FilterField, FormField, LoadPhase, Vehicle, VehicleId, VehiclePayload};

use super::{update, UpdateAction, UpdateResult};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::{Route, Screen, ScreenId};
use crate::state::{AppState, UiMode};

fn vehicle(id: i64, plate: &str, make: &str, model: &str, year: i32, color: &str) -> Vehicle {
    Vehicle::from_payload(
        VehicleId::Number(id),
        VehiclePayload {
            plate: plate.into(),
            make: make.into(),
            model: model.into(),
            year,
            color: color.into(),
        },
    )
}

fn snapshot() -> Vec<Vehicle> {
    vec![
        vehicle(1, "ABC1234", "Fiat", "Uno", 2010, "Red"),
        vehicle(2, "XYZ9999", "Ford", "Ka", 2015, "Blue"),
    ]
}

/// Run `msg` and every follow-up message, collecting dispatched actions.
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let UpdateResult { message, action } = update(state, m);
        actions.extend(action);
        next = message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

/// Focus the root list and feed it `vehicles`
fn loaded_state(vehicles: Vec<Vehicle>) -> AppState {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::FocusGained);
    let [UpdateAction::FetchVehicles { screen, seq }] = actions.as_slice() else {
        panic!("expected one list fetch, got {actions:?}");
    };
    run(
        &mut state,
        Message::VehiclesLoaded {
            screen: *screen,
            seq: *seq,
            vehicles,
        },
    );
    state
}

fn open_detail(state: &mut AppState, id: i64) -> (ScreenId, u64) {
    let actions = run(
        state,
        Message::OpenVehicle {
            vehicle_id: VehicleId::Number(id),
        },
    );
    match actions.as_slice() {
        [UpdateAction::FetchVehicle {
            screen,
            seq,
            vehicle_id,
        }] => {
            assert_eq!(vehicle_id, &VehicleId::Number(id));
            (*screen, *seq)
        }
        other => panic!("expected one vehicle fetch, got {other:?}"),
    }
}

/// Open the detail for `id` and land its record from [`snapshot`]
fn open_loaded_detail(state: &mut AppState, id: i64) -> ScreenId {
    let (detail, seq) = open_detail(state, id);
    let vehicle = snapshot()
        .into_iter()
        .find(|v| v.id == VehicleId::Number(id))
        .expect("vehicle in snapshot");
    run(
        state,
        Message::VehicleLoaded {
            screen: detail,
            seq,
            vehicle,
        },
    );
    detail
}

fn fill_form(state: &mut AppState, values: [&str; 5]) {
    for (field, text) in FormField::ALL.into_iter().zip(values) {
        run(
            state,
            Message::FormInput {
                field,
                text: text.to_string(),
            },
        );
    }
}

fn top_form(state: &AppState) -> &crate::screens::FormScreen {
    state.navigator.top().screen.as_form().expect("form on top")
}

// ─────────────────────────────────────────────────────────────
// Focus / fetch lifecycle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_every_list_focus_issues_exactly_one_fetch() {
    let mut state = loaded_state(snapshot());
    for _ in 0..3 {
        let actions = run(&mut state, Message::FocusGained);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], UpdateAction::FetchVehicles { .. }));
    }
}

#[test]
fn test_returning_to_list_refetches_once() {
    let mut state = loaded_state(snapshot());
    open_detail(&mut state, 1);

    let actions = run(&mut state, Message::NavigateBack);
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], UpdateAction::FetchVehicles { .. }));
    assert_eq!(state.ui_mode(), UiMode::List);
}

#[test]
fn test_returning_to_detail_refetches_once() {
    let mut state = loaded_state(snapshot());
    let (detail, seq) = open_detail(&mut state, 1);
    run(
        &mut state,
        Message::VehicleLoaded {
            screen: detail,
            seq,
            vehicle: snapshot()[0].clone(),
        },
    );

    let actions = run(&mut state, Message::EditVehicle);
    assert_eq!(actions.len(), 1, "form hydration");

    let actions = run(&mut state, Message::NavigateBack);
    assert_eq!(
        actions,
        vec![UpdateAction::FetchVehicle {
            screen: detail,
            seq: seq + 1,
            vehicle_id: VehicleId::Number(1),
        }]
    );
}

#[test]
fn test_list_keeps_latest_response_only() {
    let mut state = AppState::new();
    let first = run(&mut state, Message::FocusGained);
    let second = run(&mut state, Message::FocusGained);
    let (UpdateAction::FetchVehicles { screen, seq: old }, UpdateAction::FetchVehicles { seq: new, .. }) =
        (&first[0], &second[0])
    else {
        panic!("expected list fetches");
    };

    run(
        &mut state,
        Message::VehiclesLoaded {
            screen: *screen,
            seq: *new,
            vehicles: vec![snapshot()[1].clone()],
        },
    );
    // The earlier request lands last and must not overwrite
    run(
        &mut state,
        Message::VehiclesLoaded {
            screen: *screen,
            seq: *old,
            vehicles: snapshot(),
        },
    );

    let list = state.navigator.top().screen.as_list().unwrap();
    assert_eq!(list.snapshot().len(), 1);
    assert_eq!(list.snapshot()[0].plate, "XYZ9999");
}

#[test]
fn test_response_for_popped_screen_is_ignored() {
    let mut state = loaded_state(snapshot());
    let (detail, seq) = open_detail(&mut state, 1);
    run(&mut state, Message::NavigateBack);

    run(
        &mut state,
        Message::VehicleLoadFailed {
            screen: detail,
            seq,
            error: "late".into(),
        },
    );
    assert!(state.notice.is_none());
    assert!(!state.navigator.contains(detail));
}

#[test]
fn test_stale_failure_does_not_raise_notice() {
    let mut state = AppState::new();
    let first = run(&mut state, Message::FocusGained);
    run(&mut state, Message::FocusGained);
    let UpdateAction::FetchVehicles { screen, seq } = first[0].clone() else {
        panic!("expected list fetch");
    };

    run(
        &mut state,
        Message::VehiclesLoadFailed {
            screen,
            seq,
            error: "timeout".into(),
        },
    );
    assert!(state.notice.is_none());
    assert!(state.navigator.top().screen.as_list().unwrap().phase.is_loading());
}

#[test]
fn test_list_failure_raises_blocking_notice() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::FocusGained);
    let UpdateAction::FetchVehicles { screen, seq } = actions[0].clone() else {
        panic!("expected list fetch");
    };
    run(
        &mut state,
        Message::VehiclesLoadFailed {
            screen,
            seq,
            error: "Network error: connection refused".into(),
        },
    );

    assert_eq!(state.ui_mode(), UiMode::Notice);
    assert_eq!(
        state.navigator.top().screen.as_list().unwrap().phase,
        LoadPhase::Error
    );

    // Any key that acknowledges closes it; nothing is retried automatically
    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert!(state.notice.is_none());
}

#[test]
fn test_refresh_key_refetches() {
    let mut state = loaded_state(snapshot());
    let actions = press(&mut state, InputKey::Char('r'));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchVehicles { .. }]
    ));
}

// ─────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────

#[test]
fn test_make_filter_example() {
    let mut state = loaded_state(snapshot());
    run(
        &mut state,
        Message::FilterInput {
            field: FilterField::Make,
            text: "fi".into(),
        },
    );

    let list = state.navigator.top().screen.as_list().unwrap();
    let ids: Vec<_> = list.visible().map(|v| v.id.clone()).collect();
    assert_eq!(ids, vec![VehicleId::Number(1)]);
}

#[test]
fn test_filter_typing_through_keys() {
    let mut state = loaded_state(snapshot());
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode(), UiMode::FilterInput);

    // Plate field first, then Tab to make
    press(&mut state, InputKey::Tab);
    for c in "FO".chars() {
        press(&mut state, InputKey::Char(c));
    }
    let list = state.navigator.top().screen.as_list().unwrap();
    assert_eq!(list.filter().make, "FO");
    assert_eq!(list.visible_len(), 1);

    press(&mut state, InputKey::Backspace);
    assert_eq!(
        state.navigator.top().screen.as_list().unwrap().visible_len(),
        2
    );

    // Filter typing never fetches
    assert!(press(&mut state, InputKey::Char('q')).is_empty());
    assert!(!state.should_quit());

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode(), UiMode::List);
    assert_eq!(
        state.navigator.top().screen.as_list().unwrap().filter().make,
        "Fq"
    );
}

#[test]
fn test_clear_filters() {
    let mut state = loaded_state(snapshot());
    run(
        &mut state,
        Message::FilterInput {
            field: FilterField::Plate,
            text: "zzz".into(),
        },
    );
    assert_eq!(
        state.navigator.top().screen.as_list().unwrap().visible_len(),
        0
    );
    press(&mut state, InputKey::Char('c'));
    assert_eq!(
        state.navigator.top().screen.as_list().unwrap().visible_len(),
        2
    );
}

#[test]
fn test_open_selected_uses_filtered_view() {
    let mut state = loaded_state(snapshot());
    run(
        &mut state,
        Message::FilterInput {
            field: FilterField::Model,
            text: "ka".into(),
        },
    );
    let actions = press(&mut state, InputKey::Enter);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchVehicle { vehicle_id, .. }] if *vehicle_id == VehicleId::Number(2)
    ));
}

#[test]
fn test_open_selected_on_empty_view_does_nothing() {
    let mut state = loaded_state(Vec::new());
    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert_eq!(state.navigator.depth(), 1);
}

// ─────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────

#[test]
fn test_request_delete_alone_never_deletes() {
    let mut state = loaded_state(snapshot());
    open_loaded_detail(&mut state, 1);

    let actions = run(&mut state, Message::RequestDelete);
    assert!(actions.is_empty());
    assert_eq!(state.ui_mode(), UiMode::ConfirmDialog);

    let actions = run(&mut state, Message::CancelDelete);
    assert!(actions.is_empty());
    assert_eq!(state.ui_mode(), UiMode::Detail);
}

#[test]
fn test_confirmed_delete_dispatches_and_navigates_back() {
    let mut state = loaded_state(snapshot());
    let detail = open_loaded_detail(&mut state, 2);

    press(&mut state, InputKey::Char('d'));
    // Enter activates the highlighted option, which starts on "Cancelar"
    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert_eq!(state.ui_mode(), UiMode::Detail);

    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Right);
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(
        actions,
        vec![UpdateAction::DeleteVehicle {
            screen: detail,
            vehicle_id: VehicleId::Number(2),
        }]
    );

    // Back is blocked while deleting
    assert!(press(&mut state, InputKey::Esc).is_empty());
    assert!(state.navigator.is_top(detail));

    let actions = run(&mut state, Message::VehicleDeleted { screen: detail });
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchVehicles { .. }]
    ));
    assert_eq!(state.navigator.depth(), 1);
}

#[test]
fn test_failed_delete_stays_and_reports() {
    let mut state = loaded_state(snapshot());
    let detail = open_loaded_detail(&mut state, 1);
    run(&mut state, Message::RequestDelete);
    run(&mut state, Message::ConfirmDelete);

    let actions = run(
        &mut state,
        Message::VehicleDeleteFailed {
            screen: detail,
            error: "HTTP 500".into(),
        },
    );
    assert!(actions.is_empty());
    assert!(state.navigator.is_top(detail));
    assert_eq!(
        state.notice.as_ref().unwrap().message,
        "Não foi possível excluir o veículo."
    );
    assert!(!state.navigator.top().screen.as_detail().unwrap().deleting);
}

#[test]
fn test_confirm_delete_without_prompt_is_ignored() {
    let mut state = loaded_state(snapshot());
    let detail = open_loaded_detail(&mut state, 1);

    let actions = run(&mut state, Message::ConfirmDelete);
    assert!(actions.is_empty());
    assert!(!state.navigator.top().screen.as_detail().unwrap().deleting);
    assert!(state.navigator.is_top(detail));
}

#[test]
fn test_confirm_delete_under_quit_prompt_is_ignored() {
    let mut state = loaded_state(snapshot());
    open_loaded_detail(&mut state, 1);
    state.confirm_dialog = Some(crate::confirm_dialog::ConfirmDialogState::quit_confirmation());

    assert!(run(&mut state, Message::ConfirmDelete).is_empty());
    assert_eq!(state.ui_mode(), UiMode::ConfirmDialog);
    assert!(!state.navigator.top().screen.as_detail().unwrap().deleting);
}

#[test]
fn test_record_actions_wait_for_loaded_vehicle() {
    let mut state = loaded_state(snapshot());
    let (detail, seq) = open_detail(&mut state, 1);

    // Still loading
    assert!(press(&mut state, InputKey::Char('e')).is_empty());
    press(&mut state, InputKey::Char('d'));
    assert_eq!(state.ui_mode(), UiMode::Detail);

    run(
        &mut state,
        Message::VehicleLoadFailed {
            screen: detail,
            seq,
            error: "Vehicle not found: 1".into(),
        },
    );
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode(), UiMode::Detail);

    // Failed load
    assert!(run(&mut state, Message::EditVehicle).is_empty());
    assert!(run(&mut state, Message::RequestDelete).is_empty());
    assert!(state.confirm_dialog.is_none());
    assert!(state.navigator.is_top(detail));
}

// ─────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_submit_never_calls_network() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);

    let actions = run(&mut state, Message::SubmitForm);
    assert!(actions.is_empty());
    let form = top_form(&state);
    assert_eq!(form.errors.len(), 5);
    assert!(form.errors.values().all(|m| !m.is_empty()));
}

#[test]
fn test_each_missing_field_blocks_submit() {
    let full = ["ABC1234", "Fiat", "Uno", "2024", "Red"];
    for missing in 0..5 {
        let mut state = loaded_state(snapshot());
        run(&mut state, Message::NewVehicle);
        let mut values = full;
        values[missing] = "";
        fill_form(&mut state, values);

        let actions = run(&mut state, Message::SubmitForm);
        assert!(actions.is_empty(), "field {missing} should block");
        let form = top_form(&state);
        assert_eq!(form.errors.len(), 1);
        assert!(form.errors.contains_key(&FormField::ALL[missing]));
    }
}

#[test]
fn test_valid_submit_sends_integer_year() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    let form_id = state.navigator.top_id();
    fill_form(&mut state, ["ABC1234", "Fiat", "Uno", "2024", "Red"]);

    let actions = run(&mut state, Message::SubmitForm);
    assert_eq!(
        actions,
        vec![UpdateAction::CreateVehicle {
            screen: form_id,
            payload: VehiclePayload {
                plate: "ABC1234".into(),
                make: "Fiat".into(),
                model: "Uno".into(),
                year: 2024,
                color: "Red".into(),
            },
        }]
    );
    assert!(top_form(&state).busy);
}

#[test]
fn test_busy_form_ignores_resubmit_and_back() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    fill_form(&mut state, ["ABC1234", "Fiat", "Uno", "2024", "Red"]);

    assert_eq!(run(&mut state, Message::SubmitForm).len(), 1);
    assert!(run(&mut state, Message::SubmitForm).is_empty());
    assert!(press(&mut state, InputKey::Enter).is_empty());

    run(&mut state, Message::NavigateBack);
    assert_eq!(state.ui_mode(), UiMode::Form);
}

#[test]
fn test_year_field_drops_letters_at_input() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    for _ in 0..3 {
        press(&mut state, InputKey::Tab);
    }
    for c in "2a0b2c4".chars() {
        press(&mut state, InputKey::Char(c));
    }
    assert_eq!(top_form(&state).form.value(FormField::Year), "2024");
}

#[test]
fn test_save_success_notifies_and_navigates_back() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    let form_id = state.navigator.top_id();
    fill_form(&mut state, ["NEW0001", "VW", "Gol", "2020", "White"]);
    run(&mut state, Message::SubmitForm);

    let actions = run(
        &mut state,
        Message::VehicleSaved {
            screen: form_id,
            vehicle: vehicle(3, "NEW0001", "VW", "Gol", 2020, "White"),
            created: true,
        },
    );

    assert!(!state.navigator.contains(form_id));
    assert_eq!(
        state.notice.as_ref().unwrap().message,
        "Veículo cadastrado com sucesso!"
    );
    // The list regained focus and refetches
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchVehicles { .. }]
    ));
}

#[test]
fn test_save_failure_keeps_values_and_screen() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    let form_id = state.navigator.top_id();
    let values = ["NEW0001", "VW", "Gol", "2020", "White"];
    fill_form(&mut state, values);
    run(&mut state, Message::SubmitForm);

    let actions = run(
        &mut state,
        Message::VehicleSaveFailed {
            screen: form_id,
            error: "HTTP 500".into(),
        },
    );
    assert!(actions.is_empty());
    assert!(state.navigator.is_top(form_id));
    assert_eq!(
        state.notice.as_ref().unwrap().message,
        "Não foi possível salvar o veículo."
    );

    let form = top_form(&state);
    assert!(!form.busy);
    for (field, expected) in FormField::ALL.into_iter().zip(values) {
        assert_eq!(form.form.value(field), expected);
    }
}

#[test]
fn test_edit_mode_hydrates_and_sends_update() {
    let mut state = loaded_state(snapshot());
    open_loaded_detail(&mut state, 1);

    let actions = run(&mut state, Message::EditVehicle);
    let [UpdateAction::FetchVehicle { screen, seq, .. }] = actions.as_slice() else {
        panic!("expected hydration fetch");
    };
    let (form_id, seq) = (*screen, *seq);
    assert_eq!(state.navigator.top().screen.title(), "Editar Veículo");

    // Input is disabled until hydrated
    run(
        &mut state,
        Message::FormInput {
            field: FormField::Plate,
            text: "X".into(),
        },
    );
    assert_eq!(top_form(&state).form.value(FormField::Plate), "");

    run(
        &mut state,
        Message::VehicleLoaded {
            screen: form_id,
            seq,
            vehicle: snapshot()[0].clone(),
        },
    );
    assert_eq!(top_form(&state).form.value(FormField::Year), "2010");

    run(
        &mut state,
        Message::FormInput {
            field: FormField::Model,
            text: "Mille".into(),
        },
    );
    let actions = run(&mut state, Message::SubmitForm);
    match actions.as_slice() {
        [UpdateAction::UpdateVehicle {
            vehicle_id,
            payload,
            ..
        }] => {
            assert_eq!(vehicle_id, &VehicleId::Number(1));
            assert_eq!(payload.model, "Mille");
            assert_eq!(payload.year, 2010);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn test_failed_hydration_retry_with_r() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::OpenVehicle {
            vehicle_id: VehicleId::Number(5),
        },
    );
    state.navigator.push(Route::VehicleForm {
        vehicle_id: Some(VehicleId::Number(5)),
    });
    let actions = run(&mut state, Message::FocusGained);
    let [UpdateAction::FetchVehicle { screen, seq, .. }] = actions.as_slice() else {
        panic!("expected hydration fetch");
    };
    run(
        &mut state,
        Message::VehicleLoadFailed {
            screen: *screen,
            seq: *seq,
            error: "Vehicle not found: 5".into(),
        },
    );
    assert_eq!(
        state.notice.as_ref().unwrap().message,
        "Não foi possível carregar o veículo."
    );
    press(&mut state, InputKey::Enter);

    let actions = press(&mut state, InputKey::Char('r'));
    assert_eq!(actions.len(), 1);
    assert!(matches!(&state.navigator.top().screen, Screen::Form(f) if f.phase.is_loading()));
}

#[test]
fn test_create_form_focus_issues_no_fetch() {
    let mut state = loaded_state(snapshot());
    let actions = run(&mut state, Message::NewVehicle);
    assert!(actions.is_empty());
    assert_eq!(state.navigator.top().screen.title(), "Cadastrar Veículo");
}

// ─────────────────────────────────────────────────────────────
// Keys / lifecycle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_q_on_list_quits() {
    let mut state = loaded_state(snapshot());
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_q_on_detail_goes_back() {
    let mut state = loaded_state(snapshot());
    open_detail(&mut state, 1);
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.navigator.depth(), 1);
}

#[test]
fn test_ctrl_c_quits_from_form() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_q_is_text_in_form() {
    let mut state = loaded_state(snapshot());
    run(&mut state, Message::NewVehicle);
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(top_form(&state).form.value(FormField::Plate), "q");
}

#[test]
fn test_tick_advances_spinner() {
    let mut state = AppState::new();
    run(&mut state, Message::Tick);
    run(&mut state, Message::Tick);
    assert_eq!(state.tick, 2);
}
