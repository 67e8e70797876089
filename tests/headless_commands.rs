//! Headless command flows against the in-memory registry

use garagem::headless::runner::{parse_command, HeadlessSession};
use garagem::headless::HeadlessEvent;
use garagem_api::{ApiCall, FakeVehicleApi};
use garagem_app::Settings;
use garagem_core::{Vehicle, VehicleId, VehiclePayload};

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

fn seeded() -> FakeVehicleApi {
    FakeVehicleApi::with_vehicles(vec![
        vehicle(1, "ABC1234", "Fiat", "Uno", 2010, "Red"),
        vehicle(2, "XYZ9999", "Ford", "Ka", 2015, "Blue"),
    ])
}

async fn started(api: FakeVehicleApi) -> (HeadlessSession<FakeVehicleApi>, Vec<HeadlessEvent>) {
    let mut session = HeadlessSession::new(Settings::default(), api);
    let events = session.start().await;
    (session, events)
}

async fn run(session: &mut HeadlessSession<FakeVehicleApi>, line: &str) -> Vec<HeadlessEvent> {
    let command = parse_command(line)
        .expect("valid command")
        .expect("non-blank command");
    session.execute(command).await
}

fn listed_plates(event: &HeadlessEvent) -> Vec<String> {
    match event {
        HeadlessEvent::VehicleList { vehicles, .. } => {
            vehicles.iter().map(|v| v.plate.clone()).collect()
        }
        other => panic!("expected vehicle_list, got {other:?}"),
    }
}

fn notice_message(events: &[HeadlessEvent]) -> Option<(&str, &str)> {
    events.iter().find_map(|e| match e {
        HeadlessEvent::Notice { kind, message, .. } => Some((kind.as_str(), message.as_str())),
        _ => None,
    })
}

#[tokio::test]
async fn test_start_reports_ready_and_list() {
    let (_, events) = started(seeded()).await;
    assert_eq!(events[0].name(), "ready");
    assert_eq!(listed_plates(&events[1]), vec!["ABC1234", "XYZ9999"]);
}

#[tokio::test]
async fn test_start_with_unreachable_registry_reports_notice() {
    let api = FakeVehicleApi::new();
    api.set_failing(true);
    let (_, events) = started(api).await;

    assert_eq!(
        notice_message(&events),
        Some(("error", "Não foi possível carregar os veículos."))
    );
    assert!(!events.iter().any(|e| e.name() == "vehicle_list"));
}

#[tokio::test]
async fn test_filter_then_clear() {
    let (mut session, _) = started(seeded()).await;

    let events = run(&mut session, "filter marca fi").await;
    assert_eq!(listed_plates(&events[0]), vec!["ABC1234"]);

    let events = run(&mut session, "filter modelo k").await;
    assert!(listed_plates(&events[0]).is_empty());

    let events = run(&mut session, "clear").await;
    assert_eq!(listed_plates(&events[0]).len(), 2);
}

#[tokio::test]
async fn test_filter_survives_refresh() {
    let (mut session, _) = started(seeded()).await;
    run(&mut session, "filter placa xyz").await;

    let events = run(&mut session, "list").await;
    match &events[0] {
        HeadlessEvent::VehicleList { vehicles, total, .. } => {
            assert_eq!(vehicles.len(), 1);
            assert_eq!(*total, 2);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_show_existing_and_missing() {
    let (mut session, _) = started(seeded()).await;

    let events = run(&mut session, "show 2").await;
    match &events[0] {
        HeadlessEvent::Vehicle { vehicle, .. } => assert_eq!(vehicle.model, "Ka"),
        other => panic!("unexpected {other:?}"),
    }

    let events = run(&mut session, "show 99").await;
    assert_eq!(
        notice_message(&events),
        Some(("error", "Não foi possível carregar o veículo."))
    );
}

#[tokio::test]
async fn test_delete_removes_record() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;

    let events = run(&mut session, "delete 1").await;
    assert!(events.iter().any(|e| e.name() == "deleted"));
    assert!(api.calls().contains(&ApiCall::Delete(VehicleId::Number(1))));
    assert_eq!(api.vehicles().len(), 1);

    let events = run(&mut session, "list").await;
    assert_eq!(listed_plates(&events[0]), vec!["XYZ9999"]);
}

#[tokio::test]
async fn test_delete_missing_vehicle_never_calls_delete() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;

    let events = run(&mut session, "delete 99").await;
    assert!(!events.iter().any(|e| e.name() == "deleted"));
    assert_eq!(
        notice_message(&events),
        Some(("error", "Não foi possível carregar o veículo."))
    );
    assert!(!api.calls().iter().any(|c| matches!(c, ApiCall::Delete(_))));
    assert_eq!(api.vehicles().len(), 2);
}

#[tokio::test]
async fn test_create_validates_before_network() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;
    api.clear_calls();

    let events = run(&mut session, "create placa=NEW0001 marca=VW").await;
    match &events[0] {
        HeadlessEvent::ValidationFailed { errors, .. } => {
            assert_eq!(
                errors.keys().map(String::as_str).collect::<Vec<_>>(),
                vec!["ano", "cor", "modelo"]
            );
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!api.calls().iter().any(|c| matches!(c, ApiCall::Create(_))));
}

#[tokio::test]
async fn test_create_with_letters_in_year_is_refused() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;
    api.clear_calls();

    let events = run(
        &mut session,
        "create placa=NEW0001 marca=VW modelo=Gol ano=20a4 cor=Prata",
    )
    .await;
    match &events[..] {
        [HeadlessEvent::ValidationFailed { errors, .. }] => {
            assert_eq!(errors.keys().map(String::as_str).collect::<Vec<_>>(), vec!["ano"]);
            assert_eq!(errors["ano"], "O ano deve conter apenas números.");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!api.calls().iter().any(|c| matches!(c, ApiCall::Create(_))));
    assert_eq!(api.vehicles().len(), 2);
}

#[tokio::test]
async fn test_create_success() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;

    let events = run(
        &mut session,
        "create placa=NEW0001 marca=VW modelo=Gol G5 ano=2020 cor=Prata",
    )
    .await;
    assert_eq!(
        notice_message(&events),
        Some(("success", "Veículo cadastrado com sucesso!"))
    );

    let stored = api.vehicles();
    let created = stored.iter().find(|v| v.plate == "NEW0001").unwrap();
    assert_eq!(created.model, "Gol G5");
    assert_eq!(created.year, 2020);
    assert_eq!(created.id, VehicleId::Number(3));
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let api = seeded();
    let (mut session, _) = started(api.clone()).await;

    let events = run(&mut session, "update 2 cor=Preto").await;
    assert_eq!(
        notice_message(&events),
        Some(("success", "Veículo atualizado com sucesso!"))
    );

    let updated = api
        .vehicles()
        .into_iter()
        .find(|v| v.id == VehicleId::Number(2))
        .unwrap();
    assert_eq!(updated.color, "Preto");
    assert_eq!(updated.model, "Ka");
    assert_eq!(updated.year, 2015);
}

#[tokio::test]
async fn test_update_missing_vehicle() {
    let (mut session, _) = started(seeded()).await;
    let events = run(&mut session, "update 42 cor=Preto").await;
    assert_eq!(
        notice_message(&events),
        Some(("error", "Não foi possível carregar o veículo."))
    );
}

#[tokio::test]
async fn test_quit() {
    let (mut session, _) = started(seeded()).await;
    run(&mut session, "quit").await;
    assert!(session.should_quit());
}
