//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action becomes one tokio task making one registry call. The outcome
//! always comes back as exactly one result message, success or failure.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use garagem_api::VehicleApi;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: &A)
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    let api = api.clone();
    tokio::spawn(async move {
        let msg = execute_action(action, &api).await;
        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed, dropping action result");
        }
    });
}

/// Perform the registry call for `action` and wrap the outcome in a message.
pub async fn execute_action<A: VehicleApi>(action: UpdateAction, api: &A) -> Message {
    match action {
        UpdateAction::FetchVehicles { screen, seq } => match api.list().await {
            Ok(vehicles) => Message::VehiclesLoaded {
                screen,
                seq,
                vehicles,
            },
            Err(e) => {
                warn!("list() failed: {}", e);
                Message::VehiclesLoadFailed {
                    screen,
                    seq,
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::FetchVehicle {
            screen,
            seq,
            vehicle_id,
        } => match api.get(&vehicle_id).await {
            Ok(vehicle) => Message::VehicleLoaded {
                screen,
                seq,
                vehicle,
            },
            Err(e) => {
                warn!("get({}) failed: {}", vehicle_id, e);
                Message::VehicleLoadFailed {
                    screen,
                    seq,
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::CreateVehicle { screen, payload } => match api.create(&payload).await {
            Ok(vehicle) => Message::VehicleSaved {
                screen,
                vehicle,
                created: true,
            },
            Err(e) => {
                warn!("create() failed: {}", e);
                Message::VehicleSaveFailed {
                    screen,
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::UpdateVehicle {
            screen,
            vehicle_id,
            payload,
        } => match api.update(&vehicle_id, &payload).await {
            Ok(vehicle) => Message::VehicleSaved {
                screen,
                vehicle,
                created: false,
            },
            Err(e) => {
                warn!("update({}) failed: {}", vehicle_id, e);
                Message::VehicleSaveFailed {
                    screen,
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::DeleteVehicle { screen, vehicle_id } => {
            match api.delete(&vehicle_id).await {
                Ok(()) => Message::VehicleDeleted { screen },
                Err(e) => {
                    warn!("delete({}) failed: {}", vehicle_id, e);
                    Message::VehicleDeleteFailed {
                        screen,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}
