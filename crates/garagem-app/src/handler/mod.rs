//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Focus, push and pop
//! - `list`, `detail`, `form`: Per-screen controller handlers

pub(crate) mod detail;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use garagem_core::{VehicleId, VehiclePayload};

use crate::message::Message;
use crate::navigation::ScreenId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Remote calls for the event loop to perform after update.
///
/// Each one is tagged with the screen instance that issued it; fetches also
/// carry that screen's request sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `list()` for a list screen
    FetchVehicles { screen: ScreenId, seq: u64 },

    /// `get(id)` for a detail screen or form hydration
    FetchVehicle {
        screen: ScreenId,
        seq: u64,
        vehicle_id: VehicleId,
    },

    CreateVehicle {
        screen: ScreenId,
        payload: VehiclePayload,
    },

    UpdateVehicle {
        screen: ScreenId,
        vehicle_id: VehicleId,
        payload: VehiclePayload,
    },

    DeleteVehicle {
        screen: ScreenId,
        vehicle_id: VehicleId,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
