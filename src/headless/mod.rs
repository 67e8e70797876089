//! Headless mode - JSON event output for scripted checks
//!
//! Runs the same screen controllers as the TUI without a terminal. Commands
//! are read line by line from stdin and every outcome is written to stdout as
//! NDJSON (newline-delimited JSON), one event per line, tagged by `event`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","api_url":"http://localhost:3000/","timestamp":1704700001000}
//! {"event":"vehicle_list","vehicles":[{"id":1,"placa":"ABC1234","marca":"Fiat","modelo":"Uno","ano":2010,"cor":"Red"}],"total":1,"timestamp":1704700002000}
//! {"event":"notice","kind":"success","message":"Veículo cadastrado com sucesso!","timestamp":1704700003000}
//! ```

pub mod runner;

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use garagem_app::{Notice, NoticeKind};
use garagem_core::{FieldErrors, Vehicle};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Runner started and the first list fetch settled
    Ready { api_url: String, timestamp: i64 },

    /// Current filtered view of the list screen
    VehicleList {
        vehicles: Vec<Vehicle>,
        /// Size of the unfiltered snapshot
        total: usize,
        timestamp: i64,
    },

    /// A detail screen loaded its record
    Vehicle { vehicle: Vehicle, timestamp: i64 },

    /// A record was removed
    Deleted { id: String, timestamp: i64 },

    /// The form refused to submit; keyed by wire field name
    ValidationFailed {
        errors: BTreeMap<String, String>,
        timestamp: i64,
    },

    /// Blocking notice raised by a controller
    Notice {
        kind: String,
        title: String,
        message: String,
        timestamp: i64,
    },

    /// Command could not be parsed or executed
    Error { message: String, timestamp: i64 },
}

fn now() -> i64 {
    Utc::now().timestamp_millis()
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
            error!("Failed to write headless event: {}", e);
        }
    }

    pub fn ready(api_url: impl Into<String>) -> Self {
        Self::Ready {
            api_url: api_url.into(),
            timestamp: now(),
        }
    }

    pub fn vehicle_list(vehicles: Vec<Vehicle>, total: usize) -> Self {
        Self::VehicleList {
            vehicles,
            total,
            timestamp: now(),
        }
    }

    pub fn vehicle(vehicle: Vehicle) -> Self {
        Self::Vehicle {
            vehicle,
            timestamp: now(),
        }
    }

    pub fn deleted(id: impl ToString) -> Self {
        Self::Deleted {
            id: id.to_string(),
            timestamp: now(),
        }
    }

    pub fn validation_failed(errors: &FieldErrors) -> Self {
        Self::ValidationFailed {
            errors: errors
                .iter()
                .map(|(field, message)| (field.key().to_string(), message.clone()))
                .collect(),
            timestamp: now(),
        }
    }

    pub fn notice(notice: &Notice) -> Self {
        let kind = match notice.kind {
            NoticeKind::Error => "error",
            NoticeKind::Success => "success",
        };
        Self::Notice {
            kind: kind.to_string(),
            title: notice.title.clone(),
            message: notice.message.clone(),
            timestamp: now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: now(),
        }
    }

    /// Event name as it appears in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::VehicleList { .. } => "vehicle_list",
            Self::Vehicle { .. } => "vehicle",
            Self::Deleted { .. } => "deleted",
            Self::ValidationFailed { .. } => "validation_failed",
            Self::Notice { .. } => "notice",
            Self::Error { .. } => "error",
        }
    }
}
