//! garagem-app - Application state and orchestration for Garagem
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the three
//! vehicle screens (list, detail, form), the navigation stack that owns their
//! state, the Engine shared by the TUI and headless runners, and configuration
//! loading.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod notice;
pub mod process;
pub mod screens;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{Navigator, Route, Screen, ScreenId};
pub use notice::{Notice, NoticeKind};
pub use state::{AppState, UiMode};
