//! Garagem Library
//!
//! Terminal client for a vehicle registry REST API. The interactive TUI lives
//! in `garagem-tui`; this crate adds the headless runner used by scripts.

pub mod headless;

pub use headless::runner::run_headless;
