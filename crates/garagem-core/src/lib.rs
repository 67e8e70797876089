//! # garagem-core - Core Domain Types
//!
//! Foundation crate for Garagem. Provides the vehicle schema shared by the
//! REST client and every screen controller, list filtering, form validation,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Vehicle Schema (`vehicle`)
//! - [`Vehicle`] - A vehicle as stored by the remote registry
//! - [`VehicleId`] - Server-assigned identifier (integer or string)
//! - [`VehiclePayload`] - Body sent by create/update (never carries an id)
//!
//! ### Filtering (`filter`)
//! - [`VehicleFilter`] - Case-insensitive substring filters on plate/make/model
//! - [`FilterField`] - Which filter input is being edited
//!
//! ### Forms (`form`)
//! - [`VehicleForm`] - Text-backed draft of the five business fields
//! - [`FormField`], [`FieldErrors`] - Per-field validation results
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use garagem_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod form;
pub mod logging;
pub mod types;
pub mod vehicle;

/// Prelude for common imports used throughout all Garagem crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use filter::{FilterField, VehicleFilter};
pub use form::{coerce_year, current_year, FieldErrors, FormField, VehicleForm};
pub use types::{AppPhase, LoadPhase};
pub use vehicle::{Vehicle, VehicleId, VehiclePayload};
