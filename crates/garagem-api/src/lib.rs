//! # garagem-api - Vehicle Registry Client
//!
//! Typed wrapper around the registry's single collection resource
//! (`/veiculos`). The app layer only sees the [`VehicleApi`] trait; the TUI
//! and headless runners plug in [`HttpVehicleClient`], tests plug in
//! `FakeVehicleApi` (feature `test-helpers`).

pub mod client;
pub mod http;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

pub use client::{LocalVehicleApi, VehicleApi, COLLECTION_PATH};
pub use http::HttpVehicleClient;

#[cfg(any(test, feature = "test-helpers"))]
pub use fake::{ApiCall, FakeVehicleApi};
