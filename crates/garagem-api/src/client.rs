//! Vehicle registry operations
//!
//! Five operations against one collection resource. Every failure surfaces as
//! [`Error::Network`](garagem_core::Error::Network), except a 404 on an item
//! path which becomes [`Error::NotFound`](garagem_core::Error::NotFound).

use garagem_core::prelude::*;
use garagem_core::{Vehicle, VehicleId, VehiclePayload};

/// Path segment of the collection resource
pub const COLLECTION_PATH: &str = "veiculos";

/// Remote vehicle registry
///
/// Controllers never call this directly; `garagem-app` actions spawn one task
/// per call and report the outcome back as a message.
#[trait_variant::make(VehicleApi: Send)]
pub trait LocalVehicleApi {
    /// `GET /veiculos`, in server order
    async fn list(&self) -> Result<Vec<Vehicle>>;

    /// `GET /veiculos/{id}`
    async fn get(&self, id: &VehicleId) -> Result<Vehicle>;

    /// `POST /veiculos`, returns the stored vehicle with its assigned id
    async fn create(&self, payload: &VehiclePayload) -> Result<Vehicle>;

    /// `PUT /veiculos/{id}`, full replace of the five fields
    async fn update(&self, id: &VehicleId, payload: &VehiclePayload) -> Result<Vehicle>;

    /// `DELETE /veiculos/{id}`
    async fn delete(&self, id: &VehicleId) -> Result<()>;
}
