//! In-memory registry for tests.
//!
//! Records every call so tests can assert exactly which network operations a
//! controller triggered (e.g. "validation failure issues no request").

use std::sync::{Arc, Mutex, MutexGuard};

use garagem_core::prelude::*;
use garagem_core::{Vehicle, VehicleId, VehiclePayload};

use crate::client::VehicleApi;

/// One recorded registry call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(VehicleId),
    Create(VehiclePayload),
    Update(VehicleId, VehiclePayload),
    Delete(VehicleId),
}

#[derive(Debug, Default)]
struct Store {
    vehicles: Vec<Vehicle>,
    next_id: i64,
    failing: bool,
    calls: Vec<ApiCall>,
}

/// Shared in-memory registry. Clones see the same store.
#[derive(Debug, Clone, Default)]
pub struct FakeVehicleApi {
    store: Arc<Mutex<Store>>,
}

impl FakeVehicleApi {
    pub fn new() -> Self {
        Self::with_vehicles(Vec::new())
    }

    /// Seed the store; new ids continue after the largest numeric id.
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let next_id = vehicles
            .iter()
            .filter_map(|v| match v.id {
                VehicleId::Number(n) => Some(n),
                VehicleId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            store: Arc::new(Mutex::new(Store {
                vehicles,
                next_id,
                failing: false,
                calls: Vec::new(),
            })),
        }
    }

    /// Make every subsequent call fail with a network error
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.lock().vehicles.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panicking test thread must not poison the other assertions
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: ApiCall) -> Result<MutexGuard<'_, Store>> {
        let mut store = self.lock();
        store.calls.push(call);
        if store.failing {
            return Err(Error::network("connection refused"));
        }
        Ok(store)
    }
}

impl VehicleApi for FakeVehicleApi {
    async fn list(&self) -> Result<Vec<Vehicle>> {
        let store = self.record(ApiCall::List)?;
        Ok(store.vehicles.clone())
    }

    async fn get(&self, id: &VehicleId) -> Result<Vehicle> {
        let store = self.record(ApiCall::Get(id.clone()))?;
        store
            .vehicles
            .iter()
            .find(|v| v.id.same_as(id))
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    async fn create(&self, payload: &VehiclePayload) -> Result<Vehicle> {
        let mut store = self.record(ApiCall::Create(payload.clone()))?;
        let id = VehicleId::Number(store.next_id);
        store.next_id += 1;
        let vehicle = Vehicle::from_payload(id, payload.clone());
        store.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, id: &VehicleId, payload: &VehiclePayload) -> Result<Vehicle> {
        let mut store = self.record(ApiCall::Update(id.clone(), payload.clone()))?;
        let slot = store
            .vehicles
            .iter_mut()
            .find(|v| v.id.same_as(id))
            .ok_or_else(|| Error::not_found(id))?;
        *slot = Vehicle::from_payload(slot.id.clone(), payload.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &VehicleId) -> Result<()> {
        let mut store = self.record(ApiCall::Delete(id.clone()))?;
        let before = store.vehicles.len();
        store.vehicles.retain(|v| !v.id.same_as(id));
        if store.vehicles.len() == before {
            return Err(Error::not_found(id));
        }
        Ok(())
    }
}
