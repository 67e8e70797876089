//! Vehicle detail controller state

use garagem_core::{LoadPhase, Vehicle, VehicleId};

use super::FetchTracker;

#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub vehicle_id: VehicleId,
    pub vehicle: Option<Vehicle>,
    pub phase: LoadPhase,
    /// `delete(id)` in flight
    pub deleting: bool,
    fetch: FetchTracker,
}

impl DetailScreen {
    pub fn new(vehicle_id: VehicleId) -> Self {
        Self {
            vehicle_id,
            vehicle: None,
            phase: LoadPhase::Loading,
            deleting: false,
            fetch: FetchTracker::default(),
        }
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.fetch.begin()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.fetch.is_current(seq)
    }

    /// The record is on screen and no delete is running
    pub fn accepts_record_actions(&self) -> bool {
        self.is_loaded() && !self.deleting
    }

    pub fn is_loaded(&self) -> bool {
        self.vehicle.is_some() && self.phase.is_ready()
    }

    pub fn apply_vehicle(&mut self, seq: u64, vehicle: Vehicle) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.vehicle = Some(vehicle);
        self.phase = LoadPhase::Ready;
        true
    }

    pub fn apply_error(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.phase = LoadPhase::Error;
        true
    }
}
