use serde::Serialize;

use crate::domain::courier::{Courier, CourierId};
use crate::domain::vehicle::{Vehicle, VehicleId};

use super::errors::DepotError;

// ============================================================================
// Depot Aggregate - Business Logic
// ============================================================================

#[derive(Debug, Default, Serialize)]
pub struct Depot {
    available_vehicles: Vec<Vehicle>,
    couriers: Vec<Courier>,
}

impl Depot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle to the available pool. No duplicate check.
    pub fn register_vehicle(&mut self, vehicle: Vehicle) -> VehicleId {
        let id = vehicle.id;
        self.available_vehicles.push(vehicle);
        id
    }

    /// Add a courier to the roster. No duplicate check.
    pub fn register_courier(&mut self, courier: Courier) -> CourierId {
        let id = courier.id;
        self.couriers.push(courier);
        id
    }

    /// Move a vehicle from the available pool into a courier's hands.
    ///
    /// When the courier already held a vehicle, that one goes back into the
    /// pool, so the pool invariant holds across reassignment.
    pub fn assign_vehicle(&mut self, courier_id: CourierId, vehicle_id: VehicleId) -> Result<(), DepotError> {
        // Resolve both sides before moving anything, so a failed lookup
        // leaves the pool untouched
        let courier = self
            .couriers
            .iter_mut()
            .find(|c| c.id == courier_id)
            .ok_or(DepotError::UnknownCourier(courier_id))?;

        let pos = self
            .available_vehicles
            .iter()
            .position(|v| v.id == vehicle_id)
            .ok_or(DepotError::VehicleNotAvailable(vehicle_id))?;
        let vehicle = self.available_vehicles.remove(pos);

        if let Some(previous) = courier.assign_vehicle(vehicle) {
            self.available_vehicles.push(previous);
        }

        Ok(())
    }

    pub fn courier(&self, id: CourierId) -> Option<&Courier> {
        self.couriers.iter().find(|c| c.id == id)
    }

    pub fn courier_mut(&mut self, id: CourierId) -> Result<&mut Courier, DepotError> {
        self.couriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DepotError::UnknownCourier(id))
    }

    /// First courier registered under this name, if any.
    pub fn find_courier_by_name(&self, name: &str) -> Option<&Courier> {
        self.couriers.iter().find(|c| c.name == name)
    }

    /// First pooled vehicle carrying this registration plate, if any.
    pub fn find_available_by_registration(&self, registration: &str) -> Option<&Vehicle> {
        self.available_vehicles.iter().find(|v| v.registration == registration)
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.available_vehicles.iter()
    }

    pub fn couriers(&self) -> impl Iterator<Item = &Courier> {
        self.couriers.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
