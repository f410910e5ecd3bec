use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order::Order;

use super::outcome::{DeliveryOutcome, RejectReason};
use super::value_objects::{VehicleId, VehicleKind, MOTORCYCLE_MAX_LOAD_KG};

// ============================================================================
// Vehicle Aggregate - Capacity-Based Delivery Rule
// ============================================================================
//
// Vehicles are immutable once registered; the only thing that changes is
// where they live (depot pool vs. a courier's hands).
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub registration: String,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn truck(
        make: impl Into<String>,
        model: impl Into<String>,
        registration: impl Into<String>,
        capacity_kg: f64,
    ) -> Self {
        Self {
            id: VehicleId::generate(),
            make: make.into(),
            model: model.into(),
            registration: registration.into(),
            kind: VehicleKind::Truck { capacity_kg },
        }
    }

    pub fn motorcycle(
        make: impl Into<String>,
        model: impl Into<String>,
        registration: impl Into<String>,
        top_speed_kmh: f64,
    ) -> Self {
        Self {
            id: VehicleId::generate(),
            make: make.into(),
            model: model.into(),
            registration: registration.into(),
            kind: VehicleKind::Motorcycle { top_speed_kmh },
        }
    }

    /// Heaviest order this vehicle accepts. Motorcycles always cap at the
    /// fixed 10 kg ceiling; their top speed is display-only.
    pub fn max_load_kg(&self) -> f64 {
        match self.kind {
            VehicleKind::Truck { capacity_kg } => capacity_kg,
            VehicleKind::Motorcycle { .. } => MOTORCYCLE_MAX_LOAD_KG,
        }
    }

    /// Attempt to deliver one order. Accepting marks the order delivered;
    /// rejecting leaves it untouched and pending.
    pub fn deliver(&self, order: &mut Order) -> DeliveryOutcome {
        if order.is_delivered() {
            return DeliveryOutcome::Rejected {
                order_id: order.id,
                reason: RejectReason::AlreadyDelivered,
            };
        }

        if order.weight_kg <= self.max_load_kg() {
            order.mark_delivered();
            DeliveryOutcome::Delivered { order_id: order.id }
        } else {
            DeliveryOutcome::Rejected {
                order_id: order.id,
                reason: match self.kind {
                    VehicleKind::Truck { .. } => RejectReason::ExceedsTruckCapacity,
                    VehicleKind::Motorcycle { .. } => RejectReason::ExceedsMotorcycleLimit,
                },
            }
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.registration)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
