use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::domain::order::{OrderId, OrderStore};
use crate::domain::vehicle::{DeliveryOutcome, RejectReason, Vehicle};

use super::errors::CourierError;
use super::value_objects::CourierId;

// ============================================================================
// Courier Aggregate - Business Logic
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    pub id: CourierId,
    pub name: String,
    pub vehicle: Option<Vehicle>,

    // Transient work list of order ids; drained by every delivery run
    queue: VecDeque<OrderId>,
}

impl Courier {
    /// Register a courier. Fails when the name does not pass `verify_name`.
    pub fn new(name: impl Into<String>) -> Result<Self, CourierError> {
        let name = name.into();
        if !Self::verify_name(&name) {
            return Err(CourierError::InvalidName(name));
        }

        Ok(Self {
            id: CourierId::generate(),
            name,
            vehicle: None,
            queue: VecDeque::new(),
        })
    }

    /// Name acceptance rule: non-empty, every character a letter. Unicode
    /// letters count, so accented names pass; spaces and digits do not.
    pub fn verify_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(char::is_alphabetic)
    }

    /// Hand this courier a vehicle, returning the one it held before.
    pub fn assign_vehicle(&mut self, vehicle: Vehicle) -> Option<Vehicle> {
        self.vehicle.replace(vehicle)
    }

    /// Append an order to the work queue. No capacity limit.
    pub fn enqueue_order(&mut self, order_id: OrderId) {
        self.queue.push_back(order_id);
    }

    pub fn queued(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.queue.iter().copied()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Run every queued order through the assigned vehicle, in queue order.
    ///
    /// The queue is drained no matter how the attempts went: rejected orders
    /// stay pending in the store but are no longer tracked by this courier
    /// until a caller re-enqueues them. Fails without touching the queue
    /// when no vehicle is assigned.
    pub fn run_deliveries(&mut self, orders: &mut OrderStore) -> Result<Vec<DeliveryOutcome>, CourierError> {
        let vehicle = self.vehicle.as_ref().ok_or(CourierError::NoVehicleAssigned)?;

        let mut outcomes = Vec::with_capacity(self.queue.len());
        for order_id in self.queue.drain(..) {
            let outcome = match orders.get_mut(order_id) {
                Some(order) => vehicle.deliver(order),
                None => DeliveryOutcome::Rejected {
                    order_id,
                    reason: RejectReason::UnknownOrder,
                },
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

impl fmt::Display for Courier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vehicle {
            Some(vehicle) => write!(f, "Courier {} with {}", self.name, vehicle),
            None => write!(f, "Courier {} (no vehicle)", self.name),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn test_verify_name_accepts_letters_only() {
        assert!(Courier::verify_name("Alice"));
        assert!(Courier::verify_name("Amelie"));
        // Unicode letters are letters
        assert!(Courier::verify_name("Amélie"));
    }

    #[test]
    fn test_verify_name_rejects_everything_else() {
        assert!(!Courier::verify_name(""));
        assert!(!Courier::verify_name("Jean Paul"));
        assert!(!Courier::verify_name("R2D2"));
        assert!(!Courier::verify_name("O'Brien"));
    }

    #[test]
    fn test_new_rejects_invalid_name() {
        let err = Courier::new("Jean Paul").unwrap_err();
        assert!(matches!(err, CourierError::InvalidName(name) if name == "Jean Paul"));
    }

    #[test]
    fn test_run_deliveries_requires_a_vehicle() {
        let mut orders = OrderStore::new();
        let id = orders.create("Lyon", 5.0).unwrap();

        let mut courier = Courier::new("Alice").unwrap();
        courier.enqueue_order(id);

        let err = courier.run_deliveries(&mut orders).unwrap_err();
        assert!(matches!(err, CourierError::NoVehicleAssigned));

        // Queue kept: nothing was attempted
        assert_eq!(courier.queue_len(), 1);
    }

    #[test]
    fn test_run_deliveries_mixed_batch_on_motorcycle() {
        let mut orders = OrderStore::new();
        let light = orders.create("Lyon", 5.0).unwrap();
        let heavy = orders.create("Paris", 50.0).unwrap();

        let mut courier = Courier::new("Alice").unwrap();
        courier.assign_vehicle(Vehicle::motorcycle("Honda", "CB500", "EF-456-GH", 180.0));
        courier.enqueue_order(light);
        courier.enqueue_order(heavy);

        let outcomes = courier.run_deliveries(&mut orders).unwrap();

        assert_eq!(
            outcomes,
            vec![
                DeliveryOutcome::Delivered { order_id: light },
                DeliveryOutcome::Rejected {
                    order_id: heavy,
                    reason: RejectReason::ExceedsMotorcycleLimit,
                },
            ]
        );
        assert_eq!(orders.get(light).unwrap().status, OrderStatus::Delivered);
        assert_eq!(orders.get(heavy).unwrap().status, OrderStatus::Pending);
        assert_eq!(courier.queue_len(), 0);
    }

    #[test]
    fn test_run_deliveries_reports_unknown_order_ids() {
        let mut orders = OrderStore::new();

        let mut courier = Courier::new("Bob").unwrap();
        courier.assign_vehicle(Vehicle::truck("Volvo", "FH16", "AB-123-CD", 20.0));
        courier.enqueue_order(OrderId(99));

        let outcomes = courier.run_deliveries(&mut orders).unwrap();
        assert_eq!(
            outcomes,
            vec![DeliveryOutcome::Rejected {
                order_id: OrderId(99),
                reason: RejectReason::UnknownOrder,
            }]
        );
    }

    #[test]
    fn test_assign_vehicle_returns_previous_one() {
        let mut courier = Courier::new("Alice").unwrap();
        let first = Vehicle::truck("Volvo", "FH16", "AB-123-CD", 20.0);
        let first_id = first.id;

        assert!(courier.assign_vehicle(first).is_none());
        let previous = courier.assign_vehicle(Vehicle::motorcycle("Honda", "CB500", "EF-456-GH", 180.0));
        assert_eq!(previous.unwrap().id, first_id);
    }
}
