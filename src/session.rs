use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::courier::{Courier, CourierError, CourierId};
use crate::domain::depot::{Depot, DepotError};
use crate::domain::order::{OrderError, OrderId, OrderStore};
use crate::domain::vehicle::{DeliveryOutcome, Vehicle, VehicleId};

// ============================================================================
// Depot Session - Explicit Context Object
// ============================================================================
//
// Owns the whole mutable state of one operator session: the depot (vehicle
// pool + courier roster) and the order store. Created at program start,
// dropped at exit; every operator-facing operation goes through here and is
// logged.
//
// Single-threaded by design: each operation runs to completion before the
// next one starts.
//
// ============================================================================

#[derive(Debug, Default)]
pub struct DepotSession {
    depot: Depot,
    orders: OrderStore,
}

/// Borrowed, serializable view of the full session state, for export.
#[derive(Serialize)]
pub struct SessionSnapshot<'a> {
    pub depot: &'a Depot,
    pub orders: &'a OrderStore,
}

impl DepotSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_truck(
        &mut self,
        make: &str,
        model: &str,
        registration: &str,
        capacity_kg: f64,
    ) -> VehicleId {
        let vehicle = Vehicle::truck(make, model, registration, capacity_kg);
        let id = self.depot.register_vehicle(vehicle);
        tracing::info!(
            vehicle_id = %id,
            registration = %registration,
            capacity_kg,
            "Registered truck"
        );
        id
    }

    pub fn register_motorcycle(
        &mut self,
        make: &str,
        model: &str,
        registration: &str,
        top_speed_kmh: f64,
    ) -> VehicleId {
        let vehicle = Vehicle::motorcycle(make, model, registration, top_speed_kmh);
        let id = self.depot.register_vehicle(vehicle);
        tracing::info!(
            vehicle_id = %id,
            registration = %registration,
            top_speed_kmh,
            "Registered motorcycle"
        );
        id
    }

    pub fn register_courier(&mut self, name: &str) -> Result<CourierId, CourierError> {
        let courier = Courier::new(name)?;
        let id = self.depot.register_courier(courier);
        tracing::info!(courier_id = %id, name = %name, "Registered courier");
        Ok(id)
    }

    pub fn create_order(&mut self, destination: &str, weight_kg: f64) -> Result<OrderId, OrderError> {
        let id = self.orders.create(destination, weight_kg)?;
        tracing::info!(order_id = %id, destination = %destination, weight_kg, "📦 Created order");
        Ok(id)
    }

    pub fn assign_vehicle(&mut self, courier_id: CourierId, vehicle_id: VehicleId) -> Result<(), DepotError> {
        self.depot.assign_vehicle(courier_id, vehicle_id)?;
        tracing::info!(courier_id = %courier_id, vehicle_id = %vehicle_id, "Assigned vehicle to courier");
        Ok(())
    }

    /// Hand a specific order to a courier's work queue. Takes the order out
    /// of the backlog when it is still there.
    pub fn enqueue_order(&mut self, courier_id: CourierId, order_id: OrderId) -> Result<()> {
        if !self.orders.contains(order_id) {
            return Err(OrderError::UnknownOrder(order_id).into());
        }

        let courier = self.depot.courier_mut(courier_id)?;
        courier.enqueue_order(order_id);
        self.orders.remove_from_backlog(order_id);

        tracing::info!(courier_id = %courier_id, order_id = %order_id, "Enqueued order");
        Ok(())
    }

    /// Pop the oldest backlog order into the courier's queue. Returns the
    /// order id, or None when the backlog is empty.
    pub fn dispatch_next(&mut self, courier_id: CourierId) -> Result<Option<OrderId>> {
        // Resolve the courier before consuming the backlog
        let courier = self.depot.courier_mut(courier_id)?;

        let Some(order_id) = self.orders.take_next_backlog() else {
            return Ok(None);
        };
        courier.enqueue_order(order_id);

        tracing::info!(courier_id = %courier_id, order_id = %order_id, "Dispatched backlog order");
        Ok(Some(order_id))
    }

    /// Run every order queued on the courier through its vehicle.
    pub fn run_deliveries(&mut self, courier_id: CourierId) -> Result<Vec<DeliveryOutcome>> {
        let courier = self.depot.courier_mut(courier_id)?;
        let outcomes = courier
            .run_deliveries(&mut self.orders)
            .context("delivery run failed")?;

        let delivered = outcomes.iter().filter(|o| o.is_delivered()).count();
        tracing::info!(
            courier_id = %courier_id,
            delivered,
            rejected = outcomes.len() - delivered,
            "✅ Delivery run complete"
        );
        Ok(outcomes)
    }

    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            depot: &self.depot,
            orders: &self.orders,
        }
    }
}

// ============================================================================
// Session Scenario Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::domain::vehicle::RejectReason;

    #[test]
    fn test_full_lifecycle_truck_delivery() {
        let mut session = DepotSession::new();

        let truck = session.register_truck("Volvo", "FH16", "AB-123-CD", 20.0);
        let alice = session.register_courier("Alice").unwrap();
        let order = session.create_order("Lyon", 15.0).unwrap();

        session.assign_vehicle(alice, truck).unwrap();
        assert_eq!(session.dispatch_next(alice).unwrap(), Some(order));

        let outcomes = session.run_deliveries(alice).unwrap();
        assert_eq!(outcomes, vec![DeliveryOutcome::Delivered { order_id: order }]);
        assert_eq!(session.orders().get(order).unwrap().status, OrderStatus::Delivered);

        // Backlog consumed, pool empty, queue drained
        assert_eq!(session.orders().backlog().count(), 0);
        assert_eq!(session.depot().available_vehicles().count(), 0);
        assert_eq!(session.depot().courier(alice).unwrap().queue_len(), 0);
    }

    #[test]
    fn test_motorcycle_rejects_heavy_order_and_leaves_it_pending() {
        let mut session = DepotSession::new();

        let moto = session.register_motorcycle("Honda", "CB500", "EF-456-GH", 180.0);
        let bob = session.register_courier("Bob").unwrap();
        let order = session.create_order("Paris", 12.0).unwrap();

        session.assign_vehicle(bob, moto).unwrap();
        session.enqueue_order(bob, order).unwrap();

        let outcomes = session.run_deliveries(bob).unwrap();
        assert_eq!(
            outcomes,
            vec![DeliveryOutcome::Rejected {
                order_id: order,
                reason: RejectReason::ExceedsMotorcycleLimit,
            }]
        );
        assert_eq!(session.orders().get(order).unwrap().status, OrderStatus::Pending);
        // Rejected orders are dropped from the queue, not retried
        assert_eq!(session.depot().courier(bob).unwrap().queue_len(), 0);
    }

    #[test]
    fn test_run_without_vehicle_is_an_error() {
        let mut session = DepotSession::new();
        let carol = session.register_courier("Carol").unwrap();
        let order = session.create_order("Nantes", 3.0).unwrap();
        session.enqueue_order(carol, order).unwrap();

        assert!(session.run_deliveries(carol).is_err());
        // The queue survives the failed run
        assert_eq!(session.depot().courier(carol).unwrap().queue_len(), 1);
    }

    #[test]
    fn test_enqueue_unknown_order_fails() {
        let mut session = DepotSession::new();
        let carol = session.register_courier("Carol").unwrap();
        assert!(session.enqueue_order(carol, OrderId(42)).is_err());
    }

    #[test]
    fn test_dispatch_next_on_empty_backlog_returns_none() {
        let mut session = DepotSession::new();
        let carol = session.register_courier("Carol").unwrap();
        assert_eq!(session.dispatch_next(carol).unwrap(), None);
    }

    #[test]
    fn test_manual_enqueue_removes_order_from_backlog() {
        let mut session = DepotSession::new();
        let carol = session.register_courier("Carol").unwrap();
        let first = session.create_order("Nantes", 3.0).unwrap();
        let second = session.create_order("Tours", 4.0).unwrap();

        session.enqueue_order(carol, first).unwrap();

        // The backlog head is now the second order
        assert_eq!(session.dispatch_next(carol).unwrap(), Some(second));
    }

    #[test]
    fn test_snapshot_serializes_session_state() {
        let mut session = DepotSession::new();
        session.register_truck("Volvo", "FH16", "AB-123-CD", 20.0);
        session.register_courier("Alice").unwrap();
        session.create_order("Lyon", 15.0).unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["depot"]["available_vehicles"].as_array().unwrap().len(), 1);
        assert_eq!(json["orders"]["orders"][0]["status"], "Pending");
    }
}
