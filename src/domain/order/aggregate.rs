use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::OrderError;
use super::value_objects::{OrderId, OrderStatus, MAX_ORDER_WEIGHT_KG};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: OrderId,

    // Current state
    pub destination: String,
    pub weight_kg: f64,
    pub status: OrderStatus,

    // Audit trail
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a pending order. Fails when the weight is outside `(0, 100]`.
    pub fn new(id: OrderId, destination: impl Into<String>, weight_kg: f64) -> Result<Self, OrderError> {
        if !Self::validate_weight(weight_kg) {
            return Err(OrderError::InvalidWeight(weight_kg));
        }

        Ok(Self {
            id,
            destination: destination.into(),
            weight_kg,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivered_at: None,
        })
    }

    /// Weight acceptance rule: strictly positive and at most 100 kg.
    pub fn validate_weight(weight_kg: f64) -> bool {
        weight_kg > 0.0 && weight_kg <= MAX_ORDER_WEIGHT_KG
    }

    /// Pending -> Delivered transition. Callers guard against re-delivery;
    /// the first delivery timestamp is never overwritten.
    pub fn mark_delivered(&mut self) {
        self.status = OrderStatus::Delivered;
        if self.delivered_at.is_none() {
            self.delivered_at = Some(Utc::now());
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} -> {}, {}kg, {}",
            self.id, self.destination, self.weight_kg, self.status
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
