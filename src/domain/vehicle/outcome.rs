use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order::OrderId;

// ============================================================================
// Delivery Outcomes
// ============================================================================
//
// The result of one delivery attempt. Both arms are ordinary values returned
// to the caller; only a missing vehicle is an error (see CourierError).
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DeliveryOutcome {
    Delivered { order_id: OrderId },
    Rejected { order_id: OrderId, reason: RejectReason },
}

impl DeliveryOutcome {
    pub fn order_id(&self) -> OrderId {
        match self {
            DeliveryOutcome::Delivered { order_id } => *order_id,
            DeliveryOutcome::Rejected { order_id, .. } => *order_id,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Delivered { order_id } => {
                write!(f, "Order {} delivered", order_id)
            }
            DeliveryOutcome::Rejected { order_id, reason } => {
                write!(f, "Order {} rejected: {}", order_id, reason)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    ExceedsTruckCapacity,
    ExceedsMotorcycleLimit,
    AlreadyDelivered,
    UnknownOrder,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::ExceedsTruckCapacity => write!(f, "weight exceeds truck capacity"),
            RejectReason::ExceedsMotorcycleLimit => write!(f, "weight exceeds motorcycle limit"),
            RejectReason::AlreadyDelivered => write!(f, "order already delivered"),
            RejectReason::UnknownOrder => write!(f, "order not found in this session"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let ok = DeliveryOutcome::Delivered { order_id: OrderId(1) };
        assert_eq!(ok.to_string(), "Order 1 delivered");

        let rejected = DeliveryOutcome::Rejected {
            order_id: OrderId(2),
            reason: RejectReason::ExceedsTruckCapacity,
        };
        assert_eq!(rejected.to_string(), "Order 2 rejected: weight exceeds truck capacity");
    }

    #[test]
    fn test_order_id_accessor_covers_both_arms() {
        let ok = DeliveryOutcome::Delivered { order_id: OrderId(5) };
        let rejected = DeliveryOutcome::Rejected {
            order_id: OrderId(6),
            reason: RejectReason::AlreadyDelivered,
        };
        assert_eq!(ok.order_id(), OrderId(5));
        assert_eq!(rejected.order_id(), OrderId(6));
        assert!(ok.is_delivered());
        assert!(!rejected.is_delivered());
    }
}
