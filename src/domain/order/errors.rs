use super::value_objects::OrderId;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid order weight: {0} kg (accepted range is 0 < w <= 100)")]
    InvalidWeight(f64),

    #[error("Unknown order id: {0}")]
    UnknownOrder(OrderId),
}
