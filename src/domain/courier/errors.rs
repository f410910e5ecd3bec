// ============================================================================
// Courier Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error("Invalid courier name: {0:?} (letters only, no spaces or digits)")]
    InvalidName(String),

    #[error("Courier has no vehicle assigned")]
    NoVehicleAssigned,
}
