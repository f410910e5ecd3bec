use crate::domain::courier::CourierId;
use crate::domain::vehicle::VehicleId;

// ============================================================================
// Depot Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DepotError {
    #[error("No courier registered under id {0}")]
    UnknownCourier(CourierId),

    #[error("Vehicle {0} is not in the available pool")]
    VehicleNotAvailable(VehicleId),
}
