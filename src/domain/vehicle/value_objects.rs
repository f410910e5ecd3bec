use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Vehicle Value Objects
// ============================================================================

/// Fixed load ceiling for motorcycles, in kilograms. The stored top speed
/// plays no part in the delivery rule.
pub const MOTORCYCLE_MAX_LOAD_KG: f64 = 10.0;

/// Opaque vehicle handle, stable across pool moves and assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub Uuid);

impl VehicleId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vehicle variant - union of the two depot fleet types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum VehicleKind {
    Truck { capacity_kg: f64 },
    Motorcycle { top_speed_kmh: f64 },
}

impl VehicleKind {
    /// Lowercase variant name, used in logs and rendering.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Truck { .. } => "truck",
            VehicleKind::Motorcycle { .. } => "motorcycle",
        }
    }
}
