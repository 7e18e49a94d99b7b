//! Solve requests and their up-front validation.

use thiserror::Error;
use unbind_bodies::{CelestialBody, ImpactorMaterial};
use unbind_core::constants::SPEED_OF_LIGHT_M_S;
use unbind_core::units::kms_to_ms;

/// Which quantity is known; the solver derives the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveMode {
    /// Known mass, solve for the required speed.
    ByMass { mass_kg: f64, efficiency: f64 },
    /// Known size and density, solve for the required speed.
    ByDiameter {
        diameter_km: f64,
        density_kg_m3: f64,
        efficiency: f64,
    },
    /// Known speed and density, solve for the minimum mass and size.
    BySpeed {
        speed_km_s: f64,
        density_kg_m3: f64,
        efficiency: f64,
    },
}

/// A single impact scenario to resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRequest {
    pub body: CelestialBody,
    pub material: ImpactorMaterial,
    pub label: Option<String>,
    pub mode: SolveMode,
}

/// Input rejected before any solving takes place.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("speed must be less than light speed (299792.458 km/s), got {speed_km_s} km/s")]
    SpeedNotBelowLight { speed_km_s: f64 },
}

impl SolveRequest {
    pub fn new(mode: SolveMode, body: CelestialBody, material: ImpactorMaterial) -> Self {
        Self {
            body,
            material,
            label: None,
            mode,
        }
    }

    pub fn by_mass(
        mass_kg: f64,
        efficiency: f64,
        body: CelestialBody,
        material: ImpactorMaterial,
    ) -> Self {
        Self::new(SolveMode::ByMass { mass_kg, efficiency }, body, material)
    }

    pub fn by_diameter(
        diameter_km: f64,
        density_kg_m3: f64,
        efficiency: f64,
        body: CelestialBody,
        material: ImpactorMaterial,
    ) -> Self {
        Self::new(
            SolveMode::ByDiameter {
                diameter_km,
                density_kg_m3,
                efficiency,
            },
            body,
            material,
        )
    }

    pub fn by_speed(
        speed_km_s: f64,
        density_kg_m3: f64,
        efficiency: f64,
        body: CelestialBody,
        material: ImpactorMaterial,
    ) -> Self {
        Self::new(
            SolveMode::BySpeed {
                speed_km_s,
                density_kg_m3,
                efficiency,
            },
            body,
            material,
        )
    }

    /// Attach a free-text object name, echoed back in the result.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Reject non-positive or non-finite inputs and speeds at or above c.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            SolveMode::ByMass {
                mass_kg,
                efficiency,
            } => {
                require_positive("mass_kg", mass_kg)?;
                require_positive("efficiency", efficiency)?;
            }
            SolveMode::ByDiameter {
                diameter_km,
                density_kg_m3,
                efficiency,
            } => {
                require_positive("diameter_km", diameter_km)?;
                require_positive("density_kg_m3", density_kg_m3)?;
                require_positive("efficiency", efficiency)?;
            }
            SolveMode::BySpeed {
                speed_km_s,
                density_kg_m3,
                efficiency,
            } => {
                require_positive("speed_km_s", speed_km_s)?;
                require_positive("density_kg_m3", density_kg_m3)?;
                require_positive("efficiency", efficiency)?;
                if kms_to_ms(speed_km_s) >= SPEED_OF_LIGHT_M_S {
                    return Err(ValidationError::SpeedNotBelowLight { speed_km_s });
                }
            }
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}
