//! Conversion from scenario manifest records into solve requests.

use unbind_bodies::{CelestialBody, ImpactorMaterial};
use unbind_config::{ScenarioConfig, ScenarioModeConfig};

use crate::request::{SolveMode, SolveRequest};

/// Convert a `ScenarioConfig` into a `SolveRequest`, resolving names with fallback.
pub fn from_config(config: &ScenarioConfig) -> SolveRequest {
    let mode = match config.mode {
        ScenarioModeConfig::Mass {
            mass_kg,
            efficiency,
        } => SolveMode::ByMass {
            mass_kg,
            efficiency,
        },
        ScenarioModeConfig::Diameter {
            diameter_km,
            density_kg_m3,
            efficiency,
        } => SolveMode::ByDiameter {
            diameter_km,
            density_kg_m3,
            efficiency,
        },
        ScenarioModeConfig::Speed {
            speed_km_s,
            density_kg_m3,
            efficiency,
        } => SolveMode::BySpeed {
            speed_km_s,
            density_kg_m3,
            efficiency,
        },
    };

    SolveRequest {
        body: CelestialBody::resolve(config.body.as_deref()),
        material: ImpactorMaterial::resolve(config.material.as_deref()),
        label: config.name.clone(),
        mode,
    }
}
