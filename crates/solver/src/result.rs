//! Solver output record.

use unbind_bodies::{CelestialBody, ImpactorMaterial};
use unbind_core::constants::{
    CERES_MASS_KG, DESTRUCTIVE_BETA_LIMIT, MERCURY_MASS_KG, SPEED_OF_LIGHT_KM_S,
};

/// Which quantity was supplied to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveKind {
    Mass,
    Diameter,
    Speed,
}

impl SolveKind {
    pub fn name(self) -> &'static str {
        match self {
            SolveKind::Mass => "mass",
            SolveKind::Diameter => "diameter",
            SolveKind::Speed => "speed",
        }
    }
}

/// Resolved impact scenario.
///
/// In mass and diameter modes the speeds are the required impact speeds. In speed mode
/// both speeds echo the requested speed, `mass_kg`/`diameter_km` are the minimum
/// relativistic mass and size, and `classical_mass_kg` holds the Newtonian contrast.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub kind: SolveKind,
    pub body: CelestialBody,
    pub material: ImpactorMaterial,
    pub label: Option<String>,
    pub binding_energy_j: f64,
    pub efficiency: f64,
    pub retention: f64,
    pub effective_efficiency: f64,
    pub density_kg_m3: f64,
    pub mass_kg: f64,
    pub diameter_km: f64,
    pub classical_speed_km_s: f64,
    pub relativistic_speed_km_s: f64,
    pub classical_mass_kg: Option<f64>,
    pub destructive: bool,
}

impl SolveResult {
    /// Kinetic energy the impactor must carry so that `U` couples after losses (J).
    pub fn required_energy_j(&self) -> f64 {
        self.binding_energy_j / self.effective_efficiency
    }

    /// Relativistic speed as a fraction of c.
    pub fn beta(&self) -> f64 {
        self.relativistic_speed_km_s / SPEED_OF_LIGHT_KM_S
    }

    pub fn mercury_masses(&self) -> f64 {
        self.mass_kg / MERCURY_MASS_KG
    }

    pub fn ceres_masses(&self) -> f64 {
        self.mass_kg / CERES_MASS_KG
    }
}

/// Conclusive only below 0.99 c; anything faster is indistinguishable from light speed.
pub fn is_destructive(relativistic_speed_km_s: f64) -> bool {
    relativistic_speed_km_s < DESTRUCTIVE_BETA_LIMIT * SPEED_OF_LIGHT_KM_S
}
