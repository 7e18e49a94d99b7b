//! Fixed-point coupling between impactor size and atmospheric retention for speed mode.
//!
//! Retention depends on diameter, diameter on mass, and mass on the effective efficiency,
//! which depends on retention. The loop runs a fixed number of passes; there is no
//! convergence test. The first pass ignores the atmosphere entirely.

use unbind_atmosphere::retention;
use unbind_bodies::{CelestialBody, ImpactorMaterial};
use unbind_core::{sphere, units};

/// Number of passes the speed-mode solver runs.
pub const COUPLING_PASSES: usize = 3;

/// State after one coupling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CouplingPass {
    pub retention: f64,
    pub effective_efficiency: f64,
    pub mass_kg: f64,
    pub diameter_km: f64,
}

/// Fixed inputs of the speed-mode coupling problem.
#[derive(Debug, Clone, Copy)]
pub struct SpeedCoupling {
    pub binding_energy_j: f64,
    /// Relativistic kinetic energy per kilogram at the requested speed (J/kg).
    pub energy_per_mass: f64,
    pub density_kg_m3: f64,
    pub efficiency: f64,
    pub body: CelestialBody,
    pub material: ImpactorMaterial,
}

impl SpeedCoupling {
    /// One pass: retention at the previous diameter (1.0 when there is none yet),
    /// then the mass and diameter that retention implies.
    pub fn step(&self, previous_diameter_km: Option<f64>) -> CouplingPass {
        let retention = previous_diameter_km
            .map_or(1.0, |diameter_km| retention(diameter_km, self.body, self.material));
        let effective_efficiency = self.efficiency * retention;
        let mass_kg = self.binding_energy_j / (effective_efficiency * self.energy_per_mass);
        let diameter_km = units::m_to_km(sphere::diameter(mass_kg, self.density_kg_m3));
        CouplingPass {
            retention,
            effective_efficiency,
            mass_kg,
            diameter_km,
        }
    }

    /// Every pass in order; the last entry is the solver's answer.
    pub fn passes(&self) -> [CouplingPass; COUPLING_PASSES] {
        let mut passes = [CouplingPass::default(); COUPLING_PASSES];
        let mut previous_diameter_km = None;
        for (pass, slot) in passes.iter_mut().enumerate() {
            let state = self.step(previous_diameter_km);
            tracing::debug!(
                pass,
                retention = state.retention,
                mass_kg = state.mass_kg,
                diameter_km = state.diameter_km,
                "speed-mode coupling pass"
            );
            previous_diameter_km = Some(state.diameter_km);
            *slot = state;
        }
        passes
    }

    /// Final state after [`COUPLING_PASSES`] passes.
    pub fn solve(&self) -> CouplingPass {
        self.passes()[COUPLING_PASSES - 1]
    }
}
