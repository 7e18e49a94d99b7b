//! The three solve modes.

use thiserror::Error;
use unbind_atmosphere::retention;
use unbind_bodies::{CelestialBody, ImpactorMaterial};
use unbind_core::constants::REFERENCE_DENSITY_KG_M3;
use unbind_core::{sphere, units};
use unbind_relativity::{
    RelativityError, classical_velocity, relativistic_energy_per_mass, relativistic_velocity,
};

use crate::coupling::SpeedCoupling;
use crate::request::{SolveMode, SolveRequest, ValidationError};
use crate::result::{SolveKind, SolveResult, is_destructive};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("relativistic kinematics failed: {0}")]
    Domain(#[from] RelativityError),
}

/// Validate and resolve a request.
pub fn solve(request: &SolveRequest) -> Result<SolveResult, SolveError> {
    request.validate()?;
    let body = request.body;
    let material = request.material;

    let mut result = match request.mode {
        SolveMode::ByMass {
            mass_kg,
            efficiency,
        } => mass_mode(mass_kg, efficiency, body, material),
        SolveMode::ByDiameter {
            diameter_km,
            density_kg_m3,
            efficiency,
        } => diameter_mode(diameter_km, density_kg_m3, efficiency, body, material),
        SolveMode::BySpeed {
            speed_km_s,
            density_kg_m3,
            efficiency,
        } => speed_mode(speed_km_s, density_kg_m3, efficiency, body, material)?,
    };
    result.label = request.label.clone();

    tracing::debug!(
        mode = result.kind.name(),
        body = %body,
        material = %material,
        retention = result.retention,
        mass_kg = result.mass_kg,
        relativistic_speed_km_s = result.relativistic_speed_km_s,
        destructive = result.destructive,
        "solved impact scenario"
    );
    Ok(result)
}

/// Required impact speed for an impactor of known mass.
pub fn solve_by_mass(
    mass_kg: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> Result<SolveResult, SolveError> {
    solve(&SolveRequest::by_mass(mass_kg, efficiency, body, material))
}

/// Required impact speed for an impactor of known size and density.
pub fn solve_by_diameter(
    diameter_km: f64,
    density_kg_m3: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> Result<SolveResult, SolveError> {
    solve(&SolveRequest::by_diameter(
        diameter_km,
        density_kg_m3,
        efficiency,
        body,
        material,
    ))
}

/// Minimum impactor mass and size for a known impact speed.
pub fn solve_by_speed(
    speed_km_s: f64,
    density_kg_m3: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> Result<SolveResult, SolveError> {
    solve(&SolveRequest::by_speed(
        speed_km_s,
        density_kg_m3,
        efficiency,
        body,
        material,
    ))
}

fn mass_mode(
    mass_kg: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> SolveResult {
    // The diameter only drives the retention lookup; it never feeds back into the mass.
    let diameter_km = units::m_to_km(sphere::diameter(mass_kg, REFERENCE_DENSITY_KG_M3));
    required_speed(
        SolveKind::Mass,
        mass_kg,
        diameter_km,
        REFERENCE_DENSITY_KG_M3,
        efficiency,
        body,
        material,
    )
}

fn diameter_mode(
    diameter_km: f64,
    density_kg_m3: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> SolveResult {
    let mass_kg = sphere::mass(units::km_to_m(diameter_km), density_kg_m3);
    required_speed(
        SolveKind::Diameter,
        mass_kg,
        diameter_km,
        density_kg_m3,
        efficiency,
        body,
        material,
    )
}

fn required_speed(
    kind: SolveKind,
    mass_kg: f64,
    diameter_km: f64,
    density_kg_m3: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> SolveResult {
    let binding_energy_j = body.binding_energy_joules();
    let retention = retention(diameter_km, body, material);
    let effective_efficiency = efficiency * retention;
    let energy_per_mass = binding_energy_j / (effective_efficiency * mass_kg);

    let classical_speed_km_s = units::ms_to_kms(classical_velocity(energy_per_mass));
    let relativistic_speed_km_s = units::ms_to_kms(relativistic_velocity(energy_per_mass));

    SolveResult {
        kind,
        body,
        material,
        label: None,
        binding_energy_j,
        efficiency,
        retention,
        effective_efficiency,
        density_kg_m3,
        mass_kg,
        diameter_km,
        classical_speed_km_s,
        relativistic_speed_km_s,
        classical_mass_kg: None,
        destructive: is_destructive(relativistic_speed_km_s),
    }
}

fn speed_mode(
    speed_km_s: f64,
    density_kg_m3: f64,
    efficiency: f64,
    body: CelestialBody,
    material: ImpactorMaterial,
) -> Result<SolveResult, SolveError> {
    let speed_m_s = units::kms_to_ms(speed_km_s);
    let binding_energy_j = body.binding_energy_joules();
    let coupling = SpeedCoupling {
        binding_energy_j,
        energy_per_mass: relativistic_energy_per_mass(speed_m_s)?,
        density_kg_m3,
        efficiency,
        body,
        material,
    };
    let last = coupling.solve();
    let classical_mass_kg =
        2.0 * binding_energy_j / (last.effective_efficiency * speed_m_s * speed_m_s);
    let reachable = last.mass_kg.is_finite();
    if !reachable {
        tracing::warn!(speed_km_s, "no finite impactor mass reaches the binding energy");
    }

    Ok(SolveResult {
        kind: SolveKind::Speed,
        body,
        material,
        label: None,
        binding_energy_j,
        efficiency,
        retention: last.retention,
        effective_efficiency: last.effective_efficiency,
        density_kg_m3,
        mass_kg: last.mass_kg,
        diameter_km: last.diameter_km,
        classical_speed_km_s: speed_km_s,
        relativistic_speed_km_s: speed_km_s,
        classical_mass_kg: Some(classical_mass_kg),
        destructive: reachable && is_destructive(speed_km_s),
    })
}
