//! Radiation dose received at a distance from an impact energy release.
//!
//! `dose = (η·E / (4π·d²)) · T · A · f · cos(θ) / M`, evaluated once overhead
//! (`cos θ = 1`) for the upper bound and once at a glancing angle for the lower bound.

use std::f64::consts::PI;

use thiserror::Error;
use unbind_config::DoseConfig;
use unbind_core::units::deg_to_rad;

/// Whole-body dose considered lethal without treatment (Gy).
pub const LETHAL_DOSE_GY: f64 = 8.0;

/// Geometry and exposure of a single dose estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseRequest {
    /// Energy released (J).
    pub energy_j: f64,
    /// Fraction emitted as ionizing radiation.
    pub radiation_fraction: f64,
    pub distance_m: f64,
    pub exposed_area_m2: f64,
    pub exposed_mass_kg: f64,
    /// Fraction of the exposed area facing the source.
    pub exposed_fraction: f64,
    /// Incidence angle from vertical used for the lower bound, in `[0, 90]` degrees.
    pub glancing_angle_deg: f64,
    /// 1.0 in vacuum, lower behind an atmosphere.
    pub atmospheric_transmission: f64,
}

impl Default for DoseRequest {
    fn default() -> Self {
        Self::from_config(&DoseConfig::default())
    }
}

impl DoseRequest {
    pub fn from_config(config: &DoseConfig) -> Self {
        Self {
            energy_j: config.energy_j,
            radiation_fraction: config.radiation_fraction,
            distance_m: config.distance_m,
            exposed_area_m2: config.exposed_area_m2,
            exposed_mass_kg: config.exposed_mass_kg,
            exposed_fraction: config.exposed_fraction,
            glancing_angle_deg: config.glancing_angle_deg,
            atmospheric_transmission: config.atmospheric_transmission,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoseReport {
    /// Unattenuated fluence at the receiver (J/m²).
    pub fluence_j_m2: f64,
    /// Fluence after atmospheric transmission (J/m²).
    pub attenuated_fluence_j_m2: f64,
    /// Overhead exposure (Gy).
    pub upper_dose_gy: f64,
    /// Exposure at the glancing angle (Gy).
    pub lower_dose_gy: f64,
}

impl DoseReport {
    pub fn upper_is_lethal(&self) -> bool {
        self.upper_dose_gy > LETHAL_DOSE_GY
    }

    pub fn lower_is_lethal(&self) -> bool {
        self.lower_dose_gy > LETHAL_DOSE_GY
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DoseError {
    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must lie in [0, 1] (got {value})")]
    NotAFraction { field: &'static str, value: f64 },
    #[error("glancing_angle_deg must lie in [0, 90] (got {value})")]
    AngleOutOfRange { value: f64 },
}

/// Evaluate the upper and lower dose bounds.
pub fn compute(request: &DoseRequest) -> Result<DoseReport, DoseError> {
    validate(request)?;

    let fluence = request.radiation_fraction * request.energy_j
        / (4.0 * PI * request.distance_m * request.distance_m);
    let attenuated = fluence * request.atmospheric_transmission;
    let cos_theta = deg_to_rad(request.glancing_angle_deg).cos();

    Ok(DoseReport {
        fluence_j_m2: fluence,
        attenuated_fluence_j_m2: attenuated,
        upper_dose_gy: absorbed_dose(attenuated, request, 1.0),
        lower_dose_gy: absorbed_dose(attenuated, request, cos_theta),
    })
}

fn absorbed_dose(fluence_j_m2: f64, request: &DoseRequest, cos_theta: f64) -> f64 {
    fluence_j_m2 * request.exposed_area_m2 * request.exposed_fraction * cos_theta
        / request.exposed_mass_kg
}

fn validate(request: &DoseRequest) -> Result<(), DoseError> {
    non_negative("energy_j", request.energy_j)?;
    non_negative("exposed_area_m2", request.exposed_area_m2)?;
    positive("distance_m", request.distance_m)?;
    positive("exposed_mass_kg", request.exposed_mass_kg)?;
    fraction("radiation_fraction", request.radiation_fraction)?;
    fraction("exposed_fraction", request.exposed_fraction)?;
    fraction("atmospheric_transmission", request.atmospheric_transmission)?;
    if !(0.0..=90.0).contains(&request.glancing_angle_deg) {
        return Err(DoseError::AngleOutOfRange {
            value: request.glancing_angle_deg,
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), DoseError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DoseError::Negative { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), DoseError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DoseError::NonPositive { field, value })
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), DoseError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DoseError::NotAFraction { field, value })
    }
}
