//! Conversions between kinetic energy per unit mass and speed.
//!
//! Everything here is SI: J/kg in, m/s out (and the reverse). Unit conversion to the
//! km-based quantities used at the solver boundary happens in the caller.
//!
//! The relativistic forms are arranged so that neither direction cancels catastrophically
//! at low speed: `β² = x(2 + x)/(1 + x)²` with `x = e/c²`, and
//! `γ − 1 = β²/(s(1 + s))` with `s = sqrt(1 − β²)`.

use thiserror::Error;
use unbind_core::constants::SPEED_OF_LIGHT_M_S;

const C2: f64 = SPEED_OF_LIGHT_M_S * SPEED_OF_LIGHT_M_S;

/// Largest representable speed strictly below c (m/s).
pub const MAX_SUBLUMINAL_M_S: f64 = f64::from_bits(SPEED_OF_LIGHT_M_S.to_bits() - 1);

#[derive(Debug, Error, PartialEq)]
pub enum RelativityError {
    #[error("speed must be less than light speed (got {speed_m_s} m/s)")]
    SuperluminalSpeed { speed_m_s: f64 },
}

/// Newtonian speed for a kinetic energy per unit mass: `v = sqrt(2e)`.
///
/// Not bounded by the speed of light; superluminal results are kept as a diagnostic.
pub fn classical_velocity(energy_per_mass: f64) -> f64 {
    (2.0 * energy_per_mass).sqrt()
}

/// Lorentz factor reached when `energy_per_mass` of kinetic energy is added to rest mass.
pub fn lorentz_factor_for_energy(energy_per_mass: f64) -> f64 {
    1.0 + energy_per_mass / C2
}

/// Relativistic speed for a kinetic energy per unit mass.
///
/// Returns a value in `[0, c)` for every non-negative input, infinity included. Once
/// `1/γ²` drops below double precision the result saturates at [`MAX_SUBLUMINAL_M_S`].
pub fn relativistic_velocity(energy_per_mass: f64) -> f64 {
    let x = energy_per_mass / C2;
    if x.is_infinite() {
        return MAX_SUBLUMINAL_M_S;
    }
    // 1 - 1/γ², factored to stay finite for huge x.
    let beta2 = ((x / (1.0 + x)) * ((2.0 + x) / (1.0 + x))).max(0.0);
    (SPEED_OF_LIGHT_M_S * beta2.sqrt()).min(MAX_SUBLUMINAL_M_S)
}

/// Lorentz factor for a speed strictly below c.
pub fn lorentz_factor(speed_m_s: f64) -> Result<f64, RelativityError> {
    let beta = subluminal_beta(speed_m_s)?;
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Relativistic kinetic energy per unit mass, `(γ − 1)c²`, for a speed strictly below c.
pub fn relativistic_energy_per_mass(speed_m_s: f64) -> Result<f64, RelativityError> {
    let beta = subluminal_beta(speed_m_s)?;
    let beta2 = beta * beta;
    let s = (1.0 - beta2).sqrt();
    Ok(beta2 / (s * (1.0 + s)) * C2)
}

fn subluminal_beta(speed_m_s: f64) -> Result<f64, RelativityError> {
    let beta = speed_m_s / SPEED_OF_LIGHT_M_S;
    if beta.is_nan() || beta.abs() >= 1.0 {
        return Err(RelativityError::SuperluminalSpeed { speed_m_s });
    }
    Ok(beta)
}
