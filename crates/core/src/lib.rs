//! Core units, constants, and shared primitives for the planetary unbinding workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Speed of light in vacuum (m/s).
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
    /// Speed of light in vacuum (km/s).
    pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
    /// Fraction of light speed at or above which an impact is reported as unreachable.
    pub const DESTRUCTIVE_BETA_LIMIT: f64 = 0.99;
    /// Bulk density assumed when only the impactor mass is known (kg/m³).
    pub const REFERENCE_DENSITY_KG_M3: f64 = 3_000.0;
    /// Mass of Mercury (kg), used for scale comparisons.
    pub const MERCURY_MASS_KG: f64 = 3.30e23;
    /// Mass of Ceres (kg), used for scale comparisons.
    pub const CERES_MASS_KG: f64 = 9.38e20;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg * std::f64::consts::PI / 180.0
    }
}

/// Homogeneous sphere helpers; impactors are modelled as uniform spheres.
pub mod sphere {
    use std::f64::consts::PI;

    /// Volume of a sphere with the given diameter (m³ for a diameter in metres).
    #[inline]
    pub fn volume(diameter_m: f64) -> f64 {
        let r = 0.5 * diameter_m;
        (4.0 / 3.0) * PI * r * r * r
    }

    /// Mass of a uniform sphere (kg).
    #[inline]
    pub fn mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
        density_kg_m3 * volume(diameter_m)
    }

    /// Diameter (m) of the uniform sphere holding `mass_kg` at `density_kg_m3`.
    #[inline]
    pub fn diameter(mass_kg: f64, density_kg_m3: f64) -> f64 {
        let volume = mass_kg / density_kg_m3;
        2.0 * ((3.0 * volume) / (4.0 * PI)).cbrt()
    }
}
