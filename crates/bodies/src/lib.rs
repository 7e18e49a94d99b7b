//! Target body registry (gravitational binding energies) and impactor material identifiers.
//!
//! Free-text names resolve through [`CelestialBody::resolve`] and
//! [`ImpactorMaterial::resolve`]. Unrecognised names never fail: they fall back to
//! Earth and rocky material respectively, so the solver only ever sees enumerations.

use std::fmt;

/// Target bodies with tabulated binding energies.
///
/// `Vacuum` is a sentinel with no atmosphere; it carries the Earth-equivalent binding energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    #[default]
    Earth,
    Mars,
    Venus,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
    Vacuum,
}

/// Binding energy used when a body name is not recognised (J).
pub const DEFAULT_BINDING_ENERGY_J: f64 = 2.49e32;

impl CelestialBody {
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Earth,
        CelestialBody::Mars,
        CelestialBody::Venus,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::Moon,
        CelestialBody::Vacuum,
    ];

    /// Gravitational binding energy of the body (J).
    pub fn binding_energy_joules(self) -> f64 {
        match self {
            CelestialBody::Earth => 2.49e32,
            CelestialBody::Mars => 4.87e30,
            CelestialBody::Venus => 1.57e32,
            CelestialBody::Jupiter => 2.06e36,
            CelestialBody::Saturn => 2.22e35,
            CelestialBody::Uranus => 1.19e34,
            CelestialBody::Neptune => 1.69e34,
            CelestialBody::Pluto => 2.85e27,
            CelestialBody::Moon => 1.23e29,
            CelestialBody::Vacuum => DEFAULT_BINDING_ENERGY_J,
        }
    }

    /// Lower-case identifier used on the command line and in scenario files.
    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Earth => "earth",
            CelestialBody::Mars => "mars",
            CelestialBody::Venus => "venus",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Uranus => "uranus",
            CelestialBody::Neptune => "neptune",
            CelestialBody::Pluto => "pluto",
            CelestialBody::Moon => "moon",
            CelestialBody::Vacuum => "vacuum",
        }
    }

    /// Strict, case-insensitive lookup.
    pub fn lookup(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let body = match lower.as_str() {
            "earth" => CelestialBody::Earth,
            "mars" => CelestialBody::Mars,
            "venus" => CelestialBody::Venus,
            "jupiter" => CelestialBody::Jupiter,
            "saturn" => CelestialBody::Saturn,
            "uranus" => CelestialBody::Uranus,
            "neptune" => CelestialBody::Neptune,
            "pluto" => CelestialBody::Pluto,
            "moon" | "luna" => CelestialBody::Moon,
            "vacuum" | "none" => CelestialBody::Vacuum,
            _ => return None,
        };
        Some(body)
    }

    /// Resolve an optional free-text name, defaulting to Earth when missing or unknown.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            None => CelestialBody::Earth,
            Some(raw) => Self::lookup(raw).unwrap_or_else(|| {
                tracing::warn!(body = raw, "unknown target body, falling back to earth");
                CelestialBody::Earth
            }),
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Impactor bulk composition; only used to select retention bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImpactorMaterial {
    /// Stony asteroid.
    #[default]
    Rocky,
    /// Iron-nickel asteroid.
    Metallic,
    /// Icy/cometary body.
    Icy,
}

impl ImpactorMaterial {
    pub const ALL: [ImpactorMaterial; 3] = [
        ImpactorMaterial::Rocky,
        ImpactorMaterial::Metallic,
        ImpactorMaterial::Icy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImpactorMaterial::Rocky => "stony",
            ImpactorMaterial::Metallic => "iron",
            ImpactorMaterial::Icy => "cometary",
        }
    }

    /// Strict, case-insensitive lookup accepting the common aliases.
    pub fn lookup(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "stony" | "rocky" | "rock" => Some(ImpactorMaterial::Rocky),
            "iron" | "metallic" | "metal" => Some(ImpactorMaterial::Metallic),
            "cometary" | "icy" | "ice" | "comet" => Some(ImpactorMaterial::Icy),
            _ => None,
        }
    }

    /// Resolve an optional free-text name, defaulting to rocky when missing or unknown.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            None => ImpactorMaterial::Rocky,
            Some(raw) => Self::lookup(raw).unwrap_or_else(|| {
                tracing::warn!(material = raw, "unknown impactor material, falling back to stony");
                ImpactorMaterial::Rocky
            }),
        }
    }
}

impl fmt::Display for ImpactorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
