//! Empirical atmospheric retention: the fraction of an impactor's kinetic energy that
//! survives atmospheric passage and couples into the target.
//!
//! Retention is a step function of impactor diameter, tabulated per (body, material)
//! pair. Bodies without tabulated atmospheres retain everything.

use unbind_bodies::{CelestialBody, ImpactorMaterial};

/// A diameter band: applies when the diameter is strictly below `below_km`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionBand {
    pub below_km: f64,
    pub retention: f64,
}

/// Ordered bands for one (body, material) pair plus the unbounded top band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionTable {
    pub bands: &'static [RetentionBand],
    pub above: f64,
}

impl RetentionTable {
    /// Retention for a diameter in kilometres. Assumes a validated positive diameter.
    pub fn lookup(&self, diameter_km: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| diameter_km < band.below_km)
            .map_or(self.above, |band| band.retention)
    }

    /// Largest retention value the table can produce.
    pub fn ceiling(&self) -> f64 {
        self.bands
            .iter()
            .map(|band| band.retention)
            .fold(self.above, f64::max)
    }
}

const fn band(below_km: f64, retention: f64) -> RetentionBand {
    RetentionBand {
        below_km,
        retention,
    }
}

const fn table(bands: &'static [RetentionBand], above: f64) -> RetentionTable {
    RetentionTable { bands, above }
}

// Earth: 1 bar nitrogen/oxygen.
static EARTH_METALLIC: RetentionTable = table(
    &[
        band(0.01, 0.00),
        band(0.03, 0.20),
        band(0.05, 0.50),
        band(0.10, 0.80),
        band(0.20, 0.90),
    ],
    0.95,
);
static EARTH_ICY: RetentionTable = table(&[band(0.05, 0.00), band(0.20, 0.05)], 0.80);
static EARTH_ROCKY: RetentionTable = table(
    &[band(0.01, 0.01), band(0.03, 0.10), band(0.20, 0.50)],
    0.90,
);

// Mars: roughly 1% of Earth's surface density.
static MARS_METALLIC: RetentionTable = table(&[band(0.001, 0.80)], 0.95);
static MARS_ICY: RetentionTable = table(&[band(0.01, 0.70)], 0.90);
static MARS_ROCKY: RetentionTable = table(&[band(0.005, 0.85)], 0.95);

// Venus: ~90 bar CO2.
static VENUS_METALLIC: RetentionTable = table(
    &[band(0.10, 0.00), band(0.50, 0.10), band(1.00, 0.50)],
    0.80,
);
static VENUS_ICY: RetentionTable = table(&[band(1.00, 0.00)], 0.30);
static VENUS_ROCKY: RetentionTable = table(&[band(0.20, 0.00), band(1.00, 0.05)], 0.60);

// Giant planets: rocky and icy bodies share bands.
static JUPITER_METALLIC: RetentionTable = table(&[band(1.0, 0.00), band(10.0, 0.01)], 0.20);
static JUPITER_OTHER: RetentionTable = table(&[band(10.0, 0.00)], 0.10);
static SATURN_METALLIC: RetentionTable = table(&[band(0.50, 0.00), band(5.00, 0.05)], 0.30);
static SATURN_OTHER: RetentionTable = table(&[band(5.00, 0.00)], 0.15);
static URANUS_METALLIC: RetentionTable = table(&[band(2.00, 0.00), band(10.0, 0.02)], 0.25);
static URANUS_OTHER: RetentionTable = table(&[band(10.0, 0.00)], 0.15);
static NEPTUNE_METALLIC: RetentionTable = table(&[band(3.00, 0.00), band(15.0, 0.01)], 0.20);
static NEPTUNE_OTHER: RetentionTable = table(&[band(15.0, 0.00)], 0.10);

// Pluto: ~1 Pa nitrogen.
static PLUTO_METALLIC: RetentionTable = table(&[band(0.001, 0.95)], 0.99);
static PLUTO_ICY: RetentionTable = table(&[band(0.01, 0.90)], 0.98);
static PLUTO_ROCKY: RetentionTable = table(&[band(0.005, 0.92)], 0.98);

// Moon: tenuous exosphere only.
static MOON_METALLIC: RetentionTable = table(&[band(0.001, 0.99)], 1.00);
static MOON_ICY: RetentionTable = table(&[band(0.001, 0.98)], 0.99);
static MOON_ROCKY: RetentionTable = table(&[band(0.001, 0.99)], 1.00);

/// Retention bands for a (body, material) pair, or `None` for bodies without atmosphere data.
pub fn retention_table(
    body: CelestialBody,
    material: ImpactorMaterial,
) -> Option<&'static RetentionTable> {
    use CelestialBody as B;
    use ImpactorMaterial as M;

    let table = match (body, material) {
        (B::Earth, M::Metallic) => &EARTH_METALLIC,
        (B::Earth, M::Icy) => &EARTH_ICY,
        (B::Earth, M::Rocky) => &EARTH_ROCKY,
        (B::Mars, M::Metallic) => &MARS_METALLIC,
        (B::Mars, M::Icy) => &MARS_ICY,
        (B::Mars, M::Rocky) => &MARS_ROCKY,
        (B::Venus, M::Metallic) => &VENUS_METALLIC,
        (B::Venus, M::Icy) => &VENUS_ICY,
        (B::Venus, M::Rocky) => &VENUS_ROCKY,
        (B::Jupiter, M::Metallic) => &JUPITER_METALLIC,
        (B::Jupiter, _) => &JUPITER_OTHER,
        (B::Saturn, M::Metallic) => &SATURN_METALLIC,
        (B::Saturn, _) => &SATURN_OTHER,
        (B::Uranus, M::Metallic) => &URANUS_METALLIC,
        (B::Uranus, _) => &URANUS_OTHER,
        (B::Neptune, M::Metallic) => &NEPTUNE_METALLIC,
        (B::Neptune, _) => &NEPTUNE_OTHER,
        (B::Pluto, M::Metallic) => &PLUTO_METALLIC,
        (B::Pluto, M::Icy) => &PLUTO_ICY,
        (B::Pluto, M::Rocky) => &PLUTO_ROCKY,
        (B::Moon, M::Metallic) => &MOON_METALLIC,
        (B::Moon, M::Icy) => &MOON_ICY,
        (B::Moon, M::Rocky) => &MOON_ROCKY,
        (B::Vacuum, _) => return None,
    };
    Some(table)
}

/// Fraction of kinetic energy retained after atmospheric passage, in `[0, 1]`.
///
/// The caller validates `diameter_km > 0`; bodies without atmosphere data return 1.0.
pub fn retention(diameter_km: f64, body: CelestialBody, material: ImpactorMaterial) -> f64 {
    retention_table(body, material).map_or(1.0, |table| table.lookup(diameter_km))
}
