//! Configuration models and loaders for impact scenarios and radiation-dose presets.
//!
//! A path may name a YAML file holding a list of records, a single-record TOML file, or a
//! directory of TOML files (read in file-name order).

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Bulk density assumed when a scenario omits one (kg/m³).
pub const DEFAULT_DENSITY_KG_M3: f64 = 3_000.0;
/// Coupling efficiency assumed when a scenario omits one.
pub const DEFAULT_EFFICIENCY: f64 = 1.0;

/// One impact scenario from a manifest.
///
/// `body` and `material` stay free text here; unknown names fall back to defaults when
/// the scenario is turned into a solve request.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(flatten)]
    pub mode: ScenarioModeConfig,
}

/// Known quantity of a scenario, tagged by `mode`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "mode")]
pub enum ScenarioModeConfig {
    #[serde(rename = "mass")]
    Mass {
        mass_kg: f64,
        #[serde(default = "default_efficiency")]
        efficiency: f64,
    },
    #[serde(rename = "diameter")]
    Diameter {
        diameter_km: f64,
        #[serde(default = "default_density")]
        density_kg_m3: f64,
        #[serde(default = "default_efficiency")]
        efficiency: f64,
    },
    #[serde(rename = "speed")]
    Speed {
        speed_km_s: f64,
        #[serde(default = "default_density")]
        density_kg_m3: f64,
        #[serde(default = "default_efficiency")]
        efficiency: f64,
    },
}

/// Radiation-dose preset. Every field is optional and defaults to the Earth/Moon case:
/// Earth's binding energy released at lunar distance onto an exposed human.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DoseConfig {
    pub name: Option<String>,
    pub energy_j: f64,
    pub radiation_fraction: f64,
    pub distance_m: f64,
    pub exposed_area_m2: f64,
    pub exposed_mass_kg: f64,
    pub exposed_fraction: f64,
    pub glancing_angle_deg: f64,
    pub atmospheric_transmission: f64,
}

impl Default for DoseConfig {
    fn default() -> Self {
        Self {
            name: None,
            energy_j: 2.49e32,
            radiation_fraction: 3.0e-3,
            distance_m: 3.844e8,
            exposed_area_m2: 0.7,
            exposed_mass_kg: 70.0,
            exposed_fraction: 1.0,
            glancing_angle_deg: 75.0,
            atmospheric_transmission: 1.0,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_density() -> f64 {
    DEFAULT_DENSITY_KG_M3
}

fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY
}

/// Load impact scenarios from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

/// Load radiation-dose presets from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_dose_presets<P: AsRef<Path>>(path: P) -> Result<Vec<DoseConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
