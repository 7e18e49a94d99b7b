//! Upper and lower bound radiation dose from an impact energy release.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use unbind_calculator::config::{DoseConfig, load_dose_presets};
use unbind_calculator::dose::{self, DoseReport, DoseRequest, LETHAL_DOSE_GY};
use unbind_calculator::export::report::{self, DoseSummary};

#[path = "shared/logging.rs"]
mod logging;

/// Flags override the preset (or built-in Earth/Moon defaults) field by field.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Impact-generated radiation dose in grays (Gy = J/kg)"
)]
struct Cli {
    /// Total energy released (J); defaults to Earth's binding energy
    #[arg(long)]
    energy: Option<f64>,

    /// Fraction of the energy emitted as ionizing radiation
    #[arg(long)]
    eta: Option<f64>,

    /// Distance to the impact (m); defaults to the Earth-Moon distance
    #[arg(long)]
    distance: Option<f64>,

    /// Exposed area (m^2)
    #[arg(long)]
    area: Option<f64>,

    /// Mass of the exposed object (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Fraction of the body exposed
    #[arg(long)]
    exposed_fraction: Option<f64>,

    /// Incidence angle from vertical for the lower bound (degrees)
    #[arg(long)]
    theta: Option<f64>,

    /// Atmospheric transmission (1.0 = vacuum)
    #[arg(long)]
    transmission: Option<f64>,

    /// YAML/TOML file or directory of dose presets
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let presets = match &cli.preset {
        Some(path) => load_dose_presets(path)
            .with_context(|| format!("loading dose presets from {}", path.display()))?,
        None => vec![DoseConfig::default()],
    };
    if presets.is_empty() {
        anyhow::bail!("no dose presets found");
    }

    let mut summaries = Vec::with_capacity(presets.len());
    for preset in &presets {
        let request = apply_overrides(&cli, DoseRequest::from_config(preset));
        let dose_report = dose::compute(&request)
            .with_context(|| format!("preset {}", preset.name.as_deref().unwrap_or("default")))?;
        tracing::debug!(
            upper_gy = dose_report.upper_dose_gy,
            lower_gy = dose_report.lower_dose_gy,
            "dose evaluated"
        );
        if cli.json {
            summaries.push(DoseSummary::new(preset.name.clone(), &dose_report));
        } else {
            print_text(preset.name.as_deref(), &request, &dose_report);
        }
    }

    if cli.json {
        let mut stdout = std::io::stdout();
        report::write_json(&mut stdout, &summaries)?;
    }
    Ok(())
}

fn apply_overrides(cli: &Cli, mut request: DoseRequest) -> DoseRequest {
    let overrides = [
        (cli.energy, &mut request.energy_j),
        (cli.eta, &mut request.radiation_fraction),
        (cli.distance, &mut request.distance_m),
        (cli.area, &mut request.exposed_area_m2),
        (cli.mass, &mut request.exposed_mass_kg),
        (cli.exposed_fraction, &mut request.exposed_fraction),
        (cli.theta, &mut request.glancing_angle_deg),
        (cli.transmission, &mut request.atmospheric_transmission),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }
    request
}

fn print_text(name: Option<&str>, request: &DoseRequest, report: &DoseReport) {
    println!("Impact Generated Radiation Dose");
    println!("-------------------------------");
    if let Some(name) = name {
        println!("preset = {name}");
    }
    println!("fluence = {:.6e} J/m^2", report.fluence_j_m2);
    println!();
    println!(
        "Dose (upper boundary, max exposure) = {:.6e} Gy",
        report.upper_dose_gy
    );
    if report.upper_is_lethal() {
        println!("*** WARNING: Dose exceeds {LETHAL_DOSE_GY} Gy (lethal dose for humans)");
    }
    println!(
        "Dose (lower boundary, angle {:.1} deg, glancing blow) = {:.6e} Gy",
        request.glancing_angle_deg, report.lower_dose_gy
    );
    if report.lower_is_lethal() {
        println!("*** WARNING: Dose exceeds {LETHAL_DOSE_GY} Gy (lethal dose for humans)");
    }
    println!();
}
