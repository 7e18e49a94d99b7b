//! Solve every scenario in a manifest and optionally export the results.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use unbind_calculator::config::load_scenarios;
use unbind_calculator::export::report::{self, ImpactReport};
use unbind_calculator::export::{table, writer_for_path};
use unbind_calculator::solver::{SolveKind, SolveResult, scenario, solve};

#[path = "shared/logging.rs"]
mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Batch solver for impact scenario manifests")]
struct Cli {
    /// Scenario manifest: YAML list, single TOML record, or directory of TOML records
    #[arg(long, default_value = "configs/scenarios/reference.yaml")]
    scenarios: PathBuf,

    /// Write a CSV table of the results (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON array of the results (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let configs = load_scenarios(&cli.scenarios)
        .with_context(|| format!("loading scenarios from {}", cli.scenarios.display()))?;
    tracing::info!(count = configs.len(), "loaded scenarios");

    let mut reports = Vec::with_capacity(configs.len());
    let mut failures = 0usize;
    for (index, config) in configs.iter().enumerate() {
        let request = scenario::from_config(config);
        match solve(&request) {
            Ok(result) => {
                println!("{}", summary_line(&result));
                reports.push(ImpactReport::from(&result));
            }
            Err(err) => {
                failures += 1;
                let label = config.name.as_deref().unwrap_or("-");
                eprintln!("[error] scenario {index} ({label}): {err}");
            }
        }
    }

    if let Some(path) = &cli.csv {
        let writer = writer_for_path(path)
            .with_context(|| format!("opening CSV output {}", path.display()))?;
        table::write_csv(writer, &reports)?;
    }
    if let Some(path) = &cli.json {
        let mut writer = writer_for_path(path)
            .with_context(|| format!("opening JSON output {}", path.display()))?;
        report::write_json(writer.as_mut(), &reports)?;
        writer.flush()?;
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} scenarios failed", configs.len());
    }
    Ok(())
}

fn summary_line(result: &SolveResult) -> String {
    let label = result.label.as_deref().unwrap_or("-");
    let verdict = match (result.kind, result.destructive) {
        (SolveKind::Speed, _) => "MIN SIZE",
        (_, true) => "DESTROYED",
        (_, false) => "SURVIVES",
    };
    format!(
        "{label:<32} {mode:<8} {body:<8} {material:<9} ret={retention:.3} m={mass:.3e} kg D={diameter:.3} km v={speed:.3} km/s {verdict}",
        mode = result.kind.name(),
        body = result.body.name(),
        material = result.material.name(),
        retention = result.retention,
        mass = result.mass_kg,
        diameter = result.diameter_km,
        speed = result.relativistic_speed_km_s,
    )
}
