//! Impactor mass, size, or speed needed to deliver a body's gravitational binding energy.

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use unbind_calculator::config::{DEFAULT_DENSITY_KG_M3, DEFAULT_EFFICIENCY};
use unbind_calculator::export::report::{self, ImpactReport};
use unbind_calculator::solver::{
    CelestialBody, ImpactorMaterial, SolveError, SolveMode, SolveRequest, solve,
};

#[path = "shared/logging.rs"]
mod logging;
#[path = "shared/text.rs"]
mod text;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Impactor size or speed required to unbind a planet (relativistic)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Print a JSON report instead of the text summary
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Given mass -> required speed
    #[command(alias = "m")]
    Mass {
        /// Impactor mass (kg)
        #[arg(allow_negative_numbers = true)]
        mass_kg: f64,
        /// Coupling efficiency (fraction of kinetic energy that unbinds the target)
        #[arg(long, default_value_t = DEFAULT_EFFICIENCY, allow_negative_numbers = true)]
        efficiency: f64,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Given diameter -> required speed
    #[command(alias = "d")]
    Diameter {
        /// Impactor diameter (km)
        #[arg(allow_negative_numbers = true)]
        diameter_km: f64,
        /// Bulk density (kg/m^3)
        #[arg(long, default_value_t = DEFAULT_DENSITY_KG_M3, allow_negative_numbers = true)]
        density: f64,
        /// Coupling efficiency (fraction of kinetic energy that unbinds the target)
        #[arg(long, default_value_t = DEFAULT_EFFICIENCY, allow_negative_numbers = true)]
        efficiency: f64,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Given speed -> minimum mass and equivalent diameter
    #[command(alias = "v")]
    Speed {
        /// Impact speed (km/s), must be below 299792.458
        #[arg(allow_negative_numbers = true)]
        speed_km_s: f64,
        /// Bulk density (kg/m^3)
        #[arg(long, default_value_t = DEFAULT_DENSITY_KG_M3, allow_negative_numbers = true)]
        density: f64,
        /// Coupling efficiency (fraction of kinetic energy that unbinds the target)
        #[arg(long, default_value_t = DEFAULT_EFFICIENCY, allow_negative_numbers = true)]
        efficiency: f64,
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Optional object identifier (e.g. "1036 Ganymed")
    #[arg(long)]
    name: Option<String>,
    /// Target body: earth, mars, venus, jupiter, saturn, uranus, neptune, pluto, moon, vacuum
    #[arg(long)]
    body: Option<String>,
    /// Impactor material: stony, iron, cometary
    #[arg(long)]
    material: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let (mode, target) = match cli.mode {
        Mode::Mass {
            mass_kg,
            efficiency,
            target,
        } => (
            SolveMode::ByMass {
                mass_kg,
                efficiency,
            },
            target,
        ),
        Mode::Diameter {
            diameter_km,
            density,
            efficiency,
            target,
        } => (
            SolveMode::ByDiameter {
                diameter_km,
                density_kg_m3: density,
                efficiency,
            },
            target,
        ),
        Mode::Speed {
            speed_km_s,
            density,
            efficiency,
            target,
        } => (
            SolveMode::BySpeed {
                speed_km_s,
                density_kg_m3: density,
                efficiency,
            },
            target,
        ),
    };

    let request = SolveRequest {
        body: CelestialBody::resolve(target.body.as_deref()),
        material: ImpactorMaterial::resolve(target.material.as_deref()),
        label: target.name,
        mode,
    };

    let result = match solve(&request) {
        Ok(result) => result,
        Err(SolveError::Validation(err)) => {
            Cli::command()
                .error(ErrorKind::ValueValidation, err.to_string())
                .exit();
        }
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        let mut stdout = std::io::stdout();
        report::write_json(&mut stdout, &ImpactReport::from(&result))?;
    } else {
        print!("{}", text::render(&result)?);
    }

    Ok(())
}
