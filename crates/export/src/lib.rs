//! Export helpers for JSON reports and CSV tables.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::Write;

    use serde::{Serialize, Serializer};
    use unbind_dose::DoseReport;
    use unbind_solver::SolveResult;

    use super::ExportError;

    /// Serializable view of a solver result, including scale comparisons.
    ///
    /// Non-finite quantities (a fully ablated impactor needs infinite energy) are written
    /// as the strings `"inf"`, `"-inf"`, or `"NaN"`, matching the CSV table; `null` only
    /// ever means "not applicable".
    #[derive(Debug, Clone, Serialize)]
    pub struct ImpactReport {
        pub label: Option<String>,
        pub mode: &'static str,
        pub body: &'static str,
        pub material: &'static str,
        pub binding_energy_j: f64,
        #[serde(serialize_with = "number")]
        pub required_energy_j: f64,
        pub efficiency: f64,
        pub retention: f64,
        pub effective_efficiency: f64,
        pub density_kg_m3: f64,
        #[serde(serialize_with = "number")]
        pub mass_kg: f64,
        #[serde(serialize_with = "number")]
        pub mercury_masses: f64,
        #[serde(serialize_with = "number")]
        pub ceres_masses: f64,
        #[serde(serialize_with = "number")]
        pub diameter_km: f64,
        #[serde(serialize_with = "number")]
        pub classical_speed_km_s: f64,
        #[serde(serialize_with = "number")]
        pub relativistic_speed_km_s: f64,
        #[serde(serialize_with = "number")]
        pub fraction_of_light: f64,
        #[serde(serialize_with = "optional_number")]
        pub classical_mass_kg: Option<f64>,
        pub destructive: bool,
    }

    impl From<&SolveResult> for ImpactReport {
        fn from(result: &SolveResult) -> Self {
            Self {
                label: result.label.clone(),
                mode: result.kind.name(),
                body: result.body.name(),
                material: result.material.name(),
                binding_energy_j: result.binding_energy_j,
                required_energy_j: result.required_energy_j(),
                efficiency: result.efficiency,
                retention: result.retention,
                effective_efficiency: result.effective_efficiency,
                density_kg_m3: result.density_kg_m3,
                mass_kg: result.mass_kg,
                mercury_masses: result.mercury_masses(),
                ceres_masses: result.ceres_masses(),
                diameter_km: result.diameter_km,
                classical_speed_km_s: result.classical_speed_km_s,
                relativistic_speed_km_s: result.relativistic_speed_km_s,
                fraction_of_light: result.beta(),
                classical_mass_kg: result.classical_mass_kg,
                destructive: result.destructive,
            }
        }
    }

    fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    fn optional_number<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => number(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Serializable view of a dose estimate.
    #[derive(Debug, Clone, Serialize)]
    pub struct DoseSummary {
        pub label: Option<String>,
        pub fluence_j_m2: f64,
        pub attenuated_fluence_j_m2: f64,
        pub upper_dose_gy: f64,
        pub lower_dose_gy: f64,
        pub upper_lethal: bool,
        pub lower_lethal: bool,
    }

    impl DoseSummary {
        pub fn new(label: Option<String>, report: &DoseReport) -> Self {
            Self {
                label,
                fluence_j_m2: report.fluence_j_m2,
                attenuated_fluence_j_m2: report.attenuated_fluence_j_m2,
                upper_dose_gy: report.upper_dose_gy,
                lower_dose_gy: report.lower_dose_gy,
                upper_lethal: report.upper_is_lethal(),
                lower_lethal: report.lower_is_lethal(),
            }
        }
    }

    /// Write any serializable report as pretty JSON followed by a newline.
    pub fn write_json<T: Serialize + ?Sized>(
        writer: &mut dyn Write,
        value: &T,
    ) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub mod table {
    use std::io::Write;

    use super::ExportError;
    use super::report::ImpactReport;

    /// Write one CSV row per report under a header derived from the report fields.
    pub fn write_csv<W: Write>(writer: W, reports: &[ImpactReport]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for report in reports {
            csv.serialize(report)?;
        }
        csv.flush()?;
        Ok(())
    }
}
