//! Plain-text rendering of solver results.

use std::fmt::{self, Write};

use unbind_calculator::solver::{SolveKind, SolveResult};

/// Multi-line report in the calculator's traditional layout.
pub fn render(result: &SolveResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let target = result.body.name();

    if let Some(label) = &result.label {
        writeln!(out, "OBJECT : {label}")?;
    }
    writeln!(out, "PLANET : {target} (U = {:.6e} J)", result.binding_energy_j)?;
    writeln!(
        out,
        "MATERIAL: {} (retention = {:.3})",
        result.material.name(),
        result.retention
    )?;

    match result.kind {
        SolveKind::Mass => {
            writeln!(
                out,
                "INPUT  : m = {:.6e} kg, epsilon = {:.3}",
                result.mass_kg, result.efficiency
            )?;
        }
        SolveKind::Diameter => {
            writeln!(
                out,
                "INPUT  : D = {:.3} km, rho = {:.0} kg/m^3, epsilon = {:.3}",
                result.diameter_km, result.density_kg_m3, result.efficiency
            )?;
        }
        SolveKind::Speed => {
            writeln!(
                out,
                "INPUT  : v = {:.3} km/s, rho = {:.0} kg/m^3, epsilon = {:.3}",
                result.relativistic_speed_km_s, result.density_kg_m3, result.efficiency
            )?;
        }
    }
    writeln!(
        out,
        "TARGET : U/epsilon_eff = {:.6e} J (eff. epsilon = {:.3})",
        result.required_energy_j(),
        result.effective_efficiency
    )?;

    match result.kind {
        SolveKind::Mass | SolveKind::Diameter => render_required_speed(&mut out, result)?,
        SolveKind::Speed => render_required_size(&mut out, result)?,
    }
    Ok(out)
}

fn render_required_speed(out: &mut String, result: &SolveResult) -> fmt::Result {
    let target = result.body.name().to_uppercase();
    if result.kind == SolveKind::Diameter {
        writeln!(
            out,
            "RESULT : Mass = {:.6e} kg ({:.3} Mercury, {:.3} Ceres)",
            result.mass_kg,
            result.mercury_masses(),
            result.ceres_masses()
        )?;
        writeln!(
            out,
            "         Required speed (classical)    = {:.3} km/s",
            result.classical_speed_km_s
        )?;
    } else {
        writeln!(
            out,
            "RESULT : Required speed (classical)    = {:.3} km/s",
            result.classical_speed_km_s
        )?;
    }
    writeln!(
        out,
        "         Required speed (relativistic) = {:.3} km/s",
        result.relativistic_speed_km_s
    )?;
    if result.destructive {
        writeln!(
            out,
            "         CONCLUSION: {target} DESTROYED at {:.3} km/s impact",
            result.relativistic_speed_km_s
        )?;
    } else {
        writeln!(out, "         NOTE: v_rel ~ c (ultra-relativistic).")?;
        writeln!(
            out,
            "         CONCLUSION: {target} SURVIVES - object too small to unbind planet"
        )?;
    }
    Ok(())
}

fn render_required_size(out: &mut String, result: &SolveResult) -> fmt::Result {
    writeln!(
        out,
        "RESULT : Minimum required mass (relativistic)   = {:.6e} kg ({:.3} Mercury, {:.3} Ceres)",
        result.mass_kg,
        result.mercury_masses(),
        result.ceres_masses()
    )?;
    if let Some(classical_mass_kg) = result.classical_mass_kg {
        writeln!(
            out,
            "         Classical mass (for reference)         = {classical_mass_kg:.6e} kg"
        )?;
    }
    writeln!(
        out,
        "         Minimum equivalent diameter            = {:.3} km",
        result.diameter_km
    )?;
    writeln!(
        out,
        "         NOTE: Any impactor >= {:.3} km at {:.3} km/s will unbind {}",
        result.diameter_km,
        result.relativistic_speed_km_s,
        result.body.name()
    )?;
    Ok(())
}
