use unbind_calculator::core::{sphere, units};
use unbind_calculator::relativity::relativistic_energy_per_mass;
use unbind_calculator::solver::{
    COUPLING_PASSES, CelestialBody, ImpactorMaterial, SpeedCoupling, solve_by_speed,
};

fn pluto_stony_at(speed_km_s: f64) -> SpeedCoupling {
    SpeedCoupling {
        binding_energy_j: CelestialBody::Pluto.binding_energy_joules(),
        energy_per_mass: relativistic_energy_per_mass(units::kms_to_ms(speed_km_s))
            .expect("subluminal"),
        density_kg_m3: 2000.0,
        efficiency: 0.25,
        body: CelestialBody::Pluto,
        material: ImpactorMaterial::Rocky,
    }
}

#[test]
fn first_pass_ignores_the_atmosphere() {
    let coupling = pluto_stony_at(30_000.0);
    let first = coupling.step(None);
    assert_eq!(first.retention, 1.0);
    assert_eq!(first.effective_efficiency, 0.25);
    assert!(
        ((first.mass_kg - 2.514291e13) / 2.514291e13).abs() < 1.0e-6,
        "m0 = {:e}",
        first.mass_kg
    );
    assert!((first.diameter_km - 2.8849).abs() < 1.0e-3);
}

#[test]
fn passes_settle_after_the_first_retention_lookup() {
    let passes = pluto_stony_at(30_000.0).passes();
    assert_eq!(passes.len(), COUPLING_PASSES);

    assert_eq!(passes[0].retention, 1.0);
    assert_eq!(passes[1].retention, 0.98);
    assert_eq!(passes[2].retention, 0.98);
    assert!(passes[1].mass_kg > passes[0].mass_kg);
    assert_eq!(passes[1], passes[2]);
    assert!((passes[2].diameter_km - 2.90438).abs() < 1.0e-4);
}

#[test]
fn step_uses_retention_at_previous_diameter() {
    let coupling = pluto_stony_at(30_000.0);
    // Below 5 m, Pluto's haze keeps 92% of a stony impactor's energy.
    let pass = coupling.step(Some(0.004));
    assert_eq!(pass.retention, 0.92);
    assert!((pass.effective_efficiency - 0.23).abs() < 1.0e-12);

    let expected_mass = coupling.binding_energy_j / (0.23 * coupling.energy_per_mass);
    assert!(((pass.mass_kg - expected_mass) / expected_mass).abs() < 1.0e-12);
    let expected_diameter = units::m_to_km(sphere::diameter(expected_mass, 2000.0));
    assert!(((pass.diameter_km - expected_diameter) / expected_diameter).abs() < 1.0e-12);
}

#[test]
fn solve_returns_final_pass() {
    let coupling = pluto_stony_at(30_000.0);
    let last = coupling.passes()[COUPLING_PASSES - 1];
    assert_eq!(coupling.solve(), last);

    let result = solve_by_speed(30_000.0, 2000.0, 0.25, CelestialBody::Pluto, ImpactorMaterial::Rocky)
        .expect("valid request");
    assert_eq!(result.mass_kg, last.mass_kg);
    assert_eq!(result.diameter_km, last.diameter_km);
    assert_eq!(result.retention, last.retention);
}

#[test]
fn vacuum_needs_no_iteration() {
    let coupling = SpeedCoupling {
        binding_energy_j: CelestialBody::Vacuum.binding_energy_joules(),
        energy_per_mass: relativistic_energy_per_mass(1.0e7).expect("subluminal"),
        density_kg_m3: 3000.0,
        efficiency: 1.0,
        body: CelestialBody::Vacuum,
        material: ImpactorMaterial::Icy,
    };
    let passes = coupling.passes();
    assert!(passes.iter().all(|pass| pass.retention == 1.0));
    assert_eq!(passes[0], passes[COUPLING_PASSES - 1]);
}

#[test]
fn slow_comet_settles_on_top_band() {
    let result = solve_by_speed(10.0, 3000.0, 1.0, CelestialBody::Earth, ImpactorMaterial::Icy)
        .expect("valid request");
    assert_eq!(result.retention, 0.80);
    assert!(((result.mass_kg - 6.225e24) / 6.225e24).abs() < 1.0e-6, "m = {:e}", result.mass_kg);
    assert!((result.diameter_km - 15_824.86).abs() < 0.01, "D = {}", result.diameter_km);
}

#[test]
fn zero_retention_pass_recovers_on_the_next() {
    // About 7 km at first: inside Jupiter's opaque band for non-metallic bodies.
    let coupling = SpeedCoupling {
        binding_energy_j: CelestialBody::Jupiter.binding_energy_joules(),
        energy_per_mass: relativistic_energy_per_mass(units::kms_to_ms(299_792.4579))
            .expect("subluminal"),
        density_kg_m3: 3000.0,
        efficiency: 1.0,
        body: CelestialBody::Jupiter,
        material: ImpactorMaterial::Rocky,
    };
    let passes = coupling.passes();

    assert_eq!(passes[0].retention, 1.0);
    assert!((passes[0].diameter_km - 7.2234).abs() < 1.0e-3, "D0 = {}", passes[0].diameter_km);

    assert_eq!(passes[1].retention, 0.0);
    assert_eq!(passes[1].effective_efficiency, 0.0);
    assert!(passes[1].mass_kg.is_infinite());
    assert!(passes[1].diameter_km.is_infinite());

    let last = passes[2];
    assert_eq!(last.retention, 0.10);
    assert!(last.mass_kg.is_finite());
    assert!(((last.mass_kg - 5.920273e15) / 5.920273e15).abs() < 1.0e-5, "m = {:e}", last.mass_kg);
    assert!((last.diameter_km - 15.5623).abs() < 1.0e-3, "D = {}", last.diameter_km);
}
