use std::io::Write;
use std::path::PathBuf;

use unbind_calculator::config::{
    ConfigError, DEFAULT_DENSITY_KG_M3, DEFAULT_EFFICIENCY, DoseConfig, ScenarioModeConfig,
    load_dose_presets, load_scenarios,
};
use unbind_calculator::solver::scenario::from_config;
use unbind_calculator::solver::{CelestialBody, ImpactorMaterial, SolveMode, solve};

fn config_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn reference_manifest_loads() {
    let scenarios =
        load_scenarios(config_path("configs/scenarios/reference.yaml")).expect("manifest parses");
    assert_eq!(scenarios.len(), 11);

    let ganymed = &scenarios[0];
    assert_eq!(ganymed.name.as_deref(), Some("1036 Ganymed"));
    assert_eq!(ganymed.body.as_deref(), Some("earth"));
    assert_eq!(ganymed.material.as_deref(), Some("stony"));
    assert_eq!(
        ganymed.mode,
        ScenarioModeConfig::Mass {
            mass_kg: 1.2e17,
            efficiency: 0.25,
        }
    );

    let speed = scenarios
        .iter()
        .find(|s| matches!(s.mode, ScenarioModeConfig::Speed { .. }))
        .expect("manifest has a speed scenario");
    assert_eq!(speed.body.as_deref(), Some("pluto"));
}

#[test]
fn every_reference_scenario_solves() {
    let scenarios =
        load_scenarios(config_path("configs/scenarios/reference.yaml")).expect("manifest parses");
    for scenario in &scenarios {
        let request = from_config(scenario);
        let result = solve(&request).expect("reference scenarios are valid");
        assert_eq!(result.label, scenario.name);
        assert!(result.relativistic_speed_km_s > 0.0);
    }
}

#[test]
fn toml_directory_is_read_in_file_name_order() {
    let scenarios =
        load_scenarios(config_path("configs/scenarios/toml")).expect("directory parses");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].body.as_deref(), Some("pluto"));
    assert_eq!(scenarios[1].body.as_deref(), Some("earth"));

    match scenarios[1].mode {
        ScenarioModeConfig::Speed {
            speed_km_s,
            density_kg_m3,
            efficiency,
        } => {
            assert_eq!(speed_km_s, 100_000.0);
            assert_eq!(density_kg_m3, DEFAULT_DENSITY_KG_M3);
            assert_eq!(efficiency, 0.25);
        }
        ref other => panic!("expected speed mode, got {other:?}"),
    }
}

#[test]
fn single_toml_file_yields_one_record() {
    let scenarios = load_scenarios(config_path("configs/scenarios/toml/01_pluto_iron.toml"))
        .expect("file parses");
    assert_eq!(scenarios.len(), 1);
    let request = from_config(&scenarios[0]);
    assert_eq!(request.body, CelestialBody::Pluto);
    assert_eq!(request.material, ImpactorMaterial::Metallic);
    assert_eq!(
        request.mode,
        SolveMode::ByDiameter {
            diameter_km: 1.0,
            density_kg_m3: 7800.0,
            efficiency: 0.25,
        }
    );
}

#[test]
fn omitted_fields_take_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    writeln!(
        file,
        "- mode: diameter\n  diameter_km: 0.5\n- mode: mass\n  mass_kg: 1.0e12\n  body: ceres\n  material: adamantium"
    )
    .expect("write manifest");

    let scenarios = load_scenarios(file.path()).expect("manifest parses");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(
        scenarios[0].mode,
        ScenarioModeConfig::Diameter {
            diameter_km: 0.5,
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
            efficiency: DEFAULT_EFFICIENCY,
        }
    );
    assert!(scenarios[0].name.is_none());

    let request = from_config(&scenarios[1]);
    assert_eq!(request.body, CelestialBody::Earth);
    assert_eq!(request.material, ImpactorMaterial::Rocky);
}

#[test]
fn unknown_mode_is_a_parse_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    writeln!(file, "- mode: volume\n  volume_km3: 1.0").expect("write manifest");

    let err = load_scenarios(file.path()).expect_err("unknown mode");
    assert!(matches!(err, ConfigError::Parse(_)), "unexpected error {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_scenarios(config_path("configs/scenarios/missing.yaml"))
        .expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Io(_)), "unexpected error {err:?}");
}

#[test]
fn dose_presets_fill_in_defaults() {
    let presets =
        load_dose_presets(config_path("configs/dose/presets.yaml")).expect("presets parse");
    assert_eq!(presets.len(), 3);

    let defaults = DoseConfig::default();
    assert_eq!(
        presets[0],
        DoseConfig {
            name: Some("Earth unbinding seen from the Moon".to_string()),
            ..defaults.clone()
        }
    );

    assert_eq!(presets[1].energy_j, 1.0e33);
    assert_eq!(presets[1].radiation_fraction, 0.01);
    assert_eq!(presets[1].glancing_angle_deg, 60.0);
    assert_eq!(presets[1].distance_m, defaults.distance_m);

    assert_eq!(presets[2].atmospheric_transmission, 0.1);
    assert_eq!(presets[2].exposed_mass_kg, 70.0);
}
