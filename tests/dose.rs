use unbind_calculator::config::DoseConfig;
use unbind_calculator::dose::{DoseError, DoseRequest, LETHAL_DOSE_GY, compute};

fn rel_close(actual: f64, expected: f64, tol: f64) -> bool {
    ((actual - expected) / expected).abs() < tol
}

#[test]
fn earth_unbinding_is_lethal_on_the_moon() {
    let report = compute(&DoseRequest::default()).expect("defaults are valid");

    assert!(rel_close(report.fluence_j_m2, 4.022_943_931_758e11, 1.0e-9));
    assert_eq!(report.attenuated_fluence_j_m2, report.fluence_j_m2);
    assert!(rel_close(report.upper_dose_gy, 4.022_943_931_758e9, 1.0e-9));
    assert!(rel_close(report.lower_dose_gy, 1.041_214_506_919e9, 1.0e-9));
    assert!(report.upper_is_lethal());
    assert!(report.lower_is_lethal());
}

#[test]
fn distant_release_is_survivable() {
    let request = DoseRequest {
        distance_m: 1.0e13,
        ..DoseRequest::default()
    };
    let report = compute(&request).expect("valid request");

    assert!(rel_close(report.upper_dose_gy, 5.944_437_124, 1.0e-9));
    assert!(rel_close(report.lower_dose_gy, 1.538_533_540, 1.0e-9));
    assert!(report.upper_dose_gy < LETHAL_DOSE_GY);
    assert!(!report.upper_is_lethal());
    assert!(!report.lower_is_lethal());
}

#[test]
fn transmission_scales_dose_linearly() {
    let open = compute(&DoseRequest::default()).expect("valid request");
    let shielded = compute(&DoseRequest {
        atmospheric_transmission: 0.1,
        ..DoseRequest::default()
    })
    .expect("valid request");

    assert_eq!(shielded.fluence_j_m2, open.fluence_j_m2);
    assert!(rel_close(shielded.upper_dose_gy, 0.1 * open.upper_dose_gy, 1.0e-12));
    assert!(rel_close(shielded.lower_dose_gy, 0.1 * open.lower_dose_gy, 1.0e-12));
}

#[test]
fn dose_falls_off_with_inverse_square() {
    let near = compute(&DoseRequest::default()).expect("valid request");
    let far = compute(&DoseRequest {
        distance_m: 2.0 * 3.844e8,
        ..DoseRequest::default()
    })
    .expect("valid request");
    assert!(rel_close(near.upper_dose_gy / far.upper_dose_gy, 4.0, 1.0e-12));
}

#[test]
fn request_mirrors_config() {
    let config = DoseConfig {
        energy_j: 1.0e33,
        radiation_fraction: 0.01,
        glancing_angle_deg: 60.0,
        ..DoseConfig::default()
    };
    let report = compute(&DoseRequest::from_config(&config)).expect("valid request");
    assert!(rel_close(report.lower_dose_gy, 2.692_733_555_394e10, 1.0e-9));
    assert!(rel_close(report.lower_dose_gy, 0.5 * report.upper_dose_gy, 1.0e-12));
}

#[test]
fn zero_energy_gives_zero_dose() {
    let report = compute(&DoseRequest {
        energy_j: 0.0,
        ..DoseRequest::default()
    })
    .expect("zero energy is allowed");
    assert_eq!(report.upper_dose_gy, 0.0);
    assert_eq!(report.lower_dose_gy, 0.0);
}

#[test]
fn rejects_out_of_range_inputs() {
    let defaults = DoseRequest::default();
    let cases = [
        (
            DoseRequest {
                energy_j: -1.0,
                ..defaults.clone()
            },
            DoseError::Negative {
                field: "energy_j",
                value: -1.0,
            },
        ),
        (
            DoseRequest {
                distance_m: 0.0,
                ..defaults.clone()
            },
            DoseError::NonPositive {
                field: "distance_m",
                value: 0.0,
            },
        ),
        (
            DoseRequest {
                exposed_mass_kg: -70.0,
                ..defaults.clone()
            },
            DoseError::NonPositive {
                field: "exposed_mass_kg",
                value: -70.0,
            },
        ),
        (
            DoseRequest {
                radiation_fraction: 1.5,
                ..defaults.clone()
            },
            DoseError::NotAFraction {
                field: "radiation_fraction",
                value: 1.5,
            },
        ),
        (
            DoseRequest {
                atmospheric_transmission: -0.1,
                ..defaults.clone()
            },
            DoseError::NotAFraction {
                field: "atmospheric_transmission",
                value: -0.1,
            },
        ),
        (
            DoseRequest {
                glancing_angle_deg: f64::INFINITY,
                ..defaults.clone()
            },
            DoseError::AngleOutOfRange {
                value: f64::INFINITY,
            },
        ),
        (
            DoseRequest {
                glancing_angle_deg: 120.0,
                ..defaults.clone()
            },
            DoseError::AngleOutOfRange { value: 120.0 },
        ),
        (
            DoseRequest {
                glancing_angle_deg: -5.0,
                ..defaults.clone()
            },
            DoseError::AngleOutOfRange { value: -5.0 },
        ),
    ];

    for (request, expected) in cases {
        assert_eq!(compute(&request), Err(expected));
    }
}

#[test]
fn edge_on_exposure_gives_no_lower_dose() {
    let report = compute(&DoseRequest {
        glancing_angle_deg: 90.0,
        ..DoseRequest::default()
    })
    .expect("90 degrees is allowed");
    assert!(report.lower_dose_gy >= 0.0);
    assert!(report.lower_dose_gy < 1.0e-6 * report.upper_dose_gy);
}
