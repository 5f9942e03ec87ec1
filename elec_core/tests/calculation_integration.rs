//! Integration tests across the public calculation API
//!
//! Covers:
//! - Reference values from hand calculation
//! - Mixed JSON batches through `parse_items` and `run`
//! - Design settings overrides
//! - Error reporting for bad input

mod common;

use elec_core::calculations::emergency_lighting::{self, ComplianceStatus};
use elec_core::calculations::touch_step::{self, ContactScenario, PassOrFail, PhysiologicalZone};
use elec_core::calculations::{parse_items, CalculationOutput};
use elec_core::equations::{permissible_step_voltage, permissible_touch_voltage};
use elec_core::profiles::CableSize;
use elec_core::{run, CalcError, DesignSettings};

use common::{open_plan_office, rod_in_loam, MIXED_BATCH};

#[test]
fn test_rod_reference_resistance() {
    let result = touch_step::calculate(&rod_in_loam()).unwrap();
    let hand = (80.0 / (2.0 * std::f64::consts::PI * 2.4)) * (4.0 * 2.4 / 0.016_f64).ln();
    assert!((result.electrode_resistance - hand).abs() < 0.1);
    assert!((result.electrode_resistance - 33.94).abs() < 0.1);
}

#[test]
fn test_permissible_limits_table() {
    for (t, limit) in [(0.05, 750.0), (0.15, 500.0), (0.3, 250.0), (0.8, 120.0), (2.0, 50.0)] {
        assert_eq!(permissible_touch_voltage(t), limit, "duration {}", t);
        assert_eq!(permissible_step_voltage(t), 2.0 * limit);
    }
}

#[test]
fn test_mixed_batch() {
    let items = parse_items(MIXED_BATCH).unwrap();
    assert_eq!(items.len(), 3);

    let settings = DesignSettings::default();
    let outputs: Vec<CalculationOutput> = items.iter().map(|i| run(i, &settings).unwrap()).collect();

    match &outputs[0] {
        CalculationOutput::TouchStep(r) => {
            assert_eq!(r.pass_or_fail, PassOrFail::Pass);
            // Step scenario: 67.87 V / 1000 Ω
            assert!((r.body_current - 67.87).abs() < 0.01);
            assert_eq!(r.physiological_zone, PhysiologicalZone::Zone3);
        }
        other => panic!("expected touch/step output, got {:?}", other),
    }

    match &outputs[1] {
        CalculationOutput::TouchStep(r) => {
            // R = 1000 / (4·√(0.5/π)) = 626.657 Ω
            assert!((r.electrode_resistance - 626.657).abs() < 0.001);
            assert_eq!(r.permissible_touch_voltage, 50.0);
            assert_eq!(r.pass_or_fail, PassOrFail::Fail);
            assert_eq!(r.physiological_zone, PhysiologicalZone::Zone4);
        }
        other => panic!("expected touch/step output, got {:?}", other),
    }

    match &outputs[2] {
        CalculationOutput::EmergencyLighting(r) => {
            // 30 route + 8 stair, 8 open, 8 anti-panic, 16 high-risk
            assert_eq!(r.escape_route_luminaires, 38);
            assert_eq!(r.open_area_luminaires, 8);
            assert_eq!(r.anti_panic_luminaires, 8);
            assert_eq!(r.high_risk_luminaires, 16);
            assert_eq!(r.total_power, 350.0);
            assert_eq!(r.battery_capacity, 132.0);
            assert_eq!(r.circuit_current, 29.17);
            assert_eq!(r.cable_size, CableSize::Mm6_0OrSplit);
            assert_eq!(r.illuminance_achieved, 35.0);
            assert_eq!(r.compliance_status, ComplianceStatus::Compliant);
            assert!(r.recommendations.iter().any(|n| n.contains("split the load")));
            assert!(r.regulatory_notes.iter().any(|n| n.starts_with("HTM 06-01")));
            assert!(r.installation_notes.iter().any(|n| n.contains("4 staircase flights")));
            assert!(r.installation_notes.iter().any(|n| n.contains("open areas")));
        }
        other => panic!("expected emergency lighting output, got {:?}", other),
    }

    assert!(outputs[0].passes());
    assert!(!outputs[1].passes());
    assert!(outputs[2].passes());
}

#[test]
fn test_settings_override_changes_sizing() {
    let settings = DesignSettings {
        battery_voltage: 24.0,
        battery_cost_per_ah: 10.0,
        ..DesignSettings::default()
    };
    let default = emergency_lighting::calculate(&open_plan_office()).unwrap();
    let overridden = emergency_lighting::calculate_with(&open_plan_office(), &settings).unwrap();

    assert_eq!(default.battery_capacity, 30.0);
    // 99·3/24·1.2 = 14.85 -> 15
    assert_eq!(overridden.battery_capacity, 15.0);
    assert_eq!(overridden.circuit_current, 4.13);
    assert_eq!(overridden.cable_size, CableSize::Mm1_0);
    assert!(overridden.estimated_cost < default.estimated_cost);
}

#[test]
fn test_invalid_settings_rejected() {
    let settings = DesignSettings {
        default_body_impedance_ohms: -1.0,
        ..DesignSettings::default()
    };
    let err = touch_step::calculate_with(&rod_in_loam(), &settings).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_unknown_soil_preset_names_field() {
    let json = r#"{
        "type": "TouchStep",
        "earthFaultCurrent": 10,
        "soilResistivity": "peat",
        "electrodeType": "rod",
        "faultDuration": 0.3,
        "contactScenario": "touch"
    }"#;
    let err = parse_items(json).unwrap_err();
    assert!(err.to_string().contains("soilResistivity"), "{}", err);
}

#[test]
fn test_zero_dimension_is_validation_error() {
    let json = r#"{
        "type": "TouchStep",
        "earthFaultCurrent": 10,
        "soilResistivity": 100,
        "electrodeType": "rod",
        "electrodeDimensions": { "diameter": 0 },
        "faultDuration": 0.3,
        "contactScenario": "touch"
    }"#;
    let items = parse_items(json).unwrap();
    let err = run(&items[0], &DesignSettings::default()).unwrap_err();
    match err {
        CalcError::Validation { field, .. } => assert_eq!(field, "electrodeDimensions.diameter"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_error_serializes_for_callers() {
    let mut input = rod_in_loam();
    input.earth_fault_current = 0.0;
    let err = touch_step::calculate(&input).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "Validation");
    assert_eq!(json["details"]["field"], "earthFaultCurrent");
}

#[test]
fn test_determinism_byte_identical() {
    let a = serde_json::to_string(&touch_step::calculate(&rod_in_loam()).unwrap()).unwrap();
    let b = serde_json::to_string(&touch_step::calculate(&rod_in_loam()).unwrap()).unwrap();
    assert_eq!(a, b);

    let a = serde_json::to_string(&emergency_lighting::calculate(&open_plan_office()).unwrap()).unwrap();
    let b = serde_json::to_string(&emergency_lighting::calculate(&open_plan_office()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_scenario_flip_keeps_verdict() {
    let mut input = rod_in_loam();
    input.fault_duration = 1.5;
    let touch = touch_step::calculate(&input).unwrap();
    input.contact_scenario = ContactScenario::Step;
    let step = touch_step::calculate(&input).unwrap();
    assert_eq!(touch.pass_or_fail, PassOrFail::Fail);
    assert_eq!(step.pass_or_fail, PassOrFail::Fail);
}
