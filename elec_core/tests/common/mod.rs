//! Shared fixtures for integration tests

#![allow(dead_code)]

use elec_core::calculations::electrode::{ElectrodeDimensions, ElectrodeType};
use elec_core::calculations::emergency_lighting::EmergencyLightingInput;
use elec_core::calculations::touch_step::{ContactScenario, TouchStepInput};
use elec_core::profiles::{FixtureType, OccupancyType, SoilResistivity, SoilType};

/// 10 A fault on a default rod in loam, 0.3 s clearance
pub fn rod_in_loam() -> TouchStepInput {
    TouchStepInput {
        label: "Rod in loam".to_string(),
        earth_fault_current: 10.0,
        soil_resistivity: SoilResistivity::Preset(SoilType::Loam),
        electrode_type: ElectrodeType::Rod,
        electrode_dimensions: ElectrodeDimensions::default(),
        fault_duration: 0.3,
        contact_scenario: ContactScenario::Touch,
        body_impedance: None,
    }
}

/// 400 m² open-plan office, two exits, standard LED
pub fn open_plan_office() -> EmergencyLightingInput {
    EmergencyLightingInput {
        label: "Open-plan office".to_string(),
        floor_area: 400.0,
        ceiling_height: 3.0,
        occupancy_type: OccupancyType::Office,
        corridor_length: None,
        corridor_width: None,
        staircase_flights: None,
        has_high_risk_tasks: false,
        emergency_duration: 3.0,
        fixture_type: FixtureType::LedStandard,
        exit_routes: 2,
        has_disabled_access: false,
        complex_layout: false,
    }
}

/// Mixed JSON batch as the CLI would read it
pub const MIXED_BATCH: &str = r#"[
  {
    "type": "TouchStep",
    "label": "Substation rod",
    "earthFaultCurrent": 10,
    "soilResistivity": "loam",
    "electrodeType": "rod",
    "faultDuration": 0.3,
    "contactScenario": "step"
  },
  {
    "type": "TouchStep",
    "label": "Plate in rock",
    "earthFaultCurrent": 50,
    "soilResistivity": 1000,
    "electrodeType": "plate",
    "electrodeDimensions": { "area": 0.5 },
    "faultDuration": 2,
    "contactScenario": "touch",
    "bodyImpedance": 1500
  },
  {
    "type": "EmergencyLighting",
    "label": "Ward block",
    "floorArea": 800,
    "ceilingHeight": 2.7,
    "occupancyType": "hospital",
    "corridorLength": 60,
    "corridorWidth": 2.4,
    "staircaseFlights": 4,
    "hasHighRiskTasks": true,
    "emergencyDuration": 3,
    "fixtureType": "led-high",
    "exitRoutes": 3,
    "hasDisabledAccess": true,
    "complexLayout": true
  }
]"#;
