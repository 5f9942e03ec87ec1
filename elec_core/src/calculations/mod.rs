//! # Safety Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//! - `calculate_with(input, settings)` - Same, with explicit [`DesignSettings`]
//!
//! Every function is a pure, synchronous computation: identical inputs give
//! identical outputs and calls may run in parallel freely.
//!
//! ## Available Calculations
//!
//! - [`electrode`] - Earth electrode geometry and resistance
//! - [`touch_step`] - Touch and step voltage evaluation (BS EN 50522 / IEC 60479-1)
//! - [`emergency_lighting`] - Emergency lighting design (BS 5266-1)

pub mod electrode;
pub mod emergency_lighting;
pub mod touch_step;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

// Re-export commonly used types
pub use electrode::{electrode_resistance, ElectrodeDimensions, ElectrodeGeometry, ElectrodeType};
pub use emergency_lighting::{ComplianceStatus, EmergencyLightingInput, EmergencyLightingResult};
pub use touch_step::{ContactScenario, PassOrFail, PhysiologicalZone, TouchStepInput, TouchStepResult};

/// Enum wrapper for all calculation types.
///
/// Lets a single JSON document carry a mix of calculations, tagged by
/// `"type"`:
///
/// ```json
/// { "type": "TouchStep", "earthFaultCurrent": 10, ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Touch and step voltage check
    TouchStep(TouchStepInput),
    /// Emergency lighting design
    EmergencyLighting(EmergencyLightingInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::TouchStep(t) => &t.label,
            CalculationItem::EmergencyLighting(e) => &e.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::TouchStep(_) => "TouchStep",
            CalculationItem::EmergencyLighting(_) => "EmergencyLighting",
        }
    }

    /// Run this calculation.
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<CalculationOutput> {
        run(self, settings)
    }
}

/// Result of a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    TouchStep(TouchStepResult),
    EmergencyLighting(EmergencyLightingResult),
}

impl CalculationOutput {
    /// Whether the verdict is acceptable (pass, compliant or warning)
    pub fn passes(&self) -> bool {
        match self {
            CalculationOutput::TouchStep(r) => r.passes(),
            CalculationOutput::EmergencyLighting(r) => r.passes(),
        }
    }

    /// Short verdict string as it appears in the JSON output
    pub fn verdict(&self) -> &'static str {
        match self {
            CalculationOutput::TouchStep(r) => match r.pass_or_fail {
                PassOrFail::Pass => "pass",
                PassOrFail::Fail => "fail",
            },
            CalculationOutput::EmergencyLighting(r) => r.compliance_status.key(),
        }
    }
}

/// Dispatch a calculation item to its calculator.
pub fn run(item: &CalculationItem, settings: &DesignSettings) -> CalcResult<CalculationOutput> {
    match item {
        CalculationItem::TouchStep(input) => {
            touch_step::calculate_with(input, settings).map(CalculationOutput::TouchStep)
        }
        CalculationItem::EmergencyLighting(input) => {
            emergency_lighting::calculate_with(input, settings).map(CalculationOutput::EmergencyLighting)
        }
    }
}

/// Parse a JSON document holding either one calculation item or an array of them.
pub fn parse_items(json: &str) -> CalcResult<Vec<CalculationItem>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(CalcError::serialization(format!(
            "Expected a calculation object or an array of them, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOUCH_STEP: &str = r#"{
        "type": "TouchStep",
        "label": "Rod A",
        "earthFaultCurrent": 10,
        "soilResistivity": "loam",
        "electrodeType": "rod",
        "faultDuration": 0.3,
        "contactScenario": "touch"
    }"#;

    #[test]
    fn test_parse_single_item() {
        let items = parse_items(TOUCH_STEP).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label(), "Rod A");
        assert_eq!(items[0].calc_type(), "TouchStep");
    }

    #[test]
    fn test_parse_array_and_run() {
        let json = format!(
            r#"[{}, {{
                "type": "EmergencyLighting",
                "label": "Office",
                "floorArea": 400,
                "ceilingHeight": 3,
                "occupancyType": "office",
                "emergencyDuration": 3,
                "fixtureType": "led-standard",
                "exitRoutes": 2
            }}]"#,
            TOUCH_STEP
        );
        let items = parse_items(&json).unwrap();
        assert_eq!(items.len(), 2);

        let settings = DesignSettings::default();
        let outputs: Vec<_> = items.iter().map(|i| i.run(&settings).unwrap()).collect();
        assert_eq!(outputs[0].verdict(), "pass");
        assert_eq!(outputs[1].verdict(), "compliant");
        assert!(outputs.iter().all(CalculationOutput::passes));

        let out = serde_json::to_string(&outputs[1]).unwrap();
        assert!(out.starts_with(r#"{"type":"EmergencyLighting""#));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let json = r#"{"type": "TouchStep", "earthFaultCurrent": 10}"#;
        let err = parse_items(json).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_unknown_occupancy_is_rejected() {
        let json = r#"{
            "type": "EmergencyLighting",
            "floorArea": 400,
            "ceilingHeight": 3,
            "occupancyType": "cinema",
            "emergencyDuration": 3,
            "fixtureType": "led-standard",
            "exitRoutes": 2
        }"#;
        let err = parse_items(json).unwrap_err();
        assert!(err.to_string().contains("occupancyType"));
    }

    #[test]
    fn test_scalar_document_rejected() {
        let err = parse_items("42").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
