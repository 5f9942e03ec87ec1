//! # Touch and Step Voltage Evaluation
//!
//! Checks an earth electrode against the permissible touch and step
//! voltages for the fault clearance time, per the simplified method of
//! BS EN 50522 Annex E / ENA TS 41-24, and classifies the resulting body
//! current against the IEC 60479-1 zones.
//!
//! ## Method
//!
//! 1. Electrode resistance R from the geometry and soil resistivity
//! 2. EPR = I_F · R
//! 3. U_T = 0.7·EPR, U_S = 0.2·EPR
//! 4. U_Tp from the duration step function, U_Sp = 2·U_Tp
//! 5. Body current for the selected contact scenario, I_B = U/Z_B
//! 6. Zone from I_B
//! 7. Pass only if U_T ≤ U_Tp **and** U_S ≤ U_Sp
//!
//! The verdict checks both voltages whichever contact scenario is
//! selected; the scenario only drives the body current and zone.
//!
//! Reported values are rounded: resistance to 3 dp, EPR and voltages to
//! 2 dp, body current to 2 dp. The verdict and zone use the rounded
//! values so they always agree with what is reported.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::touch_step::{calculate, ContactScenario, PassOrFail, TouchStepInput};
//! use elec_core::calculations::electrode::{ElectrodeDimensions, ElectrodeType};
//! use elec_core::profiles::{SoilResistivity, SoilType};
//!
//! let input = TouchStepInput {
//!     label: "Substation rod".to_string(),
//!     earth_fault_current: 1.5,
//!     soil_resistivity: SoilResistivity::Preset(SoilType::Loam),
//!     electrode_type: ElectrodeType::Rod,
//!     electrode_dimensions: ElectrodeDimensions::default(),
//!     fault_duration: 0.4,
//!     contact_scenario: ContactScenario::Touch,
//!     body_impedance: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.permissible_touch_voltage, 250.0);
//! assert_eq!(result.pass_or_fail, PassOrFail::Pass);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::electrode::{ElectrodeDimensions, ElectrodeGeometry, ElectrodeType};
use crate::equations::earthing::{
    body_current, earth_potential_rise, permissible_step_voltage, permissible_touch_voltage, step_voltage,
    touch_voltage,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::profiles::SoilResistivity;
use crate::settings::DesignSettings;
use crate::units::{round_dp, Amperes, Ohms, Volts};

/// Which prospective voltage the person is exposed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ContactScenario {
    /// Hand to feet
    Touch,
    /// Foot to foot
    Step,
}

impl ContactScenario {
    pub fn key(&self) -> &'static str {
        match self {
            ContactScenario::Touch => "touch",
            ContactScenario::Step => "step",
        }
    }
}

impl FromStr for ContactScenario {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "touch" => Ok(ContactScenario::Touch),
            "step" => Ok(ContactScenario::Step),
            _ => Err(CalcError::unknown_option("contactScenario", s, &["touch", "step"])),
        }
    }
}

impl TryFrom<String> for ContactScenario {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassOrFail {
    Pass,
    Fail,
}

/// IEC 60479-1 a.c. effect zones, classified by body current alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PhysiologicalZone {
    /// Below 0.5 mA
    Zone1,
    /// 0.5 mA to 10 mA
    Zone2,
    /// Above 10 mA up to 100 mA
    Zone3,
    /// Above 100 mA
    Zone4,
}

impl PhysiologicalZone {
    /// Classify a body current in milliamperes
    pub fn from_body_current(ma: f64) -> Self {
        if ma < 0.5 {
            PhysiologicalZone::Zone1
        } else if ma <= 10.0 {
            PhysiologicalZone::Zone2
        } else if ma <= 100.0 {
            PhysiologicalZone::Zone3
        } else {
            PhysiologicalZone::Zone4
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PhysiologicalZone::Zone1 => "Zone 1: No reaction (imperceptible)",
            PhysiologicalZone::Zone2 => "Zone 2: Perception, no harmful effects",
            PhysiologicalZone::Zone3 => "Zone 3: Muscular contraction, reversible effects",
            PhysiologicalZone::Zone4 => "Zone 4: Ventricular fibrillation risk",
        }
    }
}

impl fmt::Display for PhysiologicalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<PhysiologicalZone> for String {
    fn from(zone: PhysiologicalZone) -> Self {
        zone.description().to_string()
    }
}

impl TryFrom<String> for PhysiologicalZone {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        [
            PhysiologicalZone::Zone1,
            PhysiologicalZone::Zone2,
            PhysiologicalZone::Zone3,
            PhysiologicalZone::Zone4,
        ]
        .into_iter()
        .find(|zone| zone.description() == s)
        .ok_or_else(|| format!("Unknown physiological zone: {}", s))
    }
}

/// Input parameters for a touch/step voltage check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pole-mounted transformer",
///   "earthFaultCurrent": 500,
///   "soilResistivity": "clay",
///   "electrodeType": "rod",
///   "electrodeDimensions": { "length": 3.6 },
///   "faultDuration": 0.2,
///   "contactScenario": "touch",
///   "bodyImpedance": 1000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchStepInput {
    /// User label (e.g., "Substation A rod")
    #[serde(default)]
    pub label: String,

    /// Earth fault current I_F (A)
    pub earth_fault_current: f64,

    /// Soil resistivity: measured Ω·m or a preset name
    pub soil_resistivity: SoilResistivity,

    pub electrode_type: ElectrodeType,

    /// Omitted dimensions take the electrode defaults
    #[serde(default)]
    pub electrode_dimensions: ElectrodeDimensions,

    /// Fault clearance time t_F (s)
    pub fault_duration: f64,

    pub contact_scenario: ContactScenario,

    /// Body impedance Z_B (Ω), defaults to 1000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_impedance: Option<f64>,
}

impl TouchStepInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("earthFaultCurrent", self.earth_fault_current, "Earth fault current")?;
        self.soil_resistivity.validate()?;
        require_positive("faultDuration", self.fault_duration, "Fault duration")?;
        if let Some(z) = self.body_impedance {
            require_positive("bodyImpedance", z, "Body impedance")?;
        }
        self.geometry().map(|_| ())
    }

    /// Electrode geometry with defaults applied
    pub fn geometry(&self) -> CalcResult<ElectrodeGeometry> {
        ElectrodeGeometry::resolve(self.electrode_type, &self.electrode_dimensions)
    }
}

/// Results from a touch/step voltage check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "electrodeResistance": 33.937,
///   "earthPotentialRise": 50.91,
///   "touchVoltage": 35.63,
///   "stepVoltage": 10.18,
///   "permissibleTouchVoltage": 250.0,
///   "permissibleStepVoltage": 500.0,
///   "bodyCurrent": 35.63,
///   "physiologicalZone": "Zone 3: Muscular contraction, reversible effects",
///   "passOrFail": "pass"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchStepResult {
    /// Electrode resistance to remote earth (Ω, 3 dp)
    pub electrode_resistance: f64,

    /// Earth potential rise (V, 2 dp)
    pub earth_potential_rise: f64,

    /// Prospective touch voltage (V, 2 dp)
    pub touch_voltage: f64,

    /// Prospective step voltage (V, 2 dp)
    pub step_voltage: f64,

    /// Permissible touch voltage for the fault duration (V)
    pub permissible_touch_voltage: f64,

    /// Permissible step voltage for the fault duration (V)
    pub permissible_step_voltage: f64,

    /// Body current for the selected contact scenario (mA, 2 dp)
    pub body_current: f64,

    pub physiological_zone: PhysiologicalZone,

    pub pass_or_fail: PassOrFail,
}

impl TouchStepResult {
    /// True when both voltages are within their limits
    pub fn passes(&self) -> bool {
        self.pass_or_fail == PassOrFail::Pass
    }

    /// Touch voltage as a fraction of its limit
    pub fn touch_utilisation(&self) -> f64 {
        self.touch_voltage / self.permissible_touch_voltage
    }

    /// Step voltage as a fraction of its limit
    pub fn step_utilisation(&self) -> f64 {
        self.step_voltage / self.permissible_step_voltage
    }

    /// Which check governs ("Touch" or "Step")
    pub fn governing_check(&self) -> &'static str {
        if self.touch_utilisation() >= self.step_utilisation() {
            "Touch"
        } else {
            "Step"
        }
    }
}

/// Evaluate touch and step voltages with the default design settings.
pub fn calculate(input: &TouchStepInput) -> CalcResult<TouchStepResult> {
    calculate_with(input, &DesignSettings::default())
}

/// Evaluate touch and step voltages.
///
/// # Returns
///
/// * `Ok(TouchStepResult)` - Rounded results and verdict
/// * `Err(CalcError)` - If an input is non-positive, or the geometry gives
///   a non-physical resistance (e.g. a rod shorter than a quarter of its
///   diameter)
#[tracing::instrument(skip_all, fields(label = %input.label))]
pub fn calculate_with(input: &TouchStepInput, settings: &DesignSettings) -> CalcResult<TouchStepResult> {
    settings.validate()?;
    input.validate()?;

    let geometry = input.geometry()?;
    let rho = input.soil_resistivity.ohm_metres();
    let resistance = geometry.resistance(rho);
    if !resistance.is_finite() || resistance <= 0.0 {
        return Err(CalcError::calculation_failed(
            "TouchStep",
            format!(
                "{} geometry gives a non-physical resistance ({} Ω)",
                geometry.electrode_type().display_name(),
                resistance
            ),
        ));
    }

    let epr = earth_potential_rise(Amperes(input.earth_fault_current), Ohms(resistance));
    let touch = touch_voltage(epr, settings.touch_voltage_ratio);
    let step = step_voltage(epr, settings.step_voltage_ratio);

    let permissible_touch = permissible_touch_voltage(input.fault_duration);
    let permissible_step = permissible_step_voltage(input.fault_duration);

    let exposed: Volts = match input.contact_scenario {
        ContactScenario::Touch => touch,
        ContactScenario::Step => step,
    };
    let impedance = Ohms(input.body_impedance.unwrap_or(settings.default_body_impedance_ohms));
    let body_ma = round_dp(body_current(exposed, impedance).0, 2);

    let touch_voltage = round_dp(touch.0, 2);
    let step_voltage = round_dp(step.0, 2);
    let pass_or_fail = if touch_voltage <= permissible_touch && step_voltage <= permissible_step {
        PassOrFail::Pass
    } else {
        PassOrFail::Fail
    };

    let result = TouchStepResult {
        electrode_resistance: round_dp(resistance, 3),
        earth_potential_rise: round_dp(epr.0, 2),
        touch_voltage,
        step_voltage,
        permissible_touch_voltage: permissible_touch,
        permissible_step_voltage: permissible_step,
        body_current: body_ma,
        physiological_zone: PhysiologicalZone::from_body_current(body_ma),
        pass_or_fail,
    };

    debug!(
        electrode = geometry.electrode_type().key(),
        rho,
        resistance = result.electrode_resistance,
        epr = result.earth_potential_rise,
        touch = result.touch_voltage,
        step = result.step_voltage,
        body_ma = result.body_current,
        "touch/step evaluated"
    );
    if !result.passes() {
        warn!(
            touch = result.touch_voltage,
            touch_limit = permissible_touch,
            step = result.step_voltage,
            step_limit = permissible_step,
            "touch/step voltage exceeds permissible limit"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::SoilType;

    fn test_input() -> TouchStepInput {
        TouchStepInput {
            label: "Test Rod".to_string(),
            earth_fault_current: 10.0,
            soil_resistivity: SoilResistivity::Preset(SoilType::Loam),
            electrode_type: ElectrodeType::Rod,
            electrode_dimensions: ElectrodeDimensions::default(),
            fault_duration: 0.3,
            contact_scenario: ContactScenario::Touch,
            body_impedance: None,
        }
    }

    #[test]
    fn test_reference_rod_values() {
        let result = calculate(&test_input()).unwrap();

        // R = (80/(2π·2.4))·ln(600) = 33.937 Ω
        assert!((result.electrode_resistance - 33.937).abs() < 0.001);
        // EPR = 10 · 33.937 = 339.37 V
        assert!((result.earth_potential_rise - 339.37).abs() < 0.01);
        assert!((result.touch_voltage - 237.56).abs() < 0.01);
        assert!((result.step_voltage - 67.87).abs() < 0.01);
        assert_eq!(result.permissible_touch_voltage, 250.0);
        assert_eq!(result.permissible_step_voltage, 500.0);
        // 237.56 V / 1000 Ω = 237.56 mA
        assert!((result.body_current - 237.56).abs() < 0.01);
        assert_eq!(result.physiological_zone, PhysiologicalZone::Zone4);
        assert!(result.passes());
    }

    #[test]
    fn test_fails_when_touch_exceeds_limit() {
        let mut input = test_input();
        input.fault_duration = 2.0; // 50 V limit
        let result = calculate(&input).unwrap();
        assert_eq!(result.permissible_touch_voltage, 50.0);
        assert_eq!(result.pass_or_fail, PassOrFail::Fail);
        assert_eq!(result.governing_check(), "Touch");
    }

    #[test]
    fn test_scenario_changes_body_current_not_verdict() {
        let touch = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.contact_scenario = ContactScenario::Step;
        let step = calculate(&input).unwrap();

        assert_eq!(touch.pass_or_fail, step.pass_or_fail);
        assert!((step.body_current - 67.87).abs() < 0.01);
        assert_eq!(step.physiological_zone, PhysiologicalZone::Zone3);
        assert_ne!(touch.body_current, step.body_current);
    }

    #[test]
    fn test_body_impedance_override() {
        let mut input = test_input();
        input.body_impedance = Some(2000.0);
        let result = calculate(&input).unwrap();
        assert!((result.body_current - 118.78).abs() < 0.01);
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(PhysiologicalZone::from_body_current(0.49), PhysiologicalZone::Zone1);
        assert_eq!(PhysiologicalZone::from_body_current(0.5), PhysiologicalZone::Zone2);
        assert_eq!(PhysiologicalZone::from_body_current(10.0), PhysiologicalZone::Zone2);
        assert_eq!(PhysiologicalZone::from_body_current(10.01), PhysiologicalZone::Zone3);
        assert_eq!(PhysiologicalZone::from_body_current(100.0), PhysiologicalZone::Zone3);
        assert_eq!(PhysiologicalZone::from_body_current(100.01), PhysiologicalZone::Zone4);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_input();
        input.earth_fault_current = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("earthFaultCurrent"));

        let mut input = test_input();
        input.fault_duration = -0.1;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("faultDuration"));

        let mut input = test_input();
        input.body_impedance = Some(0.0);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("bodyImpedance"));

        let mut input = test_input();
        input.soil_resistivity = SoilResistivity::Measured(-5.0);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("soilResistivity"));
    }

    #[test]
    fn test_non_physical_geometry() {
        let mut input = test_input();
        // 4L/d = 0.25 -> negative resistance
        input.electrode_dimensions = ElectrodeDimensions {
            length: Some(0.001),
            diameter: Some(0.016),
            ..Default::default()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_json_roundtrip_names() {
        let json = r#"{
            "earthFaultCurrent": 10,
            "soilResistivity": "loam",
            "electrodeType": "rod",
            "faultDuration": 0.3,
            "contactScenario": "touch"
        }"#;
        let input: TouchStepInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.electrode_dimensions, ElectrodeDimensions::default());
        let result = calculate(&input).unwrap();
        let out = serde_json::to_string(&result).unwrap();
        assert!(out.contains("\"passOrFail\":\"pass\""));
        assert!(out.contains("\"physiologicalZone\":\"Zone 4: Ventricular fibrillation risk\""));
        let back: TouchStepResult = serde_json::from_str(&out).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_contact_scenario_json_ignores_case() {
        let touch: ContactScenario = serde_json::from_str("\"Touch\"").unwrap();
        assert_eq!(touch, ContactScenario::Touch);
        let step: ContactScenario = serde_json::from_str("\" STEP \"").unwrap();
        assert_eq!(step, ContactScenario::Step);
        assert_eq!(serde_json::to_string(&step).unwrap(), "\"step\"");

        let err = serde_json::from_str::<ContactScenario>("\"hand\"").unwrap_err();
        assert!(err.to_string().contains("hand"));
    }
}
