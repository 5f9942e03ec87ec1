//! # Design Settings
//!
//! Constants the calculators use that a firm might reasonably want to
//! override (cost rates, system voltage) collected in one serializable
//! struct. `DesignSettings::default()` holds the reference values; every
//! `calculate()` entry point uses the defaults and the matching
//! `calculate_with()` accepts an explicit settings value.
//!
//! ## TOML Example
//!
//! ```toml
//! battery_voltage = 24.0
//! installation_cost_per_point = 30.0
//! ```
//!
//! Keys left out keep their defaults.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Tunable constants for the earthing and emergency lighting calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Body impedance used when an input omits `bodyImpedance` (Ω)
    pub default_body_impedance_ohms: f64,

    /// Touch voltage as a fraction of EPR (BS EN 50522 Annex E simplified)
    pub touch_voltage_ratio: f64,

    /// Step voltage as a fraction of EPR
    pub step_voltage_ratio: f64,

    /// Emergency lighting battery system voltage (V)
    pub battery_voltage: f64,

    /// Maximum luminaire spacing along an escape route (m)
    pub escape_route_spacing_m: f64,

    /// Battery cost per ampere-hour (£)
    pub battery_cost_per_ah: f64,

    /// Flat installation allowance per luminaire point (£)
    pub installation_cost_per_point: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            default_body_impedance_ohms: 1000.0,
            touch_voltage_ratio: 0.7,
            step_voltage_ratio: 0.2,
            battery_voltage: 12.0,
            escape_route_spacing_m: 2.0,
            battery_cost_per_ah: 15.0,
            installation_cost_per_point: 25.0,
        }
    }
}

impl DesignSettings {
    /// Check that overridden values are usable.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("default_body_impedance_ohms", self.default_body_impedance_ohms, "Body impedance")?;
        require_positive("touch_voltage_ratio", self.touch_voltage_ratio, "Touch voltage ratio")?;
        require_positive("step_voltage_ratio", self.step_voltage_ratio, "Step voltage ratio")?;
        require_positive("battery_voltage", self.battery_voltage, "Battery voltage")?;
        require_positive("escape_route_spacing_m", self.escape_route_spacing_m, "Escape route spacing")?;
        require_non_negative("battery_cost_per_ah", self.battery_cost_per_ah, "Battery cost rate")?;
        require_non_negative(
            "installation_cost_per_point",
            self.installation_cost_per_point,
            "Installation cost rate",
        )?;
        Ok(())
    }
}

fn require_non_negative(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::validation(
            field,
            value.to_string(),
            format!("{} must be a finite number of zero or more", what),
        ));
    }
    Ok(())
}
