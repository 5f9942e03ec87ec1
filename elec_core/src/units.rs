//! # Unit Types
//!
//! Lightweight newtype wrappers for the electrical quantities that flow
//! between the earthing and lighting formulas. They exist to keep Ohm's-law
//! arithmetic honest (a voltage divided by an impedance is a current, not
//! another bare f64) while serializing as plain numbers.
//!
//! ## SI Units
//!
//! - Potential: volts (V)
//! - Current: amperes (A), milliamperes (mA)
//! - Impedance / resistance: ohms (Ω)
//! - Power: watts (W)
//! - Charge: ampere-hours (Ah)
//!
//! ## Example
//!
//! ```rust
//! use elec_core::units::{Amperes, Milliamps, Ohms, Volts};
//!
//! let touch = Volts(35.0);
//! let body = Ohms(1000.0);
//! let current: Amperes = touch / body;
//! let ma: Milliamps = current.into();
//! assert!((ma.0 - 35.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

// ============================================================================
// Electrical Units
// ============================================================================

/// Electric potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

/// Current in milliamperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliamps(pub f64);

/// Resistance or impedance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Battery charge in ampere-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmpHours(pub f64);

impl From<Amperes> for Milliamps {
    fn from(a: Amperes) -> Self {
        Milliamps(a.0 * 1000.0)
    }
}

// ============================================================================
// Ohm's Law / Power Relations
// ============================================================================

/// I = V / R
impl Div<Ohms> for Volts {
    type Output = Amperes;
    fn div(self, rhs: Ohms) -> Amperes {
        Amperes(self.0 / rhs.0)
    }
}

/// V = I·R
impl Mul<Ohms> for Amperes {
    type Output = Volts;
    fn mul(self, rhs: Ohms) -> Volts {
        Volts(self.0 * rhs.0)
    }
}

/// I = P / V
impl Div<Volts> for Watts {
    type Output = Amperes;
    fn div(self, rhs: Volts) -> Amperes {
        Amperes(self.0 / rhs.0)
    }
}

/// Fraction of a potential, e.g. touch voltage as a share of EPR
impl Mul<f64> for Volts {
    type Output = Volts;
    fn mul(self, rhs: f64) -> Volts {
        Volts(self.0 * rhs)
    }
}

/// Round to `places` decimal places, half away from zero.
///
/// Reported values are rounded with this helper everywhere so that equal
/// inputs always produce identical output.
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohms_law() {
        let i = Volts(230.0) / Ohms(46.0);
        assert!((i.0 - 5.0).abs() < 1e-12);
        let v = Amperes(5.0) * Ohms(46.0);
        assert!((v.0 - 230.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_to_current() {
        let i = Watts(60.0) / Volts(12.0);
        assert_eq!(i.0, 5.0);
    }

    #[test]
    fn test_milliamps() {
        let ma: Milliamps = Amperes(0.0305).into();
        assert!((ma.0 - 30.5).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_fraction() {
        assert_eq!(Volts(339.37) * 0.2, Volts(339.37 * 0.2));
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(33.94512, 3), 33.945);
        assert_eq!(round_dp(2.675, 1), 2.7);
        assert_eq!(round_dp(0.125, 2), 0.13);
        assert_eq!(round_dp(-0.125, 2), -0.13);
    }

    #[test]
    fn test_serialization() {
        let v = Volts(12.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Volts = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
