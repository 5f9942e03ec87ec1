//! # Earthing and Shock-Protection Formulas
//!
//! Earth electrode resistance for the common electrode shapes, earth
//! potential rise, the simplified touch/step voltage split and the
//! duration-dependent permissible voltage limits.
//!
//! ## Notation
//!
//! - `ρ` = Soil resistivity (Ω·m)
//! - `L` = Electrode or conductor length (m)
//! - `d` = Rod diameter (m)
//! - `A` = Plate or mesh area (m²)
//! - `w` = Strip width (m)
//! - `h` = Burial depth (m)
//! - `R` = Electrode resistance to remote earth (Ω)
//! - `I_F` = Earth fault current (A)
//! - `t_F` = Fault clearance time (s)
//!
//! None of these functions validate their arguments. Degenerate geometry
//! (zero diameter, zero area) yields `NaN`, `inf` or a negative resistance;
//! callers validate first.
//!
//! ## References
//!
//! - BS 7430:2011+A1:2015 Code of practice for protective earthing
//! - BS EN 50522:2010 Earthing of power installations exceeding 1 kV a.c.
//! - ENA TS 41-24 Guidelines for the design of earthing systems
//! - IEC 60479-1 Effects of current on human beings and livestock

use std::f64::consts::PI;

use crate::units::{Amperes, Milliamps, Ohms, Volts};

// =============================================================================
// ELECTRODE RESISTANCE
// =============================================================================

/// Resistance of a single vertically driven rod
///
/// # Formula (BS 7430 Clause 9.5.3)
/// - R = ρ/(2πL) · ln(4L/d)
#[inline]
pub fn rod_resistance(rho: f64, length: f64, diameter: f64) -> f64 {
    (rho / (2.0 * PI * length)) * (4.0 * length / diameter).ln()
}

/// Resistance of a buried plate, treated as an equivalent disc
///
/// # Formula
/// - R = ρ / (4·√(A/π))
#[inline]
pub fn plate_resistance(rho: f64, area: f64) -> f64 {
    rho / (4.0 * (area / PI).sqrt())
}

/// Resistance of a horizontal strip or tape electrode buried at depth h
///
/// # Formula
/// - R = ρ/(πL) · ln(2L²/(w·h))
#[inline]
pub fn strip_resistance(rho: f64, length: f64, width: f64, depth: f64) -> f64 {
    (rho / (PI * length)) * (2.0 * length.powi(2) / (width * depth)).ln()
}

/// Resistance of a mesh/grid electrode
///
/// Disc term for the enclosed area plus a term for the total buried
/// conductor length.
///
/// # Formula
/// - R = ρ/(4·√(A/π)) + ρ/L_total
#[inline]
pub fn mesh_resistance(rho: f64, area: f64, total_conductor_length: f64) -> f64 {
    plate_resistance(rho, area) + rho / total_conductor_length
}

// =============================================================================
// EARTH POTENTIAL RISE AND PROSPECTIVE VOLTAGES
// =============================================================================

/// EPR = I_F · R
#[inline]
pub fn earth_potential_rise(fault_current: Amperes, resistance: Ohms) -> Volts {
    fault_current * resistance
}

/// Prospective touch voltage as a fixed fraction of EPR (hand to feet)
#[inline]
pub fn touch_voltage(epr: Volts, ratio: f64) -> Volts {
    epr * ratio
}

/// Prospective step voltage as a fixed fraction of EPR (foot to foot, 1 m)
#[inline]
pub fn step_voltage(epr: Volts, ratio: f64) -> Volts {
    epr * ratio
}

// =============================================================================
// PERMISSIBLE LIMITS
// =============================================================================

/// Permissible touch voltage for a fault clearance time
///
/// Step function of duration (upper bounds inclusive):
///
/// | t_F (s) | U_Tp (V) |
/// |---------|----------|
/// | ≤ 0.1 | 750 |
/// | ≤ 0.2 | 500 |
/// | ≤ 0.4 | 250 |
/// | ≤ 1.0 | 120 |
/// | > 1.0 | 50 (continuous contact) |
pub fn permissible_touch_voltage(fault_duration_s: f64) -> f64 {
    if fault_duration_s <= 0.1 {
        750.0
    } else if fault_duration_s <= 0.2 {
        500.0
    } else if fault_duration_s <= 0.4 {
        250.0
    } else if fault_duration_s <= 1.0 {
        120.0
    } else {
        50.0
    }
}

/// Permissible step voltage: twice the touch limit at the same duration
#[inline]
pub fn permissible_step_voltage(fault_duration_s: f64) -> f64 {
    2.0 * permissible_touch_voltage(fault_duration_s)
}

// =============================================================================
// BODY CURRENT
// =============================================================================

/// Current through the body for a prospective voltage, I_B = U / Z_B
#[inline]
pub fn body_current(voltage: Volts, body_impedance: Ohms) -> Milliamps {
    (voltage / body_impedance).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_resistance_reference_case() {
        // ρ=80, L=2.4, d=0.016: (80/(2π·2.4))·ln(600)
        let r = rod_resistance(80.0, 2.4, 0.016);
        let hand = 80.0 / (2.0 * PI * 2.4) * 600f64.ln();
        assert!((r - hand).abs() < 1e-9);
        assert!((r - 33.94).abs() < 0.1);
    }

    #[test]
    fn test_plate_resistance() {
        // A = π m² gives an equivalent disc radius of 1 m: R = ρ/4
        let r = plate_resistance(100.0, PI);
        assert!((r - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_strip_resistance() {
        // L=10, w=0.025, h=0.5: ln(200/0.0125) = ln(16000)
        let r = strip_resistance(100.0, 10.0, 0.025, 0.5);
        let hand = 100.0 / (PI * 10.0) * 16000f64.ln();
        assert!((r - hand).abs() < 1e-9);
    }

    #[test]
    fn test_mesh_adds_conductor_term() {
        let plate = plate_resistance(100.0, 100.0);
        let mesh = mesh_resistance(100.0, 100.0, 200.0);
        assert!((mesh - plate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_geometry_is_not_finite() {
        // ln(4L/0) = inf
        assert!(!rod_resistance(80.0, 2.4, 0.0).is_finite());
        assert!(!plate_resistance(80.0, 0.0).is_finite());
    }

    #[test]
    fn test_permissible_touch_steps() {
        assert_eq!(permissible_touch_voltage(0.05), 750.0);
        assert_eq!(permissible_touch_voltage(0.1), 750.0);
        assert_eq!(permissible_touch_voltage(0.15), 500.0);
        assert_eq!(permissible_touch_voltage(0.3), 250.0);
        assert_eq!(permissible_touch_voltage(0.8), 120.0);
        assert_eq!(permissible_touch_voltage(1.0), 120.0);
        assert_eq!(permissible_touch_voltage(2.0), 50.0);
    }

    #[test]
    fn test_step_limit_is_double_touch() {
        for t in [0.01, 0.1, 0.15, 0.2, 0.35, 0.4, 0.9, 1.0, 1.5, 5.0] {
            assert_eq!(permissible_step_voltage(t), 2.0 * permissible_touch_voltage(t));
        }
    }

    #[test]
    fn test_epr_and_split() {
        let epr = earth_potential_rise(Amperes(100.0), Ohms(10.0));
        assert_eq!(epr, Volts(1000.0));
        assert!((touch_voltage(epr, 0.7).0 - 700.0).abs() < 1e-9);
        assert!((step_voltage(epr, 0.2).0 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_body_current_ma() {
        let ib = body_current(Volts(50.0), Ohms(1000.0));
        assert!((ib.0 - 50.0).abs() < 1e-9);
    }
}
