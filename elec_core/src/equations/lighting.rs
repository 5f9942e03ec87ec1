//! # Emergency Lighting Formulas
//!
//! Luminaire quantities, battery and circuit sizing and the simple
//! photometric ratios used for a first-pass BS 5266-1 design.
//!
//! ## Notation
//!
//! - `A` = Floor area (m²)
//! - `H` = Ceiling (mounting) height (m)
//! - `s` = Open-area luminaire spacing from the occupancy profile (m)
//! - `N` = Total luminaire count
//! - `Φ` = Emergency lumen output per luminaire (lm)
//! - `P` = Total emergency load (W)
//! - `t` = Rated duration (h)
//!
//! ## References
//!
//! - BS 5266-1:2016 Emergency lighting. Code of practice
//! - BS EN 1838:2013 Lighting applications. Emergency lighting

use crate::units::{AmpHours, Amperes, Volts, Watts};

/// Largest uniformity ratio (max:min) permitted on escape routes and open areas
pub const MAX_UNIFORMITY_RATIO: f64 = 40.0;

/// Spacing-to-height ratio above which luminaire layout is flagged
pub const MAX_SPACING_RATIO: f64 = 4.0;

/// Rooms larger than this (m²) get open-area (anti-panic) lighting
pub const ANTI_PANIC_MIN_AREA_M2: f64 = 60.0;

/// Route length per exit when no corridor length is known, as a multiple of √A
pub const ROUTE_LENGTH_FACTOR: f64 = 1.4;

/// Floor area served by each anti-panic luminaire (m²)
pub const ANTI_PANIC_AREA_PER_LUMINAIRE_M2: f64 = 100.0;

/// Floor area served by each high-risk task luminaire (m²)
pub const HIGH_RISK_AREA_PER_LUMINAIRE_M2: f64 = 50.0;

/// Luminaires on each staircase flight (top and bottom)
pub const LUMINAIRES_PER_FLIGHT: u32 = 2;

/// Round a non-negative quantity up to a whole number of luminaires,
/// `None` when the count does not fit in a `u32`
#[inline]
fn ceil_count(x: f64) -> Option<u32> {
    let n = x.ceil().max(0.0);
    if n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

// =============================================================================
// LUMINAIRE COUNTS
// =============================================================================

/// Escape route luminaires
///
/// # Formula
/// - Known corridor: N = ⌈L_corridor / s_route⌉
/// - Otherwise: N = ⌈√A · exits · 1.4 / s_route⌉
/// - Plus 2 per staircase flight
///
/// `None` if the count overflows.
pub fn escape_route_luminaires(
    corridor_length: Option<f64>,
    floor_area: f64,
    exit_routes: u32,
    staircase_flights: Option<u32>,
    route_spacing: f64,
) -> Option<u32> {
    let route_length = match corridor_length {
        Some(length) => length,
        None => estimated_route_length(floor_area, exit_routes),
    };
    let stair_lights = staircase_flights.unwrap_or(0).checked_mul(LUMINAIRES_PER_FLIGHT)?;
    ceil_count(route_length / route_spacing)?.checked_add(stair_lights)
}

/// Escape route length estimated from floor area and number of exits
#[inline]
pub fn estimated_route_length(floor_area: f64, exit_routes: u32) -> f64 {
    floor_area.sqrt() * exit_routes as f64 * ROUTE_LENGTH_FACTOR
}

/// Open-area luminaires on a square grid, N = ⌈A / s²⌉
#[inline]
pub fn open_area_luminaires(floor_area: f64, spacing: f64) -> Option<u32> {
    ceil_count(floor_area / spacing.powi(2))
}

/// Additional anti-panic luminaires, N = ⌈A / 100⌉
#[inline]
pub fn anti_panic_luminaires(floor_area: f64) -> Option<u32> {
    ceil_count(floor_area / ANTI_PANIC_AREA_PER_LUMINAIRE_M2)
}

/// Additional high-risk task luminaires, N = ⌈A / 50⌉
#[inline]
pub fn high_risk_luminaires(floor_area: f64) -> Option<u32> {
    ceil_count(floor_area / HIGH_RISK_AREA_PER_LUMINAIRE_M2)
}

// =============================================================================
// ELECTRICAL SIZING
// =============================================================================

/// P = N · P_unit
#[inline]
pub fn total_power(luminaires: u32, watts_each: f64) -> Watts {
    Watts(luminaires as f64 * watts_each)
}

/// Battery capacity, C = ⌈(P · t / V) · margin⌉
pub fn battery_capacity(power: Watts, duration_hours: f64, voltage: Volts, safety_margin: f64) -> AmpHours {
    let amp_hours = power.0 * duration_hours / voltage.0;
    AmpHours((amp_hours * safety_margin).ceil())
}

/// I = P / V
#[inline]
pub fn circuit_current(power: Watts, voltage: Volts) -> Amperes {
    power / voltage
}

// =============================================================================
// PHOTOMETRY
// =============================================================================

/// Average illuminance, E = N·Φ / A (lux)
#[inline]
pub fn average_illuminance(luminaires: u32, lumens_each: f64, floor_area: f64) -> f64 {
    luminaires as f64 * lumens_each / floor_area
}

/// Achieved-over-required illuminance ratio, capped at 40
///
/// Reported as the design's uniformity ratio. This is not the max:min
/// ratio across the floor that BS 5266-1 limits; a point-by-point
/// calculation is needed for that.
#[inline]
pub fn uniformity_ratio(achieved_lux: f64, required_lux: f64) -> f64 {
    (achieved_lux / required_lux).min(MAX_UNIFORMITY_RATIO)
}

/// Spacing-to-height ratio, SHR = √(A/N) / H
#[inline]
pub fn spacing_ratio(floor_area: f64, luminaires: u32, ceiling_height: f64) -> f64 {
    (floor_area / luminaires as f64).sqrt() / ceiling_height
}

// =============================================================================
// COST
// =============================================================================

/// Budget cost, £ = N·unit + C·rate_Ah + N·install
pub fn estimated_cost(
    luminaires: u32,
    cost_per_unit: f64,
    battery: AmpHours,
    cost_per_ah: f64,
    installation_per_point: f64,
) -> f64 {
    let n = luminaires as f64;
    n * cost_per_unit + battery.0 * cost_per_ah + n * installation_per_point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_route_with_corridor() {
        // 15 m corridor at 2 m spacing -> 8, plus 2 flights -> 4
        assert_eq!(escape_route_luminaires(Some(15.0), 400.0, 2, Some(2), 2.0), Some(12));
        assert_eq!(escape_route_luminaires(Some(10.0), 400.0, 2, None, 2.0), Some(5));
    }

    #[test]
    fn test_escape_route_estimated() {
        // √400 · 2 · 1.4 = 56 m -> 28 luminaires
        assert!((estimated_route_length(400.0, 2) - 56.0).abs() < 1e-9);
        assert_eq!(escape_route_luminaires(None, 400.0, 2, None, 2.0), Some(28));
    }

    #[test]
    fn test_area_counts() {
        assert_eq!(open_area_luminaires(400.0, 20.0), Some(1));
        assert_eq!(open_area_luminaires(401.0, 20.0), Some(2));
        assert_eq!(anti_panic_luminaires(250.0), Some(3));
        assert_eq!(high_risk_luminaires(120.0), Some(3));
    }

    #[test]
    fn test_counts_that_do_not_fit() {
        assert_eq!(high_risk_luminaires(1e12), None);
        assert_eq!(escape_route_luminaires(Some(10.0), 400.0, 2, Some(3_000_000_000), 2.0), None);
        assert_eq!(escape_route_luminaires(Some(10.0), 400.0, 2, Some(u32::MAX / 2), 2.0), None);
        assert_eq!(escape_route_luminaires(None, 400.0, u32::MAX, None, 2.0), None);
    }

    #[test]
    fn test_battery_capacity_rounds_up() {
        // 90 W · 3 h / 12 V = 22.5 Ah · 1.2 = 27 Ah
        let c = battery_capacity(Watts(90.0), 3.0, Volts(12.0), 1.2);
        assert_eq!(c, AmpHours(27.0));
        // 100 W · 1 h / 12 V = 8.33 Ah · 1.5 = 12.5 -> 13
        let c = battery_capacity(Watts(100.0), 1.0, Volts(12.0), 1.5);
        assert_eq!(c, AmpHours(13.0));
    }

    #[test]
    fn test_photometry() {
        assert!((average_illuminance(10, 200.0, 400.0) - 5.0).abs() < 1e-12);
        assert_eq!(uniformity_ratio(5.0, 1.0), 5.0);
        assert_eq!(uniformity_ratio(500.0, 1.0), MAX_UNIFORMITY_RATIO);
        // √(400/4) / 2.5 = 4
        assert!((spacing_ratio(400.0, 4, 2.5) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost() {
        let cost = estimated_cost(10, 45.0, AmpHours(27.0), 15.0, 25.0);
        assert!((cost - (450.0 + 405.0 + 250.0)).abs() < 1e-9);
    }
}
