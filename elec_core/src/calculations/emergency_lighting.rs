//! # Emergency Lighting Design (BS 5266-1)
//!
//! Sizes an emergency lighting scheme for one building or area: luminaire
//! counts by purpose, battery and circuit sizing, a photometric sanity check
//! and a compliance verdict with advisory notes.
//!
//! ## Luminaire counts
//!
//! - Escape route: one per 2 m of route, plus two per staircase flight
//! - Open area: one per spacing² of floor, spacing from the occupancy
//! - Anti-panic: one per 100 m² where the occupancy needs it and A > 60 m²
//! - High-risk task: one per 50 m² when high-risk tasks are present
//!
//! ## Compliance
//!
//! Status starts at compliant and only escalates:
//!
//! | Check | Outcome |
//! |-------|---------|
//! | E_avg < occupancy lux | non-compliant |
//! | uniformity > 40 | warning |
//! | spacing ratio > 4 | warning |
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::emergency_lighting::{calculate, ComplianceStatus, EmergencyLightingInput};
//! use elec_core::profiles::{FixtureType, OccupancyType};
//!
//! let input = EmergencyLightingInput {
//!     label: "Ground floor offices".to_string(),
//!     floor_area: 400.0,
//!     ceiling_height: 3.0,
//!     occupancy_type: OccupancyType::Office,
//!     corridor_length: None,
//!     corridor_width: None,
//!     staircase_flights: None,
//!     has_high_risk_tasks: false,
//!     emergency_duration: 3.0,
//!     fixture_type: FixtureType::LedStandard,
//!     exit_routes: 2,
//!     has_disabled_access: false,
//!     complex_layout: false,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.compliance_status, ComplianceStatus::Compliant);
//! assert_eq!(result.total_luminaires(), 33);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::lighting::{
    anti_panic_luminaires, average_illuminance, battery_capacity, circuit_current, escape_route_luminaires,
    estimated_cost, high_risk_luminaires, open_area_luminaires, spacing_ratio, total_power, uniformity_ratio,
    ANTI_PANIC_MIN_AREA_M2, MAX_SPACING_RATIO, MAX_UNIFORMITY_RATIO,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::profiles::{CableSize, FixtureType, OccupancyType, RiskLevel};
use crate::settings::DesignSettings;
use crate::units::{round_dp, Volts};

/// Battery safety margin for hospitals
pub const HOSPITAL_SAFETY_MARGIN: f64 = 1.5;

/// Battery safety margin for all other premises
pub const STANDARD_SAFETY_MARGIN: f64 = 1.2;

/// Recommended duration for premises other than offices (h)
pub const RECOMMENDED_DURATION_H: f64 = 3.0;

/// BS 5266-1 minimum duration (h)
pub const MINIMUM_DURATION_H: f64 = 1.0;

/// Circuit current above which circuits should be split (A)
pub const SPLIT_CIRCUIT_CURRENT_A: f64 = 25.0;

/// Corridors wider than this are treated as open areas (m)
pub const OPEN_AREA_CORRIDOR_WIDTH_M: f64 = 2.0;

/// Mounting heights above this need photometric checking (m)
pub const HIGH_CEILING_M: f64 = 4.0;

/// Typical battery service life (years)
pub const BATTERY_LIFE_YEARS: u32 = 4;

/// Overall compliance verdict, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn key(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Input parameters for an emergency lighting design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Warehouse",
///   "floorArea": 1200,
///   "ceilingHeight": 8,
///   "occupancyType": "industrial",
///   "corridorLength": 40,
///   "hasHighRiskTasks": true,
///   "emergencyDuration": 3,
///   "fixtureType": "led-high",
///   "exitRoutes": 3,
///   "hasDisabledAccess": false,
///   "complexLayout": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyLightingInput {
    #[serde(default)]
    pub label: String,

    /// Floor area (m²)
    pub floor_area: f64,

    /// Ceiling (mounting) height (m)
    pub ceiling_height: f64,

    pub occupancy_type: OccupancyType,

    /// Escape corridor length (m); estimated from area and exits if omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corridor_length: Option<f64>,

    /// Escape corridor width (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corridor_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staircase_flights: Option<u32>,

    #[serde(default)]
    pub has_high_risk_tasks: bool,

    /// Rated emergency duration (h)
    pub emergency_duration: f64,

    pub fixture_type: FixtureType,

    /// Number of exit routes (≥ 1)
    pub exit_routes: u32,

    #[serde(default)]
    pub has_disabled_access: bool,

    #[serde(default)]
    pub complex_layout: bool,
}

impl EmergencyLightingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("floorArea", self.floor_area, "Floor area")?;
        require_positive("ceilingHeight", self.ceiling_height, "Ceiling height")?;
        require_positive("emergencyDuration", self.emergency_duration, "Emergency duration")?;

        if self.exit_routes == 0 {
            return Err(CalcError::validation(
                "exitRoutes",
                "0",
                "At least one exit route is required",
            ));
        }
        if let Some(length) = self.corridor_length {
            require_positive("corridorLength", length, "Corridor length")?;
        }
        if let Some(width) = self.corridor_width {
            require_positive("corridorWidth", width, "Corridor width")?;
        }
        if self.staircase_flights == Some(0) {
            return Err(CalcError::validation(
                "staircaseFlights",
                "0",
                "Staircase flights must be positive when given",
            ));
        }
        Ok(())
    }

    /// Battery safety margin for the occupancy
    pub fn safety_margin(&self) -> f64 {
        if self.occupancy_type == OccupancyType::Hospital {
            HOSPITAL_SAFETY_MARGIN
        } else {
            STANDARD_SAFETY_MARGIN
        }
    }

    /// Occupancy risk level, raised to high when high-risk tasks are present
    pub fn effective_risk(&self) -> RiskLevel {
        let profile_risk = self.occupancy_type.profile().risk_level;
        if self.has_high_risk_tasks {
            profile_risk.max(RiskLevel::High)
        } else {
            profile_risk
        }
    }
}

/// Results from an emergency lighting design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyLightingResult {
    pub escape_route_luminaires: u32,
    pub open_area_luminaires: u32,
    pub anti_panic_luminaires: u32,
    pub high_risk_luminaires: u32,

    /// Total luminaire load (W)
    pub total_power: f64,

    /// Central battery capacity (Ah, whole number)
    pub battery_capacity: f64,

    pub cable_size: CableSize,

    /// Circuit current at the battery voltage (A, 2 dp)
    pub circuit_current: f64,

    /// Average illuminance (lux, 2 dp)
    pub illuminance_achieved: f64,

    /// Achieved-over-required illuminance, capped at 40 (2 dp)
    pub uniformity_ratio: f64,

    /// Spacing-to-height ratio (2 dp)
    pub spacing_ratio: f64,

    pub compliance_status: ComplianceStatus,
    pub compliance_issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub regulatory_notes: Vec<String>,
    pub maintenance_schedule: Vec<String>,
    pub testing_requirements: Vec<String>,
    pub installation_notes: Vec<String>,

    /// Budget cost (£, 2 dp)
    pub estimated_cost: f64,
}

impl EmergencyLightingResult {
    pub fn total_luminaires(&self) -> u64 {
        [
            self.escape_route_luminaires,
            self.open_area_luminaires,
            self.anti_panic_luminaires,
            self.high_risk_luminaires,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    /// True unless the design is non-compliant
    pub fn passes(&self) -> bool {
        self.compliance_status != ComplianceStatus::NonCompliant
    }
}

/// Design emergency lighting with the default design settings.
pub fn calculate(input: &EmergencyLightingInput) -> CalcResult<EmergencyLightingResult> {
    calculate_with(input, &DesignSettings::default())
}

/// Design emergency lighting.
///
/// # Returns
///
/// * `Ok(EmergencyLightingResult)` - Counts, sizing, verdict and notes
/// * `Err(CalcError)` - If any dimension or the duration is non-positive,
///   or there are no exit routes; `CalculationFailed` if a luminaire count
///   does not fit in a `u32`
#[tracing::instrument(skip_all, fields(label = %input.label))]
pub fn calculate_with(
    input: &EmergencyLightingInput,
    settings: &DesignSettings,
) -> CalcResult<EmergencyLightingResult> {
    settings.validate()?;
    input.validate()?;

    let occupancy = input.occupancy_type.profile();
    let fixture = input.fixture_type.profile();
    let area = input.floor_area;

    // Luminaire counts
    let escape = escape_route_luminaires(
        input.corridor_length,
        area,
        input.exit_routes,
        input.staircase_flights,
        settings.escape_route_spacing_m,
    )
    .ok_or_else(|| too_many_luminaires("escape route"))?;
    let open_area =
        open_area_luminaires(area, occupancy.spacing).ok_or_else(|| too_many_luminaires("open area"))?;
    let anti_panic_applied = occupancy.anti_panic_required && area > ANTI_PANIC_MIN_AREA_M2;
    let anti_panic = if anti_panic_applied {
        anti_panic_luminaires(area).ok_or_else(|| too_many_luminaires("anti-panic"))?
    } else {
        0
    };
    let high_risk = if input.has_high_risk_tasks {
        high_risk_luminaires(area).ok_or_else(|| too_many_luminaires("high-risk task"))?
    } else {
        0
    };
    let luminaires = [escape, open_area, anti_panic, high_risk]
        .into_iter()
        .try_fold(0u32, u32::checked_add)
        .ok_or_else(|| too_many_luminaires("total"))?;

    // Electrical sizing
    let voltage = Volts(settings.battery_voltage);
    let power = total_power(luminaires, fixture.watts);
    let battery = battery_capacity(power, input.emergency_duration, voltage, input.safety_margin());
    let current = round_dp(circuit_current(power, voltage).0, 2);
    let cable_size = CableSize::for_current(current);

    // Photometry
    let illuminance = round_dp(average_illuminance(luminaires, fixture.lumens, area), 2);
    let uniformity = round_dp(uniformity_ratio(illuminance, occupancy.lux), 2);
    let spacing = round_dp(spacing_ratio(area, luminaires, input.ceiling_height), 2);

    // Compliance
    let mut status = ComplianceStatus::Compliant;
    let mut issues = Vec::new();
    if illuminance < occupancy.lux {
        status = status.max(ComplianceStatus::NonCompliant);
        issues.push(format!(
            "Average illuminance {:.2} lux is below the {} lux required for {} premises",
            illuminance,
            occupancy.lux,
            input.occupancy_type.display_name()
        ));
    }
    if uniformity > MAX_UNIFORMITY_RATIO {
        status = status.max(ComplianceStatus::Warning);
        issues.push(format!(
            "Uniformity ratio {:.2} exceeds the BS 5266-1 maximum of {}:1",
            uniformity, MAX_UNIFORMITY_RATIO
        ));
    }
    if spacing > MAX_SPACING_RATIO {
        status = status.max(ComplianceStatus::Warning);
        issues.push(format!(
            "Spacing-to-height ratio {:.2} exceeds {}:1; luminaires may be too far apart for the mounting height",
            spacing, MAX_SPACING_RATIO
        ));
    }

    let cost = round_dp(
        estimated_cost(
            luminaires,
            fixture.cost_per_unit,
            battery,
            settings.battery_cost_per_ah,
            settings.installation_cost_per_point,
        ),
        2,
    );

    let notes = AdvisoryNotes::build(input, AdvisoryContext {
        illuminance,
        spacing,
        current,
        cable_size,
        anti_panic_applied,
    });

    let result = EmergencyLightingResult {
        escape_route_luminaires: escape,
        open_area_luminaires: open_area,
        anti_panic_luminaires: anti_panic,
        high_risk_luminaires: high_risk,
        total_power: power.0,
        battery_capacity: battery.0,
        cable_size,
        circuit_current: current,
        illuminance_achieved: illuminance,
        uniformity_ratio: uniformity,
        spacing_ratio: spacing,
        compliance_status: status,
        compliance_issues: issues,
        recommendations: notes.recommendations,
        regulatory_notes: notes.regulatory_notes,
        maintenance_schedule: notes.maintenance_schedule,
        testing_requirements: notes.testing_requirements,
        installation_notes: notes.installation_notes,
        estimated_cost: cost,
    };

    debug!(
        occupancy = input.occupancy_type.key(),
        fixture = input.fixture_type.key(),
        luminaires,
        power_w = result.total_power,
        battery_ah = result.battery_capacity,
        lux = result.illuminance_achieved,
        status = %result.compliance_status,
        "emergency lighting designed"
    );
    if status != ComplianceStatus::Compliant {
        warn!(status = %status, issues = result.compliance_issues.len(), "emergency lighting design not compliant");
    }

    Ok(result)
}

fn too_many_luminaires(count: &str) -> CalcError {
    CalcError::calculation_failed(
        "EmergencyLighting",
        format!("{} luminaire count exceeds {}; split the design into smaller areas", count, u32::MAX),
    )
}

// =============================================================================
// ADVISORY TEXT
// =============================================================================

/// Computed values the advisory rules look at
struct AdvisoryContext {
    illuminance: f64,
    spacing: f64,
    current: f64,
    cable_size: CableSize,
    anti_panic_applied: bool,
}

#[derive(Default)]
struct AdvisoryNotes {
    recommendations: Vec<String>,
    regulatory_notes: Vec<String>,
    maintenance_schedule: Vec<String>,
    testing_requirements: Vec<String>,
    installation_notes: Vec<String>,
}

impl AdvisoryNotes {
    fn build(input: &EmergencyLightingInput, ctx: AdvisoryContext) -> Self {
        let mut notes = AdvisoryNotes::default();
        notes.add_recommendations(input, &ctx);
        notes.add_regulatory_notes(input, &ctx);
        notes.add_maintenance(input);
        notes.add_testing(input);
        notes.add_installation(input, &ctx);
        notes
    }

    fn add_recommendations(&mut self, input: &EmergencyLightingInput, ctx: &AdvisoryContext) {
        let occupancy = input.occupancy_type.profile();
        let r = &mut self.recommendations;

        if input.emergency_duration < RECOMMENDED_DURATION_H && input.occupancy_type != OccupancyType::Office {
            r.push(format!(
                "Consider a 3-hour emergency duration: {} premises may be reoccupied immediately after a mains failure",
                input.occupancy_type.display_name()
            ));
        }
        if ctx.illuminance < occupancy.lux {
            r.push(format!(
                "Add luminaires or select a higher output fixture to reach {} lux",
                occupancy.lux
            ));
        }
        if ctx.spacing > MAX_SPACING_RATIO {
            r.push("Reduce luminaire spacing or add intermediate luminaires to bring the spacing ratio within 4:1".to_string());
        }
        if ctx.current > SPLIT_CIRCUIT_CURRENT_A {
            r.push(format!(
                "Circuit current of {:.2} A is high; split the load across multiple emergency circuits",
                ctx.current
            ));
        }
        if input.fixture_type == FixtureType::Fluorescent {
            r.push("Upgrade to LED luminaires for lower power draw, smaller batteries and longer lamp life".to_string());
        }
        if input.complex_layout {
            r.push("Provide additional directional exit signage where the route or exit is not obvious".to_string());
        }
        if input.effective_risk() == RiskLevel::High {
            r.push("Use self-test or addressable luminaires to simplify routine testing in high-risk premises".to_string());
        }
    }

    fn add_regulatory_notes(&mut self, input: &EmergencyLightingInput, ctx: &AdvisoryContext) {
        let occupancy = input.occupancy_type.profile();
        let n = &mut self.regulatory_notes;

        n.push("BS 5266-1:2016 Emergency lighting: code of practice for the emergency lighting of premises".to_string());
        n.push("BS EN 1838:2013 Lighting applications: emergency lighting".to_string());
        n.push("BS EN 60598-2-22 Luminaires for emergency lighting".to_string());
        n.push("Regulatory Reform (Fire Safety) Order 2005: responsible person duties".to_string());
        n.extend(occupancy.special_requirements.iter().map(|s| s.to_string()));

        if input.occupancy_type == OccupancyType::Hospital {
            n.push("HTM 06-01: electrical services supply and distribution in healthcare premises".to_string());
            n.push("HTM 06-02: electrical safety guidance for low voltage systems".to_string());
        }
        if input.has_disabled_access {
            n.push("Approved Document M: light refuges, accessible routes and evacuation lifts".to_string());
        }
        if ctx.anti_panic_applied {
            n.push("BS EN 1838: open areas need at least 0.5 lux on the empty floor".to_string());
        }
        if input.has_high_risk_tasks {
            n.push("BS EN 1838: high-risk task areas need 10% of normal illuminance (minimum 15 lux) within 0.5 s".to_string());
        }
        if input.emergency_duration < MINIMUM_DURATION_H {
            n.push(format!(
                "Emergency duration of {} h is below the 1 hour minimum in BS 5266-1",
                input.emergency_duration
            ));
        }
    }

    fn add_maintenance(&mut self, input: &EmergencyLightingInput) {
        let lifespan = input.fixture_type.profile().lifespan;
        let m = &mut self.maintenance_schedule;

        m.push("Monthly: short functional test of every luminaire and sign".to_string());
        m.push("Annually: full rated-duration discharge test".to_string());
        if input.effective_risk() == RiskLevel::High {
            m.push("Daily: visual check of central system or luminaire charge indicators".to_string());
        }
        m.push(format!("Every {} years: replace batteries", BATTERY_LIFE_YEARS));
        m.push(format!("Replace light sources at {} hours of operation", lifespan));
    }

    fn add_testing(&mut self, input: &EmergencyLightingInput) {
        let t = &mut self.testing_requirements;

        t.push("Commissioning test and completion certificate on handover".to_string());
        t.push("Monthly flick test by simulated mains failure".to_string());
        t.push(format!("Annual {}-hour full duration test", input.emergency_duration));
        t.push("Record all tests and defects in the emergency lighting logbook".to_string());
        if input.has_high_risk_tasks {
            t.push("Verify the 0.5 s response time of high-risk task lighting".to_string());
        }
    }

    fn add_installation(&mut self, input: &EmergencyLightingInput, ctx: &AdvisoryContext) {
        let i = &mut self.installation_notes;

        i.push("Position luminaires at exit doors, changes of direction, stairs, fire alarm call points and first aid points".to_string());
        i.push(format!(
            "Wire in {} fire-resistant cable (BS 8519 / BS 7629)",
            ctx.cable_size.label()
        ));
        if let Some(flights) = input.staircase_flights {
            i.push(format!(
                "Light each of the {} staircase flights so every tread receives direct light",
                flights
            ));
        }
        if input.corridor_width.is_some_and(|w| w > OPEN_AREA_CORRIDOR_WIDTH_M) {
            i.push("Corridors wider than 2 m should be treated as open areas".to_string());
        }
        if input.ceiling_height > HIGH_CEILING_M {
            i.push("Check manufacturer photometric data at the mounting height over 4 m".to_string());
        }
    }
}
