//! # Equation Registry
//!
//! Central registry of every formula the calculators use. Each equation
//! carries its plain-text formula, the standard it comes from and the
//! function that implements it, so a reviewing engineer can audit the
//! arithmetic without reading the calculation code.
//!
//! ## Usage
//!
//! ```rust
//! use elec_core::equations::registry::Equation;
//!
//! let meta = Equation::RodResistance.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a standard or code of practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// BS 7430 - Code of practice for protective earthing
    BS7430 { year: u16, clause: &'static str },
    /// BS EN 50522 - Earthing of power installations exceeding 1 kV a.c.
    BSEN50522 { year: u16, clause: &'static str },
    /// ENA Technical Specification 41-24
    ENATS4124 { issue: u8, section: &'static str },
    /// IEC 60479-1 - Effects of current on human beings and livestock
    IEC60479 { year: u16, clause: &'static str },
    /// BS 5266-1 - Emergency lighting code of practice
    BS5266 { year: u16, clause: &'static str },
    /// BS EN 1838 - Emergency lighting applications
    BSEN1838 { year: u16, clause: &'static str },
    /// BS 7671 - Requirements for Electrical Installations
    BS7671 { year: u16, regulation: &'static str },
    /// Circuit theory (Ohm's law, P = VI)
    CircuitTheory,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::BS7430 { year, clause } => format!("BS 7430:{} Clause {}", year, clause),
            CodeReference::BSEN50522 { year, clause } => format!("BS EN 50522:{} {}", year, clause),
            CodeReference::ENATS4124 { issue, section } => {
                format!("ENA TS 41-24 Issue {} Section {}", issue, section)
            }
            CodeReference::IEC60479 { year, clause } => format!("IEC 60479-1:{} Clause {}", year, clause),
            CodeReference::BS5266 { year, clause } => format!("BS 5266-1:{} Clause {}", year, clause),
            CodeReference::BSEN1838 { year, clause } => format!("BS EN 1838:{} Clause {}", year, clause),
            CodeReference::BS7671 { year, regulation } => {
                format!("BS 7671:{} Regulation {}", year, regulation)
            }
            CodeReference::CircuitTheory => "Circuit Theory".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::BS7430 { .. } => "BS 7430",
            CodeReference::BSEN50522 { .. } => "BS EN 50522",
            CodeReference::ENATS4124 { .. } => "ENA TS 41-24",
            CodeReference::IEC60479 { .. } => "IEC 60479-1",
            CodeReference::BS5266 { .. } => "BS 5266-1",
            CodeReference::BSEN1838 { .. } => "BS EN 1838",
            CodeReference::BS7671 { .. } => "BS 7671",
            CodeReference::CircuitTheory => "Circuit Theory",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Earth electrode resistance by shape
    ElectrodeResistance,
    /// EPR and the touch/step split
    PotentialRise,
    /// Duration-dependent voltage limits
    PermissibleLimits,
    /// Body current and physiological effects
    BodyCurrent,
    /// Emergency luminaire quantities
    LuminaireQuantities,
    /// Battery, circuit current and cable
    ElectricalSizing,
    /// Illuminance and layout ratios
    Photometry,
    /// Budget estimate
    Cost,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ElectrodeResistance => "Electrode Resistance",
            EquationCategory::PotentialRise => "Earth Potential Rise",
            EquationCategory::PermissibleLimits => "Permissible Limits",
            EquationCategory::BodyCurrent => "Body Current",
            EquationCategory::LuminaireQuantities => "Luminaire Quantities",
            EquationCategory::ElectricalSizing => "Electrical Sizing",
            EquationCategory::Photometry => "Photometry",
            EquationCategory::Cost => "Cost",
        }
    }

    /// Sort order in the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::ElectrodeResistance => 1,
            EquationCategory::PotentialRise => 2,
            EquationCategory::PermissibleLimits => 3,
            EquationCategory::BodyCurrent => 4,
            EquationCategory::LuminaireQuantities => 5,
            EquationCategory::ElectricalSizing => 6,
            EquationCategory::Photometry => 7,
            EquationCategory::Cost => 8,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "ρ", "L", "I_F")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units (e.g., "Ω·m", "m", "A")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Driven Rod Resistance")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Electrode Resistance
    // -------------------------------------------------------------------------
    /// R = ρ/(2πL)·ln(4L/d)
    RodResistance,
    /// R = ρ/(4√(A/π))
    PlateResistance,
    /// R = ρ/(πL)·ln(2L²/(wh))
    StripResistance,
    /// R = ρ/(4√(A/π)) + ρ/L_total
    MeshResistance,

    // -------------------------------------------------------------------------
    // Potential Rise
    // -------------------------------------------------------------------------
    /// EPR = I_F·R
    EarthPotentialRise,
    /// U_T = 0.7·EPR
    TouchVoltage,
    /// U_S = 0.2·EPR
    StepVoltage,

    // -------------------------------------------------------------------------
    // Limits and Body Current
    // -------------------------------------------------------------------------
    /// U_Tp(t_F) step function
    PermissibleTouchVoltage,
    /// U_Sp = 2·U_Tp
    PermissibleStepVoltage,
    /// I_B = U/Z_B
    BodyCurrent,
    /// IEC 60479-1 zone boundaries
    PhysiologicalZone,

    // -------------------------------------------------------------------------
    // Emergency Lighting
    // -------------------------------------------------------------------------
    /// ⌈L/2⌉ + 2·flights
    EscapeRouteLuminaires,
    /// ⌈A/s²⌉
    OpenAreaLuminaires,
    /// ⌈A/100⌉ when A > 60 m²
    AntiPanicLuminaires,
    /// ⌈A/50⌉
    HighRiskLuminaires,
    /// ⌈(P·t/V)·margin⌉
    BatteryCapacity,
    /// I = P/V
    CircuitCurrent,
    /// Threshold table
    CableSizeSelection,
    /// E = NΦ/A
    AverageIlluminance,
    /// min(E/E_req, 40)
    UniformityRatio,
    /// √(A/N)/H
    SpacingRatio,
    /// N·unit + C·rate + N·install
    EstimatedCost,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::RodResistance => EquationMetadata {
                name: "Driven Rod Resistance",
                description: "Resistance to remote earth of a single vertical rod electrode",
                formula_plain: "R = (rho / (2*pi*L)) * ln(4L/d)",
                reference: CodeReference::BS7430 { year: 2011, clause: "9.5.3" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "Ω·m"),
                    Variable::new("L", "Driven length", "m"),
                    Variable::new("d", "Rod diameter", "m"),
                ],
                assumptions: vec!["Homogeneous soil", "Rod top at ground level", "L >> d"],
                category: EquationCategory::ElectrodeResistance,
                source_module: "equations/earthing.rs",
                source_function: "rod_resistance",
            },

            Equation::PlateResistance => EquationMetadata {
                name: "Plate Electrode Resistance",
                description: "Buried plate treated as an equivalent circular disc",
                formula_plain: "R = rho / (4 * sqrt(A/pi))",
                reference: CodeReference::BS7430 { year: 2011, clause: "9.5.5" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "Ω·m"),
                    Variable::new("A", "Plate area (one face)", "m²"),
                ],
                assumptions: vec!["Homogeneous soil", "Burial depth small relative to plate size"],
                category: EquationCategory::ElectrodeResistance,
                source_module: "equations/earthing.rs",
                source_function: "plate_resistance",
            },

            Equation::StripResistance => EquationMetadata {
                name: "Horizontal Strip Resistance",
                description: "Straight tape or strip electrode buried horizontally",
                formula_plain: "R = (rho / (pi*L)) * ln(2L^2 / (w*h))",
                reference: CodeReference::BS7430 { year: 2011, clause: "9.5.4" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "Ω·m"),
                    Variable::new("L", "Strip length", "m"),
                    Variable::new("w", "Strip width", "m"),
                    Variable::new("h", "Burial depth", "m"),
                ],
                assumptions: vec!["Homogeneous soil", "L >> h"],
                category: EquationCategory::ElectrodeResistance,
                source_module: "equations/earthing.rs",
                source_function: "strip_resistance",
            },

            Equation::MeshResistance => EquationMetadata {
                name: "Mesh Electrode Resistance",
                description: "Grid electrode: disc term for the enclosed area plus a conductor-length term",
                formula_plain: "R = rho / (4 * sqrt(A/pi)) + rho / L_total",
                reference: CodeReference::BSEN50522 { year: 2010, clause: "Annex J" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "Ω·m"),
                    Variable::new("A", "Area enclosed by the mesh", "m²"),
                    Variable::new("L_total", "Total buried conductor length", "m"),
                ],
                assumptions: vec!["Homogeneous soil", "Shallow burial"],
                category: EquationCategory::ElectrodeResistance,
                source_module: "equations/earthing.rs",
                source_function: "mesh_resistance",
            },

            Equation::EarthPotentialRise => EquationMetadata {
                name: "Earth Potential Rise",
                description: "Voltage of the electrode relative to remote earth during a fault",
                formula_plain: "EPR = I_F * R",
                reference: CodeReference::ENATS4124 { issue: 2, section: "5" },
                variables: vec![
                    Variable::new("I_F", "Earth fault current", "A"),
                    Variable::new("R", "Electrode resistance", "Ω"),
                ],
                assumptions: vec!["All fault current returns through the electrode"],
                category: EquationCategory::PotentialRise,
                source_module: "equations/earthing.rs",
                source_function: "earth_potential_rise",
            },

            Equation::TouchVoltage => EquationMetadata {
                name: "Prospective Touch Voltage",
                description: "Hand-to-feet voltage as a fixed fraction of EPR",
                formula_plain: "U_T = 0.7 * EPR",
                reference: CodeReference::BSEN50522 { year: 2010, clause: "Annex E" },
                variables: vec![Variable::new("U_T", "Prospective touch voltage", "V")],
                assumptions: vec!["Simplified empirical ratio, no surface layer"],
                category: EquationCategory::PotentialRise,
                source_module: "equations/earthing.rs",
                source_function: "touch_voltage",
            },

            Equation::StepVoltage => EquationMetadata {
                name: "Prospective Step Voltage",
                description: "Foot-to-foot voltage over 1 m as a fixed fraction of EPR",
                formula_plain: "U_S = 0.2 * EPR",
                reference: CodeReference::BSEN50522 { year: 2010, clause: "Annex E" },
                variables: vec![Variable::new("U_S", "Prospective step voltage", "V")],
                assumptions: vec!["Simplified empirical ratio, no surface layer"],
                category: EquationCategory::PotentialRise,
                source_module: "equations/earthing.rs",
                source_function: "step_voltage",
            },

            Equation::PermissibleTouchVoltage => EquationMetadata {
                name: "Permissible Touch Voltage",
                description: "Touch voltage limit as a step function of fault clearance time",
                formula_plain: "t<=0.1s: 750V; t<=0.2s: 500V; t<=0.4s: 250V; t<=1.0s: 120V; else 50V",
                reference: CodeReference::BSEN50522 { year: 2010, clause: "Figure 4" },
                variables: vec![
                    Variable::new("t_F", "Fault clearance time", "s"),
                    Variable::new("U_Tp", "Permissible touch voltage", "V"),
                ],
                assumptions: vec!["Upper bounds inclusive", "50 V continuous contact limit"],
                category: EquationCategory::PermissibleLimits,
                source_module: "equations/earthing.rs",
                source_function: "permissible_touch_voltage",
            },

            Equation::PermissibleStepVoltage => EquationMetadata {
                name: "Permissible Step Voltage",
                description: "Step voltage limit, twice the touch limit at the same duration",
                formula_plain: "U_Sp = 2 * U_Tp(t_F)",
                reference: CodeReference::ENATS4124 { issue: 2, section: "6.2" },
                variables: vec![Variable::new("U_Sp", "Permissible step voltage", "V")],
                assumptions: vec!["Foot-to-foot current path avoids the heart"],
                category: EquationCategory::PermissibleLimits,
                source_module: "equations/earthing.rs",
                source_function: "permissible_step_voltage",
            },

            Equation::BodyCurrent => EquationMetadata {
                name: "Body Current",
                description: "Current through the body for the selected contact scenario",
                formula_plain: "I_B = (U / Z_B) * 1000",
                reference: CodeReference::IEC60479 { year: 2018, clause: "4" },
                variables: vec![
                    Variable::new("U", "Prospective touch or step voltage", "V"),
                    Variable::new("Z_B", "Body impedance", "Ω"),
                    Variable::new("I_B", "Body current", "mA"),
                ],
                assumptions: vec!["Constant body impedance (default 1000 Ω)", "No footwear or contact resistance"],
                category: EquationCategory::BodyCurrent,
                source_module: "equations/earthing.rs",
                source_function: "body_current",
            },

            Equation::PhysiologicalZone => EquationMetadata {
                name: "Physiological Zone",
                description: "IEC 60479-1 a.c. time/current zone from body current",
                formula_plain: "I_B<0.5mA: Zone 1; <=10mA: Zone 2; <=100mA: Zone 3; else Zone 4",
                reference: CodeReference::IEC60479 { year: 2018, clause: "5.4" },
                variables: vec![Variable::new("I_B", "Body current", "mA")],
                assumptions: vec!["Current thresholds only, duration not considered"],
                category: EquationCategory::BodyCurrent,
                source_module: "calculations/touch_step.rs",
                source_function: "PhysiologicalZone::from_body_current",
            },

            Equation::EscapeRouteLuminaires => EquationMetadata {
                name: "Escape Route Luminaires",
                description: "Luminaires along escape routes at 2 m maximum spacing plus stair flights",
                formula_plain: "N = ceil(L_route / 2) + 2 * flights; L_route = sqrt(A) * exits * 1.4 if unknown",
                reference: CodeReference::BS5266 { year: 2016, clause: "5.2" },
                variables: vec![
                    Variable::new("L_route", "Escape route length", "m"),
                    Variable::new("A", "Floor area", "m²"),
                    Variable::new("exits", "Number of exit routes", "-"),
                ],
                assumptions: vec!["Route length estimate when corridor length is not given"],
                category: EquationCategory::LuminaireQuantities,
                source_module: "equations/lighting.rs",
                source_function: "escape_route_luminaires",
            },

            Equation::OpenAreaLuminaires => EquationMetadata {
                name: "Open Area Luminaires",
                description: "Square grid at the occupancy spacing",
                formula_plain: "N = ceil(A / s^2)",
                reference: CodeReference::BSEN1838 { year: 2013, clause: "4.3" },
                variables: vec![
                    Variable::new("A", "Floor area", "m²"),
                    Variable::new("s", "Occupancy spacing", "m"),
                ],
                assumptions: vec!["Unobstructed rectangular floor"],
                category: EquationCategory::LuminaireQuantities,
                source_module: "equations/lighting.rs",
                source_function: "open_area_luminaires",
            },

            Equation::AntiPanicLuminaires => EquationMetadata {
                name: "Anti-Panic Luminaires",
                description: "Additional open-area lighting for rooms over 60 m²",
                formula_plain: "N = ceil(A / 100) when A > 60 and profile requires anti-panic",
                reference: CodeReference::BS5266 { year: 2016, clause: "5.3" },
                variables: vec![Variable::new("A", "Floor area", "m²")],
                assumptions: vec!["One luminaire per 100 m²"],
                category: EquationCategory::LuminaireQuantities,
                source_module: "equations/lighting.rs",
                source_function: "anti_panic_luminaires",
            },

            Equation::HighRiskLuminaires => EquationMetadata {
                name: "High-Risk Task Luminaires",
                description: "Additional lighting where hazardous tasks must be made safe",
                formula_plain: "N = ceil(A / 50)",
                reference: CodeReference::BSEN1838 { year: 2013, clause: "4.4" },
                variables: vec![Variable::new("A", "Floor area", "m²")],
                assumptions: vec!["Applied to the whole floor area"],
                category: EquationCategory::LuminaireQuantities,
                source_module: "equations/lighting.rs",
                source_function: "high_risk_luminaires",
            },

            Equation::BatteryCapacity => EquationMetadata {
                name: "Battery Capacity",
                description: "Central battery capacity for the rated duration with safety margin",
                formula_plain: "C = ceil((P * t / V) * margin); margin = 1.5 hospital, 1.2 otherwise",
                reference: CodeReference::BS5266 { year: 2016, clause: "8.2" },
                variables: vec![
                    Variable::new("P", "Total emergency load", "W"),
                    Variable::new("t", "Rated duration", "h"),
                    Variable::new("V", "Battery voltage", "V"),
                ],
                assumptions: vec!["Constant-power discharge", "End-of-life capacity covered by margin"],
                category: EquationCategory::ElectricalSizing,
                source_module: "equations/lighting.rs",
                source_function: "battery_capacity",
            },

            Equation::CircuitCurrent => EquationMetadata {
                name: "Circuit Current",
                description: "Emergency circuit current at battery voltage",
                formula_plain: "I = P / V",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("P", "Total emergency load", "W"),
                    Variable::new("V", "Battery voltage", "V"),
                ],
                assumptions: vec!["Unity power factor"],
                category: EquationCategory::ElectricalSizing,
                source_module: "equations/lighting.rs",
                source_function: "circuit_current",
            },

            Equation::CableSizeSelection => EquationMetadata {
                name: "Cable Size Selection",
                description: "Conductor size from circuit current thresholds",
                formula_plain: "I<=6A: 1.0mm²; <=10A: 1.5mm²; <=16A: 2.5mm²; <=25A: 4.0mm²; else 6.0mm² or split",
                reference: CodeReference::BS7671 { year: 2018, regulation: "433.1.1" },
                variables: vec![Variable::new("I", "Circuit current", "A")],
                assumptions: vec!["Thresholds inclusive on the smaller size", "Voltage drop checked separately"],
                category: EquationCategory::ElectricalSizing,
                source_module: "profiles/cable.rs",
                source_function: "CableSize::for_current",
            },

            Equation::AverageIlluminance => EquationMetadata {
                name: "Average Illuminance",
                description: "Lumen-method average over the floor",
                formula_plain: "E = N * Phi / A",
                reference: CodeReference::BSEN1838 { year: 2013, clause: "4.2" },
                variables: vec![
                    Variable::new("N", "Total luminaires", "-"),
                    Variable::new("Phi", "Emergency lumens per luminaire", "lm"),
                    Variable::new("A", "Floor area", "m²"),
                ],
                assumptions: vec!["Utilisation and maintenance factors of 1"],
                category: EquationCategory::Photometry,
                source_module: "equations/lighting.rs",
                source_function: "average_illuminance",
            },

            Equation::UniformityRatio => EquationMetadata {
                name: "Uniformity Ratio",
                description: "Achieved over required illuminance, capped at 40",
                formula_plain: "U = min(E / E_req, 40)",
                reference: CodeReference::BSEN1838 { year: 2013, clause: "4.2" },
                variables: vec![
                    Variable::new("E", "Achieved illuminance", "lux"),
                    Variable::new("E_req", "Required illuminance", "lux"),
                ],
                assumptions: vec!["Not the point-by-point max:min ratio"],
                category: EquationCategory::Photometry,
                source_module: "equations/lighting.rs",
                source_function: "uniformity_ratio",
            },

            Equation::SpacingRatio => EquationMetadata {
                name: "Spacing-to-Height Ratio",
                description: "Average luminaire spacing over mounting height",
                formula_plain: "SHR = sqrt(A / N) / H",
                reference: CodeReference::BS5266 { year: 2016, clause: "5.4" },
                variables: vec![Variable::new("H", "Ceiling height", "m")],
                assumptions: vec!["Luminaires evenly distributed"],
                category: EquationCategory::Photometry,
                source_module: "equations/lighting.rs",
                source_function: "spacing_ratio",
            },

            Equation::EstimatedCost => EquationMetadata {
                name: "Estimated Cost",
                description: "Budget cost of luminaires, battery and installation",
                formula_plain: "Cost = N * unit_cost + C * 15 + N * 25",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("N", "Total luminaires", "-"),
                    Variable::new("C", "Battery capacity", "Ah"),
                ],
                assumptions: vec!["£15/Ah battery and £25 per point installation by default"],
                category: EquationCategory::Cost,
                source_module: "equations/lighting.rs",
                source_function: "estimated_cost",
            },
        }
    }

    /// Get all equations in a category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = Vec::new();
        for eq in ALL_EQUATIONS {
            let cat = eq.metadata().category;
            if !categories.contains(&cat) {
                categories.push(cat);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

/// Every equation in the registry
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RodResistance,
    Equation::PlateResistance,
    Equation::StripResistance,
    Equation::MeshResistance,
    Equation::EarthPotentialRise,
    Equation::TouchVoltage,
    Equation::StepVoltage,
    Equation::PermissibleTouchVoltage,
    Equation::PermissibleStepVoltage,
    Equation::BodyCurrent,
    Equation::PhysiologicalZone,
    Equation::EscapeRouteLuminaires,
    Equation::OpenAreaLuminaires,
    Equation::AntiPanicLuminaires,
    Equation::HighRiskLuminaires,
    Equation::BatteryCapacity,
    Equation::CircuitCurrent,
    Equation::CableSizeSelection,
    Equation::AverageIlluminance,
    Equation::UniformityRatio,
    Equation::SpacingRatio,
    Equation::EstimatedCost,
];

/// Equations used by a touch/step voltage calculation
pub fn touch_step_equations() -> Vec<Equation> {
    ALL_EQUATIONS
        .iter()
        .filter(|eq| eq.metadata().category.sort_order() <= EquationCategory::BodyCurrent.sort_order())
        .copied()
        .collect()
}

/// Equations used by an emergency lighting design
pub fn emergency_lighting_equations() -> Vec<Equation> {
    ALL_EQUATIONS
        .iter()
        .filter(|eq| eq.metadata().category.sort_order() > EquationCategory::BodyCurrent.sort_order())
        .copied()
        .collect()
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference document as markdown.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Sparkcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the earthing, touch/step voltage and emergency
lighting calculators, with its source standard and implementing function.

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
