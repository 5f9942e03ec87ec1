//! # Earth Electrode Geometry
//!
//! Resolves the caller's electrode description (a type key plus an optional
//! bag of dimensions) into a fully specified [`ElectrodeGeometry`], filling
//! omitted dimensions with typical UK installation values, and evaluates
//! the matching resistance formula.
//!
//! ## Defaults
//!
//! | Type  | Dimension | Default |
//! |-------|-----------|---------|
//! | rod   | length | 2.4 m |
//! | rod   | diameter | 16 mm |
//! | plate | area | 1.0 m² |
//! | strip | length / width / depth | 10 m / 25 mm / 0.5 m |
//! | mesh  | area / total conductor | 100 m² / 200 m |
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::electrode::{ElectrodeDimensions, ElectrodeGeometry, ElectrodeType};
//!
//! let rod = ElectrodeGeometry::resolve(ElectrodeType::Rod, &ElectrodeDimensions::default()).unwrap();
//! assert_eq!(rod, ElectrodeGeometry::Rod { length: 2.4, diameter: 0.016 });
//!
//! let ohms = rod.resistance(80.0);
//! assert!((ohms - 33.94).abs() < 0.1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::earthing::{mesh_resistance, plate_resistance, rod_resistance, strip_resistance};
use crate::equations::registry::Equation;
use crate::errors::{require_positive, CalcError, CalcResult};

pub const DEFAULT_ROD_LENGTH_M: f64 = 2.4;
pub const DEFAULT_ROD_DIAMETER_M: f64 = 0.016;
pub const DEFAULT_PLATE_AREA_M2: f64 = 1.0;
pub const DEFAULT_STRIP_LENGTH_M: f64 = 10.0;
pub const DEFAULT_STRIP_WIDTH_M: f64 = 0.025;
pub const DEFAULT_STRIP_DEPTH_M: f64 = 0.5;
pub const DEFAULT_MESH_AREA_M2: f64 = 100.0;
pub const DEFAULT_MESH_CONDUCTOR_LENGTH_M: f64 = 200.0;

/// Electrode shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ElectrodeType {
    /// Vertical driven rod
    Rod,
    /// Buried plate
    Plate,
    /// Horizontal strip or tape
    Strip,
    /// Grid of buried conductors
    Mesh,
}

impl ElectrodeType {
    pub const ALL: [ElectrodeType; 4] = [
        ElectrodeType::Rod,
        ElectrodeType::Plate,
        ElectrodeType::Strip,
        ElectrodeType::Mesh,
    ];

    /// JSON key for this electrode type
    pub fn key(&self) -> &'static str {
        match self {
            ElectrodeType::Rod => "rod",
            ElectrodeType::Plate => "plate",
            ElectrodeType::Strip => "strip",
            ElectrodeType::Mesh => "mesh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ElectrodeType::Rod => "Driven Rod",
            ElectrodeType::Plate => "Plate",
            ElectrodeType::Strip => "Horizontal Strip",
            ElectrodeType::Mesh => "Mesh / Grid",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rod" | "driven-rod" => Ok(ElectrodeType::Rod),
            "plate" => Ok(ElectrodeType::Plate),
            "strip" | "tape" => Ok(ElectrodeType::Strip),
            "mesh" | "grid" => Ok(ElectrodeType::Mesh),
            _ => Err(CalcError::unknown_option(
                "electrodeType",
                s,
                &ElectrodeType::ALL.map(|t| t.key()),
            )),
        }
    }
}

impl fmt::Display for ElectrodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ElectrodeType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElectrodeType::from_str_flexible(s)
    }
}

impl TryFrom<String> for ElectrodeType {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ElectrodeType::from_str_flexible(&s)
    }
}

/// Electrode dimensions as supplied by the caller (metres, m²).
///
/// Every field is optional. Fields that do not apply to the chosen
/// electrode type are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectrodeDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_conductor_length: Option<f64>,
}

/// Fully specified electrode, one variant per shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "electrodeType", rename_all = "lowercase")]
pub enum ElectrodeGeometry {
    Rod {
        length: f64,
        diameter: f64,
    },
    Plate {
        area: f64,
    },
    Strip {
        length: f64,
        width: f64,
        depth: f64,
    },
    Mesh {
        area: f64,
        #[serde(rename = "totalConductorLength")]
        total_conductor_length: f64,
    },
}

/// Take a supplied dimension or its default, rejecting non-positive values.
fn dimension(field: &str, value: Option<f64>, default: f64) -> CalcResult<f64> {
    let v = value.unwrap_or(default);
    require_positive(field, v, "Electrode dimension")?;
    Ok(v)
}

impl ElectrodeGeometry {
    /// Apply defaults for omitted dimensions and validate the result.
    pub fn resolve(electrode_type: ElectrodeType, dims: &ElectrodeDimensions) -> CalcResult<Self> {
        let geometry = match electrode_type {
            ElectrodeType::Rod => ElectrodeGeometry::Rod {
                length: dimension("electrodeDimensions.length", dims.length, DEFAULT_ROD_LENGTH_M)?,
                diameter: dimension("electrodeDimensions.diameter", dims.diameter, DEFAULT_ROD_DIAMETER_M)?,
            },
            ElectrodeType::Plate => ElectrodeGeometry::Plate {
                area: dimension("electrodeDimensions.area", dims.area, DEFAULT_PLATE_AREA_M2)?,
            },
            ElectrodeType::Strip => ElectrodeGeometry::Strip {
                length: dimension("electrodeDimensions.length", dims.length, DEFAULT_STRIP_LENGTH_M)?,
                width: dimension("electrodeDimensions.width", dims.width, DEFAULT_STRIP_WIDTH_M)?,
                depth: dimension("electrodeDimensions.depth", dims.depth, DEFAULT_STRIP_DEPTH_M)?,
            },
            ElectrodeType::Mesh => ElectrodeGeometry::Mesh {
                area: dimension("electrodeDimensions.area", dims.area, DEFAULT_MESH_AREA_M2)?,
                total_conductor_length: dimension(
                    "electrodeDimensions.totalConductorLength",
                    dims.total_conductor_length,
                    DEFAULT_MESH_CONDUCTOR_LENGTH_M,
                )?,
            },
        };
        Ok(geometry)
    }

    pub fn electrode_type(&self) -> ElectrodeType {
        match self {
            ElectrodeGeometry::Rod { .. } => ElectrodeType::Rod,
            ElectrodeGeometry::Plate { .. } => ElectrodeType::Plate,
            ElectrodeGeometry::Strip { .. } => ElectrodeType::Strip,
            ElectrodeGeometry::Mesh { .. } => ElectrodeType::Mesh,
        }
    }

    /// Resistance to remote earth (Ω) in soil of resistivity `rho` (Ω·m).
    ///
    /// Unvalidated: geometry built by hand with zero or negative
    /// dimensions gives `NaN`, `inf` or a negative value.
    pub fn resistance(&self, rho: f64) -> f64 {
        match *self {
            ElectrodeGeometry::Rod { length, diameter } => rod_resistance(rho, length, diameter),
            ElectrodeGeometry::Plate { area } => plate_resistance(rho, area),
            ElectrodeGeometry::Strip { length, width, depth } => strip_resistance(rho, length, width, depth),
            ElectrodeGeometry::Mesh { area, total_conductor_length } => {
                mesh_resistance(rho, area, total_conductor_length)
            }
        }
    }

    /// The registry equation used for this shape
    pub fn equation(&self) -> Equation {
        match self {
            ElectrodeGeometry::Rod { .. } => Equation::RodResistance,
            ElectrodeGeometry::Plate { .. } => Equation::PlateResistance,
            ElectrodeGeometry::Strip { .. } => Equation::StripResistance,
            ElectrodeGeometry::Mesh { .. } => Equation::MeshResistance,
        }
    }
}

/// Electrode resistance for a soil resistivity and geometry.
pub fn electrode_resistance(rho: f64, geometry: &ElectrodeGeometry) -> f64 {
    geometry.resistance(rho)
}
