//! Soil Resistivity Presets
//!
//! Typical resistivities for UK ground conditions. Site measurement
//! (Wenner four-pole method) always beats a preset; these are for
//! feasibility checks before a survey exists.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Named soil types with a representative resistivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SoilType {
    Clay,
    Sand,
    Chalk,
    Rock,
    Loam,
    Gravel,
}

impl SoilType {
    /// All presets, in display order
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sand,
        SoilType::Chalk,
        SoilType::Rock,
        SoilType::Loam,
        SoilType::Gravel,
    ];

    /// JSON key for this preset
    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sand => "sand",
            SoilType::Chalk => "chalk",
            SoilType::Rock => "rock",
            SoilType::Loam => "loam",
            SoilType::Gravel => "gravel",
        }
    }

    /// Representative resistivity ρ in Ω·m
    pub fn resistivity_ohm_m(&self) -> f64 {
        match self {
            SoilType::Clay => 40.0,
            SoilType::Sand => 200.0,
            SoilType::Chalk => 100.0,
            SoilType::Rock => 1000.0,
            SoilType::Loam => 80.0,
            SoilType::Gravel => 300.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sand => "Sand",
            SoilType::Chalk => "Chalk",
            SoilType::Rock => "Rock",
            SoilType::Loam => "Loam",
            SoilType::Gravel => "Gravel",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Ok(SoilType::Clay),
            "sand" | "sandy" => Ok(SoilType::Sand),
            "chalk" => Ok(SoilType::Chalk),
            "rock" | "rocky" => Ok(SoilType::Rock),
            "loam" => Ok(SoilType::Loam),
            "gravel" => Ok(SoilType::Gravel),
            _ => Err(CalcError::unknown_option(
                "soilResistivity",
                s,
                &SoilType::ALL.map(|t| t.key()),
            )),
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SoilType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::from_str_flexible(s)
    }
}

impl TryFrom<String> for SoilType {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SoilType::from_str_flexible(&s)
    }
}

/// Soil resistivity as supplied by the caller: either a measured value
/// or a named preset.
///
/// ## JSON
///
/// ```json
/// { "soilResistivity": 85.5 }
/// { "soilResistivity": "loam" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoilResistivity {
    /// Measured or estimated value in Ω·m
    Measured(f64),
    /// One of the named presets
    Preset(SoilType),
}

impl SoilResistivity {
    /// Resolve to ρ in Ω·m
    pub fn ohm_metres(&self) -> f64 {
        match self {
            SoilResistivity::Measured(rho) => *rho,
            SoilResistivity::Preset(soil) => soil.resistivity_ohm_m(),
        }
    }

    /// Reject non-positive measured values
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            SoilResistivity::Measured(rho) => require_positive("soilResistivity", *rho, "Soil resistivity"),
            SoilResistivity::Preset(_) => Ok(()),
        }
    }
}

impl From<SoilType> for SoilResistivity {
    fn from(soil: SoilType) -> Self {
        SoilResistivity::Preset(soil)
    }
}

impl FromStr for SoilResistivity {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(rho) => Ok(SoilResistivity::Measured(rho)),
            Err(_) => SoilType::from_str_flexible(s).map(SoilResistivity::Preset),
        }
    }
}

impl Serialize for SoilResistivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SoilResistivity::Measured(rho) => serializer.serialize_f64(*rho),
            SoilResistivity::Preset(soil) => serializer.serialize_str(soil.key()),
        }
    }
}

impl<'de> Deserialize<'de> for SoilResistivity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResistivityVisitor;

        impl Visitor<'_> for ResistivityVisitor {
            type Value = SoilResistivity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a resistivity in ohm-metres or a soil preset name")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(SoilResistivity::Measured(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(SoilResistivity::Measured(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(SoilResistivity::Measured(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                SoilType::from_str_flexible(v)
                    .map(SoilResistivity::Preset)
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ResistivityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(SoilType::Clay.resistivity_ohm_m(), 40.0);
        assert_eq!(SoilType::Sand.resistivity_ohm_m(), 200.0);
        assert_eq!(SoilType::Chalk.resistivity_ohm_m(), 100.0);
        assert_eq!(SoilType::Rock.resistivity_ohm_m(), 1000.0);
        assert_eq!(SoilType::Loam.resistivity_ohm_m(), 80.0);
        assert_eq!(SoilType::Gravel.resistivity_ohm_m(), 300.0);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(SoilType::from_str_flexible("LOAM").unwrap(), SoilType::Loam);
        assert_eq!(SoilType::from_str_flexible(" gravel ").unwrap(), SoilType::Gravel);
        let err = SoilType::from_str_flexible("peat").unwrap_err();
        assert_eq!(err.field(), Some("soilResistivity"));
    }

    #[test]
    fn test_resistivity_json_forms() {
        let measured: SoilResistivity = serde_json::from_str("85.5").unwrap();
        assert_eq!(measured.ohm_metres(), 85.5);

        let integer: SoilResistivity = serde_json::from_str("120").unwrap();
        assert_eq!(integer.ohm_metres(), 120.0);

        let preset: SoilResistivity = serde_json::from_str("\"chalk\"").unwrap();
        assert_eq!(preset, SoilResistivity::Preset(SoilType::Chalk));
        assert_eq!(serde_json::to_string(&preset).unwrap(), "\"chalk\"");

        let bad = serde_json::from_str::<SoilResistivity>("\"peat\"").unwrap_err();
        assert!(bad.to_string().contains("soilResistivity"));
    }

    #[test]
    fn test_resistivity_from_str() {
        assert_eq!("300".parse::<SoilResistivity>().unwrap().ohm_metres(), 300.0);
        assert_eq!("rock".parse::<SoilResistivity>().unwrap().ohm_metres(), 1000.0);
        assert!("swamp".parse::<SoilResistivity>().is_err());
    }

    #[test]
    fn test_validate_measured() {
        assert!(SoilResistivity::Measured(0.0).validate().is_err());
        assert!(SoilResistivity::Measured(-40.0).validate().is_err());
        assert!(SoilResistivity::Preset(SoilType::Clay).validate().is_ok());
    }
}
