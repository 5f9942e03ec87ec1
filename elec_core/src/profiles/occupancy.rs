//! Occupancy Profiles (BS 5266-1)
//!
//! Premises types with their minimum emergency illuminance, open-area
//! luminaire spacing and the premises-specific guidance that goes into the
//! regulatory notes of a design.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fire risk rating associated with a premises type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Premises types supported by the emergency lighting designer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OccupancyType {
    Office,
    Retail,
    Industrial,
    Hospital,
    School,
    Hotel,
}

/// Design values for one occupancy type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyProfile {
    /// Minimum maintained illuminance on the floor (lux)
    pub lux: f64,
    /// Open-area luminaire spacing (m)
    pub spacing: f64,
    /// Whether open-area (anti-panic) lighting applies to large rooms
    pub anti_panic_required: bool,
    pub risk_level: RiskLevel,
    pub special_requirements: &'static [&'static str],
}

impl OccupancyType {
    /// All occupancy types, in display order
    pub const ALL: [OccupancyType; 6] = [
        OccupancyType::Office,
        OccupancyType::Retail,
        OccupancyType::Industrial,
        OccupancyType::Hospital,
        OccupancyType::School,
        OccupancyType::Hotel,
    ];

    /// JSON key for this occupancy
    pub fn key(&self) -> &'static str {
        match self {
            OccupancyType::Office => "office",
            OccupancyType::Retail => "retail",
            OccupancyType::Industrial => "industrial",
            OccupancyType::Hospital => "hospital",
            OccupancyType::School => "school",
            OccupancyType::Hotel => "hotel",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            OccupancyType::Office => "Office",
            OccupancyType::Retail => "Retail",
            OccupancyType::Industrial => "Industrial",
            OccupancyType::Hospital => "Hospital / Healthcare",
            OccupancyType::School => "School / Education",
            OccupancyType::Hotel => "Hotel / Sleeping Accommodation",
        }
    }

    /// Design values for this occupancy
    pub fn profile(&self) -> OccupancyProfile {
        match self {
            OccupancyType::Office => OccupancyProfile {
                lux: 1.0,
                spacing: 20.0,
                anti_panic_required: true,
                risk_level: RiskLevel::Low,
                special_requirements: &[
                    "Open-plan areas over 60m² require open-area (anti-panic) lighting",
                    "Illuminate fire alarm call points and firefighting equipment",
                ],
            },
            OccupancyType::Retail => OccupancyProfile {
                lux: 1.0,
                spacing: 15.0,
                anti_panic_required: true,
                risk_level: RiskLevel::Medium,
                special_requirements: &[
                    "Sales floors used by the public are treated as open areas",
                    "Illuminate tills and cash handling points for safe shutdown",
                    "Aisles forming part of an escape route need route lighting",
                ],
            },
            OccupancyType::Industrial => OccupancyProfile {
                lux: 0.5,
                spacing: 25.0,
                anti_panic_required: false,
                risk_level: RiskLevel::High,
                special_requirements: &[
                    "High-risk task lighting at dangerous machinery and process areas",
                    "Allow for safe shutdown of processes before evacuation",
                ],
            },
            OccupancyType::Hospital => OccupancyProfile {
                lux: 5.0,
                spacing: 10.0,
                anti_panic_required: true,
                risk_level: RiskLevel::High,
                special_requirements: &[
                    "Progressive horizontal evacuation routes must remain lit",
                    "Clinical and critical care areas need enhanced illuminance",
                    "Coordinate with standby generator changeover times",
                ],
            },
            OccupancyType::School => OccupancyProfile {
                lux: 1.0,
                spacing: 18.0,
                anti_panic_required: true,
                risk_level: RiskLevel::Medium,
                special_requirements: &[
                    "Assembly and sports halls require open-area lighting",
                    "Consider out-of-hours community use when setting duration",
                ],
            },
            OccupancyType::Hotel => OccupancyProfile {
                lux: 1.0,
                spacing: 20.0,
                anti_panic_required: true,
                risk_level: RiskLevel::Medium,
                special_requirements: &[
                    "Sleeping risk premises require 3-hour duration",
                    "Illuminate corridors between bedrooms and final exits",
                ],
            },
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "office" | "offices" => Ok(OccupancyType::Office),
            "retail" | "shop" => Ok(OccupancyType::Retail),
            "industrial" | "factory" | "warehouse" => Ok(OccupancyType::Industrial),
            "hospital" | "healthcare" => Ok(OccupancyType::Hospital),
            "school" | "education" => Ok(OccupancyType::School),
            "hotel" => Ok(OccupancyType::Hotel),
            _ => Err(CalcError::unknown_option(
                "occupancyType",
                s,
                &OccupancyType::ALL.map(|o| o.key()),
            )),
        }
    }
}

impl fmt::Display for OccupancyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for OccupancyType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OccupancyType::from_str_flexible(s)
    }
}

impl TryFrom<String> for OccupancyType {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        OccupancyType::from_str_flexible(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lux_and_spacing() {
        let expected = [
            (OccupancyType::Office, 1.0, 20.0),
            (OccupancyType::Retail, 1.0, 15.0),
            (OccupancyType::Industrial, 0.5, 25.0),
            (OccupancyType::Hospital, 5.0, 10.0),
            (OccupancyType::School, 1.0, 18.0),
            (OccupancyType::Hotel, 1.0, 20.0),
        ];
        for (occ, lux, spacing) in expected {
            let p = occ.profile();
            assert_eq!(p.lux, lux, "{}", occ.key());
            assert_eq!(p.spacing, spacing, "{}", occ.key());
            assert!(!p.special_requirements.is_empty());
        }
    }

    #[test]
    fn test_json_keys() {
        let occ: OccupancyType = serde_json::from_str("\"hospital\"").unwrap();
        assert_eq!(occ, OccupancyType::Hospital);
        assert_eq!(serde_json::to_string(&OccupancyType::School).unwrap(), "\"school\"");
        assert!(serde_json::from_str::<OccupancyType>("\"stadium\"").is_err());
    }

    #[test]
    fn test_unknown_occupancy_names_field() {
        let err = OccupancyType::from_str_flexible("stadium").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("occupancyType"));
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }
}
