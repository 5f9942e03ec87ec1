//! Emergency Lighting Circuit Cable Sizes
//!
//! Current-threshold lookup for the low-voltage battery circuit feeding the
//! luminaires. Thresholds are inclusive on the smaller size.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conductor size selected for an emergency lighting circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CableSize {
    Mm1_0,
    Mm1_5,
    Mm2_5,
    Mm4_0,
    /// Above 25 A: 6.0mm² or split the load over more circuits
    Mm6_0OrSplit,
}

impl CableSize {
    /// All sizes with their upper current limit (A), smallest first
    pub const THRESHOLDS: [(f64, CableSize); 4] = [
        (6.0, CableSize::Mm1_0),
        (10.0, CableSize::Mm1_5),
        (16.0, CableSize::Mm2_5),
        (25.0, CableSize::Mm4_0),
    ];

    /// Select the conductor for a circuit current in amperes
    pub fn for_current(amps: f64) -> CableSize {
        CableSize::THRESHOLDS
            .iter()
            .find(|(limit, _)| amps <= *limit)
            .map(|(_, size)| *size)
            .unwrap_or(CableSize::Mm6_0OrSplit)
    }

    /// Label as reported in results
    pub fn label(&self) -> &'static str {
        match self {
            CableSize::Mm1_0 => "1.0mm²",
            CableSize::Mm1_5 => "1.5mm²",
            CableSize::Mm2_5 => "2.5mm²",
            CableSize::Mm4_0 => "4.0mm²",
            CableSize::Mm6_0OrSplit => "6.0mm² or distribute across multiple circuits",
        }
    }

    /// True when the design should be split over several circuits
    pub fn requires_split(&self) -> bool {
        matches!(self, CableSize::Mm6_0OrSplit)
    }
}

impl fmt::Display for CableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<CableSize> for String {
    fn from(size: CableSize) -> Self {
        size.label().to_string()
    }
}

impl TryFrom<String> for CableSize {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        [
            CableSize::Mm1_0,
            CableSize::Mm1_5,
            CableSize::Mm2_5,
            CableSize::Mm4_0,
            CableSize::Mm6_0OrSplit,
        ]
        .into_iter()
        .find(|size| size.label() == s)
        .ok_or_else(|| format!("Unknown cable size label: {}", s))
    }
}
