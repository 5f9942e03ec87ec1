//! # Reference Profiles
//!
//! Closed lookup tables the calculators draw their constants from. Every
//! table is an enum with an exhaustive `match`, so an unknown key can only
//! arrive as a parse error (with the offending field named), never as a
//! silent missing value.
//!
//! ## Tables
//!
//! - **Soil**: named resistivity presets for earthing design
//! - **Occupancy**: BS 5266-1 premises profiles (lux, spacing, anti-panic)
//! - **Fixture**: emergency luminaire catalogue (W, lm, £)
//! - **Cable**: circuit current to conductor size thresholds
//!
//! ## Example
//!
//! ```rust
//! use elec_core::profiles::{FixtureType, OccupancyType, SoilType};
//!
//! assert_eq!(SoilType::Loam.resistivity_ohm_m(), 80.0);
//! assert_eq!(OccupancyType::Hospital.profile().lux, 5.0);
//! assert_eq!(FixtureType::LedHigh.profile().lumens, 400.0);
//! ```

pub mod cable;
pub mod fixture;
pub mod occupancy;
pub mod soil;

pub use cable::CableSize;
pub use fixture::{FixtureProfile, FixtureType};
pub use occupancy::{OccupancyProfile, OccupancyType, RiskLevel};
pub use soil::{SoilResistivity, SoilType};
