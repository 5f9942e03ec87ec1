//! # elec_core - Electrical Safety Calculation Engine
//!
//! `elec_core` is the computational heart of Sparkcalc: pure, stateless
//! calculators that turn installation parameters into compliance results
//! against UK safety standards (BS 7671, BS 5266-1, BS EN 50522,
//! IEC 60479-1). All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//! - **Closed option sets**: Soil, occupancy, fixture and electrode types are enums
//!
//! ## Quick Start
//!
//! ```rust
//! use elec_core::calculations::touch_step::{calculate, ContactScenario, TouchStepInput};
//! use elec_core::calculations::electrode::{ElectrodeDimensions, ElectrodeType};
//! use elec_core::profiles::{SoilResistivity, SoilType};
//!
//! let input = TouchStepInput {
//!     label: "Rod A".to_string(),
//!     earth_fault_current: 10.0,
//!     soil_resistivity: SoilResistivity::Preset(SoilType::Loam),
//!     electrode_type: ElectrodeType::Rod,
//!     electrode_dimensions: ElectrodeDimensions::default(),
//!     fault_duration: 0.3,
//!     contact_scenario: ContactScenario::Touch,
//!     body_impedance: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("passOrFail"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Electrode, touch/step and emergency lighting calculators
//! - [`equations`] - Formula functions and the equation registry
//! - [`profiles`] - Soil, occupancy, fixture and cable lookup tables
//! - [`settings`] - Overridable design constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod profiles;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run, CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use settings::DesignSettings;
