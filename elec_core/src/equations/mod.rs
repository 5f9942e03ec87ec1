//! # Electrical Engineering Equations
//!
//! Every formula the calculators evaluate lives here as a small pure
//! function over `f64` or unit newtypes. Keeping them in one place means
//! each one can be checked against its source standard in isolation.
//!
//! ## Modules
//!
//! - [`earthing`] - Electrode resistance, EPR, touch/step voltages, limits
//! - [`lighting`] - Emergency luminaire quantities, battery, photometry, cost
//! - [`registry`] - Equation metadata and the markdown reference generator
//!
//! ## References
//!
//! - BS 7430:2011+A1:2015 Protective earthing
//! - BS EN 50522:2010 / ENA TS 41-24 Earthing of power installations
//! - IEC 60479-1 Effects of current on human beings
//! - BS 5266-1:2016 / BS EN 1838:2013 Emergency lighting

pub mod earthing;
pub mod lighting;
pub mod registry;

pub use earthing::{
    body_current,
    earth_potential_rise,
    mesh_resistance,
    permissible_step_voltage,
    permissible_touch_voltage,
    plate_resistance,
    rod_resistance,
    step_voltage,
    strip_resistance,
    touch_voltage,
};

pub use lighting::{
    anti_panic_luminaires,
    average_illuminance,
    battery_capacity,
    circuit_current,
    escape_route_luminaires,
    estimated_cost,
    high_risk_luminaires,
    open_area_luminaires,
    spacing_ratio,
    total_power,
    uniformity_ratio,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    emergency_lighting_equations,
    generate_equations_markdown,
    touch_step_equations,
};
