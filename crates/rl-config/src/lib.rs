//! rl-config: run configuration schema and validation.
//!
//! Pure data: serde structs plus an invariant-checking pass. Reading and
//! writing config files is the service layer's job (rl-app).

pub mod schema;
pub mod validate;

pub use schema::{
    FlowDef, FlowsSection, GainsDef, IdentitySection, PressureSection, ReactorConfig,
    TemperatureSection, VolumeSection,
};
pub use validate::{ValidationError, validate_config};
