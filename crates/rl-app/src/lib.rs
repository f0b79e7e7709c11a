//! Shared application service layer for reactorlab.
//!
//! Front ends (CLI today, a control-panel GUI tomorrow) talk to the
//! simulator through this crate: configuration loading and validation,
//! scenario parsing, scenario execution, and report export.

pub mod config_service;
pub mod error;
pub mod run_service;
pub mod scenario;

// Re-export key types for convenience
pub use config_service::{load_config, save_config};
pub use error::{AppError, AppResult};
pub use run_service::{RunOptions, RunSummary, run_scenario};
pub use scenario::{
    ChartId, FlowId, Scenario, ScenarioAction, ScenarioEvent, SwitchId, load_scenario,
};
