//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while advancing the simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Control error: {0}")]
    Control(#[from] rl_controls::ControlError),

    #[error("Core error: {0}")]
    Core(#[from] rl_core::CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
