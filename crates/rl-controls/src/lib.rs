//! Feedback control and safety classification primitives for reactorlab.
//!
//! Two small domains live here:
//! - a PID controller driving one scalar process variable toward a
//!   setpoint, updated once per simulation tick;
//! - a threshold classifier mapping a measurement and its warning/limit
//!   band to a discrete safety status.
//!
//! Signals are scalar `f64` values throughout. Physical units belong to
//! the model layer; by the time a value reaches a controller or the
//! classifier it is a plain number.

pub mod classifier;
pub mod error;
pub mod pid;

pub use classifier::{LevelStatus, SafetyStatus, classify, classify_level};
pub use error::{ControlError, ControlResult};
pub use pid::{PidController, PidGains};
