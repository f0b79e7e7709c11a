//! Discrete-time reactor simulation for reactorlab.
//!
//! Provides:
//! - a single owned `SimulationState` advanced by a fixed-order fast tick
//! - volume/level model with capacity auto-stop and proportional drain
//! - PID-regulated temperature and pressure with hard-limit blocking
//! - edge-triggered operator action log
//! - slow-tick chart trace sampling
//!
//! The host (CLI or GUI) owns the pacing: it calls `Simulation::tick` at
//! the fast cadence and `Simulation::poll_slow_tick` in the same loop.

pub mod clock;
pub mod error;
pub mod events;
pub mod sampling;
pub mod sim;
pub mod state;

// Internal modules
mod regulated;
mod volume;

// Re-exports for public API
pub use clock::{FAST_TICK_MS, SLOW_TICK_MS, TickClock};
pub use error::{SimError, SimResult};
pub use events::{ActionLog, ActionLogEntry, STATUS_COMPLETED};
pub use sampling::{CHART_TIME_STEP, ChartSet, PressureTrace, ThermalTrace, VolumeTrace};
pub use sim::{FlowKind, OperatorInputs, Phase, Simulation, TickOutcome};
pub use state::{MotorAnimationState, RegulatorAction, SimulationState};
