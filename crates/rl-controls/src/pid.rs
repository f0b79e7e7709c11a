//! PID controller.
//!
//! The temperature and pressure loops both run this controller with a
//! fixed control step. There is deliberately no output clamping and no
//! anti-windup: the modeled plant blocks actuation at its hard limits
//! instead, and a blocked loop is rebuilt on the next setpoint change.
//! Unbounded integral growth while the setpoint is unreachable is a known
//! limitation of that scheme.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// PID gain set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            kp: 0.5,
            ki: 0.1,
            kd: 0.01,
        }
    }
}

/// PID controller with an owned setpoint.
///
/// Callers do not retarget a live controller: a setpoint change means
/// constructing a fresh one, which zeroes the integral accumulator and the
/// previous error. That discards any accumulated windup instead of letting
/// it discharge against the new target.
#[derive(Debug, Clone)]
pub struct PidController {
    gains: PidGains,
    set_point: f64,
    integral: f64,
    previous_error: f64,
}

impl PidController {
    pub fn new(gains: PidGains, set_point: f64) -> Self {
        Self {
            gains,
            set_point,
            integral: 0.0,
            previous_error: 0.0,
        }
    }

    pub fn set_point(&self) -> f64 {
        self.set_point
    }

    /// Compute the control output for one step.
    ///
    /// `dt` is the control step in time units; it must be positive since
    /// the derivative term divides by it.
    pub fn update(&mut self, measured: f64, dt: f64) -> ControlResult<f64> {
        if dt <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "dt must be positive",
            });
        }
        let error = self.set_point - measured;
        self.integral += error * dt;
        let derivative = (error - self.previous_error) / dt;
        let output =
            self.gains.kp * error + self.gains.ki * self.integral + self.gains.kd * derivative;
        self.previous_error = error;
        Ok(output)
    }
}
