//! Simulation state owned by the orchestrator.
//!
//! One `SimulationState` per run, passed by reference into each model
//! step. Everything a renderer needs to draw the reactor is here; nothing
//! is stashed in widget properties or globals.

use rl_controls::{LevelStatus, SafetyStatus};
use rl_core::percent_of;

/// What the thermal loop is currently doing, for the panel indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegulatorAction {
    #[default]
    Idle,
    Raising,
    Lowering,
}

/// Motor icon rest width in panel pixels.
pub const MOTOR_REST_WIDTH: f64 = 90.0;
/// Motor icon rest x position.
pub const MOTOR_REST_X: f64 = 860.0;
/// Midline the oscillating icon is centered on.
pub const MOTOR_CENTER_X: f64 = MOTOR_REST_X + MOTOR_REST_WIDTH / 2.0;
/// Width at which the oscillation reverses to expansion.
pub const MOTOR_MIN_WIDTH: f64 = 1.0;

/// Mixing-motor animation state.
///
/// The icon "spins" by shrinking and growing about its midline at a pace
/// set by the mixing rate. Held explicitly so rendering stays a pure
/// function of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorAnimationState {
    pub width: f64,
    pub x: f64,
    pub expanding: bool,
}

impl Default for MotorAnimationState {
    fn default() -> Self {
        Self::rest()
    }
}

impl MotorAnimationState {
    pub fn rest() -> Self {
        Self {
            width: MOTOR_REST_WIDTH,
            x: MOTOR_REST_X,
            expanding: false,
        }
    }

    /// Advance the oscillation by one tick at the given motor speed.
    pub fn step(&mut self, motor_speed: f64) {
        let width_change = 2.0 * motor_speed;
        if self.expanding {
            self.width += width_change;
        } else {
            self.width -= width_change;
        }
        self.x = MOTOR_CENTER_X - self.width / 2.0;
        if self.width <= MOTOR_MIN_WIDTH {
            self.expanding = true;
        } else if self.width >= MOTOR_REST_WIDTH {
            self.expanding = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::rest();
    }
}

/// Mutable physical state of the reactor, one instance per run.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Total liquid volume, liters.
    pub volume_total_l: f64,
    /// Reagent volumes, liters. Sum to the total within tolerance.
    pub volume_reagent1_l: f64,
    pub volume_reagent2_l: f64,

    pub temperature_c: f64,
    pub pressure_atm: f64,

    pub level_status: LevelStatus,
    pub temperature_status: SafetyStatus,
    pub pressure_status: SafetyStatus,

    /// True when actuation was auto-disabled at a hard limit.
    pub temperature_blocked: bool,
    pub pressure_blocked: bool,

    pub thermal_action: RegulatorAction,
    pub motor: MotorAnimationState,

    /// Wall-run timer: nominal milliseconds accumulated while any
    /// operator control is on. Resettable from the panel.
    pub run_time_ms: f64,
    pub run_timer_active: bool,
}

impl SimulationState {
    pub fn new(ambient_c: f64, ambient_atm: f64) -> Self {
        Self {
            volume_total_l: 0.0,
            volume_reagent1_l: 0.0,
            volume_reagent2_l: 0.0,
            temperature_c: ambient_c,
            pressure_atm: ambient_atm,
            level_status: LevelStatus::Unusable,
            temperature_status: SafetyStatus::Nominal,
            pressure_status: SafetyStatus::Nominal,
            temperature_blocked: false,
            pressure_blocked: false,
            thermal_action: RegulatorAction::Idle,
            motor: MotorAnimationState::rest(),
            run_time_ms: 0.0,
            run_timer_active: false,
        }
    }

    /// Fill level as a percentage of capacity.
    pub fn fill_percent(&self, capacity_l: f64) -> f64 {
        percent_of(self.volume_total_l, capacity_l)
    }

    /// Reagent share of the mix, percent. Reported as 0 while the vessel
    /// holds no more than 1% of capacity.
    pub fn reagent1_share_percent(&self, capacity_l: f64) -> f64 {
        self.share_percent(self.volume_reagent1_l, capacity_l)
    }

    pub fn reagent2_share_percent(&self, capacity_l: f64) -> f64 {
        self.share_percent(self.volume_reagent2_l, capacity_l)
    }

    fn share_percent(&self, reagent_l: f64, capacity_l: f64) -> f64 {
        if self.volume_total_l > capacity_l * 0.01 {
            percent_of(reagent_l, self.volume_total_l)
        } else {
            0.0
        }
    }

    /// Run timer formatted for the panel clock.
    pub fn run_time_hms(&self) -> String {
        let seconds = (self.run_time_ms / 1000.0) as u64;
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }
}
