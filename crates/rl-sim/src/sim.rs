//! Tick orchestrator.
//!
//! `Simulation` owns the configuration, the physical state, the two PID
//! loops, the action log and the chart buffers. The host drives it with
//! two cooperative callbacks: `tick` at the fast cadence and
//! `poll_slow_tick` for chart sampling. Within one fast tick the model
//! order is fixed: clock/run-timer bookkeeping, volume, mixing, thermal,
//! pressure, action-log diffing, termination check.

use chrono::NaiveTime;

use crate::clock::{FAST_TICK_MS, TickClock};
use crate::error::SimResult;
use crate::events::ActionLog;
use crate::regulated::RegulatedVariable;
use crate::sampling::ChartSet;
use crate::state::SimulationState;
use crate::volume;
use rl_config::ReactorConfig;
use rl_controls::{LevelStatus, PidGains, classify};
use rl_core::ensure_finite;

/// Mixing dial units per motor-speed unit.
const MIXING_RATE_DIVISOR: f64 = 20.0;

/// Fraction of capacity below which the volume chart stops recording.
const VOLUME_CHART_FLOOR: f64 = 0.001;

pub const TEXT_FEED1_ON: &str = "Reagent 1 feed enabled";
pub const TEXT_FEED1_OFF: &str = "Reagent 1 feed disabled";
pub const TEXT_FEED2_ON: &str = "Reagent 2 feed enabled";
pub const TEXT_FEED2_OFF: &str = "Reagent 2 feed disabled";
pub const TEXT_MIXING_ON: &str = "Mixing enabled";
pub const TEXT_MIXING_OFF: &str = "Mixing disabled";
pub const TEXT_DISCHARGE_ON: &str = "Discharge enabled";
pub const TEXT_DISCHARGE_OFF: &str = "Discharge disabled";
pub const TEXT_THERMAL_ON: &str = "Temperature control enabled";
pub const TEXT_THERMAL_OFF: &str = "Temperature control disabled";
pub const TEXT_PRESSURE_ON: &str = "Pressure control enabled";
pub const TEXT_PRESSURE_OFF: &str = "Pressure control disabled";
pub const TEXT_SHUTDOWN: &str = "All processes stopped. Simulation shut down.";

/// Live operator inputs, checkbox semantics: the operator may flip any of
/// these between ticks, and the simulation writes some of them back
/// (feeds stop at capacity, modes drop on block or convergence).
#[derive(Debug, Default, Clone, Copy)]
pub struct OperatorInputs {
    pub feed_reagent1: bool,
    pub feed_reagent2: bool,
    pub discharge: bool,
    pub mixing: bool,
    pub thermal_mode: bool,
    pub pressure_mode: bool,
    /// Stop everything and hand the log over for export.
    pub stop: bool,
    /// One-shot chart/timer resets; cleared once honored.
    pub reset_thermal_chart: bool,
    pub reset_volume_chart: bool,
    pub reset_pressure_chart: bool,
    pub reset_run_timer: bool,
}

/// Operator-adjustable rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Reagent1,
    Reagent2,
    Discharge,
    Mixing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// What a fast tick left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Terminal: the final log row has been appended; the host should
    /// export the report. Further ticks are inert.
    Stopped,
}

#[derive(Debug, Default, Clone, Copy)]
struct TrackedSwitches {
    feed_reagent1: bool,
    feed_reagent2: bool,
    mixing: bool,
    discharge: bool,
    thermal_mode: bool,
    pressure_mode: bool,
}

impl TrackedSwitches {
    fn snapshot(inputs: &OperatorInputs) -> Self {
        Self {
            feed_reagent1: inputs.feed_reagent1,
            feed_reagent2: inputs.feed_reagent2,
            mixing: inputs.mixing,
            discharge: inputs.discharge,
            thermal_mode: inputs.thermal_mode,
            pressure_mode: inputs.pressure_mode,
        }
    }
}

pub struct Simulation {
    config: ReactorConfig,
    state: SimulationState,
    clock: TickClock,
    inputs: OperatorInputs,
    previous: TrackedSwitches,
    log: ActionLog,
    charts: ChartSet,
    thermal: Option<RegulatedVariable>,
    pressure: Option<RegulatedVariable>,
    started: bool,
    phase: Phase,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    pub fn new(config: ReactorConfig) -> Self {
        let state = SimulationState::new(config.temperature.ambient_c, config.pressure.ambient_atm);
        Self {
            config,
            state,
            clock: TickClock::new(),
            inputs: OperatorInputs::default(),
            previous: TrackedSwitches::default(),
            log: ActionLog::new(),
            charts: ChartSet::default(),
            thermal: None,
            pressure: None,
            started: false,
            phase: Phase::Running,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &ReactorConfig {
        &self.config
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn inputs(&self) -> &OperatorInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut OperatorInputs {
        &mut self.inputs
    }

    pub fn sim_time_ms(&self) -> f64 {
        self.clock.sim_time_ms()
    }

    pub fn speed(&self) -> u32 {
        self.clock.speed()
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.clock.set_speed(speed);
    }

    /// Patch the thermal setpoint mid-run, clamped to the limit band the
    /// way the panel's spin box constrains it.
    pub fn set_ideal_temperature(&mut self, value_c: f64) -> SimResult<()> {
        let value_c = ensure_finite(value_c, "ideal temperature")?;
        let b = &self.config.temperature.bounds_c;
        self.config.temperature.ideal_c = value_c.clamp(b.limit_min, b.limit_max);
        Ok(())
    }

    pub fn set_ideal_pressure(&mut self, value_atm: f64) -> SimResult<()> {
        let value_atm = ensure_finite(value_atm, "ideal pressure")?;
        let b = &self.config.pressure.bounds_atm;
        self.config.pressure.ideal_atm = value_atm.clamp(b.limit_min, b.limit_max);
        Ok(())
    }

    /// Patch a rate mid-run, clamped to its configured range the way the
    /// panel dials constrain it.
    pub fn set_flow(&mut self, kind: FlowKind, value: f64) -> SimResult<()> {
        let value = ensure_finite(value, "flow rate")?;
        let flow = match kind {
            FlowKind::Reagent1 => &mut self.config.flows.reagent1,
            FlowKind::Reagent2 => &mut self.config.flows.reagent2,
            FlowKind::Discharge => &mut self.config.flows.discharge,
            FlowKind::Mixing => &mut self.config.flows.mixing,
        };
        flow.value = value.clamp(flow.min, flow.max);
        Ok(())
    }

    /// Advance one fast tick. `now` stamps any log rows this tick emits.
    pub fn tick(&mut self, now: NaiveTime) -> SimResult<TickOutcome> {
        if self.phase == Phase::Stopped {
            return Ok(TickOutcome::Stopped);
        }
        if !self.started {
            let gains = self.pid_gains();
            self.thermal = Some(RegulatedVariable::new(
                "temperature",
                gains,
                self.config.temperature.ideal_c,
            ));
            self.pressure = Some(RegulatedVariable::new(
                "pressure",
                gains,
                self.config.pressure.ideal_atm,
            ));
            self.started = true;
        }

        self.clock.advance();
        self.update_run_timer();

        volume::step(&mut self.state, &self.config, &mut self.inputs);
        self.step_mixing();
        self.step_thermal()?;
        self.step_pressure()?;
        self.diff_actions(now);

        if self.inputs.stop {
            self.log.append(now, TEXT_SHUTDOWN);
            self.phase = Phase::Stopped;
            tracing::info!(rows = self.log.len(), "simulation stopped");
            return Ok(TickOutcome::Stopped);
        }
        Ok(TickOutcome::Running)
    }

    /// Chart-sampling callback: samples and reschedules if the slow-tick
    /// deadline has passed. Returns true when a sample was taken.
    pub fn poll_slow_tick(&mut self) -> bool {
        if self.phase == Phase::Stopped || !self.clock.should_sample() {
            return false;
        }
        self.clock.advance_sample();
        self.sample_charts();
        true
    }

    /// Append to each chart per its gating rule, then honor any one-shot
    /// reset switches.
    pub fn sample_charts(&mut self) {
        if self.inputs.thermal_mode {
            self.charts
                .thermal
                .push(self.state.temperature_c, self.config.temperature.ideal_c);
        }
        if self.inputs.reset_thermal_chart {
            self.charts.thermal.clear();
            self.inputs.reset_thermal_chart = false;
        }

        let feeding =
            self.inputs.feed_reagent1 || self.inputs.feed_reagent2 || self.inputs.discharge;
        if feeding && self.state.volume_total_l > self.config.volume.capacity_l * VOLUME_CHART_FLOOR
        {
            self.charts.volume.push(
                self.state.volume_total_l,
                self.state.volume_reagent1_l,
                self.state.volume_reagent2_l,
            );
        }
        if self.inputs.reset_volume_chart {
            self.charts.volume.clear();
            self.inputs.reset_volume_chart = false;
        }

        if self.inputs.pressure_mode {
            self.charts
                .pressure
                .push(self.state.pressure_atm, self.config.pressure.ideal_atm);
        }
        if self.inputs.reset_pressure_chart {
            self.charts.pressure.clear();
            self.inputs.reset_pressure_chart = false;
        }
    }

    fn pid_gains(&self) -> PidGains {
        PidGains {
            kp: self.config.gains.kp,
            ki: self.config.gains.ki,
            kd: self.config.gains.kd,
        }
    }

    fn update_run_timer(&mut self) {
        let any_on = self.inputs.feed_reagent1
            || self.inputs.feed_reagent2
            || self.inputs.discharge
            || self.inputs.mixing
            || self.inputs.thermal_mode
            || self.inputs.pressure_mode;
        if any_on && !self.state.run_timer_active {
            self.state.run_timer_active = true;
            self.state.run_time_ms = 0.0;
        }
        if self.state.run_timer_active {
            // counts nominal tick time: the displayed run clock paces with
            // the simulation, not the wall
            self.state.run_time_ms += FAST_TICK_MS;
        }
        if self.inputs.reset_run_timer {
            self.state.run_timer_active = false;
            self.state.run_time_ms = 0.0;
            self.inputs.reset_run_timer = false;
        }
    }

    /// The motor runs only while the vessel is usable and the temperature
    /// is not at an extreme; otherwise the switch drops and the icon
    /// snaps to rest. Uses the temperature status of the previous tick,
    /// which is the ordering the panel always had.
    fn step_mixing(&mut self) {
        let permitted = self.state.level_status != LevelStatus::Unusable
            && !self.state.temperature_status.is_extreme();
        if self.inputs.mixing && permitted {
            let motor_speed = self.config.flows.mixing.value / MIXING_RATE_DIVISOR;
            self.state.motor.step(motor_speed);
        } else {
            if self.inputs.mixing && !permitted {
                self.inputs.mixing = false;
                tracing::info!("mixing disabled: vessel not usable");
            }
            self.state.motor.reset();
        }
    }

    fn step_thermal(&mut self) -> SimResult<()> {
        let gains = self.pid_gains();
        let Some(reg) = self.thermal.as_mut() else {
            return Ok(());
        };
        // heating/cooling is unavailable while the vessel is unusable
        if self.state.level_status == LevelStatus::Unusable {
            self.inputs.thermal_mode = false;
        }
        let action = reg.step(
            &mut self.state.temperature_c,
            &mut self.inputs.thermal_mode,
            self.config.temperature.ideal_c,
            &self.config.temperature.bounds_c,
            gains,
        )?;
        self.state.thermal_action = action;
        self.state.temperature_blocked = reg.blocked();
        self.state.temperature_status = classify(
            self.state.temperature_c,
            &self.config.temperature.bounds_c,
            reg.blocked(),
        );
        Ok(())
    }

    /// Identical mechanism to the thermal loop, except the pressure loop
    /// is not gated on the fill level.
    fn step_pressure(&mut self) -> SimResult<()> {
        let gains = self.pid_gains();
        let Some(reg) = self.pressure.as_mut() else {
            return Ok(());
        };
        let _action = reg.step(
            &mut self.state.pressure_atm,
            &mut self.inputs.pressure_mode,
            self.config.pressure.ideal_atm,
            &self.config.pressure.bounds_atm,
            gains,
        )?;
        self.state.pressure_blocked = reg.blocked();
        self.state.pressure_status = classify(
            self.state.pressure_atm,
            &self.config.pressure.bounds_atm,
            reg.blocked(),
        );
        Ok(())
    }

    /// Log one row per switch edge, reading the switches after this
    /// tick's auto-disables so a feed stopping at capacity is logged too.
    fn diff_actions(&mut self, now: NaiveTime) {
        let current = TrackedSwitches::snapshot(&self.inputs);
        let prev = self.previous;
        self.log.record_transition(
            now,
            current.feed_reagent1,
            prev.feed_reagent1,
            TEXT_FEED1_ON,
            TEXT_FEED1_OFF,
        );
        self.log.record_transition(
            now,
            current.feed_reagent2,
            prev.feed_reagent2,
            TEXT_FEED2_ON,
            TEXT_FEED2_OFF,
        );
        self.log.record_transition(
            now,
            current.mixing,
            prev.mixing,
            TEXT_MIXING_ON,
            TEXT_MIXING_OFF,
        );
        self.log.record_transition(
            now,
            current.discharge,
            prev.discharge,
            TEXT_DISCHARGE_ON,
            TEXT_DISCHARGE_OFF,
        );
        self.log.record_transition(
            now,
            current.thermal_mode,
            prev.thermal_mode,
            TEXT_THERMAL_ON,
            TEXT_THERMAL_OFF,
        );
        self.log.record_transition(
            now,
            current.pressure_mode,
            prev.pressure_mode,
            TEXT_PRESSURE_ON,
            TEXT_PRESSURE_OFF,
        );
        self.previous = current;
    }
}
