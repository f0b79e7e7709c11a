//! Scenario execution.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config_service;
use crate::error::{AppError, AppResult};
use crate::scenario::{self, ChartId, FlowId, ScenarioAction, SwitchId};
use rl_report::ReportStore;
use rl_sim::{FlowKind, Simulation, TickOutcome};

/// Options for scenario runs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory reports are written to. Defaults to `Reports` under the
    /// working directory.
    pub reports_dir: Option<PathBuf>,
    /// Safety limit on fast ticks for scenarios that never stop.
    pub max_ticks: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            reports_dir: None,
            max_ticks: 10_000_000,
        }
    }
}

/// Outcome of a completed scenario run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub sim_time_ms: f64,
    pub report_path: PathBuf,
    pub log_rows: usize,
    pub volume_total_l: f64,
    pub temperature_c: f64,
    pub pressure_atm: f64,
    pub run_time_hms: String,
}

/// Execute a scenario against a configuration: the cooperative loop of
/// fast ticks with slow-tick chart sampling, scenario events applied
/// between ticks, and the report exported once the run stops.
pub fn run_scenario(
    config_path: &Path,
    scenario_path: &Path,
    options: &RunOptions,
) -> AppResult<RunSummary> {
    let config = config_service::load_config(config_path)?;
    let scenario = scenario::load_scenario(scenario_path)?.normalized();
    if !scenario.has_stop() {
        return Err(AppError::Scenario(
            "scenario has no Stop event; the run would never export".to_string(),
        ));
    }

    let mut sim = Simulation::new(config);
    let events = &scenario.events;
    let mut cursor = 0usize;
    let mut ticks = 0u64;

    tracing::info!(events = events.len(), "starting scenario run");
    loop {
        while cursor < events.len() && events[cursor].at_ms <= sim.sim_time_ms() {
            apply_event(&mut sim, &events[cursor].action)?;
            cursor += 1;
        }
        let outcome = sim.tick(Local::now().time())?;
        sim.poll_slow_tick();
        ticks += 1;
        match outcome {
            TickOutcome::Stopped => break,
            TickOutcome::Running => {
                if ticks >= options.max_ticks {
                    return Err(AppError::InvalidInput(format!(
                        "run exceeded {} ticks without stopping",
                        options.max_ticks
                    )));
                }
            }
        }
    }

    let reports_root = options
        .reports_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("Reports"));
    let store = ReportStore::new(reports_root)?;
    let report_path = store.save_report(
        &sim.config().identity.experiment,
        sim.log().entries(),
        &Local::now().to_rfc3339(),
    )?;
    tracing::info!(path = %report_path.display(), rows = sim.log().len(), "report exported");

    Ok(RunSummary {
        ticks,
        sim_time_ms: sim.sim_time_ms(),
        report_path,
        log_rows: sim.log().len(),
        volume_total_l: sim.state().volume_total_l,
        temperature_c: sim.state().temperature_c,
        pressure_atm: sim.state().pressure_atm,
        run_time_hms: sim.state().run_time_hms(),
    })
}

fn apply_event(sim: &mut Simulation, action: &ScenarioAction) -> AppResult<()> {
    match action {
        ScenarioAction::SetSwitch { switch, on } => {
            let inputs = sim.inputs_mut();
            match switch {
                SwitchId::FeedReagent1 => inputs.feed_reagent1 = *on,
                SwitchId::FeedReagent2 => inputs.feed_reagent2 = *on,
                SwitchId::Discharge => inputs.discharge = *on,
                SwitchId::Mixing => inputs.mixing = *on,
                SwitchId::ThermalMode => inputs.thermal_mode = *on,
                SwitchId::PressureMode => inputs.pressure_mode = *on,
            }
        }
        ScenarioAction::SetIdealTemperature { value_c } => sim.set_ideal_temperature(*value_c)?,
        ScenarioAction::SetIdealPressure { value_atm } => sim.set_ideal_pressure(*value_atm)?,
        ScenarioAction::SetFlow { flow, value } => {
            let kind = match flow {
                FlowId::Reagent1 => FlowKind::Reagent1,
                FlowId::Reagent2 => FlowKind::Reagent2,
                FlowId::Discharge => FlowKind::Discharge,
                FlowId::Mixing => FlowKind::Mixing,
            };
            sim.set_flow(kind, *value)?;
        }
        ScenarioAction::SetSpeed { value } => sim.set_speed(*value),
        ScenarioAction::ResetChart { chart } => {
            let inputs = sim.inputs_mut();
            match chart {
                ChartId::Thermal => inputs.reset_thermal_chart = true,
                ChartId::Volume => inputs.reset_volume_chart = true,
                ChartId::Pressure => inputs.reset_pressure_chart = true,
            }
        }
        ScenarioAction::ResetRunTimer => sim.inputs_mut().reset_run_timer = true,
        ScenarioAction::Stop => sim.inputs_mut().stop = true,
    }
    Ok(())
}
