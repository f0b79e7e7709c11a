//! Operator scenarios.
//!
//! A scenario is the headless stand-in for the control panel: a timed
//! list of the same actions an operator would take with the switches,
//! dials and spin boxes. Times are simulated milliseconds from run start;
//! an event fires before the first tick at or past its time.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Scenario {
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioEvent {
    /// Simulated milliseconds from run start.
    pub at_ms: f64,
    pub action: ScenarioAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ScenarioAction {
    SetSwitch { switch: SwitchId, on: bool },
    SetIdealTemperature { value_c: f64 },
    SetIdealPressure { value_atm: f64 },
    SetFlow { flow: FlowId, value: f64 },
    SetSpeed { value: u32 },
    ResetChart { chart: ChartId },
    ResetRunTimer,
    Stop,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwitchId {
    FeedReagent1,
    FeedReagent2,
    Discharge,
    Mixing,
    ThermalMode,
    PressureMode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowId {
    Reagent1,
    Reagent2,
    Discharge,
    Mixing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    Thermal,
    Volume,
    Pressure,
}

impl Scenario {
    /// Events ordered by time; authors may list them in any order.
    pub fn normalized(mut self) -> Self {
        self.events.sort_by(|a, b| {
            a.at_ms
                .partial_cmp(&b.at_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self
    }

    /// A scenario must eventually stop, or the run would only end at the
    /// tick safety limit.
    pub fn has_stop(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e.action, ScenarioAction::Stop))
    }
}

pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario =
        serde_yaml::from_str(&content).map_err(|err| AppError::Scenario(err.to_string()))?;
    for event in &scenario.events {
        if !event.at_ms.is_finite() || event.at_ms < 0.0 {
            return Err(AppError::Scenario(format!(
                "event time must be a non-negative number of milliseconds, got {}",
                event.at_ms
            )));
        }
    }
    Ok(scenario)
}
