//! Configuration schema definitions.
//!
//! One `ReactorConfig` is created per run from operator input. Most of it
//! is read-only for the rest of the run; the `ideal_c`/`ideal_atm`
//! setpoints and the flow `value` fields may be patched mid-run through
//! the simulation's explicit setters.

use rl_core::Bounds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactorConfig {
    pub identity: IdentitySection,
    pub volume: VolumeSection,
    pub temperature: TemperatureSection,
    pub pressure: PressureSection,
    pub flows: FlowsSection,
    #[serde(default)]
    pub gains: GainsDef,
}

/// Naming only: the experiment name becomes the report filename, the
/// reagent names are display labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentitySection {
    pub experiment: String,
    pub reagent1: String,
    pub reagent2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeSection {
    /// Vessel capacity in liters.
    pub capacity_l: f64,
    /// Level band in percent of capacity.
    pub level_pct: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureSection {
    /// Starting value, degrees Celsius.
    pub ambient_c: f64,
    /// Target the thermal loop drives toward. Operator adjustable.
    pub ideal_c: f64,
    pub bounds_c: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PressureSection {
    /// Starting value, atmospheres.
    pub ambient_atm: f64,
    /// Target the pressure loop drives toward. Operator adjustable.
    pub ideal_atm: f64,
    pub bounds_atm: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowsSection {
    /// Reagent feed rates, L/min.
    pub reagent1: FlowDef,
    pub reagent2: FlowDef,
    /// Discharge rate, L/min.
    pub discharge: FlowDef,
    /// Motor speed, dimensionless dial units.
    pub mixing: FlowDef,
}

/// An operator-adjustable rate with its allowed range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// PID gains shared by the thermal and pressure loops.
///
/// Plain mirror of the controls crate's gain set so the schema stays
/// dependency-free; the simulation maps it across.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GainsDef {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Default for GainsDef {
    fn default() -> Self {
        Self {
            kp: 0.5,
            ki: 0.1,
            kd: 0.01,
        }
    }
}
