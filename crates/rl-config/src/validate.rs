//! Configuration validation logic.

use crate::schema::{FlowDef, ReactorConfig};
use rl_core::Bounds;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing value: {field} must not be empty")]
    EmptyField { field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_config(config: &ReactorConfig) -> Result<(), ValidationError> {
    if config.identity.experiment.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "identity.experiment".to_string(),
        });
    }

    if !(config.volume.capacity_l.is_finite() && config.volume.capacity_l > 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "volume.capacity_l".to_string(),
            value: config.volume.capacity_l.to_string(),
            reason: "capacity must be positive".to_string(),
        });
    }

    validate_bounds(&config.volume.level_pct, "volume.level_pct")?;
    validate_bounds(&config.temperature.bounds_c, "temperature.bounds_c")?;
    validate_bounds(&config.pressure.bounds_atm, "pressure.bounds_atm")?;

    validate_setpoint(
        config.temperature.ideal_c,
        &config.temperature.bounds_c,
        "temperature.ideal_c",
    )?;
    validate_setpoint(
        config.pressure.ideal_atm,
        &config.pressure.bounds_atm,
        "pressure.ideal_atm",
    )?;

    validate_flow(&config.flows.reagent1, "flows.reagent1")?;
    validate_flow(&config.flows.reagent2, "flows.reagent2")?;
    validate_flow(&config.flows.discharge, "flows.discharge")?;
    validate_flow(&config.flows.mixing, "flows.mixing")?;

    for (v, field) in [
        (config.gains.kp, "gains.kp"),
        (config.gains.ki, "gains.ki"),
        (config.gains.kd, "gains.kd"),
    ] {
        if !v.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: v.to_string(),
                reason: "gain must be finite".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_bounds(bounds: &Bounds, field: &str) -> Result<(), ValidationError> {
    bounds
        .validate()
        .map_err(|err| ValidationError::InvalidValue {
            field: field.to_string(),
            value: format!(
                "[{}, {}, {}, {}]",
                bounds.limit_min, bounds.warning_min, bounds.warning_max, bounds.limit_max
            ),
            reason: err.to_string(),
        })
}

fn validate_setpoint(value: f64, bounds: &Bounds, field: &str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= bounds.limit_min || value >= bounds.limit_max {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!(
                "setpoint must lie strictly inside the limit band ({}, {})",
                bounds.limit_min, bounds.limit_max
            ),
        });
    }
    Ok(())
}

fn validate_flow(flow: &FlowDef, field: &str) -> Result<(), ValidationError> {
    for v in [flow.value, flow.min, flow.max] {
        if !v.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: v.to_string(),
                reason: "rate must be finite".to_string(),
            });
        }
    }
    if flow.min < 0.0 || flow.min > flow.max {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: format!("min={} max={}", flow.min, flow.max),
            reason: "range must satisfy 0 <= min <= max".to_string(),
        });
    }
    if flow.value < flow.min || flow.value > flow.max {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: flow.value.to_string(),
            reason: "value must lie within [min, max]".to_string(),
        });
    }
    Ok(())
}
