//! Volume and level model.
//!
//! Feeds add to one reagent and the total; discharge drains the total and
//! both reagents in proportion to their current share. A feed that would
//! overfill the vessel is forced off instead of applied.

use crate::clock::FAST_TICK_MS;
use crate::sim::OperatorInputs;
use crate::state::SimulationState;
use rl_config::ReactorConfig;
use rl_controls::classify_level;
use rl_core::{as_liters, lpm, millis};

/// Volume moved in one nominal fast tick at the given rate.
///
/// Rates are configured in L/min; the conversion is derived from the
/// nominal tick duration rather than a baked-in divisor, so the per-tick
/// delta stays correct if the nominal cadence ever changes.
pub(crate) fn per_tick_liters(rate_lpm: f64) -> f64 {
    as_liters(lpm(rate_lpm) * millis(FAST_TICK_MS))
}

pub(crate) fn step(state: &mut SimulationState, cfg: &ReactorConfig, inputs: &mut OperatorInputs) {
    let capacity = cfg.volume.capacity_l;

    // feeds: stop at the brim rather than overfill
    let delta1 = per_tick_liters(cfg.flows.reagent1.value);
    if inputs.feed_reagent1 {
        if (state.volume_total_l + delta1) / capacity * 100.0 < 100.0 {
            state.volume_reagent1_l += delta1;
            state.volume_total_l += delta1;
        } else {
            inputs.feed_reagent1 = false;
            tracing::info!("reagent 1 feed auto-stopped at capacity");
        }
    }
    let delta2 = per_tick_liters(cfg.flows.reagent2.value);
    if inputs.feed_reagent2 {
        if (state.volume_total_l + delta2) / capacity * 100.0 < 100.0 {
            state.volume_reagent2_l += delta2;
            state.volume_total_l += delta2;
        } else {
            inputs.feed_reagent2 = false;
            tracing::info!("reagent 2 feed auto-stopped at capacity");
        }
    }

    // discharge: drains proportionally, never below empty
    if inputs.discharge {
        let delta = per_tick_liters(cfg.flows.discharge.value);
        if state.volume_total_l - delta > 0.0 {
            if state.volume_total_l > 0.0 {
                state.volume_reagent1_l -=
                    state.volume_reagent1_l / state.volume_total_l * delta;
                state.volume_reagent2_l -=
                    state.volume_reagent2_l / state.volume_total_l * delta;
            }
            state.volume_total_l -= delta;
        }
    }

    state.level_status = classify_level(state.fill_percent(capacity), &cfg.volume.level_pct);
}
