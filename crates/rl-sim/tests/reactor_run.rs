//! End-to-end exercises of the tick orchestrator: filling, logging,
//! sampling, termination.

use chrono::NaiveTime;
use rl_config::{
    FlowDef, FlowsSection, GainsDef, IdentitySection, PressureSection, ReactorConfig,
    TemperatureSection, VolumeSection,
};
use rl_core::Bounds;
use rl_sim::{Phase, Simulation, TickOutcome, sim};

fn demo_config() -> ReactorConfig {
    ReactorConfig {
        identity: IdentitySection {
            experiment: "orchestrator-test".to_string(),
            reagent1: "A".to_string(),
            reagent2: "B".to_string(),
        },
        volume: VolumeSection {
            capacity_l: 100.0,
            level_pct: Bounds::new(10.0, 20.0, 80.0, 90.0).unwrap(),
        },
        temperature: TemperatureSection {
            ambient_c: 20.0,
            ideal_c: 25.0,
            bounds_c: Bounds::new(0.0, 10.0, 60.0, 80.0).unwrap(),
        },
        pressure: PressureSection {
            ambient_atm: 1.0,
            ideal_atm: 1.5,
            bounds_atm: Bounds::new(0.5, 0.8, 2.0, 3.0).unwrap(),
        },
        flows: FlowsSection {
            reagent1: FlowDef {
                value: 600.0,
                min: 0.0,
                max: 1000.0,
            },
            reagent2: FlowDef {
                value: 400.0,
                min: 0.0,
                max: 1000.0,
            },
            discharge: FlowDef {
                value: 500.0,
                min: 0.0,
                max: 1000.0,
            },
            mixing: FlowDef {
                value: 10.0,
                min: 0.0,
                max: 20.0,
            },
        },
        gains: GainsDef::default(),
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

#[test]
fn feed_accumulates_tenth_liter_per_tick() {
    let mut sim = Simulation::new(demo_config());
    sim.inputs_mut().feed_reagent1 = true;
    for _ in 0..10 {
        sim.tick(noon()).unwrap();
    }
    // 600 L/min over ten 10 ms ticks
    assert!((sim.state().volume_total_l - 1.0).abs() < 1e-9);
}

#[test]
fn feed_auto_stop_is_logged() {
    let mut sim = Simulation::new(demo_config());
    sim.inputs_mut().feed_reagent1 = true;
    let mut ticks = 0u32;
    while sim.inputs().feed_reagent1 {
        sim.tick(noon()).unwrap();
        ticks += 1;
        assert!(ticks < 2_000, "feed never auto-stopped");
    }
    // ~999 filling ticks of 0.1 L, then the stop tick
    assert!((999..=1_001).contains(&ticks));
    assert!(sim.state().volume_total_l <= sim.config().volume.capacity_l);
    assert!(sim.state().volume_total_l > sim.config().volume.capacity_l - 0.2);

    let actions: Vec<&str> = sim
        .log()
        .entries()
        .iter()
        .map(|e| e.action.as_str())
        .collect();
    assert_eq!(actions, [sim::TEXT_FEED1_ON, sim::TEXT_FEED1_OFF]);
}

#[test]
fn stop_appends_terminal_row_and_freezes() {
    let mut sim = Simulation::new(demo_config());
    sim.inputs_mut().feed_reagent1 = true;
    for _ in 0..5 {
        sim.tick(noon()).unwrap();
    }
    sim.inputs_mut().stop = true;
    assert_eq!(sim.tick(noon()).unwrap(), TickOutcome::Stopped);
    assert_eq!(sim.phase(), Phase::Stopped);
    let rows = sim.log().len();
    assert_eq!(
        sim.log().entries().last().unwrap().action,
        sim::TEXT_SHUTDOWN
    );

    // further ticks are inert: no state movement, no new rows
    let volume = sim.state().volume_total_l;
    for _ in 0..10 {
        assert_eq!(sim.tick(noon()).unwrap(), TickOutcome::Stopped);
    }
    assert_eq!(sim.log().len(), rows);
    assert_eq!(sim.state().volume_total_l, volume);
}

#[test]
fn slow_tick_samples_every_fiftieth_fast_tick() {
    let mut sim = Simulation::new(demo_config());
    sim.inputs_mut().feed_reagent1 = true;
    let mut samples = 0;
    for _ in 0..100 {
        sim.tick(noon()).unwrap();
        if sim.poll_slow_tick() {
            samples += 1;
        }
    }
    assert_eq!(samples, 2);
    assert_eq!(sim.charts().volume.len(), 2);
    // thermal mode is off: its chart never recorded
    assert!(sim.charts().thermal.is_empty());
}

#[test]
fn chart_reset_clears_only_that_chart() {
    let mut sim = Simulation::new(demo_config());
    sim.inputs_mut().feed_reagent1 = true;
    sim.inputs_mut().pressure_mode = true;
    for _ in 0..100 {
        sim.tick(noon()).unwrap();
        sim.poll_slow_tick();
    }
    assert_eq!(sim.charts().volume.len(), 2);
    assert_eq!(sim.charts().pressure.len(), 2);

    // the reset lands in the same slow tick as one more sample, which it
    // wipes; the sample after that restarts the axis at zero
    sim.inputs_mut().reset_volume_chart = true;
    for _ in 0..100 {
        sim.tick(noon()).unwrap();
        sim.poll_slow_tick();
    }
    assert!(!sim.inputs().reset_volume_chart);
    assert_eq!(sim.charts().volume.len(), 1);
    assert_eq!(sim.charts().volume.t[0], 0.0);
    assert_eq!(sim.charts().pressure.len(), 4);
}

#[test]
fn run_timer_latches_on_first_control_and_resets() {
    let mut sim = Simulation::new(demo_config());
    for _ in 0..5 {
        sim.tick(noon()).unwrap();
    }
    assert_eq!(sim.state().run_time_ms, 0.0);

    sim.inputs_mut().feed_reagent1 = true;
    for _ in 0..10 {
        sim.tick(noon()).unwrap();
    }
    assert!((sim.state().run_time_ms - 100.0).abs() < 1e-9);

    // timer keeps counting after the control goes off
    sim.inputs_mut().feed_reagent1 = false;
    sim.tick(noon()).unwrap();
    assert!((sim.state().run_time_ms - 110.0).abs() < 1e-9);

    sim.inputs_mut().reset_run_timer = true;
    sim.tick(noon()).unwrap();
    assert_eq!(sim.state().run_time_ms, 0.0);
    assert!(!sim.inputs().reset_run_timer);
}

#[test]
fn mid_run_flow_edit_is_clamped_to_range() {
    let mut sim = Simulation::new(demo_config());
    sim.set_flow(rl_sim::FlowKind::Reagent1, 5_000.0).unwrap();
    assert_eq!(sim.config().flows.reagent1.value, 1_000.0);
    sim.set_flow(rl_sim::FlowKind::Mixing, -3.0).unwrap();
    assert_eq!(sim.config().flows.mixing.value, 0.0);
    // non-finite edits are refused, not applied
    assert!(sim.set_flow(rl_sim::FlowKind::Mixing, f64::NAN).is_err());
    assert_eq!(sim.config().flows.mixing.value, 0.0);
}
