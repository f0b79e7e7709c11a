use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rl_app::{AppResult, RunOptions, load_config, run_scenario};

#[derive(Parser)]
#[command(name = "rl-cli")]
#[command(about = "ReactorLab CLI - batch reactor training simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration file
    Validate {
        /// Path to the config YAML file
        config_path: PathBuf,
    },
    /// Run an operator scenario against a configuration
    Run {
        /// Path to the config YAML file
        config_path: PathBuf,
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Directory to write the report into (default: ./Reports)
        #[arg(long)]
        reports_dir: Option<PathBuf>,
        /// Safety limit on fast ticks
        #[arg(long, default_value_t = 10_000_000)]
        max_ticks: u64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run {
            config_path,
            scenario_path,
            reports_dir,
            max_ticks,
        } => cmd_run(&config_path, &scenario_path, reports_dir, max_ticks),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    let config = load_config(config_path)?;
    println!("OK: {}", config_path.display());
    println!("  experiment: {}", config.identity.experiment);
    println!(
        "  reagents:   {} / {}",
        config.identity.reagent1, config.identity.reagent2
    );
    println!("  capacity:   {} L", config.volume.capacity_l);
    Ok(())
}

fn cmd_run(
    config_path: &Path,
    scenario_path: &Path,
    reports_dir: Option<PathBuf>,
    max_ticks: u64,
) -> AppResult<()> {
    let options = RunOptions {
        reports_dir,
        max_ticks,
    };
    let summary = run_scenario(config_path, scenario_path, &options)?;

    println!("Run complete.");
    println!("  ticks:       {}", summary.ticks);
    println!("  sim time:    {:.1} ms", summary.sim_time_ms);
    println!("  run timer:   {}", summary.run_time_hms);
    println!("  volume:      {:.2} L", summary.volume_total_l);
    println!("  temperature: {:.2} C", summary.temperature_c);
    println!("  pressure:    {:.3} atm", summary.pressure_atm);
    println!(
        "  report:      {} ({} rows)",
        summary.report_path.display(),
        summary.log_rows
    );
    Ok(())
}
