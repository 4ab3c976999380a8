//! Strider player - headless runner CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use strider_player::hud;
use strider_player::script::InputScript;
use strider_player::session::{Session, SessionConfig};
use strider_sim::RunnerConfig;

#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Headless endless-runner simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a run and print its timeline
    Run {
        /// Runner config TOML (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Input script TOML (a built-in demo runs when omitted)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Seconds to simulate, countdown included
        #[arg(long, default_value_t = 30.0)]
        duration: f64,

        /// Fixed simulation ticks per second
        #[arg(long, default_value_t = 60.0)]
        hz: f64,

        /// Pre-race countdown seconds
        #[arg(long, default_value_t = 3.0)]
        countdown: f64,
    },

    /// Validate a runner config file
    Validate {
        /// Path to the config TOML
        config: PathBuf,
    },

    /// Print the default runner config as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            script,
            duration,
            hz,
            countdown,
        } => run(config, script, duration, hz, countdown),
        Commands::Validate { config } => validate(&config),
        Commands::Config => print_default_config(),
    }
}

fn run(
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    duration: f64,
    hz: f64,
    countdown: f64,
) -> Result<()> {
    let runner = match config {
        Some(path) => RunnerConfig::load_from_file(&path)?,
        None => RunnerConfig::default(),
    };
    let script = match script {
        Some(path) => InputScript::load_from_file(&path)?,
        None => InputScript::demo(),
    };
    let session_config = SessionConfig {
        duration,
        tick_hz: hz,
        countdown_seconds: countdown,
        ..Default::default()
    };

    let mut session = Session::new(runner, session_config, script)?;
    let report = session.run();

    for line in session.timeline() {
        println!("{line}");
    }

    println!();
    println!("--- run over ---");
    println!("time:      {}", hud::format_timer(report.run_time));
    println!("distance:  {}", hud::format_distance(report.distance));
    println!("top speed: {:.1} m/s", report.top_speed);
    println!("score:     {}", report.score);
    if report.died {
        println!("result:    died");
    } else {
        println!("result:    survived");
    }
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let config = RunnerConfig::load_from_file(path)?;
    println!("OK: {}", path.display());
    println!(
        "lanes [{}, {}], speed {}..{} m/s",
        config.lane_min, config.lane_max, config.start_speed, config.max_speed
    );
    Ok(())
}

fn print_default_config() -> Result<()> {
    let config = RunnerConfig::default();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
