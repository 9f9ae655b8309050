// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sweep-demo`: runs the swinging-blade scene headless and manages the
//! stored sensor config.

mod config;
mod scene;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sweep_app_core::config::SENSOR_CONFIG_KEY;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::scene::{Scene, SceneOptions};

#[derive(Parser, Debug)]
#[command(name = "sweep-demo", author, version, about = "Swept linecast sensor demo")]
struct Cli {
    /// Directory for stored configs (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scene for a fixed number of ticks and print a summary.
    Run(RunArgs),
    /// Print the effective sensor config as JSON.
    PrintConfig(SourceArgs),
    /// Store the effective sensor config under the `sweep_sensor` key.
    SaveConfig(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Read the sensor config from this JSON file instead of the store
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Fixed steps to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Targets placed on the ring around the blade
    #[arg(long, default_value_t = 8)]
    targets: usize,

    /// Blade angular speed in radians per second
    #[arg(long, default_value_t = core::f32::consts::TAU)]
    spin: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let store_dir = cli.config_dir.as_deref();
    match cli.command {
        Commands::Run(args) => run(args, store_dir),
        Commands::PrintConfig(args) => {
            let config = config::resolve(args.config.as_deref(), store_dir)?;
            let json = serde_json::to_string_pretty(&config)?;
            writeln!(io::stdout().lock(), "{json}")?;
            Ok(())
        }
        Commands::SaveConfig(args) => {
            let config = config::resolve(args.config.as_deref(), store_dir)?;
            let service = config::open_store(store_dir)?;
            service
                .save(SENSOR_CONFIG_KEY, &config)
                .context("failed to store sensor config")?;
            info!(base = %service.store().base().display(), key = SENSOR_CONFIG_KEY, "config saved");
            Ok(())
        }
    }
}

fn run(args: RunArgs, store_dir: Option<&std::path::Path>) -> Result<()> {
    if !(args.dt.is_finite() && args.dt > 0.0) {
        bail!("--dt must be a positive number of seconds (got {})", args.dt);
    }
    if !args.spin.is_finite() {
        bail!("--spin must be finite");
    }
    let config = config::resolve(args.source.config.as_deref(), store_dir)?;
    let options = SceneOptions {
        targets: args.targets,
        spin: args.spin,
    };
    let mut scene = Scene::new(config, options).context("failed to build scene")?;
    info!(ticks = args.ticks, dt = args.dt, targets = args.targets, "running scene");
    let stats = scene.run(args.ticks, args.dt);

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "ticks {}  sweeps {}  skipped {}  aborted {}  casts {}  episodes {}",
        stats.ticks, stats.sweeps, stats.skipped, stats.aborted, stats.casts, stats.episodes
    )?;
    writeln!(out, "hits {}  self-hits ignored {}", stats.hits, stats.self_hits)?;
    for dummy in scene.dummies() {
        let lit = if dummy.is_lit() { "  (lit)" } else { "" };
        writeln!(out, "  {:<10} {:>4}{lit}", dummy.name, dummy.hits)?;
    }
    Ok(())
}
