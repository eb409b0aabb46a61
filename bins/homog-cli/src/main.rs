//! homog-cli: Command-line front end for the homogenizer decay model.
//!
//! Collects parameters in input-form units (mm, g, µm) from a config file,
//! `HOMOG_*` environment variables and flags, runs the model, and prints the
//! decay curve as text, CSV or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use homog_sim::config::SimulationConfig;
use homog_sim::export::{render_quantities, render_summary, write_csv, write_json, write_trace_csv};
use homog_sim::run::{derive_quantities, oscillation_trace, run_simulation};
use tracing::info;

/// Globule decay in an oscillating-bead homogenizer.
#[derive(Parser)]
#[command(name = "homog-cli")]
#[command(version, about = "Model globule size decay under bead oscillation")]
struct Cli {
    /// Parameter file (toml, json or yaml). Defaults to the per-user file if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the model and print the sampled decay curve.
    Simulate(SimulateArgs),
    /// Print the derived bead and decay quantities.
    Quantities(QuantitiesArgs),
    /// Print the bead displacement over a number of oscillation periods.
    Oscillation(OscillationArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Parameter overrides in input-form units.
#[derive(Args)]
struct ParamArgs {
    /// Oscillation amplitude (mm).
    #[arg(long)]
    amplitude_mm: Option<f64>,

    /// Oscillation frequency (Hz).
    #[arg(long)]
    frequency_hz: Option<f64>,

    /// Bead mass (g).
    #[arg(long)]
    bead_mass_g: Option<f64>,

    /// Fluid dynamic viscosity (Pa·s).
    #[arg(long)]
    viscosity: Option<f64>,

    /// Initial globule size (µm).
    #[arg(long)]
    initial_size_um: Option<f64>,

    /// Target globule size (µm).
    #[arg(long)]
    target_size_um: Option<f64>,

    /// Tube inner diameter (mm).
    #[arg(long)]
    tube_diameter_mm: Option<f64>,

    /// Empirical decay-efficiency constant.
    #[arg(long)]
    alpha: Option<f64>,
}

impl ParamArgs {
    fn apply(&self, cfg: &mut SimulationConfig) {
        let overrides = [
            (&mut cfg.amplitude_mm, self.amplitude_mm),
            (&mut cfg.frequency_hz, self.frequency_hz),
            (&mut cfg.bead_mass_g, self.bead_mass_g),
            (&mut cfg.viscosity_pa_s, self.viscosity),
            (&mut cfg.initial_size_um, self.initial_size_um),
            (&mut cfg.target_size_um, self.target_size_um),
            (&mut cfg.tube_diameter_mm, self.tube_diameter_mm),
            (&mut cfg.alpha, self.alpha),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Number of curve samples.
    #[arg(long)]
    samples: Option<usize>,

    /// Curve horizon as a multiple of the time to target.
    #[arg(long)]
    margin: Option<f64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct QuantitiesArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OscillationArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Number of oscillation periods to cover.
    #[arg(long, default_value_t = 2.0)]
    periods: f64,

    /// Number of samples.
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let base = SimulationConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    info!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Simulate(args) => simulate(base, args),
        Commands::Quantities(args) => quantities(base, args),
        Commands::Oscillation(args) => oscillation(base, args),
    }
}

fn simulate(mut cfg: SimulationConfig, args: SimulateArgs) -> Result<()> {
    args.params.apply(&mut cfg);
    if let Some(samples) = args.samples {
        cfg.samples = samples;
    }
    if let Some(margin) = args.margin {
        cfg.time_margin = margin;
    }

    let report = run_simulation(&cfg).context("simulation failed")?;
    let mut out = open_output(args.output.as_ref())?;
    match args.format {
        OutputFormat::Text => out.write_all(render_summary(&report).as_bytes())?,
        OutputFormat::Csv => write_csv(&report.series, &mut out)?,
        OutputFormat::Json => write_json(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn quantities(mut cfg: SimulationConfig, args: QuantitiesArgs) -> Result<()> {
    args.params.apply(&mut cfg);
    let derived = derive_quantities(&cfg).context("invalid parameters")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&derived)?);
    } else {
        print!("{}", render_quantities(&derived));
    }
    Ok(())
}

fn oscillation(mut cfg: SimulationConfig, args: OscillationArgs) -> Result<()> {
    args.params.apply(&mut cfg);
    let (times, displacements) =
        oscillation_trace(&cfg, args.periods, args.samples).context("invalid oscillation request")?;
    let out = open_output(args.output.as_ref())?;
    write_trace_csv(&times, &displacements, out)?;
    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so CSV and JSON on stdout stay clean.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .init(),
    }
}
