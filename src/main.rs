use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use rocket_ascent::io::json::write_summary_file;
use rocket_ascent::io::{ConsoleSink, CsvSink, FlightSummary, NullSink, RecordSink, Tee};
use rocket_ascent::sim;
use rocket_ascent::{load_config, RunConfig};

const EXIT_SINK: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Vertical ascent of a single-stage rocket (RK4, fixed step).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file with optional [sim] and [rocket] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the CSV flight log
    #[arg(short, long, default_value = "rocket_data.csv")]
    output: PathBuf,

    /// Also write a JSON flight summary here
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Do not print every step to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();
    match execute(&args) {
        0 => ExitCode::SUCCESS,
        code => ExitCode::from(code),
    }
}

/// Load the configuration, open the CSV log, run. Returns the process exit
/// code: 1 only when the CSV log cannot be opened.
fn execute(args: &Args) -> u8 {
    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Cannot load configuration from {}: {}", path.display(), e);
                return EXIT_FAILURE;
            }
        },
        None => RunConfig::default(),
    };

    let mut csv = match CsvSink::create(&args.output) {
        Ok(sink) => sink,
        Err(e) => {
            println!("Error opening file!");
            error!("Cannot open {}: {}", args.output.display(), e);
            return EXIT_SINK;
        }
    };

    match run(args, &config, &mut csv) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

fn run(args: &Args, config: &RunConfig, csv: &mut dyn RecordSink) -> Result<()> {
    let mut summary = FlightSummary::new();
    let mut console: Box<dyn RecordSink> = if args.quiet {
        Box::new(NullSink)
    } else {
        Box::new(ConsoleSink::stdout())
    };

    let mut sinks = Tee(Tee(&mut *console, csv), &mut summary);
    sim::simulate_with(&config.rocket, &config.sim, &mut sinks)
        .context("running simulation")?;

    println!("Simulation data saved to {}", args.output.display());

    if let Some(path) = &args.summary {
        write_summary_file(path, &summary)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!("Flight summary saved to {}", path.display());
    }

    info!(
        "Max altitude {:.2} m at t={:.2} s, max Mach {:.3}",
        summary.max_altitude_m, summary.max_altitude_time, summary.max_mach
    );

    Ok(())
}
