//! Console driver for the snowfake crystal growth engine.
//!
//! This binary owns no dynamics of its own: it parses parameters, builds or
//! loads an [`Engine`], drives it for a number of ticks (or until the
//! engine's own stop flag latches), and writes out a checkpoint and/or a
//! PPM image. The X11 GUI, the interactive prompt loop, and the external
//! image viewer invocation are not implemented here; see `snowfake`'s crate
//! docs for the interface they would drive.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use snowfake::persistence::prompt;
use snowfake::{Engine, Parameters};

/// Runs a Gravner-Griffeath snow crystal growth simulation.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// `name: value` parameter file (see the crate docs for the field
    /// list). Overrides the built-in defaults for any field it sets.
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Load the initial state from a checkpoint instead of seeding a fresh
    /// lattice.
    #[arg(long = "in", value_name = "FILE")]
    infile: Option<PathBuf>,

    /// Write the final state to a checkpoint after the run.
    #[arg(long = "out", value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Render the final state to a PPM image after the run.
    #[arg(long, value_name = "FILE")]
    ppm: Option<PathBuf>,

    /// Number of ticks to run. Ignored if the engine's own stop flag
    /// latches first.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Deterministic RNG seed, for reproducible runs. Without this, the
    /// engine seeds from the system clock.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_parameters(path: &PathBuf) -> Result<Parameters> {
    let file = File::open(path).with_context(|| format!("opening parameter file {}", path.display()))?;
    let session = prompt::read_parameters(BufReader::new(file))
        .with_context(|| format!("parsing parameter file {}", path.display()))?;
    Ok(session.params)
}

fn run(opts: Opts) -> Result<()> {
    let params = match &opts.params {
        Some(path) => load_parameters(path)?,
        None => Parameters::default(),
    };

    let mut engine = match (&opts.infile, opts.seed) {
        (Some(path), _) => Engine::load(path, params).context("loading checkpoint")?,
        (None, Some(seed)) => {
            Engine::init_with_rng(params, Pcg64::seed_from_u64(seed)).context("initializing engine")?
        }
        (None, None) => Engine::init(params).context("initializing engine")?,
    };

    let stopped = engine.run_until(|t| t >= opts.ticks);
    tracing::info!(t = engine.header().t, stopped, "run complete");

    if let Some(path) = &opts.outfile {
        engine.save(path).context("writing checkpoint")?;
    }
    if let Some(path) = &opts.ppm {
        engine.render(path).context("rendering PPM image")?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run(Opts::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
