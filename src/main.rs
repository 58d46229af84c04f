use objstats::{write_report, write_reports, ReportStyle};

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::warn;

/// Print bounding box and element counts of Wavefront OBJ models.
#[derive(Parser, Debug)]
#[command(name = "objstats")]
#[command(version, about, long_about = None)]
struct Args {
    /// OBJ files to inspect
    #[arg(required = true, value_name = "MODEL")]
    models: Vec<PathBuf>,

    /// Only print the bounding box of the first model
    #[arg(long)]
    bounds_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.bounds_only {
        let (first, rest) = args
            .models
            .split_first()
            .context("obj file path not specified")?;
        if !rest.is_empty() {
            warn!("--bounds-only reads a single model, ignoring {} more", rest.len());
        }
        write_report(&mut out, first, ReportStyle::Bounds)?;
    } else {
        let result = write_reports(&mut out, &args.models, ReportStyle::Full);
        out.flush()?;
        result.context("failed to collect model statistics")?;
    }

    out.flush()?;
    Ok(())
}
