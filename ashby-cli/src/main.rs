//! CLI for Ashby chart geometry.
//!
//! Reads material items as JSON and writes either:
//! - their display-space ellipses (`ellipses`), or
//! - one convex hull per family (`hulls`), computed in parallel across families.

mod args;

use std::{fs, io::{self, Read, Write}, path::Path};

use anyhow::{Context, Result};
use ashby_core::{family::{convert_all, family_hull, group_by_family}, parse_log_level, ConfigError, FamilyHull, PlotCoordinateMode, SourceItem};
use clap::{Parser, Subcommand};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use args::{IoArgs, ModeArgs};

#[derive(Parser)]
#[command(name = "ashby")]
#[command(about = "Ashby chart ellipses and family hulls", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert items to display-space ellipses
    Ellipses {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Compute one convex hull per family
    Hulls {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        mode: ModeArgs,
    },
}

/// `None` and `-` both mean stdin.
fn reads_stdin(input: Option<&Path>) -> bool {
    input.map_or(true, |path| path == Path::new("-"))
}

fn parse_items(reader: impl Read) -> Result<Vec<SourceItem>> {
    let items: Vec<SourceItem> = serde_json::from_reader(reader).context("parsing items")?;
    info!("Read {} items", items.len());
    Ok(items)
}

fn read_items(input: Option<&Path>) -> Result<Vec<SourceItem>> {
    match input {
        Some(path) if !reads_stdin(input) => {
            let file = fs::File::open(path).with_context(|| format!("reading {}", path.display()))?;
            parse_items(io::BufReader::new(file))
        }
        _ => parse_items(io::stdin().lock()),
    }
}

fn hulls(items: &[SourceItem], mode: &PlotCoordinateMode) -> Result<Vec<FamilyHull>, ConfigError> {
    let families: Vec<_> = group_by_family(items).into_iter().collect();
    info!("Computing hulls for {} families", families.len());
    families
        .into_par_iter()
        .map(|(family, items)| family_hull(family, items, mode))
        .collect()
}

fn write_json_to<T: Serialize>(value: &T, pretty: bool, mut writer: impl Write) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_json<T: Serialize>(value: &T, args: &IoArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file = fs::File::create(path).with_context(|| format!("writing {}", path.display()))?;
            write_json_to(value, args.pretty, io::BufWriter::new(file))
        }
        None => write_json_to(value, args.pretty, io::stdout().lock()).context("writing stdout"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = parse_log_level(cli.log_level.as_deref()).map_err(anyhow::Error::msg)?;
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    match cli.command {
        Commands::Ellipses { io: io_args, mode } => {
            let mode = mode.mode()?;
            let items = read_items(io_args.input.as_deref())?;
            let converted = convert_all(&items, &mode)?;
            info!("Converted {} items, skipped {}", converted.ellipses.len(), converted.skipped.len());
            write_json(&converted, &io_args)
        }
        Commands::Hulls { io: io_args, mode } => {
            let mode = mode.mode()?;
            let items = read_items(io_args.input.as_deref())?;
            let hulls = hulls(&items, &mode)?;
            write_json(&hulls, &io_args)
        }
    }
}
