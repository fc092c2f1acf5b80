use crate::config::{Algorithm, load_config};
use crate::ir::Dashboard;
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, grid_data, write_grid_data, write_layout_dump};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dgrid", version, about = "Lay out dashboard panels on a 48-column grid")]
pub struct Args {
    /// Input dashboard (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Packing algorithm; overrides the dashboard and the config file
    #[arg(short = 'a', long = "algorithm", value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Config JSON file (layout algorithm, default panel size)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    GridData,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let dashboard = Dashboard::from_json(&input)?;

    let mut grid = dashboard.grid_config(&config);
    if let Some(algorithm) = args.algorithm {
        grid.algorithm = algorithm;
    }
    let panels = dashboard.resolve_panels(&config.defaults)?;
    let layout = compute_layout(&panels, &grid)?;
    info!(
        panels = layout.len(),
        height = layout.height,
        algorithm = %layout.algorithm,
        "layout complete"
    );

    match (args.output.as_deref(), args.output_format) {
        (Some(path), OutputFormat::Json) => write_layout_dump(path, &layout),
        (Some(path), OutputFormat::GridData) => write_grid_data(path, &layout),
        (None, OutputFormat::Json) => {
            write_stdout(&serde_json::to_string_pretty(&LayoutDump::from_layout(&layout))?)
        }
        (None, OutputFormat::GridData) => {
            write_stdout(&serde_json::to_string_pretty(&grid_data(&layout))?)
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from([
            "dgrid", "-i", "dash.json", "-a", "first-available-gap", "-e", "grid-data", "-vv",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("dash.json")));
        assert_eq!(args.algorithm, Some(Algorithm::FirstAvailableGap));
        assert!(matches!(args.output_format, OutputFormat::GridData));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_algorithms() {
        assert!(Args::try_parse_from(["dgrid", "-a", "random"]).is_err());
    }

}
