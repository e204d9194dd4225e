//! Command-line renderer for elementary cellular automaton histories.
//!
//! Computes the single-seed history of a Wolfram rule and writes it out
//! as a PNG:
//!
//! ```text
//! lightcone rule30.png --rows 256 --rule 30 --block-size 2
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lightcone_automata::Automaton;
use lightcone_image::{export_png, render_matrix};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Generate images of the single-seed histories of Stephen Wolfram's
/// elementary cellular automata.
#[derive(Debug, Parser)]
#[command(name = "lightcone", version)]
struct Args {
    /// Path to the output image (PNG format).
    image: PathBuf,

    /// Number of rows to generate.
    #[arg(short = 'n', long, default_value_t = 256)]
    rows: usize,

    /// Wolfram code of the rule (between 0 and 255).
    #[arg(short, long, default_value_t = 30)]
    rule: u8,

    /// Size in pixels of each cell.
    #[arg(short = 's', long, default_value_t = 1)]
    block_size: u32,

    /// Enable debug messages.
    #[arg(long)]
    debug: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let automaton = Automaton::new(args.rows, args.rule)?;
    debug!(
        rows = automaton.rows(),
        columns = automaton.columns(),
        rule = automaton.rule(),
        "history computed"
    );

    let image = render_matrix(automaton.matrix(), args.block_size)?;
    export_png(&image, &args.image)
        .with_context(|| format!("failed to write {}", args.image.display()))?;
    debug!(path = %args.image.display(), "image written");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lightcone", "out.png"]);
        assert_eq!(args.image, PathBuf::from("out.png"));
        assert_eq!(args.rows, 256);
        assert_eq!(args.rule, 30);
        assert_eq!(args.block_size, 1);
        assert!(!args.debug);
    }

    #[test]
    fn test_rule_out_of_range_rejected() {
        assert!(Args::try_parse_from(["lightcone", "out.png", "--rule", "256"]).is_err());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["lightcone", "out.png", "-n", "64", "-r", "110", "-s", "4"]);
        assert_eq!(args.rows, 64);
        assert_eq!(args.rule, 110);
        assert_eq!(args.block_size, 4);
    }
}
