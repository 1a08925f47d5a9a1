mod decode;
mod mode;
mod output;

use clap::Parser;
use env_logger::Env;
use log::debug;

use decode::{Band, BandSelection};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "resband",
    version,
    about = "Resistor color band decoder for four-band resistor codes",
    after_help = "Examples:
  resband                                   Decode the default bands (brown black red gold)
  resband yellow violet orange silver       Decode four bands
  resband --band 3=orange                   Change one band of the default selection
  resband brown black red gold --band 4=red Decode, then replace the tolerance band
  resband --table                           Show the color reference table
  resband --options                         List the colors allowed in each band"
)]
struct Args {
    /// Band colors in order: digit, digit, multiplier, tolerance (exactly 4, or none)
    #[arg(value_name = "COLOR")]
    colors: Vec<String>,

    /// Set a single band, e.g. 3=orange (repeatable, applied in order)
    #[arg(short, long = "band", value_name = "N=COLOR", value_parser = parse_band_override)]
    bands: Vec<(Band, String)>,

    /// Show the color reference table
    #[arg(short, long)]
    table: bool,

    /// List the colors allowed in each band
    #[arg(short, long)]
    options: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_band_override(s: &str) -> Result<(Band, String), String> {
    let (position, color) = s
        .split_once('=')
        .ok_or_else(|| format!("expected N=COLOR, got '{}'", s))?;
    let band = position
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(Band::from_position)
        .ok_or_else(|| format!("band must be 1-4, got '{}'", position))?;
    let color = color.trim();
    if color.is_empty() {
        return Err("color must not be empty".to_string());
    }
    Ok((band, color.to_string()))
}

/// Start from the default or positional colors, then apply overrides one band at a time
fn build_selection(colors: &[String], overrides: &[(Band, String)]) -> BandSelection {
    let mut selection = match colors {
        [c1, c2, c3, c4] => {
            BandSelection::new([c1.as_str(), c2.as_str(), c3.as_str(), c4.as_str()])
        }
        _ => BandSelection::default(),
    };
    for (band, color) in overrides {
        debug!("Setting band {} to {}", band.position(), color);
        selection.set(*band, color.as_str());
    }
    selection
}

fn main() {
    let args = Args::parse();

    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate color count
    if !args.colors.is_empty() && args.colors.len() != 4 {
        print_error(&format!("Expected 4 band colors, got {}", args.colors.len()));
        std::process::exit(1);
    }

    // Validate option combinations
    if args.table && args.options {
        print_error("--table cannot be used with --options");
        std::process::exit(1);
    }

    let has_selection = !args.colors.is_empty() || !args.bands.is_empty();
    if (args.table || args.options) && has_selection {
        print_error("--table and --options do not take band colors");
        std::process::exit(1);
    }

    // Dispatch to appropriate mode
    let outcome = if args.table {
        mode::run_table(args.quiet);
        Ok(())
    } else if args.options {
        mode::run_options(args.quiet)
    } else {
        let selection = build_selection(&args.colors, &args.bands);
        mode::run_decode(&selection, args.quiet)
    };

    if let Err(e) = outcome {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
