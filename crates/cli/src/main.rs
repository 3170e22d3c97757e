mod formatter;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use digitring::{divide, Base, DigitRing};
use formatter::{format_report, ColorMode, OutputFormat, RingReport};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "digitring")]
#[command(about = "Store numbers as circular lists of binary or ternary digits", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter, e.g. "debug" or "digitring=trace"
    #[arg(long, global = true, env = "DIGITRING_LOG", default_value = "warn")]
    log: String,

    /// Output format
    #[arg(long, global = true, value_enum, env = "DIGITRING_FORMAT", default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Color output for the pretty format
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the digits of a decimal number
    Show {
        /// Non-negative decimal number
        value: String,

        /// Radix of the digits: 2 or 3
        #[arg(long, default_value_t = 2)]
        base: u32,
    },

    /// Re-express a decimal number in the secondary base
    Scale {
        /// Non-negative decimal number
        value: String,
    },

    /// Integer division of two decimal numbers
    Divide {
        dividend: String,
        divisor: String,
    },

    /// Load a number from a file holding one decimal line
    Load {
        file: PathBuf,
    },

    /// Save a decimal number to a file
    Save {
        value: String,
        file: PathBuf,
    },

    /// Sort the digits of a number
    Sort {
        value: String,

        /// Sort from largest to smallest digit
        #[arg(long)]
        descending: bool,
    },

    /// Rotate the digits of a number
    Rotate {
        value: String,

        /// Rotate toward the tail instead of toward the head
        #[arg(long)]
        right: bool,

        /// Number of single-step rotations
        #[arg(long, default_value_t = 1)]
        times: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, keeping stdout clean for data
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    cli.color.apply();

    let reports = run(cli.command)?;
    for report in &reports {
        println!("{}", format_report(report, cli.format));
    }
    Ok(())
}

fn run(command: Commands) -> Result<Vec<RingReport>> {
    match command {
        Commands::Show { value, base } => {
            let base = Base::try_from(base).map_err(|radix| anyhow!("unsupported base {}", radix))?;
            let ring = parse_value(&value, base);
            Ok(vec![RingReport::new("value", &ring)])
        }
        Commands::Scale { value } => {
            let ring = parse_value(&value, Base::PRIMARY);
            let scaled = ring.change_scale();
            Ok(vec![
                RingReport::new("value", &ring),
                RingReport::new("scaled", &scaled),
            ])
        }
        Commands::Divide { dividend, divisor } => {
            let dividend = parse_value(&dividend, Base::PRIMARY);
            let divisor = parse_value(&divisor, Base::PRIMARY);
            let quotient = divide(&dividend, &divisor).context("Failed to divide")?;
            Ok(vec![RingReport::new("quotient", &quotient)])
        }
        Commands::Load { file } => {
            let ring = DigitRing::load(&file);
            info!(file = ?file, digits = ring.len(), "loaded number");
            Ok(vec![RingReport::new("loaded", &ring)])
        }
        Commands::Save { value, file } => {
            let ring = parse_value(&value, Base::PRIMARY);
            ring.save(&file)
                .with_context(|| format!("Failed to save number to {:?}", file))?;
            info!(file = ?file, "saved number");
            Ok(vec![RingReport::new("saved", &ring)])
        }
        Commands::Sort { value, descending } => {
            let mut ring = parse_value(&value, Base::PRIMARY);
            if descending {
                ring.sort_descending();
            } else {
                ring.sort_ascending();
            }
            Ok(vec![RingReport::new("sorted", &ring)])
        }
        Commands::Rotate { value, right, times } => {
            let mut ring = parse_value(&value, Base::PRIMARY);
            for _ in 0..times {
                if right {
                    ring.shift_right();
                } else {
                    ring.shift_left();
                }
            }
            debug!(times, right, "rotated");
            Ok(vec![RingReport::new("rotated", &ring)])
        }
    }
}

/// Builds a ring, warning when lenient parsing swallowed a non-zero input
fn parse_value(value: &str, base: Base) -> DigitRing {
    let ring = DigitRing::from_decimal_in(value, base);
    if ring.is_empty() && !value.trim().trim_start_matches('0').is_empty() {
        warn!(input = value, "input is not a positive decimal number, treating it as 0");
    }
    ring
}
