//! Moonshot Preview
//!
//! Runs the stat animator outside a browser. `page` animates every stat in an
//! HTML file on a simulated (or real) frame clock, `value` prints the frames
//! of a single literal.

mod error;
mod page;
mod value;

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use moonshot_types::NumberLocale;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Preview animated stat counters for an HTML page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate every stat in an HTML page and print the final text
    Page(PageArgs),
    /// Print evenly spaced frames of one stat literal
    Value(ValueArgs),
}

#[derive(clap::Args, Debug)]
struct PageArgs {
    /// HTML file to load
    file: PathBuf,

    /// Stats config (TOML); defaults to the per-user config if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated frame interval in milliseconds
    #[arg(long, default_value_t = 16.0, value_parser = parse_frame_ms)]
    frame_ms: f64,

    /// Pace frames with the wall clock instead of simulating them
    #[arg(long)]
    realtime: bool,

    /// Print every rendered frame
    #[arg(long, conflicts_with = "json")]
    timeline: bool,

    /// Print a JSON summary
    #[arg(long)]
    json: bool,

    /// Thousands-grouping convention; detected from the system when omitted
    #[arg(long, value_enum)]
    locale: Option<LocaleArg>,
}

#[derive(clap::Args, Debug)]
struct ValueArgs {
    /// Stat literal, e.g. `1.5K` or `99%`
    raw: String,

    #[arg(long, default_value = "")]
    prefix: String,

    /// Explicit suffix; overrides the one derived from the literal
    #[arg(long, default_value = "")]
    suffix: String,

    /// Number of intervals between zero and the target
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Easing curve name (`easeOutCubic`, `easeOutQuad`, `easeInOutCubic`, `linear`)
    #[arg(long, default_value = "easeOutCubic")]
    easing: String,

    #[arg(long, value_enum)]
    locale: Option<LocaleArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocaleArg {
    Standard,
    European,
}

impl From<LocaleArg> for NumberLocale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Standard => NumberLocale::Standard,
            LocaleArg::European => NumberLocale::European,
        }
    }
}

/// Frame intervals must move the simulated clock forward.
fn parse_frame_ms(raw: &str) -> Result<f64, String> {
    let ms = raw.parse::<f64>().map_err(|e| e.to_string())?;
    if ms.is_finite() && ms > 0.0 {
        Ok(ms)
    } else {
        Err(format!("frame interval must be a positive number of milliseconds, got {raw}"))
    }
}

/// Install the subscriber. `RUST_LOG` filters, INFO by default.
///
/// Stdout carries the command output, so logs never go there: they go to
/// the file named by MOONSHOT_LOG_PATH, or to stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false);

    match open_log_file() {
        Some(file) => subscriber.with_writer(Mutex::new(file)).init(),
        None => subscriber.with_writer(std::io::stderr).init(),
    }
}

/// Open MOONSHOT_LOG_PATH for appending.
///
/// Called before the subscriber exists, so an unusable path is reported on
/// stderr directly and logging continues there.
fn open_log_file() -> Option<File> {
    let path = std::env::var_os("MOONSHOT_LOG_PATH")?;
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "moonshot-preview: cannot open log file {}: {e}, logging to stderr",
                path.to_string_lossy()
            );
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Page(args) => page::run(&args),
        Command::Value(args) => value::run(&args),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
