use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

use stocked_config::{load_config_from, AppConfig};
use stocked_core::{normalize_symbol, Quote};
use stocked_indicators::{align_for_comparison, analyze, IndicatorKind};

use crate::input::read_series;
use crate::telemetry::init_tracing;

#[derive(Parser)]
#[command(author, version, about = "Indicator overlays and comparisons for price series")]
struct Cli {
    /// Configuration environment; loads <config-dir>/<env>.toml over default.toml
    #[arg(long, default_value = "default", global = true)]
    env: String,
    /// Directory holding the configuration files
    #[arg(long, default_value = "config", global = true)]
    config_dir: PathBuf,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indicator overlays and panels for a price series
    Analyze(AnalyzeArgs),
    /// Rebase two price series onto a common 100 baseline
    Compare(CompareArgs),
    /// Build a quote from a last price and the previous close
    Quote(QuoteArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// CSV file with a header row and date/price columns
    #[arg(long)]
    input: PathBuf,
    /// Enable an indicator on top of the configured ones (repeatable)
    #[arg(long = "indicator", value_enum)]
    indicators: Vec<IndicatorArg>,
    /// Close before the first sample, used for the first row's direction
    #[arg(long)]
    previous_close: Option<f64>,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    /// Series whose dates drive the output
    #[arg(long)]
    primary: PathBuf,
    /// Series overlaid on the primary; omitted shows the primary alone
    #[arg(long)]
    secondary: Option<PathBuf>,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct QuoteArgs {
    /// Ticker or index alias such as DOW or SPX
    #[arg(long)]
    symbol: String,
    /// Last traded price
    #[arg(long)]
    price: Option<f64>,
    /// Close of the previous session
    #[arg(long)]
    previous_close: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IndicatorArg {
    Sma,
    Ema,
    Rsi,
    Macd,
    Bollinger,
}

impl From<IndicatorArg> for IndicatorKind {
    fn from(value: IndicatorArg) -> Self {
        match value {
            IndicatorArg::Sma => IndicatorKind::Sma,
            IndicatorArg::Ema => IndicatorKind::Ema,
            IndicatorArg::Rsi => IndicatorKind::Rsi,
            IndicatorArg::Macd => IndicatorKind::Macd,
            IndicatorArg::Bollinger => IndicatorKind::Bollinger,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config_from(&cli.config_dir, Some(&cli.env))?;
    init_tracing(&config.log, cli.verbose)?;

    match cli.command {
        Commands::Analyze(args) => run_analyze(args, config),
        Commands::Compare(args) => run_compare(args, &config),
        Commands::Quote(args) => run_quote(args),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs, mut config: AppConfig) -> Result<()> {
    for indicator in args.indicators {
        config.indicators.enable(indicator.into());
    }
    let series = read_series(&args.input, &config.data)?;
    if series.is_empty() {
        warn!(input = %args.input.display(), "price series is empty");
    }

    let analysis = analyze(&series, &config.indicators, args.previous_close)
        .context("failed to compute indicators")?;
    info!(
        rows = analysis.rows.len(),
        rsi = analysis.rsi.len(),
        macd = analysis.macd.is_some(),
        "analysis complete"
    );
    write_json(&analysis, args.output.as_deref())
}

fn run_compare(args: CompareArgs, config: &AppConfig) -> Result<()> {
    let primary = read_series(&args.primary, &config.data)?;
    let secondary = match &args.secondary {
        Some(path) => read_series(path, &config.data)?,
        None => Vec::new(),
    };

    let aligned = align_for_comparison(&primary, &secondary);
    let overlaid = aligned.iter().filter(|point| point.p2.is_some()).count();
    info!(rows = aligned.len(), overlaid, "comparison aligned");
    write_json(&aligned, args.output.as_deref())
}

fn run_quote(args: QuoteArgs) -> Result<()> {
    let symbol = normalize_symbol(&args.symbol);
    let quote = Quote::from_market(symbol, args.price, args.previous_close);
    write_json(&quote, None)
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
