// proptrack entry point.
//
// Startup sequence:
// 1. Parse CLI arguments
// 2. Initialize tracing (stderr, env-filter)
// 3. Load config (odds model, report defaults)
// 4. Load the game log
// 5. Compute metrics and insights
// 6. Render the report (text or JSON)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use prop_tracker::analytics::{compute_metrics, insights::generate_insights};
use prop_tracker::config;
use prop_tracker::gamelog;
use prop_tracker::props::{Period, PropType};
use prop_tracker::report::Report;

#[derive(Parser)]
#[command(name = "proptrack")]
#[command(about = "Player prop hit-rate analytics over a game log")]
#[command(version)]
struct Cli {
    /// Game log file (.csv or .json), newest game first
    #[arg(long)]
    log: PathBuf,

    /// Prop to grade (e.g. "Points", "Pts+Reb+Ast", "3-Pointers Made")
    #[arg(long)]
    prop: String,

    /// Betting line (fractional values allowed, e.g. 20.5)
    #[arg(long)]
    line: f64,

    /// Analysis window: last5, last10, or last20 (default from config)
    #[arg(long)]
    period: Option<String>,

    /// Path to props.toml (defaults to ./props.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat unrecognized prop names as Points instead of failing
    #[arg(long)]
    lenient_props: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    // 1. Parse CLI arguments
    let cli = Cli::parse();

    // 2. Initialize tracing (stderr, so stdout stays clean for the report)
    init_tracing(&cli.log_level)?;

    // 3. Load config
    let config = config::load_config(cli.config.as_deref())
        .context("failed to load configuration")?;

    // 4. Resolve the query
    let prop = if cli.lenient_props {
        PropType::parse_lenient(&cli.prop)
    } else {
        cli.prop
            .parse::<PropType>()
            .context("failed to parse --prop")?
    };
    let period = cli
        .period
        .as_deref()
        .unwrap_or(&config.report.period)
        .parse::<Period>()
        .context("failed to parse the analysis period")?;

    // 5. Load the game log and compute
    let log = gamelog::load_game_log(&cli.log).context("failed to load the game log")?;
    info!(
        games = log.len(),
        prop = %prop,
        line = cli.line,
        period = %period,
        "grading prop"
    );
    let metrics = compute_metrics(&log, prop, cli.line, period, &config.odds);
    let insights = generate_insights(&metrics);

    // 6. Render
    let report = Report::new(prop, cli.line, period, &metrics, &insights);
    if cli.json {
        println!("{}", report.to_json().context("failed to encode report")?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("prop_tracker={log_level},warn"))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
