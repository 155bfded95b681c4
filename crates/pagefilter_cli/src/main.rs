//! pagefilter CLI: normalize, state, period, summary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagefilter::{
    coerce_stats_period, get_state_from_query, normalize_date_time_params, parse_query_string,
    pick_page_filter_params, NormalizeOptions, QueryParams,
};
use pagefilter_report::{build_summary, render_summary};
use std::path::PathBuf;
use time::UtcOffset;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::Normalize(args) => run_normalize(args),
        Command::State(args) => run_state(args),
        Command::Period(args) => run_period(args),
        Command::Summary(args) => run_summary(args),
    }
}

#[derive(Parser)]
#[command(name = "pagefilter")]
#[command(author = "gorusys <goru.connector@outlook.com>")]
#[command(about = "Normalize dashboard page filter query parameters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the time range of a query string.
    Normalize(NormalizeArgs),
    /// Build the full page filter state (projects, environments, time range, UTC).
    State(StateArgs),
    /// Print the canonical form of a stats period.
    Period(PeriodArgs),
    /// Print a human-readable summary of the page filters.
    Summary(SummaryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// URL query string, with or without the leading `?`.
    #[arg(long)]
    query: String,
    /// JSON file with normalize options (defaults to PAGEFILTER_CONFIG_PATH / ./config/pagefilter.json).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    allow_empty_period: bool,
    #[arg(long)]
    default_stats_period: Option<String>,
    #[arg(long)]
    no_absolute_datetime: bool,
    #[arg(long)]
    absolute_page_datetime: bool,
    /// Keep only the page filter parameters before normalizing.
    #[arg(long)]
    pick: bool,
    /// Extra keys kept by --pick (e.g. cursor).
    #[arg(long = "keep")]
    keep: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Query,
}

#[derive(Args)]
struct NormalizeArgs {
    #[command(flatten)]
    query: QueryArgs,
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Args)]
struct StateArgs {
    #[command(flatten)]
    query: QueryArgs,
    /// Show start/end in the local UTC offset instead of UTC.
    #[arg(long)]
    local: bool,
}

#[derive(Args)]
struct PeriodArgs {
    input: String,
}

#[derive(Args)]
struct SummaryArgs {
    #[command(flatten)]
    query: QueryArgs,
    #[arg(long)]
    out: Option<PathBuf>,
}

impl QueryArgs {
    fn options(&self) -> NormalizeOptions {
        let mut options = match &self.config {
            Some(path) => NormalizeOptions::load_from_path(path),
            None => NormalizeOptions::load(),
        };
        if self.allow_empty_period {
            options.allow_empty_period = true;
        }
        if let Some(period) = &self.default_stats_period {
            options.default_stats_period = Some(period.clone());
        }
        if self.no_absolute_datetime {
            options.allow_absolute_datetime = false;
        }
        if self.absolute_page_datetime {
            options.allow_absolute_page_datetime = true;
        }
        options
    }

    fn params(&self) -> QueryParams {
        let params = parse_query_string(&self.query);
        if !self.pick {
            return params;
        }
        let keep: Vec<&str> = self.keep.iter().map(String::as_str).collect();
        pick_page_filter_params(&params, &keep)
    }
}

fn run_normalize(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.query.options();
    let params = args.query.params();
    let parsed = normalize_date_time_params(&params, &options);
    info!(
        period = ?parsed.stats_period,
        absolute = parsed.has_absolute_range(),
        "normalized"
    );
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        OutputFormat::Query => println!("{}", parsed.to_query_string()),
    }
    Ok(())
}

fn run_state(args: StateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.query.options();
    let mut state = get_state_from_query(&args.query.params(), &options);
    if args.local {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
            warn!(error = %e, "local offset unavailable, using UTC");
            UtcOffset::UTC
        });
        state = state.into_local(offset);
    }
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn run_period(args: PeriodArgs) -> Result<(), Box<dyn std::error::Error>> {
    match coerce_stats_period(&args.input) {
        Some(period) => {
            println!("{}", period);
            Ok(())
        }
        None => {
            eprintln!("INVALID\t{}", args.input);
            std::process::exit(1);
        }
    }
}

fn run_summary(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.query.options();
    let state = get_state_from_query(&args.query.params(), &options);
    match args.out {
        Some(path) => {
            render_summary(&state, &path)?;
            info!(?path, "summary written");
        }
        None => print!("{}", build_summary(&state)),
    }
    Ok(())
}
