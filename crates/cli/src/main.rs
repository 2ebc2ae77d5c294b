use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use release_filter::filters::{FormatFilter, TagListFilter, YearListFilter};
use release_filter::{
    AdmissionFilter, FilterConfig, FilterPipeline, Release, StdoutSink, TraceSink, TracingSink,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const EXIT_ADMITTED: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_REJECTED: u8 = 2;

/// release-filter - Keep or drop music releases by year and genre tag
#[derive(Parser)]
#[command(name = "release-filter")]
#[command(about = "Decide whether a music release is admitted by year or allowlisted tag", long_about = None)]
struct Cli {
    /// JSON config file (allowed_tags, year_threshold, verbose_rejections)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Allowlisted tag, in scan order (repeatable; replaces the configured list)
    #[arg(long = "allowed-tag")]
    allowed_tags: Vec<String>,

    /// Releases from this year on are admitted regardless of tags
    #[arg(long)]
    year_threshold: Option<i32>,

    /// Include year and tags in rejection trace lines
    #[arg(long, overrides_with = "no_verbose_rejections")]
    verbose_rejections: bool,

    /// Name-only rejection trace lines, even if the config file says otherwise
    #[arg(long, overrides_with = "verbose_rejections")]
    no_verbose_rejections: bool,

    /// Only consider releases from this year (repeatable)
    #[arg(long = "filter-year")]
    filter_years: Vec<i32>,

    /// Only consider releases carrying this tag (repeatable)
    #[arg(long = "filter-tag")]
    filter_tags: Vec<String>,

    /// Only consider releases in this format (repeatable)
    #[arg(long = "filter-format")]
    filter_formats: Vec<String>,

    /// Where trace lines are written
    #[arg(long, value_enum, default_value_t = TraceTarget::Stdout)]
    trace_sink: TraceTarget,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TraceTarget {
    Stdout,
    Tracing,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one release given as flags
    Check {
        /// Release name
        #[arg(long)]
        name: String,

        /// Release year
        #[arg(long)]
        year: i32,

        /// Release tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Release format, e.g. FLAC
        #[arg(long)]
        format: Option<String>,
    },

    /// Evaluate one release given as a JSON object
    CheckJson {
        /// e.g. '{"year": 2010, "name": "B", "tags": ["glitch"]}'
        record: String,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute a parsed command line and return the process exit status.
fn run(cli: Cli) -> Result<u8> {
    let config = Arc::new(resolve_config(&cli)?);

    let sink: Arc<dyn TraceSink> = match cli.trace_sink {
        TraceTarget::Stdout => Arc::new(StdoutSink),
        TraceTarget::Tracing => Arc::new(TracingSink),
    };

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Check {
            name,
            year,
            tags,
            format,
        } => {
            let mut release = Release::new(*year, name.clone()).with_tags(tags.iter().cloned());
            release.format = format.clone();
            let pipeline = build_pipeline(&cli, config, sink);
            handle_check(&pipeline, release)
        }
        Commands::CheckJson { record } => {
            let release = parse_record(record)?;
            let pipeline = build_pipeline(&cli, config, sink);
            handle_check(&pipeline, release)
        }
        Commands::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(config.as_ref())?);
            Ok(EXIT_ADMITTED)
        }
    }
}

/// Build the config from the optional file, then apply flag overrides.
fn resolve_config(cli: &Cli) -> Result<FilterConfig> {
    let mut config = match &cli.config {
        Some(path) => FilterConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if !cli.allowed_tags.is_empty() {
        config = config.with_allowed_tags(cli.allowed_tags.iter().cloned());
    }
    if let Some(year_threshold) = cli.year_threshold {
        config = config.with_year_threshold(year_threshold);
    }
    if cli.verbose_rejections {
        config = config.with_verbose_rejections(true);
    } else if cli.no_verbose_rejections {
        config = config.with_verbose_rejections(false);
    }

    config.validated().context("Invalid filter configuration")
}

/// Pre-selection by year, tag and format, then admission.
///
/// Empty pre-selection lists pass everything through. A release dropped
/// before admission gets no trace line.
fn build_pipeline(
    cli: &Cli,
    config: Arc<FilterConfig>,
    sink: Arc<dyn TraceSink>,
) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(YearListFilter::new(cli.filter_years.iter().copied()))
        .add_filter(TagListFilter::new(cli.filter_tags.iter().cloned()))
        .add_filter(FormatFilter::new(cli.filter_formats.iter().cloned()))
        .add_filter(AdmissionFilter::new(config, sink))
}

fn parse_record(record: &str) -> Result<Release> {
    let value: serde_json::Value =
        serde_json::from_str(record).context("Record is not valid JSON")?;
    Release::from_json_value(&value).context("Failed to read release record")
}

/// Handle the 'check' and 'check-json' commands
fn handle_check(pipeline: &FilterPipeline, release: Release) -> Result<u8> {
    let name = release.name.clone();
    let kept = pipeline.apply(vec![release])?;

    if kept.is_empty() {
        eprintln!("{} {} rejected", "✗".red(), name.bold());
        Ok(EXIT_REJECTED)
    } else {
        eprintln!("{} {} admitted", "✓".green(), name.bold());
        Ok(EXIT_ADMITTED)
    }
}
