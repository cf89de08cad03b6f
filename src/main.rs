mod cli;

use clap::Parser;
use repohealth::compare::{self, ComparisonSelection};
use repohealth::config;
use repohealth::dataset::{self, RawRecord};
use repohealth::error::HealthError;
use repohealth::query::{self, Clock, FilterCriteria, FixedClock, ScoreRange, SortKey, SystemClock};
use repohealth::recommend;
use repohealth::report::{self, OutputFormat};
use repohealth::search::{SearchOutcome, SearchSession, StaticSource};
use repohealth::types::config::{AppConfig, DisplayFormat};
use repohealth::RepositoryRecord;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const EMPTY_RESULT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, HealthError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd)?;
    let raw = load_raw_records(&cwd, cli.dataset.as_deref(), &cfg)?;
    let records = dataset::adapt(raw.clone())?;
    tracing::info!(count = records.len(), "loaded repositories");

    let format = match cli.format {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => match cfg.display_format() {
            Some(DisplayFormat::Json) => OutputFormat::Json,
            Some(DisplayFormat::Md) | None => OutputFormat::Md,
        },
    };

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let criteria = build_criteria(&cmd.filters, &cfg)?;
            let clock = clock_for(cmd.now.as_deref())?;
            let filtered = query::filter(&records, &criteria, clock.as_ref());
            let sorted = query::sort(filtered, sort_key(cmd.sort), clock.as_ref());
            println!("{}", report::render_ranking("Repositories", &sorted, format)?);
            Ok(exit_for(sorted.is_empty()))
        }
        cli::Commands::Score(cmd) => {
            let record = find_record(&records, &cmd.repo)?;
            let breakdown = record.breakdown()?;
            println!("{}", report::render_breakdown(record, &breakdown, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let mut selection = ComparisonSelection::new();
            for key in &cmd.repos {
                let record = find_record(&records, key)?;
                selection.toggle(&record.id)?;
            }
            let view = compare::build_comparison(&selection, &records)?;
            println!("{}", report::render_comparison(&view, format)?);
            Ok(exit_for(view.filled() == 0))
        }
        cli::Commands::Recommend => {
            let picks = recommend::recommended(&records, &cfg.recommend_settings());
            println!("{}", report::render_ranking("Recommended", &picks, format)?);
            Ok(exit_for(picks.is_empty()))
        }
        cli::Commands::Similar(cmd) => {
            let target = find_record(&records, &cmd.repo)?;
            let picks = recommend::similar(target, &records, &cfg.recommend_settings());
            let title = format!("Similar to {}", target.name);
            println!("{}", report::render_ranking(&title, &picks, format)?);
            Ok(exit_for(picks.is_empty()))
        }
        cli::Commands::Search(cmd) => {
            let criteria = build_criteria(&cmd.filters, &cfg)?;
            let clock = clock_for(cmd.now.as_deref())?;
            let session = SearchSession::with_debounce(StaticSource::new(raw), cfg.debounce());
            tracing::debug!(
                debounce_ms = session.debounce().as_millis() as u64,
                "starting search session"
            );
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let outcome = runtime.block_on(session.submit(&cmd.query, &criteria, &records))?;
            match outcome {
                SearchOutcome::Results(found) => {
                    let filtered = query::filter(&found, &criteria, clock.as_ref());
                    let sorted = query::sort(filtered, sort_key(cmd.sort), clock.as_ref());
                    let title = format!("Search: {}", cmd.query);
                    println!("{}", report::render_ranking(&title, &sorted, format)?);
                    Ok(exit_for(sorted.is_empty()))
                }
                SearchOutcome::Empty => {
                    println!("search: no repositories matched \"{}\"", cmd.query);
                    Ok(exit_code::EMPTY_RESULT)
                }
                SearchOutcome::Superseded => {
                    tracing::warn!(query = %cmd.query, "search was superseded");
                    Ok(exit_code::EMPTY_RESULT)
                }
            }
        }
    }
}

fn load_raw_records(
    cwd: &Path,
    override_path: Option<&Path>,
    cfg: &AppConfig,
) -> Result<Vec<RawRecord>, HealthError> {
    match override_path.or(cfg.dataset_path().map(|path| path.as_path())) {
        Some(path) => {
            let path = cwd.join(path);
            if !path.exists() {
                return Err(HealthError::Dataset(format!(
                    "dataset not found: {}",
                    path.display()
                )));
            }
            dataset::load_raw(&path)
        }
        None => dataset::sample_raw(),
    }
}

fn build_criteria(args: &cli::FilterArgs, cfg: &AppConfig) -> Result<FilterCriteria, HealthError> {
    let health_range = match (args.min_health, args.max_health) {
        (None, None) => None,
        (lo, hi) => Some(ScoreRange::new(lo.unwrap_or(0), hi.unwrap_or(100))?),
    };
    Ok(FilterCriteria {
        languages: args.languages.clone(),
        activity_days: args.activity_days.or(cfg.default_activity_days()),
        health_range,
        min_good_first_issues: args.min_issues,
        has_good_first_issues: args.good_first_issues,
        ci_passing: args.ci_passing,
        has_documentation: args.has_docs,
        license: args.license.clone(),
    })
}

fn clock_for(now: Option<&str>) -> Result<Box<dyn Clock>, HealthError> {
    Ok(match now {
        Some(raw) => Box::new(parse_now(raw)?),
        None => Box::new(SystemClock),
    })
}

fn parse_now(raw: &str) -> Result<FixedClock, HealthError> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|now| FixedClock(now.with_timezone(&chrono::Utc)))
        .map_err(|e| HealthError::InvalidCriteria(format!("--now {raw}: {e}")))
}

fn sort_key(sort: cli::SortBy) -> SortKey {
    match sort {
        cli::SortBy::Health => SortKey::Health,
        cli::SortBy::Stars => SortKey::Stars,
        cli::SortBy::Activity => SortKey::Activity,
        cli::SortBy::Issues => SortKey::Issues,
    }
}

fn find_record<'a>(
    records: &'a [RepositoryRecord],
    key: &str,
) -> Result<&'a RepositoryRecord, HealthError> {
    records
        .iter()
        .find(|record| record.id == key)
        .or_else(|| {
            records
                .iter()
                .find(|record| record.name.eq_ignore_ascii_case(key))
        })
        .ok_or_else(|| HealthError::RecordNotFound(key.to_string()))
}

fn exit_for(empty: bool) -> i32 {
    if empty {
        exit_code::EMPTY_RESULT
    } else {
        exit_code::SUCCESS
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
