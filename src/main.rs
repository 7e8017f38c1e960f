mod cli;
mod config;
mod error;
mod logging;
mod report;
mod scoring;
mod stats;
mod store;
mod types;

use crate::error::{EvalError, Result};
use crate::scoring::policy::RatingPolicy;
use crate::scoring::status::Status;
use crate::store::EvaluationLog;
use crate::types::evaluation::EvaluationDraft;
use crate::types::scoring::{Criteria, Weights};
use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Settings {
    weights: Weights,
    policy: RatingPolicy,
    store_path: PathBuf,
}

fn resolve_settings(root: &Path) -> Result<Settings> {
    let cfg = config::load_config(root)?.unwrap_or_default();
    Ok(Settings {
        weights: cfg.weights(),
        policy: cfg.rating_policy(),
        store_path: root.join(cfg.store_path()),
    })
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn status_filter(filter: cli::StatusFilter) -> Status {
    match filter {
        cli::StatusFilter::Excellent => Status::Excellent,
        cli::StatusFilter::VeryGood => Status::VeryGood,
        cli::StatusFilter::Good => Status::Good,
        cli::StatusFilter::Deficient => Status::Deficient,
        cli::StatusFilter::Critical => Status::Critical,
    }
}

fn criteria(ratings: cli::RatingArgs) -> Criteria {
    Criteria::new(
        ratings.quality,
        ratings.delivery,
        ratings.price,
        ratings.service,
    )
}

fn run(cli: cli::Cli) -> Result<i32> {
    let settings = resolve_settings(&cli.root)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let checked = settings.policy.apply(criteria(cmd.ratings))?;
            let card = scoring::score_card(checked, &settings.weights);
            let rendered =
                report::render(report::View::Preview(&card), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Add(cmd) => {
            let mut log = EvaluationLog::open(&settings.store_path)?;
            let draft = EvaluationDraft {
                supplier: cmd.supplier,
                date: cmd.date,
                criteria: criteria(cmd.ratings),
                comment: cmd.comment,
                evaluator: cmd.evaluator,
            };
            let recorded = log.record(draft, settings.policy, Utc::now())?.clone();
            log.save(&settings.weights)?;
            info!(path = %log.path().display(), "evaluation log updated");

            let scored = scoring::scored(&recorded, &settings.weights);
            let rendered =
                report::render(report::View::Detail(&scored), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let log = EvaluationLog::open(&settings.store_path)?;
            let found = stats::filter::filter_evaluations(
                log.evaluations(),
                cmd.search.as_deref(),
                cmd.status.map(status_filter),
                &settings.weights,
            );
            let shown = found
                .into_iter()
                .map(|evaluation| scoring::scored(evaluation, &settings.weights))
                .collect::<Vec<_>>();
            let rendered = report::render(
                report::View::List {
                    shown: &shown,
                    total: log.evaluations().len(),
                },
                output_format(cmd.format),
            )?;
            println!("{rendered}");

            if shown.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Show(cmd) => {
            let log = EvaluationLog::open(&settings.store_path)?;
            let scored = scoring::scored(log.find(&cmd.id)?, &settings.weights);
            let rendered =
                report::render(report::View::Detail(&scored), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Summary(cmd) => {
            let log = EvaluationLog::open(&settings.store_path)?;
            let summary = stats::summary_report(log.evaluations(), &settings.weights);
            let rendered =
                report::render(report::View::Summary(&summary), output_format(cmd.format))?;
            println!("{rendered}");

            if summary.total == 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn exit_code_for(error: &EvalError) -> i32 {
    if error.is_invalid_input() {
        exit_code::INVALID_INPUT
    } else {
        exit_code::RUNTIME_FAILURE
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
