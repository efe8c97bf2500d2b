use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use staydel_domain::{Action, ReportSink, ScheduleConfig, SweepConfig};
use staydel_infra::StayDelInfra;
use staydel_services::{MarkerStoreService, ScriptGenService, SweepScheduler, SweepService};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("STAYDEL_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "staydel_main={log_level},staydel_services={log_level},staydel_infra={log_level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let infra = Arc::new(StayDelInfra::new());
    let failures = run(cli, infra).await?;
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Dispatches the parsed command; returns how many failures were reported,
/// which drives the process exit status.
async fn run(cli: Cli, infra: Arc<StayDelInfra>) -> Result<usize> {
    match cli.command {
        Command::Mark { keep, files } => {
            let action = if keep { Action::Keep } else { Action::Delete };
            let store = MarkerStoreService::new(infra.clone());
            Ok(store.mark_all(&files, action).await)
        }

        Command::MarkFrom { lists } => {
            let store = MarkerStoreService::new(infra.clone());
            let mut failures = 0;
            for list in &lists {
                match store.mark_from(list).await {
                    Ok(count) => failures += count,
                    Err(error) => {
                        infra.error(&format!("{error:#}"));
                        failures += 1;
                    }
                }
            }
            Ok(failures)
        }

        Command::Sweep {
            repeats,
            period,
            expiry_months,
            verbose,
            paths,
        } => {
            let config = SweepConfig::default()
                .expiry_months(expiry_months)
                .verbose(verbose || cli.verbose);
            let sweep = SweepService::new(infra.clone(), config);
            let scheduler = SweepScheduler::new(
                infra.clone(),
                ScheduleConfig::default().repeats(repeats).period(period),
            );

            let stats = scheduler.run(&sweep, &paths).await;
            infra.progress(&format!(
                "Swept {} marker folders: {} deleted, {} purged, {} kept, {} errors",
                stats.folders, stats.deleted, stats.purged, stats.kept, stats.errors
            ));
            Ok(stats.errors)
        }

        Command::GenScripts { lists } => {
            let service = ScriptGenService::new(infra.clone());
            service.generate(&lists).await
        }
    }
}
