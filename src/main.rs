use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Parser;
use flotilla::{
    AppError, InMemoryFlotillaRepository, PipelineConfig, RosterFile, SeasonService, TracingSink,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Assign boats and crew to the upcoming events of a season.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Roster file with the season, boats and crews as JSON
    #[arg(long)]
    roster: PathBuf,

    /// Treat this date as today (defaults to the local date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Pretty-print the resulting flotillas
    #[arg(long)]
    pretty: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flotilla=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!(%err, "Season update failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    info!(roster = %args.roster.display(), "Loading roster");
    let raw = tokio::fs::read_to_string(&args.roster).await?;
    let RosterFile {
        season,
        mut boats,
        mut crews,
    } = serde_json::from_str(&raw)?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = SeasonService::new(
        PipelineConfig::from_env(),
        Arc::new(InMemoryFlotillaRepository::new()),
        Arc::new(TracingSink::new()),
    );

    let flotillas = service
        .update_season(&season, &mut boats, &mut crews, today)
        .await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&flotillas)?
    } else {
        serde_json::to_string(&flotillas)?
    };
    println!("{output}");
    Ok(())
}
