// Workshop Countdown
// Main entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};

use workshop_countdown::services::catalog::load_catalog;
use workshop_countdown::services::clock::{Clock, FixedClock, OffsetClock, SystemClock};
use workshop_countdown::services::format::{
    format_countdown, format_countdown_heading, format_instant, format_session_date,
    format_status_line,
};
use workshop_countdown::services::schedule::Scheduler;
use workshop_countdown::services::settings::{self, Settings};
use workshop_countdown::services::ticker::CountdownTicker;
use workshop_countdown::utils::date::parse_instant;
use workshop_countdown::{AnnotatedOccurrence, CountdownSnapshot};

#[derive(Parser)]
#[command(name = "workshop-countdown")]
#[command(about = "Show the workshop schedule and a live countdown to the next session")]
struct Cli {
    /// Settings file (defaults to settings.toml in the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Occurrence catalog, overriding the one named in settings
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every occurrence with its status and the current countdown
    Status {
        /// Evaluate at this instant instead of now (e.g. "2025-11-01T00:00:00Z")
        #[arg(long)]
        at: Option<String>,
    },
    /// Keep the countdown and statuses updating until Ctrl-C
    Watch {
        /// Start the simulated clock at this instant; it then advances in real time
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the date of the next monthly session
    NextSession {
        /// Evaluate at this instant instead of now
        #[arg(long)]
        at: Option<String>,
    },
}

struct AppContext {
    settings: Settings,
    catalog_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = load_context(cli.config.as_deref(), cli.catalog)?;

    match cli.command {
        Commands::Status { at } => cmd_status(&ctx, at.as_deref()),
        Commands::Watch { at } => cmd_watch(&ctx, at.as_deref()).await,
        Commands::NextSession { at } => cmd_next_session(&ctx, at.as_deref()),
    }
}

fn load_context(config: Option<&Path>, catalog: Option<PathBuf>) -> Result<AppContext> {
    let settings_path = match config {
        Some(path) => path.to_path_buf(),
        None => settings::default_settings_path()?,
    };
    let settings = settings::load_settings(&settings_path)?;

    let base_dir = settings_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let catalog_path = catalog.unwrap_or_else(|| settings.resolve_catalog_path(&base_dir));

    log::debug!(
        "Using settings {} and catalog {}",
        settings_path.display(),
        catalog_path.display()
    );

    Ok(AppContext {
        settings,
        catalog_path,
    })
}

fn parse_at(at: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    at.map(|raw| {
        parse_instant(raw).with_context(|| format!("could not read --at value {:?} as a date", raw))
    })
    .transpose()
}

fn cmd_status(ctx: &AppContext, at: Option<&str>) -> Result<()> {
    let clock: Arc<dyn Clock> = match parse_at(at)? {
        Some(instant) => Arc::new(FixedClock::new(instant)),
        None => Arc::new(SystemClock),
    };
    let occurrences = load_catalog(&ctx.catalog_path)?;
    let view = Scheduler::new(occurrences, clock).view();

    println!("As of {}", format_instant(&view.evaluated_at.with_timezone(&Local)));
    println!();
    print_statuses(&view.occurrences);
    println!();
    print_countdown(&view.countdown);

    Ok(())
}

async fn cmd_watch(ctx: &AppContext, at: Option<&str>) -> Result<()> {
    let clock: Arc<dyn Clock> = match parse_at(at)? {
        Some(instant) => Arc::new(OffsetClock::starting_at(instant)),
        None => Arc::new(SystemClock),
    };
    let occurrences = load_catalog(&ctx.catalog_path)?;
    let scheduler = Scheduler::new(occurrences, clock);
    let ticker = CountdownTicker::spawn(scheduler, ctx.settings.ticker_config());

    let mut countdown_rx = ticker.countdown();
    let mut status_rx = ticker.statuses();

    loop {
        redraw(&status_rx.borrow_and_update(), &countdown_rx.borrow_and_update());

        tokio::select! {
            changed = countdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl-C")?;
                break;
            }
        }
    }

    ticker.shutdown().await
}

fn cmd_next_session(ctx: &AppContext, at: Option<&str>) -> Result<()> {
    let now = parse_at(at)?.unwrap_or_else(Utc::now).with_timezone(&Local);
    let rule = ctx.settings.session_rule();
    let next = rule.next_session(&now);

    println!("{}: {}", rule.describe(), format_session_date(next));
    Ok(())
}

fn redraw(statuses: &[AnnotatedOccurrence], countdown: &CountdownSnapshot) {
    // Clear screen and home the cursor
    print!("\x1b[2J\x1b[H");
    print_statuses(statuses);
    println!();
    print_countdown(countdown);
    println!();
    println!("Press Ctrl-C to exit.");
}

fn print_statuses(statuses: &[AnnotatedOccurrence]) {
    if statuses.is_empty() {
        println!("No workshops in the catalog.");
        return;
    }
    for annotated in statuses {
        println!("{}", format_status_line(annotated, &Local));
    }
}

fn print_countdown(countdown: &CountdownSnapshot) {
    println!("{}", format_countdown_heading(countdown, &Local));
    println!("  {}", format_countdown(countdown));
}
