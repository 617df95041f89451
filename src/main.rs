// Calendar Layout
// Command line entry point: lay out exported events for one or more days

use std::path::PathBuf;

use anyhow::{Context, Result};
use calendar_layout::models::layout::{DayLayout, Px};
use calendar_layout::models::settings::LayoutSettings;
use calendar_layout::services::event::load_events;
use calendar_layout::services::layout::{HourLine, LayoutService, SystemClock};
use calendar_layout::services::settings::SettingsService;
use calendar_layout::utils::date::{day_span, parse_day};
use chrono::{Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "calendar-layout")]
#[command(about = "Compute day-view calendar layouts from exported events")]
struct Cli {
    /// Settings file (defaults to $CALENDAR_LAYOUT_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out events and print the geometry as JSON
    Layout {
        /// JSON file holding an array of event records
        #[arg(short, long)]
        events: PathBuf,

        /// First day to lay out (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_day)]
        date: Option<NaiveDate>,

        /// Number of consecutive days
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=31))]
        days: u32,

        /// Include hour grid lines in the output
        #[arg(long)]
        grid: bool,
    },
    /// Write a settings file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings as TOML
    ShowConfig,
}

#[derive(Serialize)]
struct LayoutReport {
    hour_height: Px,
    total_height: Px,
    #[serde(skip_serializing_if = "Option::is_none")]
    hour_lines: Option<Vec<HourLine>>,
    days: Vec<DayReport>,
}

#[derive(Serialize)]
struct DayReport {
    #[serde(flatten)]
    layout: DayLayout,
    now_indicator: Option<Px>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = SettingsService::locate(cli.config.as_deref())?;

    match cli.command {
        Commands::Layout {
            events,
            date,
            days,
            grid,
        } => {
            let settings = settings_service.load()?;
            let request = LayoutRequest {
                events,
                date,
                days,
                grid,
            };
            match settings.resolve_timezone()? {
                Some(tz) => run_layout(&settings, tz, &request),
                None => run_layout(&settings, Local, &request),
            }
        }
        Commands::InitConfig { force } => {
            let written = settings_service.init(force)?;
            if written {
                println!("Wrote default settings to {}", settings_service.path().display());
            } else {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    settings_service.path().display()
                );
            }
            Ok(())
        }
        Commands::ShowConfig => {
            let settings = settings_service.load()?;
            let rendered =
                toml::to_string_pretty(&settings).context("Failed to render settings")?;
            println!("# {}", settings_service.path().display());
            print!("{}", rendered);
            Ok(())
        }
    }
}

struct LayoutRequest {
    events: PathBuf,
    date: Option<NaiveDate>,
    days: u32,
    grid: bool,
}

fn run_layout<Tz: TimeZone>(
    settings: &LayoutSettings,
    tz: Tz,
    request: &LayoutRequest,
) -> Result<()> {
    let events = load_events(&request.events, &tz)
        .with_context(|| format!("Failed to load events from {}", request.events.display()))?;

    let clock = SystemClock;
    let service = LayoutService::new(settings, tz, &clock);

    let first_day = request.date.unwrap_or_else(|| service.today());
    let days = day_span(first_day, request.days);
    log::info!(
        "Laying out {} event(s) over {} day(s) from {}",
        events.len(),
        days.len(),
        first_day
    );

    let grid = service.grid();
    let report = LayoutReport {
        hour_height: grid.hour_height,
        total_height: grid.total_height(),
        hour_lines: request.grid.then(|| grid.hour_lines(settings.time_format)),
        days: service
            .range(&events, &days)
            .into_iter()
            .map(|layout| DayReport {
                now_indicator: service.now_indicator(layout.day),
                layout,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to render layout")?;
    println!("{}", json);
    Ok(())
}
