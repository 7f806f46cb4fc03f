mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::NbaReportApp;
use clap::Parser;
use config::Cli;
use data::filter::filter_games;
use data::loader::DatasetCache;
use data::stats::KeyMetrics;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.summary {
        return print_summary(&cli);
    }

    let mut state = AppState {
        section: cli.section,
        ..AppState::default()
    };
    state.open(&cli.data);
    if let Some(table) = state.table.clone() {
        state.selection = cli.selection_for(&table);
        state.refilter();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NBA Games Data Exploration Report",
        options,
        Box::new(|_cc| Ok(Box::new(NbaReportApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the report window: {e}"))
}

/// Headless mode: print the key metrics for the command-line selection.
fn print_summary(cli: &Cli) -> Result<()> {
    let mut cache = DatasetCache::new();
    let table = cache
        .load(&cli.data)
        .with_context(|| format!("loading {}", cli.data.display()))?;

    let selection = cli.selection_for(&table);
    let outcome = filter_games(&table, &selection);
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    let metrics = KeyMetrics::from_view(&outcome.view);
    println!("Season: {} ({})", selection.season, selection.outcome);
    if let Some(team) = &selection.team {
        println!("Team: {team}");
    }
    println!("Total Games Played: {}", metrics.total_games);
    println!("Total Wins: {}", metrics.total_wins);
    println!("Average Points Scored: {}", metrics.average_points_label());
    println!(
        "Average Field Goal Percentage: {}",
        metrics.average_fg_percentage_label()
    );
    Ok(())
}
