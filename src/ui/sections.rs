use chrono::Timelike;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{FilteredView, ViewRow};
use crate::data::model::{
    GameTable, GAME_DATE, SEASON, TEAM_FG_PERCENTAGE, TEAM_NAME, TEAM_POINTS, TEAM_WIN,
};
use crate::data::stats::KeyMetrics;
use crate::state::{AppState, Section};
use crate::ui::plot;

const HEAD_ROWS: usize = 5;
const DAYS_COLUMN: &str = "days_since_first_game";

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the selected section in the central panel.
pub fn show(ui: &mut Ui, state: &AppState) {
    if let Some(msg) = &state.status_message {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(msg).color(Color32::RED).heading());
        });
        return;
    }

    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a game table to start  (File → Open…)");
        });
        return;
    };

    let view = &state.view;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.section {
            Section::Introduction => introduction(ui, view),
            Section::Overview => overview(ui, table),
            Section::Visualizations => visualizations(ui, view),
            Section::DataExploration => data_exploration(ui, table, view),
            Section::Analysis => analysis(ui, view),
            Section::Conclusion => conclusion(ui),
        });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(label);
            ui.label(RichText::new(value).size(26.0).strong());
        });
    });
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn introduction(ui: &mut Ui, view: &FilteredView) {
    ui.heading(RichText::new("NBA Games Data Exploration Report").size(28.0));
    ui.add_space(8.0);
    ui.heading("Introduction");
    ui.label(
        "This report explores a team's game records for the selected season. \
         It looks for trends in scoring, shooting efficiency and results that \
         help explain how the team performed.",
    );
    ui.add_space(4.0);
    ui.label("The dataset covers:");
    for item in [
        "Points scored per game",
        "Field goal shooting percentage",
        "Win/loss outcomes",
        "Season and date of every game",
    ] {
        ui.label(format!("  • {item}"));
    }

    ui.add_space(12.0);
    ui.heading("Key Performance Metrics");
    let metrics = KeyMetrics::from_view(view);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        metric(ui, "Total Games Played", metrics.total_games.to_string());
        metric(ui, "Total Wins", metrics.total_wins.to_string());
        metric(ui, "Average Points Scored", metrics.average_points_label());
        metric(
            ui,
            "Average Field Goal Percentage",
            metrics.average_fg_percentage_label(),
        );
    });
}

fn overview(ui: &mut Ui, table: &GameTable) {
    ui.heading("Overview");
    ui.label(
        "Each row of the dataset is one game, with the team's points, field \
         goal percentage and result. The sidebar narrows the games to one \
         season and, optionally, to wins or losses only.",
    );
    ui.add_space(8.0);
    ui.strong("Dataset Structure");
    egui::Grid::new("dataset_structure")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (column, description) in [
                (GAME_DATE, "Date of the game"),
                (TEAM_NAME, "Name of the team (optional)"),
                (TEAM_POINTS, "Points scored"),
                (TEAM_FG_PERCENTAGE, "Field goal percentage as a fraction"),
                (TEAM_WIN, "1 for a win, 0 for a loss"),
                (SEASON, "NBA season, e.g. 2021-2022"),
            ] {
                ui.monospace(column);
                ui.label(description);
                ui.end_row();
            }
            for column in table.extra_columns() {
                ui.monospace(column);
                ui.label("Additional column, shown in Data Exploration");
                ui.end_row();
            }
        });
}

fn visualizations(ui: &mut Ui, view: &FilteredView) {
    ui.heading("Visualizations");

    ui.add_space(8.0);
    ui.strong("Points Scored Over Time");
    plot::points_over_time(ui, view);
    ui.label(
        "Points scored in every game of the selection, in date order. Peaks \
         can line up with opponents, individual performances or coaching \
         adjustments.",
    );

    ui.add_space(12.0);
    ui.strong("Field Goal Percentage Distribution");
    plot::fg_percentage_histogram(ui, view);
    ui.label(
        "How often each field goal percentage range occurred. The density \
         curve smooths the histogram to show where shooting efficiency \
         concentrates.",
    );

    ui.add_space(12.0);
    ui.strong("Wins and Losses in the Selected Season");
    plot::win_loss_bars(ui, view);
    ui.label("The win/loss record for the games in view.");
}

fn data_exploration(ui: &mut Ui, table: &GameTable, view: &FilteredView) {
    ui.heading("Data Exploration");
    ui.label("Preparation applied to the dataset before analysis:");
    for step in [
        "Required columns were checked on load.",
        "The game_date column was converted to a date type.",
        "days_since_first_game counts days from the earliest game in the current selection.",
    ] {
        ui.label(format!("  • {step}"));
    }

    ui.add_space(8.0);
    ui.strong("First Few Rows of Data");
    if view.is_empty() {
        ui.label("No games match the current filters.");
        return;
    }

    let mut headers: Vec<&str> = table.column_names.iter().map(String::as_str).collect();
    headers.push(DAYS_COLUMN);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().resizable(true), headers.len())
        .header(20.0, |mut header| {
            for h in &headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|mut body| {
            for row in view.rows.iter().take(HEAD_ROWS) {
                body.row(18.0, |mut table_row| {
                    for h in &headers {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell_text(row, h));
                        });
                    }
                });
            }
        });
}

fn analysis(ui: &mut Ui, view: &FilteredView) {
    ui.heading("Analysis");
    ui.add_space(8.0);
    ui.strong("Regression Analysis: Days Since First Game vs Points Scored");
    plot::regression_plot(ui, view);
    ui.label(
        "The trend line relates the days since the first game of the \
         selection to the points scored, showing whether scoring rose or \
         fell over the season.",
    );
}

fn conclusion(ui: &mut Ui) {
    ui.heading("Conclusion");
    ui.label("Exploring the selected season's games points to a few observations:");
    for (i, point) in [
        "Scoring variability: swings in points scored show how consistent the offense was.",
        "Shooting efficiency: the field goal distribution shows where the team usually shot.",
        "Win-loss dynamics: the record shows how often performances turned into wins.",
        "Future directions: player contributions, defensive metrics and game situations \
         would round out the picture.",
    ]
    .iter()
    .enumerate()
    {
        ui.label(format!("{}. {point}", i + 1));
    }
}

// ---------------------------------------------------------------------------
// Table cells
// ---------------------------------------------------------------------------

fn cell_text(row: &ViewRow, column: &str) -> String {
    let game = &row.game;
    match column {
        GAME_DATE => {
            if game.game_date.num_seconds_from_midnight() == 0 {
                game.game_date.format("%Y-%m-%d").to_string()
            } else {
                game.game_date.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }
        TEAM_NAME => game.team_name.clone().unwrap_or_default(),
        TEAM_POINTS => number_text(game.team_points),
        TEAM_FG_PERCENTAGE => number_text(game.team_fg_percentage),
        TEAM_WIN => match game.team_win {
            Some(true) => "1".to_string(),
            Some(false) => "0".to_string(),
            None => String::new(),
        },
        SEASON => game.season.clone(),
        DAYS_COLUMN => row.days_since_first_game.to_string(),
        other => game.extra.get(other).cloned().unwrap_or_default(),
    }
}

fn number_text(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::game;

    #[test]
    fn cells_render_named_and_extra_columns() {
        let mut g = game("2021-10-19", "2021-2022", Some(true), 106.0);
        g.extra.insert("team_assists".to_string(), "25".to_string());
        let row = ViewRow {
            game: g,
            days_since_first_game: 3,
        };

        assert_eq!(cell_text(&row, GAME_DATE), "2021-10-19");
        assert_eq!(cell_text(&row, TEAM_POINTS), "106");
        assert_eq!(cell_text(&row, TEAM_FG_PERCENTAGE), "0.45");
        assert_eq!(cell_text(&row, TEAM_WIN), "1");
        assert_eq!(cell_text(&row, DAYS_COLUMN), "3");
        assert_eq!(cell_text(&row, "team_assists"), "25");
        assert_eq!(cell_text(&row, "unknown"), "");
    }

    #[test]
    fn blank_numbers_show_nan() {
        let row = ViewRow {
            game: game("2021-10-19", "2021-2022", None, f64::NAN),
            days_since_first_game: 0,
        };
        assert_eq!(cell_text(&row, TEAM_POINTS), "NaN");
        assert_eq!(cell_text(&row, TEAM_WIN), "");
    }
}
