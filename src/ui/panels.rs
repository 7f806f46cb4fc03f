use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::WinLossMode;
use crate::data::model::TeamColumn;
use crate::state::{AppState, Section};

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the left sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("NBA Games Exploration");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Section navigation ----
            ui.strong("Navigate to:");
            for section in Section::ALL {
                ui.radio_value(&mut state.section, section, section.label());
            }
            ui.separator();

            let Some(table) = state.table.clone() else {
                ui.label("No dataset loaded.");
                return;
            };

            // ---- Season selector ----
            ui.strong("Select Season:");
            let mut season = state.selection.season.clone();
            egui::ComboBox::from_id_salt("season")
                .selected_text(&season)
                .show_ui(ui, |ui: &mut Ui| {
                    for s in &table.seasons {
                        ui.selectable_value(&mut season, s.clone(), s);
                    }
                });
            state.set_season(season);
            ui.add_space(4.0);

            // ---- Team selector, only when the column exists ----
            if let TeamColumn::Present(teams) = table.team_column() {
                ui.strong("Select Team:");
                let mut team = state.selection.team.clone();
                let current = team.clone().unwrap_or_else(|| "All teams".to_string());
                egui::ComboBox::from_id_salt("team")
                    .selected_text(current)
                    .show_ui(ui, |ui: &mut Ui| {
                        ui.selectable_value(&mut team, None, "All teams");
                        for name in teams {
                            ui.selectable_value(&mut team, Some(name.clone()), name);
                        }
                    });
                state.set_team(team);
                ui.add_space(4.0);
            }

            // ---- Win / loss filter ----
            ui.strong("Win/Loss Filter:");
            let mut outcome = state.selection.outcome;
            for mode in WinLossMode::ALL {
                ui.radio_value(&mut outcome, mode, mode.label());
            }
            state.set_outcome(outcome);

            // ---- Data-quality warnings ----
            if !state.warnings.is_empty() {
                ui.separator();
                for warning in &state.warnings {
                    ui.label(RichText::new(warning.to_string()).color(Color32::from_rgb(230, 160, 0)));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(path)) = (&state.table, &state.source) {
            ui.label(format!(
                "{}: {} games loaded, {} in view",
                path.display(),
                table.len(),
                state.view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open NBA game data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
