use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDateTime, Utc};
use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::data::filter::FilteredView;
use crate::data::stats::{histogram, kde_curve, linear_fit, win_loss_counts};

const PLOT_HEIGHT: f32 = 320.0;
const FG_BINS: usize = 10;
const SECONDS_PER_DAY: f64 = 86_400.0;

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Plot x coordinate for a date: fractional days since the Unix epoch.
pub fn date_to_x(date: NaiveDateTime) -> f64 {
    date.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}

pub fn x_to_date_label(x: f64) -> String {
    DateTime::<Utc>::from_timestamp((x * SECONDS_PER_DAY).round() as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn date_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    x_to_date_label(mark.value)
}

fn outcome_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    match mark.value {
        v if v == 0.0 => "Loss".to_string(),
        v if v == 1.0 => "Win".to_string(),
        _ => String::new(),
    }
}

fn empty_note(ui: &mut Ui, view: &FilteredView) -> bool {
    if view.is_empty() {
        ui.label("No games match the current filters.");
        return true;
    }
    false
}

// ---------------------------------------------------------------------------
// Points scored over time (line chart)
// ---------------------------------------------------------------------------

pub fn points_over_time(ui: &mut Ui, view: &FilteredView) {
    if empty_note(ui, view) {
        return;
    }

    let mut series: Vec<[f64; 2]> = view
        .games()
        .filter(|g| !g.team_points.is_nan())
        .map(|g| [date_to_x(g.game_date), g.team_points])
        .collect();
    series.sort_by(|a, b| a[0].total_cmp(&b[0]));

    Plot::new("points_over_time")
        .height(PLOT_HEIGHT)
        .x_axis_label("Game Date")
        .y_axis_label("Points Scored")
        .x_axis_formatter(date_axis)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(series.clone()))
                    .color(color::POINTS_LINE)
                    .width(1.5)
                    .name("Points"),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(series))
                    .color(color::POINTS_LINE)
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Field goal percentage distribution (histogram + density)
// ---------------------------------------------------------------------------

pub fn fg_percentage_histogram(ui: &mut Ui, view: &FilteredView) {
    if empty_note(ui, view) {
        return;
    }

    let values: Vec<f64> = view.games().map(|g| g.team_fg_percentage).collect();
    let bins = histogram(&values, FG_BINS);
    let bin_width = bins.first().map(|b| b.width()).unwrap_or(0.0);
    let density = kde_curve(&values, bin_width, 200);

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(color::FG_HISTOGRAM.gamma_multiply(0.6))
        })
        .collect();

    Plot::new("fg_histogram")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Field Goal Percentage")
        .y_axis_label("Frequency")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color::FG_HISTOGRAM).name("Games"));
            if !density.is_empty() {
                plot_ui.line(
                    Line::new(PlotPoints::from(density))
                        .color(color::FG_HISTOGRAM)
                        .width(2.0)
                        .name("Density"),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Wins and losses (bar chart)
// ---------------------------------------------------------------------------

pub fn win_loss_bars(ui: &mut Ui, view: &FilteredView) {
    if empty_note(ui, view) {
        return;
    }

    let counts = win_loss_counts(view);
    let [loss_color, win_color] = color::outcome_colors();
    let bars = vec![
        Bar::new(0.0, counts.losses as f64)
            .width(0.6)
            .fill(loss_color)
            .name("Loss"),
        Bar::new(1.0, counts.wins as f64)
            .width(0.6)
            .fill(win_color)
            .name("Win"),
    ];

    Plot::new("win_loss_bars")
        .height(PLOT_HEIGHT * 0.75)
        .x_axis_label("Result")
        .y_axis_label("Number of Games")
        .x_axis_formatter(outcome_axis)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Days since first game vs points (scatter + trend line)
// ---------------------------------------------------------------------------

pub fn regression_plot(ui: &mut Ui, view: &FilteredView) {
    if empty_note(ui, view) {
        return;
    }

    let points: Vec<[f64; 2]> = view
        .rows
        .iter()
        .filter(|r| !r.game.team_points.is_nan())
        .map(|r| [r.days_since_first_game as f64, r.game.team_points])
        .collect();
    let fit = linear_fit(&points);
    let x_max = points.iter().map(|p| p[0]).fold(0.0, f64::max);

    Plot::new("regression_plot")
        .height(PLOT_HEIGHT * 1.2)
        .legend(Legend::default())
        .x_axis_label("Days Since First Game")
        .y_axis_label("Points Scored")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(color::SCATTER)
                    .radius(3.5)
                    .name("Games"),
            );
            if let Some(fit) = fit {
                let line = vec![[0.0, fit.predict(0.0)], [x_max, fit.predict(x_max)]];
                plot_ui.line(
                    Line::new(PlotPoints::from(line))
                        .color(color::TREND_LINE)
                        .width(2.0)
                        .name("Trend"),
                );
            }
        });

    match fit {
        Some(fit) => {
            ui.label(format!(
                "Trend: {:+.3} points per day (intercept {:.1}).",
                fit.slope, fit.intercept
            ));
        }
        None => {
            ui.label("Not enough spread in the data to fit a trend line.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_axis_labels_follow_dates() {
        let date = NaiveDate::from_ymd_opt(2021, 10, 19)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let x = date_to_x(date);
        assert!((x - 18919.0).abs() < 1e-9);
        assert_eq!(x_to_date_label(x), "2021-10-19");
        assert_eq!(x_to_date_label(x + 7.0), "2021-10-26");
    }
}
