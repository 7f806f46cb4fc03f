use super::filter::FilteredView;

// ---------------------------------------------------------------------------
// Key metrics
// ---------------------------------------------------------------------------

/// Headline numbers for the Introduction section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMetrics {
    pub total_games: usize,
    pub total_wins: usize,
    /// `None` when no game in the view has a points value.
    pub average_points: Option<f64>,
    /// Mean field-goal fraction, `None` when there is nothing to average.
    pub average_fg_percentage: Option<f64>,
}

impl KeyMetrics {
    pub fn from_view(view: &FilteredView) -> Self {
        KeyMetrics {
            total_games: view.len(),
            total_wins: view.games().filter(|g| g.is_win()).count(),
            average_points: mean(view.games().map(|g| g.team_points)),
            average_fg_percentage: mean(view.games().map(|g| g.team_fg_percentage)),
        }
    }

    pub fn average_points_label(&self) -> String {
        match self.average_points {
            Some(v) => format!("{:.2}", round2(v)),
            None => "N/A".to_string(),
        }
    }

    pub fn average_fg_percentage_label(&self) -> String {
        match self.average_fg_percentage {
            Some(v) => format!("{:.2}%", round2(v * 100.0)),
            None => "N/A".to_string(),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Mean of the non-NaN values.
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Wins and losses in a view; games with no recorded outcome are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLossCounts {
    pub losses: usize,
    pub wins: usize,
}

pub fn win_loss_counts(view: &FilteredView) -> WinLossCounts {
    view.games().fold(WinLossCounts::default(), |mut acc, g| {
        match g.team_win {
            Some(true) => acc.wins += 1,
            Some(false) => acc.losses += 1,
            None => {}
        }
        acc
    })
}

// ---------------------------------------------------------------------------
// Histogram with density overlay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Equal-width bins spanning the finite values; the last bin is closed on
/// the right. A single distinct value gets a unit-wide range centred on it.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((mut lo, mut hi)) = finite_range(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Gaussian kernel density estimate scaled to histogram counts.
///
/// Bandwidth follows Scott's rule (sample std × n^(-1/5)). The curve is
/// evaluated at `samples` evenly spaced points across the data range and
/// multiplied by `n × bin_width` so it overlays a count histogram.
pub fn kde_curve(values: &[f64], bin_width: f64, samples: usize) -> Vec<[f64; 2]> {
    let data: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = data.len();
    if n < 2 || samples < 2 {
        return Vec::new();
    }

    let mean = data.iter().sum::<f64>() / n as f64;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev <= f64::EPSILON {
        return Vec::new();
    }
    let bandwidth = std_dev * (n as f64).powf(-0.2);

    let (lo, hi) = match finite_range(&data) {
        Some(range) => range,
        None => return Vec::new(),
    };
    let step = (hi - lo) / (samples - 1) as f64;
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..samples)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = data
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trend line
// ---------------------------------------------------------------------------

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through the finite points. `None` with fewer than two points
/// or when every x is the same.
pub fn linear_fit(points: &[[f64; 2]]) -> Option<LinearFit> {
    let pts: Vec<[f64; 2]> = points
        .iter()
        .copied()
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .collect();
    if pts.len() < 2 {
        return None;
    }

    let n = pts.len() as f64;
    let mean_x = pts.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = pts.iter().map(|p| p[1]).sum::<f64>() / n;
    let sxx: f64 = pts.iter().map(|p| (p[0] - mean_x).powi(2)).sum();
    let sxy: f64 = pts.iter().map(|p| (p[0] - mean_x) * (p[1] - mean_y)).sum();
    if sxx <= f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ViewRow;
    use crate::data::model::tests::game;

    fn view(games: Vec<crate::data::model::GameRecord>) -> FilteredView {
        FilteredView {
            rows: games
                .into_iter()
                .map(|game| ViewRow {
                    game,
                    days_since_first_game: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn metrics_for_empty_view() {
        let m = KeyMetrics::from_view(&FilteredView::default());
        assert_eq!(m.total_games, 0);
        assert_eq!(m.total_wins, 0);
        assert_eq!(m.average_points, None);
        assert_eq!(m.average_points_label(), "N/A");
        assert_eq!(m.average_fg_percentage_label(), "N/A");
    }

    #[test]
    fn metrics_skip_blank_cells() {
        let v = view(vec![
            game("2021-10-19", "s", Some(true), 100.0),
            game("2021-10-20", "s", Some(false), f64::NAN),
            game("2021-10-21", "s", Some(true), 111.0),
        ]);
        let m = KeyMetrics::from_view(&v);
        assert_eq!(m.total_games, 3);
        assert_eq!(m.total_wins, 2);
        assert_eq!(m.average_points_label(), "105.50");
        assert_eq!(m.average_fg_percentage_label(), "45.00%");
    }

    #[test]
    fn win_loss_counts_ignore_unknown() {
        let v = view(vec![
            game("2021-10-19", "s", Some(true), 1.0),
            game("2021-10-20", "s", Some(false), 1.0),
            game("2021-10-21", "s", None, 1.0),
            game("2021-10-22", "s", Some(false), 1.0),
        ]);
        assert_eq!(win_loss_counts(&v), WinLossCounts { losses: 2, wins: 1 });
    }

    #[test]
    fn histogram_closes_last_bin() {
        let bins = histogram(&[0.40, 0.47, 0.50, f64::NAN], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
        assert!((bins[1].end - 0.50).abs() < 1e-12);
        assert!((bins[0].width() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn histogram_single_value_and_empty() {
        let bins = histogram(&[0.5, 0.5], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!((bins[0].start - 0.0).abs() < 1e-12);
        assert!(histogram(&[], 10).is_empty());
    }

    #[test]
    fn kde_needs_spread() {
        assert!(kde_curve(&[0.45], 0.01, 50).is_empty());
        assert!(kde_curve(&[0.45, 0.45, 0.45], 0.01, 50).is_empty());

        let curve = kde_curve(&[0.40, 0.45, 0.47, 0.50], 0.01, 50);
        assert_eq!(curve.len(), 50);
        assert!((curve[0][0] - 0.40).abs() < 1e-12);
        assert!((curve[49][0] - 0.50).abs() < 1e-12);
        assert!(curve.iter().all(|p| p[1] > 0.0));
    }

    #[test]
    fn linear_fit_recovers_line() {
        let fit = linear_fit(&[[0.0, 100.0], [7.0, 114.0], [14.0, 128.0]]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 100.0).abs() < 1e-9);
        assert!((fit.predict(3.5) - 107.0).abs() < 1e-9);
    }

    #[test]
    fn linear_fit_degenerate_inputs() {
        assert_eq!(linear_fit(&[]), None);
        assert_eq!(linear_fit(&[[0.0, 100.0]]), None);
        assert_eq!(linear_fit(&[[0.0, 100.0], [0.0, 110.0]]), None);
        assert_eq!(linear_fit(&[[0.0, 100.0], [1.0, f64::NAN]]), None);
    }
}
