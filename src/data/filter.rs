use std::fmt;

use super::model::{GameRecord, GameTable, TeamColumn, TEAM_NAME};

// ---------------------------------------------------------------------------
// Selection: what the viewer picked in the sidebar
// ---------------------------------------------------------------------------

/// Tri-state win/loss filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinLossMode {
    #[default]
    All,
    Wins,
    Losses,
}

impl WinLossMode {
    pub const ALL: [WinLossMode; 3] = [WinLossMode::All, WinLossMode::Wins, WinLossMode::Losses];

    pub fn label(self) -> &'static str {
        match self {
            WinLossMode::All => "All",
            WinLossMode::Wins => "Wins",
            WinLossMode::Losses => "Losses",
        }
    }

    fn accepts(self, game: &GameRecord) -> bool {
        match self {
            WinLossMode::All => true,
            WinLossMode::Wins => game.is_win(),
            WinLossMode::Losses => game.is_loss(),
        }
    }
}

impl fmt::Display for WinLossMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The viewer's current filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Expected to be one of the table's seasons.
    pub season: String,
    pub outcome: WinLossMode,
    /// Only applied when the table has a team column.
    pub team: Option<String>,
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// A game that passed the filters, with its derived offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub game: GameRecord,
    /// Whole days since the earliest game in the same view.
    pub days_since_first_game: i64,
}

/// Games matching the current [`Selection`], in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub rows: Vec<ViewRow>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn games(&self) -> impl Iterator<Item = &GameRecord> {
        self.rows.iter().map(|r| &r.game)
    }
}

/// Non-fatal data-quality findings raised while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DataWarning {
    #[error("The '{0}' column is not in the dataset; team filtering is disabled.")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub view: FilteredView,
    pub warnings: Vec<DataWarning>,
}

// ---------------------------------------------------------------------------
// Filter & derive
// ---------------------------------------------------------------------------

/// Apply `selection` to `table` and derive `days_since_first_game`.
///
/// The offset is measured from the earliest date among the rows that
/// survive the filters, so the same game can get different offsets under
/// different selections. An empty result is not an error.
pub fn filter_games(table: &GameTable, selection: &Selection) -> FilterOutcome {
    let mut warnings = Vec::new();

    let team = match table.team_column() {
        TeamColumn::Present(_) => selection.team.as_deref(),
        TeamColumn::Absent => {
            log::warn!("Dataset has no '{TEAM_NAME}' column, filtering by season and outcome only");
            warnings.push(DataWarning::MissingColumn(TEAM_NAME));
            None
        }
    };

    let survivors: Vec<&GameRecord> = table
        .games
        .iter()
        .filter(|g| g.season == selection.season)
        .filter(|g| team.map_or(true, |t| g.team_name.as_deref() == Some(t)))
        .filter(|g| selection.outcome.accepts(g))
        .collect();

    let view = derive_days_since_first_game(&survivors);

    log::debug!(
        "Filtered season={} outcome={} team={:?}: {} of {} games",
        selection.season,
        selection.outcome,
        team,
        view.len(),
        table.len()
    );

    FilterOutcome { view, warnings }
}

fn derive_days_since_first_game(games: &[&GameRecord]) -> FilteredView {
    let Some(first) = games.iter().map(|g| g.game_date).min() else {
        return FilteredView::default();
    };

    let rows = games
        .iter()
        .map(|g| ViewRow {
            game: (*g).clone(),
            days_since_first_game: (g.game_date - first).num_days(),
        })
        .collect();

    FilteredView { rows }
}
