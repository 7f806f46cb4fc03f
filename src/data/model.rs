use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const GAME_DATE: &str = "game_date";
pub const TEAM_NAME: &str = "team_name";
pub const TEAM_POINTS: &str = "team_points";
pub const TEAM_FG_PERCENTAGE: &str = "team_fg_percentage";
pub const TEAM_WIN: &str = "team_win";
pub const SEASON: &str = "season";

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [GAME_DATE, TEAM_POINTS, TEAM_FG_PERCENTAGE, TEAM_WIN, SEASON];

// ---------------------------------------------------------------------------
// GameRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single game as read from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_date: NaiveDateTime,
    /// `None` when the table has no team column or the cell is blank.
    pub team_name: Option<String>,
    /// NaN when the cell is blank.
    pub team_points: f64,
    /// Fraction in [0, 1]; NaN when the cell is blank.
    pub team_fg_percentage: f64,
    /// `None` when the cell is blank.
    pub team_win: Option<bool>,
    pub season: String,
    /// Any other columns, kept as raw text.
    pub extra: BTreeMap<String, String>,
}

impl GameRecord {
    pub fn is_win(&self) -> bool {
        self.team_win == Some(true)
    }

    pub fn is_loss(&self) -> bool {
        self.team_win == Some(false)
    }
}

// ---------------------------------------------------------------------------
// TeamColumn – schema capability check
// ---------------------------------------------------------------------------

/// Whether the source carried a `team_name` column, and its distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamColumn<'a> {
    Present(&'a BTreeSet<String>),
    Absent,
}

// ---------------------------------------------------------------------------
// GameTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTable {
    /// All games in source order.
    pub games: Vec<GameRecord>,
    /// Header names in source order.
    pub column_names: Vec<String>,
    /// Distinct season labels in order of first appearance.
    pub seasons: Vec<String>,
    /// Distinct team names, `None` when the column is missing.
    teams: Option<BTreeSet<String>>,
}

impl GameTable {
    /// Build the season and team indices from the loaded games.
    pub fn from_games(games: Vec<GameRecord>, column_names: Vec<String>) -> Self {
        let mut seasons: Vec<String> = Vec::new();
        for game in &games {
            if !seasons.contains(&game.season) {
                seasons.push(game.season.clone());
            }
        }

        let teams = column_names.iter().any(|c| c == TEAM_NAME).then(|| {
            games
                .iter()
                .filter_map(|g| g.team_name.clone())
                .collect::<BTreeSet<_>>()
        });

        GameTable {
            games,
            column_names,
            seasons,
            teams,
        }
    }

    pub fn team_column(&self) -> TeamColumn<'_> {
        match &self.teams {
            Some(names) => TeamColumn::Present(names),
            None => TeamColumn::Absent,
        }
    }

    /// Columns that are not one of the named game fields.
    pub fn extra_columns(&self) -> impl Iterator<Item = &str> {
        self.column_names
            .iter()
            .map(String::as_str)
            .filter(|c| *c != TEAM_NAME && !REQUIRED_COLUMNS.contains(c))
    }

    pub fn has_season(&self, season: &str) -> bool {
        self.seasons.iter().any(|s| s == season)
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl fmt::Display for GameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games across {} seasons",
            self.games.len(),
            self.seasons.len()
        )
    }
}
