use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::filter::{filter_games, DataWarning, FilteredView, Selection, WinLossMode};
use crate::data::loader::DatasetCache;
use crate::data::model::{GameTable, TeamColumn};

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Introduction,
    Overview,
    Visualizations,
    DataExploration,
    Analysis,
    Conclusion,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::Overview,
        Section::Visualizations,
        Section::DataExploration,
        Section::Analysis,
        Section::Conclusion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Overview => "Overview",
            Section::Visualizations => "Visualizations",
            Section::DataExploration => "Data Exploration",
            Section::Analysis => "Analysis",
            Section::Conclusion => "Conclusion",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Tables read so far, by path.
    pub cache: DatasetCache,

    /// Path of the active dataset.
    pub source: Option<PathBuf>,

    /// Active dataset (None until a file loads successfully).
    pub table: Option<Arc<GameTable>>,

    /// Sidebar filter choices.
    pub selection: Selection,

    /// Section shown in the central panel.
    pub section: Section,

    /// Games passing the current selection (cached).
    pub view: FilteredView,

    /// Data-quality warnings from the last refilter.
    pub warnings: Vec<DataWarning>,

    /// Load error shown instead of the report.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` through the cache and make it the active dataset.
    ///
    /// The requested selection is kept where the new table allows it: an
    /// unknown season is replaced by the table's first season and a team the
    /// table does not list is dropped.
    pub fn open(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
        match self.cache.load(path) {
            Ok(table) => self.set_table(table),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.table = None;
                self.view = FilteredView::default();
                self.warnings.clear();
                self.status_message = Some(format!("Error loading {}: {e}", path.display()));
            }
        }
    }

    /// Ingest a loaded table and recompute the view.
    pub fn set_table(&mut self, table: Arc<GameTable>) {
        if table.is_empty() {
            log::warn!("Dataset has no games");
        }
        if !table.has_season(&self.selection.season) {
            self.selection.season = table.seasons.first().cloned().unwrap_or_default();
        }
        let unknown_team = match (table.team_column(), &self.selection.team) {
            (TeamColumn::Present(names), Some(team)) => !names.contains(team),
            _ => false,
        };
        if unknown_team {
            if let Some(team) = self.selection.team.take() {
                log::warn!("Team '{team}' not found in dataset, showing all teams");
            }
        }
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `view` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            let outcome = filter_games(table, &self.selection);
            self.view = outcome.view;
            self.warnings = outcome.warnings;
        }
    }

    pub fn set_season(&mut self, season: String) {
        if self.selection.season != season {
            self.selection.season = season;
            self.refilter();
        }
    }

    pub fn set_outcome(&mut self, outcome: WinLossMode) {
        if self.selection.outcome != outcome {
            self.selection.outcome = outcome;
            self.refilter();
        }
    }

    pub fn set_team(&mut self, team: Option<String>) {
        if self.selection.team != team {
            self.selection.team = team;
            self.refilter();
        }
    }
}
