use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{Selection, WinLossMode};
use crate::data::model::{GameTable, TeamColumn};
use crate::state::Section;

pub const DEFAULT_DATA_PATH: &str = "nba_games.csv";

/// Command line options. Everything here only sets the initial state; the
/// sidebar can change it afterwards.
#[derive(Debug, Clone, Parser)]
#[command(name = "nba-report", version, about = "NBA games data exploration report")]
pub struct Cli {
    /// Game table to load (.csv, .json or .parquet).
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Season to show first. Defaults to the first season in the file.
    #[arg(long)]
    pub season: Option<String>,

    /// Games to keep: all, wins or losses.
    #[arg(long, value_parser = parse_outcome, default_value = "all")]
    pub outcome: WinLossMode,

    /// Restrict to one team (ignored when the file has no team_name column).
    #[arg(long)]
    pub team: Option<String>,

    /// Section to open on: introduction, overview, visualizations,
    /// data-exploration, analysis or conclusion.
    #[arg(long, value_parser = parse_section, default_value = "introduction")]
    pub section: Section,

    /// Print the key metrics for the selection and exit without a window.
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    /// Resolve the requested selection against the loaded table.
    ///
    /// A season the table does not contain falls back to the first one, and
    /// a team missing from the table's team column is dropped.
    pub fn selection_for(&self, table: &GameTable) -> Selection {
        let first = table.seasons.first().cloned().unwrap_or_default();
        let season = match &self.season {
            Some(s) if table.has_season(s) => s.clone(),
            Some(s) => {
                log::warn!("Season '{s}' not found in dataset, showing '{first}' instead");
                first
            }
            None => first,
        };

        let team = match (&self.team, table.team_column()) {
            (Some(t), TeamColumn::Present(names)) if !names.contains(t) => {
                log::warn!("Team '{t}' not found in dataset, showing all teams");
                None
            }
            (team, _) => team.clone(),
        };

        Selection {
            season,
            outcome: self.outcome,
            team,
        }
    }
}

fn cli_name(label: &str) -> String {
    label.to_ascii_lowercase().replace(' ', "-")
}

fn parse_outcome(s: &str) -> Result<WinLossMode, String> {
    WinLossMode::ALL
        .into_iter()
        .find(|mode| cli_name(mode.label()) == s.to_ascii_lowercase())
        .ok_or_else(|| format!("'{s}' is not one of all, wins, losses"))
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::ALL
        .into_iter()
        .find(|section| cli_name(section.label()) == s.to_ascii_lowercase())
        .ok_or_else(|| {
            let names: Vec<String> = Section::ALL.iter().map(|sec| cli_name(sec.label())).collect();
            format!("'{s}' is not one of {}", names.join(", "))
        })
}
