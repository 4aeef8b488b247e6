//! The dataset document served to the front end.

use crate::value::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed sections of a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Matches,
    Players,
    Batting,
    Bowling,
    Fielding,
    PlayerCareerStats,
    TeamStats,
}

impl Section {
    /// All sections, in document order.
    pub const ALL: [Section; 7] = [
        Section::Matches,
        Section::Players,
        Section::Batting,
        Section::Bowling,
        Section::Fielding,
        Section::PlayerCareerStats,
        Section::TeamStats,
    ];

    /// Per-match fact tables that reference both a match and a player.
    pub const FACTS: [Section; 3] = [Section::Batting, Section::Bowling, Section::Fielding];

    /// JSON key of the section.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Section::Matches => "matches",
            Section::Players => "players",
            Section::Batting => "batting",
            Section::Bowling => "bowling",
            Section::Fielding => "fielding",
            Section::PlayerCareerStats => "player_career_stats",
            Section::TeamStats => "team_stats",
        }
    }

    /// Human-facing name used in error messages.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Matches => "Matches",
            Section::Players => "Players",
            Section::Batting => "Batting",
            Section::Bowling => "Bowling",
            Section::Fielding => "Fielding",
            Section::PlayerCareerStats => "Player_Career_Stats",
            Section::TeamStats => "Team_Stats",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Generation metadata, written only by the offline generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub team_name: String,
    /// Local date of generation, `YYYY-MM-DD`.
    pub generated_on: String,
    /// File name (no directory) of the source workbook.
    pub source_file: String,
}

impl Meta {
    /// Stamp metadata with today's local date.
    pub fn new(team_name: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            generated_on: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            source_file: source_file.into(),
        }
    }
}

/// The whole statistics document.
///
/// Sections missing from a persisted file deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    pub matches: Vec<Record>,
    pub players: Vec<Record>,
    pub batting: Vec<Record>,
    pub bowling: Vec<Record>,
    pub fielding: Vec<Record>,
    pub player_career_stats: Vec<Record>,
    pub team_stats: Vec<Record>,
}

impl Dataset {
    /// Every section present and empty.
    #[must_use]
    pub fn template() -> Self {
        Self::default()
    }

    /// Records of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Record] {
        match section {
            Section::Matches => &self.matches,
            Section::Players => &self.players,
            Section::Batting => &self.batting,
            Section::Bowling => &self.bowling,
            Section::Fielding => &self.fielding,
            Section::PlayerCareerStats => &self.player_career_stats,
            Section::TeamStats => &self.team_stats,
        }
    }

    /// Mutable records of one section.
    pub fn section_mut(&mut self, section: Section) -> &mut Vec<Record> {
        match section {
            Section::Matches => &mut self.matches,
            Section::Players => &mut self.players,
            Section::Batting => &mut self.batting,
            Section::Bowling => &mut self.bowling,
            Section::Fielding => &mut self.fielding,
            Section::PlayerCareerStats => &mut self.player_career_stats,
            Section::TeamStats => &mut self.team_stats,
        }
    }

    /// True when no section holds any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }
}
