//! Required sheets and how each one maps into the dataset.

use scorebook_core::Section;

/// How one workbook sheet is read.
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    /// Sheet name in the workbook.
    pub name: &'static str,
    /// Dataset section the records land in.
    pub section: Section,
    /// Headers that must be present after renaming, in report order.
    pub required: &'static [&'static str],
    /// Header renames (`from`, `to`), applied after trimming.
    pub rename: &'static [(&'static str, &'static str)],
}

/// Every required sheet, in parse order.
pub static SHEETS: [SheetSpec; 7] = [
    SheetSpec {
        name: "Matches",
        section: Section::Matches,
        required: &[
            "MatchID",
            "Opponent",
            "Team Runs",
            "Team Wickets Lost",
            "Opponent Runs",
            "Opponent Wickets Lost",
            "Date",
            "Venue",
        ],
        rename: &[],
    },
    SheetSpec {
        name: "Players",
        section: Section::Players,
        required: &["PlayerID", "Player Name"],
        rename: &[],
    },
    SheetSpec {
        name: "Batting",
        section: Section::Batting,
        required: &["MatchID", "PlayerID", "Runs"],
        rename: &[],
    },
    SheetSpec {
        name: "Bowling",
        section: Section::Bowling,
        required: &["MatchID", "PlayerID", "Overs"],
        rename: &[
            ("Runs", "Bowl Runs"),
            ("Wickets", "Wkts"),
            ("Dots", "Dot Balls"),
            ("Fours", "Fours Conceded"),
            ("Sixes", "Sixes Conceded"),
        ],
    },
    SheetSpec {
        name: "Fielding",
        section: Section::Fielding,
        required: &["MatchID", "PlayerID"],
        rename: &[(" PlayerID", "PlayerID")],
    },
    SheetSpec {
        name: "Player_Career_Stats",
        section: Section::PlayerCareerStats,
        required: &["PlayerID", "Player Name", "Matches"],
        rename: &[],
    },
    SheetSpec {
        name: "Team_Stats",
        section: Section::TeamStats,
        required: &["Matches", "Won", "Lost"],
        rename: &[],
    },
];
