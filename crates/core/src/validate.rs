//! Cross-sheet referential integrity.

use crate::dataset::{Dataset, Section};
use crate::error::{ValidationError, ValidationResult};
use crate::value::{CellValue, Record};
use std::collections::{BTreeSet, HashSet};

/// Known IDs of one section, by textual form.
fn id_set(records: &[Record], field: &str) -> HashSet<String> {
    records
        .iter()
        .filter_map(|record| record.get(field).and_then(CellValue::key))
        .collect()
}

fn rendered(value: Option<&CellValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Check that every fact row references a known match and player, and that
/// every player has a career stats row.
///
/// The first dangling reference aborts the check. Players missing career
/// stats are reported together.
pub fn validate_dataset(dataset: &Dataset) -> ValidationResult<()> {
    let matches = id_set(&dataset.matches, "MatchID");
    let players = id_set(&dataset.players, "PlayerID");

    if matches.is_empty() {
        return Err(ValidationError::NoMatches);
    }
    if players.is_empty() {
        return Err(ValidationError::NoPlayers);
    }

    for section in Section::FACTS {
        for record in dataset.section(section) {
            let match_id = record.get("MatchID");
            if !match_id
                .and_then(CellValue::key)
                .is_some_and(|id| matches.contains(&id))
            {
                return Err(ValidationError::UnknownMatch {
                    section: section.title().to_string(),
                    value: rendered(match_id),
                });
            }

            let player_id = record.get("PlayerID");
            if !player_id
                .and_then(CellValue::key)
                .is_some_and(|id| players.contains(&id))
            {
                return Err(ValidationError::UnknownPlayer {
                    section: section.title().to_string(),
                    value: rendered(player_id),
                });
            }
        }
    }

    let careers = id_set(&dataset.player_career_stats, "PlayerID");
    let missing: BTreeSet<&String> = players.difference(&careers).collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingCareerStats {
            players: missing.into_iter().cloned().collect(),
        });
    }

    Ok(())
}
