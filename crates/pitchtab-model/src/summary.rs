use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::outcome::AtBatOutcome;

/// Inning number -> runs scored in that inning.
pub type InningRuns = BTreeMap<u32, u32>;

/// Inning number -> outcomes finalized in that inning, in chronological
/// order of occurrence.
pub type InningOutcomes = BTreeMap<u32, Vec<AtBatOutcome>>;

/// Game totals. Empty input produces an empty scoreboard with no team
/// names; callers render "no data" instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub away_team: Option<String>,
    pub home_team: Option<String>,
    /// Raw date string from the export, kept verbatim.
    pub game_date: Option<String>,
    /// Team name -> total runs.
    pub runs: BTreeMap<String, u32>,
}

impl Scoreboard {
    /// Parse the export's game date for display. The exports in the wild
    /// use a few delimiter/order conventions, so several are tried;
    /// unparseable dates fall back to the raw string at the call site.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.game_date.as_deref()?.trim();
        const FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y"];
        FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }

    pub fn runs_for(&self, team: &str) -> u32 {
        self.runs.get(team).copied().unwrap_or(0)
    }
}

/// A batter occupying (part of) a batting-order slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubstituteBatter {
    pub batter_id: String,
    pub batter_name: String,
    pub results: InningOutcomes,
}

/// One of the nine fixed positions in a team's batting order.
///
/// The primary batter is fixed at first occurrence in the data; later
/// occupants of the same slot are tracked as substitutes without
/// reordering the nine slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingSlot {
    pub batter_id: String,
    pub batter_name: String,
    pub results: InningOutcomes,
    pub substitutes: Vec<SubstituteBatter>,
}

impl BattingSlot {
    pub fn new(batter_id: impl Into<String>, batter_name: impl Into<String>) -> Self {
        Self {
            batter_id: batter_id.into(),
            batter_name: batter_name.into(),
            ..Self::default()
        }
    }

    /// Filler for lineups with fewer than nine real batters in the data.
    pub fn placeholder(team: &str, index: usize) -> Self {
        Self::new(
            format!("unknown_{}_{}", team, index),
            format!("Player {}", index + 1),
        )
    }

    /// Result map for the given batter: the primary batter's own map, or a
    /// find-or-create substitute entry keyed by batter id.
    pub fn results_for_batter(
        &mut self,
        batter_id: &str,
        batter_name: &str,
    ) -> &mut InningOutcomes {
        if self.batter_id == batter_id {
            return &mut self.results;
        }
        let position = self
            .substitutes
            .iter()
            .position(|sub| sub.batter_id == batter_id);
        let index = match position {
            Some(index) => index,
            None => {
                self.substitutes.push(SubstituteBatter {
                    batter_id: batter_id.to_string(),
                    batter_name: batter_name.to_string(),
                    results: InningOutcomes::new(),
                });
                self.substitutes.len() - 1
            }
        };
        &mut self.substitutes[index].results
    }

    /// Primary and substitute outcomes merged per inning, primary first.
    pub fn combined_results(&self) -> InningOutcomes {
        let mut combined = self.results.clone();
        for sub in &self.substitutes {
            for (inning, outcomes) in &sub.results {
                combined
                    .entry(*inning)
                    .or_default()
                    .extend(outcomes.iter().cloned());
            }
        }
        combined
    }

    /// Total finalized outcomes across the primary batter and substitutes.
    pub fn outcome_count(&self) -> usize {
        self.results.values().map(Vec::len).sum::<usize>()
            + self
                .substitutes
                .iter()
                .flat_map(|sub| sub.results.values())
                .map(Vec::len)
                .sum::<usize>()
    }
}

/// Output of plate-appearance reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub scoreboard: Scoreboard,
    /// Team name -> inning -> runs.
    pub inning_scores: BTreeMap<String, InningRuns>,
    /// Team name -> nine batting slots in order.
    pub at_bat_grid: BTreeMap<String, Vec<BattingSlot>>,
}

impl GameSummary {
    /// Teams in display order: away first, then home.
    pub fn teams_in_order(&self) -> Vec<&str> {
        let mut teams = Vec::new();
        if let Some(away) = self.scoreboard.away_team.as_deref() {
            teams.push(away);
        }
        if let Some(home) = self.scoreboard.home_team.as_deref()
            && Some(home) != self.scoreboard.away_team.as_deref()
        {
            teams.push(home);
        }
        teams
    }

    /// Highest inning number with a recorded score, across both teams.
    pub fn max_inning(&self) -> u32 {
        self.inning_scores
            .values()
            .flat_map(|innings| innings.keys().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_substitute_is_created_once() {
        let mut slot = BattingSlot::new("b1", "Lead Off");
        slot.results_for_batter("b9", "Pinch Hitter");
        slot.results_for_batter("b9", "Pinch Hitter");
        assert_eq!(slot.substitutes.len(), 1);
        assert_eq!(slot.substitutes[0].batter_name, "Pinch Hitter");
    }

    #[test]
    fn scoreboard_date_parses_common_formats() {
        let mut scoreboard = Scoreboard {
            game_date: Some("2024/05/12".to_string()),
            ..Scoreboard::default()
        };
        assert_eq!(
            scoreboard.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 5, 12)
        );
        scoreboard.game_date = Some("not a date".to_string());
        assert_eq!(scoreboard.parsed_date(), None);
    }
}
