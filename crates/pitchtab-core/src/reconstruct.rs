//! Plate-appearance reconstruction.
//!
//! One forward pass over the normalized row sequence rebuilds the game:
//! which batter occupied which batting-order slot, what each completed
//! plate appearance produced, and the runs per inning. The subtle parts
//! are boundary detection (a `PitchofPA == 1` marker opens a new plate
//! appearance), slot attribution through the completed-at-bat counter
//! (`counter % 9`, substitutes tracked under the slot they replaced), and
//! intentional walks, which the export never marks with a terminal pitch:
//! they are inferred when the same team sends a new batter in the same
//! inning while the previous plate appearance is still open.

use std::collections::BTreeMap;

use pitchtab_model::{
    AtBatOutcome, BattingSlot, GameSummary, OutcomeClass, PaId, PitchRow,
};
use tracing::debug;

const LINEUP_SIZE: usize = 9;

/// The plate appearance currently in progress.
struct OpenPa {
    batter_id: String,
    batter_name: String,
    team: String,
    inning: u32,
    /// Pitcher of record, updated on every row of the plate appearance.
    pitcher: String,
    pa_id: PaId,
    finalized: bool,
}

/// Rebuild scoreboard, inning scores, and the at-bat grid from normalized
/// rows. Empty input returns well-formed empty structures.
///
/// A plate appearance still open when the data ends is silently dropped:
/// no outcome is emitted and the completed-at-bat counter does not
/// advance. Keep that behavior stable; the batting aggregator counts the
/// same plate appearance (see `stats`), and the two views legitimately
/// diverge there.
pub fn reconstruct(rows: &[PitchRow]) -> GameSummary {
    let Some(first) = rows.first() else {
        return GameSummary::default();
    };
    let home = first.home_team.clone().unwrap_or_else(|| "Home".to_string());
    let away = first.away_team.clone().unwrap_or_else(|| "Away".to_string());

    let mut summary = GameSummary::default();
    summary.scoreboard.home_team = Some(home.clone());
    summary.scoreboard.away_team = Some(away.clone());
    summary.scoreboard.game_date = first.game_date.clone();
    for team in [&away, &home] {
        summary.scoreboard.runs.insert(team.clone(), 0);
        summary.inning_scores.insert(team.clone(), BTreeMap::new());
    }
    summary
        .at_bat_grid
        .insert(home.clone(), build_lineup(rows, &home, &away, false));
    summary
        .at_bat_grid
        .insert(away.clone(), build_lineup(rows, &home, &away, true));

    let mut completed: BTreeMap<String, usize> = BTreeMap::new();
    let mut open: Option<OpenPa> = None;

    for row in rows {
        let (Some(inning), Some(batter_id)) = (row.inning, row.batter_id.as_deref()) else {
            continue;
        };
        let team = row.batting_side(&home, &away).to_string();

        if row.pitch_of_pa == Some(1) {
            // A new batter stepping in while the previous plate appearance
            // is still open, same team and inning, means the previous
            // batter was walked intentionally: no terminal pitch exists.
            if let Some(prev) = open.as_ref()
                && !prev.finalized
                && prev.team == team
                && prev.inning == inning
                && prev.batter_id != batter_id
            {
                debug!(
                    batter = %prev.batter_name,
                    inning = prev.inning,
                    pa_id = prev.pa_id,
                    "synthesizing intentional walk"
                );
                let outcome = AtBatOutcome::intentional_walk(
                    prev.pitcher.clone(),
                    prev.batter_name.clone(),
                    prev.pa_id,
                );
                let counter = completed.entry(team.clone()).or_default();
                let at_bat_index = *counter;
                *counter += 1;
                if let Some(slots) = summary.at_bat_grid.get_mut(&team) {
                    attribute(
                        slots,
                        at_bat_index,
                        &prev.batter_id,
                        &prev.batter_name,
                        prev.inning,
                        outcome,
                    );
                }
            }
            open = Some(OpenPa {
                batter_id: batter_id.to_string(),
                batter_name: row.batter.clone(),
                team: team.clone(),
                inning,
                pitcher: row.pitcher.clone(),
                pa_id: row.pa_id,
                finalized: false,
            });
        }

        if let Some(pa) = open.as_mut()
            && pa.batter_id == batter_id
            && !pa.finalized
        {
            pa.pitcher = row.pitcher.clone();
            let class = OutcomeClass::of_row(row);
            if class.finalizes_plate_appearance() {
                let outcome = AtBatOutcome::from_row(row);
                let counter = completed.entry(team.clone()).or_default();
                let at_bat_index = *counter;
                *counter += 1;
                if let Some(slots) = summary.at_bat_grid.get_mut(&team) {
                    attribute(slots, at_bat_index, batter_id, &row.batter, inning, outcome);
                }
                pa.finalized = true;
            }
        }

        // Runs count independently of plate-appearance state.
        if row.runs_scored > 0 {
            *summary
                .inning_scores
                .entry(team.clone())
                .or_default()
                .entry(inning)
                .or_default() += row.runs_scored;
            *summary.scoreboard.runs.entry(team).or_default() += row.runs_scored;
        }
    }

    summary
}

/// First nine distinct batter ids for one side, in order of first
/// appearance, padded with placeholder slots when the data names fewer.
fn build_lineup(rows: &[PitchRow], home: &str, away: &str, top_half: bool) -> Vec<BattingSlot> {
    let team = if top_half { away } else { home };
    let mut slots: Vec<BattingSlot> = Vec::with_capacity(LINEUP_SIZE);
    for row in rows {
        if slots.len() >= LINEUP_SIZE {
            break;
        }
        let Some(batter_id) = row.batter_id.as_deref() else {
            continue;
        };
        if row.batting_side(home, away) != team {
            continue;
        }
        if slots.iter().all(|slot| slot.batter_id != batter_id) {
            slots.push(BattingSlot::new(batter_id, row.batter.clone()));
        }
    }
    while slots.len() < LINEUP_SIZE {
        let index = slots.len();
        slots.push(BattingSlot::placeholder(team, index));
    }
    slots
}

/// Attribute one finalized outcome to the slot the completed-at-bat
/// counter points at; batters other than the slot's primary occupant are
/// recorded as substitutes for that slot.
fn attribute(
    slots: &mut [BattingSlot],
    completed_at_bats: usize,
    batter_id: &str,
    batter_name: &str,
    inning: u32,
    outcome: AtBatOutcome,
) {
    let slot = &mut slots[completed_at_bats % LINEUP_SIZE];
    slot.results_for_batter(batter_id, batter_name)
        .entry(inning)
        .or_default()
        .push(outcome);
}
