//! Per-player stat aggregation.
//!
//! Both reducers re-derive from the normalized row sequence and share no
//! state with reconstruction. The batting reducer scans in reverse: the
//! chronologically-last row of a plate appearance carries the
//! authoritative terminal result fields, so taking the first row seen per
//! `pa_id` while walking backwards extracts it without re-deriving
//! plate-appearance boundaries. The pitching reducer is a plain forward
//! pass with no deduplication; result fields only appear on terminal rows
//! in well-formed input, which is assumed rather than validated.

use std::collections::HashSet;

use pitchtab_model::{
    BatterStatLine, BattingReport, KorBb, PaId, PitchRow, PitcherStatLine, PitchingReport,
    PlayResult,
};
use tracing::debug;

/// Batting lines for one team, keyed by batter name, ordered by first
/// plate appearance. Deterministic and idempotent over the same rows.
pub fn aggregate_batting(rows: &[PitchRow], team: &str) -> BattingReport {
    let mut report = BattingReport {
        team: team.to_string(),
        ..BattingReport::default()
    };

    // Lineup order from the start of the game.
    for row in rows {
        if row.batter_team.as_deref() == Some(team)
            && row.pitch_of_pa == Some(1)
            && !report.stats.contains_key(&row.batter)
        {
            report.order.push(row.batter.clone());
            report.stats.insert(row.batter.clone(), BatterStatLine::default());
        }
    }

    // Reverse scan, one classification per plate appearance. Id 0 marks
    // rows before the first plate-appearance marker and is never counted.
    let mut consumed: HashSet<PaId> = HashSet::new();
    for row in rows.iter().rev() {
        if row.batter_team.as_deref() != Some(team) {
            continue;
        }
        if row.pa_id == 0 || consumed.contains(&row.pa_id) {
            continue;
        }
        let Some(line) = report.stats.get_mut(&row.batter) else {
            debug!(batter = %row.batter, pa_id = row.pa_id, "batter has no lineup entry");
            continue;
        };
        consumed.insert(row.pa_id);

        line.plate_appearances += 1;
        // Fixed precedence: hit-by-pitch (any of its four synonymous
        // fields), then walk, then sacrifice; each suppresses the at-bat.
        if row.is_hit_by_pitch() {
            line.hit_by_pitch += 1;
        } else if row.kor_bb == KorBb::Walk {
            line.walks += 1;
        } else if row.play_result == PlayResult::Sacrifice {
            line.sac_flies += 1;
        } else {
            line.at_bats += 1;
        }

        // Hits and strikeouts tally independently of the at-bat decision.
        if row.play_result.is_hit() {
            line.hits += 1;
        }
        if row.play_result == PlayResult::HomeRun {
            line.home_runs += 1;
        }
        if row.kor_bb == KorBb::Strikeout {
            line.strikeouts += 1;
        }
    }

    report
}

/// Pitching lines for one team, keyed by pitcher name, ordered by first
/// appearance. Every row increments the named pitcher's pitch count.
pub fn aggregate_pitching(rows: &[PitchRow], team: &str) -> PitchingReport {
    let mut report = PitchingReport {
        team: team.to_string(),
        ..PitchingReport::default()
    };

    for row in rows {
        if row.pitcher_team.as_deref() != Some(team) {
            continue;
        }
        if !report.stats.contains_key(&row.pitcher) {
            report.order.push(row.pitcher.clone());
            report.stats.insert(row.pitcher.clone(), PitcherStatLine::default());
        }
        let Some(line) = report.stats.get_mut(&row.pitcher) else {
            continue;
        };
        line.pitch_count += 1;

        if row.play_result.is_hit() {
            line.hits += 1;
        }
        if row.play_result == PlayResult::HomeRun {
            line.home_runs += 1;
        }
        if row.kor_bb == KorBb::Strikeout {
            line.strikeouts += 1;
        }
        if row.kor_bb == KorBb::Walk {
            line.walks += 1;
        }
        if row.is_hit_by_pitch() {
            line.hit_by_pitch += 1;
        }
    }

    report
}
