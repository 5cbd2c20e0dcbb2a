//! Row stream normalization.
//!
//! Drops rows that name no batter or pitcher, stamps every surviving row
//! with its plate-appearance id, and decodes the loosely-typed result
//! columns into the model enums exactly once. Downstream passes never
//! touch raw strings again.

use pitchtab_model::{KorBb, PaId, PitchCall, PitchRow, PlayResult};
use tracing::{debug, info};

use crate::reader::RawPitch;

/// Normalize a raw record sequence, preserving input order.
///
/// The plate-appearance counter starts at 0 and increments whenever a row
/// carries `PitchofPA == 1`; the current counter value is stamped on every
/// row, including the one that triggered the increment. Rows before the
/// first marker keep id 0. Deterministic, pure function of input order.
pub fn normalize(raw: Vec<RawPitch>) -> Vec<PitchRow> {
    let total = raw.len();
    let mut rows = Vec::with_capacity(total);
    let mut pa_counter: PaId = 0;
    let mut skipped = 0usize;
    for (index, record) in raw.into_iter().enumerate() {
        let Some(pitcher) = non_empty(record.pitcher) else {
            debug!(row = index, "skipping row without pitcher");
            skipped += 1;
            continue;
        };
        let Some(batter) = non_empty(record.batter) else {
            debug!(row = index, "skipping row without batter");
            skipped += 1;
            continue;
        };
        if record.pitch_of_pa == Some(1) {
            pa_counter += 1;
        }
        rows.push(PitchRow {
            pa_id: pa_counter,
            pitcher,
            pitcher_id: record.pitcher_id,
            pitcher_team: non_empty(record.pitcher_team),
            batter,
            batter_id: record.batter_id,
            batter_team: non_empty(record.batter_team),
            home_team: non_empty(record.home_team),
            away_team: non_empty(record.away_team),
            game_date: non_empty(record.game_date),
            inning: record.inning,
            half: record.half.as_deref().and_then(|raw| raw.parse().ok()),
            pitch_of_pa: record.pitch_of_pa,
            pitch_call: PitchCall::parse(record.pitch_call.as_deref().unwrap_or("")),
            kor_bb: KorBb::parse(record.kor_bb.as_deref().unwrap_or("")),
            play_result: PlayResult::parse(record.play_result.as_deref().unwrap_or("")),
            tagged_hit_type: non_empty(record.tagged_hit_type),
            tagged_pitch_type: non_empty(record.tagged_pitch_type),
            event: non_empty(record.event),
            rel_speed: record.rel_speed,
            spin_rate: record.spin_rate,
            spin_axis: record.spin_axis,
            plate_loc_side: record.plate_loc_side,
            plate_loc_height: record.plate_loc_height,
            horz_break: record.horz_break,
            induced_vert_break: record.induced_vert_break,
            runs_scored: record.runs_scored.unwrap_or(0),
        });
    }
    info!(
        rows = rows.len(),
        skipped,
        plate_appearances = pa_counter,
        "normalized pitch rows"
    );
    rows
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
