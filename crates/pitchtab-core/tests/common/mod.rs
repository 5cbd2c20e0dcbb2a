//! Shared row construction for the reconstruction and aggregation tests.
#![allow(dead_code)]

use pitchtab_model::{HalfInning, KorBb, PitchCall, PitchRow, PlayResult};

pub const HOME: &str = "BEARS";
pub const AWAY: &str = "HAWKS";

/// Builder for one pitch row. Defaults: away team batting in the top of
/// the first, no result fields, batter id derived from the batter name.
pub struct RowBuilder {
    row: PitchRow,
}

pub fn pitch(batter: &str) -> RowBuilder {
    RowBuilder {
        row: PitchRow {
            pa_id: 0,
            pitcher: "Starter".to_string(),
            pitcher_id: None,
            pitcher_team: Some(HOME.to_string()),
            batter: batter.to_string(),
            batter_id: Some(format!("id-{batter}")),
            batter_team: Some(AWAY.to_string()),
            home_team: Some(HOME.to_string()),
            away_team: Some(AWAY.to_string()),
            game_date: Some("2024-05-12".to_string()),
            inning: Some(1),
            half: Some(HalfInning::Top),
            pitch_of_pa: None,
            pitch_call: PitchCall::Undefined,
            kor_bb: KorBb::Undefined,
            play_result: PlayResult::Undefined,
            tagged_hit_type: None,
            tagged_pitch_type: None,
            event: None,
            rel_speed: None,
            spin_rate: None,
            spin_axis: None,
            plate_loc_side: None,
            plate_loc_height: None,
            horz_break: None,
            induced_vert_break: None,
            runs_scored: 0,
        },
    }
}

impl RowBuilder {
    pub fn first_pitch(mut self) -> Self {
        self.row.pitch_of_pa = Some(1);
        self
    }

    pub fn pitch_of(mut self, n: u32) -> Self {
        self.row.pitch_of_pa = Some(n);
        self
    }

    pub fn inning(mut self, inning: u32) -> Self {
        self.row.inning = Some(inning);
        self
    }

    pub fn no_inning(mut self) -> Self {
        self.row.inning = None;
        self
    }

    pub fn bottom(mut self) -> Self {
        self.row.half = Some(HalfInning::Bottom);
        self.row.batter_team = Some(HOME.to_string());
        self.row.pitcher_team = Some(AWAY.to_string());
        self
    }

    pub fn pitcher(mut self, name: &str) -> Self {
        self.row.pitcher = name.to_string();
        self
    }

    pub fn play_result(mut self, value: &str) -> Self {
        self.row.play_result = PlayResult::parse(value);
        self
    }

    pub fn kor_bb(mut self, value: &str) -> Self {
        self.row.kor_bb = KorBb::parse(value);
        self
    }

    pub fn pitch_call(mut self, value: &str) -> Self {
        self.row.pitch_call = PitchCall::parse(value);
        self
    }

    pub fn tagged_hit_type(mut self, value: &str) -> Self {
        self.row.tagged_hit_type = Some(value.to_string());
        self
    }

    pub fn runs(mut self, runs: u32) -> Self {
        self.row.runs_scored = runs;
        self
    }

    pub fn build(self) -> PitchRow {
        self.row
    }
}

/// Stamp plate-appearance ids the way the normalizer does: counter starts
/// at 0 and increments on every `PitchofPA == 1` marker.
pub fn assign_pa_ids(rows: &mut [PitchRow]) {
    let mut counter = 0;
    for row in rows {
        if row.pitch_of_pa == Some(1) {
            counter += 1;
        }
        row.pa_id = counter;
    }
}

/// Build a finished game of rows from `(builder...)` closures, with pa ids
/// assigned.
pub fn game(rows: Vec<RowBuilder>) -> Vec<PitchRow> {
    let mut built: Vec<PitchRow> = rows.into_iter().map(RowBuilder::build).collect();
    assign_pa_ids(&mut built);
    built
}
