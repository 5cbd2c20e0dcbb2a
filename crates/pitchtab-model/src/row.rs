use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classify::{KorBb, PitchCall, PlayResult};

/// Plate-appearance identifier assigned by the normalizer.
///
/// Monotonically increasing across the dataset; `0` means the row precedes
/// the first recorded plate-appearance marker and is never a valid join key.
pub type PaId = u32;

/// Which half of the inning a pitch was thrown in. The away team bats in
/// the top half, the home team in the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalfInning {
    Top,
    Bottom,
}

impl HalfInning {
    pub fn as_str(&self) -> &'static str {
        match self {
            HalfInning::Top => "Top",
            HalfInning::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HalfInning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("TOP") {
            Ok(HalfInning::Top)
        } else if trimmed.eq_ignore_ascii_case("BOTTOM") {
            Ok(HalfInning::Bottom)
        } else {
            Err(format!("Unknown half inning: {}", s))
        }
    }
}

/// One pitch of tracking data, decoded once at the ingest boundary.
///
/// `pitcher` and `batter` are guaranteed non-empty by the normalizer; every
/// other field may be absent in the source export and stays `Option` (or a
/// parsed enum with an explicit `Undefined` default). Rows for one plate
/// appearance are contiguous in input order and share the batter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRow {
    /// Plate-appearance join key stamped by the normalizer.
    pub pa_id: PaId,
    pub pitcher: String,
    pub pitcher_id: Option<String>,
    pub pitcher_team: Option<String>,
    pub batter: String,
    pub batter_id: Option<String>,
    pub batter_team: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Raw game date string from the export; parsed lazily for display.
    pub game_date: Option<String>,
    pub inning: Option<u32>,
    pub half: Option<HalfInning>,
    /// Per-at-bat sequence marker; `1` marks the first pitch of a plate
    /// appearance.
    pub pitch_of_pa: Option<u32>,
    pub pitch_call: PitchCall,
    pub kor_bb: KorBb,
    pub play_result: PlayResult,
    pub tagged_hit_type: Option<String>,
    pub tagged_pitch_type: Option<String>,
    pub event: Option<String>,
    pub rel_speed: Option<f64>,
    pub spin_rate: Option<f64>,
    pub spin_axis: Option<f64>,
    pub plate_loc_side: Option<f64>,
    pub plate_loc_height: Option<f64>,
    pub horz_break: Option<f64>,
    pub induced_vert_break: Option<f64>,
    /// Runs scored on this play; absent in the export means zero.
    pub runs_scored: u32,
}

impl PitchRow {
    /// Team at bat for this row, resolved from the half inning.
    /// Top half means the away team bats.
    pub fn batting_side<'a>(&self, home: &'a str, away: &'a str) -> &'a str {
        match self.half {
            Some(HalfInning::Top) => away,
            _ => home,
        }
    }

    /// True when any of the four synonymous fields reports a hit-by-pitch.
    /// The export populates it inconsistently across `PitchCall`,
    /// `PlayResult`, `Event`, and `KorBB`.
    pub fn is_hit_by_pitch(&self) -> bool {
        self.pitch_call == PitchCall::HitByPitch
            || self.play_result == PlayResult::HitByPitch
            || self.kor_bb == KorBb::HitByPitch
            || self
                .event
                .as_deref()
                .is_some_and(|event| event.trim() == "HitByPitch")
    }
}
