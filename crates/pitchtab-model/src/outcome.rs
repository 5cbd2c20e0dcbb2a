use serde::{Deserialize, Serialize};

use crate::classify::{KorBb, OutcomeClass, PitchCall, PlayResult};
use crate::row::{PaId, PitchRow};

/// Finalized result of one plate appearance. Immutable once created.
///
/// Raw result fields are kept alongside the classification so unrecognized
/// values can still be rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtBatOutcome {
    pub class: OutcomeClass,
    pub play_result: PlayResult,
    pub tagged_hit_type: Option<String>,
    pub kor_bb: KorBb,
    pub pitch_call: PitchCall,
    /// Pitcher of record when the outcome was finalized.
    pub pitcher: String,
    pub batter: String,
    pub pa_id: PaId,
}

impl AtBatOutcome {
    /// Build the outcome for the row that finalized a plate appearance.
    pub fn from_row(row: &PitchRow) -> Self {
        Self {
            class: OutcomeClass::of_row(row),
            play_result: row.play_result.clone(),
            tagged_hit_type: row.tagged_hit_type.clone(),
            kor_bb: row.kor_bb.clone(),
            pitch_call: row.pitch_call.clone(),
            pitcher: row.pitcher.clone(),
            batter: row.batter.clone(),
            pa_id: row.pa_id,
        }
    }

    /// Outcome synthesized for a plate appearance that ended with an
    /// intentional walk no terminal pitch row was recorded for.
    pub fn intentional_walk(pitcher: String, batter: String, pa_id: PaId) -> Self {
        Self {
            class: OutcomeClass::IntentionalWalk,
            play_result: PlayResult::IntentionalWalk,
            tagged_hit_type: None,
            kor_bb: KorBb::Walk,
            pitch_call: PitchCall::IntentionalWalk,
            pitcher,
            batter,
            pa_id,
        }
    }

    /// Short cell text for the at-bat grid.
    ///
    /// Outs and sacrifices show the tagged hit type when present
    /// (`GroundBall`, `FlyBall`, ...); unclassified outcomes fall back to
    /// the raw `PlayResult` text so nothing is ever dropped from display.
    pub fn display_label(&self) -> String {
        match self.class {
            OutcomeClass::Out | OutcomeClass::Sacrifice => self
                .tagged_hit_type
                .as_deref()
                .map(str::trim)
                .filter(|tagged| !tagged.is_empty() && *tagged != "Undefined")
                .unwrap_or(self.play_result.as_str())
                .to_string(),
            OutcomeClass::DefensiveError => "Error".to_string(),
            OutcomeClass::Walk => "Walk".to_string(),
            OutcomeClass::Strikeout => "Strikeout".to_string(),
            OutcomeClass::HitByPitch => "HitByPitch".to_string(),
            OutcomeClass::Unclassified => {
                if self.play_result == PlayResult::Undefined {
                    "N/A".to_string()
                } else {
                    self.play_result.as_str().to_string()
                }
            }
            OutcomeClass::IntentionalWalk => "IntentionalWalk".to_string(),
            _ => self.play_result.as_str().to_string(),
        }
    }
}
