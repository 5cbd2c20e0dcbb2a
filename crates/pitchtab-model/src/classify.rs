//! Result-field enums and the single outcome classification routine.
//!
//! The export describes a plate-appearance result across three loosely-typed
//! string columns (`PlayResult`, `KorBB`, `PitchCall`, with `Event` as a
//! fourth hit-by-pitch synonym). Each column is decoded once into a closed
//! enum with a raw passthrough variant, and [`OutcomeClass::of_row`] is the
//! one place that combines them; the reconstructor, the aggregators, and
//! rendering all consume the same tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::row::PitchRow;

/// Parsed `PlayResult` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayResult {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    Sacrifice,
    Error,
    FieldersChoice,
    IntentionalWalk,
    HitByPitch,
    StolenBase,
    CaughtStealing,
    WildPitch,
    PassedBall,
    Balk,
    /// Empty, missing, or literal `"Undefined"` cell.
    Undefined,
    /// Unrecognized value kept verbatim for display.
    Other(String),
}

impl PlayResult {
    /// Decode a raw cell. Never fails; unknown values pass through.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "" | "Undefined" => PlayResult::Undefined,
            "Single" => PlayResult::Single,
            "Double" => PlayResult::Double,
            "Triple" => PlayResult::Triple,
            "HomeRun" => PlayResult::HomeRun,
            "Out" => PlayResult::Out,
            "Sacrifice" => PlayResult::Sacrifice,
            "Error" => PlayResult::Error,
            "FieldersChoice" => PlayResult::FieldersChoice,
            "IntentionalWalk" => PlayResult::IntentionalWalk,
            "HitByPitch" => PlayResult::HitByPitch,
            "StolenBase" => PlayResult::StolenBase,
            "CaughtStealing" => PlayResult::CaughtStealing,
            "WildPitch" => PlayResult::WildPitch,
            "PassedBall" => PlayResult::PassedBall,
            "Balk" => PlayResult::Balk,
            other => PlayResult::Other(other.to_string()),
        }
    }

    /// Base hits in the source rules: Single, Double, Triple, HomeRun.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            PlayResult::Single | PlayResult::Double | PlayResult::Triple | PlayResult::HomeRun
        )
    }

    /// Baserunning plays that leave the plate appearance open.
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            PlayResult::CaughtStealing
                | PlayResult::StolenBase
                | PlayResult::WildPitch
                | PlayResult::PassedBall
                | PlayResult::Balk
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayResult::Single => "Single",
            PlayResult::Double => "Double",
            PlayResult::Triple => "Triple",
            PlayResult::HomeRun => "HomeRun",
            PlayResult::Out => "Out",
            PlayResult::Sacrifice => "Sacrifice",
            PlayResult::Error => "Error",
            PlayResult::FieldersChoice => "FieldersChoice",
            PlayResult::IntentionalWalk => "IntentionalWalk",
            PlayResult::HitByPitch => "HitByPitch",
            PlayResult::StolenBase => "StolenBase",
            PlayResult::CaughtStealing => "CaughtStealing",
            PlayResult::WildPitch => "WildPitch",
            PlayResult::PassedBall => "PassedBall",
            PlayResult::Balk => "Balk",
            PlayResult::Undefined => "Undefined",
            PlayResult::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed `KorBB` column (strikeout/walk marker).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KorBb {
    Walk,
    Strikeout,
    HitByPitch,
    Undefined,
    Other(String),
}

impl KorBb {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "" | "Undefined" => KorBb::Undefined,
            "Walk" => KorBb::Walk,
            "Strikeout" => KorBb::Strikeout,
            "HitByPitch" => KorBb::HitByPitch,
            other => KorBb::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KorBb::Walk => "Walk",
            KorBb::Strikeout => "Strikeout",
            KorBb::HitByPitch => "HitByPitch",
            KorBb::Undefined => "Undefined",
            KorBb::Other(raw) => raw,
        }
    }
}

impl fmt::Display for KorBb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed `PitchCall` column. Only the hit-by-pitch and intentional-walk
/// values change outcome classification; the rest are kept for the pitch
/// detail view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchCall {
    HitByPitch,
    IntentionalWalk,
    Undefined,
    Other(String),
}

impl PitchCall {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "" | "Undefined" => PitchCall::Undefined,
            "HitByPitch" => PitchCall::HitByPitch,
            "IntentionalWalk" => PitchCall::IntentionalWalk,
            other => PitchCall::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PitchCall::HitByPitch => "HitByPitch",
            PitchCall::IntentionalWalk => "IntentionalWalk",
            PitchCall::Undefined => "Undefined",
            PitchCall::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PitchCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed outcome tag combining the result columns of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeClass {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    Sacrifice,
    DefensiveError,
    FieldersChoice,
    Walk,
    IntentionalWalk,
    Strikeout,
    HitByPitch,
    StolenBase,
    CaughtStealing,
    WildPitch,
    PassedBall,
    Balk,
    /// No known rule matched; the raw fields are rendered as-is.
    Unclassified,
}

impl OutcomeClass {
    /// Classify one row. Precedence: continuation plays first (they never
    /// finalize a plate appearance regardless of the other fields), then
    /// hit-by-pitch across its four synonymous fields, then `PlayResult`,
    /// then `KorBB`.
    pub fn of_row(row: &PitchRow) -> Self {
        if row.play_result.is_continuation() {
            return match row.play_result {
                PlayResult::StolenBase => OutcomeClass::StolenBase,
                PlayResult::CaughtStealing => OutcomeClass::CaughtStealing,
                PlayResult::WildPitch => OutcomeClass::WildPitch,
                PlayResult::PassedBall => OutcomeClass::PassedBall,
                _ => OutcomeClass::Balk,
            };
        }
        if row.is_hit_by_pitch() {
            return OutcomeClass::HitByPitch;
        }
        match row.play_result {
            PlayResult::Single => return OutcomeClass::Single,
            PlayResult::Double => return OutcomeClass::Double,
            PlayResult::Triple => return OutcomeClass::Triple,
            PlayResult::HomeRun => return OutcomeClass::HomeRun,
            PlayResult::Out => return OutcomeClass::Out,
            PlayResult::Sacrifice => return OutcomeClass::Sacrifice,
            PlayResult::Error => return OutcomeClass::DefensiveError,
            PlayResult::FieldersChoice => return OutcomeClass::FieldersChoice,
            PlayResult::IntentionalWalk => return OutcomeClass::IntentionalWalk,
            _ => {}
        }
        match row.kor_bb {
            KorBb::Walk => OutcomeClass::Walk,
            KorBb::Strikeout => OutcomeClass::Strikeout,
            _ => OutcomeClass::Unclassified,
        }
    }

    /// True for outcomes that end the batter's turn at the plate.
    pub fn finalizes_plate_appearance(&self) -> bool {
        matches!(
            self,
            OutcomeClass::Single
                | OutcomeClass::Double
                | OutcomeClass::Triple
                | OutcomeClass::HomeRun
                | OutcomeClass::Out
                | OutcomeClass::Sacrifice
                | OutcomeClass::DefensiveError
                | OutcomeClass::FieldersChoice
                | OutcomeClass::Walk
                | OutcomeClass::IntentionalWalk
                | OutcomeClass::Strikeout
                | OutcomeClass::HitByPitch
        )
    }

    /// Baserunning play that keeps the plate appearance open.
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            OutcomeClass::StolenBase
                | OutcomeClass::CaughtStealing
                | OutcomeClass::WildPitch
                | OutcomeClass::PassedBall
                | OutcomeClass::Balk
        )
    }

    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            OutcomeClass::Single
                | OutcomeClass::Double
                | OutcomeClass::Triple
                | OutcomeClass::HomeRun
        )
    }
}
