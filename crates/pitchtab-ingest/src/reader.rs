//! CSV reading for TrackMan-style per-pitch exports.
//!
//! Columns are matched by the export's header names. Cells are decoded
//! leniently: a numeric column holding junk becomes `None` rather than
//! failing the whole file, and columns absent from the export fall back to
//! their defaults. Structural CSV errors (unreadable file, malformed
//! records) are still surfaced.

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Deserializer};

use crate::error::{IngestError, Result};

/// One pitch as it appears in the export, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPitch {
    #[serde(rename = "Pitcher")]
    pub pitcher: Option<String>,
    #[serde(rename = "PitcherId", deserialize_with = "lenient_string")]
    pub pitcher_id: Option<String>,
    #[serde(rename = "PitcherTeam")]
    pub pitcher_team: Option<String>,
    #[serde(rename = "Batter")]
    pub batter: Option<String>,
    #[serde(rename = "BatterId", deserialize_with = "lenient_string")]
    pub batter_id: Option<String>,
    #[serde(rename = "BatterTeam")]
    pub batter_team: Option<String>,
    #[serde(rename = "HomeTeam")]
    pub home_team: Option<String>,
    #[serde(rename = "AwayTeam")]
    pub away_team: Option<String>,
    #[serde(rename = "Date")]
    pub game_date: Option<String>,
    #[serde(rename = "Inning", deserialize_with = "lenient_u32")]
    pub inning: Option<u32>,
    #[serde(rename = "Top/Bottom")]
    pub half: Option<String>,
    #[serde(rename = "PitchofPA", deserialize_with = "lenient_u32")]
    pub pitch_of_pa: Option<u32>,
    #[serde(rename = "PitchCall")]
    pub pitch_call: Option<String>,
    #[serde(rename = "KorBB")]
    pub kor_bb: Option<String>,
    #[serde(rename = "PlayResult")]
    pub play_result: Option<String>,
    #[serde(rename = "TaggedHitType")]
    pub tagged_hit_type: Option<String>,
    #[serde(rename = "TaggedPitchType")]
    pub tagged_pitch_type: Option<String>,
    #[serde(rename = "Event")]
    pub event: Option<String>,
    #[serde(rename = "RelSpeed", deserialize_with = "lenient_f64")]
    pub rel_speed: Option<f64>,
    #[serde(rename = "SpinRate", deserialize_with = "lenient_f64")]
    pub spin_rate: Option<f64>,
    #[serde(rename = "SpinAxis", deserialize_with = "lenient_f64")]
    pub spin_axis: Option<f64>,
    #[serde(rename = "PlateLocSide", deserialize_with = "lenient_f64")]
    pub plate_loc_side: Option<f64>,
    #[serde(rename = "PlateLocHeight", deserialize_with = "lenient_f64")]
    pub plate_loc_height: Option<f64>,
    #[serde(rename = "HorzBreak", deserialize_with = "lenient_f64")]
    pub horz_break: Option<f64>,
    #[serde(rename = "InducedVertBreak", deserialize_with = "lenient_f64")]
    pub induced_vert_break: Option<f64>,
    #[serde(rename = "RunsScored", deserialize_with = "lenient_u32")]
    pub runs_scored: Option<u32>,
}

/// Read every record of a pitch export in file order.
pub fn read_pitch_csv(path: &Path) -> Result<Vec<RawPitch>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|error| open_error(path, error))?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<RawPitch>() {
        let row = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        rows.push(row);
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "read pitch export");
    Ok(rows)
}

fn open_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        csv::ErrorKind::Io(io) => IngestError::FileRead {
            path: path.to_path_buf(),
            source: io,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Numeric cell decoded leniently: blank or non-numeric means absent.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_f64))
}

/// Integer cell decoded leniently; exports sometimes write integers with a
/// trailing `.0`, so parse through f64.
fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(parse_f64)
        .filter(|value| *value >= 0.0 && value.fract() == 0.0)
        .map(|value| value as u32))
}

/// Identifier cell kept as text even when the export writes it numerically.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn parse_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
