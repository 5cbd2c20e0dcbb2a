//! Pitch export ingestion: CSV reading plus row-stream normalization.

pub mod error;
pub mod normalize;
pub mod reader;

use std::path::Path;

pub use error::{IngestError, Result};
pub use normalize::normalize;
pub use reader::{RawPitch, read_pitch_csv};

use pitchtab_model::PitchRow;

/// Read a pitch export and normalize it in one step.
pub fn load_pitch_rows(path: &Path) -> Result<Vec<PitchRow>> {
    let raw = read_pitch_csv(path)?;
    Ok(normalize(raw))
}
