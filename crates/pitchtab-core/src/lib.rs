//! Game reconstruction and stat aggregation over normalized pitch rows.
//!
//! Data flows one way: normalized rows feed the plate-appearance
//! reconstructor and the two stat reducers independently; nothing here
//! performs I/O or shares mutable state across the passes. One dataset is
//! one unit of work, processed to completion in a single thread.

pub mod reconstruct;
pub mod stats;

pub use reconstruct::reconstruct;
pub use stats::{aggregate_batting, aggregate_pitching};

use pitchtab_model::{PaId, PitchRow};

/// Every pitch of one plate appearance, for detail drill-down.
/// Id 0 (rows before the first marker) never matches.
pub fn outcomes_for_plate_appearance(rows: &[PitchRow], pa_id: PaId) -> Vec<&PitchRow> {
    if pa_id == 0 {
        return Vec::new();
    }
    rows.iter().filter(|row| row.pa_id == pa_id).collect()
}
