use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Counting stats for one batter.
///
/// The sacrifice-bunt, stolen-base, and caught-stealing columns exist in
/// the rendered table but stay at zero: the export does not attribute
/// those events per batter (known input limitation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterStatLine {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub sac_bunts: u32,
    pub sac_flies: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
}

impl BatterStatLine {
    /// Batting average formatted without the leading zero; zero at-bats
    /// means `.000`, never an error.
    pub fn batting_average(&self) -> String {
        format_average(self.hits, self.at_bats)
    }

    pub fn add(&mut self, other: &BatterStatLine) {
        self.plate_appearances += other.plate_appearances;
        self.at_bats += other.at_bats;
        self.hits += other.hits;
        self.home_runs += other.home_runs;
        self.strikeouts += other.strikeouts;
        self.walks += other.walks;
        self.hit_by_pitch += other.hit_by_pitch;
        self.sac_bunts += other.sac_bunts;
        self.sac_flies += other.sac_flies;
        self.stolen_bases += other.stolen_bases;
        self.caught_stealing += other.caught_stealing;
    }
}

/// Counting stats for one pitcher. Accumulated per row, not per plate
/// appearance; the result fields are populated only on a plate
/// appearance's terminal row in well-formed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherStatLine {
    pub pitch_count: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
}

impl PitcherStatLine {
    pub fn add(&mut self, other: &PitcherStatLine) {
        self.pitch_count += other.pitch_count;
        self.hits += other.hits;
        self.home_runs += other.home_runs;
        self.strikeouts += other.strikeouts;
        self.walks += other.walks;
        self.hit_by_pitch += other.hit_by_pitch;
    }
}

/// Per-batter lines for one team, in lineup order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingReport {
    pub team: String,
    /// Batter names in order of first plate appearance.
    pub order: Vec<String>,
    pub stats: BTreeMap<String, BatterStatLine>,
}

impl BattingReport {
    /// Team totals as the sum of all player lines.
    pub fn team_totals(&self) -> BatterStatLine {
        let mut totals = BatterStatLine::default();
        for line in self.stats.values() {
            totals.add(line);
        }
        totals
    }
}

/// Per-pitcher lines for one team, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingReport {
    pub team: String,
    pub order: Vec<String>,
    pub stats: BTreeMap<String, PitcherStatLine>,
}

impl PitchingReport {
    pub fn team_totals(&self) -> PitcherStatLine {
        let mut totals = PitcherStatLine::default();
        for line in self.stats.values() {
            totals.add(line);
        }
        totals
    }
}

/// `.300`-style average string; `.000` when the denominator is zero.
pub fn format_average(numerator: u32, denominator: u32) -> String {
    if denominator == 0 {
        return ".000".to_string();
    }
    let thousandths =
        (f64::from(numerator) / f64::from(denominator) * 1000.0).round() as u32;
    if thousandths >= 1000 {
        // A perfect day at the plate reads 1.000, not .1000.
        format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
    } else {
        format!(".{:03}", thousandths)
    }
}
