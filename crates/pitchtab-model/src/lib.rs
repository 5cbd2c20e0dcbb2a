pub mod classify;
pub mod outcome;
pub mod row;
pub mod stats;
pub mod summary;

pub use classify::{KorBb, OutcomeClass, PitchCall, PlayResult};
pub use outcome::AtBatOutcome;
pub use row::{HalfInning, PaId, PitchRow};
pub use stats::{
    BatterStatLine, BattingReport, PitcherStatLine, PitchingReport, format_average,
};
pub use summary::{BattingSlot, GameSummary, Scoreboard, SubstituteBatter};
