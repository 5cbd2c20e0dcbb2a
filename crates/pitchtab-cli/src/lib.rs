//! Library components for the pitch-tabulation CLI.

pub mod logging;
