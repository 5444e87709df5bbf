//! Monte Carlo experiments with weighted dice.
//!
//! A [`Die`] holds a fixed set of unique faces, each with a mutable weight,
//! and draws faces with probability proportional to weight. A [`Game`] rolls
//! one or more same-faced dice together and keeps the most recent result
//! table. An [`Analyzer`] snapshots a game's table and derives descriptive
//! statistics: jackpot counts, per-roll face tallies, and combination and
//! permutation frequencies.

pub mod analyzer;
pub mod config;
pub mod die;
pub mod error;
pub mod face;
pub mod game;
pub mod table;

pub use analyzer::{Analyzer, ComboEntry, ComboTable, FaceCountTable};
pub use config::GameConfig;
pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use face::Face;
pub use game::Game;
pub use table::{Layout, NarrowRow, NarrowTable, PlayTable, PlayView};
