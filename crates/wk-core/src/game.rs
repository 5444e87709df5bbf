//! A game: several same-faced dice rolled together.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::table::{Layout, PlayTable, PlayView};

/// A game rolls one or more dice with identical face sets a number of times.
///
/// Dice may carry different weights. Only the most recent play is retained;
/// every successful [`play`](Game::play) replaces the stored table
/// wholesale.
#[derive(Debug)]
pub struct Game {
    dice: Vec<Die>,
    last_play: Option<PlayTable>,
    rng: StdRng,
}

impl Game {
    /// Create a game from a non-empty list of dice sharing the same faces.
    pub fn new(dice: Vec<Die>, config: GameConfig) -> DiceResult<Self> {
        let Some(first) = dice.first() else {
            return Err(DiceError::NoDice);
        };
        if dice.iter().any(|die| !same_faces(first, die)) {
            return Err(DiceError::MismatchedDice);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            dice,
            last_play: None,
            rng,
        })
    }

    /// The dice in this game, in column order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of dice.
    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Mutable access to one die, for weight changes between plays.
    pub fn die_mut(&mut self, die: usize) -> Option<&mut Die> {
        self.dice.get_mut(die)
    }

    /// Roll every die `num_rolls` times and store the wide result table.
    ///
    /// The table has exactly `num_rolls` rows and one column per die. On an
    /// error from any die, the previously stored table (if any) is left
    /// untouched.
    pub fn play(&mut self, num_rolls: usize) -> DiceResult<()> {
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.roll(num_rolls, &mut self.rng)?);
        }
        let rows = (0..num_rolls)
            .map(|roll| columns.iter().map(|column| column[roll].clone()).collect())
            .collect();
        self.last_play = Some(PlayTable::new(rows));
        Ok(())
    }

    /// Borrow the most recent play results in wide form.
    pub fn results(&self) -> DiceResult<&PlayTable> {
        self.last_play.as_ref().ok_or(DiceError::NoResultsYet)
    }

    /// A copy of the most recent play results in the requested layout.
    pub fn show(&self, layout: Layout) -> DiceResult<PlayView> {
        let table = self.results()?;
        Ok(match layout {
            Layout::Wide => PlayView::Wide(table.clone()),
            Layout::Narrow => PlayView::Narrow(table.narrow()),
        })
    }
}

/// Two dice share faces when their face sequences match as sets.
fn same_faces(a: &Die, b: &Die) -> bool {
    a.len() == b.len() && a.faces().iter().all(|face| b.faces().contains(face))
}
