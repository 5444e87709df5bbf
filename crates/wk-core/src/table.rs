//! Result tables for game plays.
//!
//! The wide layout has one row per roll and one column per die. The narrow
//! layout is the fully unpivoted form: one record per (roll, die) pair,
//! ordered by roll then die, preserving the wide table's row-major cell
//! order.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::face::Face;

/// The shape in which play results are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// One row per roll, one column per die.
    Wide,
    /// One row per (roll, die) pair.
    Narrow,
}

impl Layout {
    /// Parse a layout selector. Accepts "wide" and "narrow", case-insensitive.
    pub fn parse(s: &str) -> DiceResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            _ => Err(DiceError::InvalidLayout(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wide => write!(f, "wide"),
            Self::Narrow => write!(f, "narrow"),
        }
    }
}

/// The wide results of a play: `rows[roll][die]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTable {
    rows: Vec<Vec<Face>>,
}

impl PlayTable {
    pub(crate) fn new(rows: Vec<Vec<Face>>) -> Self {
        Self { rows }
    }

    /// Number of rolls (rows).
    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    /// Number of dice (columns). Zero only for an empty table.
    pub fn num_dice(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All rows in roll order.
    pub fn rows(&self) -> &[Vec<Face>] {
        &self.rows
    }

    /// A single row by roll index.
    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    /// Melt into the narrow layout, ordered by roll then die.
    pub fn narrow(&self) -> NarrowTable {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(die, outcome)| NarrowRow {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

impl std::fmt::Display for PlayTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (roll, row) in self.rows.iter().enumerate() {
            let faces: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{roll}: [{}]", faces.join(", "))?;
        }
        Ok(())
    }
}

/// One record of the narrow layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrowRow {
    /// Roll index (0-based).
    pub roll: usize,
    /// Die index (0-based).
    pub die: usize,
    /// The face that die produced on that roll.
    pub outcome: Face,
}

/// The narrow results of a play, ordered by roll then die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    /// All records in (roll, die) order.
    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Regroup into the wide layout.
    ///
    /// Inverse of [`PlayTable::narrow`] for any table produced by it.
    pub fn to_wide(&self) -> PlayTable {
        let num_rolls = self.rows.iter().map(|r| r.roll + 1).max().unwrap_or(0);
        let mut rows = vec![Vec::new(); num_rolls];
        let mut ordered: Vec<&NarrowRow> = self.rows.iter().collect();
        ordered.sort_by_key(|r| (r.roll, r.die));
        for record in ordered {
            rows[record.roll].push(record.outcome.clone());
        }
        PlayTable { rows }
    }
}

impl std::fmt::Display for NarrowTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.rows {
            writeln!(f, "{} {} {}", record.roll, record.die, record.outcome)?;
        }
        Ok(())
    }
}

/// A copy of play results in a requested layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayView {
    /// The wide table.
    Wide(PlayTable),
    /// The narrow table.
    Narrow(NarrowTable),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PlayTable {
        PlayTable::new(vec![
            vec![Face::Num(1), Face::Num(1)],
            vec![Face::Num(2), Face::Num(3)],
        ])
    }

    #[test]
    fn layout_parse() {
        assert_eq!(Layout::parse("wide").unwrap(), Layout::Wide);
        assert_eq!(Layout::parse(" Narrow ").unwrap(), Layout::Narrow);
        assert!(matches!(
            Layout::parse("diagonal"),
            Err(DiceError::InvalidLayout(_))
        ));
    }

    #[test]
    fn wide_shape() {
        let t = table();
        assert_eq!(t.num_rolls(), 2);
        assert_eq!(t.num_dice(), 2);
        assert_eq!(t.row(1), Some(&[Face::Num(2), Face::Num(3)][..]));
        assert_eq!(t.row(9), None);
    }

    #[test]
    fn narrow_preserves_row_major_order() {
        let narrow = table().narrow();
        assert_eq!(narrow.len(), 4);
        let keys: Vec<(usize, usize)> = narrow.rows().iter().map(|r| (r.roll, r.die)).collect();
        assert_eq!(keys, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(narrow.rows()[3].outcome, Face::Num(3));
    }

    #[test]
    fn narrow_round_trips_to_wide() {
        let t = table();
        assert_eq!(t.narrow().to_wide(), t);
    }

    #[test]
    fn empty_table() {
        let t = PlayTable::new(vec![]);
        assert_eq!(t.num_rolls(), 0);
        assert_eq!(t.num_dice(), 0);
        let narrow = t.narrow();
        assert!(narrow.is_empty());
        assert_eq!(narrow.to_wide(), t);
    }

    #[test]
    fn display() {
        assert_eq!(table().to_string(), "0: [1, 1]\n1: [2, 3]\n");
    }
}
