//! Descriptive statistics over a completed game.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::DiceResult;
use crate::face::Face;
use crate::game::Game;
use crate::table::PlayTable;

/// Per-roll tally of face occurrences.
///
/// Columns are every face observed anywhere in the snapshot, in face order;
/// a face absent from a roll counts 0, never missing. Each row sums to the
/// number of dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceCountTable {
    /// Column faces, sorted.
    pub faces: Vec<Face>,
    /// `rows[roll][i]` is how often `faces[i]` appeared in that roll.
    pub rows: Vec<Vec<usize>>,
}

impl std::fmt::Display for FaceCountTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header: Vec<String> = self.faces.iter().map(ToString::to_string).collect();
        writeln!(f, "roll | {}", header.join(" "))?;
        for (roll, row) in self.rows.iter().enumerate() {
            let counts: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{roll:>4} | {}", counts.join(" "))?;
        }
        Ok(())
    }
}

/// One distinct combination or permutation with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboEntry {
    /// The row key: sorted faces for combinations, as-rolled for permutations.
    pub faces: Vec<Face>,
    /// How many rolls produced this key.
    pub count: usize,
}

/// Frequency table of distinct row keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboTable {
    /// Entries ordered by descending count, ties in key order.
    pub entries: Vec<ComboEntry>,
}

impl ComboTable {
    /// Count for a specific key, 0 if absent.
    pub fn count(&self, faces: &[Face]) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.faces == faces)
            .map_or(0, |entry| entry.count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for ComboTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            let faces: Vec<String> = entry.faces.iter().map(ToString::to_string).collect();
            writeln!(f, "[{}] x{}", faces.join(", "), entry.count)?;
        }
        Ok(())
    }
}

/// Computes statistics over a snapshot of a game's results.
///
/// The snapshot is taken at construction; later plays on the game do not
/// affect an existing analyzer. All queries are pure.
#[derive(Debug, Clone)]
pub struct Analyzer {
    results: PlayTable,
}

impl Analyzer {
    /// Snapshot the game's most recent wide results.
    ///
    /// Fails with [`NoResultsYet`](crate::DiceError::NoResultsYet) if the
    /// game has not been played.
    pub fn new(game: &Game) -> DiceResult<Self> {
        Ok(Self {
            results: game.results()?.clone(),
        })
    }

    /// The snapshot this analyzer works on.
    pub fn results(&self) -> &PlayTable {
        &self.results
    }

    /// Number of rolls where every die showed the same face.
    ///
    /// A single-die game jackpots on every roll.
    pub fn jackpot(&self) -> usize {
        self.results
            .rows()
            .iter()
            .filter(|row| row.windows(2).all(|pair| pair[0] == pair[1]))
            .count()
    }

    /// Tally how often each face appeared in each roll.
    pub fn face_counts_per_roll(&self) -> FaceCountTable {
        let faces: Vec<Face> = self
            .results
            .rows()
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let rows = self
            .results
            .rows()
            .iter()
            .map(|row| {
                faces
                    .iter()
                    .map(|face| row.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();
        FaceCountTable { faces, rows }
    }

    /// Frequency of each order-independent combination of row faces.
    ///
    /// Rows with the same multiset of outcomes in different column order
    /// count as the same combination.
    pub fn combo_count(&self) -> ComboTable {
        self.tally(|row| {
            let mut key = row.to_vec();
            key.sort();
            key
        })
    }

    /// Frequency of each order-dependent permutation of row faces.
    ///
    /// Rows differing only in which die produced which face are distinct.
    pub fn permutation_count(&self) -> ComboTable {
        self.tally(<[Face]>::to_vec)
    }

    fn tally(&self, key_of: impl Fn(&[Face]) -> Vec<Face>) -> ComboTable {
        let mut counts: BTreeMap<Vec<Face>, usize> = BTreeMap::new();
        for row in self.results.rows() {
            *counts.entry(key_of(row)).or_insert(0) += 1;
        }
        let mut entries: Vec<ComboEntry> = counts
            .into_iter()
            .map(|(faces, count)| ComboEntry { faces, count })
            .collect();
        // Stable sort keeps ties in key order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        ComboTable { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::die::Die;

    fn analyzer_of(rows: Vec<Vec<i64>>) -> Analyzer {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Face::Num).collect())
            .collect();
        Analyzer {
            results: PlayTable::new(rows),
        }
    }

    fn played_game(dice: Vec<Die>, rolls: usize) -> Game {
        let mut game = Game::new(dice, GameConfig::default().with_seed(42)).unwrap();
        game.play(rolls).unwrap();
        game
    }

    #[test]
    fn new_requires_played_game() {
        let game = Game::new(
            vec![Die::standard(6).unwrap()],
            GameConfig::default().with_seed(1),
        )
        .unwrap();
        assert!(Analyzer::new(&game).is_err());
    }

    #[test]
    fn snapshot_survives_later_plays() {
        let mut game = played_game(vec![Die::standard(6).unwrap()], 5);
        let analyzer = Analyzer::new(&game).unwrap();
        game.play(9).unwrap();
        assert_eq!(analyzer.results().num_rolls(), 5);
    }

    #[test]
    fn jackpot_counts_uniform_rows() {
        let analyzer = analyzer_of(vec![vec![1, 1], vec![2, 3], vec![1, 1]]);
        assert_eq!(analyzer.jackpot(), 2);
    }

    #[test]
    fn jackpot_single_die_is_every_roll() {
        let game = played_game(vec![Die::standard(6).unwrap()], 12);
        let analyzer = Analyzer::new(&game).unwrap();
        assert_eq!(analyzer.jackpot(), 12);
    }

    #[test]
    fn jackpot_empty_table_is_zero() {
        let analyzer = analyzer_of(vec![]);
        assert_eq!(analyzer.jackpot(), 0);
    }

    #[test]
    fn face_counts_cover_all_observed_faces() {
        let analyzer = analyzer_of(vec![vec![1, 1], vec![2, 3], vec![1, 1]]);
        let counts = analyzer.face_counts_per_roll();
        assert_eq!(counts.faces, vec![Face::Num(1), Face::Num(2), Face::Num(3)]);
        assert_eq!(counts.rows[0], vec![2, 0, 0]);
        assert_eq!(counts.rows[1], vec![0, 1, 1]);
        assert_eq!(counts.rows[2], vec![2, 0, 0]);
    }

    #[test]
    fn face_count_rows_sum_to_dice_count() {
        let dice = vec![
            Die::standard(6).unwrap(),
            Die::standard(6).unwrap(),
            Die::standard(6).unwrap(),
        ];
        let game = played_game(dice, 30);
        let analyzer = Analyzer::new(&game).unwrap();
        for row in analyzer.face_counts_per_roll().rows {
            assert_eq!(row.iter().sum::<usize>(), 3);
        }
    }

    #[test]
    fn combo_and_permutation_agree_without_reordered_rows() {
        let analyzer = analyzer_of(vec![vec![1, 1], vec![2, 3], vec![1, 1]]);

        let combos = analyzer.combo_count();
        assert_eq!(combos.len(), 2);
        assert_eq!(combos.count(&[Face::Num(1), Face::Num(1)]), 2);
        assert_eq!(combos.count(&[Face::Num(2), Face::Num(3)]), 1);

        let perms = analyzer.permutation_count();
        assert_eq!(perms.len(), 2);
        assert_eq!(perms.count(&[Face::Num(1), Face::Num(1)]), 2);
        assert_eq!(perms.count(&[Face::Num(2), Face::Num(3)]), 1);
    }

    #[test]
    fn combo_groups_reordered_rows_but_permutation_keeps_them_apart() {
        let analyzer = analyzer_of(vec![vec![1, 1], vec![2, 3], vec![3, 2]]);

        let combos = analyzer.combo_count();
        assert_eq!(combos.count(&[Face::Num(2), Face::Num(3)]), 2);
        assert_eq!(combos.count(&[Face::Num(3), Face::Num(2)]), 0);

        let perms = analyzer.permutation_count();
        assert_eq!(perms.count(&[Face::Num(2), Face::Num(3)]), 1);
        assert_eq!(perms.count(&[Face::Num(3), Face::Num(2)]), 1);
    }

    #[test]
    fn combo_entries_ordered_by_descending_count() {
        let analyzer = analyzer_of(vec![vec![2, 3], vec![1, 1], vec![1, 1]]);
        let combos = analyzer.combo_count();
        assert_eq!(combos.entries[0].count, 2);
        assert_eq!(combos.entries[0].faces, vec![Face::Num(1), Face::Num(1)]);
    }

    #[test]
    fn text_faces_tally_the_same_way() {
        let rows = vec![
            vec![Face::from("H"), Face::from("H")],
            vec![Face::from("T"), Face::from("H")],
        ];
        let analyzer = Analyzer {
            results: PlayTable::new(rows),
        };
        assert_eq!(analyzer.jackpot(), 1);
        let counts = analyzer.face_counts_per_roll();
        assert_eq!(counts.faces, vec![Face::from("H"), Face::from("T")]);
        assert_eq!(counts.rows[1], vec![1, 1]);
    }

    #[test]
    fn tables_serialize_to_json() {
        let analyzer = analyzer_of(vec![vec![1, 2], vec![2, 1]]);
        let json = serde_json::to_string(&analyzer.combo_count()).unwrap();
        assert!(json.contains("\"count\":2"));
        let json = serde_json::to_string(&analyzer.face_counts_per_roll()).unwrap();
        assert!(json.contains("\"faces\":[1,2]"));
    }
}
