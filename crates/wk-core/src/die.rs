//! A weighted, finite-outcome die.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{DiceError, DiceResult};
use crate::face::Face;

/// A die with a fixed set of unique faces and one weight per face.
///
/// Weights start at 1.0 and can be changed one face at a time. Rolling draws
/// faces with probability proportional to their weight at roll time, with
/// replacement. The face list is fixed at construction and keeps its order
/// as the stable reference ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    /// Create a die from a list of unique, same-kind faces.
    ///
    /// Every weight starts at exactly 1.0.
    pub fn new(faces: Vec<Face>) -> DiceResult<Self> {
        let Some(first) = faces.first() else {
            return Err(DiceError::NoFaces);
        };
        for (i, face) in faces.iter().enumerate() {
            if !first.same_kind(face) {
                return Err(DiceError::MixedFaces);
            }
            if faces[..i].contains(face) {
                return Err(DiceError::DuplicateFace(face.clone()));
            }
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// A standard die with numeric faces `1..=sides`.
    pub fn standard(sides: i64) -> DiceResult<Self> {
        Self::new((1..=sides).map(Face::Num).collect())
    }

    /// The faces of this die in construction order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the die has no faces. Always false for a constructed die.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Change the weight of a single face.
    ///
    /// Zero and negative weights are accepted here; whether the weight
    /// vector still forms a distribution is checked when rolling.
    pub fn set_weight(&mut self, face: &Face, weight: f64) -> DiceResult<()> {
        let idx = self
            .faces
            .iter()
            .position(|f| f == face)
            .ok_or_else(|| DiceError::UnknownFace(face.clone()))?;
        if !weight.is_finite() {
            return Err(DiceError::NonFiniteWeight(weight));
        }
        self.weights[idx] = weight;
        Ok(())
    }

    /// Current weight of a face, if the die has it.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.faces
            .iter()
            .position(|f| f == face)
            .map(|idx| self.weights[idx])
    }

    /// A by-value copy of the face-to-weight table in face order.
    pub fn snapshot(&self) -> Vec<(Face, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    /// Roll the die `times` times with the given RNG.
    ///
    /// Draws are independent and with replacement; each draws a face with
    /// probability weight divided by the sum of all weights. Fails if any
    /// weight is negative or the sum is not a positive finite number.
    pub fn roll(&self, times: usize, rng: &mut StdRng) -> DiceResult<Vec<Face>> {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 || !total.is_finite() || self.weights.iter().any(|w| *w < 0.0) {
            return Err(DiceError::DegenerateWeights);
        }
        let mut outcomes = Vec::with_capacity(times);
        for _ in 0..times {
            outcomes.push(self.faces[self.draw_index(total, rng)].clone());
        }
        Ok(outcomes)
    }

    /// Pick one face index by cumulative weight.
    fn draw_index(&self, total: f64, rng: &mut StdRng) -> usize {
        let mut point = rng.random_range(0.0..total);
        for (i, weight) in self.weights.iter().enumerate() {
            if point < *weight {
                return i;
            }
            point -= weight;
        }
        // Float rounding can push the draw point past the last bucket.
        self.weights.len() - 1
    }
}
