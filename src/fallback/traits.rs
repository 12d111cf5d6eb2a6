// Fallback model traits — the swap-ready abstraction.
//
// The classifier only needs "load a model" and "score a string into two
// classes". Keeping those behind traits lets the threshold logic be tested
// without ONNX files on disk.

use anyhow::Result;

use crate::keywords::table::Category;

/// Class order produced by the fallback model: index 0, then index 1.
pub const MODEL_CLASSES: [Category; 2] = [Category::Mechanic, Category::Electrician];

/// Probability-like scores over the model's two classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePair {
    /// Class 0 score.
    pub mechanic: f32,
    /// Class 1 score.
    pub electrician: f32,
}

impl ScorePair {
    pub fn new(mechanic: f32, electrician: f32) -> Self {
        Self {
            mechanic,
            electrician,
        }
    }

    /// Build a pair from one model output row. The row must hold exactly two
    /// finite values.
    pub fn from_row(row: &[f32]) -> Result<Self> {
        let [mechanic, electrician] = row else {
            anyhow::bail!("expected 2 class scores, got {}", row.len());
        };
        if !mechanic.is_finite() || !electrician.is_finite() {
            anyhow::bail!("non-finite class scores: [{mechanic}, {electrician}]");
        }
        Ok(Self::new(*mechanic, *electrician))
    }

    /// The larger of the two scores.
    pub fn top(&self) -> f32 {
        self.mechanic.max(self.electrician)
    }
}

/// A loaded two-class predictor.
pub trait IntentModel {
    /// Score a single query. Takes `&mut self` because ONNX sessions need
    /// mutable access to run.
    fn predict(&mut self, text: &str) -> Result<ScorePair>;
}

/// Produces a fresh model on demand. Loading is fallible and happens at most
/// once per classification.
pub trait ModelLoader {
    fn load(&self) -> Result<Box<dyn IntentModel>>;
}
