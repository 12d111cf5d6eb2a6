// Fallback classifier — load, score, gate on confidence.
//
// Load and predict form a single unit of work: whichever step fails, the
// caller gets a ClassificationFault and no partial result. There is no retry.

use tracing::debug;

use super::error::ClassificationFault;
use super::traits::{ModelLoader, ScorePair, MODEL_CLASSES};
use crate::keywords::table::Category;

/// Top scores strictly below this are treated as "not confident".
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Map a score pair to a category, or LowConfidence if neither class clears
/// the threshold.
///
/// A tie between two confident scores resolves to class 1 (Electrician).
pub fn decide(scores: ScorePair) -> Result<Category, ClassificationFault> {
    let top = scores.top();
    if top < CONFIDENCE_THRESHOLD {
        return Err(ClassificationFault::LowConfidence { top });
    }

    let [class0, class1] = MODEL_CLASSES;
    if scores.mechanic > scores.electrician {
        Ok(class0)
    } else {
        Ok(class1)
    }
}

/// Second-stage classifier wrapping a model loader.
///
/// The model is loaded lazily inside `classify`, so constructing a
/// FallbackClassifier never touches the filesystem.
pub struct FallbackClassifier<L> {
    loader: L,
}

impl<L: ModelLoader> FallbackClassifier<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the model, score `query` and apply the confidence gate.
    pub fn classify(&self, query: &str) -> Result<Category, ClassificationFault> {
        let mut model = self.loader.load().map_err(ClassificationFault::model_load)?;

        let scores = model
            .predict(query)
            .map_err(ClassificationFault::inference)?;

        debug!(
            mechanic = scores.mechanic,
            electrician = scores.electrician,
            "fallback model scored query"
        );

        decide(scores)
    }
}
