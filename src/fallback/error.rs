// Typed faults for the fallback stage. Callers outside the crate never see
// these: every variant is reported as the unsure sentinel.

use thiserror::Error;

/// Why the fallback stage declined to name a category.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationFault {
    /// The model could not be loaded (missing files, bad format, runtime).
    #[error("failed to load fallback model: {0}")]
    ModelLoad(String),

    /// The model loaded but scoring the query failed.
    #[error("fallback inference failed: {0}")]
    Inference(String),

    /// The model ran but its top score fell below the confidence threshold.
    #[error("fallback model not confident (top score {top:.3})")]
    LowConfidence { top: f32 },
}

impl ClassificationFault {
    pub fn model_load(err: anyhow::Error) -> Self {
        ClassificationFault::ModelLoad(format!("{err:#}"))
    }

    pub fn inference(err: anyhow::Error) -> Self {
        ClassificationFault::Inference(format!("{err:#}"))
    }
}
