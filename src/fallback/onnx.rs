// Local ONNX intent model.
//
// The model directory holds an ONNX export of the trained two-class intent
// network plus its tokenizer. It is read-only to us and loaded fresh on every
// invocation that reaches the fallback stage.
//
// Output: one row of two scores, class 0 = Mechanic, class 1 = Electrician.
// Scores already in [0, 1] are taken as-is; rows with values outside that
// range are raw logits and get a softmax first.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::traits::{IntentModel, ModelLoader, ScorePair};

/// Well-known name of the model directory.
pub const MODEL_DIR_NAME: &str = "profix_brain_model";

const MODEL_FILE: &str = "model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Default model location, relative to the working directory.
pub fn default_model_dir() -> PathBuf {
    PathBuf::from(MODEL_DIR_NAME)
}

/// Check whether both required model files exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}

/// Loaded ONNX session and tokenizer for the fallback intent model.
pub struct OnnxIntentModel {
    session: Session,
    tokenizer: Tokenizer,
}

impl OnnxIntentModel {
    /// Open the session and tokenizer stored in `model_dir`.
    pub fn load(model_dir: &Path) -> Result<Self> {
        if !model_files_present(model_dir) {
            anyhow::bail!(
                "intent model incomplete: expected {MODEL_FILE} and {TOKENIZER_FILE} in {}",
                model_dir.display()
            );
        }

        let model_path = model_dir.join(MODEL_FILE);
        let session = Session::builder()
            .context("ONNX session builder unavailable")?
            .commit_from_file(&model_path)
            .with_context(|| format!("{} is not a loadable ONNX graph", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(model_dir.join(TOKENIZER_FILE))
            .map_err(|e| anyhow::anyhow!("unreadable {TOKENIZER_FILE}: {e}"))?;

        debug!(dir = %model_dir.display(), "intent model ready");
        Ok(Self { session, tokenizer })
    }
}

impl IntentModel for OnnxIntentModel {
    fn predict(&mut self, text: &str) -> Result<ScorePair> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        if input_ids.is_empty() {
            anyhow::bail!("Tokenizer produced no tokens");
        }

        // Shape: [1, seq_len]
        let shape = [1_i64, input_ids.len() as i64];

        let input_ids_tensor = Tensor::from_array((shape, input_ids))
            .context("Failed to create input_ids tensor")?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask))
            .context("Failed to create attention_mask tensor")?;

        let outputs = self
            .session
            .run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor
            })
            .context("ONNX inference failed")?;

        // Output shape: [1, 2]
        let (_out_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .context("Failed to extract output tensor")?;

        scores_from_output(data)
    }
}

/// Loads an OnnxIntentModel from a fixed directory each time it is asked.
#[derive(Debug, Clone)]
pub struct OnnxModelLoader {
    model_dir: PathBuf,
}

impl OnnxModelLoader {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }
}

impl ModelLoader for OnnxModelLoader {
    fn load(&self) -> Result<Box<dyn IntentModel>> {
        Ok(Box::new(OnnxIntentModel::load(&self.model_dir)?))
    }
}

/// Turn one model output row into the score pair the confidence gate sees.
///
/// Rows whose values all lie in [0, 1] are the model's own scores and are
/// used unchanged, whatever they sum to. Anything else is treated as raw
/// logits and softmaxed.
pub fn scores_from_output(row: &[f32]) -> Result<ScorePair> {
    if row.iter().all(|v| (0.0..=1.0).contains(v)) {
        return ScorePair::from_row(row);
    }
    ScorePair::from_row(&softmax(row))
}

/// Numerically stable softmax.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[2.0, -1.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn test_softmax_equal_logits() {
        let probs = softmax(&[3.0, 3.0]);
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_large_logits_stay_finite() {
        let probs = softmax(&[1000.0, 999.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_probabilities_pass_through() {
        assert_eq!(
            scores_from_output(&[0.9, 0.1]).unwrap(),
            ScorePair::new(0.9, 0.1)
        );
    }

    #[test]
    fn test_logits_are_softmaxed() {
        let pair = scores_from_output(&[4.0, 1.0]).unwrap();
        assert!((pair.mechanic + pair.electrician - 1.0).abs() < 1e-6);
        assert!(pair.mechanic > 0.9);
    }

    #[test]
    fn test_in_range_row_not_summing_to_one_is_unchanged() {
        assert_eq!(
            scores_from_output(&[0.7, 0.7]).unwrap(),
            ScorePair::new(0.7, 0.7)
        );
        assert_eq!(
            scores_from_output(&[0.25, 0.25]).unwrap(),
            ScorePair::new(0.25, 0.25)
        );
    }

    #[test]
    fn test_non_finite_output_is_rejected() {
        assert!(scores_from_output(&[f32::NAN, 0.2]).is_err());
        assert!(scores_from_output(&[f32::INFINITY, 0.2]).is_err());
    }

    #[test]
    fn test_wrong_width_output_is_rejected() {
        assert!(scores_from_output(&[0.2, 0.3, 0.5]).is_err());
    }

    #[test]
    fn test_default_model_dir_name() {
        assert_eq!(default_model_dir(), PathBuf::from("profix_brain_model"));
    }

    #[test]
    fn test_model_files_present_false_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!model_files_present(dir.path()));

        std::fs::write(dir.path().join(MODEL_FILE), b"fake").unwrap();
        assert!(!model_files_present(dir.path()), "tokenizer still missing");
    }

    #[test]
    fn test_model_files_present_true_when_files_exist() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), b"fake").unwrap();
        std::fs::write(dir.path().join(TOKENIZER_FILE), b"fake").unwrap();
        assert!(model_files_present(dir.path()));
    }

    #[test]
    fn test_loader_fails_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let loader = OnnxModelLoader::new(dir.path().join("absent"));
        let err = loader.load().err().expect("load should fail");
        assert!(err.to_string().contains("intent model incomplete"));
    }

    #[test]
    fn test_load_rejects_missing_tokenizer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), b"fake").unwrap();
        let err = OnnxIntentModel::load(dir.path()).err().expect("load should fail");
        assert!(err.to_string().contains("tokenizer.json"));
    }
}
