// Fallback classification — the model-backed second stage.
//
// The IntentModel/ModelLoader traits define the seam. OnnxModelLoader is the
// production implementation; tests plug in fakes that return fixed scores or
// fail on purpose.

pub mod classifier;
pub mod error;
pub mod onnx;
pub mod traits;
