// ProFix intent: routes a customer's free-text service request to a provider
// category.
//
// Keyword matching runs first; a local two-class ONNX model is consulted only
// when no keyword hits. Each module corresponds to one stage of that pipeline.

pub mod config;
pub mod fallback;
pub mod intent;
pub mod keywords;
pub mod output;
