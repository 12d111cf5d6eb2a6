use std::env;
use std::path::PathBuf;

/// Central configuration loaded from environment variables.
///
/// The command line carries only the query, so every switch lives here. The
/// .env file is loaded at startup via dotenvy before this is read.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory containing `model.onnx` and `tokenizer.json`
    pub model_dir: PathBuf,
    /// Discard all diagnostics instead of writing them to stderr
    pub quiet: bool,
    /// Print the JSON intent response instead of the bare label
    pub json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so this cannot fail.
    pub fn load() -> Self {
        Self::from_vars(
            env::var("PROFIX_MODEL_DIR").ok(),
            env::var("PROFIX_VERBOSE").ok(),
            env::var("PROFIX_OUTPUT").ok(),
        )
    }

    fn from_vars(
        model_dir: Option<String>,
        verbose: Option<String>,
        output: Option<String>,
    ) -> Self {
        let model_dir = model_dir
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(crate::fallback::onnx::default_model_dir);

        let verbose = verbose.as_deref().is_some_and(is_truthy);
        let json = output
            .as_deref()
            .is_some_and(|o| o.trim().eq_ignore_ascii_case("json"));

        Self {
            model_dir,
            quiet: !verbose,
            json,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None, None);
        assert_eq!(config.model_dir, PathBuf::from("profix_brain_model"));
        assert!(config.quiet);
        assert!(!config.json);
    }

    #[test]
    fn test_model_dir_override() {
        let config = Config::from_vars(Some("/opt/models/intent".into()), None, None);
        assert_eq!(config.model_dir, PathBuf::from("/opt/models/intent"));
    }

    #[test]
    fn test_empty_model_dir_uses_default() {
        let config = Config::from_vars(Some(String::new()), None, None);
        assert_eq!(config.model_dir, PathBuf::from("profix_brain_model"));
    }

    #[test]
    fn test_verbose_values() {
        for v in ["1", "true", "YES", " on "] {
            assert!(!Config::from_vars(None, Some(v.into()), None).quiet, "{v:?}");
        }
        for v in ["0", "false", "", "loud"] {
            assert!(Config::from_vars(None, Some(v.into()), None).quiet, "{v:?}");
        }
    }

    #[test]
    fn test_output_format() {
        assert!(Config::from_vars(None, None, Some("json".into())).json);
        assert!(Config::from_vars(None, None, Some("JSON".into())).json);
        assert!(!Config::from_vars(None, None, Some("text".into())).json);
    }
}
