// Output formatting — the single line written to stdout.

use anyhow::Result;
use serde::Serialize;

use crate::intent::Classification;

/// JSON envelope consumed by the booking app's intent endpoint.
#[derive(Debug, Serialize)]
pub struct IntentResponse<'a> {
    pub status: &'static str,
    pub intent: &'a str,
}

impl<'a> IntentResponse<'a> {
    /// The unsure sentinel is still a successful response; only the intent
    /// text differs.
    pub fn from_classification(classification: &Classification) -> Self {
        Self {
            status: "success",
            intent: classification.label(),
        }
    }
}

/// Render a classification as the one output line (without the newline).
pub fn render(classification: &Classification, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&IntentResponse::from_classification(
            classification,
        ))?)
    } else {
        Ok(classification.label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::UNSURE_SENTINEL;
    use crate::keywords::table::Category;

    #[test]
    fn test_plain_output_is_label() {
        let line = render(&Classification::Category(Category::Salon), false).unwrap();
        assert_eq!(line, "Salon");
    }

    #[test]
    fn test_json_output_shape() {
        let line = render(&Classification::Category(Category::Carpenter), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["intent"], "Carpenter");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_unsure_is_success_with_sentinel() {
        let line = render(&Classification::Unsure, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["intent"], UNSURE_SENTINEL);
    }
}
