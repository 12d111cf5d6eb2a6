// Intent pipeline: normalize → keyword match → fallback model.
//
// This is the only entry point callers need. It never fails: every fallback
// fault is collapsed into Classification::Unsure here.

use std::fmt;

use tracing::{debug, info};

use crate::fallback::classifier::FallbackClassifier;
use crate::fallback::error::ClassificationFault;
use crate::fallback::traits::ModelLoader;
use crate::keywords::matcher::{find_match, normalize_query};
use crate::keywords::table::{Category, CategoryTable, SERVICE_TABLE};

/// Line emitted when no category can be named with confidence.
pub const UNSURE_SENTINEL: &str = "I am trained for Profix AI related services only";

/// Externally visible outcome of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Category(Category),
    Unsure,
}

impl Classification {
    /// The single output line for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Category(c) => c.as_str(),
            Classification::Unsure => UNSURE_SENTINEL,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Result<Category, ClassificationFault>> for Classification {
    fn from(result: Result<Category, ClassificationFault>) -> Self {
        match result {
            Ok(category) => Classification::Category(category),
            Err(fault) => {
                debug!(%fault, "fallback produced no category");
                Classification::Unsure
            }
        }
    }
}

/// Which stage produced the result. Useful for logs and tests; not part of
/// the printed output.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Keyword { category: Category, keyword: String },
    Fallback(Result<Category, ClassificationFault>),
}

impl Resolution {
    pub fn classification(&self) -> Classification {
        match self {
            Resolution::Keyword { category, .. } => Classification::Category(*category),
            Resolution::Fallback(result) => result.clone().into(),
        }
    }
}

/// Two-stage intent classifier.
pub struct IntentClassifier<'t, L> {
    table: CategoryTable<'t>,
    fallback: FallbackClassifier<L>,
}

impl<L: ModelLoader> IntentClassifier<'static, L> {
    /// Classifier using the built-in service table.
    pub fn new(loader: L) -> Self {
        Self::with_table(SERVICE_TABLE, loader)
    }
}

impl<'t, L: ModelLoader> IntentClassifier<'t, L> {
    pub fn with_table(table: CategoryTable<'t>, loader: L) -> Self {
        Self {
            table,
            fallback: FallbackClassifier::new(loader),
        }
    }

    /// Run the full pipeline and report which stage answered.
    ///
    /// The fallback model is only loaded when no keyword matches.
    pub fn resolve(&self, raw_query: &str) -> Resolution {
        let query = normalize_query(raw_query);

        if let Some(m) = find_match(&query, &self.table) {
            return Resolution::Keyword {
                category: m.category,
                keyword: m.keyword.to_string(),
            };
        }

        info!("no keyword match, consulting fallback model");
        Resolution::Fallback(self.fallback.classify(&query))
    }

    /// Classify a raw query into a category or Unsure.
    pub fn classify(&self, raw_query: &str) -> Classification {
        self.resolve(raw_query).classification()
    }
}
