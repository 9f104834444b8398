//! Source document and identifier models.

use serde::{Deserialize, Serialize};

/// One gazette source row, as supplied by the external data source.
///
/// Only `text` is required by the pipeline; the remaining columns are
/// carried as fallback identifier metadata used when regex extraction
/// yields nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    /// Source row id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Markup plus prose body of the published order.
    pub text: String,

    /// Publication name, e.g. "PORTARIA GM/MS Nº 1.234".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_name: Option<String>,

    /// Publication date as printed in the gazette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,

    /// Article type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_type: Option<String>,

    /// Article category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_category: Option<String>,

    /// Free-text summary (ementa).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl RawDocument {
    /// Build a document from bare markup, with no source metadata.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Order number and issue date recovered from a document.
///
/// Immutable once produced; either field may be absent when no pattern
/// matched, which is a valid terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIdentifier {
    /// Normalized order number ("1.234" becomes "1234").
    pub numero: Option<String>,

    /// Issue date formatted `DD/MM/YYYY`.
    pub data: Option<String>,
}

impl OrderIdentifier {
    /// True when neither field was recovered.
    pub fn is_empty(&self) -> bool {
        self.numero.is_none() && self.data.is_none()
    }
}
