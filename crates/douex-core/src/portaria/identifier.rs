//! Order identifier extraction: number and issue date of a portaria.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::models::OrderIdentifier;

use super::rules::patterns::{month_number, MARKER_SELECTORS, PORTARIA_PATTERN, PORTARIA_STRICT};

/// Extracts the portaria number and issue date from gazette text.
///
/// Never fails: when no pattern matches, both identifier fields stay
/// `None`. The loose variant accepts orders without the GM/MS qualifier;
/// the strict variant requires it. The corpus mixes both forms, so the
/// caller picks the variant matching its document family.
#[derive(Debug, Clone)]
pub struct IdentifierExtractor {
    strict_issuer: bool,
}

impl IdentifierExtractor {
    pub fn new() -> Self {
        Self {
            strict_issuer: false,
        }
    }

    /// Require the GM/MS issuing-body token directly after the keyword.
    pub fn with_strict_issuer(mut self, strict: bool) -> Self {
        self.strict_issuer = strict;
        self
    }

    fn pattern(&self) -> &'static Regex {
        if self.strict_issuer {
            &PORTARIA_STRICT
        } else {
            &PORTARIA_PATTERN
        }
    }

    /// Extract the identifier from raw document text.
    ///
    /// Matches against the full text first; if that fails, retries inside
    /// the gazette's marker elements before giving up.
    pub fn extract(&self, text: &str) -> OrderIdentifier {
        if let Some(identifier) = self.match_text(text) {
            return identifier;
        }

        for region in marker_regions(text) {
            if let Some(identifier) = self.match_text(&region) {
                debug!("identifier recovered from marker element");
                return identifier;
            }
        }

        OrderIdentifier::default()
    }

    fn match_text(&self, text: &str) -> Option<OrderIdentifier> {
        let caps = self.pattern().captures(text)?;

        let numero = normalize_number(&caps[1]);
        let data = {
            let day: u32 = caps[2].parse().ok()?;
            let month = month_number(&caps[3])?;
            let year = &caps[4];
            Some(format!("{day:02}/{month}/{year}"))
        };

        Some(OrderIdentifier { numero, data })
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract an identifier with the default (loose) extractor.
pub fn extract_identifier(text: &str) -> OrderIdentifier {
    IdentifierExtractor::new().extract(text)
}

/// Text content of the marker elements the gazette uses for the
/// identification line.
fn marker_regions(text: &str) -> Vec<String> {
    let document = Html::parse_document(text);
    let mut regions = Vec::new();

    for selector in MARKER_SELECTORS {
        // Selectors are fixed literals; parse cannot fail at runtime.
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        for element in document.select(&sel) {
            let content: String = element.text().collect::<Vec<_>>().join(" ");
            if !content.trim().is_empty() {
                regions.push(content);
            }
        }
    }

    regions
}

/// Normalize a captured order number: drop trailing separators left by the
/// greedy capture, strip thousands dots, convert a decimal comma to a dot.
fn normalize_number(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches(['.', ',']);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace('.', "").replace(',', "."))
}
