//! Typo detection and suggestion system for common mistakes.

use std::collections::HashMap;

/// Common keyword and operator typos and their corrections.
pub struct TypoSuggester {
    keyword_corrections: HashMap<&'static str, &'static str>,
    operator_corrections: HashMap<&'static str, &'static str>,
}

impl TypoSuggester {
    pub fn new() -> Self {
        let mut keyword_corrections = HashMap::new();

        keyword_corrections.insert("sleep", "Use RSLEEP <seconds> for the loop delay");
        keyword_corrections.insert("delay", "Use RSLEEP <seconds> for the loop delay");
        keyword_corrections.insert("wait", "Use RSLEEP <seconds> for the loop delay");
        keyword_corrections.insert("speed", "Use RSPEED <baud> for the serial speed");
        keyword_corrections.insert("baud", "Use RSPEED <baud> for the serial speed");
        keyword_corrections.insert("order", "ORDER BY is not supported");
        keyword_corrections.insert("group", "GROUP BY is not supported");
        keyword_corrections.insert("join", "Only a single FROM target is supported");
        keyword_corrections.insert("limit", "LIMIT is not supported");

        let mut operator_corrections = HashMap::new();

        operator_corrections.insert("==", "Use '=' for equality");
        operator_corrections.insert("&", "Use AND to combine conditions");
        operator_corrections.insert("|", "Use OR to combine conditions");
        operator_corrections.insert("!", "Use NOT to negate a condition, or '<>' for inequality");
        operator_corrections.insert("*", "Name the selected pins explicitly, e.g. SELECT din1, ain0");

        Self {
            keyword_corrections,
            operator_corrections,
        }
    }

    /// Suggest a correction for a misused word. Matching is case-insensitive.
    pub fn suggest_keyword(&self, typo: &str) -> Option<&'static str> {
        self.keyword_corrections
            .get(typo.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Suggest a correction for a misused operator.
    pub fn suggest_operator(&self, typo: &str) -> Option<&'static str> {
        self.operator_corrections.get(typo).copied()
    }
}

impl Default for TypoSuggester {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the closest candidate to `name` within a small edit distance.
pub fn closest_match<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let lowered = name.to_ascii_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (strsim::levenshtein(&lowered, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
