use regex::Regex;
use std::collections::BTreeSet;

/// Pulls email-like strings out of arbitrary text. No network, no state.
pub struct EmailExtractor {
    email_regex: Regex,
}

impl EmailExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .unwrap(),
        }
    }

    /// Addresses are lowercased before insertion so case-variant duplicates
    /// collapse into one set member.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.email_regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}
