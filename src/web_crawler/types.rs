use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contact addresses discovered on a single site. Owned exclusively by the
/// crawl that produced it; an empty set is a valid result, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactResult {
    pub emails: BTreeSet<String>,
}

impl ContactResult {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Comma-joined addresses, or `None` when nothing was found.
    pub fn joined(&self) -> Option<String> {
        if self.emails.is_empty() {
            None
        } else {
            Some(self.emails.iter().cloned().collect::<Vec<_>>().join(", "))
        }
    }
}
