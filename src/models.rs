use serde::{Deserialize, Serialize};

use crate::config::Config;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Sentinel rendered into `found_emails` when a crawl produced nothing.
pub const NO_EMAILS_FOUND: &str = "None Found";

/// Default rendered for place fields the details lookup did not return.
pub const UNKNOWN_FIELD: &str = "N/A";

/// One assembled lead. Created once per pipeline pass and never mutated
/// afterwards; status transitions live in downstream tooling, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub place_id: String,
    pub business_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Comma-joined discovered emails, or [`NO_EMAILS_FOUND`].
    pub found_emails: String,
    /// Only populated on the synthetic-generation path. Scraped leads are
    /// never scored.
    pub lead_score: Option<f64>,
}

pub struct CliApp {
    pub config: Config,
}
