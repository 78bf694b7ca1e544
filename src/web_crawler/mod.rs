pub mod crawler;
pub mod email_extractor;
pub mod types;

// Re-export the main types for easy importing
pub use crawler::SiteCrawler;
pub use email_extractor::EmailExtractor;
pub use types::ContactResult;
