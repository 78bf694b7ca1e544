use crate::models::{CliApp, Lead, Result, NO_EMAILS_FOUND};
use crate::orchestrator::LeadBatch;
use crate::places::GooglePlacesClient;
use crate::web_crawler::SiteCrawler;
use dialoguer::{theme::ColorfulTheme, Input};
use std::sync::Arc;
use std::time::Duration;

impl CliApp {
    pub async fn run_discover(&self) -> Result<()> {
        println!("\n🔍 Lead Discovery: Google Maps + Website Scraping");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let Ok(api_key) = std::env::var("GOOGLE_MAPS_API_KEY") else {
            println!("❌ GOOGLE_MAPS_API_KEY is not set");
            println!("💡 Add it to your .env file to enable places search");
            return Ok(());
        };

        let query: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Search query (e.g. 'plumbers in Austin, TX')")
            .interact_text()?;

        let max_results: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Maximum results")
            .default(self.config.places.default_max_results)
            .interact_text()?;

        let places = Arc::new(GooglePlacesClient::with_base_url(
            api_key,
            self.config.places.base_url.clone(),
            self.config.places.api_timeout_seconds,
        ));
        let crawler = SiteCrawler::new(&self.config.crawler);
        let crawl_delay = Duration::from_millis(self.config.crawler.rate_limit_delay_ms);

        println!("\n🚀 Searching and scraping (one site at a time)...");

        let mut batch =
            match LeadBatch::start(places, crawler, &query, max_results, crawl_delay).await {
                Ok(batch) => batch,
                Err(e) => {
                    println!("❌ Places search failed: {}", e);
                    return Ok(());
                }
            };

        // Keep whatever was assembled even if a later places call fails.
        let mut leads = Vec::new();
        loop {
            match batch.next().await {
                Ok(Some(progress)) => {
                    println!("  {}", progress.status);
                    leads = progress.leads;
                }
                Ok(None) => break,
                Err(e) => {
                    println!("❌ Batch aborted: {}", e);
                    break;
                }
            }
        }

        if leads.is_empty() {
            println!("❌ No leads assembled");
            return Ok(());
        }

        let with_emails = leads
            .iter()
            .filter(|lead| lead.found_emails != NO_EMAILS_FOUND)
            .count();

        println!("\n🎉 Assembled {} leads", leads.len());
        println!("📧 {} with at least one discovered email", with_emails);

        self.export_discovered_leads(&leads).await?;

        Ok(())
    }

    async fn export_discovered_leads(&self, leads: &[Lead]) -> Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "{}/discovered_leads_{}.json",
            self.config.output.directory, timestamp
        );

        let json = if self.config.output.pretty_json {
            serde_json::to_string_pretty(leads)?
        } else {
            serde_json::to_string(leads)?
        };
        tokio::fs::write(&filename, json).await?;

        println!("✅ Exported: {}", filename);
        Ok(())
    }
}
