use crate::config::CrawlerConfig;
use crate::web_crawler::email_extractor::EmailExtractor;
use crate::web_crawler::types::ContactResult;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Crawls one site for contact emails: the homepage plus, when one can be
/// found, a "contact"-looking sub-page. Stateless across calls; no retries,
/// no caching. Rate limiting between sites is the orchestrator's job.
pub struct SiteCrawler {
    client: Client,
    extractor: EmailExtractor,
}

impl SiteCrawler {
    pub fn new(config: &CrawlerConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            extractor: EmailExtractor::new(),
        }
    }

    /// Infallible by contract: a site that cannot be reached yields an empty
    /// result so one dead lead never aborts a batch. Failures on the contact
    /// sub-page keep whatever the homepage already produced.
    pub async fn scrape_contacts(&self, url: &str) -> ContactResult {
        let url = normalize_url(url);
        let mut result = ContactResult::default();

        let body = match self.fetch_page(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not scrape {}: {}", url, e);
                return result;
            }
        };

        let (text, contact_link) = parse_homepage(&body, &url);
        result.emails.extend(self.extractor.extract(&text));

        if let Some(contact_url) = contact_link {
            debug!("Following contact page {}", contact_url);
            match self.fetch_page(contact_url.as_str()).await {
                Ok(contact_body) => {
                    let contact_text = visible_text_of(&contact_body);
                    result.emails.extend(self.extractor.extract(&contact_text));
                }
                Err(e) => {
                    warn!("Could not scrape contact page {}: {}", contact_url, e);
                }
            }
        }

        debug!("Found {} emails on {}", result.emails.len(), url);
        result
    }

    async fn fetch_page(
        &self,
        url: &str,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        Ok(response.text().await?)
    }
}

/// Missing schemes default to https; some sites only answer identified,
/// well-formed requests.
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

fn parse_homepage(html: &str, base_url: &str) -> (String, Option<Url>) {
    let document = Html::parse_document(html);
    let text = visible_text(&document);
    let contact_link = find_contact_link(&document, base_url);
    (text, contact_link)
}

fn visible_text_of(html: &str) -> String {
    visible_text(&Html::parse_document(html))
}

/// Text-node content only, skipping script/style/noscript subtrees so inline
/// JS and CSS cannot contribute address-shaped false positives.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.tree.nodes() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style" | "noscript"))
        });
        if !hidden {
            text.push_str(&fragment.text);
            text.push(' ');
        }
    }
    text
}

/// First outbound link whose visible text or href mentions "contact",
/// resolved against the page it was found on.
fn find_contact_link(document: &Html, base_url: &str) -> Option<Url> {
    let link_selector = Selector::parse("a[href]").unwrap();
    let base = Url::parse(base_url).ok()?;

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let label = element.text().collect::<String>();
        if href.to_lowercase().contains("contact") || label.to_lowercase().contains("contact") {
            if let Ok(resolved) = base.join(href) {
                return Some(resolved);
            }
        }
    }

    None
}
