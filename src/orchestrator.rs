use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::models::{Lead, NO_EMAILS_FOUND, UNKNOWN_FIELD};
use crate::places::{PlacesClient, PlaceSummary, PlacesError};
use crate::web_crawler::{ContactResult, SiteCrawler};

/// One step of a running batch: a human-readable status line plus everything
/// assembled so far, so a consumer can render progress incrementally.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub status: String,
    pub leads: Vec<Lead>,
}

/// Pull-driven lead pipeline: one places query up front, then one place per
/// `next` call. Nothing is fetched unless the consumer keeps pulling, and a
/// fresh batch is required to re-run a query.
pub struct LeadBatch {
    places: Arc<dyn PlacesClient>,
    crawler: SiteCrawler,
    pending: VecDeque<PlaceSummary>,
    total_candidates: usize,
    leads: Vec<Lead>,
    remaining: usize,
    crawl_delay: Duration,
}

impl LeadBatch {
    /// Issues the places text search. An API failure here is fatal for the
    /// whole batch: the caller gets the error and zero progress.
    pub async fn start(
        places: Arc<dyn PlacesClient>,
        crawler: SiteCrawler,
        query: &str,
        max_results: usize,
        crawl_delay: Duration,
    ) -> Result<Self, PlacesError> {
        let candidates = places.text_search(query).await?;
        info!(
            "Places search for {:?} returned {} candidates",
            query,
            candidates.len()
        );

        Ok(Self {
            places,
            crawler,
            total_candidates: candidates.len(),
            pending: candidates.into(),
            leads: Vec::new(),
            remaining: max_results,
            crawl_delay,
        })
    }

    /// Pulls the next place through details lookup and site crawl. `Ok(None)`
    /// once `max_results` leads were emitted or the candidates ran out. A
    /// places-level error is fatal and fuses the batch; a failed site crawl
    /// is contained by the crawler and the lead still appears, marked
    /// "None Found".
    pub async fn next(&mut self) -> Result<Option<BatchProgress>, PlacesError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let Some(candidate) = self.pending.pop_front() else {
            return Ok(None);
        };

        let details = match self.places.place_details(&candidate.place_id).await {
            Ok(details) => details,
            Err(e) => {
                self.pending.clear();
                self.remaining = 0;
                return Err(e);
            }
        };

        let contacts = match &details.website {
            Some(website) => {
                // Politeness pause so consecutive sites are not hammered.
                tokio::time::sleep(self.crawl_delay).await;
                self.crawler.scrape_contacts(website).await
            }
            None => {
                debug!("No website listed for {}, skipping crawl", candidate.name);
                ContactResult::default()
            }
        };

        let business_name = details.name.unwrap_or(candidate.name);
        self.leads.push(Lead {
            place_id: candidate.place_id,
            business_name: business_name.clone(),
            address: details
                .formatted_address
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            phone: details.formatted_phone_number,
            website: details.website,
            found_emails: contacts
                .joined()
                .unwrap_or_else(|| NO_EMAILS_FOUND.to_string()),
            lead_score: None,
        });
        self.remaining -= 1;

        let status = format!(
            "Found {}/{}: {}",
            self.leads.len(),
            self.total_candidates,
            business_name
        );
        Ok(Some(BatchProgress {
            status,
            leads: self.leads.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlerConfig;
    use crate::places::PlaceDetails;
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use std::collections::HashMap;

    struct MockPlaces {
        search: Vec<PlaceSummary>,
        deny_search: bool,
        details: HashMap<String, PlaceDetails>,
        fail_details_for: Option<String>,
    }

    impl MockPlaces {
        fn new(search: Vec<(&str, &str)>) -> Self {
            Self {
                search: search
                    .into_iter()
                    .map(|(id, name)| PlaceSummary {
                        place_id: id.to_string(),
                        name: name.to_string(),
                    })
                    .collect(),
                deny_search: false,
                details: HashMap::new(),
                fail_details_for: None,
            }
        }

        fn denied() -> Self {
            Self {
                deny_search: true,
                ..Self::new(Vec::new())
            }
        }

        fn with_details(mut self, id: &str, website: Option<&str>) -> Self {
            self.details.insert(
                id.to_string(),
                PlaceDetails {
                    name: Some(format!("{} Inc", id)),
                    formatted_address: Some("1 Main St".to_string()),
                    formatted_phone_number: Some("(415) 555-0100".to_string()),
                    website: website.map(str::to_string),
                },
            );
            self
        }
    }

    #[async_trait]
    impl PlacesClient for MockPlaces {
        async fn text_search(&self, _query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
            if self.deny_search {
                return Err(PlacesError::Api {
                    status: "REQUEST_DENIED".to_string(),
                    message: "The provided API key is invalid.".to_string(),
                });
            }
            Ok(self.search.clone())
        }

        async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
            if self.fail_details_for.as_deref() == Some(place_id) {
                return Err(PlacesError::Api {
                    status: "OVER_QUERY_LIMIT".to_string(),
                    message: "quota exceeded".to_string(),
                });
            }
            Ok(self.details.get(place_id).cloned().unwrap_or_default())
        }
    }

    fn test_crawler() -> SiteCrawler {
        SiteCrawler::new(&CrawlerConfig {
            timeout_seconds: 5,
            user_agent: "leadgenius-test/1.0".to_string(),
            rate_limit_delay_ms: 0,
        })
    }

    async fn drain(batch: &mut LeadBatch) -> (Vec<BatchProgress>, Option<PlacesError>) {
        let mut progress = Vec::new();
        loop {
            match batch.next().await {
                Ok(Some(step)) => progress.push(step),
                Ok(None) => return (progress, None),
                Err(e) => return (progress, Some(e)),
            }
        }
    }

    #[tokio::test]
    async fn never_emits_more_than_max_results() {
        let places = MockPlaces::new(vec![
            ("p1", "One"),
            ("p2", "Two"),
            ("p3", "Three"),
            ("p4", "Four"),
            ("p5", "Five"),
        ]);
        let mut batch = LeadBatch::start(
            Arc::new(places),
            test_crawler(),
            "coffee shops",
            2,
            Duration::ZERO,
        )
        .await
        .unwrap();

        let (progress, err) = drain(&mut batch).await;
        assert!(err.is_none());
        assert_eq!(progress.len(), 2);
        assert_eq!(progress.last().unwrap().leads.len(), 2);
    }

    #[tokio::test]
    async fn search_failure_is_fatal_with_zero_progress() {
        let result = LeadBatch::start(
            Arc::new(MockPlaces::denied()),
            test_crawler(),
            "anything",
            10,
            Duration::ZERO,
        )
        .await;

        match result {
            Err(PlacesError::Api { status, .. }) => assert_eq!(status, "REQUEST_DENIED"),
            other => panic!("expected fatal error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn details_failure_fuses_the_batch() {
        let mut places =
            MockPlaces::new(vec![("p1", "One"), ("p2", "Two")]).with_details("p1", None);
        places.fail_details_for = Some("p2".to_string());

        let mut batch = LeadBatch::start(
            Arc::new(places),
            test_crawler(),
            "query",
            10,
            Duration::ZERO,
        )
        .await
        .unwrap();

        let (progress, err) = drain(&mut batch).await;
        assert_eq!(progress.len(), 1);
        assert!(matches!(err, Some(PlacesError::Api { .. })));
        // Fused: no further work after a fatal error.
        assert!(batch.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn end_to_end_three_places_no_lead_is_dropped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body(
                r#"<html><body>
                    <a href="/contact">Contact Us</a>
                </body></html>"#,
            );
        });
        server.mock(|when, then| {
            when.method(GET).path("/contact");
            then.status(200)
                .body("<html><body>Email hello@goodsite.example</body></html>");
        });

        let places = MockPlaces::new(vec![
            ("no-web", "No Website LLC"),
            ("dead", "Dead Site Co"),
            ("good", "Good Site Inc"),
        ])
        .with_details("no-web", None)
        // Connection refused stands in for an unreachable/timing-out site.
        .with_details("dead", Some("http://127.0.0.1:9"))
        .with_details("good", Some(&server.base_url()));

        let mut batch = LeadBatch::start(
            Arc::new(places),
            test_crawler(),
            "query",
            10,
            Duration::ZERO,
        )
        .await
        .unwrap();

        let (progress, err) = drain(&mut batch).await;
        assert!(err.is_none());
        assert_eq!(progress.len(), 3);

        let leads = &progress.last().unwrap().leads;
        assert_eq!(leads.len(), 3);
        assert_eq!(leads[0].found_emails, NO_EMAILS_FOUND);
        assert_eq!(leads[1].found_emails, NO_EMAILS_FOUND);
        assert_eq!(leads[2].found_emails, "hello@goodsite.example");
        assert!(leads.iter().all(|l| l.lead_score.is_none()));
        assert_eq!(progress[2].status, "Found 3/3: good Inc");
    }
}
