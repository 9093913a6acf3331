//! Same-site breadth-first crawl with bounded concurrency.

use std::collections::{BTreeMap, HashSet};

use futures::{stream, StreamExt};
use url::Url;

use crate::domain::models::{CrawlResult, CrawlSettings, FetchOutcome, PageEntry};
use crate::error::Result;
use crate::extractor::PageExtractor;
use crate::service::fetcher::PageFetcher;
use crate::service::links;

pub struct Crawler {
    fetcher: PageFetcher,
    settings: CrawlSettings,
}

impl Crawler {
    pub fn new(settings: CrawlSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            fetcher: PageFetcher::new(settings.timeout)?,
            settings,
        })
    }

    /// Breadth-first crawl from `seed`, one round per depth level.
    ///
    /// This loop is the sole owner of the visited set, the page budget and
    /// the result map; worker futures only fetch and parse. A round's next
    /// frontier is installed only after the whole round has completed, so
    /// depth boundaries are strict even though completion order within a
    /// round is not.
    pub async fn crawl(&self, seed: &Url) -> CrawlResult {
        let seed = links::trim_trailing_slash(seed);
        let mut visited: HashSet<Url> = HashSet::new();
        let mut pages: BTreeMap<Url, PageEntry> = BTreeMap::new();
        let mut frontier = vec![seed.clone()];
        let mut scheduled_total = 0usize;

        log::info!(
            "[CRAWL] Starting crawl from {} (depth {}, max {} pages, {} concurrent)",
            seed,
            self.settings.max_depth,
            self.settings.max_pages,
            self.settings.concurrency
        );

        for round in 0..=self.settings.max_depth {
            if frontier.is_empty() || scheduled_total >= self.settings.max_pages {
                break;
            }

            // Mark visited at schedule time, before any fetch is dispatched:
            // an address rediscovered later can never be fetched twice.
            let mut batch = Vec::new();
            for url in frontier.drain(..) {
                if scheduled_total >= self.settings.max_pages {
                    break;
                }
                if !visited.insert(url.clone()) {
                    continue;
                }
                scheduled_total += 1;
                batch.push(url);
            }
            if batch.is_empty() {
                break;
            }

            log::info!(
                "[CRAWL] Round {}: fetching {} pages ({} scheduled in total)",
                round,
                batch.len(),
                scheduled_total
            );

            let mut completions = stream::iter(batch)
                .map(|url| {
                    let fetcher = &self.fetcher;
                    async move {
                        let outcome = fetcher.fetch(&url).await;
                        // Parse before yielding; the DOM never crosses an
                        // await point.
                        let record = match &outcome {
                            FetchOutcome::Success { body, .. } => {
                                Some(PageExtractor::extract(body))
                            }
                            _ => None,
                        };
                        (url, outcome, record)
                    }
                })
                .buffer_unordered(self.settings.concurrency);

            let mut next_frontier: Vec<Url> = Vec::new();
            let mut queued: HashSet<Url> = HashSet::new();

            while let Some((url, outcome, record)) = completions.next().await {
                if let Some(record) = &record {
                    for anchor in &record.links {
                        let Some(href) = anchor.href.as_deref() else {
                            continue;
                        };
                        let Some(target) = links::normalize(&url, href) else {
                            continue;
                        };
                        // Site membership is anchored to the seed here, not
                        // to the page the link was found on.
                        if !links::same_site(&seed, &target) {
                            continue;
                        }
                        if visited.contains(&target) || queued.contains(&target) {
                            continue;
                        }
                        if scheduled_total + next_frontier.len() >= self.settings.max_pages {
                            break;
                        }
                        queued.insert(target.clone());
                        next_frontier.push(target);
                    }
                }
                // Keyed by the address as dispatched, not the post-redirect
                // address.
                pages.insert(url, PageEntry { outcome, record });
            }

            log::debug!(
                "[CRAWL] Round {} complete: {} pages so far, {} queued for the next round",
                round,
                pages.len(),
                next_frontier.len()
            );

            frontier = next_frontier;
        }

        log::info!("[CRAWL] Crawl complete: {} pages", pages.len());

        CrawlResult { seed, pages }
    }
}
