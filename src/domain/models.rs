//! Rich domain entities - behavior lives WITH data

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::error::{AppError, Result};

// ====== Fetching ======

/// Result of fetching one address. Transport failures are values, not
/// errors, so a single dead page never aborts a crawl round.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Final status 200; the only case where body text is kept.
    Success {
        status: u16,
        elapsed: Duration,
        final_url: Url,
        headers: BTreeMap<String, String>,
        body: String,
    },
    /// Final status other than 200 (after redirects). Body discarded.
    HttpError { status: u16, final_url: Url },
    /// Timeout, connect, DNS, TLS or body-read failure.
    TransportError { message: String },
}

impl FetchOutcome {
    /// HTTP status of the final response, if one was received at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            FetchOutcome::Success { status, .. } | FetchOutcome::HttpError { status, .. } => {
                Some(*status)
            }
            FetchOutcome::TransportError { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

// ====== Extraction ======

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnchorRef {
    pub href: Option<String>,
    pub text: String,
}

/// Everything extracted from one 200 page. Missing elements become empty
/// strings / empty collections, never `None`, so downstream checks are
/// plain emptiness tests.
#[derive(Debug, Clone, Default)]
pub struct PageRecord {
    pub title: String,
    pub meta_description: String,
    pub meta_robots: String,
    pub canonical: String,
    /// Literal `property` attribute -> content, last occurrence wins.
    pub open_graph: BTreeMap<String, String>,
    /// Literal `name` attribute -> content, last occurrence wins.
    pub twitter: BTreeMap<String, String>,
    pub h1s: Vec<String>,
    pub h2s: Vec<String>,
    pub images: Vec<ImageRef>,
    pub links: Vec<AnchorRef>,
    pub structured_data: Vec<serde_json::Value>,
    /// Lowercase ASCII-letter runs of length >= 2, stopwords still included.
    pub words: Vec<String>,
    pub word_count: usize,
}

// ====== Crawling ======

#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Link hops from the seed; 0 crawls the seed page only.
    pub max_depth: usize,
    /// Upper bound on scheduled fetches across all rounds.
    pub max_pages: usize,
    /// Concurrent fetches within one round.
    pub concurrency: usize,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            max_depth: 1,
            max_pages: 200,
            concurrency: 8,
            timeout: Duration::from_secs(15),
        }
    }
}

impl CrawlSettings {
    /// Reject out-of-range settings before any crawl work begins.
    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(AppError::invalid_argument("max-pages must be at least 1"));
        }
        if self.concurrency == 0 {
            return Err(AppError::invalid_argument("concurrency must be at least 1"));
        }
        if self.timeout.is_zero() {
            return Err(AppError::invalid_argument("timeout must be at least 1 second"));
        }
        Ok(())
    }
}

/// One crawled address: how the fetch went, plus the extracted record for
/// 200 responses.
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub outcome: FetchOutcome,
    pub record: Option<PageRecord>,
}

/// Finished crawl, read-only once returned. Keys are the addresses as
/// dispatched (pre-redirect); every key was fetched exactly once.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// Trailing-slash trimmed seed, the site-membership anchor.
    pub seed: Url,
    pub pages: BTreeMap<Url, PageEntry>,
}

// ====== Reporting ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Priority {
    P0,
    P1,
    P2,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItem {
    pub issue: String,
    /// Absent for site-wide entries (duplicate titles/descriptions).
    pub url: Option<String>,
    pub priority: Priority,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseCandidate {
    pub phrase: String,
    pub count: usize,
    pub unigram_overlap: usize,
    /// `count + unigram_overlap`.
    pub score: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    pub href: String,
    pub status: u16,
}

/// Per-page slice of the report.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageSummary {
    Ok(PageStats),
    HttpError { status: u16 },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct PageStats {
    pub title: String,
    pub title_length: usize,
    pub meta_description: String,
    pub meta_description_length: usize,
    pub h1s: Vec<String>,
    pub word_count: usize,
    pub image_count: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub canonical: String,
    pub robots: String,
    pub elapsed_ms: u64,
}

/// Site-wide audit findings. Plain maps and sequences throughout; the whole
/// report round-trips through JSON losslessly.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub total_pages: usize,
    pub pages_missing_title: Vec<String>,
    pub pages_missing_meta_description: Vec<String>,
    pub pages_missing_h1: Vec<String>,
    /// Pages with fewer than 300 words.
    pub thin_pages: Vec<String>,
    /// Page -> srcs of images with empty or absent alt text.
    pub images_missing_alt: BTreeMap<String, Vec<String>>,
    /// Page -> same-site link targets that answered with a non-200 status.
    pub broken_links: BTreeMap<String, Vec<BrokenLink>>,
    /// Exact title -> occurrence count, counts > 1 only.
    pub duplicate_titles: BTreeMap<String, usize>,
    pub duplicate_meta_descriptions: BTreeMap<String, usize>,
    pub top_words: Vec<WordCount>,
    pub candidate_phrases: Vec<PhraseCandidate>,
    pub checklist: Vec<ChecklistItem>,
    pub recommendations: Vec<String>,
    pub per_page: BTreeMap<String, PageSummary>,
}
