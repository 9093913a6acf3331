//! Cross-page analysis over a finished crawl.
//!
//! Every check is idempotent and reads only the immutable crawl result, so
//! checks can be reordered or re-run without changing the report.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::models::{
    AuditReport, BrokenLink, ChecklistItem, CrawlResult, FetchOutcome, PageStats, PageSummary,
    PhraseCandidate, Priority, WordCount,
};
use crate::service::{links, text};

/// Pages under this many words are flagged as thin.
const THIN_PAGE_WORDS: usize = 300;
/// Site-wide word frequency table size.
const TOP_WORD_COUNT: usize = 80;
/// Candidate phrase table size.
const TOP_PHRASE_COUNT: usize = 40;
/// Unigram pool consulted for phrase overlap scoring.
const UNIGRAM_POOL_SIZE: usize = 120;
/// Phrases longer than this many words are discarded.
const MAX_PHRASE_WORDS: usize = 5;

const RECOMMENDATIONS: [&str; 8] = [
    "Ensure every important page has a unique, descriptive title (50-60 chars) and meta description (120-160 chars).",
    "Add or fix canonical tags where pages have duplicates or parameters.",
    "Fix broken internal links and reduce redirects where possible.",
    "Add meaningful H1 headings to topic pages and use H2/H3 to structure content.",
    "Add alt text to images and descriptive filenames for images used for content.",
    "Consolidate or expand thin pages (<300 words). Consider merging near-duplicate or low-value pages.",
    "Add structured data (JSON-LD) for products, articles, breadcrumbs, and organization where applicable.",
    "Improve page speed (defer to Lighthouse for detailed performance recommendations).",
];

pub struct Analyzer;

impl Analyzer {
    pub fn analyze(crawl: &CrawlResult) -> AuditReport {
        log::info!("[ANALYZE] Analyzing {} pages", crawl.pages.len());

        let mut pages_missing_title = Vec::new();
        let mut pages_missing_meta_description = Vec::new();
        let mut pages_missing_h1 = Vec::new();
        let mut thin_pages = Vec::new();
        let mut images_missing_alt: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut broken_links: BTreeMap<String, Vec<BrokenLink>> = BTreeMap::new();
        let mut per_page: BTreeMap<String, PageSummary> = BTreeMap::new();

        let mut title_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut description_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut word_counts: HashMap<String, usize> = HashMap::new();
        let mut phrase_counts: HashMap<String, usize> = HashMap::new();

        for (url, entry) in &crawl.pages {
            let key = url.to_string();

            let (record, elapsed) = match (&entry.outcome, &entry.record) {
                (FetchOutcome::TransportError { message }, _) => {
                    per_page.insert(key, PageSummary::Failed { error: message.clone() });
                    continue;
                }
                (FetchOutcome::HttpError { status, .. }, _) => {
                    per_page.insert(key, PageSummary::HttpError { status: *status });
                    continue;
                }
                (FetchOutcome::Success { elapsed, .. }, Some(record)) => (record, *elapsed),
                (FetchOutcome::Success { .. }, None) => continue,
            };

            if record.title.is_empty() {
                pages_missing_title.push(key.clone());
            }
            if record.meta_description.is_empty() {
                pages_missing_meta_description.push(key.clone());
            }
            if record.h1s.is_empty() {
                pages_missing_h1.push(key.clone());
            }
            if record.word_count < THIN_PAGE_WORDS {
                thin_pages.push(key.clone());
            }

            let missing_alt: Vec<String> = record
                .images
                .iter()
                .filter(|img| img.alt.is_empty())
                .map(|img| img.src.clone())
                .collect();
            if !missing_alt.is_empty() {
                images_missing_alt.insert(key.clone(), missing_alt);
            }

            // Internal means same site as the page the link sits on, not
            // the crawl seed. A target counts as broken only when it was
            // crawled and answered with a non-200 status; transport
            // failures stay unknown rather than broken.
            let mut internal_links = 0usize;
            let mut external_links = 0usize;
            let mut broken = Vec::new();
            for anchor in &record.links {
                let Some(href) = anchor.href.as_deref() else {
                    continue;
                };
                let Some(target) = links::normalize(url, href) else {
                    continue;
                };
                if links::same_site(url, &target) {
                    internal_links += 1;
                    if let Some(target_entry) = crawl.pages.get(&target) {
                        if let FetchOutcome::HttpError { status, .. } = &target_entry.outcome {
                            broken.push(BrokenLink {
                                href: target.to_string(),
                                status: *status,
                            });
                        }
                    }
                } else {
                    external_links += 1;
                }
            }
            if !broken.is_empty() {
                broken_links.insert(key.clone(), broken);
            }

            if !record.title.is_empty() {
                *title_counts.entry(record.title.clone()).or_insert(0) += 1;
            }
            if !record.meta_description.is_empty() {
                *description_counts
                    .entry(record.meta_description.clone())
                    .or_insert(0) += 1;
            }

            for word in &record.words {
                if !text::is_stopword(word) {
                    *word_counts.entry(word.clone()).or_insert(0) += 1;
                }
            }

            // Candidate phrases come from the title and each H1 separately;
            // a run never spans two headings.
            for source in std::iter::once(record.title.as_str())
                .chain(record.h1s.iter().map(String::as_str))
            {
                for run in text::phrase_runs(source) {
                    let words: Vec<String> = text::tokenize_words(&run)
                        .into_iter()
                        .filter(|w| !text::is_stopword(w))
                        .collect();
                    if (1..=MAX_PHRASE_WORDS).contains(&words.len()) {
                        *phrase_counts.entry(words.join(" ")).or_insert(0) += 1;
                    }
                }
            }

            per_page.insert(
                key,
                PageSummary::Ok(PageStats {
                    title: record.title.clone(),
                    title_length: record.title.chars().count(),
                    meta_description: record.meta_description.clone(),
                    meta_description_length: record.meta_description.chars().count(),
                    h1s: record.h1s.clone(),
                    word_count: record.word_count,
                    image_count: record.images.len(),
                    internal_links,
                    external_links,
                    canonical: record.canonical.clone(),
                    robots: record.meta_robots.clone(),
                    elapsed_ms: elapsed.as_millis() as u64,
                }),
            );
        }

        let duplicate_titles: BTreeMap<String, usize> = title_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .collect();
        let duplicate_meta_descriptions: BTreeMap<String, usize> = description_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .collect();

        let ranked_words = Self::rank_descending(word_counts);
        let unigram_pool: HashSet<&str> = ranked_words
            .iter()
            .take(UNIGRAM_POOL_SIZE)
            .map(|(word, _)| word.as_str())
            .collect();
        let top_words: Vec<WordCount> = ranked_words
            .iter()
            .take(TOP_WORD_COUNT)
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();

        let candidate_phrases = Self::score_phrases(phrase_counts, &unigram_pool);

        let checklist = Self::build_checklist(
            &pages_missing_title,
            &pages_missing_meta_description,
            &pages_missing_h1,
            &thin_pages,
            &images_missing_alt,
            &broken_links,
            &duplicate_titles,
            &duplicate_meta_descriptions,
        );

        log::debug!(
            "[ANALYZE] {} checklist items, {} duplicate titles, {} candidate phrases",
            checklist.len(),
            duplicate_titles.len(),
            candidate_phrases.len()
        );

        AuditReport {
            total_pages: crawl.pages.len(),
            pages_missing_title,
            pages_missing_meta_description,
            pages_missing_h1,
            thin_pages,
            images_missing_alt,
            broken_links,
            duplicate_titles,
            duplicate_meta_descriptions,
            top_words,
            candidate_phrases,
            checklist,
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            per_page,
        }
    }

    // Count descending, then alphabetical, so equal counts rank the same way
    // on every run.
    fn rank_descending(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    fn score_phrases(
        phrase_counts: HashMap<String, usize>,
        unigram_pool: &HashSet<&str>,
    ) -> Vec<PhraseCandidate> {
        let mut ranked = Self::rank_descending(phrase_counts);
        ranked.truncate(TOP_PHRASE_COUNT);

        let mut candidates: Vec<PhraseCandidate> = ranked
            .into_iter()
            .map(|(phrase, count)| {
                let unigram_overlap = phrase
                    .split(' ')
                    .filter(|word| unigram_pool.contains(word))
                    .count();
                PhraseCandidate {
                    score: count + unigram_overlap,
                    phrase,
                    count,
                    unigram_overlap,
                }
            })
            .collect();

        // Two keys, both explicit: score first, raw count as tiebreaker.
        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.count.cmp(&a.count)));
        candidates.truncate(TOP_PHRASE_COUNT);
        candidates
    }

    #[allow(clippy::too_many_arguments)]
    fn build_checklist(
        pages_missing_title: &[String],
        pages_missing_meta_description: &[String],
        pages_missing_h1: &[String],
        thin_pages: &[String],
        images_missing_alt: &BTreeMap<String, Vec<String>>,
        broken_links: &BTreeMap<String, Vec<BrokenLink>>,
        duplicate_titles: &BTreeMap<String, usize>,
        duplicate_meta_descriptions: &BTreeMap<String, usize>,
    ) -> Vec<ChecklistItem> {
        let mut checklist = Vec::new();

        for url in pages_missing_title {
            checklist.push(ChecklistItem {
                issue: "Missing title".to_string(),
                url: Some(url.clone()),
                priority: Priority::P0,
                rationale: "Title is critical for ranking and CTR".to_string(),
            });
        }
        for url in pages_missing_meta_description {
            checklist.push(ChecklistItem {
                issue: "Missing meta description".to_string(),
                url: Some(url.clone()),
                priority: Priority::P1,
                rationale: "Improve CTR in SERPs".to_string(),
            });
        }
        for url in pages_missing_h1 {
            checklist.push(ChecklistItem {
                issue: "Missing H1".to_string(),
                url: Some(url.clone()),
                priority: Priority::P1,
                rationale: "H1 signals page topic".to_string(),
            });
        }
        for url in thin_pages {
            checklist.push(ChecklistItem {
                issue: "Thin content (<300 words)".to_string(),
                url: Some(url.clone()),
                priority: Priority::P1,
                rationale: "Create more useful, in-depth content".to_string(),
            });
        }
        for (url, images) in images_missing_alt {
            checklist.push(ChecklistItem {
                issue: format!("{} images missing alt", images.len()),
                url: Some(url.clone()),
                priority: Priority::P2,
                rationale: "Accessibility and image search".to_string(),
            });
        }
        for (url, broken) in broken_links {
            checklist.push(ChecklistItem {
                issue: format!("Broken links ({})", broken.len()),
                url: Some(url.clone()),
                priority: Priority::P1,
                rationale: "Fix or remove broken links".to_string(),
            });
        }
        if !duplicate_titles.is_empty() {
            checklist.push(ChecklistItem {
                issue: format!("{} duplicate titles", duplicate_titles.len()),
                url: None,
                priority: Priority::P2,
                rationale: "Unique titles improve clarity".to_string(),
            });
        }
        if !duplicate_meta_descriptions.is_empty() {
            checklist.push(ChecklistItem {
                issue: format!(
                    "{} duplicate meta descriptions",
                    duplicate_meta_descriptions.len()
                ),
                url: None,
                priority: Priority::P2,
                rationale: "Unique meta descriptions improve SERP snippets".to_string(),
            });
        }

        checklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AnchorRef, CrawlResult, ImageRef, PageEntry, PageRecord};
    use std::collections::BTreeMap;
    use std::time::Duration;
    use url::Url;

    fn ok_entry(url: &str, record: PageRecord) -> (Url, PageEntry) {
        let url = Url::parse(url).unwrap();
        let entry = PageEntry {
            outcome: FetchOutcome::Success {
                status: 200,
                elapsed: Duration::from_millis(7),
                final_url: url.clone(),
                headers: BTreeMap::new(),
                body: String::new(),
            },
            record: Some(record),
        };
        (url, entry)
    }

    fn http_entry(url: &str, status: u16) -> (Url, PageEntry) {
        let url = Url::parse(url).unwrap();
        let entry = PageEntry {
            outcome: FetchOutcome::HttpError {
                status,
                final_url: url.clone(),
            },
            record: None,
        };
        (url, entry)
    }

    fn failed_entry(url: &str, message: &str) -> (Url, PageEntry) {
        let url = Url::parse(url).unwrap();
        let entry = PageEntry {
            outcome: FetchOutcome::TransportError {
                message: message.to_string(),
            },
            record: None,
        };
        (url, entry)
    }

    fn crawl_of(entries: Vec<(Url, PageEntry)>) -> CrawlResult {
        CrawlResult {
            seed: Url::parse("http://example.com").unwrap(),
            pages: entries.into_iter().collect(),
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn anchor(href: &str) -> AnchorRef {
        AnchorRef {
            href: Some(href.to_string()),
            text: String::new(),
        }
    }

    #[test]
    fn test_missing_field_detection() {
        let complete = PageRecord {
            title: "Complete page".into(),
            meta_description: "Described".into(),
            h1s: vec!["Heading".into()],
            word_count: 400,
            ..PageRecord::default()
        };
        let bare = PageRecord {
            word_count: 250,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/complete", complete),
            ok_entry("http://example.com/bare", bare),
        ]);

        let report = Analyzer::analyze(&crawl);
        let bare_url = "http://example.com/bare".to_string();
        assert_eq!(report.pages_missing_title, vec![bare_url.clone()]);
        assert_eq!(report.pages_missing_meta_description, vec![bare_url.clone()]);
        assert_eq!(report.pages_missing_h1, vec![bare_url.clone()]);
        assert_eq!(report.thin_pages, vec![bare_url]);
    }

    #[test]
    fn test_thin_page_boundary() {
        let at_threshold = PageRecord {
            title: "t".into(),
            word_count: 300,
            ..PageRecord::default()
        };
        let below = PageRecord {
            title: "t2".into(),
            word_count: 299,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/at", at_threshold),
            ok_entry("http://example.com/below", below),
        ]);

        let report = Analyzer::analyze(&crawl);
        assert_eq!(report.thin_pages, vec!["http://example.com/below".to_string()]);
    }

    #[test]
    fn test_alt_gap_treats_absent_and_empty_alike() {
        let record = PageRecord {
            images: vec![
                ImageRef { src: "/a.png".into(), alt: "".into() },
                ImageRef { src: "/b.png".into(), alt: "".into() },
                ImageRef { src: "/c.png".into(), alt: "Logo".into() },
            ],
            word_count: 400,
            ..PageRecord::default()
        };
        let clean = PageRecord {
            images: vec![ImageRef { src: "/d.png".into(), alt: "Team".into() }],
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/gaps", record),
            ok_entry("http://example.com/clean", clean),
        ]);

        let report = Analyzer::analyze(&crawl);
        assert_eq!(
            report.images_missing_alt.get("http://example.com/gaps"),
            Some(&vec!["/a.png".to_string(), "/b.png".to_string()])
        );
        assert!(!report.images_missing_alt.contains_key("http://example.com/clean"));
    }

    #[test]
    fn test_duplicates_group_on_exact_match_only() {
        let make = |title: &str, desc: &str| PageRecord {
            title: title.into(),
            meta_description: desc.into(),
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/1", make("Home", "Welcome to Acme")),
            ok_entry("http://example.com/2", make("Home", "Welcome to Acme")),
            ok_entry("http://example.com/3", make("Home ", "welcome to acme")),
            ok_entry("http://example.com/4", make("", "")),
            ok_entry("http://example.com/5", make("", "")),
        ]);

        let report = Analyzer::analyze(&crawl);
        assert_eq!(report.duplicate_titles.get("Home"), Some(&2));
        assert!(!report.duplicate_titles.contains_key("Home "));
        // Empty values never form a duplicate group.
        assert!(!report.duplicate_titles.contains_key(""));
        assert_eq!(report.duplicate_meta_descriptions.get("Welcome to Acme"), Some(&2));
        assert_eq!(report.duplicate_meta_descriptions.len(), 1);
    }

    #[test]
    fn test_broken_links_keyed_by_source_page() {
        let linker = PageRecord {
            title: "Links".into(),
            links: vec![anchor("/missing"), anchor("/fine"), anchor("/unreachable")],
            word_count: 400,
            ..PageRecord::default()
        };
        let fine = PageRecord {
            title: "Fine".into(),
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/", linker),
            ok_entry("http://example.com/fine", fine),
            http_entry("http://example.com/missing", 404),
            failed_entry("http://example.com/unreachable", "connect timed out"),
        ]);

        let report = Analyzer::analyze(&crawl);
        let broken = report.broken_links.get("http://example.com/").unwrap();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].href, "http://example.com/missing");
        assert_eq!(broken[0].status, 404);
        // Transport failures are not reported as broken links.
        assert!(!broken.iter().any(|b| b.href.contains("unreachable")));
        assert!(!report.broken_links.contains_key("http://example.com/fine"));
    }

    #[test]
    fn test_internal_links_anchored_to_own_page_not_seed() {
        // Page on example.com links out to other.org; the target exists in
        // the result map as a 404 but is another site, so it is external
        // and never flagged broken.
        let linker = PageRecord {
            title: "Links".into(),
            links: vec![anchor("http://other.org/gone"), anchor("/local")],
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/", linker),
            http_entry("http://other.org/gone", 404),
            ok_entry(
                "http://example.com/local",
                PageRecord { title: "Local".into(), word_count: 400, ..PageRecord::default() },
            ),
        ]);

        let report = Analyzer::analyze(&crawl);
        assert!(report.broken_links.is_empty());
        match report.per_page.get("http://example.com/") {
            Some(PageSummary::Ok(stats)) => {
                assert_eq!(stats.internal_links, 1);
                assert_eq!(stats.external_links, 1);
            }
            other => panic!("expected Ok stats, got {:?}", other),
        }
    }

    #[test]
    fn test_word_frequency_ranking() {
        let record = PageRecord {
            title: "t".into(),
            words: words(&["fast", "fast", "slow", "the", "the", "the"]),
            word_count: 6,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![ok_entry("http://example.com/", record)]);

        let report = Analyzer::analyze(&crawl);
        assert_eq!(report.top_words[0].word, "fast");
        assert_eq!(report.top_words[0].count, 2);
        assert_eq!(report.top_words[1].word, "slow");
        assert_eq!(report.top_words[1].count, 1);
        // Stopwords never reach the frequency table.
        assert!(!report.top_words.iter().any(|w| w.word == "the"));
    }

    #[test]
    fn test_phrase_scoring_counts_plus_overlap() {
        let make = |url: &str| {
            ok_entry(
                url,
                PageRecord {
                    title: "Best Running Shoes".into(),
                    words: words(&["running", "shoes", "running", "shoes"]),
                    word_count: 4,
                    ..PageRecord::default()
                },
            )
        };
        let crawl = crawl_of(vec![make("http://example.com/a"), make("http://example.com/b")]);

        let report = Analyzer::analyze(&crawl);
        let top = &report.candidate_phrases[0];
        assert_eq!(top.phrase, "best running shoes");
        assert_eq!(top.count, 2);
        // "running" and "shoes" are in the unigram pool, "best" is not.
        assert_eq!(top.unigram_overlap, 2);
        assert_eq!(top.score, 4);
    }

    #[test]
    fn test_phrases_come_from_title_and_each_h1_separately() {
        let record = PageRecord {
            title: "Garden Tools".into(),
            h1s: vec!["Watering Cans".into(), "".into()],
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![ok_entry("http://example.com/", record)]);

        let report = Analyzer::analyze(&crawl);
        let phrases: Vec<&str> = report
            .candidate_phrases
            .iter()
            .map(|p| p.phrase.as_str())
            .collect();
        assert!(phrases.contains(&"garden tools"));
        assert!(phrases.contains(&"watering cans"));
        // No run spans the title/H1 boundary.
        assert!(!phrases.iter().any(|p| p.contains("tools watering")));
    }

    #[test]
    fn test_checklist_category_order_and_strings() {
        let untitled = PageRecord {
            meta_description: "d".into(),
            h1s: vec!["h".into()],
            word_count: 100,
            images: vec![ImageRef { src: "/i.png".into(), alt: "".into() }],
            links: vec![anchor("/dead")],
            ..PageRecord::default()
        };
        let twin = |desc: &str| PageRecord {
            title: "Twin".into(),
            meta_description: desc.into(),
            h1s: vec!["h".into()],
            word_count: 400,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/", untitled),
            ok_entry("http://example.com/t1", twin("same")),
            ok_entry("http://example.com/t2", twin("same")),
            http_entry("http://example.com/dead", 500),
        ]);

        let report = Analyzer::analyze(&crawl);
        let issues: Vec<&str> = report.checklist.iter().map(|i| i.issue.as_str()).collect();
        assert_eq!(
            issues,
            vec![
                "Missing title",
                "Thin content (<300 words)",
                "1 images missing alt",
                "Broken links (1)",
                "1 duplicate titles",
                "1 duplicate meta descriptions",
            ]
        );
        assert_eq!(report.checklist[0].priority, Priority::P0);
        assert_eq!(report.checklist[0].rationale, "Title is critical for ranking and CTR");
        assert_eq!(report.checklist[0].url.as_deref(), Some("http://example.com/"));
        // Site-wide duplicate entries carry no URL.
        assert_eq!(report.checklist[4].url, None);
        assert_eq!(report.checklist[4].priority, Priority::P2);
    }

    #[test]
    fn test_per_page_summaries_cover_all_outcomes() {
        let ok = PageRecord {
            title: "Fine page".into(),
            meta_description: "Desc".into(),
            h1s: vec!["H".into()],
            word_count: 350,
            canonical: "http://example.com/fine".into(),
            meta_robots: "index, follow".into(),
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![
            ok_entry("http://example.com/fine", ok),
            http_entry("http://example.com/gone", 410),
            failed_entry("http://example.com/dark", "dns failure"),
        ]);

        let report = Analyzer::analyze(&crawl);
        assert_eq!(report.total_pages, 3);

        match report.per_page.get("http://example.com/fine") {
            Some(PageSummary::Ok(stats)) => {
                assert_eq!(stats.title, "Fine page");
                assert_eq!(stats.title_length, 9);
                assert_eq!(stats.meta_description_length, 4);
                assert_eq!(stats.word_count, 350);
                assert_eq!(stats.canonical, "http://example.com/fine");
                assert_eq!(stats.robots, "index, follow");
                assert_eq!(stats.elapsed_ms, 7);
            }
            other => panic!("expected Ok stats, got {:?}", other),
        }
        assert!(matches!(
            report.per_page.get("http://example.com/gone"),
            Some(PageSummary::HttpError { status: 410 })
        ));
        assert!(matches!(
            report.per_page.get("http://example.com/dark"),
            Some(PageSummary::Failed { .. })
        ));

        // Failed pages never join content checks.
        assert!(report.pages_missing_title.is_empty());
        assert!(report.pages_missing_h1.is_empty());
    }

    #[test]
    fn test_empty_crawl_produces_empty_report() {
        let report = Analyzer::analyze(&crawl_of(vec![]));
        assert_eq!(report.total_pages, 0);
        assert!(report.checklist.is_empty());
        assert!(report.top_words.is_empty());
        assert!(report.candidate_phrases.is_empty());
        assert_eq!(report.recommendations.len(), 8);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let record = PageRecord {
            title: "Home".into(),
            words: words(&["acme", "tools"]),
            word_count: 2,
            ..PageRecord::default()
        };
        let crawl = crawl_of(vec![ok_entry("http://example.com/", record)]);
        let report = Analyzer::analyze(&crawl);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["per_page"]["http://example.com/"]["title"], "Home");
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 8);
    }
}
