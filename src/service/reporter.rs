//! Console summary and JSON export for a finished audit.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::domain::models::AuditReport;
use crate::error::Result;

/// Wire shape of the `--output` file.
#[derive(Serialize)]
struct SavedReport<'a> {
    start_url: &'a str,
    generated_at: DateTime<Utc>,
    report: &'a AuditReport,
}

/// Prints the human-readable audit summary to stdout.
pub fn print_summary(seed: &Url, report: &AuditReport) {
    println!();
    println!("SEO Audit Summary for: {seed}");
    println!("Total pages crawled: {}", report.total_pages);

    println!();
    println!("High priority issues:");
    for item in report.checklist.iter().take(10) {
        println!(
            "- {} {} {} - {}",
            item.priority.as_str(),
            item.url.as_deref().unwrap_or(""),
            item.issue,
            item.rationale
        );
    }

    println!();
    println!("Top candidate keywords (phrases):");
    for phrase in report.candidate_phrases.iter().take(20) {
        println!(
            "- {} (count={}, score={})",
            phrase.phrase, phrase.count, phrase.score
        );
    }

    println!();
    println!("Top words across site:");
    for word in report.top_words.iter().take(30) {
        println!("- {} {}", word.word, word.count);
    }

    println!();
    println!("Pages missing titles: {}", report.pages_missing_title.len());
    for url in report.pages_missing_title.iter().take(10) {
        println!("  - {url}");
    }

    println!();
    println!(
        "Pages with thin content (<300 words): {}",
        report.thin_pages.len()
    );
    for url in report.thin_pages.iter().take(10) {
        println!("  - {url}");
    }

    println!();
    println!("Images missing alt (sample):");
    for (url, images) in report.images_missing_alt.iter().take(8) {
        println!("  - {} -> {} images missing alt", url, images.len());
    }

    println!();
    println!("Broken links (sample):");
    for (url, broken) in report.broken_links.iter().take(8) {
        let rendered: Vec<String> = broken
            .iter()
            .map(|link| format!("{} ({})", link.href, link.status))
            .collect();
        println!("  - {} -> {}", url, rendered.join(", "));
    }

    println!();
    println!("Quick recommendations:");
    for recommendation in &report.recommendations {
        println!("- {recommendation}");
    }
}

/// Writes the full report as pretty-printed JSON.
pub fn save_json(path: &Path, seed: &Url, report: &AuditReport) -> Result<()> {
    let saved = SavedReport {
        start_url: seed.as_str(),
        generated_at: Utc::now(),
        report,
    };
    let json = serde_json::to_string_pretty(&saved)?;
    fs::write(path, json)?;
    log::info!("[REPORT] JSON output saved to {}", path.display());
    Ok(())
}
