//! Link normalization and same-site classification.

use url::Url;

/// Normalize a raw href against the page it appeared on.
///
/// Returns `None` for empty inputs, `javascript:`/`mailto:`/`tel:` links,
/// unresolvable hrefs and non-http(s) targets. Fragments are always
/// stripped, so `/page` and `/page#section` are the same address.
pub fn normalize(base: &Url, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
    {
        return None;
    }

    let mut resolved = base.join(raw).ok()?;
    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }
    resolved.set_fragment(None);
    Some(resolved)
}

/// Trim a trailing slash from a plain path URL. Applied to the crawl seed so
/// `https://example.com/docs/` and a discovered `https://example.com/docs`
/// collapse to one address. URLs with a query or fragment are left alone.
pub fn trim_trailing_slash(url: &Url) -> Url {
    let mut trimmed = url.clone();
    if url.query().is_some() || url.fragment().is_some() {
        return trimmed;
    }
    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let shortened = path.trim_end_matches('/').to_string();
        trimmed.set_path(&shortened);
    }
    trimmed
}

/// Two addresses belong to the same site when they share a registrable
/// domain (public suffix + one label), so subdomains count as the same site.
/// Hosts without a registrable domain (IP literals, single-label names)
/// compare by exact host and effective port instead.
pub fn same_site(a: &Url, b: &Url) -> bool {
    match (registrable_domain(a), registrable_domain(b)) {
        (Some(da), Some(db)) => da == db,
        _ => {
            a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
        }
    }
}

fn registrable_domain(url: &Url) -> Option<&str> {
    url.domain().and_then(psl::domain_str)
}
