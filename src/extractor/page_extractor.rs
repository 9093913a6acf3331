use scraper::{ElementRef, Html, Node, Selector};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::domain::models::{AnchorRef, ImageRef, PageRecord};
use crate::service::text;

pub struct PageExtractor;

impl PageExtractor {
    /// Extract everything the audit needs from one HTML document. Parsing
    /// never fails; missing elements become empty fields.
    pub fn extract(html: &str) -> PageRecord {
        let document = Html::parse_document(html);

        let (meta_description, meta_robots, open_graph, twitter) = Self::extract_meta(&document);
        let words = Self::extract_words(&document);
        let word_count = words.len();

        PageRecord {
            title: Self::extract_title(&document),
            meta_description,
            meta_robots,
            canonical: Self::extract_canonical(&document),
            open_graph,
            twitter,
            h1s: Self::extract_h1s(&document),
            h2s: Self::extract_h2s(&document),
            images: Self::extract_images(&document),
            links: Self::extract_links(&document),
            structured_data: Self::extract_structured_data(&document),
            words,
            word_count,
        }
    }

    pub fn extract_title(html: &Html) -> String {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
        html.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// One pass over every `<meta>` tag: description and robots keep the
    /// first non-empty content, `og:`/`twitter:` maps keep the last value
    /// under the literal (case-preserved) attribute key.
    fn extract_meta(
        html: &Html,
    ) -> (
        String,
        String,
        BTreeMap<String, String>,
        BTreeMap<String, String>,
    ) {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("meta").unwrap());

        let mut description = String::new();
        let mut robots = String::new();
        let mut open_graph = BTreeMap::new();
        let mut twitter = BTreeMap::new();

        for element in html.select(selector) {
            let name = element.value().attr("name").unwrap_or("");
            let property = element.value().attr("property").unwrap_or("");
            let content = element.value().attr("content");

            if name.eq_ignore_ascii_case("description") && description.is_empty() {
                if let Some(content) = content.filter(|c| !c.is_empty()) {
                    description = content.trim().to_string();
                }
            }
            if name.eq_ignore_ascii_case("robots") && robots.is_empty() {
                if let Some(content) = content.filter(|c| !c.is_empty()) {
                    robots = content.trim().to_string();
                }
            }
            if property.to_ascii_lowercase().starts_with("og:") {
                open_graph.insert(property.to_string(), content.unwrap_or("").to_string());
            }
            if name.to_ascii_lowercase().starts_with("twitter:") {
                twitter.insert(name.to_string(), content.unwrap_or("").to_string());
            }
        }

        (description, robots, open_graph, twitter)
    }

    pub fn extract_canonical(html: &Html) -> String {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("link").unwrap());
        html.select(selector)
            .find(|el| {
                el.value()
                    .attr("rel")
                    .is_some_and(|rel| rel.to_ascii_lowercase().contains("canonical"))
            })
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())
            .unwrap_or_default()
    }

    pub fn extract_h1s(html: &Html) -> Vec<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("h1").unwrap());
        Self::heading_texts(html, selector)
    }

    pub fn extract_h2s(html: &Html) -> Vec<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("h2").unwrap());
        Self::heading_texts(html, selector)
    }

    // Document order, duplicates and empty headings kept: an empty <h1>
    // still counts as a present heading.
    fn heading_texts(html: &Html, selector: &Selector) -> Vec<String> {
        html.select(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    pub fn extract_images(html: &Html) -> Vec<ImageRef> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("img").unwrap());
        html.select(selector)
            .map(|el| ImageRef {
                src: el.value().attr("src").unwrap_or("").to_string(),
                alt: el.value().attr("alt").unwrap_or("").to_string(),
            })
            .collect()
    }

    pub fn extract_links(html: &Html) -> Vec<AnchorRef> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("a").unwrap());
        html.select(selector)
            .map(|el| AnchorRef {
                href: el.value().attr("href").map(|s| s.to_string()),
                text: el.text().collect::<String>().trim().to_string(),
            })
            .collect()
    }

    pub fn extract_structured_data(html: &Html) -> Vec<serde_json::Value> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR
            .get_or_init(|| Selector::parse("script[type='application/ld+json']").unwrap());
        html.select(selector)
            .filter_map(|el| serde_json::from_str(&el.text().collect::<String>()).ok())
            .collect()
    }

    /// Tokenized visible text of the whole document, script/style/noscript
    /// subtrees excluded.
    pub fn extract_words(html: &Html) -> Vec<String> {
        let mut visible = String::new();
        collect_visible_text(html.root_element(), &mut visible);
        text::tokenize_words(&visible)
    }
}

fn collect_visible_text(element: ElementRef, out: &mut String) {
    if matches!(element.value().name(), "script" | "style" | "noscript") {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push(' ');
                out.push_str(&text.text);
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}
