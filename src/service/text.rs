//! Word and phrase tokenization shared by the extractor and the analyzer.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

// Minimal English stopword list; entries with apostrophes can never match a
// tokenized word but are kept with the rest of the list.
const STOPWORD_LIST: &str = "
about above after again against all am an and any are aren't as at be because been before being below between both
but by can't cannot could couldn't did didn't do does doesn't doing don't down during each few for from further had
hadn't has hasn't have haven't having he he'd he'll he's her here here's hers herself him himself his how how's i i'd
i'll i'm i've if in into is isn't it it's its itself let's me more most mustn't my myself no nor not of off on once
only or other ought our ours ourselves out over own same shan't she she'd she'll she's should shouldn't so some such
than that that's the their theirs them themselves then there there's these they they'd they'll they're they've this those
through to too under until up very was wasn't we we'd we'll we're we've were weren't what what's when when's where
where's which while who who's whom why why's with won't would wouldn't you you'd you'll you're you've your yours yourself yourselves
";

fn stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| STOPWORD_LIST.split_whitespace().collect())
}

pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

/// Lowercase the input and return every maximal run of two or more ASCII
/// letters. Digits, punctuation and single letters never form words.
pub fn tokenize_words(text: &str) -> Vec<String> {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    let re = WORD_RE.get_or_init(|| Regex::new(r"[a-z]{2,}").unwrap());
    let lowered = text.to_lowercase();
    re.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Maximal runs of letters, digits, hyphens, underscores and spaces (length
/// >= 2). Other punctuation splits a heading into separate candidate runs.
pub fn phrase_runs(text: &str) -> Vec<String> {
    static PHRASE_RE: OnceLock<Regex> = OnceLock::new();
    let re = PHRASE_RE.get_or_init(|| Regex::new(r"[a-zA-Z0-9\-_ ]{2,}").unwrap());
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
