use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

lazy_static! {
    // Shortest match from the start through the first blank line.
    static ref HEADER_RE: Regex = Regex::new(r"(?s)^.*?\n\n").expect("valid regex");
    static ref URL_RE: Regex = Regex::new(r"http[s]?://\S+").expect("valid regex");
    static ref ADDR_RE: Regex = Regex::new(r"\S+@\S+").expect("valid regex");
    static ref NON_ALPHA_RE: Regex = Regex::new(r"[^a-zA-Z\s]").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","an","and","are","as","at",
            "be","by","for","from","has","he",
            "in","is","it","its","of","on",
            "that","the","to","was","were","with",
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Normalize raw email text into an ordered sequence of stemmed tokens.
///
/// Pipeline: strip the header block (everything up to and including the first
/// blank line; header-less text is treated as all body), remove URLs and
/// email addresses, drop every character that is not an ASCII letter or
/// whitespace, lowercase, split on whitespace, drop stopwords, and stem.
/// Tokens whose stem comes back empty are dropped silently; that lossy step
/// is part of the contract, not an error. Duplicates are retained in their
/// original relative order.
pub fn normalize(text: &str) -> Vec<String> {
    let body = HEADER_RE.replacen(text, 1, "");
    let body = URL_RE.replace_all(&body, "");
    let body = ADDR_RE.replace_all(&body, "");
    let body = NON_ALPHA_RE.replace_all(&body, "");
    let body = body.to_lowercase();

    let mut tokens = Vec::new();
    for word in body.split_whitespace() {
        if is_stopword(word) { continue; }
        let stem = STEMMER.stem(word).to_string();
        if stem.is_empty() { continue; }
        tokens.push(stem);
    }
    tokens
}
