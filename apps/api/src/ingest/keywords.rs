//! Display keywords — the most frequent content terms of a cleaned document.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ingest::normalize::is_stopword;

pub const DEFAULT_TOP_K: usize = 15;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token regex"));

/// Top `top_k` terms by frequency, ties broken alphabetically.
///
/// For a single document this ranks the same as TF-IDF, since every term shares one IDF.
pub fn extract_keywords(cleaned_text: &str, top_k: usize) -> Vec<String> {
    let lower = cleaned_text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in TOKEN_RE.find_iter(&lower) {
        let token = m.as_str();
        if !is_stopword(token) {
            *counts.entry(token).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(top_k)
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_by_frequency_then_alphabet() {
        let text = "sql python sql tableau python sql excel";
        assert_eq!(
            extract_keywords(text, 3),
            vec!["sql", "python", "excel"]
        );
    }

    #[test]
    fn test_skips_single_chars_and_stopwords() {
        let text = "r and the a data data";
        assert_eq!(extract_keywords(text, 10), vec!["data"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords("", DEFAULT_TOP_K).is_empty());
    }
}
