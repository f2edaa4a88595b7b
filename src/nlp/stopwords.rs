// Per-language stopword filtering backed by the stop-words corpus.
use std::collections::HashSet;

use anyhow::{anyhow, Result};
use stop_words::{get, LANGUAGE};

fn parse_language(name: &str) -> Result<LANGUAGE> {
    match name.to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(LANGUAGE::English),
        "spanish" | "es" => Ok(LANGUAGE::Spanish),
        "french" | "fr" => Ok(LANGUAGE::French),
        "german" | "de" => Ok(LANGUAGE::German),
        "italian" | "it" => Ok(LANGUAGE::Italian),
        "portuguese" | "pt" => Ok(LANGUAGE::Portuguese),
        "dutch" | "nl" => Ok(LANGUAGE::Dutch),
        "russian" | "ru" => Ok(LANGUAGE::Russian),
        other => Err(anyhow!("unsupported stopword language: {}", other)),
    }
}

/// Returns the fixed stopword set for `language`.
pub fn stop_set(language: &str) -> Result<HashSet<String>> {
    Ok(get(parse_language(language)?).into_iter().collect())
}

/// Drops every token that exactly matches a stopword for `language`.
/// Order and duplicates of the surviving tokens are preserved.
pub fn filter_stopwords(tokens: Vec<String>, language: &str) -> Result<Vec<String>> {
    let stop = stop_set(language)?;
    Ok(tokens.into_iter().filter(|t| !stop.contains(t)).collect())
}
