// Emotion lexicon parsing and aggregation.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// One `word:emotion` pair per line, after decoration stripping.
static LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:]+):([^:]+)$").unwrap());

/// Reads a `word:emotion` lexicon file and collects the emotion of every line
/// whose word is a member of `kept`. Lines may be decorated with commas,
/// apostrophes and surrounding whitespace; those are stripped before the split.
/// Malformed lines (no colon, more than one colon, empty field) are skipped
/// with a warning. Emotions are returned in file order, one per matching line.
pub fn parse_emotions(path: &Path, kept: &HashSet<String>) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open lexicon file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut emotions = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("failed to read lexicon file {}", path.display()))?;
        let cleaned = line.replace(',', "").replace('\'', "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            continue;
        }

        let Some(caps) = LINE_RE.captures(cleaned) else {
            log::warn!("skipping malformed lexicon line {}: {:?}", lineno + 1, line);
            continue;
        };
        let word = caps[1].trim();
        let emotion = caps[2].trim();
        if word.is_empty() || emotion.is_empty() {
            log::warn!("skipping malformed lexicon line {}: {:?}", lineno + 1, line);
            continue;
        }

        if kept.contains(word) {
            emotions.push(emotion.to_string());
        }
    }
    Ok(emotions)
}

/// Counts an emotion list into `(emotion, count)` pairs, keys unique, in
/// first-encounter order.
pub fn count_emotions(emotions: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for emotion in emotions {
        match counts.iter_mut().find(|(e, _)| e == emotion) {
            Some((_, count)) => *count += 1,
            None => counts.push((emotion.clone(), 1)),
        }
    }
    counts
}
