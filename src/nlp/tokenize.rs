// Text normalization and tokenization.
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases `text` and removes every ASCII punctuation character.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Splits `text` into lowercase word tokens. Punctuation is stripped before
/// word-boundary segmentation, so contractions collapse ("don't" -> "dont").
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    normalized.unicode_words().map(|w| w.to_string()).collect()
}
