// Lexicon-based sentiment scoring.
// A static valence table drives both the per-label polarity classification and
// the whole-document score; negation and intensifier words in the two preceding
// tokens adjust a hit before it is counted.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::tokenize::tokenize;

/// Component scores for a piece of text. `neg`, `neu` and `pos` are the
/// normalized shares of negative, neutral and positive token mass and sum to
/// one whenever any token was seen; `compound` is the summed valence squashed
/// into (-1, 1). Empty input scores all zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Coarse sentiment bucket for a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

// Word valences. Signs carry the polarity, magnitudes the strength; pairs like
// good/bad and win/lose are symmetric so that balanced text scores a tie.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("good", 1.9),
        ("great", 2.1),
        ("excellent", 2.7),
        ("wonderful", 2.7),
        ("fantastic", 2.6),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("love", 3.2),
        ("loved", 2.9),
        ("happy", 2.7),
        ("happiness", 2.6),
        ("joy", 2.8),
        ("joyful", 2.9),
        ("pleased", 1.9),
        ("delighted", 2.5),
        ("delight", 2.5),
        ("satisfied", 1.8),
        ("perfect", 2.7),
        ("beautiful", 2.9),
        ("brilliant", 2.8),
        ("outstanding", 2.6),
        ("superb", 2.9),
        ("magnificent", 2.9),
        ("marvelous", 2.8),
        ("terrific", 2.6),
        ("fabulous", 2.6),
        ("exceptional", 2.3),
        ("impressive", 2.2),
        ("remarkable", 2.0),
        ("best", 3.2),
        ("better", 1.9),
        ("positive", 2.3),
        ("advantage", 1.5),
        ("benefit", 1.7),
        ("success", 2.7),
        ("successful", 2.6),
        ("win", 2.2),
        ("winner", 2.4),
        ("winning", 2.4),
        ("accomplished", 1.9),
        ("achievement", 2.1),
        ("triumph", 2.6),
        ("enjoy", 2.2),
        ("pleasant", 2.0),
        ("comfortable", 1.7),
        ("excited", 2.2),
        ("exciting", 2.2),
        ("thrilled", 2.7),
        ("like", 1.5),
        ("liked", 1.6),
        ("favorite", 2.0),
        ("prefer", 1.2),
        ("calm", 1.3),
        ("serene", 1.8),
        ("serenity", 1.9),
        ("peace", 2.5),
        ("peaceful", 2.2),
        ("hope", 1.9),
        ("hopeful", 2.0),
        ("trust", 1.6),
        ("gratitude", 2.0),
        ("grateful", 2.3),
        ("pride", 1.6),
        ("proud", 2.1),
        ("relief", 1.6),
        ("relieved", 1.9),
        ("amusement", 1.7),
        ("amused", 1.6),
        ("cheerful", 2.5),
        ("contentment", 1.6),
        ("optimism", 2.0),
        ("optimistic", 2.2),
        ("bliss", 2.7),
        ("affection", 2.4),
        ("kindness", 2.4),
        ("admiration", 2.0),
        ("bad", -1.9),
        ("terrible", -2.6),
        ("awful", -2.7),
        ("horrible", -2.7),
        ("poor", -1.9),
        ("worst", -3.1),
        ("worse", -2.1),
        ("hate", -2.7),
        ("hated", -2.6),
        ("angry", -2.3),
        ("anger", -2.3),
        ("rage", -2.9),
        ("furious", -2.7),
        ("sad", -2.1),
        ("sadness", -2.1),
        ("sorrow", -2.1),
        ("sorrowful", -2.2),
        ("grief", -2.4),
        ("mourning", -1.9),
        ("upset", -1.9),
        ("disappointed", -2.0),
        ("disappointing", -2.1),
        ("dissatisfied", -1.9),
        ("unhappy", -2.2),
        ("fail", -2.3),
        ("failure", -2.4),
        ("failed", -2.2),
        ("problem", -1.4),
        ("wrong", -1.6),
        ("error", -1.6),
        ("difficult", -1.3),
        ("struggle", -1.7),
        ("struggling", -1.8),
        ("broken", -1.6),
        ("pain", -2.3),
        ("painful", -2.4),
        ("hurt", -2.2),
        ("hurting", -2.1),
        ("damage", -1.9),
        ("damaged", -1.9),
        ("disaster", -3.1),
        ("negative", -2.3),
        ("loss", -1.9),
        ("lose", -2.2),
        ("losing", -2.1),
        ("lost", -1.7),
        ("defeat", -2.0),
        ("defeated", -2.1),
        ("reject", -1.9),
        ("rejected", -2.0),
        ("rejection", -2.0),
        ("dislike", -1.6),
        ("disliked", -1.7),
        ("unpleasant", -1.8),
        ("uncomfortable", -1.6),
        ("frustrated", -2.1),
        ("frustrating", -2.1),
        ("fear", -2.2),
        ("fearful", -2.3),
        ("afraid", -2.0),
        ("terror", -2.9),
        ("dread", -2.2),
        ("disgust", -2.7),
        ("disgusted", -2.6),
        ("shame", -2.0),
        ("ashamed", -2.1),
        ("guilt", -1.9),
        ("guilty", -1.9),
        ("envy", -1.5),
        ("jealousy", -1.8),
        ("jealous", -1.8),
        ("anxiety", -2.0),
        ("anxious", -1.9),
        ("despair", -2.6),
        ("depressed", -2.4),
        ("depression", -2.4),
        ("lonely", -2.0),
        ("loneliness", -2.0),
        ("misery", -2.7),
        ("miserable", -2.6),
        ("boredom", -1.2),
        ("bored", -1.1),
        ("annoyed", -1.6),
        ("annoyance", -1.6),
        ("worry", -1.9),
        ("worried", -1.8),
    ]
    .iter()
    .copied()
    .collect()
});

// Boost applied to the following word's valence.
static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.5),
        ("extremely", 2.0),
        ("absolutely", 1.8),
        ("really", 1.5),
        ("incredibly", 1.8),
        ("highly", 1.5),
        ("totally", 1.6),
        ("quite", 1.2),
        ("somewhat", 0.8),
        ("slightly", 0.5),
    ]
    .iter()
    .copied()
    .collect()
});

// Negation words flip the valence of a hit within the next two tokens. The
// tokenizer strips apostrophes, so contracted forms appear collapsed here.
static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none", "cannot",
        "dont", "doesnt", "didnt", "wont", "wouldnt", "shouldnt", "cant", "couldnt", "isnt",
        "wasnt", "arent", "aint",
    ]
    .iter()
    .copied()
    .collect()
});

/// Scores `text` against the valence lexicon.
pub fn polarity_scores(text: &str) -> SentimentScores {
    let words = tokenize(text);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    let mut valence_total = 0.0;

    for (i, word) in words.iter().enumerate() {
        let Some(&base) = LEXICON.get(word.as_str()) else {
            neu_count += 1.0;
            continue;
        };

        let mut valence = base;
        if i > 0 {
            if let Some(&boost) = INTENSIFIERS.get(words[i - 1].as_str()) {
                valence *= boost;
            }
        }
        let negated = (i > 0 && NEGATIONS.contains(words[i - 1].as_str()))
            || (i > 1 && NEGATIONS.contains(words[i - 2].as_str()));
        if negated {
            valence = -valence;
        }

        if valence > 0.0 {
            pos_sum += valence + 1.0;
        } else {
            neg_sum += -valence + 1.0;
        }
        valence_total += valence;
    }

    let total = pos_sum + neg_sum + neu_count;
    if total == 0.0 {
        return SentimentScores::default();
    }

    SentimentScores {
        neg: neg_sum / total,
        neu: neu_count / total,
        pos: pos_sum / total,
        compound: valence_total / (valence_total * valence_total + 15.0).sqrt(),
    }
}

/// Classifies a single label string by its compound score. Pure function of
/// the label text.
pub fn classify(label: &str) -> Polarity {
    let compound = polarity_scores(label).compound;
    if compound > 0.1 {
        Polarity::Positive
    } else if compound < -0.1 {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scores = polarity_scores("This is a wonderful day, I am feeling great and happy!");
        assert!(scores.compound > 0.1);
        assert!(scores.pos > scores.neg);
    }

    #[test]
    fn test_negative_text() {
        let scores = polarity_scores("This is terrible and awful, I hate it.");
        assert!(scores.compound < -0.1);
        assert!(scores.neg > scores.pos);
    }

    #[test]
    fn test_neutral_text() {
        let scores = polarity_scores("The sky is blue and the grass is green.");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.pos, 0.0);
        assert_eq!(scores.neg, 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scores = polarity_scores("");
        assert_eq!(scores.neg, 0.0);
        assert_eq!(scores.neu, 0.0);
        assert_eq!(scores.pos, 0.0);
        assert_eq!(scores.compound, 0.0);
    }

    #[test]
    fn test_components_sum_to_one() {
        let scores = polarity_scores("a happy dog and a sad cat");
        let sum = scores.neg + scores.neu + scores.pos;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips() {
        let scores = polarity_scores("this is not good");
        assert!(scores.neg > scores.pos);
        assert!(scores.compound < -0.1);
    }

    #[test]
    fn test_contracted_negation() {
        // "don't" tokenizes to "dont"
        let scores = polarity_scores("I don't like this");
        assert!(scores.neg > scores.pos);
    }

    #[test]
    fn test_intensifier_boosts() {
        let plain = polarity_scores("good").compound;
        let boosted = polarity_scores("very good").compound;
        assert!(boosted > plain);
    }

    #[test]
    fn test_symmetric_pair_ties() {
        let scores = polarity_scores("good bad");
        assert!((scores.pos - scores.neg).abs() < 1e-9);
        assert_eq!(scores.compound, 0.0);
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify("joy"), Polarity::Positive);
        assert_eq!(classify("serenity"), Polarity::Positive);
        assert_eq!(classify("sorrow"), Polarity::Negative);
        assert_eq!(classify("anger"), Polarity::Negative);
        assert_eq!(classify("table"), Polarity::Neutral);
    }

    #[test]
    fn test_classify_is_deterministic() {
        assert_eq!(classify("joy"), classify("joy"));
        assert_eq!(classify("sorrow"), classify("sorrow"));
    }

    #[test]
    fn test_polarity_serializes_lowercase() {
        let json = serde_json::to_string(&Polarity::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
