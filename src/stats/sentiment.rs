//! Sentiment polarity scoring.
//!
//! The aggregator treats sentiment as a black box behind the
//! [`SentimentScorer`] trait: anything that maps text to a polarity in
//! `[-1, 1]` plugs in. [`LexiconScorer`] is the built-in implementation, a
//! dictionary-based scorer with intensifier and negation handling. It is
//! deliberately lightweight; swap in a model-backed scorer for anything
//! serious.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Maps text to a signed polarity score.
///
/// Scores are in `[-1, 1]`: negative values mean negative sentiment, zero is
/// neutral. Implementations must return 0.0 for text they cannot score.
pub trait SentimentScorer {
    /// Returns the polarity of `text` in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;
}

/// Word scores: positive entries > 0, negative < 0.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();

    let positive: &[(&str, f64)] = &[
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("wonderful", 1.0),
        ("fantastic", 0.9),
        ("amazing", 0.9),
        ("awesome", 0.9),
        ("love", 0.9),
        ("loved", 0.9),
        ("like", 0.4),
        ("liked", 0.4),
        ("happy", 0.8),
        ("glad", 0.6),
        ("joy", 0.8),
        ("fun", 0.6),
        ("funny", 0.5),
        ("nice", 0.6),
        ("cool", 0.5),
        ("perfect", 1.0),
        ("beautiful", 0.8),
        ("brilliant", 0.9),
        ("best", 0.9),
        ("better", 0.4),
        ("win", 0.6),
        ("won", 0.6),
        ("thanks", 0.5),
        ("thank", 0.5),
        ("sweet", 0.5),
        ("enjoy", 0.6),
        ("enjoyed", 0.6),
        ("excited", 0.7),
        ("exciting", 0.7),
        ("yes", 0.2),
        ("please", 0.2),
        ("congrats", 0.8),
        ("congratulations", 0.8),
    ];

    let negative: &[(&str, f64)] = &[
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("worst", -1.0),
        ("worse", -0.5),
        ("hate", -0.9),
        ("hated", -0.9),
        ("angry", -0.7),
        ("mad", -0.6),
        ("sad", -0.6),
        ("upset", -0.6),
        ("annoying", -0.6),
        ("annoyed", -0.6),
        ("disappointed", -0.7),
        ("disappointing", -0.7),
        ("boring", -0.5),
        ("ugly", -0.6),
        ("stupid", -0.8),
        ("dumb", -0.7),
        ("idiot", -0.9),
        ("damn", -0.5),
        ("hell", -0.5),
        ("crap", -0.7),
        ("sucks", -0.8),
        ("suck", -0.8),
        ("fail", -0.6),
        ("failed", -0.6),
        ("problem", -0.4),
        ("wrong", -0.5),
        ("broken", -0.5),
        ("lost", -0.4),
        ("lose", -0.4),
        ("sick", -0.5),
        ("tired", -0.4),
        ("no", -0.2),
        ("never", -0.3),
        ("sorry", -0.3),
    ];

    for &(word, score) in positive.iter().chain(negative) {
        lexicon.insert(word, score);
    }
    lexicon
});

static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["very", "extremely", "absolutely", "really", "incredibly", "totally", "super"]
        .into_iter()
        .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "nothing", "nobody", "neither", "nor", "isnt", "dont", "cant", "wont"]
        .into_iter()
        .collect()
});

/// Dictionary-based sentiment scorer.
///
/// Averages the lexicon scores of recognized words, boosting words after an
/// intensifier and flipping words in the shadow of a negation. Text with no
/// recognized words scores 0.0.
///
/// # Example
///
/// ```
/// use whatstats::stats::sentiment::{LexiconScorer, SentimentScorer};
///
/// let scorer = LexiconScorer::new();
/// assert!(scorer.polarity("what a great day") > 0.0);
/// assert!(scorer.polarity("this is terrible") < 0.0);
/// assert_eq!(scorer.polarity("the cat sat"), 0.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Creates a new scorer backed by the built-in lexicon.
    pub fn new() -> Self {
        Self
    }
}

const INTENSIFIER_BOOST: f64 = 1.5;
/// How many preceding words a negation covers.
const NEGATION_WINDOW: usize = 2;

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(|w| w.replace('\'', ""))
            .collect();

        let mut sum = 0.0;
        let mut hits = 0u32;

        for (i, word) in words.iter().enumerate() {
            let Some(&score) = LEXICON.get(word.as_str()) else {
                continue;
            };

            let mut value = score;
            if i > 0 && INTENSIFIERS.contains(words[i - 1].as_str()) {
                value *= INTENSIFIER_BOOST;
            }

            let negated = words[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|w| NEGATIONS.contains(w.as_str()));
            if negated {
                value = -value;
            }

            sum += value;
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }

        (sum / f64::from(hits)).clamp(-1.0, 1.0)
    }
}
