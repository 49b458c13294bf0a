//! Tokenization and emoji extraction.
//!
//! Word statistics only want "real" words: tokens are split on whitespace,
//! stripped of surrounding punctuation, lower-cased, and dropped when they
//! are empty, contain non-alphabetic characters, or sit on the English
//! stop-word list (articles, conjunctions, pronouns, prepositions).
//!
//! Emoji classification is delegated to the Unicode emoji table shipped by
//! the `emojis` crate; it is scanned per character, so multi-codepoint
//! sequences count as their parts.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Punctuation stripped from token edges.
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}'];

/// Common English words excluded from word frequencies.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Articles
        "a", "an", "the",
        // Conjunctions
        "for", "and", "nor", "but", "or", "yet", "so",
        // Pronouns
        "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself",
        "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
        "its", "itself", "we", "us", "our", "ours", "ourselves", "yourselves",
        "they", "them", "their", "theirs", "themselves", "that",
        // Prepositions
        "above", "across", "against", "along", "among", "around", "at", "before",
        "behind", "below", "beneath", "beside", "between", "by", "down", "from",
        "in", "into", "near", "of", "off", "on", "to", "toward", "under", "upon",
        "with", "within",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` is on the stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Splits a message body into normalized countable tokens.
///
/// # Example
///
/// ```
/// use whatstats::stats::text::tokenize;
///
/// assert_eq!(tokenize("Hello there!"), vec!["hello", "there"]);
/// assert!(tokenize("I at the 42").is_empty()); // stop words and digits
/// ```
pub fn tokenize(body: &str) -> Vec<String> {
    body.split_whitespace()
        .map(|word| word.trim_matches(PUNCTUATION).to_lowercase())
        .filter(|word| {
            !word.is_empty()
                && word.chars().all(char::is_alphabetic)
                && !is_stop_word(word)
        })
        .collect()
}

/// Returns `true` if `c` is a single-codepoint emoji.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Collects every emoji character in a message body, in order.
pub fn extract_emojis(body: &str) -> Vec<char> {
    body.chars().filter(|&c| is_emoji(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, there!"), vec!["hello", "there"]);
        assert_eq!(tokenize("(Really?)"), vec!["really"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words() {
        assert!(tokenize("the a an and I you").is_empty());
        assert_eq!(tokenize("I love the weather"), vec!["love", "weather"]);
    }

    #[test]
    fn test_tokenize_drops_non_alphabetic() {
        assert!(tokenize("123 :-) ...").is_empty());
        // mixed alphanumerics are not words
        assert!(tokenize("abc123").is_empty());
    }

    #[test]
    fn test_tokenize_drops_emoji_tokens() {
        // emoji are not alphabetic, so a lone emoji never becomes a word
        assert!(tokenize("😀").is_empty());
        assert_eq!(tokenize("nice 😀"), vec!["nice"]);
    }

    #[test]
    fn test_tokenize_empty_body() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('🔥'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('!'));
        assert!(!is_emoji(' '));
    }

    #[test]
    fn test_extract_emojis() {
        assert_eq!(extract_emojis("hi 😀 there 🔥😀"), vec!['😀', '🔥', '😀']);
        assert!(extract_emojis("no emoji here").is_empty());
    }

    #[test]
    fn test_stop_list_is_closed() {
        // the list covers articles/conjunctions/pronouns/prepositions only;
        // verbs like "am" are countable words
        assert!(!is_stop_word("am"));
        assert_eq!(tokenize("I am at 42"), vec!["am"]);
        assert!(tokenize("I at the 42").is_empty());
    }

    #[test]
    fn test_stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("between"));
        assert!(!is_stop_word("hello"));
    }
}
