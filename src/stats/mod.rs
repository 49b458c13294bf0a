//! Per-sender and per-chat statistics.
//!
//! [`SenderStats::aggregate`] is a pure transform from a record slice to one
//! sender's statistics; [`ChatReport::build`] runs it for every sender in the
//! chat and adds the chat-wide summary. Nothing here mutates shared state, so
//! aggregating the same records twice yields identical results.
//!
//! # Example
//!
//! ```
//! use whatstats::parser::ChatParser;
//! use whatstats::stats::sentiment::LexiconScorer;
//! use whatstats::stats::SenderStats;
//!
//! # fn main() -> whatstats::error::Result<()> {
//! let records = ChatParser::new().parse_str(
//!     "1/2/23, 10:05 AM - Alice: Hello there! 😀\n\
//!      1/3/23, 10:07 AM - Alice: <Media omitted>",
//! )?;
//!
//! let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new())?;
//! assert_eq!(stats.num_messages, 2);
//! assert_eq!(stats.word_freq.get("hello"), 1);
//! assert_eq!(stats.emoji_freq.get("😀"), 1);
//! assert_eq!(stats.hour_freq.get("10 AM"), 2);
//! # Ok(())
//! # }
//! ```

pub mod sentiment;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhatstatsError};
use crate::freq::FreqTable;
use crate::Message;

use self::sentiment::SentimentScorer;

/// Weekday bucket keys in canonical week order.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Descriptive statistics for one sender.
///
/// Computed in full from a complete record slice and never updated
/// incrementally. Invariants:
///
/// - `num_words == word_freq.total()`, `num_emojis == emoji_freq.total()`
/// - each temporal table's counts sum to `num_messages` (every message lands
///   in exactly one bucket per grouping)
/// - frequency tables never hold zero counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderStats {
    /// The sender these statistics describe.
    pub sender: String,

    /// Messages sent, automated placeholders included.
    pub num_messages: u64,

    /// Countable words sent (after stop-word and punctuation filtering).
    pub num_words: u64,

    /// Emoji characters sent.
    pub num_emojis: u64,

    /// Mean countable words per message.
    pub avg_message_len: f64,

    /// Body of the longest message by character count.
    pub longest_message: String,

    /// Word → occurrence count.
    pub word_freq: FreqTable,

    /// Emoji character → occurrence count.
    pub emoji_freq: FreqTable,

    /// 12-hour bucket ("09 AM") → message count.
    pub hour_freq: FreqTable,

    /// Weekday bucket ("Mon") → message count.
    pub weekday_freq: FreqTable,

    /// Calendar-day bucket ("DD/MM/YY") → message count.
    pub day_freq: FreqTable,

    /// Calendar-month bucket ("MM/YY") → message count.
    pub month_freq: FreqTable,

    /// Mean per-message sentiment polarity, in `[-1, 1]`.
    pub avg_polarity: f64,

    /// The sender's most negatively scored word, if any word scores below
    /// zero.
    pub most_negative_word: Option<String>,
}

impl SenderStats {
    /// Computes statistics for `sender` over `records`.
    ///
    /// # Errors
    ///
    /// Returns [`WhatstatsError::NoMessagesForSender`] when no record belongs
    /// to `sender`; averages are undefined over zero messages.
    pub fn aggregate(
        records: &[Message],
        sender: &str,
        scorer: &dyn SentimentScorer,
    ) -> Result<Self> {
        let messages: Vec<&Message> = records.iter().filter(|m| m.sender == sender).collect();

        if messages.is_empty() {
            return Err(WhatstatsError::no_messages_for(sender));
        }

        let mut word_freq = FreqTable::new();
        let mut emoji_freq = FreqTable::new();
        let mut hour_freq = FreqTable::new();
        let mut weekday_freq = FreqTable::new();
        let mut day_freq = FreqTable::new();
        let mut month_freq = FreqTable::new();

        let mut longest: &Message = messages[0];
        let mut polarity_sum = 0.0;

        for msg in &messages {
            for token in text::tokenize(&msg.body) {
                word_freq.record(token);
            }
            for emoji in text::extract_emojis(&msg.body) {
                emoji_freq.record(emoji.to_string());
            }

            hour_freq.record(msg.timestamp.format("%I %p").to_string());
            weekday_freq.record(msg.timestamp.format("%a").to_string());
            day_freq.record(msg.timestamp.format("%d/%m/%y").to_string());
            month_freq.record(msg.timestamp.format("%m/%y").to_string());

            polarity_sum += scorer.polarity(&msg.body);

            if msg.char_len() > longest.char_len() {
                longest = msg;
            }
        }

        let num_messages = messages.len() as u64;
        let num_words = word_freq.total();
        let num_emojis = emoji_freq.total();

        let most_negative_word = most_negative_word(&word_freq, scorer);

        Ok(Self {
            sender: sender.to_string(),
            num_messages,
            num_words,
            num_emojis,
            avg_message_len: num_words as f64 / num_messages as f64,
            longest_message: longest.body.clone(),
            word_freq,
            emoji_freq,
            hour_freq,
            weekday_freq,
            day_freq,
            month_freq,
            avg_polarity: polarity_sum / num_messages as f64,
            most_negative_word,
        })
    }

    /// Weekday buckets in canonical Mon..Sun order, zero buckets omitted.
    pub fn weekdays_ordered(&self) -> Vec<(String, u64)> {
        WEEKDAYS
            .iter()
            .filter_map(|&day| {
                let count = self.weekday_freq.get(day);
                (count > 0).then(|| (day.to_string(), count))
            })
            .collect()
    }

    /// Hour buckets in chronological order (12 AM → 11 PM), zero buckets
    /// omitted.
    pub fn hours_ordered(&self) -> Vec<(String, u64)> {
        (0..24)
            .filter_map(|hour| {
                let key = hour_label(hour);
                let count = self.hour_freq.get(&key);
                (count > 0).then_some((key, count))
            })
            .collect()
    }
}

/// 12-hour label for an hour of day, matching `strftime` `%I %p`.
fn hour_label(hour: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display:02} {meridiem}")
}

/// Picks the word with the lowest polarity, kept only when strictly negative.
///
/// Keys are visited in sorted order so ties resolve deterministically.
fn most_negative_word(word_freq: &FreqTable, scorer: &dyn SentimentScorer) -> Option<String> {
    let mut words: Vec<&str> = word_freq.iter().map(|(word, _)| word).collect();
    words.sort_unstable();

    let mut worst: Option<(&str, f64)> = None;
    for word in words {
        let score = scorer.polarity(word);
        if worst.map_or(true, |(_, s)| score < s) {
            worst = Some((word, score));
        }
    }

    worst.and_then(|(word, score)| (score < 0.0).then(|| word.to_string()))
}

/// Chat-wide statistics: every sender's stats plus combined summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    /// Per-sender statistics, in order of first appearance in the chat.
    pub senders: Vec<SenderStats>,

    /// Total messages across all senders.
    pub total_messages: u64,

    /// Total countable words across all senders.
    pub total_words: u64,

    /// Total emoji across all senders.
    pub total_emojis: u64,

    /// Combined calendar-day activity across all senders.
    pub day_freq: FreqTable,

    /// The day with the most messages, if any.
    pub most_active_day: Option<String>,

    /// Mean of the per-sender average polarities.
    pub avg_polarity: f64,
}

impl ChatReport {
    /// Aggregates every sender appearing in `records`.
    ///
    /// Senders are reported in order of first appearance. Each sender's
    /// statistics are independent of the others, so the per-sender passes
    /// could run in parallel; the results are merged here regardless.
    ///
    /// # Errors
    ///
    /// Returns [`WhatstatsError::NoMessages`] for an empty record slice.
    pub fn build(records: &[Message], scorer: &dyn SentimentScorer) -> Result<Self> {
        if records.is_empty() {
            return Err(WhatstatsError::no_messages(None));
        }

        let mut names: Vec<&str> = Vec::new();
        for msg in records {
            if !names.contains(&msg.sender.as_str()) {
                names.push(&msg.sender);
            }
        }

        let senders = names
            .iter()
            .map(|name| SenderStats::aggregate(records, name, scorer))
            .collect::<Result<Vec<_>>>()?;

        let mut day_freq = FreqTable::new();
        for stats in &senders {
            day_freq.merge(&stats.day_freq);
        }

        let total_messages = senders.iter().map(|s| s.num_messages).sum();
        let total_words = senders.iter().map(|s| s.num_words).sum();
        let total_emojis = senders.iter().map(|s| s.num_emojis).sum();
        let avg_polarity =
            senders.iter().map(|s| s.avg_polarity).sum::<f64>() / senders.len() as f64;
        let most_active_day = day_freq.top().map(|(day, _)| day);

        Ok(Self {
            senders,
            total_messages,
            total_words,
            total_emojis,
            day_freq,
            most_active_day,
            avg_polarity,
        })
    }

    /// Looks up one sender's statistics by exact name.
    pub fn sender(&self, name: &str) -> Option<&SenderStats> {
        self.senders.iter().find(|s| s.sender == name)
    }

    /// Iterates over sender names in first-appearance order.
    pub fn sender_names(&self) -> impl Iterator<Item = &str> {
        self.senders.iter().map(|s| s.sender.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::stats::sentiment::LexiconScorer;

    fn msg(day: u32, hour: u32, sender: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2023, 2, day)
            .unwrap()
            .and_hms_opt(hour, 5, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_aggregate_counts() {
        let records = vec![
            msg(1, 10, "Alice", "Hello there! 😀"),
            msg(1, 10, "Alice", ""),
            msg(2, 22, "Bob", "good night"),
        ];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();

        assert_eq!(stats.num_messages, 2);
        assert_eq!(stats.num_words, 2);
        assert_eq!(stats.num_emojis, 1);
        assert_eq!(stats.word_freq.get("hello"), 1);
        assert_eq!(stats.word_freq.get("there"), 1);
        assert_eq!(stats.emoji_freq.get("😀"), 1);
        assert_eq!(stats.hour_freq.get("10 AM"), 2);
        assert_eq!(stats.weekday_freq.get("Wed"), 2);
        assert_eq!(stats.day_freq.get("01/02/23"), 2);
        assert_eq!(stats.month_freq.get("02/23"), 2);
    }

    #[test]
    fn test_temporal_tables_partition_message_count() {
        let records = vec![
            msg(1, 0, "Alice", "one"),
            msg(2, 12, "Alice", "two"),
            msg(3, 23, "Alice", "three"),
            msg(4, 9, "Alice", "four"),
        ];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();

        for table in [
            &stats.hour_freq,
            &stats.weekday_freq,
            &stats.day_freq,
            &stats.month_freq,
        ] {
            assert_eq!(table.total(), stats.num_messages);
        }
    }

    #[test]
    fn test_scalar_invariants() {
        let records = vec![
            msg(1, 10, "Alice", "nice nice day 😀😀🔥"),
            msg(2, 11, "Alice", "the and a"),
        ];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();
        assert_eq!(stats.num_words, stats.word_freq.total());
        assert_eq!(stats.num_emojis, stats.emoji_freq.total());
        assert_eq!(stats.num_words, 3);
        assert_eq!(stats.num_emojis, 3);
    }

    #[test]
    fn test_single_message_boundary() {
        let records = vec![msg(1, 10, "Alice", "lovely sunny morning")];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();

        assert_eq!(stats.num_messages, 1);
        assert_eq!(stats.avg_message_len, stats.num_words as f64);
        assert_eq!(stats.longest_message, "lovely sunny morning");
    }

    #[test]
    fn test_unknown_sender_fails() {
        let records = vec![msg(1, 10, "Alice", "hi")];
        let err = SenderStats::aggregate(&records, "Bob", &LexiconScorer::new()).unwrap_err();
        assert!(err.is_no_messages_for_sender());
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let records = vec![
            msg(1, 10, "Alice", "Hello there! 😀"),
            msg(2, 11, "Alice", "terrible awful day"),
            msg(3, 12, "Alice", "great stuff"),
        ];
        let scorer = LexiconScorer::new();
        let first = SenderStats::aggregate(&records, "Alice", &scorer).unwrap();
        let second = SenderStats::aggregate(&records, "Alice", &scorer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_longest_message_by_chars() {
        let records = vec![
            msg(1, 10, "Alice", "😀😀😀😀"),
            msg(2, 11, "Alice", "abc"),
        ];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();
        assert_eq!(stats.longest_message, "😀😀😀😀");
    }

    #[test]
    fn test_most_negative_word() {
        let records = vec![msg(1, 10, "Alice", "what a terrible nice day")];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();
        assert_eq!(stats.most_negative_word.as_deref(), Some("terrible"));
    }

    #[test]
    fn test_most_negative_word_absent_when_nothing_negative() {
        let records = vec![msg(1, 10, "Alice", "lovely great day")];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();
        assert!(stats.most_negative_word.is_none());
    }

    #[test]
    fn test_avg_polarity_counts_empty_bodies() {
        // a placeholder message dilutes the average, matching message count
        let records = vec![msg(1, 10, "Alice", "great"), msg(2, 11, "Alice", "")];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();
        let only = SenderStats::aggregate(&records[..1], "Alice", &LexiconScorer::new()).unwrap();
        assert!(stats.avg_polarity < only.avg_polarity);
        assert!(stats.avg_polarity > 0.0);
    }

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(9), "09 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(23), "11 PM");
    }

    #[test]
    fn test_ordered_views() {
        let records = vec![
            msg(5, 21, "Alice", "sunday night"), // 2023-02-05 is a Sunday
            msg(6, 9, "Alice", "monday morning"),
        ];
        let stats = SenderStats::aggregate(&records, "Alice", &LexiconScorer::new()).unwrap();

        let weekdays = stats.weekdays_ordered();
        assert_eq!(weekdays[0].0, "Mon");
        assert_eq!(weekdays[1].0, "Sun");

        let hours = stats.hours_ordered();
        assert_eq!(hours[0].0, "09 AM");
        assert_eq!(hours[1].0, "09 PM");
    }

    #[test]
    fn test_report_build() {
        let records = vec![
            msg(1, 10, "Alice", "Hello there! 😀"),
            msg(1, 11, "Bob", "hi"),
            msg(2, 12, "Alice", "more words here"),
        ];
        let report = ChatReport::build(&records, &LexiconScorer::new()).unwrap();

        assert_eq!(report.sender_names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        assert_eq!(report.total_messages, 3);
        assert_eq!(report.total_words, 6);
        assert_eq!(report.total_emojis, 1);
        assert_eq!(report.day_freq.get("01/02/23"), 2);
        assert_eq!(report.most_active_day.as_deref(), Some("01/02/23"));
        assert!(report.sender("Alice").is_some());
        assert!(report.sender("Carol").is_none());
    }

    #[test]
    fn test_report_empty_records_fails() {
        let err = ChatReport::build(&[], &LexiconScorer::new()).unwrap_err();
        assert!(err.is_no_messages());
    }
}
