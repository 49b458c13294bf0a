//! # Whatstats
//!
//! A Rust library for turning WhatsApp chat exports into per-sender
//! descriptive statistics: word and emoji frequencies, activity by
//! hour/weekday/day/month, and average sentiment polarity.
//!
//! ## Overview
//!
//! Two components, consumed in sequence:
//!
//! - [`parser::ChatParser`] converts the line-oriented export text
//!   (`M/D/YY, H:MM AM - Sender: body`) into an ordered sequence of
//!   [`Message`] records, auto-detecting whether the day or the month is
//!   written first.
//! - [`stats::SenderStats`] and [`stats::ChatReport`] compute the statistics
//!   as plain data. Rendering (charts, colors, GUIs) is left to consumers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ChatParser::new().parse("chat_export.txt".as_ref())?;
//!     let report = ChatReport::build(&records, &LexiconScorer::new())?;
//!
//!     for stats in &report.senders {
//!         println!("{}: {} messages", stats.sender, stats.num_messages);
//!         for (word, count) in stats.word_freq.most_common(5) {
//!             println!("  {word} ({count})");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — export text → [`Message`] records
//!   - [`ChatParser`](parser::ChatParser), [`detect_date_order`](parser::detect_date_order)
//! - [`config`] — [`ParserConfig`](config::ParserConfig), [`DateOrder`](config::DateOrder)
//! - [`stats`] — aggregation
//!   - [`SenderStats`](stats::SenderStats), [`ChatReport`](stats::ChatReport)
//!   - [`stats::text`] — tokenization and emoji extraction
//!   - [`stats::sentiment`] — [`SentimentScorer`](stats::sentiment::SentimentScorer) trait,
//!     [`LexiconScorer`](stats::sentiment::LexiconScorer)
//! - [`freq`] — [`FreqTable`](freq::FreqTable) occurrence counts
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — [`WhatstatsError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod freq;
pub mod message;
pub mod parser;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WhatstatsError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use whatstats::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Message;

    // Error types
    pub use crate::error::{Result, WhatstatsError};

    // Parsing
    pub use crate::config::{DateOrder, ParserConfig};
    pub use crate::parser::ChatParser;

    // Aggregation
    pub use crate::freq::FreqTable;
    pub use crate::stats::sentiment::{LexiconScorer, SentimentScorer};
    pub use crate::stats::{ChatReport, SenderStats};
}
