//! Parsed chat message record.
//!
//! This module provides [`Message`], one record per matched line of an export
//! file. The parser produces them in file order, which is chronological in
//! practice.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use whatstats::Message;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello there!");
//! assert_eq!(msg.sender(), "Alice");
//! assert!(!msg.is_empty());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single message parsed from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent, minute precision |
/// | `sender` | `String` | Display name attributed to the message |
/// | `body` | `String` | Text content; empty when the original was an automated placeholder |
///
/// Export files carry no timezone, so timestamps are naive local times.
///
/// The body is empty exactly when the exported text was a recognized
/// automated placeholder such as `<Media omitted>`; those messages still
/// count toward message totals and activity buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent (minute precision, no timezone).
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub body: String,
}

impl Message {
    /// Creates a new message record.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if this message's body is empty or whitespace-only.
    ///
    /// True for normalized automated placeholders.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the body length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}
