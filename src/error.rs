//! Unified error types for whatstats.
//!
//! This module provides a single [`WhatstatsError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Two data-cleaning steps are deliberately *not* errors: lines that do not
//! match the export format are skipped, and automated placeholder bodies
//! (`<Media omitted>` and friends) are normalized to empty strings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for whatstats operations.
///
/// # Example
///
/// ```rust
/// use whatstats::error::Result;
/// use whatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WhatstatsError>;

/// The error type for all whatstats operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WhatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8 text
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file was read but no line matched the export format.
    ///
    /// Either the file is not a WhatsApp chat export, or it uses a date
    /// layout this parser does not recognize.
    #[error("No messages found{}: not a recognized chat export", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Day/month order of the export dates could not be determined.
    ///
    /// The disambiguation heuristic compares how many distinct values appear
    /// in the first and second date fields across the whole file. When both
    /// counts are equal the order is genuinely ambiguous; force one with
    /// [`ParserConfig::with_date_order`](crate::config::ParserConfig::with_date_order).
    #[error("Ambiguous date order: {distinct_first} distinct first-field values vs {distinct_second} second-field values")]
    AmbiguousDateOrder {
        /// Distinct values seen in the first date field
        distinct_first: usize,
        /// Distinct values seen in the second date field
        distinct_second: usize,
    },

    /// Statistics were requested for a sender with zero messages.
    ///
    /// Average-based metrics are undefined over an empty message set, so
    /// aggregation refuses to run rather than producing NaN.
    #[error("No messages from sender '{sender}': averages are undefined")]
    NoMessagesForSender {
        /// The sender that had no messages
        sender: String,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing statistics as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WhatstatsError {
    /// Creates a no-messages error for a file.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        WhatstatsError::NoMessages { path }
    }

    /// Creates an ambiguous date-order error.
    pub fn ambiguous_date_order(distinct_first: usize, distinct_second: usize) -> Self {
        WhatstatsError::AmbiguousDateOrder {
            distinct_first,
            distinct_second,
        }
    }

    /// Creates an empty-sender error.
    pub fn no_messages_for(sender: impl Into<String>) -> Self {
        WhatstatsError::NoMessagesForSender {
            sender: sender.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WhatstatsError::Io(_))
    }

    /// Returns `true` if this is a no-messages error.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, WhatstatsError::NoMessages { .. })
    }

    /// Returns `true` if this is an ambiguous date-order error.
    pub fn is_ambiguous_date_order(&self) -> bool {
        matches!(self, WhatstatsError::AmbiguousDateOrder { .. })
    }

    /// Returns `true` if this is an empty-sender error.
    pub fn is_no_messages_for_sender(&self) -> bool {
        matches!(self, WhatstatsError::NoMessagesForSender { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
