//! Parser configuration types.
//!
//! This module provides [`ParserConfig`] for library usage, without any CLI
//! framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use whatstats::config::{DateOrder, ParserConfig};
//! use whatstats::parser::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_date_order(DateOrder::DayFirst)
//!     .with_placeholder("<attached: photo.jpg>");
//!
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Which of the two leading date fields is the day.
///
/// Exports write dates as `1/2/23` with no indication whether that is
/// January 2nd or February 1st. When not forced through configuration, the
/// parser decides by comparing distinct-value counts across the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `D/M/YY`: first field is the day.
    DayFirst,
    /// `M/D/YY`: first field is the month.
    MonthFirst,
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use whatstats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_normalize_placeholders(false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Force a date order instead of running the heuristic (default: `None`).
    ///
    /// Single-day exports always tie the heuristic; forcing an order is the
    /// only way to parse them.
    pub date_order: Option<DateOrder>,

    /// Replace automated placeholder bodies with empty text (default: true).
    pub normalize_placeholders: bool,

    /// Bodies treated as automated placeholders.
    pub placeholders: Vec<String>,
}

/// Placeholder bodies WhatsApp writes for non-text events.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &["<Media omitted>", "Missed voice call"];

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: None,
            normalize_placeholders: true,
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the date order, skipping the disambiguation heuristic.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = Some(order);
        self
    }

    /// Sets whether placeholder bodies are normalized to empty text.
    #[must_use]
    pub fn with_normalize_placeholders(mut self, normalize: bool) -> Self {
        self.normalize_placeholders = normalize;
        self
    }

    /// Adds a body string to treat as an automated placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, body: impl Into<String>) -> Self {
        self.placeholders.push(body.into());
        self
    }

    /// Returns `true` if `body` is a recognized automated placeholder.
    pub fn is_placeholder(&self, body: &str) -> bool {
        self.placeholders.iter().any(|p| p == body)
    }
}
