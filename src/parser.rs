//! WhatsApp TXT export parser.
//!
//! Exports are line-oriented: `M/D/YY, H:MM AM - Sender: body` (or with the
//! day written first, depending on the phone's locale). Lines that do not
//! match this shape are dropped; continuation lines of multiline messages are
//! not merged, each matched line is one record.
//!
//! Day/month order is disambiguated over the whole file: the field with more
//! distinct values must be the day. A tie is reported as
//! [`WhatstatsError::AmbiguousDateOrder`] unless the order is forced through
//! [`ParserConfig`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{DateOrder, ParserConfig};
use crate::error::{Result, WhatstatsError};
use crate::Message;

/// One message line: date, time, meridiem, sender, body.
///
/// The meridiem may sit flush against the time (`10:05AM`) or be separated
/// by a space.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s(\d{1,2}:\d{2})\s?([AaPp][Mm])\s-\s([^:]+):\s(.*)$")
        .expect("line pattern is valid")
});

/// Candidate `chrono` format strings for a date order.
///
/// Exports use 2-digit years; 4-digit variants are accepted for robustness.
fn datetime_formats(order: DateOrder) -> &'static [&'static str] {
    match order {
        DateOrder::DayFirst => &["%d/%m/%y %I:%M %p", "%d/%m/%Y %I:%M %p"],
        DateOrder::MonthFirst => &["%m/%d/%y %I:%M %p", "%m/%d/%Y %I:%M %p"],
    }
}

/// A matched export line before date-order resolution.
#[derive(Debug)]
struct RawLine<'a> {
    first: u32,
    second: u32,
    year: &'a str,
    time: &'a str,
    meridiem: &'a str,
    sender: &'a str,
    body: &'a str,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use whatstats::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let messages = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), whatstats::WhatstatsError>(())
/// ```
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file into message records.
    ///
    /// # Errors
    ///
    /// - [`WhatstatsError::Io`] when the file cannot be read
    /// - [`WhatstatsError::NoMessages`] when no line matches the export format
    /// - [`WhatstatsError::AmbiguousDateOrder`] when day/month order ties
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        self.parse_content(&content, Some(path.to_path_buf()))
    }

    /// Parses export text already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.parse_content(content, None)
    }

    fn parse_content(&self, content: &str, path: Option<PathBuf>) -> Result<Vec<Message>> {
        let raw: Vec<RawLine<'_>> = content.lines().filter_map(match_line).collect();

        if raw.is_empty() {
            return Err(WhatstatsError::no_messages(path));
        }

        let order = match self.config.date_order {
            Some(order) => order,
            None => detect_date_order(raw.iter().map(|r| (r.first, r.second)))?,
        };

        let mut messages = Vec::with_capacity(raw.len());
        for line in &raw {
            // Dates invalid under the detected order are best-effort dropped,
            // same as lines that never matched.
            let Some(timestamp) = parse_timestamp(line, order) else {
                continue;
            };

            let body = if self.config.normalize_placeholders && self.config.is_placeholder(line.body)
            {
                ""
            } else {
                line.body
            };

            messages.push(Message::new(timestamp, line.sender.trim(), body));
        }

        if messages.is_empty() {
            return Err(WhatstatsError::no_messages(path));
        }

        Ok(messages)
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

fn match_line(line: &str) -> Option<RawLine<'_>> {
    let caps = LINE_RE.captures(line)?;
    Some(RawLine {
        first: caps.get(1)?.as_str().parse().ok()?,
        second: caps.get(2)?.as_str().parse().ok()?,
        year: caps.get(3)?.as_str(),
        time: caps.get(4)?.as_str(),
        meridiem: caps.get(5)?.as_str(),
        sender: caps.get(6)?.as_str(),
        body: caps.get(7)?.as_str(),
    })
}

/// Decides the date order from the first two numeric fields of every matched
/// date.
///
/// The day field cycles faster than the month field in any realistic chat
/// span, so the field with strictly more distinct values is the day. Equal
/// counts leave the order undecidable.
pub fn detect_date_order(fields: impl IntoIterator<Item = (u32, u32)>) -> Result<DateOrder> {
    let mut first: HashSet<u32> = HashSet::new();
    let mut second: HashSet<u32> = HashSet::new();

    for (a, b) in fields {
        first.insert(a);
        second.insert(b);
    }

    match first.len().cmp(&second.len()) {
        std::cmp::Ordering::Greater => Ok(DateOrder::DayFirst),
        std::cmp::Ordering::Less => Ok(DateOrder::MonthFirst),
        std::cmp::Ordering::Equal => Err(WhatstatsError::ambiguous_date_order(
            first.len(),
            second.len(),
        )),
    }
}

fn parse_timestamp(line: &RawLine<'_>, order: DateOrder) -> Option<NaiveDateTime> {
    let datetime_str = format!(
        "{}/{}/{} {} {}",
        line.first,
        line.second,
        line.year,
        line.time,
        line.meridiem.to_uppercase()
    );

    for format in datetime_formats(order) {
        if let Ok(ts) = NaiveDateTime::parse_from_str(&datetime_str, format) {
            return Some(ts);
        }
    }

    None
}
