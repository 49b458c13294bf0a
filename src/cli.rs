//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - output format options
//! - [`DateOrderArg`] - day/month order override

use clap::{Parser, ValueEnum};

use crate::config::DateOrder;

/// Analyze a WhatsApp chat export: word/emoji frequencies, activity
/// buckets, and sentiment per sender.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    whatstats chat_export.txt
    whatstats chat_export.txt --sender Alice
    whatstats chat_export.txt --format json
    whatstats chat_export.txt --top 10 --date-order day-first")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Report a single sender instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// How many entries to show per frequency list
    #[arg(short, long, default_value_t = 5, value_name = "N")]
    pub top: usize,

    /// Force the date order instead of auto-detecting it
    #[arg(long, value_enum, value_name = "ORDER")]
    pub date_order: Option<DateOrderArg>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Plain key/value lines and ranked lists
    #[default]
    Text,

    /// The full report as a JSON document
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI mirror of [`DateOrder`] so the library type stays clap-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DateOrderArg {
    /// D/M/YY: first date field is the day
    DayFirst,
    /// M/D/YY: first date field is the month
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> Self {
        match arg {
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}
