//! # whatstats CLI
//!
//! Command-line interface for the whatstats library. Prints statistics as
//! plain text or JSON; chart rendering is left to dedicated frontends.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use whatstats::cli::{Args, ReportFormat};
use whatstats::config::ParserConfig;
use whatstats::parser::ChatParser;
use whatstats::stats::sentiment::LexiconScorer;
use whatstats::stats::{ChatReport, SenderStats};
use whatstats::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    let mut config = ParserConfig::new();
    if let Some(order) = args.date_order {
        config = config.with_date_order(order.into());
    }

    let parser = ChatParser::with_config(config);
    let records = parser.parse(Path::new(&args.input))?;
    let scorer = LexiconScorer::new();

    match args.sender {
        Some(ref sender) => {
            let stats = SenderStats::aggregate(&records, sender, &scorer)?;
            match args.format {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                ReportFormat::Text => print_sender(&stats, args.top),
            }
        }
        None => {
            let report = ChatReport::build(&records, &scorer)?;
            match args.format {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                ReportFormat::Text => print_report(&report, args.top),
            }
        }
    }

    Ok(())
}

fn print_sender(stats: &SenderStats, top: usize) {
    println!("{}", stats.sender.to_uppercase());
    println!("{}", "=".repeat(32));
    println!("Messages sent:   {}", stats.num_messages);
    println!("Avg msg length:  {:.2} words", stats.avg_message_len);
    println!(
        "Longest msg:     {} chars",
        stats.longest_message.chars().count()
    );
    println!("Words sent:      {}", stats.num_words);
    println!("Emojis sent:     {}", stats.num_emojis);

    print_ranked("Top words", &stats.word_freq.most_common(top));
    print_ranked("Top emojis", &stats.emoji_freq.most_common(top));

    if let Some((hour, _)) = stats.hour_freq.top() {
        println!("Most active at:  {}", hour);
    }
    if let Some(ref word) = stats.most_negative_word {
        println!("Most negative:   {}", word);
    }
    println!("Avg sentiment:   {:.3}", stats.avg_polarity);
}

fn print_report(report: &ChatReport, top: usize) {
    for stats in &report.senders {
        print_sender(stats, top);
        println!();
    }

    println!("CHAT STATISTICS");
    println!("{}", "=".repeat(32));
    println!("Messages sent:   {}", report.total_messages);
    println!("Words sent:      {}", report.total_words);
    println!("Emojis sent:     {}", report.total_emojis);
    if let Some(ref day) = report.most_active_day {
        println!("Most active day: {}", day);
    }
    println!("Avg sentiment:   {:.3}", report.avg_polarity);
    println!("(Positive > 0 > Negative)");
}

fn print_ranked(title: &str, entries: &[(String, u64)]) {
    if entries.is_empty() {
        return;
    }
    println!("{}:", title);
    for (key, count) in entries {
        println!("  {} ({})", key, count);
    }
}
