//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, ReportFormat};
use chatlens::parser::parse_with_outcome;
use chatlens::report::{Report, ReportConfig};
use chatlens::stats::{FilterConfig, apply_filters};
use chatlens::{ChatlensError, Message};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref author) = args.author {
        filter_config = filter_config.with_author(author.clone());
    }
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
    }

    let text = fs::read_to_string(&args.input)?;
    let outcome = parse_with_outcome(&text);
    let total_parsed = outcome.messages.len();
    let messages = apply_filters(outcome.messages, &filter_config);

    // An empty set is a valid outcome; show it explicitly instead of a
    // report full of zeros.
    if messages.is_empty() {
        if filter_config.is_active() && total_parsed > 0 {
            println!("No messages match the given filters.");
        } else {
            println!("No messages could be parsed from {}.", args.input);
            println!("Make sure the file is a WhatsApp chat export (.txt).");
        }
        return Ok(());
    }

    let report_config = ReportConfig::new()
        .with_top_words(args.top_words)
        .with_top_emojis(args.top_emojis)
        .with_top_authors(args.top_authors);
    let report = Report::build(&messages, &report_config);

    match args.format {
        ReportFormat::Text => {
            print_text_report(&args, &report, &messages, total_parsed, outcome.dropped_lines);
        }
        #[cfg(feature = "json-output")]
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_text_report(
    args: &Args,
    report: &Report,
    messages: &[Message],
    total_parsed: usize,
    dropped_lines: usize,
) {
    println!("📊 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input);
    if let Some(ref author) = args.author {
        println!("👤 Author:   {author}");
    }
    if let Some(ref after) = args.after {
        println!("📅 After:    {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:   {before}");
    }
    println!("   Parsed {total_parsed} messages ({dropped_lines} lines dropped)");
    println!();

    let o = &report.overview;
    println!("Overview");
    println!("   Messages:  {}", o.messages);
    println!("   Words:     {}", o.words);
    println!("   Media:     {}", o.media);
    println!("   Deleted:   {}", o.deleted);
    println!("   Links:     {}", o.links);
    println!("   Emojis:    {}", o.emojis);

    // Ranking one author against themselves is noise; skip it.
    if args.author.is_none() {
        println!();
        println!("Busiest participants");
        for entry in &report.busiest_authors {
            println!(
                "   {:<20} {:>6} messages  ({:>5.2}%)",
                entry.author, entry.messages, entry.percent
            );
        }
    }

    println!();
    println!("Most common words");
    for (word, count) in &report.top_words {
        println!("   {word:<20} {count:>6}");
    }

    println!();
    println!("Top emojis");
    if report.top_emojis.is_empty() {
        println!("   (none found)");
    } else {
        for (emoji, count) in &report.top_emojis {
            println!("   {emoji}  {count:>6}");
        }
    }

    if !report.links.is_empty() {
        println!();
        println!("Shared links");
        for link in &report.links {
            println!("   {link}");
        }
    }

    println!();
    println!("Daily timeline");
    for (date, count) in &report.daily_timeline {
        println!("   {date}  {count:>6}");
    }

    println!();
    println!("Monthly activity");
    for (month, count) in &report.monthly_activity {
        println!("   {month:<12} {count:>6}");
    }

    println!();
    println!("Weekly activity");
    for (weekday, count) in &report.weekday_activity {
        println!("   {weekday:<12} {count:>6}");
    }

    println!();
    println!("Hour-by-weekday heatmap (rows Monday..Sunday, columns 0..23)");
    for (row, (weekday, _)) in report
        .hourly_heatmap
        .iter()
        .zip(&report.weekday_activity)
    {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>3}")).collect();
        println!("   {:<10}{}", &weekday[..3], cells.join(" "));
    }

    println!();
    println!("✅ Analyzed {} messages", messages.len());
}
