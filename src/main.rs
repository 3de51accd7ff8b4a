//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsift::cli::Args;
use chatsift::config::{ContinuationMode, ParserConfig};
use chatsift::filter::{FilterConfig, apply_filters};
use chatsift::format::{OutputFormat, write_to_format};
use chatsift::output::OutputConfig;
use chatsift::processor::{ProcessingStats, merge_consecutive};
use chatsift::{ChatExportParser, ChatsiftError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        print_hint(&e);
        process::exit(1);
    }
}

/// Maps the two whole-parse failures to actionable guidance; everything else
/// speaks for itself.
fn print_hint(e: &ChatsiftError) {
    if e.is_empty_input() {
        eprintln!("   The file contains no text. Re-export the chat and try again.");
    } else if e.is_no_messages() {
        eprintln!("   No parseable messages. Check that the file is a WhatsApp chat export");
        eprintln!("   (\"Export chat\" → \"Without media\") and that the sender name matches exactly.");
    }
}

fn run() -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("📦 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    if let Some(ref from) = args.from {
        println!("👤 Sender:  {}", from);
    }

    // Build the parser configuration
    let mut parser_config = ParserConfig::new().with_min_content_chars(args.min_len);
    if args.keep_unmatched {
        parser_config = parser_config.with_continuations(ContinuationMode::Append);
        println!("📎 Mode:    Keeping unmatched lines");
    }

    // Build the post-parse filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    println!();

    // Step 1: Parse
    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let raw = fs::read_to_string(&args.input)?;
    let parser = ChatExportParser::with_config(parser_config);
    let parsed = parser.parse_report(&raw, args.from.as_deref())?;
    let parse_time = parse_start.elapsed();

    println!(
        "   Found {} messages from {} participants ({:.2}s)",
        parsed.total_messages,
        parsed.participants.len(),
        parse_time.as_secs_f64()
    );

    if args.report {
        println!();
        println!("📋 Report:");
        println!("   Range:        {}", parsed.date_range);
        println!("   Participants: {}", parsed.participants.join(", "));
        println!("   Preview:");
        for line in &parsed.preview {
            println!("     {}", line);
        }
        println!();
    }

    let original_count = parsed.total_messages;
    let messages = parsed.messages;

    // Step 2: Filter (BEFORE merge)
    let filtered = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filter_start = Instant::now();
        let filtered = apply_filters(messages, &filter_config);
        let filter_time = filter_start.elapsed();
        println!(
            "   {} messages after filtering ({:.2}s)",
            filtered.len(),
            filter_time.as_secs_f64()
        );
        filtered
    } else {
        messages
    };
    let filtered_count = filtered.len();

    // Step 3: Merge (unless disabled)
    let final_messages = if args.no_merge {
        println!("⏭️  Skipping merge (--no-merge)");
        filtered
    } else {
        println!("🔀 Merging consecutive messages...");
        let merge_start = Instant::now();
        let merged = merge_consecutive(filtered);
        let merge_time = merge_start.elapsed();
        println!(
            "   Compressed to {} entries ({:.1}% reduction, {:.2}s)",
            merged.len(),
            ProcessingStats::new(filtered_count, merged.len()).compression_ratio(),
            merge_time.as_secs_f64()
        );
        merged
    };

    // Step 4: Build output configuration
    let mut output_config = OutputConfig::new();
    if args.timestamps {
        output_config = output_config.with_timestamps();
    }
    if args.dates {
        output_config = output_config.with_dates();
    }

    // Step 5: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&final_messages, &output_path, lib_format, &output_config)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", original_count);
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", filtered_count);
    }
    println!("   Final:     {} entries", final_messages.len());

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = original_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatsift::cli::OutputFormat) -> String {
    if output != "sifted_chat.csv" {
        return output.to_string();
    }

    // Convert to library format for extension
    let lib_format: OutputFormat = format.into();
    format!("sifted_chat.{}", lib_format.extension())
}
