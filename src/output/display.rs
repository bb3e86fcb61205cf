//! Display functions for command results

use super::formatters::{group_units, score_bar};
use crate::commands::{
    BatchResult, EncodeResult, ImageDecodeResult, ImageEncodeResult, MatchReport, TableResult,
};
use crate::decoder::AutoDecoded;
use crate::picture::EncodedImageMetadata;
use colored::Colorize;

/// Print the result of encoding a message
pub fn print_encode_result(result: &EncodeResult, grouped: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Message: {}", result.plain_text.bright_white());
    println!("{}", "─".repeat(60).cyan());

    let cipher_text = if grouped {
        group_units(&result.cipher_text)
    } else {
        result.cipher_text.clone()
    };
    println!("\n{}", cipher_text.bright_yellow().bold());

    println!();
    match result.weekday {
        Some(day) => println!("   Day:    {} (shift {})", day.to_string().green(), day.shift()),
        None => println!("   Day:    {}", "none".dimmed()),
    }
    println!("   Shift:  {}", result.shift);
    match &result.table_code {
        Some(code) => println!("   Table:  {}", code.bright_magenta()),
        None => println!("   Table:  {}", "alphabet".dimmed()),
    }
}

/// Print the result of a decode
pub fn print_decode_result(result: &AutoDecoded) {
    println!("\n{}", "─".repeat(60).cyan());
    if result.text.is_empty() {
        println!("{}", "Nothing could be decoded".red().bold());
        return;
    }
    println!("{}", result.text.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let indication = result.indication();
    if !indication.is_empty() {
        println!("\n   {indication}");
    }
    println!(
        "   Score:  [{}] {}",
        score_bar(result.score, &result.text, 20).green(),
        result.score
    );
}

/// Print the result of matching against a key book
pub fn print_match_report(report: &MatchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "KEY MATCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Keys tried:  {} ({})",
        report.candidates_tried,
        if report.glued { "glued" } else { "day mode" }
    );
    println!("   Time taken:  {:.2}s", report.duration.as_secs_f64());

    let Some(best) = &report.best else {
        println!("\n{}", "❌ No known key decodes this message".red().bold());
        return;
    };

    println!(
        "\n{} {}",
        "✅ Written by".green().bold(),
        best.candidate.label.bright_yellow().bold()
    );
    println!("\n   {}", best.text().bright_white());
    let indication = best.decoded.indication();
    if !indication.is_empty() {
        println!("   {indication}");
    }
    println!("   Score: {}", best.score());
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in &result.entries {
        let text = if entry.decoded.score > 0 {
            entry.decoded.text.green()
        } else {
            entry.decoded.text.dimmed()
        };
        println!(
            "{:>5}  {}  {}",
            entry.line,
            text,
            entry.decoded.indication().dimmed()
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Lines decoded:    {}", result.entries.len());
    println!("   With known words: {}", result.recognized());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Lines/second:     {:.1}", result.lines_per_second);
}

/// Print a reference table
pub fn print_reference_table(result: &TableResult) {
    println!("\n{}", "═".repeat(60).cyan());
    let title = match &result.table_code {
        Some(code) => format!("TABLE {code}"),
        None => "ALPHABET TABLE".to_string(),
    };
    println!(
        " {} {}",
        title.bright_cyan().bold(),
        format!("(shift {})", result.shift).dimmed()
    );
    println!("{}", "═".repeat(60).cyan());

    for row in [&result.letters, &result.digits] {
        for chunk in row.chunks(9) {
            let cells: Vec<String> = chunk
                .iter()
                .map(|(symbol, unit)| format!("{}={}", symbol.to_string().bright_white(), unit))
                .collect();
            println!("   {}", cells.join("  "));
        }
        println!();
    }
}

fn print_metadata(metadata: &EncodedImageMetadata) {
    println!("   Version:  {}", metadata.version);
    println!("   Size:     {}x{}", metadata.width, metadata.height);
    println!("   Pixels:   {}", metadata.pixel_count);
    println!("   Encoded:  {}", metadata.encoding_date);
}

/// Print the result of encoding a picture
pub fn print_image_encode_result(result: &ImageEncodeResult) {
    println!("\n{}", "✅ Picture encoded".green().bold());
    print_metadata(&result.metadata);
    println!(
        "   JSON:     {} bytes (estimated {})",
        result.json_bytes, result.estimated_size
    );
}

/// Print the result of decoding a picture
pub fn print_image_decode_result(result: &ImageDecodeResult) {
    println!("\n{}", "✅ Picture decoded".green().bold());
    print_metadata(&result.metadata);
    if let Some(day) = result.day_offset.and_then(crate::core::Weekday::from_index) {
        println!("   Day:      {day}");
    }
    if result.secret_applied {
        println!("   Secret:   {}", "applied".yellow());
    }
}

/// Print the header of an encoded picture
pub fn print_image_metadata(metadata: &EncodedImageMetadata) {
    println!("\n{}", "Encoded picture".bright_cyan().bold());
    print_metadata(metadata);
    println!(
        "   JSON:     ~{}",
        crate::picture::estimate_json_size(metadata.width, metadata.height)
    );
}
