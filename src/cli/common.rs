//! Output helpers shared by the CLI commands.

use crate::api::OutlineRecord;
use crate::utils::{relative_time, strip_html};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

/// Plain-text rendering of one record for terminal output
pub fn format_outline(record: &OutlineRecord, now: DateTime<Utc>) -> String {
    let mut out = format!("#{} {}\n", record.id, record.name);
    let _ = writeln!(out, "   Credit: {}", record.credit);
    if let Some(image) = record.image.as_deref().filter(|i| !i.is_empty()) {
        let _ = writeln!(out, "   Image: {}", image);
    }
    let overview = strip_html(&record.overview);
    if !overview.is_empty() {
        let _ = writeln!(out, "   Overview: {}", overview);
    }
    if let Some(created) = record.created_date {
        let _ = writeln!(
            out,
            "   Created: {} ({})",
            created.format("%Y-%m-%d %H:%M"),
            relative_time(created, now)
        );
    }
    out
}
