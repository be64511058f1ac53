//! Header Policy: a daily log gets one heading, written when it is created.
//!
//! The existence check and the later append are separate steps. Two
//! first-of-the-day writers racing each other can both emit a header; the
//! tool assumes a single writer.

use std::path::Path;

use chrono::NaiveDate;

use crate::config::HEADER_TITLE;

/// Whether a header must precede the next entry written to `path`.
pub fn needs_header(path: &Path) -> bool {
    !path.exists()
}

/// Heading block for a new daily log: `# Breadcrumbs YYYY-MM-DD` and a blank line.
pub fn format_header(date: NaiveDate) -> String {
    format!("# {} {}\n\n", HEADER_TITLE, date.format("%Y-%m-%d"))
}
