//! Entry Formatter.
//!
//! Text is embedded verbatim: no trimming and no escaping of Markdown
//! delimiters.

use chrono::NaiveTime;

/// A single breadcrumb: what was done, optional details and a related file.
///
/// Empty `details` or `file_ref` are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    description: String,
    details: Option<String>,
    file_ref: Option<String>,
}

impl BreadcrumbEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            details: None,
            file_ref: None,
        }
    }

    /// Attach a continuation line.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = non_empty(details.into());
        self
    }

    /// Attach a related file path. It is a label only and never checked.
    pub fn with_file(mut self, file_ref: impl Into<String>) -> Self {
        self.file_ref = non_empty(file_ref.into());
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn file_ref(&self) -> Option<&str> {
        self.file_ref.as_deref()
    }

    /// Render the entry as it appears in the daily log.
    ///
    /// ```text
    /// - **09:15:42** (`src/main.go`): refactored startup sequence
    ///   split config loading into its own step
    /// ```
    pub fn format(&self, time: NaiveTime) -> String {
        let mut out = format!("- **{}**", time.format("%H:%M:%S"));
        if let Some(file) = &self.file_ref {
            out.push_str(&format!(" (`{}`)", file));
        }
        out.push_str(&format!(": {}\n", self.description));
        if let Some(details) = &self.details {
            out.push_str(&format!("  {}\n", details));
        }
        out
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
