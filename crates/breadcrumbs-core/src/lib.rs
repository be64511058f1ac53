//! Breadcrumbs Core Library
//!
//! Records short, timestamped journal entries ("breadcrumbs") into per-day,
//! append-only Markdown files.
//!
//! ## Layout
//!
//! ```text
//! <tool dir>/
//! ├── breadcrumb          # the tool itself
//! ├── 250104.md           # one file per calendar day (YYMMDD)
//! └── 250105.md
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use breadcrumbs_core::{Appender, BreadcrumbEntry};
//!
//! # fn main() -> Result<(), breadcrumbs_core::BreadcrumbError> {
//! let appender = Appender::for_tool()?;
//! let entry = BreadcrumbEntry::new("refactored startup sequence")
//!     .with_details("split config loading into its own step")
//!     .with_file("src/main.go");
//!
//! let outcome = appender.append(&entry)?;
//! eprintln!("Logged to {}", outcome.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! Writers are not coordinated. Concurrent first writers of a day may each
//! emit a header.

pub mod appender;
pub mod clock;
pub mod config;
pub mod entry;
pub mod error;
pub mod header;
pub mod path;

// Re-exports
pub use appender::{AppendOutcome, Appender};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::BreadcrumbEntry;
pub use error::{BreadcrumbError, BreadcrumbResult};
pub use path::PathResolver;
