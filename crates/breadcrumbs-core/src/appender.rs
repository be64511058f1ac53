//! Appender: writes one breadcrumb into today's daily log.
//!
//! Each call opens the log in create+append mode, writes the header (first
//! entry of the day only) and the entry, flushes, and closes the file. No
//! handle or lock outlives the call, and nothing is rolled back if a write
//! fails halfway.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::entry::BreadcrumbEntry;
use crate::error::{BreadcrumbError, BreadcrumbResult};
use crate::header;
use crate::path::PathResolver;

/// What a successful append did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Daily log the entry went to
    pub path: PathBuf,
    /// Whether this call created the log and wrote its header
    pub header_written: bool,
    /// Instant the entry was stamped with
    pub timestamp: NaiveDateTime,
}

/// Appends breadcrumbs to day-bucketed log files.
#[derive(Debug, Clone)]
pub struct Appender<C = SystemClock> {
    resolver: PathResolver,
    clock: C,
}

impl Appender<SystemClock> {
    /// Appender writing next to the running tool, stamped by the system clock.
    pub fn for_tool() -> BreadcrumbResult<Self> {
        Ok(Self::new(PathResolver::for_tool()?, SystemClock))
    }
}

impl<C: Clock> Appender<C> {
    pub fn new(resolver: PathResolver, clock: C) -> Self {
        Self { resolver, clock }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Path of the log the next append would write to.
    pub fn current_path(&self) -> PathBuf {
        self.resolver.resolve(self.clock.now().date())
    }

    /// Append `entry` to today's log, creating it with a header if needed.
    pub fn append(&self, entry: &BreadcrumbEntry) -> BreadcrumbResult<AppendOutcome> {
        let now = self.clock.now();
        let path = self.resolver.resolve(now.date());
        let header_written = header::needs_header(&path);

        debug!(path = %path.display(), header_written, "Appending breadcrumb");

        let mut block = String::new();
        if header_written {
            block.push_str(&header::format_header(now.date()));
        }
        block.push_str(&entry.format(now.time()));

        if let Err(e) = write_block(&path, &block) {
            warn!(path = %path.display(), error = %e, "Breadcrumb append failed");
            return Err(BreadcrumbError::append(path, e));
        }

        debug!(bytes = block.len(), "Breadcrumb written");

        Ok(AppendOutcome {
            path,
            header_written,
            timestamp: now,
        })
    }
}

fn write_block(path: &Path, block: &str) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(block.as_bytes())?;
    writer.flush()
}
