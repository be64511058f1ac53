//! Process-wide configuration.
//!
//! The log directory is the directory holding the tool itself. It is read once
//! at startup and passed explicitly to [`PathResolver`](crate::PathResolver).

use std::path::PathBuf;

use crate::error::{BreadcrumbError, BreadcrumbResult};

/// Extension of every daily log file.
pub const LOG_EXTENSION: &str = "md";

/// Title used in the heading of a freshly created daily log.
pub const HEADER_TITLE: &str = "Breadcrumbs";

/// Directory containing the running executable.
pub fn tool_dir() -> BreadcrumbResult<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| {
            BreadcrumbError::ToolLocation(format!("{} has no parent directory", exe.display()))
        })
}
