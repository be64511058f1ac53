//! Path Resolver: maps a calendar day to its daily log file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::{self, LOG_EXTENSION};
use crate::error::BreadcrumbResult;

/// Resolves daily log paths under a fixed base directory.
///
/// File names are `YYMMDD.md`: two-digit year, month and day with no
/// separators. Resolution is a pure function of the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a resolver rooted at the directory holding the running tool.
    pub fn for_tool() -> BreadcrumbResult<Self> {
        Ok(Self::new(config::tool_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File name of the log for `date`, e.g. `250105.md`.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}.{}", date.format("%y%m%d"), LOG_EXTENSION)
    }

    /// Full path of the log for `date`.
    pub fn resolve(&self, date: NaiveDate) -> PathBuf {
        self.base_dir.join(self.file_name(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_is_two_digit_ymd() {
        let resolver = PathResolver::new("/var/breadcrumbs");

        assert_eq!(resolver.file_name(day(2025, 1, 5)), "250105.md");
        assert_eq!(resolver.file_name(day(2009, 11, 30)), "091130.md");
    }

    #[test]
    fn test_resolve_joins_base_dir() {
        let resolver = PathResolver::new("/var/breadcrumbs");

        assert_eq!(
            resolver.resolve(day(2025, 1, 5)),
            PathBuf::from("/var/breadcrumbs/250105.md")
        );
    }

    #[test]
    fn test_same_day_same_path() {
        let resolver = PathResolver::new("logs");

        assert_eq!(
            resolver.resolve(day(2025, 3, 14)),
            resolver.resolve(day(2025, 3, 14))
        );
    }

    #[test]
    fn test_different_days_different_paths() {
        let resolver = PathResolver::new("logs");

        assert_ne!(
            resolver.resolve(day(2025, 3, 14)),
            resolver.resolve(day(2025, 3, 15))
        );
    }

    #[test]
    fn test_for_tool_uses_executable_dir() {
        let resolver = PathResolver::for_tool().unwrap();
        let exe = std::env::current_exe().unwrap();

        assert_eq!(resolver.base_dir(), exe.parent().unwrap());
    }
}
