//! Configuration types for listings

use std::str::FromStr;

use crate::error::{Error, Result};

/// How much of each entry to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detail {
    /// Name only
    #[default]
    Brief,
    /// Permissions, size, modification time, then name
    Long,
}

/// Restricts a directory listing to one kind of child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    Dir,
    File,
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dir" => Ok(TypeFilter::Dir),
            "file" => Ok(TypeFilter::File),
            other => Err(Error::InvalidFilter(other.to_string())),
        }
    }
}

/// Configuration for a single listing.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    pub include_hidden: bool,
    pub reverse: bool,
    pub sort_by_time: bool,
    /// Filter value as given by the user. Only checked when a directory is
    /// listed, so a bad value never breaks a plain file lookup.
    pub type_filter: Option<String>,
    pub detail: Detail,
}

impl ListingConfig {
    /// Parse the type filter; an empty value means no filter.
    pub fn type_filter(&self) -> Result<Option<TypeFilter>> {
        match self.type_filter.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ListingConfig::default();
        assert!(!config.include_hidden);
        assert!(!config.reverse);
        assert!(!config.sort_by_time);
        assert_eq!(config.detail, Detail::Brief);
        assert_eq!(config.type_filter().unwrap(), None);
    }

    #[test]
    fn test_type_filter_parsing() {
        let mut config = ListingConfig {
            type_filter: Some("dir".to_string()),
            ..Default::default()
        };
        assert_eq!(config.type_filter().unwrap(), Some(TypeFilter::Dir));

        config.type_filter = Some("file".to_string());
        assert_eq!(config.type_filter().unwrap(), Some(TypeFilter::File));

        config.type_filter = Some(String::new());
        assert_eq!(config.type_filter().unwrap(), None);
    }

    #[test]
    fn test_type_filter_rejects_unknown() {
        let config = ListingConfig {
            type_filter: Some("socket".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.type_filter(),
            Err(Error::InvalidFilter(ref v)) if v == "socket"
        ));
    }
}
