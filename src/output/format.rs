//! Size, timestamp and entry line formatting

use std::fmt;

use chrono::{Local, TimeZone};

use crate::listing::Detail;
use crate::tree::Node;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

const TIME_FORMAT: &str = "%b %d %H:%M";

/// Rendered in place of a timestamp chrono cannot represent.
const UNKNOWN_TIME: &str = "??? ?? ??:??";

/// Format a size in bytes with 1024-based units and one decimal place.
///
/// `0` is special-cased to `"0 B"`. Values past the last unit stay in TB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Format epoch seconds as local time, e.g. `Jan 05 13:42`.
pub fn format_timestamp(secs: i64) -> String {
    format_timestamp_in(secs, &Local)
}

/// Format epoch seconds in the given timezone.
pub fn format_timestamp_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    tz.timestamp_opt(secs, 0)
        .earliest()
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Render one listing line for `node` shown as `label`.
pub fn format_entry(node: &Node, label: &str, detail: Detail) -> String {
    match detail {
        Detail::Brief => label.to_string(),
        Detail::Long => format!("{} {}", long_prefix(node), label),
    }
}

/// The metadata columns of a long line, without the label.
pub fn long_prefix(node: &Node) -> String {
    format!(
        "{} {} {}",
        node.permissions,
        format_size(node.size()),
        format_timestamp(node.mtime())
    )
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1), "1.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1073741824), "1.0 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_format_size_stops_at_largest_unit() {
        assert_eq!(format_size(1024u64.pow(5)), "1024.0 TB");
        assert!(format_size(u64::MAX).ends_with(" TB"));
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(format_timestamp_in(0, &Utc), "Jan 01 00:00");
        // 2024-01-05 13:42:00 UTC
        assert_eq!(format_timestamp_in(1704462120, &Utc), "Jan 05 13:42");
    }

    #[test]
    fn test_format_timestamp_fixed_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp_in(1704462120, &tz), "Jan 05 15:42");
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp_in(i64::MAX, &Utc), UNKNOWN_TIME);
    }

    #[test]
    fn test_format_entry_brief_is_label() {
        let node = Node::file("a.txt", "-rw-r--r--", 10);
        assert_eq!(format_entry(&node, "a.txt", Detail::Brief), "a.txt");
    }

    #[test]
    fn test_format_entry_long_columns() {
        let node = Node::file("a.txt", "-rw-r--r--", 2048).with_time(0);
        let line = format_entry(&node, "a.txt", Detail::Long);
        let expected = format!("-rw-r--r-- 2.0 KB {} a.txt", format_timestamp(0));
        assert_eq!(line, expected);
    }

    #[test]
    fn test_format_entry_long_directory_without_size() {
        let node = Node::dir("src", vec![]).with_permissions("drwxr-xr-x");
        let line = format_entry(&node, "src", Detail::Long);
        assert!(line.starts_with("drwxr-xr-x 0 B "), "{}", line);
    }
}
