//! Display helpers for enum slugs shown in tables, legends and tooltips.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// First character of every word
    static ref WORD_START_REGEX: Regex = Regex::new(r"\b\w").unwrap();
}

/// `in_progress` -> `In Progress`
pub fn title_case_slug(slug: &str) -> String {
    let spaced = slug.replace('_', " ");
    WORD_START_REGEX
        .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Table cell text for a slug: only the first underscore becomes a space
/// (`public_property_damage` -> `public property_damage`).
pub fn table_slug(slug: &str) -> String {
    slug.replacen('_', " ", 1)
}

/// Coordinate text shown on report cards
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}

/// Byte limit as shown to users: whole megabytes or kilobytes when exact
pub fn format_byte_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    match bytes {
        b if b >= MB && b % MB == 0 => format!("{}MB", b / MB),
        b if b >= KB && b % KB == 0 => format!("{}KB", b / KB),
        b => format!("{} bytes", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("in_progress"), "In Progress");
        assert_eq!(title_case_slug("resolved"), "Resolved");
        assert_eq!(
            title_case_slug("public_property_damage"),
            "Public Property Damage"
        );
    }

    #[test]
    fn test_table_slug_replaces_first_underscore_only() {
        assert_eq!(table_slug("road_damage"), "road damage");
        assert_eq!(table_slug("public_property_damage"), "public property_damage");
        assert_eq!(table_slug("other"), "other");
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates(30.045, 31.238), "30.0450, 31.2380");
        assert_eq!(format_coordinates(30.04651, -31.23929), "30.0465, -31.2393");
    }

    #[test]
    fn test_format_byte_size() {
        assert_eq!(format_byte_size(10 * 1024 * 1024), "10MB");
        assert_eq!(format_byte_size(1536 * 1024), "1536KB");
        assert_eq!(format_byte_size(1000), "1000 bytes");
    }
}
