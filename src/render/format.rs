//! Shared formatting helpers used by every template.
//!
//! Date formatting in particular is a correctness-sensitive seam: all four
//! templates and the export path must format identically, so it lives here
//! once and is never reimplemented per template.

use crate::model::PersonalInfo;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a free-form date token for display.
///
/// `"YYYY-MM"` renders as `"{MonthAbbrev} {YYYY}"`, bare `"YYYY"` renders
/// as-is, and empty renders empty. Anything unrecognized passes through
/// unchanged; date tokens are free text, not validated dates.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match date.split_once('-') {
        None => date.to_string(),
        Some((year, month)) => match month.parse::<usize>() {
            Ok(m) if (1..=12).contains(&m) => format!("{} {}", MONTHS[m - 1], year),
            _ => date.to_string(),
        },
    }
}

/// The date span of an experience entry. A current entry always reads
/// `"... – Present"`, regardless of what the stored end date contains.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end_marker = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    format!("{} – {}", format_date(start), end_marker)
}

/// Non-empty contact fields in display order: email, phone, location,
/// website. Templates decide the separator/icon treatment themselves.
pub fn contact_items(info: &PersonalInfo) -> Vec<&str> {
    [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.website.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect()
}

/// Translate a `#rrggbb` accent into an `rgba(...)` tint. Malformed input
/// degrades to black at the given alpha rather than failing the render.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let clean = hex.trim_start_matches('#');
    let clean = if clean.len() == 6 { clean } else { "" };
    let channel = |range: std::ops::Range<usize>| -> u8 {
        clean
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "rgba({}, {}, {}, {})",
        channel(0..2),
        channel(2..4),
        channel(4..6),
        alpha
    )
}
