//! Pure display-formatting helpers. No clocks except where injected, no
//! allocation beyond the returned strings, nothing here can fail loudly:
//! bad input degrades to a placeholder string instead of an error.

use chrono::{DateTime, Utc};
use repovista_api::LanguageBreakdown;

use crate::models::LanguagePercentage;

const SIZE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Per-language percentage breakdown, in the input map's order.
///
/// Returns an empty vec for an empty map or an all-zero map rather than
/// dividing by zero.
pub fn language_percentages(languages: &LanguageBreakdown) -> Vec<LanguagePercentage> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }

    languages
        .iter()
        .map(|(language, count)| LanguagePercentage {
            language: language.clone(),
            percentage: format!("{:.2}", *count as f64 / total as f64 * 100.0),
        })
        .collect()
}

/// Render a kilobyte count with the largest fitting size unit.
///
/// The mantissa is rounded to `decimals` places and trailing zeros are
/// dropped, so 1.0 KB prints as "1 KB". Exactly zero short-circuits to
/// "0 Bytes" since there is no unit for a zero logarithm.
pub fn humanize_kilobytes(kilobytes: f64, decimals: usize) -> String {
    let bytes = kilobytes * 1024.0;
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ln() / 1024_f64.ln()).floor().max(0.0) as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes / 1024_f64.powi(exponent as i32);

    format!(
        "{} {}",
        trim_trailing_zeros(&format!("{value:.decimals$}")),
        SIZE_UNITS[exponent]
    )
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Bucket a timestamp's age into a friendly relative string.
pub fn relative_time(timestamp: &str) -> String {
    relative_time_at(timestamp, Utc::now())
}

/// Same as [`relative_time`] with the current instant injected, which is
/// what the tests use.
pub fn relative_time_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(date) = DateTime::parse_from_rfc3339(timestamp) else {
        return "Invalid Date".to_string();
    };

    let seconds = (now - date.with_timezone(&Utc)).num_seconds();
    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = seconds / SECONDS_PER_HOUR;
    let days = seconds / SECONDS_PER_DAY;

    // A month out, the exact date reads better than "47 days ago"
    if days >= 30 {
        return absolute_date(timestamp);
    }

    if days > 0 {
        return plural(days, "day");
    }
    if hours > 0 {
        return plural(hours, "hour");
    }
    if minutes > 0 {
        return plural(minutes, "minute");
    }

    "Just now".to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Render a timestamp as "{Month} {day}, {year}".
///
/// Unparseable input yields the literal "Invalid Date", mirroring what a
/// browser Date would have shown, so views never have to handle an error.
pub fn absolute_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.with_timezone(&Utc).format("%B %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Trim, split on underscores/hyphens/whitespace runs, and capitalize each
/// word. Used for license keys and repo-type labels.
pub fn title_case(input: &str) -> String {
    input
        .trim()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
