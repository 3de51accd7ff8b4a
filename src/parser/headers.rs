//! Recognized timestamp-header formats and date normalization.
//!
//! WhatsApp exports vary by platform and locale. Each [`HeaderFormat`]
//! couples a regex with its own capture-group extraction, so supporting a
//! new export variant means adding one enum entry, not forking the parser.
//!
//! Supported formats, in match order:
//! - Bracketed, slash-separated date, optional AM/PM:
//!   `[1/2/24, 09:15:00 AM] Sender: Message`
//! - Bracketed, dot-separated date: `[15.01.24, 10:30:45] Sender: Message`
//! - Unbracketed, dash-separated: `15/1/2024, 10:30 - Sender: Message`
//!
//! Bracketed formats are tried before the dash format; a dash-formatted line
//! can never be mistaken for a bracketed one or vice versa, but the ordering
//! is kept explicit so new, looser variants slot in behind stricter ones.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Captures;

/// A recognized timestamp-header variant.
///
/// Date components are day/month/year in every variant. Exports never use
/// month-first ordering, regardless of device locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// Bracketed with slashes and an optional 12-hour marker.
    /// Example: `[1/2/24, 09:15:00 AM] Mom: Good morning!`
    BracketedSlash,
    /// Bracketed with dots, 24-hour clock.
    /// Example: `[15.01.24, 10:30:45] Alice: Hello`
    BracketedDot,
    /// Unbracketed, dash before the sender, minute precision.
    /// Example: `15/1/2024, 10:30 - Alice: Hello`
    DashSlash,
}

/// The fields a header match yields. Which capture group holds which field
/// differs per format; [`HeaderFormat::extract`] knows the mapping.
#[derive(Debug)]
pub(crate) struct LineParts<'t> {
    /// The full `"date, time"` substring, verbatim from the line.
    pub raw_timestamp: &'t str,
    pub date_str: &'t str,
    pub time_str: &'t str,
    /// 12-hour period marker (`AM`/`PM`), when the format carries one.
    pub period: Option<&'t str>,
    pub sender: &'t str,
    pub content: &'t str,
}

impl HeaderFormat {
    /// Returns the regex pattern for this header format.
    pub fn pattern(self) -> &'static str {
        match self {
            // [1/2/24, 09:15:00 AM] Sender: Message
            HeaderFormat::BracketedSlash => {
                r"^\[((\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)(?:\s?([APap][Mm]))?)\]\s([^:]+):\s?(.*)"
            }
            // [15.01.24, 10:30:45] Sender: Message
            HeaderFormat::BracketedDot => {
                r"^\[((\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?))\]\s([^:]+):\s?(.*)"
            }
            // 15/1/2024, 10:30 - Sender: Message
            HeaderFormat::DashSlash => {
                r"^((\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?))\s-\s([^:]+):\s?(.*)"
            }
        }
    }

    /// Extracts the line fields from this format's captures.
    ///
    /// The group layout is format-specific: only `BracketedSlash` carries a
    /// period-marker group, which shifts the sender/content indices.
    pub(crate) fn extract<'t>(self, caps: &Captures<'t>) -> LineParts<'t> {
        match self {
            HeaderFormat::BracketedSlash => LineParts {
                raw_timestamp: caps.get(1).map_or("", |m| m.as_str()),
                date_str: caps.get(2).map_or("", |m| m.as_str()),
                time_str: caps.get(3).map_or("", |m| m.as_str()),
                period: caps.get(4).map(|m| m.as_str()),
                sender: caps.get(5).map_or("", |m| m.as_str()),
                content: caps.get(6).map_or("", |m| m.as_str()),
            },
            HeaderFormat::BracketedDot | HeaderFormat::DashSlash => LineParts {
                raw_timestamp: caps.get(1).map_or("", |m| m.as_str()),
                date_str: caps.get(2).map_or("", |m| m.as_str()),
                time_str: caps.get(3).map_or("", |m| m.as_str()),
                period: None,
                sender: caps.get(4).map_or("", |m| m.as_str()),
                content: caps.get(5).map_or("", |m| m.as_str()),
            },
        }
    }

    /// Returns all format variants in match order.
    pub fn all() -> &'static [HeaderFormat] {
        &[
            HeaderFormat::BracketedSlash,
            HeaderFormat::BracketedDot,
            HeaderFormat::DashSlash,
        ]
    }
}

/// Normalizes a raw date/time pair into a point in time.
///
/// Rules:
/// - Date components are day/month/year.
/// - Two-digit years map to `2000 + year`.
/// - Seconds default to 0 when the time has minute precision.
/// - `PM` adds 12 hours unless the hour is already 12; `AM` maps hour 12
///   to 0.
///
/// Returns `None` on any non-numeric or out-of-range field. This is a
/// per-message soft failure; it never propagates to the caller.
pub(crate) fn parse_date(
    date_str: &str,
    time_str: &str,
    period: Option<&str>,
) -> Option<DateTime<Utc>> {
    let mut date_parts = date_str.split(['/', '.']);
    let day: u32 = date_parts.next()?.trim().parse().ok()?;
    let month: u32 = date_parts.next()?.trim().parse().ok()?;
    let year: i32 = date_parts.next()?.trim().parse().ok()?;
    if date_parts.next().is_some() {
        return None;
    }
    let year = if year < 100 { 2000 + year } else { year };

    let mut time_parts = time_str.split(':');
    let mut hour: u32 = time_parts.next()?.trim().parse().ok()?;
    let minute: u32 = time_parts.next()?.trim().parse().ok()?;
    let second: u32 = match time_parts.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };

    match period.map(str::to_ascii_uppercase).as_deref() {
        Some("PM") if hour != 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        Some("AM" | "PM") | None => {}
        Some(_) => return None,
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let datetime = date.and_hms_opt(hour, minute, second)?;
    Some(datetime.and_utc())
}
