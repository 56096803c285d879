//! Day normalization.
//!
//! Maps a raw day token to a canonical [`Day`]. A `None` result means the
//! token named no day; callers treat it as "applies to all days", never as a
//! specific default.

use crate::models::Day;

/// Exact-match table. Order matters for the prefix pass below.
///
/// `t` resolves to Tuesday and `s` to Saturday.
const DAY_TOKENS: &[(&str, Day)] = &[
    ("sunday", Day::Sunday),
    ("monday", Day::Monday),
    ("tuesday", Day::Tuesday),
    ("wednesday", Day::Wednesday),
    ("thursday", Day::Thursday),
    ("friday", Day::Friday),
    ("saturday", Day::Saturday),
    ("sun", Day::Sunday),
    ("su", Day::Sunday),
    ("mon", Day::Monday),
    ("tue", Day::Tuesday),
    ("tues", Day::Tuesday),
    ("wed", Day::Wednesday),
    ("thu", Day::Thursday),
    ("thurs", Day::Thursday),
    ("fri", Day::Friday),
    ("sat", Day::Saturday),
    ("m", Day::Monday),
    ("t", Day::Tuesday),
    ("w", Day::Wednesday),
    ("th", Day::Thursday),
    ("f", Day::Friday),
    ("s", Day::Saturday),
    ("0", Day::Sunday),
    ("1", Day::Monday),
    ("2", Day::Tuesday),
    ("3", Day::Wednesday),
    ("4", Day::Thursday),
    ("5", Day::Friday),
    ("6", Day::Saturday),
    ("7", Day::Sunday),
];

/// Normalizes a raw day token.
///
/// Tries, in order: an exact match against names, abbreviations, single
/// letters and weekday digits (`0` and `7` are both Sunday); a prefix match
/// against any multi-character entry; and finally a full day name anywhere in
/// the text.
///
/// # Example
///
/// ```
/// use schedule_import::models::Day;
/// use schedule_import::normalize::normalize_day;
///
/// assert_eq!(normalize_day("Tues"), Some(Day::Tuesday));
/// assert_eq!(normalize_day("Thursday, June 15"), Some(Day::Thursday));
/// assert_eq!(normalize_day("7"), Some(Day::Sunday));
/// assert_eq!(normalize_day("holiday"), None);
/// ```
pub fn normalize_day(raw: &str) -> Option<Day> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }

    if let Some((_, day)) = DAY_TOKENS.iter().find(|(key, _)| *key == token) {
        return Some(*day);
    }

    if let Some((_, day)) = DAY_TOKENS
        .iter()
        .filter(|(key, _)| key.len() > 1)
        .find(|(key, _)| token.starts_with(key))
    {
        return Some(*day);
    }

    Day::ALL
        .into_iter()
        .find(|day| token.contains(day.as_str()))
}
