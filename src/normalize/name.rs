//! Employee name sanitizing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_NUMBER: Regex = Regex::new(r"\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}")
        .expect("Failed to compile PHONE_NUMBER regex");
    static ref PHONE_FRAGMENT: Regex =
        Regex::new(r"\d{3}\s*-\s*\d{4}").expect("Failed to compile PHONE_FRAGMENT regex");
    static ref PHONE_TAIL: Regex =
        Regex::new(r"-\s*\d{4}\s*$").expect("Failed to compile PHONE_TAIL regex");
    static ref BRACKETED: [Regex; 3] = [
        Regex::new(r"\[[^\]]*\]").expect("Failed to compile square bracket regex"),
        Regex::new(r"\([^)]*\)").expect("Failed to compile parenthesis regex"),
        Regex::new(r"\{[^}]*\}").expect("Failed to compile brace regex"),
    ];
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("Failed to compile WHITESPACE regex");
}

/// Strips phone numbers and bracketed annotations from an employee name.
///
/// Phone numbers are removed first (full numbers, then leftover `NNN - NNNN`
/// fragments and a trailing `- NNNN`), then `[...]`, `(...)` and `{...}`
/// annotations, then whitespace is collapsed. The steps repeat until the text
/// stops changing, so the result is stable under re-sanitizing.
///
/// # Example
///
/// ```
/// use schedule_import::normalize::sanitize_name;
///
/// assert_eq!(sanitize_name("John Smith (123) 456-7890"), "John Smith");
/// assert_eq!(sanitize_name("Ana  Lopez [trainee]"), "Ana Lopez");
/// ```
pub fn sanitize_name(raw: &str) -> String {
    let mut current = sanitize_once(raw);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(raw: &str) -> String {
    let mut text = PHONE_NUMBER.replace_all(raw, " ").into_owned();
    text = PHONE_FRAGMENT.replace_all(&text, " ").into_owned();
    text = PHONE_TAIL.replace_all(&text, " ").into_owned();

    for pattern in BRACKETED.iter() {
        text = pattern.replace_all(&text, " ").into_owned();
    }

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_area_code() {
        assert_eq!(sanitize_name("John Smith (123) 456-7890"), "John Smith");
    }

    #[test]
    fn test_dashed_and_dotted_numbers() {
        assert_eq!(sanitize_name("Jane Doe 555-123-4567"), "Jane Doe");
        assert_eq!(sanitize_name("Jane Doe 555.123.4567"), "Jane Doe");
        assert_eq!(sanitize_name("Jane Doe 5551234567"), "Jane Doe");
    }

    #[test]
    fn test_truncated_number_fragments() {
        assert_eq!(sanitize_name("Bob Lee 123 - 4567"), "Bob Lee");
        assert_eq!(sanitize_name("Bob Lee - 4567"), "Bob Lee");
    }

    #[test]
    fn test_bracket_annotations() {
        assert_eq!(sanitize_name("Ana Lopez [trainee]"), "Ana Lopez");
        assert_eq!(sanitize_name("Ana Lopez {minor}"), "Ana Lopez");
        assert_eq!(sanitize_name("Ana (AL) Lopez"), "Ana Lopez");
    }

    #[test]
    fn test_every_annotation_is_removed() {
        assert_eq!(sanitize_name("Ana (AL) Lopez (closer)"), "Ana Lopez");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(sanitize_name("  Mary \t  Ann\nSmith  "), "Mary Ann Smith");
    }

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(sanitize_name("Bob Johnson"), "Bob Johnson");
        assert_eq!(sanitize_name("O'Neil-Hart"), "O'Neil-Hart");
    }

    #[test]
    fn test_only_noise_becomes_empty() {
        assert_eq!(sanitize_name("(555) 123-4567"), "");
        assert_eq!(sanitize_name("[call out]"), "");
    }

    #[test]
    fn test_repeated_sanitizing_is_stable() {
        // Removing the bracket exposes a new number on the first pass
        let once = sanitize_name("Kim 555 (note) 1234567");
        assert_eq!(once, "Kim");
        assert_eq!(sanitize_name(&once), once);
    }
}
