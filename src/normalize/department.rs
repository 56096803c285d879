//! Department classification.
//!
//! Free-text area or cell content is mapped to [`Department::Boh`] or
//! [`Department::Foh`] by ordered keyword search. BOH keywords are checked
//! first; text matching neither list is front of house.

use crate::config::KeywordSet;
use crate::models::Department;

/// Classifies an area/position label with the built-in column keywords.
///
/// # Example
///
/// ```
/// use schedule_import::models::Department;
/// use schedule_import::normalize::classify_department;
///
/// assert_eq!(classify_department("Kitchen Prep"), Department::Boh);
/// assert_eq!(classify_department("Drive Thru"), Department::Foh);
/// assert_eq!(classify_department(""), Department::Foh);
/// ```
pub fn classify_department(raw: &str) -> Department {
    classify_department_with(raw, &KeywordSet::column_defaults())
}

/// Classifies an area/position label against the given keyword lists.
pub fn classify_department_with(raw: &str, keywords: &KeywordSet) -> Department {
    match raw {
        "FOH" => return Department::Foh,
        "BOH" => return Department::Boh,
        _ => {}
    }

    let text = raw.trim().to_lowercase();
    match text.as_str() {
        "foh" => Department::Foh,
        "boh" => Department::Boh,
        _ => classify_text(&text, keywords),
    }
}

/// Keyword search over already-lowercased text.
pub(crate) fn classify_text(lowercased: &str, keywords: &KeywordSet) -> Department {
    if keywords.boh.iter().any(|k| lowercased.contains(k.as_str())) {
        return Department::Boh;
    }
    if keywords.foh.iter().any(|k| lowercased.contains(k.as_str())) {
        return Department::Foh;
    }
    Department::Foh
}
