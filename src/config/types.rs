//! Configuration types for schedule import.
//!
//! These structures are deserialized from YAML files. Every field has a
//! default reproducing the built-in keyword tables, so a file only needs to
//! name what it overrides.

use serde::{Deserialize, Serialize};

/// Ordered keyword lists for one department classifier.
///
/// BOH keywords are always checked before FOH keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    /// Substrings that mark back-of-house work, in priority order.
    pub boh: Vec<String>,
    /// Substrings that mark front-of-house work, in priority order.
    pub foh: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl KeywordSet {
    /// Keywords applied to the area column of column-format schedules.
    pub fn column_defaults() -> Self {
        Self {
            boh: strings(&["kitchen", "prep", "cook", "grill", "back", "boh"]),
            foh: strings(&[
                "front counter",
                "drive thru",
                "front",
                "cashier",
                "service",
                "dining room",
                "foh",
            ]),
        }
    }

    /// Keywords applied to the full cell text of weekly-roster schedules.
    pub fn roster_defaults() -> Self {
        Self {
            boh: strings(&["back of house", "boh", "kitchen", "prep", "cook", "grill"]),
            foh: strings(&[
                "front of house",
                "foh",
                "cashier",
                "front counter",
                "drive thru",
                "service",
            ]),
        }
    }
}

/// Department keyword tables (`departments.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentConfig {
    /// Keywords for the column-format area column.
    pub column: KeywordSet,
    /// Keywords for weekly-roster cell text.
    pub roster: KeywordSet,
}

impl Default for DepartmentConfig {
    fn default() -> Self {
        Self {
            column: KeywordSet::column_defaults(),
            roster: KeywordSet::roster_defaults(),
        }
    }
}

/// Format-detection and header-recognition settings (`detection.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Extra header substrings that mark a weekly roster (e.g. specific dates).
    pub extra_date_markers: Vec<String>,
    /// Lowercase header substrings of explicit time columns. Cells under these
    /// headers are not sampled when looking for embedded shift times.
    pub time_column_markers: Vec<String>,
    /// Headers (compared case-insensitively) that name the roster employee column.
    pub roster_name_headers: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            extra_date_markers: Vec::new(),
            time_column_markers: strings(&["start", "end", "time"]),
            roster_name_headers: strings(&["employee", "name", "employee name"]),
        }
    }
}

/// The complete import configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Department keyword tables.
    pub departments: DepartmentConfig,
    /// Detection settings.
    pub detection: DetectionConfig,
}

impl ImportConfig {
    /// Creates a configuration from its component parts.
    pub fn new(departments: DepartmentConfig, detection: DetectionConfig) -> Self {
        Self {
            departments,
            detection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boh_keywords_listed_in_priority_order() {
        let set = KeywordSet::column_defaults();
        assert_eq!(set.boh.first().map(String::as_str), Some("kitchen"));
        assert_eq!(set.foh.first().map(String::as_str), Some("front counter"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "extra_date_markers:\n  - \"6/1\"\n";
        let detection: DetectionConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(detection.extra_date_markers, vec!["6/1".to_string()]);
        assert_eq!(detection.time_column_markers, vec!["start", "end", "time"]);
    }

    #[test]
    fn test_department_yaml_override() {
        let yaml = "roster:\n  boh: [dish]\n  foh: [host]\n";
        let departments: DepartmentConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(departments.roster.boh, vec!["dish".to_string()]);
        assert_eq!(departments.column, KeywordSet::column_defaults());
    }
}
