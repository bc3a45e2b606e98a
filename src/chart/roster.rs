use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigError;

/// One entry in a roster file: a name, and optionally a starting
/// coordinate. Entries without coordinates fall into the default row
/// layout.
///
/// ```json
/// [
///   { "name": "Aiko" },
///   { "name": "Ben", "left": 40.0, "top": 10.0 }
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub left: Option<f32>,
    #[serde(default)]
    pub top: Option<f32>,
}

impl RosterEntry {
    pub fn coordinates(&self) -> Option<(f32, f32)> {
        match (self.left, self.top) {
            (Some(left), Some(top)) => Some((left, top)),
            _ => None,
        }
    }
}

/// Load a roster from a JSON file.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&contents)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_only() {
        let json = r#"[{"name": "Aiko"}, {"name": "Ben"}]"#;
        let entries: Vec<RosterEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Aiko");
        assert!(entries[0].coordinates().is_none());
    }

    #[test]
    fn test_parse_with_coordinates() {
        let json = r#"[{"name": "Chie", "left": 40.0, "top": 10.0}]"#;
        let entries: Vec<RosterEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].coordinates(), Some((40.0, 10.0)));
    }

    #[test]
    fn test_partial_coordinates_are_ignored() {
        let json = r#"[{"name": "Dai", "left": 40.0}]"#;
        let entries: Vec<RosterEntry> = serde_json::from_str(json).unwrap();
        assert!(entries[0].coordinates().is_none());
    }

    #[test]
    fn test_malformed_roster_is_an_error() {
        let json = r#"{"name": "not an array"}"#;
        assert!(serde_json::from_str::<Vec<RosterEntry>>(json).is_err());
    }
}
