//! Roster loading - player names from a file
//!
//! Accepted formats:
//! - JSON array of strings: `["Ana", "Bo"]`
//! - JSON array of records: `[{"name": "Ana"}, {"name": "Bo"}]`
//! - Plain text, one name per line (blank lines and `#` comments skipped)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterEntry {
    Name(String),
    Record { name: String },
}

impl RosterEntry {
    fn into_name(self) -> String {
        match self {
            RosterEntry::Name(name) | RosterEntry::Record { name } => name,
        }
    }
}

/// Load names from `path`, keeping at most `limit` of them
pub fn load_roster(path: &Path, limit: Option<usize>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster: {}", path.display()))?;

    let mut names = parse_roster(&content)
        .with_context(|| format!("Failed to parse roster: {}", path.display()))?;

    if let Some(limit) = limit {
        if names.len() < limit {
            tracing::warn!(
                "Only found {} players in {} (asked for {})",
                names.len(),
                path.display(),
                limit
            );
        }
        names.truncate(limit);
    }

    tracing::info!("Loaded {} players from {}", names.len(), path.display());
    Ok(names)
}

/// Parse roster text in any supported format
pub fn parse_roster(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let entries: Vec<RosterEntry> =
            serde_json::from_str(trimmed).context("Invalid JSON roster")?;
        return Ok(entries
            .into_iter()
            .map(|e| e.into_name().trim().to_string())
            .collect());
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let names = parse_roster("# club night\nAna\n\n  Bo  \nCy\n").unwrap();
        assert_eq!(names, vec!["Ana", "Bo", "Cy"]);
    }

    #[test]
    fn test_parse_json_strings() {
        let names = parse_roster(r#"["Ana", "Bo"]"#).unwrap();
        assert_eq!(names, vec!["Ana", "Bo"]);
    }

    #[test]
    fn test_parse_json_records() {
        let names = parse_roster(r#"[{"name": "Ana"}, {"name": "Bo", "rating": 1500}]"#).unwrap();
        assert_eq!(names, vec!["Ana", "Bo"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_roster("[1, 2").is_err());
    }

    #[test]
    fn test_load_roster_with_limit() {
        let path = std::env::temp_dir().join(format!("swisspair_roster_{}.txt", std::process::id()));
        std::fs::write(&path, "Ana\nBo\nCy\nDee\n").unwrap();

        let names = load_roster(&path, Some(3)).unwrap();
        assert_eq!(names, vec!["Ana", "Bo", "Cy"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_roster() {
        let err = load_roster(Path::new("/nonexistent/roster.txt"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster"));
    }
}
