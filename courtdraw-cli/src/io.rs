//! File input and JSON output shared by the commands
//!
//! Level 4 - Utilities

use std::path::Path;

use anyhow::{Context, Result};
use courtdraw_core::{ensure_unique_ids, Match, Player};
use courtdraw_schedule::WeightTable;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a JSON document from `path`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load a roster (JSON array of players)
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let players: Vec<Player> = read_json(path)?;
    ensure_unique_ids(&players).with_context(|| format!("Invalid roster {}", path.display()))?;
    tracing::info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Load recorded matches (JSON array of matches)
pub fn load_matches(path: &Path) -> Result<Vec<Match>> {
    let matches: Vec<Match> = read_json(path)?;
    tracing::info!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

/// Load a custom progressive weight table, or the standard one
pub fn load_weight_table(path: Option<&Path>) -> Result<WeightTable> {
    match path {
        Some(path) => read_json(path),
        None => Ok(WeightTable::standard()),
    }
}

/// Render `value` as JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print `value` as JSON to stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_players() {
        let file = write_temp(
            r#"[{"id": "a", "first_name": "Ann", "last_name": "Lee"}, {"id": "b", "first_name": "Bo", "last_name": "Ray"}]"#,
        );
        let players = load_players(file.path()).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].display_name(), "Ann Lee");
        assert!(!players[1].is_seeded);
    }

    #[test]
    fn test_duplicate_roster_rejected() {
        let file = write_temp(r#"[{"id": "a", "first_name": "", "last_name": ""}, {"id": "a", "first_name": "", "last_name": ""}]"#);
        assert!(load_players(file.path()).is_err());
    }

    #[test]
    fn test_bad_json_has_context() {
        let file = write_temp("not json");
        let err = load_players(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_matches(Path::new("/nonexistent/matches.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_weight_table_loading() {
        assert_eq!(load_weight_table(None).unwrap(), WeightTable::standard());

        let file = write_temp(r#"{"2": [0.5, 0.5]}"#);
        let table = load_weight_table(Some(file.path())).unwrap();
        assert_eq!(table.get(2), Some(&[0.5, 0.5][..]));

        let invalid = write_temp(r#"{"2": [0.9, 0.9]}"#);
        assert!(load_weight_table(Some(invalid.path())).is_err());
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let value = vec![1, 2];
        assert_eq!(to_json(&value, false).unwrap(), "[1,2]");
        assert!(to_json(&value, true).unwrap().contains('\n'));
    }
}
