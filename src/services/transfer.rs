//! Import och export av bibliotek som JSON-filer

use std::path::Path;

use chrono::Local;

use crate::models::Entry;
use crate::utils::error::{AppError, AppResult};

/// Felmeddelande när importerad JSON inte är en postsekvens
pub const INVALID_FORMAT_MSG: &str = "Ogiltigt filformat: förväntade en lista med poster";

/// Standardfilnamn för export: `<bibliotek>_<datum>.json`
pub fn export_filename(library_name: &str) -> String {
    format!("{}_{}.json", library_name, Local::now().format("%Y-%m-%d"))
}

/// Skriv postsekvensen som indenterad JSON till filen
pub fn export_to_file(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let content = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, content)?;
    tracing::info!("Exporterade {} poster till {:?}", entries.len(), path);
    Ok(())
}

/// Läs och tolka en JSON-fil som en postsekvens.
///
/// Enda valideringen utöver JSON-tolkningen är att toppnivån är en
/// lista — poster med saknade fält får tomma standardvärden.
pub fn import_from_file(path: &Path) -> AppResult<Vec<Entry>> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if !value.is_array() {
        return Err(AppError::validation(INVALID_FORMAT_MSG));
    }

    let entries: Vec<Entry> = serde_json::from_value(value)?;
    tracing::info!("Importerade {} poster från {:?}", entries.len(), path);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(author: &str, title: &str) -> Entry {
        Entry {
            author: author.into(),
            title: title.into(),
            ..Entry::new()
        }
    }

    #[test]
    fn test_export_filename_contains_date() {
        let name = export_filename("Min hylla");
        assert!(name.starts_with("Min hylla_"));
        assert!(name.ends_with(".json"));
        let date = Local::now().format("%Y-%m-%d").to_string();
        assert!(name.contains(&date));
    }

    #[test]
    fn test_export_import_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut entries = vec![entry("A", "Bok 1"), entry("B", "Bok 2")];
        for (i, e) in entries.iter_mut().enumerate() {
            e.id = i as u32 + 1;
        }

        export_to_file(&path, &entries).unwrap();
        let imported = import_from_file(&path).unwrap();
        assert_eq!(imported, entries);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objekt.json");
        std::fs::write(&path, r#"{"a": 1}"#).unwrap();

        match import_from_file(&path).unwrap_err() {
            AppError::Validation(msg) => assert_eq!(msg, INVALID_FORMAT_MSG),
            other => panic!("Väntade valideringsfel, fick {}", other),
        }
    }

    #[test]
    fn test_import_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trasig.json");
        std::fs::write(&path, "inte json alls").unwrap();

        assert!(matches!(import_from_file(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_import_entries_with_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.json");
        std::fs::write(&path, r#"[{"title": "Bara titel"}, {}]"#).unwrap();

        let imported = import_from_file(&path).unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].title, "Bara titel");
        assert!(imported[1].author.is_empty());
    }
}
