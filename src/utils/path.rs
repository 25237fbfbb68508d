use std::path::{Path, PathBuf};

/// Katalog där biblioteksfilerna sparas
pub fn get_libraries_dir() -> PathBuf {
    directories::ProjectDirs::from("se", "boklib", "Boklib")
        .map(|dirs| dirs.data_dir().join("libraries"))
        .unwrap_or_else(|| PathBuf::from("libraries"))
}

/// Sökväg till inställningsfilen
pub fn get_settings_path() -> PathBuf {
    directories::ProjectDirs::from("se", "boklib", "Boklib")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

/// Normalisera sökväg för visning
pub fn display_path(path: &Path) -> String {
    // Förkorta hemkatalogen till ~
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Skapa ett säkert filnamn från en sträng
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Hämta filändelse
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

/// Kontrollera om en fil är en bild
pub fn is_image_file(path: &Path) -> bool {
    matches!(
        get_extension(path).as_deref(),
        Some("jpg" | "jpeg" | "png" | "gif" | "webp")
    )
}

/// MIME-typ för en bildfil, utifrån filändelsen
pub fn image_mime_type(path: &Path) -> &'static str {
    match get_extension(path).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
