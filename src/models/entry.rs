use serde::{Deserialize, Serialize};

/// En post i ett bibliotek
///
/// `id` är alltid lika med 1-baserad position i biblioteket efter att en
/// mutation har avslutats — se [`crate::models::Library::reindex`].
/// Okända fält i importerad JSON ignoreras, saknade fält blir tomma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    /// Bild som data-URL (base64), tom sträng om ingen bild
    #[serde(default)]
    pub image: String,
}

impl Entry {
    /// Ny tom post (id sätts vid omindexering)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Matchar sökfrågan mot de redigerbara fälten (inte id, inte bild).
    /// Skiftlägesokänslig delsträngssökning; tom fråga matchar allt.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        [&self.author, &self.title, &self.description, &self.comments]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
