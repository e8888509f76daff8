use serde::{Deserialize, Serialize};

use crate::common::text;

/// Display-status code as sent by the API. The museum's database emits the
/// Spanish codes; the English ones are accepted as synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayStatusCode {
    OnDisplay,
    Stored,
    /// Any other non-blank code, kept verbatim.
    Other(String),
}

impl DisplayStatusCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().to_uppercase();
        match code.as_str() {
            "" => None,
            "ON_DISPLAY" | "EN_EXHIBICION" => Some(Self::OnDisplay),
            "STORED" | "ALMACENADA" => Some(Self::Stored),
            _ => Some(Self::Other(raw.trim().to_string())),
        }
    }
}

/// Lifecycle status of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtworkStatus {
    OnDisplay,
    Stored,
    Unassigned,
}

impl ArtworkStatus {
    /// Accepts the English variant names and the Spanish filter names used by
    /// the guest catalog (`en_exhibicion`, `pasada`, `sin_expo`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "on_display" | "ondisplay" | "en_exhibicion" => Some(Self::OnDisplay),
            "stored" | "pasada" | "almacenada" => Some(Self::Stored),
            "unassigned" | "sin_expo" => Some(Self::Unassigned),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub creation_year: Option<i32>,
    pub dimensions: Option<String>,
    pub image_refs: Option<String>,
    pub artist_name: Option<String>,
    pub collection_label: Option<String>,
    pub display_status: Option<DisplayStatusCode>,
    pub associated_exhibition_name: Option<String>,
}

impl ArtworkRecord {
    /// Record with only identity fields set; everything optional is `None`.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            creation_year: None,
            dimensions: None,
            image_refs: None,
            artist_name: None,
            collection_label: None,
            display_status: None,
            associated_exhibition_name: None,
        }
    }

    pub fn display_image(&self) -> Option<&str> {
        text::first_image(self.image_refs.as_deref())
    }
}
