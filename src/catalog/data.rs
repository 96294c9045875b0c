/// Shared data structures for the mural catalog
///
/// These structs represent the record model that flows between
/// the catalog store and the presentation layer. Two shapes exist:
/// - `Mural`: the summary record rendered as a card on the listing screen
/// - `MuralDetail`: the full record rendered on the detail screen

use serde::{Deserialize, Serialize};

/// Summary record for the listing screen
///
/// Ids are assigned at data-authoring time and stay stable for the
/// whole session; they are never generated at runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Mural {
    /// Unique positive id, authored with the record
    pub id: i64,
    /// Display title (non-empty)
    pub title: String,
    /// Display asset path for the card image
    pub image: String,
    /// Short description shown on the card hover overlay
    pub description: String,
    /// Human-readable location (e.g. "Riverside Park")
    pub location: String,
    /// Display date string (e.g. "March 2023"); not guaranteed to be
    /// a parseable calendar date
    pub date: String,
    /// Ordered tag list; empty when the record has no tags, never absent
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One photo of a finished mural
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Unique within the owning record
    pub id: i64,
    pub url: String,
    pub caption: String,
}

/// Full record for the detail screen
///
/// Carries everything the summary has (minus the card image) plus the
/// commission details and the photo gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MuralDetail {
    pub id: i64,
    pub title: String,
    /// Long-form description (the summary carries a shorter one)
    pub description: String,
    pub category: String,
    pub location: String,
    pub address: String,
    pub date: String,
    pub client: String,
    pub size: String,
    pub materials: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl MuralDetail {
    /// The placeholder record returned when a lookup misses
    ///
    /// Id 0 is never authored, so the presentation layer can always
    /// render the returned record without checking for absence.
    pub fn not_found() -> Self {
        Self {
            id: 0,
            title: "Mural Not Found".to_string(),
            description: "This mural information is not available.".to_string(),
            category: "Unknown".to_string(),
            location: String::new(),
            address: String::new(),
            date: String::new(),
            client: String::new(),
            size: String::new(),
            materials: String::new(),
            tags: Vec::new(),
            photos: Vec::new(),
        }
    }
}
