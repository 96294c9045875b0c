/// Static contact record for the artist
///
/// This is the boundary contract the sharing component consumes: all
/// string fields are always present (possibly empty for `avatar_url`)
/// and `tags` is always a list. The sharing transports themselves
/// (clipboard, email, messaging) live in the presentation layer.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    /// Empty string means "no avatar"; the card falls back to the
    /// first letter of the name
    pub avatar_url: String,
    pub tags: Vec<String>,
}

impl ContactInfo {
    /// The artist's authored contact card
    pub fn artist() -> Self {
        Self {
            name: "Johina".to_string(),
            title: "Master Muralist & Restoration Expert".to_string(),
            email: "contact@johina.com".to_string(),
            phone: "+34 123 456 789".to_string(),
            website: "https://johina.com".to_string(),
            location: "Madrid, Spain".to_string(),
            avatar_url: String::new(),
            tags: vec![
                "Muralist".to_string(),
                "Restoration".to_string(),
                "Heritage".to_string(),
                "Art Consultant".to_string(),
            ],
        }
    }

    /// Plain-text payload used by the copy/share actions
    pub fn share_text(&self) -> String {
        format!(
            "Name: {}\nTitle: {}\nEmail: {}\nPhone: {}\nWebsite: {}\nLocation: {}\n",
            self.name, self.title, self.email, self.phone, self.website, self.location
        )
    }
}
