/// The Catalog owns the immutable mural record set for the session.
///
/// It is built once at startup, validated, and never mutated afterwards;
/// every derived view (search results, sorted listings) is a fresh
/// sequence produced by the query module, never an in-place edit.

use serde::Deserialize;
use thiserror::Error;

use super::data::{Mural, MuralDetail};

/// The authored portfolio, embedded at compile time
const BUILTIN_PORTFOLIO: &str = include_str!("../../data/murals.json");

/// Errors raised while constructing a catalog
///
/// Construction is the only fallible operation in this layer; every
/// query over a constructed catalog is total.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("malformed portfolio document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate mural id {0}")]
    DuplicateId(i64),

    #[error("detail record {id} (\"{detail_title}\") does not match any summary record")]
    OrphanDetail { id: i64, detail_title: String },

    #[error("detail record {id} titled \"{detail_title}\" but summary says \"{summary_title}\"")]
    TitleMismatch {
        id: i64,
        detail_title: String,
        summary_title: String,
    },

    #[error("duplicate photo id {photo_id} in mural {mural_id}")]
    DuplicatePhotoId { mural_id: i64, photo_id: i64 },
}

/// On-disk shape of the portfolio document
#[derive(Deserialize)]
struct PortfolioDocument {
    murals: Vec<Mural>,
    details: Vec<MuralDetail>,
}

/// The session catalog: ordered summaries plus full-detail records
#[derive(Debug, Clone)]
pub struct Catalog {
    murals: Vec<Mural>,
    details: Vec<MuralDetail>,
}

impl Catalog {
    /// Build a catalog from caller-supplied records, validating the
    /// catalog invariants:
    /// - summary and detail ids are unique
    /// - every detail record agrees with its summary on id and title
    /// - photo ids are unique within each record
    pub fn new(murals: Vec<Mural>, details: Vec<MuralDetail>) -> Result<Self, CatalogError> {
        for (i, mural) in murals.iter().enumerate() {
            if murals[..i].iter().any(|m| m.id == mural.id) {
                return Err(CatalogError::DuplicateId(mural.id));
            }
        }

        for (i, detail) in details.iter().enumerate() {
            if details[..i].iter().any(|d| d.id == detail.id) {
                return Err(CatalogError::DuplicateId(detail.id));
            }

            match murals.iter().find(|m| m.id == detail.id) {
                None => {
                    return Err(CatalogError::OrphanDetail {
                        id: detail.id,
                        detail_title: detail.title.clone(),
                    });
                }
                Some(summary) if summary.title != detail.title => {
                    return Err(CatalogError::TitleMismatch {
                        id: detail.id,
                        detail_title: detail.title.clone(),
                        summary_title: summary.title.clone(),
                    });
                }
                Some(_) => {}
            }

            for (j, photo) in detail.photos.iter().enumerate() {
                if detail.photos[..j].iter().any(|p| p.id == photo.id) {
                    return Err(CatalogError::DuplicatePhotoId {
                        mural_id: detail.id,
                        photo_id: photo.id,
                    });
                }
            }
        }

        Ok(Catalog { murals, details })
    }

    /// Load and validate the portfolio embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        let document: PortfolioDocument = serde_json::from_str(BUILTIN_PORTFOLIO)?;
        Self::new(document.murals, document.details)
    }

    /// The full ordered summary sequence, in authored (canonical) order
    pub fn all(&self) -> &[Mural] {
        &self.murals
    }

    /// Raw detail lookup; the query layer turns a miss into the
    /// placeholder record
    pub fn detail(&self, id: i64) -> Option<&MuralDetail> {
        self.details.iter().find(|d| d.id == id)
    }

    /// Number of murals in the catalog
    pub fn len(&self) -> usize {
        self.murals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.murals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::Photo;

    fn summary(id: i64, title: &str) -> Mural {
        Mural {
            id,
            title: title.to_string(),
            image: format!("/placeholder-mural-{id}.jpg"),
            description: String::new(),
            location: String::new(),
            date: String::new(),
            tags: Vec::new(),
        }
    }

    fn detail(id: i64, title: &str) -> MuralDetail {
        MuralDetail {
            id,
            title: title.to_string(),
            description: String::new(),
            category: String::new(),
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

    #[test]
    fn test_builtin_portfolio_is_valid() {
        let catalog = Catalog::builtin().unwrap();

        assert!(!catalog.is_empty());
        // Canonical order is the authored order
        let ids: Vec<i64> = catalog.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_builtin_details_agree_with_summaries() {
        let catalog = Catalog::builtin().unwrap();

        for mural in catalog.all() {
            let detail = catalog.detail(mural.id).unwrap();
            assert_eq!(detail.title, mural.title);
            assert_eq!(detail.tags, mural.tags);
        }
    }

    #[test]
    fn test_rejects_duplicate_summary_id() {
        let result = Catalog::new(vec![summary(1, "A"), summary(1, "B")], Vec::new());
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_detail_without_summary() {
        let result = Catalog::new(vec![summary(1, "A")], vec![detail(2, "B")]);
        assert!(matches!(result, Err(CatalogError::OrphanDetail { id: 2, .. })));
    }

    #[test]
    fn test_rejects_title_mismatch() {
        let result = Catalog::new(vec![summary(1, "A")], vec![detail(1, "B")]);
        assert!(matches!(result, Err(CatalogError::TitleMismatch { id: 1, .. })));
    }

    #[test]
    fn test_rejects_duplicate_photo_id() {
        let mut d = detail(1, "A");
        d.photos = vec![
            Photo {
                id: 1,
                url: "/a.jpg".to_string(),
                caption: String::new(),
            },
            Photo {
                id: 1,
                url: "/b.jpg".to_string(),
                caption: String::new(),
            },
        ];

        let result = Catalog::new(vec![summary(1, "A")], vec![d]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicatePhotoId { mural_id: 1, photo_id: 1 })
        ));
    }

    #[test]
    fn test_detail_lookup_misses_return_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.detail(999).is_none());
    }
}
