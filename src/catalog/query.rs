/// Derived views over the catalog
///
/// Everything in this module is a pure function: it reads the catalog,
/// returns a fresh sequence (or a fully-shaped record), and never fails.
/// Malformed input degrades to a defined result instead of an error:
/// unknown modes behave like "all", unparseable dates sort last, and
/// unknown ids resolve to the placeholder record.

use chrono::NaiveDate;
use std::cmp::Ordering;

use super::data::{Mural, MuralDetail};
use super::store::Catalog;

/// Sort/order strategy for the listing screen
///
/// Applied after search, so it reorders the currently visible records
/// rather than the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keep the records in their current order
    #[default]
    All,
    /// Newest first by parsed date; undated records trail
    Recent,
    /// Alphabetical by title. A stand-in ordering until a real
    /// popularity signal (likes, views) exists.
    Popular,
}

impl Mode {
    /// Parse a mode selector; unknown values degrade to `All`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "recent" => Mode::Recent,
            "popular" => Mode::Popular,
            _ => Mode::All,
        }
    }
}

/// Case-insensitive free-text search across title, location,
/// description and tags
///
/// An empty or whitespace-only query returns the whole catalog in
/// canonical order. Matching is inclusive-OR across the fields; each
/// record appears at most once and relative order is preserved.
pub fn search(catalog: &[Mural], query: &str) -> Vec<Mural> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|mural| {
            mural.title.to_lowercase().contains(&query)
                || mural.location.to_lowercase().contains(&query)
                || mural.description.to_lowercase().contains(&query)
                || mural.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Reorder (or pass through) an already-searched result set
///
/// Returns a freshly ordered sequence; the input is never mutated.
/// Both sorts are stable, so records that compare equal keep their
/// input order.
pub fn apply_mode(records: &[Mural], mode: Mode) -> Vec<Mural> {
    let mut records = records.to_vec();

    match mode {
        Mode::All => {}
        Mode::Recent => {
            records.sort_by(|a, b| {
                match (parse_display_date(&a.date), parse_display_date(&b.date)) {
                    (Some(a), Some(b)) => b.cmp(&a),
                    // Parsed dates always come before unparseable ones
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }
        Mode::Popular => {
            records.sort_by_key(|mural| mural.title.to_lowercase());
        }
    }

    records
}

/// Resolve one full-detail record by id
///
/// Returns the stored record on a match and the placeholder record on
/// a miss, so the detail screen always has something renderable.
pub fn lookup_by_id(catalog: &Catalog, id: i64) -> MuralDetail {
    catalog
        .detail(id)
        .cloned()
        .unwrap_or_else(MuralDetail::not_found)
}

/// Coerce a route parameter into a record id
///
/// Ids arrive from the routing layer as strings and may be arbitrary
/// user input. Anything non-numeric coerces to 0, which is never
/// authored and therefore resolves to the placeholder record.
pub fn route_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse an authored display date
///
/// The portfolio uses human-readable dates ("March 2023",
/// "March 5, 2023") rather than a strict calendar format; ISO dates
/// are accepted too. Month-year dates resolve to the first of the
/// month. Anything else is `None` and sorts last in `Mode::Recent`.
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%B %d, %Y") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(&format!("1 {date}"), "%d %B %Y").ok()
}
