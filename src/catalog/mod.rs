/// Mural catalog module
///
/// This module owns everything about the mural portfolio:
/// - Record shapes shared with the presentation layer (data.rs)
/// - The immutable session catalog and its invariants (store.rs)
/// - Derived views: search, sort modes, lookup with fallback (query.rs)

pub mod data;
pub mod query;
pub mod store;
