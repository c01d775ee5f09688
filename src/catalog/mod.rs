//! The feature catalog.
//!
//! A fixed, compiled-in sequence of [`FeatureRecord`]s. The catalog is created
//! once at process start and never mutated; everything else in the crate
//! derives views from it.

mod entries;

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// A single documented language feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Unique identifier; the click key of the feature's list row.
    pub id: &'static str,
    /// Grouping key (case-sensitive, not enumerated).
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Example source, shown verbatim and handed to the highlighter.
    pub code: &'static str,
    /// Expected output. `None` hides the output panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'static str>,
    /// Ordered notes. `None` or empty hides the notes panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static [&'static str]>,
}

impl FeatureRecord {
    /// Notes in source order; empty when absent.
    pub fn visible_notes(&self) -> &'static [&'static str] {
        self.notes.unwrap_or(&[])
    }
}

/// Summary counts shown on initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub categories: usize,
}

/// The built-in catalog, in source order.
pub fn builtin() -> &'static [FeatureRecord] {
    entries::FEATURES
}

/// Count records and distinct category values.
pub fn stats(catalog: &[FeatureRecord]) -> CatalogStats {
    let categories: HashSet<&str> = catalog.iter().map(|f| f.category).collect();
    CatalogStats {
        total: catalog.len(),
        categories: categories.len(),
    }
}

/// Look up a record by id. Returns the first match if ids repeat.
pub fn find<'a>(catalog: &'a [FeatureRecord], id: &str) -> Option<&'a FeatureRecord> {
    catalog.iter().find(|f| f.id == id)
}

/// Ids that occur more than once, sorted.
///
/// Uniqueness is not enforced at construction; callers decide whether a
/// repeat is worth reporting.
pub fn duplicate_ids(catalog: &[FeatureRecord]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(catalog.len());
    let mut dupes = BTreeSet::new();
    for feature in catalog {
        if !seen.insert(feature.id) {
            dupes.insert(feature.id);
        }
    }
    dupes.into_iter().collect()
}
