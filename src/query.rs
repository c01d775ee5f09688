//! Query/index engine: free-text filtering and category grouping.
//!
//! Matching is boolean substring containment over the case-folded title,
//! description and category. There is no tokenization, ranking or
//! pagination. The result is grouped by exact category value, with groups in
//! ascending lexicographic order and records in catalog order within a group.

use crate::catalog::FeatureRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// One category partition of a [`FilteredView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub features: Vec<&'a FeatureRecord>,
}

/// Derived view over the catalog for a single query.
///
/// Recomputed on every query change and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilteredView<'a> {
    groups: Vec<CategoryGroup<'a>>,
}

impl<'a> FilteredView<'a> {
    /// Category groups in display order.
    pub fn groups(&self) -> &[CategoryGroup<'a>] {
        &self.groups
    }

    /// Total number of matching records.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.features.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Matching records flattened in display order (group by group).
    pub fn features(&self) -> impl Iterator<Item = &'a FeatureRecord> + '_ {
        self.groups.iter().flat_map(|g| g.features.iter().copied())
    }

    /// Display position of the record with `id`, if it is in the view.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.features().position(|f| f.id == id)
    }

    /// Record at a display position.
    pub fn get(&self, index: usize) -> Option<&'a FeatureRecord> {
        self.features().nth(index)
    }
}

/// Whether `feature` matches an already case-folded query.
pub fn matches(feature: &FeatureRecord, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }
    feature.title.to_lowercase().contains(folded_query)
        || feature.description.to_lowercase().contains(folded_query)
        || feature.category.to_lowercase().contains(folded_query)
}

/// Filter `catalog` by `query` and group the survivors by category.
///
/// The empty query is the identity filter. An empty result is a valid view
/// with zero groups.
pub fn filter<'a>(catalog: &'a [FeatureRecord], query: &str) -> FilteredView<'a> {
    let folded = query.to_lowercase();

    // BTreeMap keeps the category keys sorted; Vec push keeps catalog order.
    let mut grouped: BTreeMap<&'a str, Vec<&'a FeatureRecord>> = BTreeMap::new();
    for feature in catalog.iter().filter(|f| matches(f, &folded)) {
        grouped.entry(feature.category).or_default().push(feature);
    }

    FilteredView {
        groups: grouped
            .into_iter()
            .map(|(category, features)| CategoryGroup { category, features })
            .collect(),
    }
}
