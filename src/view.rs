//! Declarative view models.
//!
//! The list and detail panes are described as plain data derived from the
//! current [`FilteredView`] and selection. The terminal surface redraws from
//! these descriptions every frame, so there is no incremental list state to
//! drift out of sync.

use crate::catalog::FeatureRecord;
use crate::query::FilteredView;

/// One row of the feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow<'a> {
    /// Category header, followed by that category's feature rows.
    Header { category: &'a str, count: usize },
    /// A clickable feature row keyed by the record id.
    Feature {
        id: &'a str,
        title: &'a str,
        active: bool,
    },
}

impl<'a> ListRow<'a> {
    pub fn feature_id(&self) -> Option<&'a str> {
        match self {
            ListRow::Feature { id, .. } => Some(*id),
            ListRow::Header { .. } => None,
        }
    }
}

/// Build the list rows for `view`, marking the row of `selection` active.
///
/// At most one row is active: the one whose id equals the selection's id.
/// Nothing is active when there is no selection or the selected record is
/// filtered out.
pub fn list_model<'a>(
    view: &FilteredView<'a>,
    selection: Option<&FeatureRecord>,
) -> Vec<ListRow<'a>> {
    let selected_id = selection.map(|f| f.id);
    let mut rows = Vec::with_capacity(view.groups().len() + view.len());
    let mut marked = false;

    for group in view.groups() {
        rows.push(ListRow::Header {
            category: group.category,
            count: group.features.len(),
        });
        for feature in &group.features {
            // Only the first matching row is marked if ids repeat.
            let active = !marked && selected_id == Some(feature.id);
            marked |= active;
            rows.push(ListRow::Feature {
                id: feature.id,
                title: feature.title,
                active,
            });
        }
    }

    rows
}

/// What the content area is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Welcome surface; nothing has been selected yet.
    Empty,
    /// Detail surface for a record.
    Showing(&'static FeatureRecord),
}

/// Content of the detail pane for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub code: &'a str,
    pub output: Option<&'a str>,
    pub notes: Vec<&'a str>,
}

impl<'a> DetailModel<'a> {
    pub fn from_record(record: &'a FeatureRecord) -> Self {
        Self {
            title: record.title,
            category: record.category,
            description: record.description,
            code: record.code,
            output: record.output,
            notes: record.visible_notes().to_vec(),
        }
    }

    pub fn show_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter;
    use pretty_assertions::assert_eq;

    const CATALOG: &[FeatureRecord] = &[
        FeatureRecord {
            id: "a",
            category: "X",
            title: "Foo",
            description: "",
            code: "foo()",
            output: Some("1"),
            notes: Some(&["first", "second"]),
        },
        FeatureRecord {
            id: "b",
            category: "Y",
            title: "Bar",
            description: "",
            code: "bar()",
            output: None,
            notes: None,
        },
        FeatureRecord {
            id: "c",
            category: "X",
            title: "Baz",
            description: "",
            code: "baz()",
            output: None,
            notes: Some(&[]),
        },
    ];

    fn active_ids<'a>(rows: &[ListRow<'a>]) -> Vec<&'a str> {
        rows.iter()
            .filter_map(|r| match r {
                ListRow::Feature { id, active: true, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn headers_precede_their_features() {
        let view = filter(CATALOG, "");
        let rows = list_model(&view, None);
        assert_eq!(
            rows,
            vec![
                ListRow::Header { category: "X", count: 2 },
                ListRow::Feature { id: "a", title: "Foo", active: false },
                ListRow::Feature { id: "c", title: "Baz", active: false },
                ListRow::Header { category: "Y", count: 1 },
                ListRow::Feature { id: "b", title: "Bar", active: false },
            ]
        );
    }

    #[test]
    fn no_row_active_without_selection() {
        let view = filter(CATALOG, "");
        assert!(active_ids(&list_model(&view, None)).is_empty());
    }

    #[test]
    fn only_selected_row_is_active() {
        let view = filter(CATALOG, "");
        let rows = list_model(&view, Some(&CATALOG[1]));
        assert_eq!(active_ids(&rows), vec!["b"]);
    }

    #[test]
    fn filtered_out_selection_marks_nothing() {
        let view = filter(CATALOG, "foo");
        let rows = list_model(&view, Some(&CATALOG[1]));
        assert!(active_ids(&rows).is_empty());
    }

    #[test]
    fn repeated_ids_mark_a_single_row() {
        let dupes = [CATALOG[0], CATALOG[0]];
        let view = filter(&dupes, "");
        let rows = list_model(&view, Some(&CATALOG[0]));
        assert_eq!(active_ids(&rows).len(), 1);
    }

    #[test]
    fn list_model_is_idempotent() {
        let view = filter(CATALOG, "");
        let first = list_model(&view, Some(&CATALOG[0]));
        let second = list_model(&view, Some(&CATALOG[0]));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_view_has_no_rows() {
        let view = filter(CATALOG, "zzz");
        assert!(list_model(&view, None).is_empty());
    }

    #[test]
    fn detail_panel_visibility() {
        let a = DetailModel::from_record(&CATALOG[0]);
        assert!(a.output.is_some());
        assert!(a.show_notes());
        assert_eq!(a.notes, vec!["first", "second"]);

        let b = DetailModel::from_record(&CATALOG[1]);
        assert!(b.output.is_none());
        assert!(!b.show_notes());

        let c = DetailModel::from_record(&CATALOG[2]);
        assert!(!c.show_notes());
    }

    #[test]
    fn feature_id_skips_headers() {
        let header = ListRow::Header { category: "X", count: 0 };
        assert_eq!(header.feature_id(), None);
        let row = ListRow::Feature { id: "a", title: "Foo", active: false };
        assert_eq!(row.feature_id(), Some("a"));
    }
}
