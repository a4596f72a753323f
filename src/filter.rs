//! Free-text plus faceted filtering over an in-memory catalog.
//!
//! A [`FilterState`] holds one query string and any number of facet
//! constraints. [`matches`] folds them into a single predicate and
//! [`filtered_view`] applies it to a catalog without reordering.

use serde::Serialize;
use std::collections::BTreeMap;

/// Sentinel facet value meaning "no constraint".
pub const ALL: &str = "all";

/// A browsable catalog entry.
pub trait Record {
    /// Facet names this record type understands. Constraints on any other
    /// name are ignored.
    const FACETS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Text fields the query is matched against. Absent optional fields are
    /// left out rather than returned empty.
    fn search_fields(&self) -> Vec<&str>;

    /// The record's value for a facet, or `None` if it has none.
    fn facet(&self, name: &str) -> Option<&str>;
}

impl<R: Record> Record for &R {
    const FACETS: &'static [&'static str] = R::FACETS;

    fn id(&self) -> &str {
        (**self).id()
    }

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }

    fn facet(&self, name: &str) -> Option<&str> {
        (**self).facet(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    query: String,
    facets: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_facet(name, value);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Setting a facet to [`ALL`] drops the constraint entirely.
    pub fn set_facet(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value == ALL {
            self.facets.remove(&name);
        } else {
            self.facets.insert(name, value);
        }
    }

    /// Current value for a facet, [`ALL`] when unconstrained.
    pub fn facet(&self, name: &str) -> &str {
        self.facets.get(name).map(String::as_str).unwrap_or(ALL)
    }

    pub fn facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty() && self.facets.is_empty()
    }
}

pub fn matches<R: Record>(record: &R, filter: &FilterState) -> bool {
    matches_query(record, filter.query()) && matches_facets(record, filter)
}

fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_facets<R: Record>(record: &R, filter: &FilterState) -> bool {
    filter.facets().all(|(name, value)| {
        if value == ALL || !R::FACETS.contains(&name) {
            return true;
        }
        record.facet(name) == Some(value)
    })
}

/// Records passing `filter`, in catalog order.
pub fn filtered_view<'a, R: Record>(catalog: &'a [R], filter: &FilterState) -> Vec<&'a R> {
    catalog.iter().filter(|r| matches(*r, filter)).collect()
}

/// Facet options for a selector: [`ALL`] followed by every value seen in
/// the catalog, first occurrence first.
pub fn distinct_values<R: Record>(catalog: &[R], facet: &str) -> Vec<String> {
    let mut values = vec![ALL.to_string()];
    for value in catalog.iter().filter_map(|r| r.facet(facet)) {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Closest facet option to a value the user typed, for "did you mean"
/// hints. Facet matching is exact, so `internship` never matches
/// `Internship` on its own.
pub fn closest_option<'a>(value: &str, options: &'a [String]) -> Option<&'a str> {
    let value = value.to_lowercase();
    options
        .iter()
        .filter(|o| o.as_str() != ALL)
        .map(|o| (o, strsim::jaro_winkler(&value, &o.to_lowercase())))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(o, _)| o.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
        note: Option<&'static str>,
        kind: &'static str,
    }

    impl Record for Item {
        const FACETS: &'static [&'static str] = &["kind"];

        fn id(&self) -> &str {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.note);
            fields
        }

        fn facet(&self, name: &str) -> Option<&str> {
            match name {
                "kind" => Some(self.kind),
                _ => None,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "a", name: "Rust Developer", note: Some("remote"), kind: "Full-time" },
            Item { id: "b", name: "Data Intern", note: None, kind: "Internship" },
            Item { id: "c", name: "QA Engineer", note: Some("Rust tooling"), kind: "Contract" },
            Item { id: "d", name: "Research Intern", note: None, kind: "Internship" },
        ]
    }

    fn ids<R: Record>(view: &[R]) -> Vec<&str> {
        view.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let catalog = items();
        let view = filtered_view(&catalog, &FilterState::new());
        assert_eq!(ids(&view), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn whitespace_query_is_empty() {
        let catalog = items();
        let view = filtered_view(&catalog, &FilterState::new().with_query("   "));
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let catalog = items();
        let filter = FilterState::new().with_query("RUST");
        let view = filtered_view(&catalog, &filter);
        assert_eq!(ids(&view), vec!["a", "c"]);
        for record in &view {
            assert!(
                record
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains("rust"))
            );
        }
    }

    #[test]
    fn missing_optional_field_never_matches_text() {
        let catalog = items();
        let view = filtered_view(&catalog, &FilterState::new().with_query("remote"));
        assert_eq!(ids(&view), vec!["a"]);
    }

    #[test]
    fn facet_is_exact_and_case_sensitive() {
        let catalog = items();
        let exact = filtered_view(&catalog, &FilterState::new().with_facet("kind", "Internship"));
        assert_eq!(ids(&exact), vec!["b", "d"]);
        assert!(exact.iter().all(|r| r.kind == "Internship"));

        let lower = filtered_view(&catalog, &FilterState::new().with_facet("kind", "internship"));
        assert!(lower.is_empty());
    }

    #[test]
    fn unknown_facet_is_ignored() {
        let catalog = items();
        let view = filtered_view(&catalog, &FilterState::new().with_facet("salary", "high"));
        assert_eq!(view.len(), catalog.len());
    }

    #[test]
    fn query_and_facet_combine_with_and() {
        let catalog = items();
        let filter = FilterState::new()
            .with_query("intern")
            .with_facet("kind", "Internship");
        assert_eq!(ids(&filtered_view(&catalog, &filter)), vec!["b", "d"]);

        let filter = FilterState::new().with_query("rust").with_facet("kind", "Internship");
        assert!(filtered_view(&catalog, &filter).is_empty());
    }

    #[test]
    fn setting_all_removes_constraint() {
        let mut filter = FilterState::new().with_facet("kind", "Contract");
        assert_eq!(filter.facet("kind"), "Contract");
        filter.set_facet("kind", ALL);
        assert_eq!(filter.facet("kind"), ALL);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn filtering_is_idempotent_and_bounded() {
        let catalog = items();
        let filters = [
            FilterState::new(),
            FilterState::new().with_query("intern"),
            FilterState::new().with_facet("kind", "Contract"),
            FilterState::new().with_query("zzz"),
        ];
        for filter in &filters {
            let once = filtered_view(&catalog, filter);
            let twice = filtered_view(&once, filter);
            assert!(once.len() <= catalog.len());
            assert_eq!(ids(&twice), ids(&once));
        }
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let catalog = items();
        assert_eq!(
            distinct_values(&catalog, "kind"),
            vec!["all", "Full-time", "Internship", "Contract"]
        );
        assert_eq!(distinct_values(&catalog, "missing"), vec!["all"]);
    }

    #[test]
    fn closest_option_suggests_case_fix() {
        let options = distinct_values(&items(), "kind");
        assert_eq!(closest_option("internship", &options), Some("Internship"));
        assert_eq!(closest_option("fulltime", &options), Some("Full-time"));
        assert_eq!(closest_option("zzzz", &options), None);
    }
}
