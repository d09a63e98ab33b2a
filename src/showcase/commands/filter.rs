//! Catalog filtering and sorting.
//!
//! Raw UI input arrives as a [`FilterQuery`] (plain strings, as a form would
//! hand them over). Converting it into a [`FilterSpec`] validates the closed
//! enumerations up front, so [`filter_and_sort`] itself cannot fail.
//!
//! Predicates are applied in a fixed order and AND-combined:
//!
//! 1. free-text search over title, descriptions, client, category and tags
//! 2. exact category
//! 3. exact status
//! 4. featured flag
//! 5. tags (a record matches if it carries ANY of the requested tags)
//!
//! Survivors are then sorted with a stable sort, so records the comparator
//! considers equal keep their input order in both directions.

use crate::error::{Result, ShowcaseError};
use crate::model::{ProjectRecord, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Title,
    Category,
}

impl FromStr for SortBy {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(SortBy::Date),
            "title" => Ok(SortBy::Title),
            "category" => Ok(SortBy::Category),
            other => Err(ShowcaseError::invalid(format!(
                "unknown sort key '{}' (expected date, title or category)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortBy::Date => "date",
            SortBy::Title => "title",
            SortBy::Category => "category",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    /// Newest first when sorting by date.
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ShowcaseError::invalid(format!(
                "unknown sort order '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Unvalidated filter input. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterQuery {
    pub search: String,
    pub category: String,
    pub status: String,
    pub featured: Option<bool>,
    pub tags: Vec<String>,
    pub sort_by: String,
    pub sort_order: String,
}

impl FilterQuery {
    pub fn parse(&self) -> Result<FilterSpec> {
        FilterSpec::try_from(self)
    }
}

/// Validated filter and sort criteria for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
    pub tags: BTreeSet<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl TryFrom<&FilterQuery> for FilterSpec {
    type Error = ShowcaseError;

    fn try_from(query: &FilterQuery) -> Result<Self> {
        let status: Option<ProjectStatus> = match query.status.as_str() {
            "" => None,
            s => Some(s.parse()?),
        };
        let sort_by: SortBy = match query.sort_by.as_str() {
            "" => SortBy::default(),
            s => s.parse()?,
        };
        let sort_order: SortOrder = match query.sort_order.as_str() {
            "" => SortOrder::default(),
            s => s.parse()?,
        };

        Ok(FilterSpec {
            search: query.search.clone(),
            category: Some(query.category.clone()).filter(|c| !c.is_empty()),
            status,
            featured: query.featured,
            tags: query.tags.iter().cloned().collect(),
            sort_by,
            sort_order,
        })
    }
}

impl FilterSpec {
    /// True if the record passes every active predicate.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_search(record)
            && self
                .category
                .as_ref()
                .is_none_or(|category| *category == record.category)
            && self.status.is_none_or(|status| status == record.status)
            && self
                .featured
                .is_none_or(|featured| featured == record.featured)
            && (self.tags.is_empty() || self.tags.iter().any(|tag| record.has_tag(tag)))
    }

    fn matches_search(&self, record: &ProjectRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record
            .search_haystack()
            .contains(&self.search.to_lowercase())
    }

    fn compare(&self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        let ordering = match self.sort_by {
            SortBy::Date => a.created_at.cmp(&b.created_at),
            SortBy::Title => collate(&a.title, &b.title),
            SortBy::Category => collate(&a.category, &b.category),
        };
        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive ordering with a byte-wise tie-break, so that "apple"
/// and "Apple" still order deterministically.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns the records passing `spec`, sorted per `spec`.
///
/// Accepts anything yielding record references, so a previous result can be
/// fed back in. The input is never reordered or mutated.
pub fn filter_and_sort<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut matched: Vec<&ProjectRecord> = records
        .into_iter()
        .filter(|record| spec.matches(record))
        .collect();

    // `sort_by` is a stable merge sort; ties keep input order
    matched.sort_by(|a, b| spec.compare(a, b));

    tracing::debug!(
        matched = matched.len(),
        sort_by = %spec.sort_by,
        sort_order = %spec.sort_order,
        "filtered catalog"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    fn ids(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn catalog() -> Vec<ProjectRecord> {
        let mut a = record("p1", "Harbour Bridge", "Structural Engineering", 3);
        a.tags = vec!["Steel".into(), "Marine".into()];
        a.client = Some("Port Authority".into());
        a.featured = true;

        let mut b = record("p2", "Civic Tower", "Building Services", 1);
        b.tags = vec!["HVAC".into()];
        b.status = ProjectStatus::InProgress;

        let mut c = record("p3", "Airport Terminal", "Structural Engineering", 2);
        c.tags = vec!["Steel".into(), "BIM".into()];
        c.status = ProjectStatus::Planned;
        c.description = "Long-span roof over the departure hall".into();

        vec![a, b, c]
    }

    #[test]
    fn empty_spec_sorts_newest_first() {
        let records = catalog();
        let result = filter_and_sort(&records, &FilterSpec::default());
        assert_eq!(ids(&result), vec!["p1", "p3", "p2"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let records: Vec<ProjectRecord> = Vec::new();
        assert!(filter_and_sort(&records, &FilterSpec::default()).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let records = catalog();

        let spec = FilterSpec {
            search: "PORT auth".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p1"]);

        let spec = FilterSpec {
            search: "departure".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p3"]);

        let spec = FilterSpec {
            search: "bim".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p3"]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let records = catalog();
        let spec = FilterSpec {
            category: Some("structural engineering".into()),
            ..Default::default()
        };
        assert!(filter_and_sort(&records, &spec).is_empty());

        let spec = FilterSpec {
            category: Some("Structural Engineering".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p1", "p3"]);
    }

    #[test]
    fn status_and_featured_filters() {
        let records = catalog();
        let spec = FilterSpec {
            status: Some(ProjectStatus::InProgress),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p2"]);

        let spec = FilterSpec {
            featured: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p3", "p2"]);
    }

    #[test]
    fn tags_match_any_requested_tag() {
        let mut rec = record("x", "X", "A", 1);
        rec.tags = vec!["A".into(), "B".into()];
        let records = vec![rec];

        let spec = FilterSpec {
            tags: ["B", "C"].into_iter().map(String::from).collect(),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&records, &spec).len(), 1);

        let spec = FilterSpec {
            tags: ["C", "D"].into_iter().map(String::from).collect(),
            ..Default::default()
        };
        assert!(filter_and_sort(&records, &spec).is_empty());
    }

    #[test]
    fn predicates_are_and_combined() {
        let records = catalog();
        let spec = FilterSpec {
            tags: ["Steel".to_string()].into_iter().collect(),
            status: Some(ProjectStatus::Planned),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["p3"]);
    }

    #[test]
    fn category_filter_sorted_by_title() {
        let mut records = vec![
            record("1", "Zeta", "A", 1),
            record("2", "Beta", "B", 2),
            record("3", "Alpha", "A", 3),
            record("4", "Gamma", "C", 4),
        ];
        records[2].status = ProjectStatus::Planned;
        records[3].status = ProjectStatus::InProgress;

        let query = FilterQuery {
            category: "A".into(),
            sort_by: "title".into(),
            sort_order: "asc".into(),
            ..Default::default()
        };
        let result = filter_and_sort(&records, &query.parse().unwrap());
        assert_eq!(result.len(), 2);
        assert_eq!(ids(&result), vec!["3", "1"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let records = vec![
            record("1", "Same", "B", 5),
            record("2", "Same", "A", 5),
            record("3", "Same", "B", 5),
            record("4", "Same", "A", 5),
        ];

        for sort_by in [SortBy::Date, SortBy::Title] {
            for sort_order in [SortOrder::Asc, SortOrder::Desc] {
                let spec = FilterSpec {
                    sort_by,
                    sort_order,
                    ..Default::default()
                };
                assert_eq!(
                    ids(&filter_and_sort(&records, &spec)),
                    vec!["1", "2", "3", "4"]
                );
            }
        }

        let spec = FilterSpec {
            sort_by: SortBy::Category,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_and_sort(&records, &spec)),
            vec!["1", "3", "2", "4"]
        );
    }

    #[test]
    fn title_collation_ignores_case_first() {
        let records = vec![
            record("1", "beta", "A", 1),
            record("2", "Alpha", "A", 2),
            record("3", "alpha", "A", 3),
        ];
        let spec = FilterSpec {
            sort_by: SortBy::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&records, &spec)), vec!["2", "3", "1"]);
    }

    #[test]
    fn reapplying_spec_is_a_no_op() {
        let records = catalog();
        let spec = FilterSpec {
            search: "e".into(),
            sort_by: SortBy::Title,
            ..Default::default()
        };
        let once = filter_and_sort(&records, &spec);
        let twice = filter_and_sort(once.iter().copied(), &spec);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn result_is_subset_of_input() {
        let records = catalog();
        let spec = FilterSpec {
            search: "steel".into(),
            ..Default::default()
        };
        let result = filter_and_sort(&records, &spec);
        assert!(result.len() <= records.len());
        for rec in result {
            assert!(records.iter().any(|r| std::ptr::eq(r, rec)));
        }
    }

    #[test]
    fn query_rejects_unknown_enumerations() {
        let bad_sort = FilterQuery {
            sort_by: "popularity".into(),
            ..Default::default()
        };
        assert!(matches!(
            bad_sort.parse(),
            Err(ShowcaseError::InvalidArgument(_))
        ));

        let bad_order = FilterQuery {
            sort_order: "ascending".into(),
            ..Default::default()
        };
        assert!(bad_order.parse().is_err());

        let bad_status = FilterQuery {
            status: "done".into(),
            ..Default::default()
        };
        assert!(bad_status.parse().is_err());
    }

    #[test]
    fn query_empty_strings_mean_unset() {
        let spec = FilterQuery::default().parse().unwrap();
        assert_eq!(spec, FilterSpec::default());
        assert_eq!(spec.sort_by, SortBy::Date);
        assert_eq!(spec.sort_order, SortOrder::Desc);
    }
}
