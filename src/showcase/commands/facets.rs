use crate::model::{ProjectRecord, ProjectStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Distinct values available for filter controls, each in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub statuses: Vec<ProjectStatus>,
}

impl Facets {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty() && self.statuses.is_empty()
    }
}

pub fn derive_facets<'a, I>(records: I) -> Facets
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut facets = Facets::default();
    let mut seen_categories: HashSet<&str> = HashSet::new();
    let mut seen_tags: HashSet<&str> = HashSet::new();

    for record in records {
        if seen_categories.insert(record.category.as_str()) {
            facets.categories.push(record.category.clone());
        }
        for tag in &record.tags {
            if seen_tags.insert(tag.as_str()) {
                facets.tags.push(tag.clone());
            }
        }
        if !facets.statuses.contains(&record.status) {
            facets.statuses.push(record.status);
        }
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let mut a = record("1", "A", "Structural", 1);
        a.tags = vec!["Steel".into(), "BIM".into()];
        a.status = ProjectStatus::Planned;
        let mut b = record("2", "B", "Civil", 2);
        b.tags = vec!["BIM".into(), "Roads".into()];
        let mut c = record("3", "C", "Structural", 3);
        c.tags = vec!["Steel".into()];
        c.status = ProjectStatus::Planned;

        let records = vec![a, b, c];
        let facets = derive_facets(&records);

        assert_eq!(facets.categories, vec!["Structural", "Civil"]);
        assert_eq!(facets.tags, vec!["Steel", "BIM", "Roads"]);
        assert_eq!(
            facets.statuses,
            vec![ProjectStatus::Planned, ProjectStatus::Completed]
        );
    }

    #[test]
    fn empty_catalog_has_no_facets() {
        let records: Vec<ProjectRecord> = Vec::new();
        assert!(derive_facets(&records).is_empty());
    }
}
