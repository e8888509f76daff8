use super::{CatalogEntry, QueryState};

/// True when `record` satisfies every active predicate of `query`.
///
/// `status` is the record's already-computed lifecycle status and `needle`
/// the lowercased search text (`None` when blank). A record with no year is
/// never excluded by the year bounds.
pub fn passes_filters<R: CatalogEntry>(
    record: &R,
    status: R::Status,
    query: &QueryState<R::Status>,
    needle: Option<&str>,
) -> bool {
    if let Some(needle) = needle {
        if !record.matches_text(needle) {
            return false;
        }
    }

    if let Some(wanted) = query.lifecycle_filter {
        if status != wanted {
            return false;
        }
    }

    if let Some(category) = query.category_filter.as_deref() {
        if !record.matches_category(category) {
            return false;
        }
    }

    if let Some(year) = record.year() {
        if query.year_min.map_or(false, |min| year < min) {
            return false;
        }
        if query.year_max.map_or(false, |max| year > max) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtworkRecord, ArtworkStatus};
    use crate::pipeline::query::ArtworkQuery;

    fn artwork(year: Option<i32>) -> ArtworkRecord {
        let mut record = ArtworkRecord::new(1, "Retrato");
        record.creation_year = year;
        record.collection_label = Some("Barroco".to_string());
        record
    }

    #[test]
    fn test_year_bounds_are_inclusive_and_tolerate_unknown() {
        let query = ArtworkQuery::default().with_year_bounds(Some(1900), Some(1950));
        let status = ArtworkStatus::Unassigned;

        assert!(passes_filters(&artwork(Some(1900)), status, &query, None));
        assert!(passes_filters(&artwork(Some(1950)), status, &query, None));
        assert!(!passes_filters(&artwork(Some(1899)), status, &query, None));
        assert!(!passes_filters(&artwork(Some(1975)), status, &query, None));
        assert!(passes_filters(&artwork(None), status, &query, None));
    }

    #[test]
    fn test_category_match_ignores_case() {
        let query = ArtworkQuery::default().with_category("barroco");
        assert!(passes_filters(&artwork(None), ArtworkStatus::Stored, &query, None));

        let query = ArtworkQuery::default().with_category("Barr");
        assert!(!passes_filters(&artwork(None), ArtworkStatus::Stored, &query, None));
    }

    #[test]
    fn test_missing_category_never_matches_active_filter() {
        let mut record = artwork(None);
        record.collection_label = None;
        let query = ArtworkQuery::default().with_category("Barroco");
        assert!(!passes_filters(&record, ArtworkStatus::Stored, &query, None));
    }

    #[test]
    fn test_lifecycle_filter_exact() {
        let query = ArtworkQuery::default().with_lifecycle(ArtworkStatus::OnDisplay);
        assert!(passes_filters(&artwork(None), ArtworkStatus::OnDisplay, &query, None));
        assert!(!passes_filters(&artwork(None), ArtworkStatus::Stored, &query, None));
    }
}
