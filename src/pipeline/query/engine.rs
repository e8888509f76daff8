use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::filter::passes_filters;
use super::{CatalogEntry, QueryState, SortMode};
use crate::common::text::{locale_cmp, search_needle};
use crate::domain::{ArtworkRecord, ExhibitionRecord};

/// One row of a query result: the record, its lifecycle status at `now`, and
/// its relevance score for the query's search text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryHit<R: CatalogEntry> {
    pub record: R,
    pub status: R::Status,
    pub relevance: f64,
}

impl<R: CatalogEntry> QueryHit<R> {
    fn year_or_zero(&self) -> i32 {
        self.record.year().unwrap_or(0)
    }
}

/// Filters and orders `records` for `query` as of `now`.
///
/// The input slice is left untouched; the result holds clones in display
/// order. Sorting is stable, so records that compare equal keep their input
/// order.
pub fn run_query<R: CatalogEntry>(
    records: &[R],
    query: &QueryState<R::Status>,
    now: DateTime<Utc>,
) -> Vec<QueryHit<R>> {
    let needle = search_needle(&query.search_text);
    let needle = needle.as_deref();

    let mut hits: Vec<QueryHit<R>> = records
        .iter()
        .filter_map(|record| {
            let status = record.status(now);
            if !passes_filters(record, status, query, needle) {
                return None;
            }
            Some(QueryHit {
                record: record.clone(),
                status,
                relevance: record.relevance(status, needle, now),
            })
        })
        .collect();

    hits.sort_by(|a, b| compare_hits(a, b, query.sort_mode));

    tracing::debug!(
        total = records.len(),
        matched = hits.len(),
        sort = ?query.sort_mode,
        "catalog query evaluated"
    );
    hits
}

fn compare_hits<R: CatalogEntry>(a: &QueryHit<R>, b: &QueryHit<R>, mode: SortMode) -> Ordering {
    match mode {
        SortMode::TitleAsc => locale_cmp(a.record.sort_title(), b.record.sort_title()),
        SortMode::MostRecent => b.year_or_zero().cmp(&a.year_or_zero()),
        SortMode::Oldest => a.year_or_zero().cmp(&b.year_or_zero()),
        SortMode::Relevance => b
            .relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.year_or_zero().cmp(&a.year_or_zero())),
    }
}

pub fn run_artwork_query(
    records: &[ArtworkRecord],
    query: &QueryState<<ArtworkRecord as CatalogEntry>::Status>,
    now: DateTime<Utc>,
) -> Vec<QueryHit<ArtworkRecord>> {
    run_query(records, query, now)
}

pub fn run_exhibition_query(
    records: &[ExhibitionRecord],
    query: &QueryState<<ExhibitionRecord as CatalogEntry>::Status>,
    now: DateTime<Utc>,
) -> Vec<QueryHit<ExhibitionRecord>> {
    run_query(records, query, now)
}
