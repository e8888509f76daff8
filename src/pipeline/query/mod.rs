//! Client-side catalog query: free-text search, facet filters, year bounds
//! and ordering over canonical records.
//!
//! The engine is a pure function of `(records, query, now)`. It keeps no state
//! between calls and never fails; bad query input falls back to the default
//! for that field.

mod engine;
mod entry;
mod filter;
mod score;

use serde::{Deserialize, Serialize};

use crate::domain::{ArtworkStatus, ExhibitionStatus};

pub use engine::{run_artwork_query, run_exhibition_query, run_query, QueryHit};
pub use entry::CatalogEntry;
pub use filter::passes_filters;
pub use score::{artwork_relevance, exhibition_relevance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    Relevance,
    MostRecent,
    Oldest,
    TitleAsc,
}

impl SortMode {
    /// Lenient parse of a sort name from a dropdown or URL parameter.
    /// Unknown names select `Relevance`.
    pub fn parse(value: &str) -> Self {
        let key = value.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "most_recent" | "mostrecent" | "recent" | "recientes" => Self::MostRecent,
            "oldest" | "antiguas" => Self::Oldest,
            "title" | "title_asc" | "titleasc" | "titulo" => Self::TitleAsc,
            "relevance" | "relevancia" | "" => Self::Relevance,
            other => {
                tracing::debug!(sort = other, "unknown sort mode, using relevance");
                Self::Relevance
            }
        }
    }
}

/// Values a filter dropdown sends for "no filter".
const ALL_SENTINELS: [&str; 4] = ["all", "todas", "todos", "todas las colecciones"];

fn is_all(value: &str) -> bool {
    let key = value.trim().to_lowercase();
    key.is_empty() || ALL_SENTINELS.contains(&key.as_str())
}

/// Year bound typed by a user. Anything that is not an integer is no bound.
pub fn parse_year_bound(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// User-chosen search, filter and sort parameters for one engine run.
///
/// `S` is the lifecycle status type of the listed entity. `None` in
/// `lifecycle_filter` or `category_filter` means "All".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState<S> {
    pub search_text: String,
    pub lifecycle_filter: Option<S>,
    pub category_filter: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub sort_mode: SortMode,
}

pub type ArtworkQuery = QueryState<ArtworkStatus>;
pub type ExhibitionQuery = QueryState<ExhibitionStatus>;

impl<S> Default for QueryState<S> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            lifecycle_filter: None,
            category_filter: None,
            year_min: None,
            year_max: None,
            sort_mode: SortMode::default(),
        }
    }
}

impl<S> QueryState<S> {
    /// Clears every field back to its default ("clear filters").
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn with_lifecycle(mut self, status: S) -> Self {
        self.lifecycle_filter = Some(status);
        self
    }

    pub fn with_year_bounds(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    /// Sets the category filter; blank or "all"-style values clear it.
    pub fn set_category(&mut self, value: &str) {
        self.category_filter = if is_all(value) {
            None
        } else {
            Some(value.trim().to_string())
        };
    }

    pub fn with_category(mut self, value: &str) -> Self {
        self.set_category(value);
        self
    }

    /// Sets both year bounds from raw text inputs.
    pub fn set_year_bounds_text(&mut self, min: &str, max: &str) {
        self.year_min = parse_year_bound(min);
        self.year_max = parse_year_bound(max);
    }

    /// Sets the lifecycle filter from a dropdown value using `parse`.
    /// Unknown values clear the filter.
    pub fn set_lifecycle_text(&mut self, value: &str, parse: impl Fn(&str) -> Option<S>) {
        self.lifecycle_filter = if is_all(value) { None } else { parse(value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("recientes"), SortMode::MostRecent);
        assert_eq!(SortMode::parse("Most-Recent"), SortMode::MostRecent);
        assert_eq!(SortMode::parse("antiguas"), SortMode::Oldest);
        assert_eq!(SortMode::parse("titulo"), SortMode::TitleAsc);
        assert_eq!(SortMode::parse("popularity"), SortMode::Relevance);
        assert_eq!(SortMode::parse(""), SortMode::Relevance);
    }

    #[test]
    fn test_year_bound_parse() {
        assert_eq!(parse_year_bound(" 1900 "), Some(1900));
        assert_eq!(parse_year_bound("-300"), Some(-300));
        assert_eq!(parse_year_bound("mil novecientos"), None);
        assert_eq!(parse_year_bound(""), None);
    }

    #[test]
    fn test_category_all_sentinels_clear_filter() {
        let mut query = ArtworkQuery::default().with_category("Barroco");
        assert_eq!(query.category_filter.as_deref(), Some("Barroco"));

        query.set_category("Todas las colecciones");
        assert_eq!(query.category_filter, None);
        query.set_category("  ");
        assert_eq!(query.category_filter, None);
    }

    #[test]
    fn test_lifecycle_text() {
        let mut query = ExhibitionQuery::default();
        query.set_lifecycle_text("proxima", ExhibitionStatus::parse);
        assert_eq!(query.lifecycle_filter, Some(ExhibitionStatus::Upcoming));
        query.set_lifecycle_text("todas", ExhibitionStatus::parse);
        assert_eq!(query.lifecycle_filter, None);
        query.set_lifecycle_text("whatever", ExhibitionStatus::parse);
        assert_eq!(query.lifecycle_filter, None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut query = ArtworkQuery::default()
            .with_search("venus")
            .with_sort(SortMode::Oldest)
            .with_lifecycle(ArtworkStatus::Stored)
            .with_year_bounds(Some(1), Some(2));
        query.reset();
        assert_eq!(query, ArtworkQuery::default());
    }
}
