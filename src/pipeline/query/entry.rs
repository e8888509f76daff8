use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::score;
use crate::common::text::contains_ci;
use crate::domain::{ArtworkRecord, ArtworkStatus, ExhibitionRecord, ExhibitionStatus};
use crate::pipeline::classify::{classify_artwork, classify_exhibition};

/// What the query engine needs to know about a listable record.
pub trait CatalogEntry: Clone + Serialize {
    type Status: Copy + PartialEq + Debug + Serialize;

    fn status(&self, now: DateTime<Utc>) -> Self::Status;

    /// Title or name used by `SortMode::TitleAsc`.
    fn sort_title(&self) -> &str;

    /// Year used by year bounds and date sorting.
    fn year(&self) -> Option<i32>;

    /// Free-text match. `needle` is lowercase and non-blank.
    fn matches_text(&self, needle: &str) -> bool;

    /// Exact, case-insensitive category match.
    fn matches_category(&self, category: &str) -> bool;

    fn relevance(&self, status: Self::Status, needle: Option<&str>, now: DateTime<Utc>) -> f64;
}

fn same_label(label: Option<&str>, wanted: &str) -> bool {
    label.map_or(false, |l| l.trim().to_lowercase() == wanted.trim().to_lowercase())
}

impl CatalogEntry for ArtworkRecord {
    type Status = ArtworkStatus;

    fn status(&self, _now: DateTime<Utc>) -> ArtworkStatus {
        classify_artwork(self)
    }

    fn sort_title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        self.creation_year
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(Some(&self.title), needle)
            || contains_ci(self.description.as_deref(), needle)
            || contains_ci(self.artist_name.as_deref(), needle)
            || contains_ci(self.collection_label.as_deref(), needle)
    }

    fn matches_category(&self, category: &str) -> bool {
        same_label(self.collection_label.as_deref(), category)
    }

    fn relevance(&self, status: ArtworkStatus, needle: Option<&str>, _now: DateTime<Utc>) -> f64 {
        score::artwork_relevance(self, status, needle)
    }
}

impl CatalogEntry for ExhibitionRecord {
    type Status = ExhibitionStatus;

    fn status(&self, now: DateTime<Utc>) -> ExhibitionStatus {
        classify_exhibition(self, now)
    }

    fn sort_title(&self) -> &str {
        &self.name
    }

    fn year(&self) -> Option<i32> {
        ExhibitionRecord::year(self)
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(Some(&self.name), needle)
            || contains_ci(self.description.as_deref(), needle)
            || contains_ci(self.room.as_deref(), needle)
            || contains_ci(self.building.as_deref(), needle)
            || contains_ci(self.branch.as_deref(), needle)
            || contains_ci(self.kind_label(), needle)
    }

    fn matches_category(&self, category: &str) -> bool {
        self.kind
            .as_ref()
            .map_or(false, |kind| kind.matches_category(category))
    }

    fn relevance(&self, status: ExhibitionStatus, needle: Option<&str>, now: DateTime<Utc>) -> f64 {
        score::exhibition_relevance(self, status, needle, now)
    }
}
