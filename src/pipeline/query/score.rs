use chrono::{DateTime, Utc};

use crate::common::dates::days_between;
use crate::common::text::contains_ci;
use crate::constants::*;
use crate::domain::{ArtworkRecord, ArtworkStatus, ExhibitionRecord, ExhibitionStatus};

fn bonus(matched: bool, weight: f64) -> f64 {
    if matched {
        weight
    } else {
        0.0
    }
}

fn year_tie_break(year: Option<i32>) -> f64 {
    year.map_or(0.0, |y| f64::from(y) / YEAR_TIE_BREAK_DIVISOR)
}

/// Additive relevance of an exhibition. Each term is independent:
/// status weight, text-match bonuses (only with a search needle), closeness
/// of the start date to `now`, and a small year tie-break.
pub fn exhibition_relevance(
    record: &ExhibitionRecord,
    status: ExhibitionStatus,
    needle: Option<&str>,
    now: DateTime<Utc>,
) -> f64 {
    let mut score = match status {
        ExhibitionStatus::Active => EXHIBITION_ACTIVE_WEIGHT,
        ExhibitionStatus::Upcoming => EXHIBITION_UPCOMING_WEIGHT,
        ExhibitionStatus::Ended | ExhibitionStatus::Unknown => 0.0,
    };

    if let Some(q) = needle {
        score += bonus(contains_ci(Some(&record.name), q), EXHIBITION_NAME_MATCH);
        score += bonus(contains_ci(record.description.as_deref(), q), EXHIBITION_DESCRIPTION_MATCH);
        score += bonus(contains_ci(record.kind_label(), q), EXHIBITION_KIND_MATCH);

        let location_match = [&record.room, &record.building, &record.branch]
            .iter()
            .any(|field| contains_ci(field.as_deref(), q));
        score += bonus(location_match, EXHIBITION_LOCATION_MATCH);
    }

    if let Some(start) = record.start_date {
        score += (EXHIBITION_PROXIMITY_WINDOW_DAYS - days_between(start, now)).max(0.0);
    }

    score + year_tie_break(record.year())
}

/// Additive relevance of an artwork: on-display weight, text-match bonuses,
/// exhibition association, and a small year tie-break.
pub fn artwork_relevance(record: &ArtworkRecord, status: ArtworkStatus, needle: Option<&str>) -> f64 {
    let mut score = bonus(status == ArtworkStatus::OnDisplay, ARTWORK_ON_DISPLAY_WEIGHT);

    if let Some(q) = needle {
        score += bonus(contains_ci(Some(&record.title), q), ARTWORK_TITLE_MATCH);
        score += bonus(contains_ci(record.artist_name.as_deref(), q), ARTWORK_ARTIST_MATCH);
        score += bonus(contains_ci(record.collection_label.as_deref(), q), ARTWORK_COLLECTION_MATCH);
        score += bonus(contains_ci(record.description.as_deref(), q), ARTWORK_DESCRIPTION_MATCH);
    }

    score += bonus(record.associated_exhibition_name.is_some(), ARTWORK_EXHIBITION_BONUS);

    score + year_tie_break(record.creation_year)
}
