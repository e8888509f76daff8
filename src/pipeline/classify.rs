use chrono::{DateTime, Utc};

use crate::domain::{ArtworkRecord, ArtworkStatus, DisplayStatusCode, ExhibitionRecord, ExhibitionStatus};

/// Lifecycle status of an exhibition at `now`.
///
/// Dates take precedence over the free-text status, which is only read when
/// no date rule applies. The `Active` window is inclusive at both ends. An
/// end date before the start date is not corrected: the rules run in order
/// and the first that matches wins.
pub fn classify_exhibition(record: &ExhibitionRecord, now: DateTime<Utc>) -> ExhibitionStatus {
    let start = record.start_date;
    let end = record.end_date;

    if start.map_or(false, |s| s > now) {
        return ExhibitionStatus::Upcoming;
    }
    if end.map_or(false, |e| e < now) {
        return ExhibitionStatus::Ended;
    }
    if start.map_or(false, |s| s <= now) && end.map_or(true, |e| e >= now) {
        return ExhibitionStatus::Active;
    }

    classify_status_text(record.raw_status_text.as_deref())
}

/// Fallback when no date rule applies: "Activa", "active", "abierta" and any
/// other text starting with "a" count as active.
fn classify_status_text(text: Option<&str>) -> ExhibitionStatus {
    let starts_with_a = text
        .map(|t| t.trim().to_lowercase())
        .map_or(false, |t| t.starts_with('a'));

    if starts_with_a {
        ExhibitionStatus::Active
    } else {
        ExhibitionStatus::Unknown
    }
}

pub fn classify_artwork(record: &ArtworkRecord) -> ArtworkStatus {
    match record.display_status {
        Some(DisplayStatusCode::OnDisplay) => ArtworkStatus::OnDisplay,
        Some(DisplayStatusCode::Stored) => ArtworkStatus::Stored,
        Some(DisplayStatusCode::Other(_)) | None => ArtworkStatus::Unassigned,
    }
}
