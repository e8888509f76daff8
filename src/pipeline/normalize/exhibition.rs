use serde_json::Value;

use super::aliases::{exhibition as field, work_window};
use super::{Normalizer, RawRecord};
use crate::domain::{ExhibitionKind, ExhibitionRecord, WorkDisplayWindow};

/// Normalizer for rows of the exhibition details view.
///
/// Start and end dates come from the dedicated columns when present; otherwise
/// they are derived from an embedded list of work display windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhibitionNormalizer;

impl Normalizer for ExhibitionNormalizer {
    type Output = ExhibitionRecord;

    fn normalize(&self, raw: &RawRecord) -> ExhibitionRecord {
        let id = raw.integer(field::ID).unwrap_or_else(|| {
            tracing::debug!("exhibition without usable id, defaulting to 0");
            0
        });

        let record = ExhibitionRecord {
            id,
            name: raw.string(field::NAME).unwrap_or_default(),
            description: raw.string(field::DESCRIPTION),
            kind: raw
                .string(field::KIND)
                .and_then(|kind| ExhibitionKind::parse(&kind)),
            raw_status_text: raw.string(field::STATUS_TEXT),
            image_refs: raw.string(field::IMAGE_REFS),
            room: raw.string(field::ROOM),
            building: raw.string(field::BUILDING),
            branch: raw.string(field::BRANCH),
            start_date: raw.timestamp(field::START_DATE),
            end_date: raw.timestamp(field::END_DATE),
            total_works_count: raw.integer(field::TOTAL_WORKS),
            works_still_displayed_count: raw.integer(field::WORKS_STILL_DISPLAYED),
        };

        match raw.array(field::WORK_DISPLAYS) {
            Some(items) => {
                let windows: Vec<WorkDisplayWindow> =
                    items.iter().map(normalize_work_window).collect();
                record.with_schedule(&windows)
            }
            None => record,
        }
    }

    fn entity(&self) -> &'static str {
        "exhibition"
    }
}

/// Reads one work display window. Unparseable bounds are `None`.
pub fn normalize_work_window(value: &Value) -> WorkDisplayWindow {
    let raw = RawRecord::from(value);
    WorkDisplayWindow {
        start: raw.timestamp(work_window::START),
        end: raw.timestamp(work_window::END),
    }
}
