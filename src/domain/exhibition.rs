use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{dates, text};

/// How an exhibition is presented. The API sends single-letter codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhibitionKind {
    InPerson,
    Virtual,
    Other(String),
}

impl ExhibitionKind {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "" => None,
            "P" | "INPERSON" | "IN PERSON" | "PRESENCIAL" => Some(Self::InPerson),
            "V" | "VIRTUAL" => Some(Self::Virtual),
            _ => Some(Self::Other(trimmed.to_string())),
        }
    }

    /// Human-readable label; also the text searched and faceted on.
    pub fn label(&self) -> &str {
        match self {
            Self::InPerson => "In person",
            Self::Virtual => "Virtual",
            Self::Other(raw) => raw,
        }
    }

    /// Source code for the known kinds, the raw text otherwise.
    pub fn code(&self) -> &str {
        match self {
            Self::InPerson => "P",
            Self::Virtual => "V",
            Self::Other(raw) => raw,
        }
    }

    /// Case-insensitive equality against the label or the source code, so a
    /// filter value of "P", "in person" or "InPerson" all select `InPerson`.
    pub fn matches_category(&self, category: &str) -> bool {
        let wanted = category.trim().to_lowercase();
        self.label().trim().to_lowercase() == wanted
            || self.code().trim().to_lowercase() == wanted
            || Self::parse(&wanted).as_ref() == Some(self)
    }
}

/// Lifecycle status of an exhibition relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExhibitionStatus {
    Active,
    Upcoming,
    Ended,
    Unknown,
}

impl ExhibitionStatus {
    /// Accepts the English variant names and the Spanish names used by the
    /// guest catalog (`activa`, `proxima`, `finalizada`, `otro`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" | "activa" => Some(Self::Active),
            "upcoming" | "proxima" | "próxima" => Some(Self::Upcoming),
            "ended" | "finalizada" => Some(Self::Ended),
            "unknown" | "otro" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// One artwork's display slot inside an exhibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDisplayWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Overall schedule of an exhibition: earliest window start and latest window
/// end. Either side is `None` when no window carries that bound.
pub fn derive_schedule(
    windows: &[WorkDisplayWindow],
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let start = windows.iter().filter_map(|w| w.start).min();
    let end = windows.iter().filter_map(|w| w.end).max();
    (start, end)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<ExhibitionKind>,
    pub raw_status_text: Option<String>,
    pub image_refs: Option<String>,
    pub room: Option<String>,
    pub building: Option<String>,
    pub branch: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_works_count: Option<i64>,
    pub works_still_displayed_count: Option<i64>,
}

impl ExhibitionRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            kind: None,
            raw_status_text: None,
            image_refs: None,
            room: None,
            building: None,
            branch: None,
            start_date: None,
            end_date: None,
            total_works_count: None,
            works_still_displayed_count: None,
        }
    }

    /// Year the exhibition opens, used for year bounds and date sorting.
    pub fn year(&self) -> Option<i32> {
        self.start_date.map(dates::year_of)
    }

    pub fn display_image(&self) -> Option<&str> {
        text::first_image(self.image_refs.as_deref())
    }

    pub fn kind_label(&self) -> Option<&str> {
        self.kind.as_ref().map(ExhibitionKind::label)
    }

    /// Fills whichever of `start_date` / `end_date` is absent from the
    /// schedule of its work display windows. Present dates always win.
    pub fn with_schedule(mut self, windows: &[WorkDisplayWindow]) -> Self {
        let (start, end) = derive_schedule(windows);
        self.start_date = self.start_date.or(start);
        self.end_date = self.end_date.or(end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_kind_parse_codes() {
        assert_eq!(ExhibitionKind::parse("p"), Some(ExhibitionKind::InPerson));
        assert_eq!(ExhibitionKind::parse(" V "), Some(ExhibitionKind::Virtual));
        assert_eq!(ExhibitionKind::parse(""), None);
        assert_eq!(
            ExhibitionKind::parse("Temporal"),
            Some(ExhibitionKind::Other("Temporal".to_string()))
        );
    }

    #[test]
    fn test_kind_matches_category_by_code_or_label() {
        let kind = ExhibitionKind::InPerson;
        assert!(kind.matches_category("P"));
        assert!(kind.matches_category("in person"));
        assert!(kind.matches_category("InPerson"));
        assert!(!kind.matches_category("Virtual"));

        let other = ExhibitionKind::Other("Temporal".to_string());
        assert!(other.matches_category("temporal"));
        assert!(!other.matches_category("temp"));
    }

    #[test]
    fn test_kind_matches_category_with_accents() {
        let kind = ExhibitionKind::Other("Época".to_string());
        assert!(kind.matches_category("época"));
        assert!(kind.matches_category(" ÉPOCA "));
        assert!(!kind.matches_category("epoca"));
    }

    #[test]
    fn test_derive_schedule_takes_outer_bounds() {
        let windows = [
            WorkDisplayWindow { start: Some(at(10)), end: Some(at(20)) },
            WorkDisplayWindow { start: Some(at(5)), end: None },
            WorkDisplayWindow { start: None, end: Some(at(25)) },
        ];
        assert_eq!(derive_schedule(&windows), (Some(at(5)), Some(at(25))));
        assert_eq!(derive_schedule(&[]), (None, None));
    }

    #[test]
    fn test_with_schedule_keeps_dedicated_dates() {
        let mut record = ExhibitionRecord::new(1, "Venus");
        record.start_date = Some(at(1));
        let windows = [WorkDisplayWindow { start: Some(at(3)), end: Some(at(9)) }];

        let record = record.with_schedule(&windows);
        assert_eq!(record.start_date, Some(at(1)));
        assert_eq!(record.end_date, Some(at(9)));
        assert_eq!(record.year(), Some(2025));
    }
}
