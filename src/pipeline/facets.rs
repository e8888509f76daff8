use std::collections::BTreeSet;

use crate::common::text::locale_cmp;
use crate::domain::{ArtworkRecord, ExhibitionRecord};

fn sorted_distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = labels.collect();
    let mut values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    values.sort_by(|a, b| locale_cmp(a, b));
    values
}

/// Distinct collection labels offered by the collection dropdown.
pub fn collection_facets(artworks: &[ArtworkRecord]) -> Vec<String> {
    sorted_distinct(artworks.iter().filter_map(|a| a.collection_label.as_deref()))
}

/// Distinct exhibition kind labels offered by the kind dropdown.
pub fn kind_facets(exhibitions: &[ExhibitionRecord]) -> Vec<String> {
    sorted_distinct(exhibitions.iter().filter_map(ExhibitionRecord::kind_label))
}

/// Smallest and largest known creation year, used to prefill empty year
/// inputs. `None` when no artwork has a year.
pub fn suggested_year_range(artworks: &[ArtworkRecord]) -> Option<(i32, i32)> {
    let years = artworks.iter().filter_map(|a| a.creation_year);
    let (min, max) = years.fold((None, None), |(min, max): (Option<i32>, Option<i32>), y| {
        (Some(min.map_or(y, |m| m.min(y))), Some(max.map_or(y, |m| m.max(y))))
    });
    min.zip(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExhibitionKind;

    fn artwork(label: Option<&str>, year: Option<i32>) -> ArtworkRecord {
        let mut record = ArtworkRecord::new(1, "Obra");
        record.collection_label = label.map(str::to_string);
        record.creation_year = year;
        record
    }

    #[test]
    fn test_collection_facets_distinct_and_sorted() {
        let artworks = vec![
            artwork(Some("Renacimiento"), None),
            artwork(Some("barroco"), None),
            artwork(None, None),
            artwork(Some("Renacimiento"), None),
            artwork(Some("Época moderna"), None),
        ];
        assert_eq!(
            collection_facets(&artworks),
            vec!["barroco", "Época moderna", "Renacimiento"]
        );
    }

    #[test]
    fn test_kind_facets_use_labels() {
        let mut virtual_expo = ExhibitionRecord::new(1, "A");
        virtual_expo.kind = Some(ExhibitionKind::Virtual);
        let mut in_person = ExhibitionRecord::new(2, "B");
        in_person.kind = Some(ExhibitionKind::InPerson);
        let untyped = ExhibitionRecord::new(3, "C");

        assert_eq!(
            kind_facets(&[virtual_expo, in_person, untyped]),
            vec!["In person", "Virtual"]
        );
    }

    #[test]
    fn test_suggested_year_range() {
        let artworks = vec![artwork(None, Some(1920)), artwork(None, None), artwork(None, Some(1503))];
        assert_eq!(suggested_year_range(&artworks), Some((1503, 1920)));
        assert_eq!(suggested_year_range(&[artwork(None, None)]), None);
    }
}
