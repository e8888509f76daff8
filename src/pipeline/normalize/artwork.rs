use super::aliases::artwork as field;
use super::{Normalizer, RawRecord};
use crate::domain::{ArtworkRecord, DisplayStatusCode};

/// Normalizer for rows of the artworks view.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArtworkNormalizer;

impl Normalizer for ArtworkNormalizer {
    type Output = ArtworkRecord;

    fn normalize(&self, raw: &RawRecord) -> ArtworkRecord {
        let id = raw.integer(field::ID).unwrap_or_else(|| {
            tracing::debug!("artwork without usable id, defaulting to 0");
            0
        });

        // Collection type wins; the description only labels untyped collections
        let collection_label = raw
            .string(field::COLLECTION_TYPE)
            .or_else(|| raw.string(field::COLLECTION_DESCRIPTION));

        ArtworkRecord {
            id,
            title: raw.string(field::TITLE).unwrap_or_default(),
            description: raw.string(field::DESCRIPTION),
            creation_year: raw.year(field::CREATION_YEAR),
            dimensions: raw.string(field::DIMENSIONS),
            image_refs: raw.string(field::IMAGE_REFS),
            artist_name: raw.string(field::ARTIST_NAME),
            collection_label,
            display_status: raw
                .string(field::DISPLAY_STATUS)
                .and_then(|code| DisplayStatusCode::parse(&code)),
            associated_exhibition_name: raw.string(field::EXHIBITION_NAME),
        }
    }

    fn entity(&self) -> &'static str {
        "artwork"
    }
}
