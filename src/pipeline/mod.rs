// Catalog pipeline: raw API records -> canonical records -> lifecycle status -> ordered view

pub mod classify;
pub mod facets;
pub mod normalize;
pub mod query;

pub use classify::{classify_artwork, classify_exhibition};
pub use normalize::{ArtworkNormalizer, ExhibitionNormalizer, Normalizer, RawRecord};
pub use query::{run_artwork_query, run_exhibition_query, QueryState, SortMode};
