//! Normalization of raw API records into canonical catalog records.
//!
//! Every canonical field has an ordered alias table (see [`aliases`]). The
//! first alias present with a non-null value decides the field; a value of
//! the wrong type degrades that one field to `None` and never fails the
//! record.

pub mod aliases;
mod artwork;
mod exhibition;
mod fields;

use serde_json::Value;

pub use artwork::ArtworkNormalizer;
pub use exhibition::{normalize_work_window, ExhibitionNormalizer};
pub use fields::RawRecord;

/// Maps one raw record to its canonical shape. Implementations never fail.
pub trait Normalizer {
    type Output;

    fn normalize(&self, raw: &RawRecord) -> Self::Output;

    /// Entity name used in log output.
    fn entity(&self) -> &'static str;

    /// Normalizes a whole `data` array, preserving order and length.
    fn normalize_all(&self, raws: &[Value]) -> Vec<Self::Output> {
        let records: Vec<Self::Output> = raws
            .iter()
            .map(|value| self.normalize(&RawRecord::from(value)))
            .collect();
        tracing::debug!(entity = self.entity(), count = records.len(), "normalized records");
        records
    }
}
