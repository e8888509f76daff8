// Canonical record shapes shared by the normalizers and the query engine

mod artwork;
mod exhibition;

pub use artwork::{ArtworkRecord, ArtworkStatus, DisplayStatusCode};
pub use exhibition::{
    derive_schedule, ExhibitionKind, ExhibitionRecord, ExhibitionStatus, WorkDisplayWindow,
};
