use serde_json::Value;

use crate::app::ports::RecordSource;
use crate::constants::{ARTWORKS_ENDPOINT, EXHIBITIONS_ENDPOINT, EXHIBITION_WORKS_ENDPOINT};
use crate::domain::{ArtworkRecord, ExhibitionRecord, WorkDisplayWindow};
use crate::pipeline::normalize::{normalize_work_window, ArtworkNormalizer, ExhibitionNormalizer, Normalizer};

/// Loads catalog listings ready for the query engine.
///
/// Fetch failures never reach the caller: they are logged and replaced with
/// an empty list, so a broken API shows an empty catalog instead of an error.
pub struct CatalogUseCase {
    source: Box<dyn RecordSource>,
}

impl CatalogUseCase {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    async fn fetch_or_empty(&self, path: &str) -> Vec<Value> {
        match self.source.fetch_list(path).await {
            Ok(items) => {
                tracing::info!(path, count = items.len(), "loaded list");
                items
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "list fetch failed, using empty list");
                Vec::new()
            }
        }
    }

    pub async fn artworks(&self) -> Vec<ArtworkRecord> {
        let raw = self.fetch_or_empty(ARTWORKS_ENDPOINT).await;
        ArtworkNormalizer.normalize_all(&raw)
    }

    pub async fn exhibitions(&self) -> Vec<ExhibitionRecord> {
        let raw = self.fetch_or_empty(EXHIBITIONS_ENDPOINT).await;
        ExhibitionNormalizer.normalize_all(&raw)
    }

    /// Display windows of the works shown in exhibition `id`.
    pub async fn exhibition_works(&self, id: i64) -> Vec<WorkDisplayWindow> {
        let path = format!("{}/{}", EXHIBITION_WORKS_ENDPOINT, id);
        self.fetch_or_empty(&path)
            .await
            .iter()
            .map(normalize_work_window)
            .collect()
    }

    /// One exhibition with any missing dates filled from its works' schedule.
    pub async fn exhibition_detail(&self, id: i64) -> Option<ExhibitionRecord> {
        let exhibition = self.exhibitions().await.into_iter().find(|e| e.id == id)?;
        let windows = self.exhibition_works(id).await;
        Some(exhibition.with_schedule(&windows))
    }
}
