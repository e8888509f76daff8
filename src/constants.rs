//! Shared constants: API endpoints, defaults and the relevance weights.
//!
//! The relevance weights are part of the ranking contract; changing any of
//! them reorders every listing that uses `SortMode::Relevance`.

// Remote API
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const ARTWORKS_ENDPOINT: &str = "/api/vistas/obras-arte";
pub const EXHIBITIONS_ENDPOINT: &str = "/api/vistas/exposiciones-detalles";
pub const EXHIBITION_WORKS_ENDPOINT: &str = "/api/obra-exposicion/exposicion";

// Local cart cache
pub const DEFAULT_CART_PATH: &str = "cart.json";

// Exhibition relevance
pub const EXHIBITION_ACTIVE_WEIGHT: f64 = 100.0;
pub const EXHIBITION_UPCOMING_WEIGHT: f64 = 70.0;
pub const EXHIBITION_NAME_MATCH: f64 = 40.0;
pub const EXHIBITION_DESCRIPTION_MATCH: f64 = 20.0;
pub const EXHIBITION_KIND_MATCH: f64 = 15.0;
pub const EXHIBITION_LOCATION_MATCH: f64 = 10.0;
/// Ceiling of the start-date proximity bonus, in days.
pub const EXHIBITION_PROXIMITY_WINDOW_DAYS: f64 = 50.0;

// Artwork relevance
pub const ARTWORK_ON_DISPLAY_WEIGHT: f64 = 100.0;
pub const ARTWORK_TITLE_MATCH: f64 = 40.0;
pub const ARTWORK_ARTIST_MATCH: f64 = 25.0;
pub const ARTWORK_COLLECTION_MATCH: f64 = 15.0;
pub const ARTWORK_DESCRIPTION_MATCH: f64 = 10.0;
pub const ARTWORK_EXHIBITION_BONUS: f64 = 10.0;

/// Year contributes `year / YEAR_TIE_BREAK_DIVISOR` to every relevance score.
pub const YEAR_TIE_BREAK_DIVISOR: f64 = 1000.0;

/// Routes under this prefix are reserved for employees.
pub const PANEL_PATH_PREFIX: &str = "/panel";
