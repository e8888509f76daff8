pub mod catalog_use_case;
pub mod ports;

pub use catalog_use_case::CatalogUseCase;
