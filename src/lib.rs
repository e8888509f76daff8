pub mod access;
pub mod cart;
pub mod common;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;

// Application boundary and its adapters
pub mod app;
pub mod infra;

pub use error::{CatalogError, Result};
