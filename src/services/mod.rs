// Boundary adapters for the engine's external collaborators
pub mod catalog;
pub mod profile;

pub use catalog::{load_products, load_stores, CatalogError, FileCatalogSource};
pub use profile::{load_profile, ProfileError};
