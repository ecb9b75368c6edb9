//! ShopSense Engine - product suitability and filtering for the ShopSense app
//!
//! This library provides the core logic shared by every ShopSense screen:
//! evaluating products against a user's dietary profile and running the
//! multi-facet catalog filter pipeline. It also carries the shopping list,
//! store locator, and scanner-overlay helpers built on the same evaluator.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    annotate_detections, evaluate, filter_catalog, find_nearby_stores, ShoppingList,
};
pub use crate::models::{
    Detection, FilterCriteria, MatchResult, OverlayAnnotation, Product, ScreenRegion, Store,
    StoreResult, SuitabilityVerdict, UserProfile,
};
