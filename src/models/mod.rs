// Model exports
pub mod domain;
pub mod vocab;

pub use domain::{
    Detection, FilterCriteria, MatchResult, OverlayAnnotation, Product, ScreenRegion,
    ShoppingItem, ShoppingSummary, Store, StoreResult, SuitabilityVerdict, UserProfile,
};
pub use vocab::{allergen_label, diet_label, facet_tag};
