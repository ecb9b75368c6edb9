use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Catalog product entry
///
/// Immutable once loaded; owned by the catalog source. `allergens` and
/// `dietary_attributes` hold canonical identifiers from disjoint
/// vocabularies, `tags` holds free-form display tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    #[serde(rename = "dietaryAttributes", default)]
    pub dietary_attributes: BTreeSet<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A user's dietary constraints
///
/// `allergies` are hard exclusions, `dietary_preferences` only affect
/// ranking. `budget` is informational; the evaluator never enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    #[serde(rename = "dietaryPreferences", default)]
    pub dietary_preferences: BTreeSet<String>,
    #[serde(default)]
    pub budget: Option<f64>,
}

/// Active UI facet state
///
/// Re-created on every interaction; an empty set or empty text means the
/// facet is inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "searchText", default)]
    pub search_text: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub brands: BTreeSet<String>,
    #[serde(rename = "dietaryTags", default)]
    pub dietary_tags: BTreeSet<String>,
    #[serde(rename = "suitableOnly", default)]
    pub suitable_only: bool,
}

/// Outcome of evaluating one product against one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityVerdict {
    pub suitable: bool,
    /// Populated only when `suitable` is false; names one conflicting allergen.
    #[serde(default)]
    pub reason: Option<String>,
    /// 0-100, driven by dietary preference overlap.
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// One row of the filter pipeline output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub product: Product,
    pub verdict: SuitabilityVerdict,
}

/// Shopping list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default)]
    pub checked: bool,
    #[serde(rename = "addedAt", default)]
    pub added_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Totals for the shopping list header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSummary {
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    #[serde(rename = "checkedCount")]
    pub checked_count: usize,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "overBudget")]
    pub over_budget: bool,
}

/// Store locator entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "specialFeatures", default)]
    pub special_features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A store plus its computed distance from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreResult {
    pub store: Store,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Fractional screen rectangle for a recognized product
///
/// Coordinates are fractions of the camera frame (0.0-1.0), as supplied by
/// the recognition feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRegion {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// One recognized product from the scanner feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub product: Product,
    pub region: ScreenRegion,
}

/// Overlay content for one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayAnnotation {
    pub product: Product,
    pub region: ScreenRegion,
    pub verdict: SuitabilityVerdict,
    /// "Suitable" or "Contains Allergen", for the highlight tag.
    pub label: String,
}
