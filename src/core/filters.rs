use crate::models::{FilterCriteria, Product};
use std::collections::BTreeSet;

/// Case-insensitive substring match on the product name
///
/// Stage 1 of the filter pipeline. Empty or whitespace-only search text
/// keeps everything.
#[inline]
pub fn matches_search(product: &Product, search_text: &str) -> bool {
    let query = search_text.trim();
    if query.is_empty() {
        return true;
    }

    product.name.to_lowercase().contains(&query.to_lowercase())
}

/// Category facet (Stage 2): OR over the selected categories
#[inline]
pub fn matches_categories(product: &Product, categories: &BTreeSet<String>) -> bool {
    categories.is_empty() || categories.contains(&product.category)
}

/// Brand facet (Stage 3): OR over the selected brands
#[inline]
pub fn matches_brands(product: &Product, brands: &BTreeSet<String>) -> bool {
    brands.is_empty() || brands.contains(&product.brand)
}

/// Dietary facet (Stage 4): any selected tag present on the product
///
/// Matches against free-form display tags, not the canonical attribute
/// vocabulary; one hit is sufficient.
#[inline]
pub fn matches_dietary_tags(product: &Product, dietary_tags: &BTreeSet<String>) -> bool {
    dietary_tags.is_empty() || product.tags.intersection(dietary_tags).next().is_some()
}

/// All facet predicates combined with AND semantics
///
/// OR within each facet, AND across facets. The suitable-only flag is not
/// checked here; it applies after evaluation.
#[inline]
pub fn matches_facets(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_search(product, &criteria.search_text)
        && matches_categories(product, &criteria.categories)
        && matches_brands(product, &criteria.brands)
        && matches_dietary_tags(product, &criteria.dietary_tags)
}
