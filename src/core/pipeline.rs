use crate::core::{evaluator::evaluate, filters::matches_facets};
use crate::models::{FilterCriteria, MatchResult, Product, UserProfile};
use tracing::debug;

/// Run the catalog filter pipeline
///
/// Every screen that shows a filtered product list goes through this one
/// function instead of re-implementing the facet logic locally.
///
/// # Pipeline Stages
/// 1. Text search (case-insensitive substring on name)
/// 2. Category facet
/// 3. Brand facet
/// 4. Dietary-tag facet
/// 5. Suitability evaluation against the profile
/// 6. Suitable-only drop (after evaluation, so verdicts stay auditable)
/// 7. Sort: match score descending, name ascending on ties
///
/// Facets compose with AND across facets and OR within a facet's selected
/// set. Later stages never re-admit items removed earlier. An empty result
/// is a normal value, not an error.
pub fn filter_catalog(
    catalog: &[Product],
    profile: &UserProfile,
    criteria: &FilterCriteria,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        // Stages 1-4: facet narrowing
        .filter(|product| matches_facets(product, criteria))
        // Stage 5: evaluate survivors
        .map(|product| MatchResult {
            product: product.clone(),
            verdict: evaluate(product, profile),
        })
        // Stage 6: suitable-only
        .filter(|result| !criteria.suitable_only || result.verdict.suitable)
        .collect();

    // Stage 7: score descending, name ascending. sort_by is stable, so
    // equal (score, name) pairs keep catalog order.
    results.sort_by(|a, b| {
        b.verdict
            .match_score
            .cmp(&a.verdict.match_score)
            .then_with(|| a.product.name.cmp(&b.product.name))
    });

    debug!(
        total = catalog.len(),
        matched = results.len(),
        suitable_only = criteria.suitable_only,
        "catalog filter pipeline complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn create_product(
        id: &str,
        name: &str,
        category: &str,
        brand: &str,
        tags: &[&str],
        allergens: &[&str],
        attributes: &[&str],
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 4.99,
            category: category.to_string(),
            brand: brand.to_string(),
            tags: set(tags),
            allergens: set(allergens),
            dietary_attributes: set(attributes),
            image: None,
            created_at: None,
        }
    }

    fn create_catalog() -> Vec<Product> {
        vec![
            create_product(
                "1",
                "Organic Almond Milk",
                "Dairy",
                "Silk",
                &["Dairy-Free", "Vegan"],
                &[],
                &["vegan", "dairy_free"],
            ),
            create_product(
                "2",
                "Greek Yogurt",
                "Dairy",
                "Chobani",
                &["High Protein", "Low Sugar"],
                &["dairy"],
                &[],
            ),
            create_product(
                "3",
                "Gluten-Free Bread",
                "Bakery",
                "Canyon Bakehouse",
                &["Gluten-Free", "Vegan"],
                &[],
                &["gluten_free", "vegan"],
            ),
            create_product(
                "4",
                "Whole Grain Pasta",
                "Pantry",
                "Barilla",
                &["High Fiber", "Vegan"],
                &["gluten"],
                &["vegan"],
            ),
        ]
    }

    fn create_profile() -> UserProfile {
        UserProfile {
            user_id: "u1".to_string(),
            allergies: set(&["dairy"]),
            dietary_preferences: set(&["vegan"]),
            budget: None,
        }
    }

    #[test]
    fn test_empty_criteria_returns_full_catalog() {
        let results = filter_catalog(&create_catalog(), &create_profile(), &FilterCriteria::default());

        assert_eq!(results.len(), 4);
        // Sorted by score descending, then name ascending
        assert_eq!(results[0].product.name, "Gluten-Free Bread");
        assert_eq!(results[1].product.name, "Organic Almond Milk");
        assert_eq!(results[2].product.name, "Whole Grain Pasta");
        assert_eq!(results[3].product.name, "Greek Yogurt");
    }

    #[test]
    fn test_text_search_narrows() {
        let criteria = FilterCriteria {
            search_text: "milk".to_string(),
            ..Default::default()
        };

        let results = filter_catalog(&create_catalog(), &create_profile(), &criteria);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product.id, "1");
    }

    #[test]
    fn test_suitable_only_drops_conflicts() {
        let criteria = FilterCriteria {
            suitable_only: true,
            ..Default::default()
        };

        let results = filter_catalog(&create_catalog(), &create_profile(), &criteria);

        // Only the yogurt conflicts with a dairy allergy
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.verdict.suitable));
        assert!(!results.iter().any(|r| r.product.id == "2"));
    }

    #[test]
    fn test_dietary_facet_against_tags() {
        let criteria = FilterCriteria {
            dietary_tags: set(&["Gluten-Free"]),
            ..Default::default()
        };

        let results = filter_catalog(&create_catalog(), &create_profile(), &criteria);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product.id, "3");
    }

    #[test]
    fn test_category_and_brand_intersect() {
        let criteria = FilterCriteria {
            categories: set(&["Dairy"]),
            brands: set(&["Chobani"]),
            ..Default::default()
        };

        let results = filter_catalog(&create_catalog(), &create_profile(), &criteria);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product.id, "2");
    }

    #[test]
    fn test_two_brands_union() {
        let both = FilterCriteria {
            brands: set(&["Silk", "Barilla"]),
            ..Default::default()
        };
        let silk = FilterCriteria {
            brands: set(&["Silk"]),
            ..Default::default()
        };
        let barilla = FilterCriteria {
            brands: set(&["Barilla"]),
            ..Default::default()
        };

        let catalog = create_catalog();
        let profile = create_profile();

        let union_ids: BTreeSet<String> = filter_catalog(&catalog, &profile, &both)
            .into_iter()
            .map(|r| r.product.id)
            .collect();
        let mut single_ids: BTreeSet<String> = filter_catalog(&catalog, &profile, &silk)
            .into_iter()
            .map(|r| r.product.id)
            .collect();
        single_ids.extend(
            filter_catalog(&catalog, &profile, &barilla)
                .into_iter()
                .map(|r| r.product.id),
        );

        assert_eq!(union_ids, single_ids);
    }

    #[test]
    fn test_idempotent_runs() {
        let catalog = create_catalog();
        let profile = create_profile();
        let criteria = FilterCriteria {
            search_text: "e".to_string(),
            suitable_only: true,
            ..Default::default()
        };

        let first = filter_catalog(&catalog, &profile, &criteria);
        let second = filter_catalog(&catalog, &profile, &criteria);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let criteria = FilterCriteria {
            search_text: "durian".to_string(),
            ..Default::default()
        };

        assert!(filter_catalog(&create_catalog(), &create_profile(), &criteria).is_empty());
    }

    #[test]
    fn test_name_tie_break_on_equal_scores() {
        let catalog = vec![
            create_product("1", "Zucchini", "Produce", "A", &[], &[], &["vegan"]),
            create_product("2", "Apple", "Produce", "A", &[], &[], &["vegan"]),
        ];

        let results = filter_catalog(&catalog, &create_profile(), &FilterCriteria::default());

        assert_eq!(results[0].product.name, "Apple");
        assert_eq!(results[1].product.name, "Zucchini");
    }
}
