//! Canonical allergen / dietary-attribute vocabulary
//!
//! The engine works on canonical identifiers (`dairy`, `gluten_free`);
//! display formatting lives here so it is resolved once at the UI boundary
//! instead of being scattered through screens. Unknown identifiers are not
//! errors: they fall back to a capitalized rendering and simply never match
//! a known facet.

/// Known allergen identifiers with their display labels
pub const KNOWN_ALLERGENS: &[(&str, &str)] = &[
    ("dairy", "Dairy"),
    ("eggs", "Eggs"),
    ("fish", "Fish"),
    ("gluten", "Gluten"),
    ("peanuts", "Peanuts"),
    ("shellfish", "Shellfish"),
    ("soy", "Soy"),
    ("tree_nuts", "Tree Nuts"),
];

/// Known dietary-attribute identifiers with their display labels
pub const KNOWN_DIET_ATTRIBUTES: &[(&str, &str)] = &[
    ("dairy_free", "Dairy-Free"),
    ("gluten_free", "Gluten-Free"),
    ("low_fat", "Low Fat"),
    ("low_salt", "Low Salt"),
    ("low_sugar", "Low Sugar"),
    ("organic", "Organic"),
    ("vegan", "Vegan"),
    ("vegetarian", "Vegetarian"),
];

/// UI facet keys as the filter sheet emits them, mapped to the display tags
/// products carry in `tags`
const FACET_TAGS: &[(&str, &str)] = &[
    ("glutenFree", "Gluten-Free"),
    ("lowSugar", "Low Sugar"),
    ("organic", "Organic"),
    ("vegan", "Vegan"),
];

/// Display label for an allergen identifier
pub fn allergen_label(id: &str) -> String {
    lookup(KNOWN_ALLERGENS, id).unwrap_or_else(|| capitalize(id))
}

/// Display label for a dietary-attribute identifier
pub fn diet_label(id: &str) -> String {
    lookup(KNOWN_DIET_ATTRIBUTES, id).unwrap_or_else(|| capitalize(id))
}

/// Resolve a UI facet key (e.g. "glutenFree") to the product tag it selects
pub fn facet_tag(ui_key: &str) -> Option<&'static str> {
    FACET_TAGS
        .iter()
        .find(|(key, _)| *key == ui_key)
        .map(|(_, tag)| *tag)
}

fn lookup(table: &[(&str, &str)], id: &str) -> Option<String> {
    table
        .iter()
        .find(|(canonical, _)| *canonical == id)
        .map(|(_, label)| (*label).to_string())
}

/// Fallback rendering for identifiers outside the known vocabulary:
/// underscores become spaces, each word is capitalized.
fn capitalize(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
