use crate::models::{vocab, Product, SuitabilityVerdict, UserProfile};

/// Evaluate one product against one user profile
///
/// Pure and total: every well-formed (product, profile) pair yields a
/// verdict, never an error.
///
/// # Precedence
/// 1. Any allergen the user avoids makes the product unsuitable, full stop.
///    The reason names the lexicographically smallest conflicting allergen
///    so the single warning line is reproducible.
/// 2. Dietary preferences only move the match score; an unmet preference is
///    a soft signal, never a warning.
pub fn evaluate(product: &Product, profile: &UserProfile) -> SuitabilityVerdict {
    // BTreeSet intersection iterates in ascending order, so the first hit
    // is the lexicographically smallest conflict.
    if let Some(allergen) = product.allergens.intersection(&profile.allergies).next() {
        return SuitabilityVerdict {
            suitable: false,
            reason: Some(format!("Contains {}", vocab::allergen_label(allergen))),
            match_score: 0,
        };
    }

    SuitabilityVerdict {
        suitable: true,
        reason: None,
        match_score: preference_score(product, profile),
    }
}

/// Score (0-100) for dietary preference overlap
///
/// An empty preference set is vacuously satisfied.
#[inline]
fn preference_score(product: &Product, profile: &UserProfile) -> u8 {
    if profile.dietary_preferences.is_empty() {
        return 100;
    }

    let satisfied = profile
        .dietary_preferences
        .intersection(&product.dietary_attributes)
        .count();

    (100.0 * satisfied as f64 / profile.dietary_preferences.len() as f64).round() as u8
}
