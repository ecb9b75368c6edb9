use crate::core::evaluator::evaluate;
use crate::models::{Detection, OverlayAnnotation, UserProfile};

/// Overlay tag for products with no allergen conflict
pub const SUITABLE_LABEL: &str = "Suitable";
/// Overlay tag for products conflicting with the user's allergies
pub const UNSUITABLE_LABEL: &str = "Contains Allergen";

/// Annotate recognized products for the scanner overlay
///
/// The recognition feed supplies detections (product + screen region); this
/// decides the highlight label and carries the full verdict for the detail
/// sheet. Detection order is preserved so overlays stay aligned with the
/// feed.
pub fn annotate_detections(
    detections: &[Detection],
    profile: &UserProfile,
) -> Vec<OverlayAnnotation> {
    detections
        .iter()
        .map(|detection| {
            let verdict = evaluate(&detection.product, profile);
            let label = if verdict.suitable {
                SUITABLE_LABEL
            } else {
                UNSUITABLE_LABEL
            };

            OverlayAnnotation {
                product: detection.product.clone(),
                region: detection.region,
                verdict,
                label: label.to_string(),
            }
        })
        .collect()
}
