// Core engine exports
pub mod evaluator;
pub mod filters;
pub mod pipeline;
pub mod scanner;
pub mod shopping_list;
pub mod stores;

pub use evaluator::evaluate;
pub use filters::{matches_brands, matches_categories, matches_dietary_tags, matches_facets, matches_search};
pub use pipeline::filter_catalog;
pub use scanner::{annotate_detections, SUITABLE_LABEL, UNSUITABLE_LABEL};
pub use shopping_list::ShoppingList;
pub use stores::{find_nearby_stores, haversine_distance};
