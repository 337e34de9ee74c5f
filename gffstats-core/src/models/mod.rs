pub mod feature;

// re-export for cleaner imports
pub use self::feature::{Feature, feature_length};
