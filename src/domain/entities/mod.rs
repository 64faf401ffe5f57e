//! Static content entities shown on the site pages.

pub mod feature;

pub use feature::Feature;
