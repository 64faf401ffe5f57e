//! Domain layer: chart descriptors, synthetic datasets and site content.
//!
//! Nothing here touches HTTP or templates. Chart descriptors are plain data
//! built per request and handed to a [`charts::ChartRenderer`] implemented by
//! the infrastructure layer.
//!
//! # Modules
//!
//! - [`charts`] - Series, layout, chart identifiers and the renderer trait
//! - [`datasets`] - Hardcoded demo figures and random series generators
//! - [`entities`] - Static site content (feature cards)

pub mod charts;
pub mod datasets;
pub mod entities;
