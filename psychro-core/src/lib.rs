//! Psychrometric property functions and chart-layer generation.
//!
//! All computations take their configuration ([`bounds::ChartBounds`],
//! [`layout::ChartLayout`]) explicitly and share no mutable state, so
//! independent chart requests never interfere.

pub mod bounds;
pub mod chart;
pub mod error;
pub mod layout;
pub mod properties;
pub mod units;

pub use bounds::ChartBounds;
pub use chart::{builder::ChartRequestBuilder, Chart};
pub use error::PsychroError;
pub use layout::ChartLayout;
