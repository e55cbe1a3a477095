//! Unified configuration loading for the screening engine.
//!
//! Loads all configuration from a single YAML file; every field has a
//! default, so a missing or partial file still yields a working setup.

mod defaults;
mod error;
mod field;
mod grid;
mod sampling;
mod session;

pub use error::ConfigLoadError;
pub use field::FieldConfig;

pub use grid::GridSection;
pub use sampling::SamplingSection;
pub use session::SessionSection;
