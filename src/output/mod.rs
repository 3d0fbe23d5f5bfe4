//! Output Generation
//!
//! Frame schemas and JSON file writing for external renderers.

pub mod frames;
pub mod schemas;

pub use frames::*;
pub use schemas::*;
