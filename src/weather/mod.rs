//! Weather widget pipeline
//!
//! The engineered core of the server: input normalization, the fetch state
//! machine, formatting, rendering, and server-side bundle assembly.

pub mod bundle;
pub mod client;
pub mod fetch;
pub mod format;
pub mod normalize;
pub mod render;
pub mod types;
pub mod widgets;
