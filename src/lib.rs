//! Weather Widget MCP Server
//!
//! A Model Context Protocol (MCP) server whose tools return HTML widgets
//! for a host UI surface. The core is the weather widget pipeline: input
//! normalization, a single-attempt fetch state machine with last-query-wins
//! supersession, pure formatting/rendering, and server-side bundle assembly
//! with optional prefetched seed data.

pub mod config;
pub mod error;
pub mod mcp;
pub mod weather;

pub use config::Config;
pub use error::{Result, WidgetServerError};
