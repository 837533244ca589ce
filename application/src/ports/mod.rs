//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod calendar;
pub mod library_gateway;
pub mod tool_schema;
