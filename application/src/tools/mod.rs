//! Library tools: catalog, handlers and registry

pub mod catalog;
pub mod handlers;
pub mod registry;

pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
