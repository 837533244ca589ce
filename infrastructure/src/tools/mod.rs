//! Tool catalog adapters

mod schema;

pub use schema::JsonSchemaToolConverter;
