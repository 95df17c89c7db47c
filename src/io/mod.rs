pub mod error;
pub mod schema;

pub use error::SchemaError;
pub use schema::load_schema;
