pub mod env;
pub mod validate;
