pub mod json_fields;

pub use json_fields::JsonFields;
