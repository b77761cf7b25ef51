pub mod loader;
pub mod schema;

pub use loader::{
    load_requirements, load_requirements_from_str, load_requirements_from_value,
    validate_requirements,
};
pub use schema::{Keywords, Requirements, SearchMode, DEFAULT_THRESHOLD};
