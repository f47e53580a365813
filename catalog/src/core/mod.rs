//! Catalog core logic: pure functions with no injected collaborators

pub mod utils;
pub mod validation;

pub use utils::{is_integer, remove_duplicates, to_lower_case};
pub use validation::{ProductViolation, validate_product};
