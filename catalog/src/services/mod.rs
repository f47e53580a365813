//! Real implementations of the catalog capability traits

pub mod id_generator;
pub mod product_source;
pub mod transport;

#[cfg(test)]
pub mod tests;

pub use id_generator::*;
pub use product_source::*;
pub use transport::*;
