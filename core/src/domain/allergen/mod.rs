pub mod catalog;
pub mod entities;
pub mod registry;

pub use entities::*;
pub use registry::AllergenRegistry;
