pub mod allergen;
pub mod alternatives;
pub mod common;
pub mod ingredient_check;
pub mod ingredient_index;
pub mod scan;
