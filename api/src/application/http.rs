pub mod allergen;
pub mod health;
pub mod ingredient_check;
pub mod scan;
pub mod server;
