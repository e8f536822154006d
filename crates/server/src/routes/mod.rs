pub mod health;
pub mod scoresheet;
pub mod validate;
