pub mod cars;
pub mod orders;
