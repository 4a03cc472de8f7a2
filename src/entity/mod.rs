pub mod cars;
pub mod orders;

pub use cars::Entity as Cars;
pub use orders::Entity as Orders;
