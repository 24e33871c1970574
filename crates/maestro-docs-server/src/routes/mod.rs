pub mod guide;
pub mod health;
pub mod page;
