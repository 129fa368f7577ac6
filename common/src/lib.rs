pub mod cart;
pub mod errors;
pub mod models;
pub mod pricing;

pub use cart::{Cart, CartStorage, CartTotals, CART_KEY};
pub use errors::CatalogError;
pub use models::*;
