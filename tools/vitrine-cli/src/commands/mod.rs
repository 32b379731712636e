//! Command implementations.

pub mod cart;
pub mod checkout;
pub mod product;
pub mod shop;

pub use cart::CartArgs;
pub use checkout::CheckoutArgs;
pub use product::ProductArgs;
pub use shop::ShopArgs;
