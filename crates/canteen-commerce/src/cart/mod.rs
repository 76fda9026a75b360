//! Cart module.
//!
//! Contains the cart store and its lines.

mod cart;
mod line;

pub use cart::CartStore;
pub use line::CartLine;
