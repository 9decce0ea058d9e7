pub mod abandoned;
pub mod cart;
pub mod pricing;

pub use abandoned::*;
pub use cart::*;
pub use pricing::*;
