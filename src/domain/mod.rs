pub mod cart;
pub mod category;
pub mod content;
pub mod order;
pub mod predefined;
pub mod product;
pub mod variant;
