pub mod add_product;
pub mod dashboard;
pub mod farmers;
pub mod footer;
pub mod loader;
pub mod orders;
