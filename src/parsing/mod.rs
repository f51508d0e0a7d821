pub mod assembler;
pub mod fields;
pub mod pagination;
pub mod tree;

pub use assembler::parse_ads;
pub use pagination::estimate_pages;
