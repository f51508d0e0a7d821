pub mod milanuncios;
pub mod traits;
pub mod types;

pub use milanuncios::{scrape_listing, MilanunciosClient};
pub use traits::DocumentProvider;
pub use types::SearchFilter;
