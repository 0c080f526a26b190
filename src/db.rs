pub mod lookup;
pub use lookup::{ProductLookup, SalesLookup};
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod sales_repo;
pub use sales_repo::SalesRepository;

#[cfg(test)]
pub mod memory;
