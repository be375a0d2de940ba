// Service exports
pub mod loader;
pub mod store;

pub use loader::{parse_catalog, parse_profiles, LoadError};
pub use store::{DataStore, Dataset};
