// Core algorithm exports
pub mod filters;
pub mod lookup;
pub mod matcher;

pub use filters::{find_relevant_content, find_relevant_tags};
pub use lookup::{find_profile, sorted_profile_names};
pub use matcher::satisfies;
