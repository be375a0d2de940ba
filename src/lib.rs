//! Relevance Engine - rule-based matching of tagged content against profile interests
//!
//! Given a profile of typed, thresholded interests and a catalog of tagged
//! content items, the engine keeps the items whose tags satisfy at least one
//! interest and annotates each with the tag values that justified it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    find_profile, find_relevant_content, find_relevant_tags, satisfies, sorted_profile_names,
};
pub use models::{ContentItem, Interest, MatchResult, Profile, Tag};
