// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Interest, Tag, Profile, ContentItem, MatchResult};
pub use requests::RelevantContentRequest;
pub use responses::{ProfilesResponse, RelevantContentResponse, HealthResponse, ErrorResponse};
