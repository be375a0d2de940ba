use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compute relevant content for a named profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RelevantContentRequest {
    #[validate(length(min = 1))]
    pub name: String,
}
