use serde::{Deserialize, Serialize};
use validator::Validate;

/// A profile's stated preference: a category, a subject within it and the
/// minimum strength a tag must carry to count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub threshold: f64,
}

impl Interest {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, threshold: f64) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            threshold,
        }
    }
}

/// A content item's classification along one category.
///
/// Same shape as [`Interest`], but `threshold` is the strength with which the
/// tag applies to the content rather than a requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub threshold: f64,
}

impl Tag {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, threshold: f64) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            threshold,
        }
    }
}

/// A named profile; interest order drives the order of `relevant_tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub name: String,
    pub interests: Vec<Interest>,
}

/// A catalog entry with display fields and its ordered tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContentItem {
    #[validate(length(min = 1))]
    pub id: String,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    pub tags: Vec<Tag>,
}

/// A content item decorated with the tag values that satisfied the profile.
///
/// Built as a new value; the catalog record it came from is left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub item: ContentItem,
    pub relevant_tags: Vec<String>,
}
