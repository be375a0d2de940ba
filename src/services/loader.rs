use crate::models::{ContentItem, Profile};
use std::collections::HashSet;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Errors raised while turning stored records into typed, validated data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {collection} data: {source}")]
    Malformed {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {collection} record at index {index}: {source}")]
    Invalid {
        collection: &'static str,
        index: usize,
        #[source]
        source: ValidationErrors,
    },

    #[error("Duplicate profile name: {0}")]
    DuplicateProfile(String),
}

/// Parse and validate a JSON array of profiles
///
/// Every interest must carry `type`, `value` and `threshold`; a missing
/// field fails the whole collection rather than skipping the record.
/// Profile names must be non-empty and unique.
pub fn parse_profiles(json: &str) -> Result<Vec<Profile>, LoadError> {
    let profiles: Vec<Profile> = serde_json::from_str(json).map_err(|source| {
        LoadError::Malformed {
            collection: "profile",
            source,
        }
    })?;

    validate_each("profile", &profiles)?;

    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in &profiles {
        if !seen.insert(profile.name.as_str()) {
            return Err(LoadError::DuplicateProfile(profile.name.clone()));
        }
    }

    tracing::debug!("Parsed {} profiles", profiles.len());
    Ok(profiles)
}

/// Parse and validate a JSON array of content items
pub fn parse_catalog(json: &str) -> Result<Vec<ContentItem>, LoadError> {
    let catalog: Vec<ContentItem> = serde_json::from_str(json).map_err(|source| {
        LoadError::Malformed {
            collection: "content",
            source,
        }
    })?;

    validate_each("content", &catalog)?;

    tracing::debug!("Parsed {} content items", catalog.len());
    Ok(catalog)
}

fn validate_each<T: Validate>(collection: &'static str, records: &[T]) -> Result<(), LoadError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| {
            record.validate().map_err(|source| LoadError::Invalid {
                collection,
                index,
                source,
            })
        })
}
