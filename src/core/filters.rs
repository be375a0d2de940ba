use crate::core::matcher::satisfies;
use crate::models::{ContentItem, Interest, MatchResult, Profile, Tag};

/// Collect the values of every tag that satisfies an interest
///
/// Iterates interest-outer, tag-inner. A tag matched by two interests is
/// reported twice; no deduplication happens here.
pub fn find_relevant_tags(interests: &[Interest], tags: &[Tag]) -> Vec<String> {
    interests
        .iter()
        .flat_map(|interest| {
            tags.iter()
                .filter(move |tag| satisfies(interest, tag))
                .map(|tag| tag.value.clone())
        })
        .collect()
}

/// Find the catalog items relevant to a profile
///
/// Items with at least one satisfied interest are returned, in catalog
/// order, as [`MatchResult`]s carrying the matched tag values. Everything
/// else is dropped. Neither the profile nor the catalog is modified, so the
/// same catalog can be shared across calls.
pub fn find_relevant_content(profile: &Profile, catalog: &[ContentItem]) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = catalog
        .iter()
        .filter_map(|item| {
            let relevant_tags = find_relevant_tags(&profile.interests, &item.tags);
            if relevant_tags.is_empty() {
                None
            } else {
                Some(MatchResult {
                    item: item.clone(),
                    relevant_tags,
                })
            }
        })
        .collect();

    tracing::debug!(
        "Profile {} matched {} of {} items",
        profile.name,
        results.len(),
        catalog.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_interests() -> Vec<Interest> {
        vec![
            Interest::new("instrument", "VOD.L", 0.5),
            Interest::new("country", "UK", 0.24),
        ]
    }

    fn create_item(id: &str, tags: Vec<Tag>) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("Title {}", id),
            body: format!("Content {}", id),
            tags,
        }
    }

    #[test]
    fn test_basic_match() {
        let tags = vec![
            Tag::new("instrument", "VOD.L", 0.6),
            Tag::new("country", "UK", 0.20),
        ];

        assert_eq!(find_relevant_tags(&create_interests(), &tags), vec!["VOD.L"]);
    }

    #[test]
    fn test_multiple_matches_follow_interest_order() {
        let tags = vec![
            Tag::new("country", "UK", 0.25),
            Tag::new("instrument", "VOD.L", 0.6),
        ];

        assert_eq!(
            find_relevant_tags(&create_interests(), &tags),
            vec!["VOD.L", "UK"]
        );
    }

    #[test]
    fn test_duplicate_interests_report_tag_twice() {
        let interests = vec![
            Interest::new("instrument", "VOD.L", 0.5),
            Interest::new("instrument", "VOD.L", 0.1),
        ];
        let tags = vec![Tag::new("instrument", "VOD.L", 0.6)];

        assert_eq!(find_relevant_tags(&interests, &tags), vec!["VOD.L", "VOD.L"]);
    }

    #[test]
    fn test_empty_inputs() {
        let tags = vec![Tag::new("instrument", "VOD.L", 0.6)];

        assert!(find_relevant_tags(&[], &tags).is_empty());
        assert!(find_relevant_tags(&create_interests(), &[]).is_empty());
    }

    #[test]
    fn test_unmatched_items_dropped() {
        let profile = Profile {
            name: "John Doe".to_string(),
            interests: create_interests(),
        };
        let catalog = vec![
            create_item("123", vec![Tag::new("instrument", "VOD.L", 0.6)]),
            create_item("125", vec![Tag::new("genre", "Sci-Fi", 0.1)]),
            create_item("126", vec![]),
        ];

        let results = find_relevant_content(&profile, &catalog);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item, catalog[0]);
        assert_eq!(results[0].relevant_tags, vec!["VOD.L"]);
    }
}
