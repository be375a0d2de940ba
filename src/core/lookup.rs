use crate::models::Profile;

/// Locate a profile by exact name; the first match wins.
pub fn find_profile<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().find(|profile| profile.name == name)
}

/// Profile names in ascending order, for presenting a selection
pub fn sorted_profile_names(profiles: &[Profile]) -> Vec<String> {
    let mut names: Vec<String> = profiles.iter().map(|p| p.name.clone()).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            interests: vec![],
        }
    }

    #[test]
    fn test_find_profile_exact() {
        let profiles = vec![profile("Alice"), profile("Bob")];

        assert_eq!(find_profile(&profiles, "Bob").map(|p| p.name.as_str()), Some("Bob"));
        assert!(find_profile(&profiles, "bob").is_none());
        assert!(find_profile(&profiles, "Carol").is_none());
    }

    #[test]
    fn test_sorted_names() {
        let profiles = vec![profile("Carol"), profile("Alice"), profile("Bob")];

        assert_eq!(sorted_profile_names(&profiles), vec!["Alice", "Bob", "Carol"]);
    }
}
