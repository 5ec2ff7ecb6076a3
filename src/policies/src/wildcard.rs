//! Wildcard matching for resource patterns
//!
//! A resource pattern is matched literally except for `*`, which matches
//! any sequence of zero or more characters. Matching is anchored: the
//! entire candidate must match, not a substring.

use regex::Regex;

/// Translate a resource pattern into an anchored regex.
///
/// Every character except `*` is escaped, so regex metacharacters in
/// patterns match themselves.
fn compile(pattern: &str) -> Option<Regex> {
    let escaped = pattern
        .split('*')
        .map(|segment| regex::escape(segment))
        .collect::<Vec<_>>()
        .join(".*");

    // (?s) lets `.*` span every character, newlines included.
    Regex::new(&format!("(?s)^{}$", escaped)).ok()
}

/// Return the candidates that match `pattern`, preserving input order.
///
/// # Examples
///
/// ```
/// use keygrid_policies::wildcard::filter;
///
/// let resources = ["channel-1", "channel-2", "user-1"];
/// assert_eq!(filter(&resources, "channel-*"), vec!["channel-1", "channel-2"]);
/// assert_eq!(filter(&resources, "*"), vec!["channel-1", "channel-2", "user-1"]);
/// assert_eq!(filter(&resources, "user-1"), vec!["user-1"]);
/// ```
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], pattern: &str) -> Vec<&'a str> {
    if let Some(regex) = compile(pattern) {
        return candidates
            .iter()
            .map(|candidate| candidate.as_ref())
            .filter(|candidate| regex.is_match(candidate))
            .collect();
    }

    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| *candidate == pattern)
        .collect()
}

/// Check whether a single candidate matches `pattern`.
pub fn matches(candidate: &str, pattern: &str) -> bool {
    if let Some(regex) = compile(pattern) {
        return regex.is_match(candidate);
    }

    candidate == pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_empty_when_nothing_matches() {
        let resources = ["resource-1", "resource-2"];
        assert!(filter(&resources, "not-exist-*").is_empty());
    }

    #[test]
    fn test_universal_wildcard_matches_everything() {
        let resources = ["resource-1", "resource-2"];
        assert_eq!(filter(&resources, "*"), vec!["resource-1", "resource-2"]);
    }

    #[test]
    fn test_universal_wildcard_matches_empty_string() {
        let resources = [""];
        assert_eq!(filter(&resources, "*"), vec![""]);
    }

    #[test]
    fn test_universal_wildcard_matches_newlines() {
        let resources = ["line1\nline2"];
        assert_eq!(filter(&resources, "*"), vec!["line1\nline2"]);
    }

    #[test]
    fn test_literal_pattern_matches_exactly_one() {
        let resources = ["resource-1", "resource-2", "resource-3"];
        assert_eq!(filter(&resources, "resource-2"), vec!["resource-2"]);
    }

    #[test]
    fn test_prefix_wildcard() {
        let resources = ["resource-1", "other-1"];
        assert_eq!(filter(&resources, "other-*"), vec!["other-1"]);
    }

    #[test]
    fn test_literal_is_not_a_prefix_match() {
        let resources = ["a", "ab"];
        assert_eq!(filter(&resources, "a"), vec!["a"]);
    }

    #[test]
    fn test_wildcard_matches_zero_characters() {
        let resources = ["channel-", "channel-1"];
        assert_eq!(filter(&resources, "channel-*"), vec!["channel-", "channel-1"]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let resources: [&str; 0] = [];
        assert!(filter(&resources, "*").is_empty());
    }

    #[test]
    fn test_regex_metacharacters_match_literally() {
        let resources = ["a.b", "axb", "a(b)[c]", "a+b"];
        assert_eq!(filter(&resources, "a.b"), vec!["a.b"]);
        assert_eq!(filter(&resources, "a(b)[c]"), vec!["a(b)[c]"]);
        assert_eq!(filter(&resources, "a+b"), vec!["a+b"]);
    }

    #[test]
    fn test_metacharacters_combined_with_wildcard() {
        let resources = ["tenant::link::1", "tenant::link::2", "tenant::team::1"];
        assert_eq!(
            filter(&resources, "tenant::link::*"),
            vec!["tenant::link::1", "tenant::link::2"]
        );
    }

    #[test]
    fn test_multiple_wildcards() {
        let resources = ["a-middle-z", "a-z", "b-middle-z"];
        assert_eq!(filter(&resources, "a-*-z"), vec!["a-middle-z"]);
        assert_eq!(filter(&resources, "a*z"), vec!["a-middle-z", "a-z"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let resources = ["Channel-1"];
        assert!(filter(&resources, "channel-*").is_empty());
    }

    #[test]
    fn test_matches_single_candidate() {
        assert!(matches("chronark-channel1", "chronark-*"));
        assert!(matches("anything", "*"));
        assert!(!matches("user-1", "channel-*"));
        assert!(!matches("channel-1-extra", "channel-1"));
    }
}
