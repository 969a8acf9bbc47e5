//! Query matching for the option list.
//!
//! Lowercase substring containment, no ranking. Every keystroke recomputes
//! visibility for the whole collection; entry counts stay in the tens to
//! low hundreds.

use crate::core::entry::Entry;

/// Split a query into lowercased tokens.
///
/// The query is trimmed and split on single spaces. An empty or
/// whitespace-only query produces one empty token, and since every string
/// contains the empty substring, an empty query matches everything. That is
/// the intended resting state of the launcher, not an edge case.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Whether `entry` matches any of the given tokens.
///
/// A token matches when it is a substring of the lowercased provider name
/// or of the lowercased title. Tokens combine with OR, as do the two
/// fields: a multi-word query shows everything any of its words hit.
pub fn entry_matches(entry: &Entry, tokens: &[String]) -> bool {
    let provider_name = entry.provider_name().to_lowercase();
    let title = entry.title().to_lowercase();

    tokens
        .iter()
        .any(|token| provider_name.contains(token) || title.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::Payload;

    fn entry(provider: &str, title: &str) -> Entry {
        Entry::new(provider, title, "", Payload::None)
    }

    #[test]
    fn test_empty_query_yields_single_empty_token() {
        assert_eq!(query_tokens(""), vec![String::new()]);
        assert_eq!(query_tokens("   "), vec![String::new()]);
    }

    #[test]
    fn test_tokens_are_trimmed_and_lowercased() {
        assert_eq!(query_tokens("  Fire fox "), vec!["fire", "fox"]);
    }

    #[test]
    fn test_empty_token_matches_everything() {
        let tokens = query_tokens("");
        assert!(entry_matches(&entry("Applications", "Firefox"), &tokens));
        assert!(entry_matches(&entry("Clock", ""), &tokens));
    }

    #[test]
    fn test_title_substring_match_is_case_insensitive() {
        let tokens = query_tokens("FIRE");
        assert!(entry_matches(&entry("Applications", "Firefox"), &tokens));
        assert!(!entry_matches(
            &entry("Git Repositories", "~/project"),
            &tokens
        ));
    }

    #[test]
    fn test_provider_name_is_matched_too() {
        let tokens = query_tokens("repo");
        assert!(entry_matches(
            &entry("Git Repositories", "~/project"),
            &tokens
        ));
    }

    #[test]
    fn test_action_hint_is_not_matched() {
        let e = Entry::new("Applications", "Firefox", "Enter to launch", Payload::None);
        assert!(!entry_matches(&e, &query_tokens("enter")));
    }

    #[test]
    fn test_any_token_matching_any_field_is_enough() {
        // OR across tokens and fields: "zzz firefox" still shows Firefox.
        let tokens = query_tokens("zzz firefox");
        assert!(entry_matches(&entry("Applications", "Firefox"), &tokens));
    }
}
