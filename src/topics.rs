//! Heuristic topic tagging for explanations.
//!
//! Maps keywords found in a claim to short topic labels, used as the
//! "key areas" list attached to local verification results.

/// Keyword-to-topic table, scanned in declaration order.
///
/// Order matters: when a claim matches more than [`MAX_TOPICS`] keywords,
/// the first matches in this table win. Matching is substring containment
/// on the lowercased claim, not token equality, so "earthquake" matches
/// "earth".
const TOPIC_KEYWORDS: &[(&str, &str)] = &[
    ("earth", "planetary facts"),
    ("sun", "astronomy"),
    ("water", "chemistry"),
    ("human", "biology"),
    ("fire", "physics"),
    ("sky", "atmospheric science"),
    ("gravity", "physics"),
    ("moon", "astronomy"),
];

/// Topics returned when no keyword matches.
const DEFAULT_TOPICS: [&str; 2] = ["general knowledge", "scientific consensus"];

/// Maximum number of topics returned.
const MAX_TOPICS: usize = 3;

/// Tag a claim with up to three topic labels.
///
/// Falls back to a fixed general pair when nothing in the table matches.
pub fn tag(claim: &str) -> Vec<String> {
    let claim_lower = claim.to_lowercase();

    let topics: Vec<String> = TOPIC_KEYWORDS
        .iter()
        .filter(|(keyword, _)| claim_lower.contains(keyword))
        .map(|(_, topic)| topic.to_string())
        .take(MAX_TOPICS)
        .collect();

    if topics.is_empty() {
        DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
    } else {
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword() {
        assert_eq!(tag("The Moon is bright"), vec!["astronomy"]);
    }

    #[test]
    fn test_matches_follow_table_order() {
        // sun, water, fire, and sky all match; the first three in table
        // order are kept.
        let topics = tag("the sun heats water while fire lights the sky");
        assert_eq!(topics, vec!["astronomy", "chemistry", "physics"]);
    }

    #[test]
    fn test_substring_containment() {
        // "sunlight" contains "sun"; this is containment, not token match.
        assert_eq!(tag("Sunlight is warm"), vec!["astronomy"]);
    }

    #[test]
    fn test_no_match_returns_default_pair() {
        assert_eq!(
            tag("Paris is the capital of France"),
            vec!["general knowledge", "scientific consensus"]
        );
    }

    #[test]
    fn test_never_more_than_three() {
        let topics = tag("earth sun water human fire sky gravity moon");
        assert_eq!(topics.len(), 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tag("GRAVITY exists"), vec!["physics"]);
    }
}
