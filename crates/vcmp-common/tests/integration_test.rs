//! Integration tests for vcmp-common crate.

use proptest::prelude::*;
use vcmp_common::{embed_value, join_or, truncate_string, ServerQuery, EMBED_FIELD_VALUE_LIMIT};

#[test]
fn test_server_query_display() {
    let query = ServerQuery::new("51.38.93.130", 8192);
    assert_eq!(format!("{query}"), "51.38.93.130:8192");
}

#[test]
fn test_player_list_join() {
    let names = vec!["Tommy".to_string(), "Lance".to_string(), "Ken".to_string()];
    assert_eq!(join_or(&names, "No players online"), "Tommy, Lance, Ken");
    assert_eq!(join_or(&Vec::<String>::new(), "No players online"), "No players online");
}

#[test]
fn test_embed_value_fallback() {
    assert_eq!(embed_value("", "Unknown"), "Unknown");
}

proptest! {
    #[test]
    fn test_truncate_never_exceeds_limit(input in ".{0,3000}", limit in 3usize..2048) {
        let truncated = truncate_string(&input, limit);
        prop_assert!(truncated.chars().count() <= limit);
    }

    #[test]
    fn test_embed_value_within_discord_limit(input in ".{1,3000}") {
        let value = embed_value(&input, "Unknown");
        prop_assert!(value.chars().count() <= EMBED_FIELD_VALUE_LIMIT);
        prop_assert!(!value.is_empty());
    }
}
