//! Shared string helpers for building Discord payloads.

/// Maximum length of an embed field value accepted by Discord.
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;

/// Maximum length of an embed title accepted by Discord.
pub const EMBED_TITLE_LIMIT: usize = 256;

/// Truncates a string to at most `max_chars` characters, ending with an ellipsis
/// when anything was cut. Operates on `char`s so multi-byte names never split.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = input.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Joins items with `", "`, or returns `empty` when there is nothing to join.
pub fn join_or<I, S>(items: I, empty: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect();

    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Prepares a value for an embed field: blank input becomes `fallback`, long
/// input is cut to Discord's field limit.
pub fn embed_value(input: &str, fallback: &str) -> String {
    if input.trim().is_empty() {
        fallback.to_string()
    } else {
        truncate_string(input, EMBED_FIELD_VALUE_LIMIT)
    }
}
