use std::collections::HashSet;

use crate::types::Event;

const TITLE_KEY_CHARS: usize = 50;

/// Composite key: lowercased title (first 50 chars), raw date text and city.
pub fn dedup_key(event: &Event) -> String {
    let title: String = event
        .title
        .to_lowercase()
        .chars()
        .take(TITLE_KEY_CHARS)
        .collect();

    format!(
        "{}|{}|{}",
        title,
        event.date,
        event.city.as_deref().unwrap_or_default()
    )
}

/// Drops every event whose key was already seen, keeping the first occurrence in order.
pub fn deduplicate(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::with_capacity(events.len());
    events
        .into_iter()
        .filter(|event| seen.insert(dedup_key(event)))
        .collect()
}
