use serde_json::{Map, Value};

/// Reorder the top-level keys of `map` ascending by byte-wise comparison.
///
/// Values move with their keys untouched; nested objects keep their own key
/// order.
pub fn sort_top_level(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|left, right| left.0.cmp(&right.0));

    let mut sorted = Map::with_capacity(entries.len());
    for (key, value) in entries {
        sorted.insert(key, value);
    }
    sorted
}
