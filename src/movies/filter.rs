use serde_json::Value;

/// Keep only the records that have a poster image. A record qualifies when
/// its `poster_path` is present and not JSON null; an empty string still
/// counts as a poster. Order is preserved, nothing is deduplicated.
pub fn with_posters(results: Vec<Value>) -> Vec<Value> {
    results
        .into_iter()
        .filter(|record| record.get("poster_path").map_or(false, |p| !p.is_null()))
        .collect()
}
