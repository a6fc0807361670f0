use serde::Deserialize;
use serde_json::Value;

/// One page of a TMDB list response. Only the `results` array is consumed;
/// the records inside it stay opaque so the routes can pass them through
/// without touching any field.
#[derive(Debug, Deserialize)]
pub struct MovieListPage {
    #[serde(default)]
    pub results: Vec<Value>,
}
