mod client;
mod types;

pub use client::{TmdbClient, TmdbError};
pub use types::MovieListPage;
