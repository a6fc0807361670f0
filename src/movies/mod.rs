pub mod error;
pub mod filter;
pub mod handlers;

pub use error::ApiError;
pub use filter::with_posters;
pub use handlers::*;
