pub mod client;
pub mod error;
pub mod evolution;

pub use client::PokeApiClient;
pub use error::{ApiError, Result};
