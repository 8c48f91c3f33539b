// Research service module.
// Provides the HTTP client and wire types for the remote search/summarization service.

pub mod client;
pub mod types;

pub use client::ResearchClient;
pub use types::SearchResult;
