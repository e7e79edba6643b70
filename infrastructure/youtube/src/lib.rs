pub mod client;
pub mod transcript_fetcher;
