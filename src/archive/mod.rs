//! Archive handling: entry safety, extraction and remote downloads

pub mod extract;
pub mod fetch;
pub mod safety;

pub use extract::extract_safely;
pub use fetch::{ArchiveFetcher, HttpFetcher, NoFetcher};
