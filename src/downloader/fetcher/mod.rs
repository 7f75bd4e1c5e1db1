mod command_fetcher;
mod ureq_fetcher;

use super::FileDownloader;

pub use command_fetcher::{CommandFetcher, DEFAULT_PROGRAM};
pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;
