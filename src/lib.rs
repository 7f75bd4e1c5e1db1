pub mod config;
mod downloader;
mod error;
mod plan;

pub use downloader::{
    enter_directory, CommandFetcher, Downloader, FileDownloader, UReqFetcher, DEFAULT_PROGRAM,
};
pub use error::Error;
pub use plan::{FetchPlan, BASE_URL};
