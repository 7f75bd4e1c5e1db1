use clap::Parser;
use tracing::debug;

use crate::{CommandFetcher, Error, FetchPlan, FileDownloader, UReqFetcher, DEFAULT_PROGRAM};

/// Download a numbered sequence of images into a directory named after them.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Upload year in the url
    #[arg(long, default_value_t = 2021)]
    pub year: u32,

    /// Upload month in the url, written exactly as given
    #[arg(long, default_value = "09")]
    pub month: String,

    /// Item name, used for the directory and each file name
    #[arg(long, default_value = "among-us")]
    pub item: String,

    /// File extension of every item
    #[arg(long, default_value = "jpg")]
    pub extension: String,

    /// How many items to fetch, numbered from 1
    #[arg(long, default_value_t = 8)]
    pub count: u32,

    /// External program invoked as `<downloader> <url>`
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub downloader: String,

    /// Fetch in-process instead of spawning a downloader
    #[arg(long, conflicts_with = "downloader")]
    pub builtin: bool,
}

impl Args {
    pub fn plan(&self) -> Result<FetchPlan, Error> {
        FetchPlan::new(
            self.year,
            self.month.as_str(),
            self.item.as_str(),
            self.extension.as_str(),
            self.count,
        )
    }

    pub fn fetcher(&self) -> Box<dyn FileDownloader> {
        if self.builtin {
            debug!("using built-in fetcher");

            Box::new(UReqFetcher::new())
        } else {
            debug!(program = %self.downloader, "using external downloader");

            Box::new(CommandFetcher::new(&self.downloader))
        }
    }
}
