mod fetcher;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, FetchPlan};

pub use fetcher::{CommandFetcher, UReqFetcher, DEFAULT_PROGRAM};

/// Something that can retrieve a single url into the working directory.
///
/// Fetching is fire-and-forget: the caller never learns whether it worked.
pub trait FileDownloader {
    fn fetch(&self, url: &str);
}

impl<T: FileDownloader + ?Sized> FileDownloader for &T {
    fn fetch(&self, url: &str) {
        (**self).fetch(url)
    }
}

impl<T: FileDownloader + ?Sized> FileDownloader for Box<T> {
    fn fetch(&self, url: &str) {
        (**self).fetch(url)
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    plan: FetchPlan,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(plan: FetchPlan, fetcher: T) -> Self {
        Downloader { fetcher, plan }
    }

    pub fn plan(&self) -> &FetchPlan {
        &self.plan
    }

    /// Moves into the plan's directory and fetches every item of the run.
    ///
    /// Only directory errors are reported. Individual fetches that fail
    /// leave no trace beyond the missing file.
    pub fn run(&self) -> Result<(), Error> {
        let path = enter_directory(self.plan.directory())?;

        info!(
            path = %path.display(),
            count = self.plan.count(),
            "entered download directory"
        );

        self.fetch_all();

        info!(item = self.plan.item_name(), "batch finished");

        Ok(())
    }

    /// Fetches every url of the plan in order, one at a time, from wherever
    /// the process currently is.
    pub fn fetch_all(&self) {
        for url in self.plan.urls() {
            println!("Downloading: {}", url);

            self.fetcher.fetch(&url);
        }
    }
}

impl Downloader<CommandFetcher> {
    pub fn new(plan: FetchPlan) -> Self {
        Downloader::with_fetcher(plan, CommandFetcher::default())
    }
}

/// Creates `path` (and any missing parents) and makes it the process
/// working directory. Returns the absolute path entered.
pub fn enter_directory(path: &Path) -> Result<PathBuf, Error> {
    let directory_error = |source| Error::Directory {
        path: path.to_path_buf(),
        source,
    };

    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_err(directory_error)?.join(path)
    };

    fs::create_dir_all(&absolute_path).map_err(directory_error)?;

    env::set_current_dir(&absolute_path).map_err(directory_error)?;

    Ok(absolute_path)
}

#[cfg(test)]
use fetcher::MockFetcher;
