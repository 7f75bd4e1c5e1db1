use std::fs;
use std::io::Read;

use url::Url;

use super::FileDownloader;

const FALLBACK_FILE_NAME: &str = "download.data";

/// In-process fetcher for machines without an external download tool.
///
/// Saves the body in the working directory under the url's last path
/// segment, the same name an external tool would pick.
pub struct UReqFetcher;

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) {
        let Ok(response) = ureq::get(url).call() else {
            return;
        };

        let body = response
            .into_reader()
            .bytes()
            .collect::<Result<Vec<u8>, _>>();

        let Ok(body) = body else {
            return;
        };

        let _ = fs::write(Self::file_name_for(url), body);
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher
    }

    pub fn file_name_for(url: &str) -> String {
        Url::parse(url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|segments| segments.last().map(str::to_string))
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
