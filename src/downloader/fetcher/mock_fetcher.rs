use std::cell::RefCell;

use super::FileDownloader;

pub struct MockFetcher {
    calls: RefCell<Vec<String>>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) {
        self.calls.borrow_mut().push(url.to_string());
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}
