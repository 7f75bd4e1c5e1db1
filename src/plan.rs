use std::path::Path;

use url::Url;

use crate::Error;

pub const BASE_URL: &str = "https://modyolo.com/wp-content/uploads";

/// A numbered run of files published under one date folder.
///
/// Item `n` lives at `<base>/<year>/<month>/<item_name>-<n>.<extension>`
/// and the whole run is stored in a directory named after `item_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    base: Url,
    year: u32,
    month: String,
    item_name: String,
    extension: String,
    count: u32,
}

impl FetchPlan {
    pub fn new(
        year: u32,
        month: impl Into<String>,
        item_name: impl Into<String>,
        extension: impl Into<String>,
        count: u32,
    ) -> Result<Self, Error> {
        let base = Url::parse(BASE_URL).map_err(|source| Error::InvalidUrl {
            url: BASE_URL.to_string(),
            source,
        })?;

        let plan = FetchPlan {
            base,
            year,
            month: month.into(),
            item_name: item_name.into(),
            extension: extension.into(),
            count,
        };

        plan.validate()?;

        Ok(plan)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Directory the run is stored in, relative to where it starts.
    pub fn directory(&self) -> &Path {
        Path::new(&self.item_name)
    }

    pub fn url_for(&self, counter: u32) -> String {
        format!(
            "{}/{}/{}/{}-{}.{}",
            self.base.as_str().trim_end_matches('/'),
            self.year,
            self.month,
            self.item_name,
            counter,
            self.extension
        )
    }

    /// Every url of the run, counter `1` first.
    pub fn urls(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.count).map(move |counter| self.url_for(counter))
    }

    fn validate(&self) -> Result<(), Error> {
        if self.month.is_empty() {
            return Err(Error::EmptyField("month"));
        }

        if self.item_name.is_empty() {
            return Err(Error::EmptyField("item name"));
        }

        if self.extension.is_empty() {
            return Err(Error::EmptyField("extension"));
        }

        let url = self.url_for(1);

        Url::parse(&url).map_err(|source| Error::InvalidUrl { url, source })?;

        Ok(())
    }
}
