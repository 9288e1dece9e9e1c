use std::{path::PathBuf, time::Duration};

use crate::errors::{Error, Result};

pub const SEARCH_URL: &str = "https://m.manganelo.com/search/story/";
pub const HOST_URL: &str = "https://m.manganelo.com";
pub const CACHE_SUBDIR: &str = ".cache/manga-cli";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:145.0) Gecko/20100101 Firefox/145.0";

/// Process-wide settings, built once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub referer: String,
    pub user_agent: String,
    pub cache_dir: PathBuf,
    pub archive_program: String,
    pub viewer_program: String,
    pub request_timeout: Duration,
    pub selectors: Selectors,
}

#[derive(Debug, Clone)]
pub struct Selectors {
    /// Result links on the search page; text gives the name, `href` the catalog link.
    pub search_result: String,
    /// Page images on a chapter page; `src` gives the image URL.
    pub chapter_image: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_result: "div.item-right h3 a".to_string(),
            chapter_image: "div.container-chapter-reader img".to_string(),
        }
    }
}

impl Config {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            referer: HOST_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            cache_dir: cache_dir.into(),
            archive_program: "zip".to_string(),
            viewer_program: "zathura".to_string(),
            request_timeout: Duration::from_secs(30),
            selectors: Selectors::default(),
        }
    }

    /// Resolves the cache root under the user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = home::home_dir().ok_or(Error::HomeDirMissing)?;
        Ok(Self::new(home.join(CACHE_SUBDIR)))
    }

    pub fn required_programs(&self) -> [&str; 2] {
        [self.archive_program.as_str(), self.viewer_program.as_str()]
    }
}
