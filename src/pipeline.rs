//! Turns a (title, chapter) pair into an archive on disk, downloading only on a cache miss.

use std::path::PathBuf;

use futures::{StreamExt, TryStreamExt, stream};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use tokio::{fs, io::AsyncWriteExt};

use crate::{
    cache::CacheStore,
    errors::{Error, Result},
    external::Archiver,
    fetch::Fetcher,
    models::Title,
    prompt,
    scrape::{ExtractMode, Extractor},
};

/// Anything able to hand back a ready-to-open archive for a chapter.
#[allow(async_fn_in_trait)]
pub trait ChapterSource {
    async fn acquire(&self, title: &Title, chapter: i64) -> Result<PathBuf>;
}

pub struct ChapterPipeline<'a, F, E, A> {
    cache: &'a CacheStore,
    fetcher: &'a F,
    extractor: &'a E,
    archiver: &'a A,
    image_selector: &'a str,
}

impl<'a, F: Fetcher, E: Extractor, A: Archiver> ChapterPipeline<'a, F, E, A> {
    pub fn new(
        cache: &'a CacheStore,
        fetcher: &'a F,
        extractor: &'a E,
        archiver: &'a A,
        image_selector: &'a str,
    ) -> Self {
        Self {
            cache,
            fetcher,
            extractor,
            archiver,
            image_selector,
        }
    }

    async fn fetch_image_urls(&self, chapter_url: &str) -> Result<Vec<String>> {
        let html = self.fetcher.fetch_text(chapter_url).await?;
        let urls = self
            .extractor
            .extract(&html, self.image_selector, ExtractMode::Attr("src"))?;

        if urls.is_empty() {
            return Err(Error::NoPages(chapter_url.to_string()));
        }
        Ok(urls)
    }

    async fn download_page(&self, url: &str, page_path: PathBuf) -> Result<PathBuf> {
        let data = self.fetcher.fetch_bytes(url).await?;
        let mut page_file = fs::File::create(&page_path).await?;
        page_file.write_all(&data).await?;
        page_file.flush().await?;
        debug!("wrote {url} to {}", page_path.display());

        Ok(page_path)
    }

    /// One page at a time, in order; the first failure aborts the chapter.
    async fn download_pages(
        &self,
        title: &Title,
        chapter: i64,
        image_urls: Vec<String>,
    ) -> Result<Vec<PathBuf>> {
        let progress_bar = ProgressBar::new(image_urls.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("  [{bar:60.green/blue}] {pos:>4}/{len} pages")
        {
            progress_bar.set_style(style.progress_chars("█▓▒░ "));
        }

        let pages = stream::iter(image_urls.into_iter().enumerate())
            .then(|(i, url)| {
                let page_path = self.cache.page_path(&title.display_name, chapter, i + 1);
                let progress_bar = &progress_bar;
                async move {
                    let page_path = self.download_page(&url, page_path).await?;
                    progress_bar.inc(1);
                    Ok::<_, Error>(page_path)
                }
            })
            .try_collect::<Vec<PathBuf>>()
            .await;

        progress_bar.finish_and_clear();
        pages
    }
}

impl<F: Fetcher, E: Extractor, A: Archiver> ChapterSource for ChapterPipeline<'_, F, E, A> {
    async fn acquire(&self, title: &Title, chapter: i64) -> Result<PathBuf> {
        let cached_path = self.cache.archive_path(&title.display_name, chapter);
        if self.cache.exists(&cached_path).await {
            info!("cache hit: {}", cached_path.display());
            prompt::status("Manga file exists in cache, opening it...");
            return Ok(cached_path);
        }

        let chapter_url = title.chapter_url(chapter);
        let image_urls = self.fetch_image_urls(&chapter_url).await?;
        debug!("{} pages in {chapter_url}", image_urls.len());

        self.cache.ensure_dir().await?;

        prompt::status("Downloading images...");
        let pages = self.download_pages(title, chapter, image_urls).await?;

        prompt::status("Creating manga file...");
        self.archiver.archive(&pages, &cached_path).await?;
        prompt::status("Manga file created successfully!");

        Ok(cached_path)
    }
}
