//! The interactive session: search, pick a title and a chapter, then navigate.

use crate::{
    cache::CacheStore,
    config::Config,
    errors::{Error, Result},
    external::{Archiver, Viewer},
    fetch::Fetcher,
    navigation::Navigator,
    pipeline::ChapterPipeline,
    prompt::{self, Prompt},
    scrape::Extractor,
    search::{self, SearchResolver},
};

pub fn parse_chapter(input: &str) -> Result<i64> {
    input
        .parse::<i64>()
        .ok()
        .filter(|chapter| *chapter >= 1)
        .ok_or_else(|| Error::InvalidSelection(input.to_string()))
}

/// Runs one session until the user quits; returns the chapter open at that point.
pub async fn run<F, E, A, V, P>(
    config: &Config,
    fetcher: &F,
    extractor: &E,
    archiver: &A,
    viewer: &V,
    terminal: &P,
) -> Result<i64>
where
    F: Fetcher,
    E: Extractor,
    A: Archiver,
    V: Viewer,
    P: Prompt,
{
    let query = terminal.prompt_line("Search manga")?;
    let results = SearchResolver::new(config, fetcher, extractor)
        .search(&query)
        .await?;

    prompt::listing("Search results:");
    for (i, title) in results.iter().enumerate() {
        prompt::listing(&format!("[{}] {title}", i + 1));
    }
    let title = search::resolve(&results, &terminal.prompt_line("Enter Number")?)?;

    let chapter = parse_chapter(&terminal.prompt_line("Enter chapter number")?)?;

    let cache = CacheStore::new(&config.cache_dir);
    let pipeline = ChapterPipeline::new(
        &cache,
        fetcher,
        extractor,
        archiver,
        &config.selectors.chapter_image,
    );

    Navigator::new(&pipeline, viewer, terminal)
        .run(&title, chapter)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_must_be_positive_integer() {
        assert_eq!(parse_chapter("12").unwrap(), 12);
        for input in ["0", "-3", "abc", ""] {
            assert!(matches!(
                parse_chapter(input),
                Err(Error::InvalidSelection(_))
            ));
        }
    }
}
