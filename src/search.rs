use log::{debug, warn};

use crate::{
    config::Config,
    errors::{Error, Result},
    fetch::Fetcher,
    models::Title,
    scrape::{ExtractMode, Extractor},
};

/// `"one-piece special"` becomes `"one_piece_special"`.
pub fn normalize_query(query: &str) -> String {
    query.trim().replace([' ', '-'], "_")
}

pub struct SearchResolver<'a, F, E> {
    config: &'a Config,
    fetcher: &'a F,
    extractor: &'a E,
}

impl<'a, F: Fetcher, E: Extractor> SearchResolver<'a, F, E> {
    pub fn new(config: &'a Config, fetcher: &'a F, extractor: &'a E) -> Self {
        Self {
            config,
            fetcher,
            extractor,
        }
    }

    /// Candidates in the order the catalog lists them.
    pub async fn search(&self, query: &str) -> Result<Vec<Title>> {
        let url = format!("{}{}", self.config.search_url, normalize_query(query));
        let html = self.fetcher.fetch_text(&url).await?;

        let selector = &self.config.selectors.search_result;
        let names = self.extractor.extract(&html, selector, ExtractMode::Text)?;
        if names.is_empty() {
            return Err(Error::NotFound(query.to_string()));
        }
        let links = self
            .extractor
            .extract(&html, selector, ExtractMode::Attr("href"))?;
        if links.len() != names.len() {
            warn!(
                "{} names but {} links in search results for {url}",
                names.len(),
                links.len()
            );
        }

        let titles: Vec<Title> = names.into_iter().zip(links).map(Title::from).collect();
        debug!("{} search results for {url}", titles.len());
        Ok(titles)
    }
}

/// Picks a 1-based entry from `results`; the chosen name is normalized for file names.
pub fn resolve(results: &[Title], input: &str) -> Result<Title> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| results.get(i))
        .map(Title::normalized)
        .ok_or_else(|| Error::InvalidSelection(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<Title> {
        vec![
            Title::new("One Piece", "https://m.example.org/manga-aa"),
            Title::new("One Piece: Special!", "https://m.example.org/manga-bb"),
            Title::new("One-Punch Man", "https://m.example.org/manga-cc"),
        ]
    }

    #[test]
    fn query_separators_become_underscores() {
        assert_eq!(normalize_query("one-piece special"), "one_piece_special");
        assert_eq!(normalize_query("  naruto \n"), "naruto");
    }

    #[test]
    fn resolve_accepts_bounds() {
        let results = results();
        assert_eq!(resolve(&results, "1").unwrap().display_name, "OnePiece");
        let last = resolve(&results, "3").unwrap();
        assert_eq!(last.display_name, "OnePunchMan");
        assert_eq!(last.catalog_link, "https://m.example.org/manga-cc");
        assert_eq!(
            resolve(&results, "2").unwrap().display_name,
            "OnePieceSpecial"
        );
    }

    #[test]
    fn resolve_rejects_out_of_range_and_garbage() {
        let results = results();
        for input in ["0", "4", "abc", "", "-1", "1.5"] {
            assert!(
                matches!(resolve(&results, input), Err(Error::InvalidSelection(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
