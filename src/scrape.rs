//! Selector-driven extraction over raw page markup.

use log::{debug, error};
use scraper::{Html, Selector};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode<'a> {
    /// Inner text of each matched element, whitespace trimmed.
    Text,
    /// Value of the named attribute; elements without it are skipped.
    Attr(&'a str),
}

/// Pulls an ordered list of strings out of a document. Results follow document order.
pub trait Extractor {
    fn extract(&self, html: &str, selector: &str, mode: ExtractMode<'_>) -> Result<Vec<String>>;
}

/// [`Extractor`] backed by a full DOM parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExtractor;

impl Extractor for HtmlExtractor {
    fn extract(&self, html: &str, selector: &str, mode: ExtractMode<'_>) -> Result<Vec<String>> {
        let selector =
            Selector::parse(selector).map_err(|_| Error::Selector(selector.to_string()))?;
        let doc = Html::parse_document(html);

        let values = doc
            .select(&selector)
            .enumerate()
            .filter_map(|(i, el)| match mode {
                ExtractMode::Text => Some(el.text().collect::<String>().trim().to_string()),
                ExtractMode::Attr(name) => el.attr(name).map(str::to_string).or_else(|| {
                    debug!("element with missing {name}: {el:?}");
                    error!("failed to extract {name} for element {}", i + 1);
                    None
                }),
            })
            .collect();

        Ok(values)
    }
}
