use std::fmt::Display;

/// A catalog entry: the name shown to the user and the remote link of the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub display_name: String,
    pub catalog_link: String,
}

impl Title {
    pub fn new(display_name: impl Into<String>, catalog_link: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            catalog_link: catalog_link.into(),
        }
    }

    /// Same title with its display name reduced to a file-name token.
    pub fn normalized(&self) -> Self {
        Self {
            display_name: normalize_name(&self.display_name),
            catalog_link: self.catalog_link.clone(),
        }
    }

    pub fn chapter_url(&self, chapter: i64) -> String {
        format!("{}/chapter-{chapter}", self.catalog_link)
    }
}

impl From<(String, String)> for Title {
    fn from((display_name, catalog_link): (String, String)) -> Self {
        Title::new(display_name, catalog_link)
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Keeps only alphanumeric characters, so `"One Piece: Special!"` becomes `"OnePieceSpecial"`.
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_separators() {
        assert_eq!(normalize_name("One Piece: Special!"), "OnePieceSpecial");
        assert_eq!(normalize_name("Kaguya-sama wa"), "Kaguyasamawa");
        assert_eq!(normalize_name("x_y"), "xy");
    }

    #[test]
    fn normalized_title_keeps_link() {
        let title = Title::new("Dr. Stone", "https://example.org/manga-ab1").normalized();
        assert_eq!(title.display_name, "DrStone");
        assert_eq!(title.catalog_link, "https://example.org/manga-ab1");
    }

    #[test]
    fn chapter_url_uses_literal_number() {
        let title = Title::new("t", "https://example.org/manga-ab1");
        assert_eq!(title.chapter_url(7), "https://example.org/manga-ab1/chapter-7");
        assert_eq!(title.chapter_url(0), "https://example.org/manga-ab1/chapter-0");
        assert_eq!(title.chapter_url(-1), "https://example.org/manga-ab1/chapter--1");
    }
}
