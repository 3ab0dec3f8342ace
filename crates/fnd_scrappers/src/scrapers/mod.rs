use async_trait::async_trait;
use fnd_core::{Article, Result};

pub mod article;
pub mod jsonld;

/// Turns a URL into an [`Article`] ready for analysis.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Fetches the page and extracts its title and body text
    async fn scrape_article(&self, url: &str) -> Result<Article>;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use fnd_core::{Error, Result};
    use url::Url;

    /// Absolute http(s) URLs only.
    pub fn parse_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url.trim())?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(Error::InvalidUrl(format!("unsupported scheme '{}'", other))),
        }
    }

    /// Runs of whitespace become one space; ends are trimmed.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::utils;
    use fnd_core::Error;

    #[test]
    fn test_parse_url() {
        assert!(utils::parse_url("https://example.com").is_ok());
        assert!(utils::parse_url("  http://example.com/a?b=c ").is_ok());
        assert!(matches!(utils::parse_url("invalid-url"), Err(Error::InvalidUrl(_))));
        assert!(matches!(
            utils::parse_url("ftp://example.com/file"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(utils::collapse_whitespace("  a \n\n b\t c  "), "a b c");
        assert_eq!(utils::collapse_whitespace(" \n "), "");
    }
}
