use std::time::Duration;

use async_trait::async_trait;
use fnd_core::{Article, Error, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{jsonld, utils, Scraper};

pub const USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const NO_TITLE: &str = "No title found";
pub const EXTRACTION_FAILED: &str = "Failed to extract content";
/// Extracted content must be longer than this.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Generic article extractor for any news page.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    client: Client,
}

impl ArticleExtractor {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_html(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Scraping(format!("{} returned HTTP {}", url, status)));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Scraper for ArticleExtractor {
    fn name(&self) -> &str {
        "article"
    }

    fn can_handle(&self, url: &str) -> bool {
        utils::parse_url(url).is_ok()
    }

    async fn scrape_article(&self, url: &str) -> Result<Article> {
        let url = utils::parse_url(url)?;
        tracing::info!("🌐 Fetching {}", url);
        let html = self.fetch_html(&url).await?;
        let article = extract_from_html(&html, &url)?;
        tracing::debug!(
            "Extracted '{}' ({} chars) from {}",
            article.title,
            article.content.chars().count(),
            url
        );
        Ok(article)
    }
}

/// Text of every element matching `css`, in document order.
fn texts(document: &Html, css: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(css)
        .map_err(|e| Error::Scraping(format!("Invalid selector {}: {}", css, e)))?;
    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect())
}

/// Title from `<title>` (then JSON-LD headline), body from `<article>` or
/// else every `<p>`.
pub fn extract_from_html(html: &str, url: &Url) -> Result<Article> {
    let document = Html::parse_document(html);

    let title = texts(&document, "title")?
        .first()
        .map(|t| utils::collapse_whitespace(t))
        .filter(|t| !t.is_empty())
        .or_else(|| jsonld::extract_headline(&document))
        .unwrap_or_else(|| NO_TITLE.to_string());

    let raw = match texts(&document, "article")?.into_iter().next() {
        Some(body) => body,
        None => texts(&document, "p")?.join(" "),
    };
    let content = utils::collapse_whitespace(&raw);
    if content.chars().count() <= MIN_CONTENT_CHARS {
        return Err(Error::Scraping(EXTRACTION_FAILED.to_string()));
    }

    Ok(Article {
        title,
        content,
        source: url.host_str().map(str::to_string),
        url: Some(url.to_string()),
    })
}
