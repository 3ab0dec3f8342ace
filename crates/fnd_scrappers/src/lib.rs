pub mod scrapers;

pub use scrapers::article::{extract_from_html, ArticleExtractor};
pub use scrapers::Scraper;

pub mod prelude {
    pub use super::scrapers::article::ArticleExtractor;
    pub use super::scrapers::Scraper;
    pub use fnd_core::{Article, Error, Result};
}
