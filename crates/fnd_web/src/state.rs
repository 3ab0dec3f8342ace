use std::fmt;
use std::sync::Arc;

use fnd_core::HistoryStore;
use fnd_inference::Detector;
use fnd_scrappers::Scraper;

pub struct AppState {
    pub detector: Arc<Detector>,
    pub history: Arc<dyn HistoryStore>,
    pub scraper: Arc<dyn Scraper>,
}

impl AppState {
    pub fn new(
        detector: Arc<Detector>,
        history: Arc<dyn HistoryStore>,
        scraper: Arc<dyn Scraper>,
    ) -> Self {
        Self {
            detector,
            history,
            scraper,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("detector", &self.detector)
            .field("history", &self.history.name())
            .field("scraper", &self.scraper.name())
            .finish()
    }
}
