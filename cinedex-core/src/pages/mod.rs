pub mod http;

pub use http::HttpPageClient;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// HTML page of a single title.
///
/// `EpisodesSlice` addresses one slice of the episode listing: four-digit
/// values select a year, anything else a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitlePage {
    AlternateVersions,
    Credits,
    Episodes,
    EpisodesSlice(i32),
    Keywords,
    Locations,
    Main,
    ParentalGuide,
    Plot,
    Quotes,
    ReleaseInfo,
    Soundtrack,
    Taglines,
    Technical,
    Trivia,
}

impl TitlePage {
    /// Path-and-query suffix appended to the title's base URL.
    pub fn url_suffix(self) -> String {
        match self {
            TitlePage::AlternateVersions => "/alternateversions".into(),
            TitlePage::Credits => "/fullcredits".into(),
            TitlePage::Episodes => "/episodes".into(),
            TitlePage::EpisodesSlice(slice) => {
                if (1000..=9999).contains(&slice) {
                    format!("/episodes?year={slice}")
                } else {
                    format!("/episodes?season={slice}")
                }
            }
            TitlePage::Keywords => "/keywords".into(),
            TitlePage::Locations => "/locations".into(),
            TitlePage::Main => "/".into(),
            TitlePage::ParentalGuide => "/parentalguide".into(),
            TitlePage::Plot => "/plotsummary".into(),
            TitlePage::Quotes => "/quotes".into(),
            TitlePage::ReleaseInfo => "/releaseinfo".into(),
            TitlePage::Soundtrack => "/soundtrack".into(),
            TitlePage::Taglines => "/taglines".into(),
            TitlePage::Technical => "/technical".into(),
            TitlePage::Trivia => "/trivia".into(),
        }
    }
}

/// Fetch seam for title pages.
///
/// Implementations memoize per page. A missing title (HTTP 404) comes back
/// as `Ok(None)` and is memoized too, so repeated lookups of a dead id stay
/// cheap.
#[async_trait]
pub trait PageClient: Send + Sync {
    async fn page(&self, page: TitlePage) -> Result<Option<Arc<str>>>;
}
