//! Title resolver: lazy, memoized access to one title's attributes.
//!
//! Titles are scrape-backed. Each accessor fetches the page it needs
//! through the [`PageClient`], runs a pure parser over the markup, and
//! caches the result for the lifetime of the [`Title`]. Missing pages and
//! empty sections produce empty values; only transport failures surface as
//! errors, and those leave the cell unset for a later retry.

mod jsonld;
mod parse;

use std::{fmt, sync::Arc};

use tokio::sync::OnceCell;

use cinedex_model::{
    Aka, CastMember, Certificate, CrewCredit, Location, MovieType, PersonRef,
    PlotSummary, Quote, Recommendation, Runtime, SeasonMap, Soundtrack,
    TitleFacts, TitleId,
};

use crate::{
    error::Result,
    pages::{PageClient, TitlePage},
};

#[derive(Debug, Clone, Default)]
struct PosterUrls {
    full: Option<String>,
    thumb: Option<String>,
}

#[derive(Default)]
struct Memo {
    facts: OnceCell<TitleFacts>,
    rating: OnceCell<f32>,
    metacritic: OnceCell<Option<u32>>,
    top250: OnceCell<u32>,
    plot_outline: OnceCell<Option<String>>,
    poster: OnceCell<PosterUrls>,
    genres: OnceCell<Vec<String>>,
    creators: OnceCell<Vec<PersonRef>>,
    stars: OnceCell<Vec<PersonRef>>,
    languages: OnceCell<Vec<String>>,
    countries: OnceCell<Vec<String>>,
    seasons: OnceCell<u32>,
    episodes: OnceCell<SeasonMap>,
    runtimes: OnceCell<Vec<Runtime>>,
    recommendations: OnceCell<Vec<Recommendation>>,
    also_known_as: OnceCell<Vec<Aka>>,
    certificates: OnceCell<Vec<Certificate>>,
    plots: OnceCell<Vec<PlotSummary>>,
    taglines: OnceCell<Vec<String>>,
    quotes: OnceCell<Vec<Vec<Quote>>>,
    trivia: OnceCell<Vec<String>>,
    soundtracks: OnceCell<Vec<Soundtrack>>,
    locations: OnceCell<Vec<Location>>,
    keywords: OnceCell<Vec<String>>,
    alternate_versions: OnceCell<Vec<String>>,
    cast: OnceCell<Vec<CastMember>>,
    directors: OnceCell<Vec<CrewCredit>>,
    writers: OnceCell<Vec<CrewCredit>>,
    producers: OnceCell<Vec<CrewCredit>>,
    composers: OnceCell<Vec<CrewCredit>>,
}

/// One title, addressed by [`TitleId`].
pub struct Title {
    id: TitleId,
    site: String,
    pages: Arc<dyn PageClient>,
    memo: Memo,
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Title")
            .field("id", &self.id)
            .field("site", &self.site)
            .finish()
    }
}

impl Title {
    pub fn new(
        id: TitleId,
        site: impl Into<String>,
        pages: Arc<dyn PageClient>,
    ) -> Self {
        Self {
            id,
            site: site.into(),
            pages,
            memo: Memo::default(),
        }
    }

    /// Build a title whose banner facts are already known, e.g. from a
    /// search listing. The header accessors then never touch the network.
    pub fn from_search_result(
        id: TitleId,
        site: impl Into<String>,
        pages: Arc<dyn PageClient>,
        facts: TitleFacts,
    ) -> Self {
        let memo = Memo {
            facts: OnceCell::new_with(Some(facts)),
            ..Memo::default()
        };
        Self {
            id,
            site: site.into(),
            pages,
            memo,
        }
    }

    pub fn id(&self) -> &TitleId {
        &self.id
    }

    /// Canonical URL of the main page.
    pub fn main_url(&self) -> String {
        format!("https://{}/title/{}/", self.site, self.id.qualified())
    }

    /// Fetch one page and run a pure parser over it. A missing page
    /// parses to the default empty value.
    async fn scrape<T, F>(&self, page: TitlePage, parse: F) -> Result<T>
    where
        T: Default,
        F: FnOnce(&str) -> T,
    {
        let markup = self.pages.page(page).await?;
        Ok(markup.as_deref().map(parse).unwrap_or_default())
    }

    async fn facts(&self) -> Result<&TitleFacts> {
        self.memo
            .facts
            .get_or_try_init(|| self.scrape(TitlePage::Main, parse::title_facts))
            .await
    }

    /// Display title from the page banner.
    pub async fn title(&self) -> Result<&str> {
        Ok(self.facts().await?.title.as_str())
    }

    /// Release year as the site prints it, `""` when unknown.
    pub async fn year(&self) -> Result<&str> {
        Ok(self.facts().await?.year.as_str())
    }

    /// End year of a range: `""` for a still-running series, `"0"` when
    /// the banner carries no range at all.
    pub async fn end_year(&self) -> Result<&str> {
        Ok(self.facts().await?.end_year.as_str())
    }

    /// Kind of title. Banners without an explicit label mean a movie.
    pub async fn movie_type(&self) -> Result<MovieType> {
        Ok(self.facts().await?.movie_type.unwrap_or_default())
    }

    /// Aggregate user rating, `0.0` when unrated.
    pub async fn rating(&self) -> Result<f32> {
        self.memo
            .rating
            .get_or_try_init(|| self.scrape(TitlePage::Main, parse::rating))
            .await
            .copied()
    }

    /// Metascore out of 100.
    pub async fn metacritic_rating(&self) -> Result<Option<u32>> {
        self.memo
            .metacritic
            .get_or_try_init(|| self.scrape(TitlePage::Main, parse::metacritic))
            .await
            .copied()
    }

    /// Top-250 chart position, `0` when unranked.
    pub async fn top250(&self) -> Result<u32> {
        self.memo
            .top250
            .get_or_try_init(|| self.scrape(TitlePage::Main, parse::top250))
            .await
            .copied()
    }

    /// Short plot outline from the main page.
    pub async fn plot_outline(&self) -> Result<Option<&str>> {
        let outline = self
            .memo
            .plot_outline
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    jsonld::extract(markup)
                        .and_then(|ld| ld.description)
                        .or_else(|| parse::plot_outline_fallback(markup))
                        .map(|raw| parse::clean_outline(&raw))
                        .filter(|text| !text.is_empty())
                })
            })
            .await?;
        Ok(outline.as_deref())
    }

    async fn poster(&self) -> Result<&PosterUrls> {
        self.memo
            .poster
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| PosterUrls {
                    full: jsonld::extract(markup).and_then(|ld| ld.image),
                    thumb: parse::poster_thumb(markup),
                })
            })
            .await
    }

    /// Poster URL: the hero thumbnail, or the full-size image on
    /// `thumb = false`.
    pub async fn photo(&self, thumb: bool) -> Result<Option<&str>> {
        let poster = self.poster().await?;
        Ok(if thumb {
            poster.thumb.as_deref()
        } else {
            poster.full.as_deref()
        })
    }

    pub async fn genres(&self) -> Result<&[String]> {
        self.memo
            .genres
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    jsonld::extract(markup)
                        .map(jsonld::JsonLd::genres)
                        .unwrap_or_default()
                })
            })
            .await
            .map(Vec::as_slice)
    }

    /// Series creators. Empty for anything that is not a series.
    pub async fn creators(&self) -> Result<&[PersonRef]> {
        self.memo
            .creators
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    jsonld::extract(markup)
                        .map(jsonld::JsonLd::creators)
                        .unwrap_or_default()
                })
            })
            .await
            .map(Vec::as_slice)
    }

    /// Top-billed cast from the structured-data block.
    pub async fn stars(&self) -> Result<&[PersonRef]> {
        self.memo
            .stars
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    jsonld::extract(markup)
                        .map(jsonld::JsonLd::stars)
                        .unwrap_or_default()
                })
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn languages(&self) -> Result<&[String]> {
        self.memo
            .languages
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    parse::detail_links(markup, "title-details-languages")
                })
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn countries(&self) -> Result<&[String]> {
        self.memo
            .countries
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, |markup| {
                    parse::detail_links(markup, "title-details-origin")
                })
            })
            .await
            .map(Vec::as_slice)
    }

    /// Number of seasons, `0` for anything without an episode browser.
    pub async fn seasons(&self) -> Result<u32> {
        self.memo
            .seasons
            .get_or_try_init(|| self.scrape(TitlePage::Main, parse::seasons))
            .await
            .copied()
    }

    /// All episodes keyed season (or year slice) then episode number.
    /// Unnumbered entries are appended after the highest number of their
    /// season.
    pub async fn episodes(&self) -> Result<&SeasonMap> {
        self.memo
            .episodes
            .get_or_try_init(|| async {
                let mut seasons = SeasonMap::new();
                let Some(index) =
                    self.pages.page(TitlePage::Episodes).await?
                else {
                    return Ok(seasons);
                };
                let slices = parse::episode_slices(&index);
                for slice in slices {
                    let Some(markup) = self
                        .pages
                        .page(TitlePage::EpisodesSlice(slice))
                        .await?
                    else {
                        break;
                    };
                    for episode in parse::episode_cells(&markup, slice) {
                        let bucket = seasons.entry(slice).or_default();
                        let key = if episode.episode == -1 {
                            bucket
                                .last_key_value()
                                .map(|(highest, _)| highest + 1)
                                .unwrap_or(0)
                        } else {
                            episode.episode
                        };
                        bucket.insert(key, episode);
                    }
                }
                Ok(seasons)
            })
            .await
    }

    /// Runtime variants from the technical specs page.
    pub async fn runtimes(&self) -> Result<&[Runtime]> {
        self.memo
            .runtimes
            .get_or_try_init(|| {
                self.scrape(TitlePage::Technical, parse::runtimes)
            })
            .await
            .map(Vec::as_slice)
    }

    /// "More like this" titles from the main page.
    pub async fn recommendations(&self) -> Result<&[Recommendation]> {
        self.memo
            .recommendations
            .get_or_try_init(|| {
                self.scrape(TitlePage::Main, parse::recommendations)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Alternate titles per country or context.
    pub async fn also_known_as(&self) -> Result<&[Aka]> {
        self.memo
            .also_known_as
            .get_or_try_init(|| {
                self.scrape(TitlePage::ReleaseInfo, parse::also_known_as)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Age certifications grouped per country.
    pub async fn certificates(&self) -> Result<&[Certificate]> {
        self.memo
            .certificates
            .get_or_try_init(|| {
                self.scrape(TitlePage::ParentalGuide, parse::certificates)
            })
            .await
            .map(Vec::as_slice)
    }

    /// User-submitted plot summaries with their authors.
    pub async fn plots(&self) -> Result<&[PlotSummary]> {
        self.memo
            .plots
            .get_or_try_init(|| self.scrape(TitlePage::Plot, parse::plots))
            .await
            .map(Vec::as_slice)
    }

    pub async fn taglines(&self) -> Result<&[String]> {
        self.memo
            .taglines
            .get_or_try_init(|| {
                self.scrape(TitlePage::Taglines, parse::taglines)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Quote scenes, each a list of spoken lines.
    pub async fn quotes(&self) -> Result<&[Vec<Quote>]> {
        self.memo
            .quotes
            .get_or_try_init(|| {
                self.scrape(TitlePage::Quotes, |markup| {
                    parse::quotes(markup, &self.site)
                })
            })
            .await
            .map(Vec::as_slice)
    }

    /// Trivia notes. The spoiler flag only applies to the first call;
    /// later calls return the memoized list regardless.
    pub async fn trivia(&self, spoilers: bool) -> Result<&[String]> {
        self.memo
            .trivia
            .get_or_try_init(|| {
                self.scrape(TitlePage::Trivia, |markup| {
                    parse::trivia(markup, spoilers)
                })
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn soundtracks(&self) -> Result<&[Soundtrack]> {
        self.memo
            .soundtracks
            .get_or_try_init(|| {
                self.scrape(TitlePage::Soundtrack, parse::soundtracks)
            })
            .await
            .map(Vec::as_slice)
    }

    /// Filming locations and what they stood in for.
    pub async fn locations(&self) -> Result<&[Location]> {
        self.memo
            .locations
            .get_or_try_init(|| {
                self.scrape(TitlePage::Locations, parse::locations)
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn keywords(&self) -> Result<&[String]> {
        self.memo
            .keywords
            .get_or_try_init(|| {
                self.scrape(TitlePage::Keywords, parse::keywords)
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn alternate_versions(&self) -> Result<&[String]> {
        self.memo
            .alternate_versions
            .get_or_try_init(|| {
                self.scrape(
                    TitlePage::AlternateVersions,
                    parse::alternate_versions,
                )
            })
            .await
            .map(Vec::as_slice)
    }

    /// Full cast table from the credits page.
    pub async fn cast(&self) -> Result<&[CastMember]> {
        self.memo
            .cast
            .get_or_try_init(|| self.scrape(TitlePage::Credits, parse::cast))
            .await
            .map(Vec::as_slice)
    }

    pub async fn directors(&self) -> Result<&[CrewCredit]> {
        self.crew(&self.memo.directors, "director").await
    }

    pub async fn writers(&self) -> Result<&[CrewCredit]> {
        self.crew(&self.memo.writers, "writer").await
    }

    pub async fn producers(&self) -> Result<&[CrewCredit]> {
        self.crew(&self.memo.producers, "producer").await
    }

    pub async fn composers(&self) -> Result<&[CrewCredit]> {
        self.crew(&self.memo.composers, "composer").await
    }

    async fn crew<'a>(
        &'a self,
        cell: &'a OnceCell<Vec<CrewCredit>>,
        section: &'static str,
    ) -> Result<&'a [CrewCredit]> {
        cell.get_or_try_init(|| {
            self.scrape(TitlePage::Credits, |markup| {
                parse::crew_table(markup, section)
            })
        })
        .await
        .map(Vec::as_slice)
    }
}
