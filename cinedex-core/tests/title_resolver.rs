use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cinedex_core::{PageClient, Result, Title, TitlePage};
use cinedex_model::{MovieType, TitleFacts, TitleId};

// Canned page store. Pages not inserted count as missing, the same shape a
// dead id produces; every request is recorded for fetch-count assertions.
#[derive(Default)]
struct StubPages {
    pages: Mutex<HashMap<TitlePage, String>>,
    requested: Mutex<Vec<TitlePage>>,
}

impl StubPages {
    fn insert(&self, page: TitlePage, markup: &str) {
        self.pages.lock().unwrap().insert(page, markup.to_owned());
    }

    fn fetches(&self, page: TitlePage) -> usize {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| **requested == page)
            .count()
    }

    fn total_fetches(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl PageClient for StubPages {
    async fn page(&self, page: TitlePage) -> Result<Option<Arc<str>>> {
        self.requested.lock().unwrap().push(page);
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&page)
            .map(|markup| Arc::from(markup.as_str())))
    }
}

fn title(pages: &Arc<StubPages>) -> Title {
    let id = TitleId::new("tt0306414").unwrap();
    Title::new(id, "www.imdb.com", Arc::clone(pages) as Arc<dyn PageClient>)
}

const MAIN_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>The Wire (TV Series 2002–2008) - IMDb</title>
<script type="application/ld+json">{"@type":"TVSeries","genre":["Crime","Drama","Thriller"],"description":"The Baltimore drug scene, seen through the eyes of drug dealers and law enforcement.","image":"https://images.example/wire-full.jpg","actor":[{"@type":"Person","url":"/name/nm0922035/","name":"Dominic West"}],"creator":[{"@type":"Person","url":"/name/nm0799984/","name":"David Simon"},{"@type":"Organization","url":"/company/co0046592/"}]}</script>
</head>
<body>
<div data-testid="hero-rating-bar__aggregate-rating__score"><span>9.3</span><span>/10</span></div>
<li data-testid="title-details-languages"><a href="/search/?primary_language=en">English</a></li>
<li data-testid="title-details-origin"><a href="/search/?country_of_origin=US">United States</a></li>
<select id="browse-episodes-season"><option value="1">1</option><option value="2">2</option><option value="5">5</option></select>
</body>
</html>"##;

#[tokio::test]
async fn main_page_serves_banner_ratings_and_details() {
    let pages = Arc::new(StubPages::default());
    pages.insert(TitlePage::Main, MAIN_PAGE);

    let title = title(&pages);
    assert_eq!(title.title().await.unwrap(), "The Wire");
    assert_eq!(title.year().await.unwrap(), "2002");
    assert_eq!(title.end_year().await.unwrap(), "2008");
    assert_eq!(title.movie_type().await.unwrap(), MovieType::TvSeries);
    assert_eq!(title.rating().await.unwrap(), 9.3);
    assert_eq!(title.seasons().await.unwrap(), 5);
    assert_eq!(
        title.genres().await.unwrap(),
        ["Crime", "Drama", "Thriller"]
    );
    assert_eq!(title.languages().await.unwrap(), ["English"]);
    assert_eq!(title.countries().await.unwrap(), ["United States"]);
    assert_eq!(
        title.plot_outline().await.unwrap(),
        Some(
            "The Baltimore drug scene, seen through the eyes of drug \
             dealers and law enforcement."
        )
    );

    // Everything above comes off the one page; nothing else was requested
    // and a re-read stays inside the memo.
    let main_fetches = pages.fetches(TitlePage::Main);
    assert_eq!(pages.total_fetches(), main_fetches);
    assert_eq!(title.rating().await.unwrap(), 9.3);
    assert_eq!(title.title().await.unwrap(), "The Wire");
    assert_eq!(pages.fetches(TitlePage::Main), main_fetches);
}

#[tokio::test]
async fn structured_data_feeds_stars_and_creators() {
    let pages = Arc::new(StubPages::default());
    pages.insert(TitlePage::Main, MAIN_PAGE);

    let title = title(&pages);
    let stars = title.stars().await.unwrap();
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].name, "Dominic West");
    assert_eq!(stars[0].id.as_ref().map(|id| id.as_str()), Some("0922035"));

    // The organization entry in the creator list is not a person.
    let creators = title.creators().await.unwrap();
    assert_eq!(creators.len(), 1);
    assert_eq!(creators[0].name, "David Simon");
    assert_eq!(
        creators[0].id.as_ref().map(|id| id.as_str()),
        Some("0799984")
    );
}

#[tokio::test]
async fn seeded_search_facts_answer_without_the_network() {
    let pages = Arc::new(StubPages::default());
    let facts = TitleFacts {
        title: "The Wire".to_owned(),
        year: "2002".to_owned(),
        end_year: "0".to_owned(),
        movie_type: Some(MovieType::TvSeries),
    };
    let title = Title::from_search_result(
        TitleId::new("tt0306414").unwrap(),
        "www.imdb.com",
        Arc::clone(&pages) as Arc<dyn PageClient>,
        facts,
    );

    assert_eq!(title.title().await.unwrap(), "The Wire");
    assert_eq!(title.year().await.unwrap(), "2002");
    assert_eq!(title.movie_type().await.unwrap(), MovieType::TvSeries);
    assert_eq!(pages.total_fetches(), 0);

    // Anything beyond the seeded banner still goes to the page.
    assert_eq!(title.rating().await.unwrap(), 0.0);
    assert_eq!(pages.fetches(TitlePage::Main), 1);
}

#[tokio::test]
async fn missing_pages_resolve_to_empty_values_and_memoize() {
    let pages = Arc::new(StubPages::default());

    let title = title(&pages);
    assert_eq!(title.title().await.unwrap(), "");
    assert_eq!(title.rating().await.unwrap(), 0.0);
    assert_eq!(title.metacritic_rating().await.unwrap(), None);
    assert_eq!(title.top250().await.unwrap(), 0);
    assert_eq!(title.photo(true).await.unwrap(), None);
    assert!(title.plots().await.unwrap().is_empty());
    assert!(title.cast().await.unwrap().is_empty());
    assert!(title.episodes().await.unwrap().is_empty());

    // The empty results are memoized; a second read stays local.
    let fetches = pages.total_fetches();
    assert!(title.plots().await.unwrap().is_empty());
    assert_eq!(title.rating().await.unwrap(), 0.0);
    assert_eq!(pages.total_fetches(), fetches);
}

const EPISODES_INDEX: &str = r#"<html><body>
<select id="bySeason"><option value="1">1</option><option value="2">2</option></select>
<select id="byYear"><option value="">Year</option><option value="2002">2002</option></select>
</body></html>"#;

const SEASON_ONE: &str = r#"<html><body>
<div class="list_item odd">
<img src="https://images.example/s1e1.jpg">
<a href="/title/tt0749451/" title="The Target"></a>
<meta itemprop="episodeNumber" content="1">
<div class="airdate">2 Jun. 2002</div>
<div class="item_description">McNulty pushes for a detail on the Barksdale crew.</div>
</div>
<div class="list_item even">
<a href="/title/tt0749452/" title="Unaired Pilot"></a>
<div class="airdate"></div>
<div class="item_description">Add a Plot</div>
</div>
</body></html>"#;

const SEASON_TWO: &str = r#"<html><body>
<div class="list_item odd">
<a href="/title/tt0749462/" title="Ebb Tide"></a>
<meta itemprop="episodeNumber" content="1">
<div class="airdate">1 Jun. 2003</div>
<div class="item_description">McNulty works the marine unit.</div>
</div>
</body></html>"#;

#[tokio::test]
async fn episodes_assemble_across_season_slices() {
    let pages = Arc::new(StubPages::default());
    pages.insert(TitlePage::Episodes, EPISODES_INDEX);
    pages.insert(TitlePage::EpisodesSlice(1), SEASON_ONE);
    pages.insert(TitlePage::EpisodesSlice(2), SEASON_TWO);

    let title = title(&pages);
    let episodes = title.episodes().await.unwrap();
    assert_eq!(episodes.len(), 2);

    let season_one = &episodes[&1];
    assert_eq!(season_one.len(), 2);
    assert_eq!(season_one[&1].title, "The Target");
    assert_eq!(season_one[&1].air_date, "2 Jun. 2002");
    assert_eq!(
        season_one[&1].id.as_ref().map(|id| id.as_str()),
        Some("0749451")
    );
    // The unnumbered entry lands after the highest numbered one, with its
    // placeholder description scrubbed.
    assert_eq!(season_one[&2].title, "Unaired Pilot");
    assert_eq!(season_one[&2].plot, "");

    let season_two = &episodes[&2];
    assert_eq!(season_two[&1].title, "Ebb Tide");
    assert_eq!(season_two[&1].season, 2);
}

#[tokio::test]
async fn missing_slice_stops_the_episode_walk() {
    let pages = Arc::new(StubPages::default());
    pages.insert(
        TitlePage::Episodes,
        r#"<html><body><select id="bySeason">
        <option value="1">1</option>
        <option value="2">2</option>
        <option value="3">3</option>
        </select></body></html>"#,
    );
    pages.insert(TitlePage::EpisodesSlice(1), SEASON_ONE);

    let title = title(&pages);
    let episodes = title.episodes().await.unwrap();
    assert_eq!(episodes.len(), 1);
    assert!(episodes.contains_key(&1));

    // Season 2 came back missing, so season 3 was never requested.
    assert_eq!(pages.fetches(TitlePage::EpisodesSlice(2)), 1);
    assert_eq!(pages.fetches(TitlePage::EpisodesSlice(3)), 0);
}

const CREDITS_PAGE: &str = r#"<html><body>
<h4 id="director" class="dataHeaderWithBorder">Series Directed by</h4>
<table class="simpleTable simpleCreditsTable">
<tr><td class="name"><a href="/name/nm0201041/">Joe Chappelle</a></td><td>&nbsp;</td><td class="credit">(26 episodes, 2002-2008)</td></tr>
<tr><td class="name">&nbsp;</td><td></td><td></td></tr>
</table>
<table class="cast_list">
<tr><td colspan="4" class="castlist_label">Series Cast</td></tr>
<tr class="odd">
<td class="primary_photo"><img loadlate="https://images.example/west-thumb.jpg"></td>
<td><a href="/name/nm0922035/">Dominic West</a></td>
<td class="ellipsis">...</td>
<td class="character">Det. James 'Jimmy' McNulty</td>
</tr>
</table>
</body></html>"#;

#[tokio::test]
async fn credits_page_feeds_cast_and_crew_tables() {
    let pages = Arc::new(StubPages::default());
    pages.insert(TitlePage::Credits, CREDITS_PAGE);

    let title = title(&pages);
    let cast = title.cast().await.unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].name, "Dominic West");
    assert_eq!(cast[0].id.as_ref().map(|id| id.as_str()), Some("0922035"));
    assert_eq!(cast[0].role.as_deref(), Some("Det. James 'Jimmy' McNulty"));
    assert_eq!(
        cast[0].thumbnail.as_deref(),
        Some("https://images.example/west-thumb.jpg")
    );

    let directors = title.directors().await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].name, "Joe Chappelle");
    assert_eq!(
        directors[0].role.as_deref(),
        Some("(26 episodes, 2002-2008)")
    );

    // No writer table on this page.
    assert!(title.writers().await.unwrap().is_empty());
}

#[tokio::test]
async fn quote_links_are_absolutized_against_the_configured_site() {
    let pages = Arc::new(StubPages::default());
    pages.insert(
        TitlePage::Quotes,
        r#"<html><body>
        <div class="sodatext">
        <p><a href="/name/nm0922035/">Det. James McNulty</a>: What the hell did I do?</p>
        <p>[Bunk shakes his head]</p>
        </div>
        </body></html>"#,
    );

    let title = title(&pages);
    let scenes = title.quotes().await.unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].len(), 2);

    let spoken = &scenes[0][0];
    assert_eq!(spoken.quote, "What the hell did I do?");
    let character = spoken.character.as_ref().unwrap();
    assert_eq!(character.name, "Det. James McNulty");
    assert_eq!(character.url, "https://www.imdb.com/name/nm0922035/");

    let direction = &scenes[0][1];
    assert_eq!(direction.quote, "[Bunk shakes his head]");
    assert!(direction.character.is_none());
}
