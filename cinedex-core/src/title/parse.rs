//! HTML parsers for the title pages.
//!
//! Each function is pure: markup in, typed records out. Missing sections,
//! malformed rows, and the upstream "no content" placeholder all degrade to
//! empty values. The string mini-grammars (parenthesized year ranges, `<br>`
//! separated runtime variants, colon-delimited certificates) only cover the
//! formats the site actually serves.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use cinedex_model::{
    Aka, CastMember, Certificate, CrewCredit, Episode, Location, MovieType,
    NameId, PlotSummary, Quote, QuoteCharacter, Recommendation, Runtime,
    Soundtrack, TitleFacts, TitleId,
};

static POSTER_THUMB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img [^>]+title="[^"]+Poster"[^>]+src="([^"]+)"[^>]+/>"#)
        .expect("hardcoded regex")
});

static SUMMARY_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)class="summary_text">\s*(.*?)\s*</div>"#)
        .expect("hardcoded regex")
});

static SEE_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\s*<a href="/title/tt\d{7,8}/(plotsummary|synopsis)[^>]*>See full (summary|synopsis).*$"#,
    )
    .expect("hardcoded regex")
});

static ADD_PLOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a href="[^"]+"\s*>Add a Plot</a>(&nbsp;&raquo;)?"#)
        .expect("hardcoded regex")
});

static RANK_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\d+)").expect("hardcoded regex"));

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("hardcoded regex"));

static BR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("hardcoded regex"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid css selector")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

fn strip_tags(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}

pub(crate) fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn digits(text: &str) -> u32 {
    text.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Pages that carry no data for a section ship a `*no_content` placeholder
/// div instead of an empty listing.
fn no_content_marker(document: &Html) -> bool {
    document
        .select(&selector(r#"div[id*="no_content"]"#))
        .next()
        .is_some()
}

/// First `table` element after `anchor`, skipping text and other siblings.
fn following_table<'a>(anchor: ElementRef<'a>) -> Option<ElementRef<'a>> {
    anchor
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

/// Decode the `<title>` banner: `Name (Type From–To) - IMDb`.
///
/// Text before the first digit of the parenthetical is the movie type when
/// it is more than two characters long. `"????"` years normalize to empty,
/// a missing range marker leaves the end year `"0"`, and an open range
/// (`2002–`) leaves it empty.
pub(crate) fn title_facts(markup: &str) -> TitleFacts {
    let document = Html::parse_document(markup);
    let Some(tag) = document.select(&selector("title")).next() else {
        return TitleFacts::default();
    };
    let text: String = tag.text().collect();

    let mut facts = TitleFacts::default();
    let (head, tail) = match text.split_once('(') {
        Some(parts) => parts,
        None => (text.as_str(), ""),
    };
    facts.title = decode_entities(head.trim());

    let type_year = tail.split(')').next().unwrap_or("");
    if type_year.is_empty() {
        return facts;
    }
    let pos = type_year
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(type_year.len());
    if pos > 2 {
        let label = type_year[..pos].trim();
        if !label.is_empty() {
            facts.movie_type = Some(MovieType::from_label(label));
        }
    }
    let year_raw = type_year[pos..].trim();
    match year_raw.split_once('\u{2013}') {
        Some((from, to)) => {
            facts.year = from.trim().to_owned();
            facts.end_year = to.trim().to_owned();
        }
        None => {
            facts.year = year_raw.to_owned();
            facts.end_year = "0".to_owned();
        }
    }
    if facts.year == "????" {
        facts.year.clear();
    }
    facts
}

/// Aggregate user rating from the hero bar, `0.0` when unrated.
pub(crate) fn rating(markup: &str) -> f32 {
    let document = Html::parse_document(markup);
    document
        .select(&selector(
            r#"div[data-testid="hero-rating-bar__aggregate-rating__score"] span"#,
        ))
        .next()
        .map(|span| span.text().collect::<String>())
        .and_then(|text| {
            let lead: String = text
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            lead.parse().ok()
        })
        .unwrap_or(0.0)
}

/// Metascore out of 100, absent for titles Metacritic never reviewed.
pub(crate) fn metacritic(markup: &str) -> Option<u32> {
    let document = Html::parse_document(markup);
    document
        .select(&selector("span.score-meta"))
        .next()
        .map(|span| digits(&element_text(span)))
}

/// Top-250 chart position, `0` when unranked.
pub(crate) fn top250(markup: &str) -> u32 {
    let document = Html::parse_document(markup);
    document
        .select(&selector(r#"a[data-testid="award_top-rated"]"#))
        .next()
        .and_then(|anchor| {
            let text: String = anchor.text().collect();
            let rank = RANK_NUMBER.captures(&text)?.get(1)?.as_str().parse().ok()?;
            Some(rank)
        })
        .unwrap_or(0)
}

/// "More like this" poster cards. Cards without a title link are skipped.
pub(crate) fn recommendations(markup: &str) -> Vec<Recommendation> {
    let document = Html::parse_document(markup);
    let mut out = Vec::new();
    for card in
        document.select(&selector("div.ipc-poster-card.ipc-poster-card--base"))
    {
        let Some(anchor) =
            card.select(&selector("a.ipc-poster-card__title")).next()
        else {
            continue;
        };
        let Some(id) = anchor.attr("href").and_then(TitleId::extract) else {
            continue;
        };
        let rating = card
            .select(&selector("span.ipc-rating-star--imdb"))
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty());
        let image = card
            .select(&selector("div.ipc-media.ipc-media--poster img"))
            .next()
            .and_then(|img| img.attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_owned);
        out.push(Recommendation {
            id,
            title: element_text(anchor),
            rating,
            image,
        });
    }
    out
}

/// Linked values from one row of the details block on the main page,
/// e.g. spoken languages or countries of origin.
pub(crate) fn detail_links(markup: &str, testid: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let css = format!(r#"li[data-testid="{testid}"] a"#);
    document
        .select(&selector(&css))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Season count from the episodes browser. Single-season shows render a
/// bare link instead of the select box.
pub(crate) fn seasons(markup: &str) -> u32 {
    let document = Html::parse_document(markup);
    let mut count = 0;
    for option in
        document.select(&selector("select#browse-episodes-season option"))
    {
        if let Some(value) = option.attr("value")
            && let Ok(season) = value.trim().parse::<u32>()
            && season > count
        {
            count = season;
        }
    }
    if count == 0
        && let Some(anchor) = document
            .select(&selector(r#"div[data-testid="episodes-browse-episodes"] a"#))
            .next()
        && let Some(href) = anchor.attr("href")
        && href.to_lowercase().contains("?season=1")
    {
        count = 1;
    }
    count
}

/// Poster thumbnail from the hero media block.
pub(crate) fn poster_thumb(markup: &str) -> Option<String> {
    if let Some(captures) = POSTER_THUMB.captures(markup)
        && !captures[1].is_empty()
    {
        return Some(captures[1].to_owned());
    }
    let document = Html::parse_document(markup);
    document
        .select(&selector(
            r#"div.ipc-poster.ipc-poster--baseAlt[data-testid*="hero-media__poster"] img"#,
        ))
        .next()
        .and_then(|img| img.attr("src"))
        .map(str::to_owned)
}

/// Legacy outline fallback for pages without a structured-data description.
pub(crate) fn plot_outline_fallback(markup: &str) -> Option<String> {
    SUMMARY_TEXT
        .captures(markup)
        .map(|captures| captures[1].trim().to_owned())
}

/// Strip the trailing "See full summary" / "Add a Plot" links and any
/// residual markup from an outline.
pub(crate) fn clean_outline(outline: &str) -> String {
    let without_see_full = SEE_FULL.replace(outline, "");
    let without_add_plot = ADD_PLOT.replace_all(&without_see_full, "");
    decode_entities(strip_tags(&without_add_plot).trim())
}

/// Alternate titles from the release-info page. A description naming the
/// original title is kept literally; otherwise the text before the first
/// parenthesis is the country.
pub(crate) fn also_known_as(markup: &str) -> Vec<Aka> {
    let document = Html::parse_document(markup);
    let Some(heading) = document.select(&selector("#akas")).next() else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        if sibling.value().name() != "table" {
            continue;
        }
        for row in sibling.select(&selector("tr")) {
            let cells: Vec<ElementRef<'_>> =
                row.select(&selector("td")).collect();
            if cells.len() < 2 {
                continue;
            }
            let description = element_text(cells[0]);
            let country = if description.to_lowercase().contains("original title")
            {
                description
            } else {
                description
                    .split('(')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_owned()
            };
            out.push(Aka {
                country,
                title: element_text(cells[1]),
            });
        }
    }
    out
}

/// Age certifications grouped per country, in listing order.
pub(crate) fn certificates(markup: &str) -> Vec<Certificate> {
    let document = Html::parse_document(markup);
    let mut out: Vec<Certificate> = Vec::new();
    for item in document
        .select(&selector("section#certificates li.ipl-inline-list__item"))
    {
        let Some(anchor) = item.select(&selector("a")).next() else {
            continue;
        };
        let text: String = anchor.text().collect();
        let (country, rating) = match text.split_once(':') {
            Some((country, rating)) => {
                (country.trim().to_owned(), rating.to_owned())
            }
            None => (text.trim().to_owned(), String::new()),
        };
        match out.iter_mut().find(|cert| cert.country == country) {
            Some(cert) => cert.ratings.push(rating),
            None => out.push(Certificate {
                country,
                ratings: vec![rating],
            }),
        }
    }
    out
}

/// User plot summaries. The first entry duplicates the outline and is
/// skipped unless it is the only one, in which case a single empty
/// placeholder is kept so callers can tell "page empty" from "page gone".
pub(crate) fn plots(markup: &str) -> Vec<PlotSummary> {
    let document = Html::parse_document(markup);
    let items: Vec<ElementRef<'_>> = document
        .select(&selector("ul#plot-summaries-content > li"))
        .filter(|li| {
            li.attr("id").is_some_and(|id| id != "no-summary-content")
        })
        .collect();

    let mut out = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if index == 0 {
            if items.len() == 1 {
                out.push(PlotSummary::default());
            }
            continue;
        }
        let author = item.html().split_once('\u{2014}').and_then(|(_, tail)| {
            let stripped = strip_tags(tail);
            let before_at = stripped.split('@').next().unwrap_or_default();
            let name = before_at
                .split("&lt;")
                .find(|part| !part.is_empty())?
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned();
            (!name.is_empty()).then_some(name)
        });
        let text = item
            .select(&selector("p"))
            .next()
            .map(element_text)
            .unwrap_or_default();
        out.push(PlotSummary { text, author });
    }
    out
}

pub(crate) fn taglines(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    document
        .select(&selector("div.soda.odd, div.soda.even"))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// One crew table (director, writer, producer, composer) from the full
/// credits page, addressed by its heading id.
pub(crate) fn crew_table(markup: &str, section: &str) -> Vec<CrewCredit> {
    let document = Html::parse_document(markup);
    let css = format!("h4#{section}");
    let Some(heading) = document.select(&selector(&css)).next() else {
        return Vec::new();
    };
    let Some(table) = following_table(heading) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for row in table.select(&selector("tr")) {
        let cells: Vec<ElementRef<'_>> = row.select(&selector("td")).collect();
        let Some(&name_cell) = cells.first() else {
            continue;
        };
        // Spacer rows are all whitespace.
        if element_text(name_cell).is_empty() {
            continue;
        }
        let role = cells.get(2).map(|cell| element_text(*cell));
        let (id, name) = match name_cell.select(&selector("a")).next() {
            Some(anchor) => (
                anchor.attr("href").and_then(NameId::extract),
                element_text(anchor),
            ),
            None => (None, element_text(name_cell)),
        };
        out.push(CrewCredit { id, name, role });
    }
    out
}

/// Cast table rows. Only rows with exactly four cells are credits; the
/// role text drops per-episode noise lines and non-breaking spaces.
pub(crate) fn cast(markup: &str) -> Vec<CastMember> {
    let document = Html::parse_document(markup);
    let mut out = Vec::new();
    for row in document.select(&selector(
        "table.cast_list tr.odd, table.cast_list tr.even",
    )) {
        let cells: Vec<ElementRef<'_>> = row.select(&selector("td")).collect();
        if cells.len() != 4 {
            continue;
        }
        let (id, name) = match cells[1].select(&selector("a")).next() {
            Some(anchor) => (
                anchor.attr("href").and_then(NameId::extract),
                element_text(anchor),
            ),
            None => {
                let text = element_text(cells[1]);
                if text.is_empty() {
                    continue;
                }
                (None, text)
            }
        };
        let thumbnail = cells[0]
            .select(&selector("img"))
            .next()
            .and_then(|img| img.attr("loadlate"))
            .filter(|url| !url.is_empty())
            .map(str::to_owned);

        let raw_role: String = cells[3].text().collect();
        let mut role = String::new();
        for line in raw_role.split('\n') {
            if line.contains("episode")
                || line.contains("/ ...")
                || line.is_empty()
            {
                continue;
            }
            role.push_str(line.replace('\u{a0}', "").trim());
            role.push(' ');
        }
        let role = role.trim().to_owned();

        out.push(CastMember {
            id,
            name,
            role: (!role.is_empty()).then_some(role),
            thumbnail,
        });
    }
    out
}

/// Which slices the episodes page offers. The page carries a season select
/// and a year select; the authoritative one starts with a numeric option,
/// the other with a blank.
pub(crate) fn episode_slices(markup: &str) -> Vec<i32> {
    let document = Html::parse_document(markup);
    let mut select_id = "byYear";
    if let Some(first) =
        document.select(&selector("select#bySeason option")).next()
        && element_text(first).parse::<i64>().is_ok()
    {
        select_id = "bySeason";
    }
    let css = format!("select#{select_id} option");
    document
        .select(&selector(&css))
        .map(|option| {
            option
                .attr("value")
                .unwrap_or_default()
                .trim()
                .parse()
                .unwrap_or(0)
        })
        .collect()
}

/// Episode entries of one season or year slice. Unnumbered episodes come
/// back with number `-1`.
pub(crate) fn episode_cells(markup: &str, season: i32) -> Vec<Episode> {
    let document = Html::parse_document(markup);
    let mut out = Vec::new();
    for cell in
        document.select(&selector("div.list_item.odd, div.list_item.even"))
    {
        let image = cell
            .select(&selector("img"))
            .next()
            .and_then(|img| img.attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_owned);
        let (id, title) = match cell.select(&selector("a")).next() {
            Some(anchor) => (
                anchor.attr("href").and_then(TitleId::extract),
                anchor
                    .attr("title")
                    .map(|title| title.trim().to_owned())
                    .unwrap_or_default(),
            ),
            None => (None, String::new()),
        };
        let episode = cell
            .select(&selector("meta"))
            .next()
            .and_then(|meta| meta.attr("content"))
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(-1);

        let mut air_date = String::new();
        let mut plot = String::new();
        for div in cell.select(&selector("div")) {
            match div.attr("class") {
                Some("airdate") => air_date = element_text(div),
                Some("item_description") => {
                    let text = element_text(div);
                    plot = if text.to_lowercase().contains("add a plot") {
                        String::new()
                    } else {
                        text
                    };
                }
                _ => {}
            }
        }

        out.push(Episode {
            id,
            title,
            air_date,
            plot,
            season,
            episode,
            image,
        });
    }
    out
}

/// Quote scenes. Each `sodatext` block is one scene; a paragraph with a
/// name link is a spoken line split on the first colon, the rest are stage
/// direction. Character links are absolutized against `site`.
pub(crate) fn quotes(markup: &str, site: &str) -> Vec<Vec<Quote>> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for block in document.select(&selector("div.sodatext")) {
        let mut scene = Vec::new();
        for paragraph in block.select(&selector("p")) {
            let text: String = paragraph.text().collect();
            match paragraph.select(&selector("a")).next() {
                Some(anchor) => {
                    let href = anchor.attr("href").unwrap_or_default();
                    let url = href
                        .replace("/name/", &format!("https://{site}/name/"));
                    let (name, line) = match text.split_once(':') {
                        Some((name, line)) => (name.trim(), line.trim()),
                        None => (text.trim(), ""),
                    };
                    scene.push(Quote {
                        quote: line.to_owned(),
                        character: Some(QuoteCharacter {
                            name: name.to_owned(),
                            url,
                        }),
                    });
                }
                None => scene.push(Quote {
                    quote: text.trim().to_owned(),
                    character: None,
                }),
            }
        }
        if !scene.is_empty() {
            out.push(scene);
        }
    }
    out
}

/// Trivia notes; the spoiler block is only included on request.
pub(crate) fn trivia(markup: &str, spoilers: bool) -> Vec<String> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for block in document.select(&selector("div#trivia_content div.list")) {
        let spoiler_block = block
            .select(&selector("a"))
            .next()
            .is_some_and(|anchor| anchor.attr("id") == Some("spoilers"));
        if spoiler_block && !spoilers {
            continue;
        }
        for cell in block.select(&selector("div.sodatext")) {
            let text = element_text(cell);
            if !text.is_empty() {
                out.push(text);
            }
        }
    }
    out
}

/// Soundtrack listing: track name above the first break, credit lines
/// below it, newline-joined.
pub(crate) fn soundtracks(markup: &str) -> Vec<Soundtrack> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for cell in document.select(&selector(
        "div.soundTrack.soda.odd, div.soundTrack.soda.even",
    )) {
        let inner = cell.inner_html();
        let mut pieces = BR.splitn(&inner, 2);
        let track = decode_entities(
            strip_tags(pieces.next().unwrap_or_default()).trim(),
        );
        let credits = pieces
            .next()
            .map(|rest| {
                BR.split(rest)
                    .map(|line| {
                        decode_entities(strip_tags(line).trim())
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
                    .trim()
                    .to_owned()
            })
            .unwrap_or_default();
        out.push(Soundtrack { track, credits });
    }
    out
}

/// Filming locations: the real place and what it stood in for.
pub(crate) fn locations(markup: &str) -> Vec<Location> {
    let document = Html::parse_document(markup);
    let mut out = Vec::new();
    for cell in document.select(&selector(
        "section#filming_locations div.soda.sodavote.odd, \
         section#filming_locations div.soda.sodavote.even",
    )) {
        let real = cell
            .select(&selector("dt"))
            .next()
            .map(element_text)
            .unwrap_or_default();
        let fictional = cell
            .select(&selector("dd"))
            .next()
            .map(element_text)
            .unwrap_or_default();
        out.push(Location { real, fictional });
    }
    out
}

pub(crate) fn keywords(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    document
        .select(&selector("div.sodatext a"))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Alternate-version notes, one string per entry. List items inside a note
/// are rendered as `- ` bullet lines.
pub(crate) fn alternate_versions(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    if no_content_marker(&document) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for cell in document.select(&selector("div.soda.odd, div.soda.even")) {
        let mut note = String::new();
        for node in cell.descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };
            let in_list_item = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|el| el.name() == "li"))
                .unwrap_or(false);
            if in_list_item {
                note.push_str("- ");
            }
            note.push_str(text.trim());
            note.push('\n');
        }
        let note = note.trim().to_owned();
        if !note.is_empty() {
            out.push(note);
        }
    }
    out
}

/// Runtime variants from the technical specs table. Each `<br>`-separated
/// variant is digits plus an optional parenthesized qualifier.
pub(crate) fn runtimes(markup: &str) -> Vec<Runtime> {
    let document = Html::parse_document(markup);
    let Some(label) = document
        .select(&selector("td"))
        .find(|td| element_text(*td) == "Runtime")
    else {
        return Vec::new();
    };
    let Some(value_cell) = label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
    else {
        return Vec::new();
    };

    let inner = value_cell.inner_html();
    let mut out = Vec::new();
    for chunk in BR.split(&inner) {
        if chunk.is_empty() {
            continue;
        }
        let runtime = match chunk.find('(') {
            Some(pos) => {
                let tail = &chunk[pos + 1..];
                let mut parts = tail.splitn(2, '(');
                let seconds = digits(parts.next().unwrap_or_default());
                let annotations = parts
                    .next()
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| format!("({}", strip_tags(rest).trim()))
                    .into_iter()
                    .collect();
                Runtime {
                    seconds,
                    annotations,
                }
            }
            None => Runtime {
                seconds: digits(chunk),
                annotations: Vec::new(),
            },
        };
        out.push(runtime);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_splits_series_ranges_on_the_en_dash() {
        let markup =
            "<html><head><title>The Wire (TV Series 2002\u{2013}2008) - IMDb</title></head></html>";
        let facts = title_facts(markup);
        assert_eq!(facts.title, "The Wire");
        assert_eq!(facts.movie_type, Some(MovieType::TvSeries));
        assert_eq!(facts.year, "2002");
        assert_eq!(facts.end_year, "2008");
    }

    #[test]
    fn banner_without_a_range_marks_end_year_zero() {
        let markup =
            "<html><head><title>Inception (2010) - IMDb</title></head></html>";
        let facts = title_facts(markup);
        assert_eq!(facts.title, "Inception");
        assert_eq!(facts.movie_type, None);
        assert_eq!(facts.year, "2010");
        assert_eq!(facts.end_year, "0");
    }

    #[test]
    fn running_series_leave_the_end_year_empty() {
        let markup =
            "<html><head><title>Severance (TV Series 2022\u{2013} ) - IMDb</title></head></html>";
        let facts = title_facts(markup);
        assert_eq!(facts.year, "2022");
        assert_eq!(facts.end_year, "");
    }

    #[test]
    fn unknown_year_normalizes_to_empty() {
        let markup =
            "<html><head><title>Untitled Project (????) - IMDb</title></head></html>";
        let facts = title_facts(markup);
        assert_eq!(facts.year, "");
        assert_eq!(facts.end_year, "0");
    }

    #[test]
    fn rating_and_rank_come_from_the_hero_bar() {
        let markup = r##"<html><body>
            <div data-testid="hero-rating-bar__aggregate-rating__score">
              <span>9.3</span><span>/10</span>
            </div>
            <a data-testid="award_top-rated">Top rated movie #14</a>
            <span class="score-meta">76</span>
        </body></html>"##;
        assert_eq!(rating(markup), 9.3);
        assert_eq!(top250(markup), 14);
        assert_eq!(metacritic(markup), Some(76));
    }

    #[test]
    fn missing_hero_sections_degrade_to_defaults() {
        let markup = "<html><body></body></html>";
        assert_eq!(rating(markup), 0.0);
        assert_eq!(top250(markup), 0);
        assert_eq!(metacritic(markup), None);
    }

    #[test]
    fn runtime_variants_split_on_breaks_and_keep_qualifiers() {
        let markup = r#"<html><body><table><tr>
            <td>Runtime</td>
            <td>1h 30m (90 min)<br>1h 52m (112 min) (director's cut)</td>
        </tr></table></body></html>"#;
        let parsed = runtimes(markup);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].seconds, 90);
        assert!(parsed[0].annotations.is_empty());
        assert_eq!(parsed[1].seconds, 112);
        assert_eq!(parsed[1].annotations, vec!["(director's cut)".to_owned()]);
    }

    #[test]
    fn cast_rows_need_exactly_four_cells() {
        let markup = r#"<html><body><table class="cast_list">
            <tr class="odd">
              <td><img loadlate="https://images.example/west.jpg"></td>
              <td><a href="/name/nm0922035/">Dominic West</a></td>
              <td>...</td>
              <td>Det. James 'Jimmy' McNulty
/ ... extra
60 episodes, 2002-2008</td>
            </tr>
            <tr class="even"><td colspan="4">Rest of cast listed alphabetically</td></tr>
        </table></body></html>"#;
        let members = cast(markup);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Dominic West");
        assert_eq!(
            members[0].id.as_ref().map(|id| id.as_str()),
            Some("0922035")
        );
        assert_eq!(
            members[0].role.as_deref(),
            Some("Det. James 'Jimmy' McNulty")
        );
        assert_eq!(
            members[0].thumbnail.as_deref(),
            Some("https://images.example/west.jpg")
        );
    }

    #[test]
    fn crew_tables_skip_whitespace_rows_and_read_roles() {
        let markup = r#"<html><body>
          <h4 id="director">Directed by</h4>
          <table><tbody>
            <tr><td>   </td></tr>
            <tr>
              <td><a href="/name/nm0001053/">Joel Coen</a></td>
              <td>...</td>
              <td>(as Joel and Ethan Coen)</td>
            </tr>
            <tr><td>Uncredited Stranger</td></tr>
          </tbody></table>
        </body></html>"#;
        let crew = crew_table(markup, "director");
        assert_eq!(crew.len(), 2);
        assert_eq!(crew[0].name, "Joel Coen");
        assert_eq!(
            crew[0].id.as_ref().map(|id| id.as_str()),
            Some("0001053")
        );
        assert_eq!(crew[0].role.as_deref(), Some("(as Joel and Ethan Coen)"));
        assert_eq!(crew[1].name, "Uncredited Stranger");
        assert_eq!(crew[1].id, None);
        assert_eq!(crew[1].role, None);
    }

    #[test]
    fn akas_keep_original_title_rows_verbatim() {
        let markup = r#"<html><body>
          <a id="akas"></a>
          <table>
            <tr><td>(original title)</td><td>Le fabuleux destin d'Am&#233;lie Poulain</td></tr>
            <tr><td>Germany (working title)</td><td>Die fabelhafte Welt der Amelie</td></tr>
          </table>
        </body></html>"#;
        let akas = also_known_as(markup);
        assert_eq!(akas.len(), 2);
        assert_eq!(akas[0].country, "(original title)");
        assert_eq!(akas[1].country, "Germany");
        assert_eq!(akas[1].title, "Die fabelhafte Welt der Amelie");
    }

    #[test]
    fn certificates_group_every_rating_per_country() {
        let markup = r#"<html><body><section id="certificates"><ul>
          <li class="ipl-inline-list__item"><a>United States:TV-MA</a></li>
          <li class="ipl-inline-list__item"><a>United States:R</a></li>
          <li class="ipl-inline-list__item"><a>Germany:16</a></li>
        </ul></section></body></html>"#;
        let certs = certificates(markup);
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].country, "United States");
        assert_eq!(certs[0].ratings, vec!["TV-MA".to_owned(), "R".to_owned()]);
        assert_eq!(certs[1].ratings, vec!["16".to_owned()]);
    }

    #[test]
    fn first_plot_summary_is_skipped_as_the_outline() {
        let markup = format!(
            r#"<html><body><ul id="plot-summaries-content">
          <li id="summary-ps1"><p>Outline duplicate.</p></li>
          <li id="summary-ps2"><p>A chemistry teacher turns to crime.</p>
            <em>{dash}<a href="/search/title?plot_author=V">Vince</a>&lt;vince@example.com&gt;</em></li>
        </ul></body></html>"#,
            dash = '\u{2014}'
        );
        let summaries = plots(&markup);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].text, "A chemistry teacher turns to crime.");
        assert_eq!(summaries[0].author.as_deref(), Some("Vince"));
    }

    #[test]
    fn lone_plot_summary_becomes_an_empty_placeholder() {
        let markup = r#"<html><body><ul id="plot-summaries-content">
          <li id="summary-ps1"><p>Only the outline.</p></li>
        </ul></body></html>"#;
        let summaries = plots(markup);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0], PlotSummary::default());
    }

    #[test]
    fn quote_lines_split_character_from_speech() {
        let markup = r#"<html><body>
          <div class="sodatext">
            <p><a href="/name/nm0922035/">McNulty</a>: What the hell did I do?</p>
            <p>[everyone looks away]</p>
          </div>
          <div class="sodatext">
            <p><a href="/name/nm0005299/">Omar</a>: Omar listening.</p>
          </div>
        </body></html>"#;
        let scenes = quotes(markup, "www.imdb.com");
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].len(), 2);
        let first = &scenes[0][0];
        assert_eq!(first.quote, "What the hell did I do?");
        let character = first.character.as_ref().expect("line has a speaker");
        assert_eq!(character.name, "McNulty");
        assert_eq!(character.url, "https://www.imdb.com/name/nm0922035/");
        assert!(scenes[0][1].character.is_none());
    }

    #[test]
    fn spoiler_trivia_is_opt_in() {
        let markup = r#"<html><body><div id="trivia_content">
          <div class="list">
            <a id="general"></a>
            <div class="sodatext">Shot in Baltimore.</div>
          </div>
          <div class="list">
            <a id="spoilers"></a>
            <div class="sodatext">A major character dies.</div>
          </div>
        </div></body></html>"#;
        assert_eq!(trivia(markup, false), vec!["Shot in Baltimore.".to_owned()]);
        assert_eq!(trivia(markup, true).len(), 2);
    }

    #[test]
    fn soundtrack_splits_track_from_credit_lines() {
        let markup = r#"<html><body>
          <div class="soundTrack soda odd">Way Down in the Hole<br>
            Written by <a href="/name/nm0001823/">Tom Waits</a><br>
            Performed by The Blind Boys of Alabama</div>
        </body></html>"#;
        let tracks = soundtracks(markup);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].track, "Way Down in the Hole");
        assert_eq!(
            tracks[0].credits,
            "Written by Tom Waits\nPerformed by The Blind Boys of Alabama"
        );
    }

    #[test]
    fn no_content_placeholder_short_circuits_listings() {
        let markup = r#"<html><body>
          <div id="quotes_no_content">No quotes yet.</div>
          <div class="soda odd">Should not be seen</div>
        </body></html>"#;
        assert!(taglines(markup).is_empty());
        assert!(quotes(markup, "www.imdb.com").is_empty());
        assert!(trivia(markup, true).is_empty());
        assert!(keywords(markup).is_empty());
        assert!(alternate_versions(markup).is_empty());
    }

    #[test]
    fn alternate_versions_bullet_list_items() {
        let markup = r#"<html><body>
          <div class="soda odd">The UK cut differs:
            <ul><li>extended opening</li><li>alternate score</li></ul>
          </div>
        </body></html>"#;
        let notes = alternate_versions(markup);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("The UK cut differs:"));
        assert!(notes[0].contains("- extended opening"));
        assert!(notes[0].contains("- alternate score"));
    }

    #[test]
    fn episode_slices_prefer_the_numeric_season_select() {
        let by_season = r#"<html><body>
          <select id="bySeason"><option value="1">1</option><option value="2">2</option></select>
          <select id="byYear"><option value=""></option><option value="2002">2002</option></select>
        </body></html>"#;
        assert_eq!(episode_slices(by_season), vec![1, 2]);

        let by_year = r#"<html><body>
          <select id="bySeason"><option value=""></option><option value="1">1</option></select>
          <select id="byYear"><option value="2002">2002</option><option value="2003">2003</option></select>
        </body></html>"#;
        assert_eq!(episode_slices(by_year), vec![2002, 2003]);
    }

    #[test]
    fn episode_cells_read_number_airdate_and_plot() {
        let markup = r#"<html><body>
          <div class="list_item odd">
            <img src="https://images.example/ep1.jpg">
            <a href="/title/tt0749451/" title="The Target"></a>
            <meta content="1">
            <div class="airdate">2 Jun. 2002</div>
            <div class="item_description">McNulty watches a trial collapse.</div>
          </div>
          <div class="list_item even">
            <a href="/title/tt0749452/" title="The Detail"></a>
            <meta content="-1">
            <div class="airdate">9 Jun. 2002</div>
            <div class="item_description">Add a Plot</div>
          </div>
        </body></html>"#;
        let cells = episode_cells(markup, 1);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].title, "The Target");
        assert_eq!(
            cells[0].id.as_ref().map(|id| id.as_str()),
            Some("0749451")
        );
        assert_eq!(cells[0].episode, 1);
        assert_eq!(cells[0].season, 1);
        assert_eq!(cells[0].air_date, "2 Jun. 2002");
        assert_eq!(cells[0].plot, "McNulty watches a trial collapse.");
        assert_eq!(cells[1].episode, -1);
        assert_eq!(cells[1].plot, "");
        assert_eq!(cells[1].image, None);
    }

    #[test]
    fn seasons_fall_back_to_the_single_season_link() {
        let with_select = r#"<html><body>
          <select id="browse-episodes-season">
            <option value="1">1</option><option value="5">5</option><option value="2">2</option>
          </select>
        </body></html>"#;
        assert_eq!(seasons(with_select), 5);

        let single = r#"<html><body>
          <div data-testid="episodes-browse-episodes">
            <a href="/title/tt0306414/episodes/?season=1">All episodes</a>
          </div>
        </body></html>"#;
        assert_eq!(seasons(single), 1);
        assert_eq!(seasons("<html></html>"), 0);
    }

    #[test]
    fn recommendations_need_a_title_link() {
        let markup = r#"<html><body>
          <div class="ipc-poster-card ipc-poster-card--base">
            <div class="ipc-media ipc-media--poster"><img src="https://images.example/sopranos.jpg"></div>
            <span class="ipc-rating-star--imdb">9.2</span>
            <a class="ipc-poster-card__title" href="/title/tt0141842/">The Sopranos</a>
          </div>
          <div class="ipc-poster-card ipc-poster-card--base">
            <span class="ipc-rating-star--imdb">8.0</span>
          </div>
        </body></html>"#;
        let recs = recommendations(markup);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "The Sopranos");
        assert_eq!(recs[0].id.as_str(), "0141842");
        assert_eq!(recs[0].rating.as_deref(), Some("9.2"));
        assert_eq!(
            recs[0].image.as_deref(),
            Some("https://images.example/sopranos.jpg")
        );
    }

    #[test]
    fn detail_rows_collect_linked_values() {
        let markup = r#"<html><body><ul>
          <li data-testid="title-details-languages">
            <a>English</a><a>Greek</a>
          </li>
          <li data-testid="title-details-origin"><a>United States</a></li>
        </ul></body></html>"#;
        assert_eq!(
            detail_links(markup, "title-details-languages"),
            vec!["English".to_owned(), "Greek".to_owned()]
        );
        assert_eq!(
            detail_links(markup, "title-details-origin"),
            vec!["United States".to_owned()]
        );
    }

    #[test]
    fn outline_cleanup_strips_trailing_links() {
        let outline = r#"A mole hunt. <a href="/title/tt0306414/plotsummary?ref">See full summary</a>&nbsp;&raquo;"#;
        assert_eq!(clean_outline(outline), "A mole hunt.");
        assert_eq!(clean_outline("Plain text."), "Plain text.");
    }

    #[test]
    fn filming_locations_pair_real_and_fictional() {
        let markup = r#"<html><body><section id="filming_locations">
          <div class="soda sodavote odd">
            <dt>Baltimore, Maryland, USA</dt>
            <dd>(the Western District)</dd>
          </div>
        </section></body></html>"#;
        let locs = locations(markup);
        assert_eq!(locs.len(), 1);
        assert_eq!(locs[0].real, "Baltimore, Maryland, USA");
        assert_eq!(locs[0].fictional, "(the Western District)");
    }
}
