//! Person resolver: lazy, memoized access to one person's attributes.
//!
//! Every accessor resolves on first read and caches the normalized value
//! for the lifetime of the [`Person`], including empty results. A transport
//! failure leaves the cell unset so the next call can retry.

mod credits;
mod dto;
mod queries;

use std::{fmt, sync::Arc};

use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::OnceCell;

use cinedex_model::{
    AwardEntry, AwardEvent, AwardFilter, AwardList, AwardOutcome, AwardTally,
    AwardTitle, BioEntry, BirthInfo, BodyHeight, CreditList, DeathInfo,
    DeathStatus, FilmBiography, KnownForEntry, MeterRanking, NameId,
    OtherWork, PartialDate, PrintBiography, RankDirection, Relative,
    SalaryEntry, Spouse, TitleId,
};

use crate::{
    error::{CinedexError, Result},
    graph::{Connection, GraphClient, paginate::fetch_all_edges},
};

/// Requested size for [`Person::photo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSize {
    /// 67x98 thumbnail.
    Small,
    /// 621x931.
    Medium,
    /// Whatever upstream stored.
    Large,
}

#[derive(Default)]
struct Memo {
    name: OnceCell<String>,
    primary_image: OnceCell<Option<String>>,
    birth_name: OnceCell<String>,
    nicknames: OnceCell<Vec<String>>,
    aka_names: OnceCell<Vec<String>>,
    born: OnceCell<BirthInfo>,
    died: OnceCell<DeathInfo>,
    professions: OnceCell<Vec<String>>,
    rank: OnceCell<MeterRanking>,
    height: OnceCell<BodyHeight>,
    spouses: OnceCell<Vec<Spouse>>,
    children: OnceCell<Vec<Relative>>,
    parents: OnceCell<Vec<Relative>>,
    relatives: OnceCell<Vec<Relative>>,
    bio: OnceCell<Vec<BioEntry>>,
    trivia: OnceCell<Vec<String>>,
    quotes: OnceCell<Vec<String>>,
    trademarks: OnceCell<Vec<String>>,
    salaries: OnceCell<Vec<SalaryEntry>>,
    print_biographies: OnceCell<Vec<PrintBiography>>,
    film_biographies: OnceCell<Vec<FilmBiography>>,
    other_works: OnceCell<Vec<OtherWork>>,
    awards: OnceCell<AwardList>,
    known_for: OnceCell<Vec<KnownForEntry>>,
    credits: OnceCell<CreditList>,
}

/// One person, addressed by [`NameId`].
pub struct Person {
    id: NameId,
    graph: Arc<dyn GraphClient>,
    memo: Memo,
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person").field("id", &self.id).finish()
    }
}

impl Person {
    pub fn new(id: NameId, graph: Arc<dyn GraphClient>) -> Self {
        Self {
            id,
            graph,
            memo: Memo::default(),
        }
    }

    pub fn id(&self) -> &NameId {
        &self.id
    }

    /// Run a single-object query and decode the `name` node, or fall back
    /// to the DTO default when upstream has no such node.
    async fn fetch<T>(&self, query: &str, operation: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let variables = json!({ "id": self.id.qualified() });
        let mut data = self.graph.query(query, operation, variables).await?;
        match data.get_mut("name") {
            Some(node) if !node.is_null() => {
                Ok(serde_json::from_value(node.take())?)
            }
            _ => Ok(T::default()),
        }
    }

    /// Run a single-shot connection query and collect its nodes.
    async fn fetch_connection<T>(
        &self,
        query: &str,
        operation: &str,
        field: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let variables = json!({ "id": self.id.qualified() });
        let mut data = self.graph.query(query, operation, variables).await?;
        let Some(value) = data.pointer_mut(&format!("/name/{field}")) else {
            return Ok(Vec::new());
        };
        if value.is_null() {
            return Ok(Vec::new());
        }
        let connection: Connection<T> = serde_json::from_value(value.take())?;
        Ok(connection
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .collect())
    }

    /// Trivia, quotes, and trademarks differ only in the queried field.
    async fn text_list(&self, field: &str) -> Result<Vec<String>> {
        let query = queries::text_list(field);
        let nodes: Vec<dto::TextBlockNode> =
            self.fetch_connection(&query, "Data", field).await?;
        Ok(nodes
            .into_iter()
            .filter_map(|node| node.text.and_then(|t| t.plain_text))
            .collect())
    }

    async fn relation_list(&self, kind: &str) -> Result<Vec<Relative>> {
        let query = queries::relations(kind);
        let nodes: Vec<dto::RelationNode> =
            self.fetch_connection(&query, "Data", "relations").await?;
        Ok(normalize_relations(nodes))
    }

    /// Display name.
    pub async fn name(&self) -> Result<&str> {
        self.memo
            .name
            .get_or_try_init(|| async {
                let data: dto::NameTextData =
                    self.fetch(queries::NAME, "Name").await?;
                Ok(data.name_text.and_then(|t| t.text).unwrap_or_default())
            })
            .await
            .map(String::as_str)
    }

    /// Raw URL of the primary photo, if one exists.
    pub async fn primary_image(&self) -> Result<Option<&str>> {
        let url = self
            .memo
            .primary_image
            .get_or_try_init(|| async {
                let data: dto::PrimaryImageData =
                    self.fetch(queries::PRIMARY_IMAGE, "PrimaryImage").await?;
                Ok::<_, CinedexError>(
                    data.primary_image.and_then(|image| image.url),
                )
            })
            .await?;
        Ok(url.as_deref())
    }

    /// Primary photo URL rewritten for the requested size.
    pub async fn photo(&self, size: PhotoSize) -> Result<Option<String>> {
        let Some(url) = self.primary_image().await? else {
            return Ok(None);
        };
        Ok(Some(sized_photo_url(url, size)))
    }

    /// Name at birth.
    pub async fn birth_name(&self) -> Result<&str> {
        self.memo
            .birth_name
            .get_or_try_init(|| async {
                let data: dto::BirthNameData =
                    self.fetch(queries::BIRTH_NAME, "BirthName").await?;
                Ok(data.birth_name.and_then(|t| t.text).unwrap_or_default())
            })
            .await
            .map(String::as_str)
    }

    pub async fn nicknames(&self) -> Result<&[String]> {
        self.memo
            .nicknames
            .get_or_try_init(|| async {
                let data: dto::NickNamesData =
                    self.fetch(queries::NICK_NAMES, "NickName").await?;
                Ok(data
                    .nick_names
                    .into_iter()
                    .filter_map(|n| n.text)
                    .collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Alternative names, drained across every page.
    pub async fn aka_names(&self) -> Result<&[String]> {
        self.memo
            .aka_names
            .get_or_try_init(|| async {
                let nodes: Vec<dto::TextValue> = fetch_all_edges(
                    self.graph.as_ref(),
                    "AkaName",
                    "akas",
                    queries::AKA_FRAGMENT,
                    "",
                    &self.id.qualified(),
                )
                .await?;
                Ok(nodes.into_iter().filter_map(|node| node.text).collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Birth date and place. Unknown parts stay empty.
    pub async fn born(&self) -> Result<&BirthInfo> {
        self.memo
            .born
            .get_or_try_init(|| async {
                let data: dto::BirthData =
                    self.fetch(queries::BIRTH, "BirthDate").await?;
                Ok(BirthInfo {
                    date: date_from(data.birth_date),
                    place: data.birth_location.and_then(|l| l.text),
                })
            })
            .await
    }

    /// Death date, place, cause, and status. All empty for the living.
    pub async fn died(&self) -> Result<&DeathInfo> {
        self.memo
            .died
            .get_or_try_init(|| async {
                let data: dto::DeathData =
                    self.fetch(queries::DEATH, "DeathDate").await?;
                Ok(DeathInfo {
                    date: date_from(data.death_date),
                    place: data.death_location.and_then(|l| l.text),
                    cause: data.death_cause.and_then(|c| c.text),
                    status: data
                        .death_status
                        .as_deref()
                        .and_then(DeathStatus::from_upstream),
                })
            })
            .await
    }

    /// Primary professions, e.g. "Actor", "Producer".
    pub async fn professions(&self) -> Result<&[String]> {
        self.memo
            .professions
            .get_or_try_init(|| async {
                let data: dto::ProfessionsData =
                    self.fetch(queries::PROFESSIONS, "Professions").await?;
                Ok(data
                    .primary_professions
                    .into_iter()
                    .filter_map(|block| block.category.and_then(|c| c.text))
                    .collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Popularity meter rank and its recent movement.
    pub async fn rank(&self) -> Result<&MeterRanking> {
        self.memo
            .rank
            .get_or_try_init(|| async {
                let data: dto::RankData =
                    self.fetch(queries::RANK, "Rank").await?;
                let ranking = data.meter_ranking.unwrap_or_default();
                let change = ranking.rank_change.unwrap_or_default();
                Ok(MeterRanking {
                    current_rank: ranking.current_rank,
                    direction: change
                        .change_direction
                        .as_deref()
                        .and_then(RankDirection::from_upstream),
                    difference: change.difference,
                })
            })
            .await
    }

    /// Body height in both display units.
    pub async fn height(&self) -> Result<&BodyHeight> {
        self.memo
            .height
            .get_or_try_init(|| async {
                let data: dto::BodyHeightData =
                    self.fetch(queries::BODY_HEIGHT, "BodyHeight").await?;
                let display = data
                    .height
                    .and_then(|h| h.displayable_property)
                    .and_then(|p| p.value)
                    .and_then(|v| v.plain_text);
                Ok(normalize_height(display))
            })
            .await
    }

    pub async fn spouses(&self) -> Result<&[Spouse]> {
        self.memo
            .spouses
            .get_or_try_init(|| async {
                let data: dto::SpousesData =
                    self.fetch(queries::SPOUSES, "Spouses").await?;
                Ok(normalize_spouses(data))
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn children(&self) -> Result<&[Relative]> {
        self.memo
            .children
            .get_or_try_init(|| self.relation_list("CHILDREN"))
            .await
            .map(Vec::as_slice)
    }

    pub async fn parents(&self) -> Result<&[Relative]> {
        self.memo
            .parents
            .get_or_try_init(|| self.relation_list("PARENTS"))
            .await
            .map(Vec::as_slice)
    }

    /// Family members beyond children and parents.
    pub async fn relatives(&self) -> Result<&[Relative]> {
        self.memo
            .relatives
            .get_or_try_init(|| self.relation_list("OTHERS"))
            .await
            .map(Vec::as_slice)
    }

    /// Biography entries with their authors.
    pub async fn bio(&self) -> Result<&[BioEntry]> {
        self.memo
            .bio
            .get_or_try_init(|| async {
                let nodes: Vec<dto::BioNode> = self
                    .fetch_connection(queries::MINI_BIO, "MiniBio", "bios")
                    .await?;
                Ok(nodes
                    .into_iter()
                    .filter_map(|node| {
                        let text = node.text.and_then(|t| t.plain_text)?;
                        Some(BioEntry {
                            text,
                            author: node.author.and_then(|a| a.plain_text),
                        })
                    })
                    .collect())
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn trivia(&self) -> Result<&[String]> {
        self.memo
            .trivia
            .get_or_try_init(|| self.text_list("trivia"))
            .await
            .map(Vec::as_slice)
    }

    pub async fn quotes(&self) -> Result<&[String]> {
        self.memo
            .quotes
            .get_or_try_init(|| self.text_list("quotes"))
            .await
            .map(Vec::as_slice)
    }

    pub async fn trademarks(&self) -> Result<&[String]> {
        self.memo
            .trademarks
            .get_or_try_init(|| self.text_list("trademarks"))
            .await
            .map(Vec::as_slice)
    }

    /// Salaries per title, newest data first as served.
    pub async fn salaries(&self) -> Result<&[SalaryEntry]> {
        self.memo
            .salaries
            .get_or_try_init(|| async {
                let nodes: Vec<dto::SalaryNode> = self
                    .fetch_connection(
                        queries::SALARIES,
                        "Salaries",
                        "titleSalaries",
                    )
                    .await?;
                Ok(normalize_salaries(nodes))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Books about this person.
    pub async fn print_biographies(&self) -> Result<&[PrintBiography]> {
        self.memo
            .print_biographies
            .get_or_try_init(|| async {
                let nodes: Vec<dto::PrintBioNode> = self
                    .fetch_connection(
                        queries::PUB_PRINT,
                        "PubPrint",
                        "publicityListings",
                    )
                    .await?;
                Ok(nodes
                    .into_iter()
                    .map(|node| PrintBiography {
                        title: node
                            .title
                            .and_then(|t| t.text)
                            .unwrap_or_default(),
                        authors: node
                            .authors
                            .into_iter()
                            .filter_map(|a| a.plain_text)
                            .collect(),
                        publisher: node.publisher,
                        isbn: node.isbn,
                    })
                    .collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Film and TV productions about this person.
    pub async fn film_biographies(&self) -> Result<&[FilmBiography]> {
        self.memo
            .film_biographies
            .get_or_try_init(|| async {
                let nodes: Vec<dto::FilmBioNode> = self
                    .fetch_connection(
                        queries::PUB_FILM,
                        "PubFilm",
                        "publicityListings",
                    )
                    .await?;
                Ok(normalize_film_biographies(nodes))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Stage, radio, and other non-screen work.
    pub async fn other_works(&self) -> Result<&[OtherWork]> {
        self.memo
            .other_works
            .get_or_try_init(|| async {
                let nodes: Vec<dto::OtherWorkNode> = self
                    .fetch_connection(
                        queries::PUB_OTHER,
                        "PubOther",
                        "otherWorks",
                    )
                    .await?;
                Ok(nodes
                    .into_iter()
                    .map(|node| OtherWork {
                        category: node.category.and_then(|c| c.text),
                        from: date_components(node.from_date),
                        to: date_components(node.to_date),
                        text: node.text.and_then(|t| t.plain_text),
                    })
                    .collect())
            })
            .await
            .map(Vec::as_slice)
    }

    /// Award nominations grouped by event, most prestigious first.
    ///
    /// The filter only applies to the first call; later calls return the
    /// memoized list regardless of the filter they pass.
    pub async fn awards(&self, filter: &AwardFilter) -> Result<&AwardList> {
        self.memo
            .awards
            .get_or_try_init(|| async {
                let query = queries::awards(
                    filter.wins_only,
                    filter.event_id.as_deref(),
                );
                let nodes: Vec<dto::AwardNominationNode> = self
                    .fetch_connection(&query, "Award", "awardNominations")
                    .await?;
                Ok(normalize_awards(nodes))
            })
            .await
    }

    /// The short "known for" strip from the profile.
    pub async fn known_for(&self) -> Result<&[KnownForEntry]> {
        self.memo
            .known_for
            .get_or_try_init(|| async {
                let nodes: Vec<dto::KnownForNode> = self
                    .fetch_connection(queries::KNOWN_FOR, "KnownFor", "knownFor")
                    .await?;
                Ok(normalize_known_for(nodes))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Complete filmography bucketed by category, drained across every
    /// page. Every category appears even when empty.
    pub async fn credits(&self) -> Result<&CreditList> {
        self.memo
            .credits
            .get_or_try_init(|| async {
                let nodes: Vec<dto::CreditNode> = fetch_all_edges(
                    self.graph.as_ref(),
                    "Credits",
                    "credits",
                    queries::CREDIT_FRAGMENT,
                    "",
                    &self.id.qualified(),
                )
                .await?;
                Ok(credits::bucket_credits(nodes))
            })
            .await
    }
}

fn date_components(components: Option<dto::DateComponents>) -> PartialDate {
    let components = components.unwrap_or_default();
    PartialDate::from_components(
        components.day,
        components.month,
        components.year,
    )
}

fn date_from(block: Option<dto::DateBlock>) -> PartialDate {
    date_components(block.and_then(|b| b.date_components))
}

fn sized_photo_url(url: &str, size: PhotoSize) -> String {
    let base = url.replace(".jpg", "");
    match size {
        PhotoSize::Small => format!("{base}QL100_SY98_.jpg"),
        PhotoSize::Medium => format!("{base}QL100_SY931_.jpg"),
        PhotoSize::Large => url.to_owned(),
    }
}

/// Split `6' 2" (1.88 m)` into its imperial and metric halves.
fn normalize_height(display: Option<String>) -> BodyHeight {
    let Some(display) = display else {
        return BodyHeight::default();
    };
    match display.split_once('(') {
        Some((imperial, metric)) => BodyHeight {
            imperial: Some(imperial.trim().to_owned()),
            metric: Some(metric.trim_matches([' ', 'm', ')']).to_owned()),
        },
        None => BodyHeight {
            imperial: Some(display.trim().to_owned()),
            metric: None,
        },
    }
}

fn normalize_spouses(data: dto::SpousesData) -> Vec<Spouse> {
    data.spouses
        .into_iter()
        .map(|node| {
            let identity = node.spouse.unwrap_or_default();
            let id = identity
                .name
                .and_then(|n| n.id)
                .as_deref()
                .and_then(NameId::extract);
            let name = identity
                .as_markdown
                .and_then(|m| m.plain_text)
                .unwrap_or_default();

            let time_range = node.time_range.unwrap_or_default();

            // An attribute naming children carries the count; everything
            // else is commentary.
            let mut children = 0u32;
            let mut comment = String::new();
            for attribute in node.attributes.into_iter().filter_map(|a| a.text)
            {
                if attribute.to_lowercase().contains("child") {
                    children = attribute
                        .chars()
                        .filter(char::is_ascii_digit)
                        .collect::<String>()
                        .parse()
                        .unwrap_or(0);
                } else {
                    comment.push_str(&attribute);
                }
            }

            Spouse {
                id,
                name,
                from: date_from(time_range.from_date),
                to: date_from(time_range.to_date),
                comment,
                children,
                current: node.current,
            }
        })
        .collect()
}

fn normalize_relations(nodes: Vec<dto::RelationNode>) -> Vec<Relative> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let relation_name = node.relation_name?;
            let relation = node
                .relationship_type
                .and_then(|t| t.text)
                .unwrap_or_default();

            // Relatives with their own page come as an id plus name block;
            // the rest are a bare display string.
            let (id, name) = match relation_name
                .name
                .filter(|name_ref| name_ref.id.is_some())
            {
                Some(name_ref) => (
                    name_ref.id.as_deref().and_then(NameId::extract),
                    name_ref
                        .name_text
                        .and_then(|t| t.text)
                        .unwrap_or_default(),
                ),
                None => (None, relation_name.name_text.unwrap_or_default()),
            };

            Some(Relative { id, name, relation })
        })
        .collect()
}

fn normalize_salaries(nodes: Vec<dto::SalaryNode>) -> Vec<SalaryEntry> {
    nodes
        .into_iter()
        .map(|node| {
            let title = node.title.unwrap_or_default();
            let amount = node.amount.unwrap_or_default();
            SalaryEntry {
                title_id: title.id.as_deref().and_then(TitleId::extract),
                title: title
                    .title_text
                    .and_then(|t| t.text)
                    .unwrap_or_default(),
                year: title.release_year.and_then(|y| y.year),
                amount: amount.amount,
                currency: amount.currency,
                comments: node
                    .attributes
                    .into_iter()
                    .filter_map(|a| a.text)
                    .collect(),
            }
        })
        .collect()
}

fn normalize_film_biographies(
    nodes: Vec<dto::FilmBioNode>,
) -> Vec<FilmBiography> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let title = node.title?;
            let (series_title, series_season, series_episode) =
                match title.series {
                    Some(series) => {
                        let episode = series.displayable_episode_number;
                        (
                            series
                                .series
                                .and_then(|s| s.title_text)
                                .and_then(|t| t.text),
                            episode.as_ref().and_then(|e| {
                                e.displayable_season
                                    .as_ref()
                                    .and_then(|t| t.text.clone())
                            }),
                            episode.and_then(|e| {
                                e.episode_number.and_then(|t| t.text)
                            }),
                        )
                    }
                    None => (None, None, None),
                };

            Some(FilmBiography {
                title_id: title.id.as_deref().and_then(TitleId::extract),
                title: title
                    .title_text
                    .and_then(|t| t.text)
                    .unwrap_or_default(),
                year: title.release_year.and_then(|y| y.year),
                series_title,
                series_season,
                series_episode,
            })
        })
        .collect()
}

fn normalize_awards(nodes: Vec<dto::AwardNominationNode>) -> AwardList {
    let mut events: Vec<AwardEvent> = Vec::new();
    let mut wins = 0u32;
    let mut nominations = 0u32;

    for node in nodes {
        let award = node.award.unwrap_or_default();
        let event_name = award.event.and_then(|e| e.text).unwrap_or_default();
        if node.is_winner {
            wins += 1;
        } else {
            nominations += 1;
        }

        let titles = node
            .awarded_entities
            .map(|entities| entities.secondary_award_titles)
            .unwrap_or_default()
            .into_iter()
            .map(|secondary| {
                let id = secondary
                    .title
                    .as_ref()
                    .and_then(|t| t.id.as_deref())
                    .and_then(TitleId::extract);
                let name = secondary
                    .title
                    .and_then(|t| t.title_text)
                    .and_then(|t| t.text)
                    .unwrap_or_default();
                let note = secondary
                    .note
                    .and_then(|n| n.plain_text)
                    .map(|note| note.trim_matches([' ', '(', ')']).to_owned());
                AwardTitle { id, name, note }
            })
            .collect();

        let entry = AwardEntry {
            year: award.event_edition.and_then(|e| e.year),
            winner: node.is_winner,
            category: award.category.and_then(|c| c.text),
            award_name: award.text,
            notes: award.notes.and_then(|n| n.plain_text),
            titles,
            outcome: Some(if node.is_winner {
                AwardOutcome::Winner
            } else {
                AwardOutcome::Nominee
            }),
        };

        match events.iter_mut().find(|event| event.event == event_name) {
            Some(event) => event.entries.push(entry),
            None => events.push(AwardEvent {
                event: event_name,
                entries: vec![entry],
            }),
        }
    }

    let total = (wins > 0 || nominations > 0)
        .then_some(AwardTally { wins, nominations });

    AwardList { events, total }
}

fn normalize_known_for(nodes: Vec<dto::KnownForNode>) -> Vec<KnownForEntry> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let credit = node.credit?;
            let title = credit.title.unwrap_or_default();
            let title_id = title.id.as_deref().and_then(TitleId::extract);
            let year = title.release_year.as_ref().and_then(|y| y.year);
            let end_year =
                title.release_year.as_ref().and_then(|y| y.end_year);
            Some(KnownForEntry {
                title_id,
                title: title
                    .title_text
                    .and_then(|t| t.text)
                    .unwrap_or_default(),
                year,
                end_year,
                characters: credit
                    .characters
                    .into_iter()
                    .filter_map(|c| c.name)
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::dto::{
        AwardDetail, AwardNominationNode, PlainTextValue, SpouseIdentity,
        SpouseNode, SpousesData, TextValue,
    };

    #[test]
    fn photo_urls_are_rewritten_per_size() {
        let url = "https://images.example/MV5BOTk1.jpg";
        assert_eq!(
            sized_photo_url(url, PhotoSize::Small),
            "https://images.example/MV5BOTk1QL100_SY98_.jpg"
        );
        assert_eq!(
            sized_photo_url(url, PhotoSize::Medium),
            "https://images.example/MV5BOTk1QL100_SY931_.jpg"
        );
        assert_eq!(sized_photo_url(url, PhotoSize::Large), url);
    }

    #[test]
    fn height_splits_into_imperial_and_metric() {
        let height =
            normalize_height(Some("6′ 2″ (1.88 m)".to_owned()));
        assert_eq!(height.imperial.as_deref(), Some("6′ 2″"));
        assert_eq!(height.metric.as_deref(), Some("1.88"));

        let bare = normalize_height(Some("6′ 2″".to_owned()));
        assert_eq!(bare.imperial.as_deref(), Some("6′ 2″"));
        assert_eq!(bare.metric, None);
    }

    #[test]
    fn spouse_attributes_split_children_from_commentary() {
        let data = SpousesData {
            spouses: vec![SpouseNode {
                spouse: Some(SpouseIdentity {
                    name: Some(crate::person::dto::IdValue {
                        id: Some("nm0000210".to_owned()),
                    }),
                    as_markdown: Some(PlainTextValue {
                        plain_text: Some("Jane Doe".to_owned()),
                    }),
                }),
                time_range: None,
                attributes: vec![
                    TextValue {
                        text: Some("2 children".to_owned()),
                    },
                    TextValue {
                        text: Some("divorced".to_owned()),
                    },
                ],
                current: false,
            }],
        };

        let spouses = normalize_spouses(data);
        assert_eq!(spouses.len(), 1);
        assert_eq!(spouses[0].name, "Jane Doe");
        assert_eq!(
            spouses[0].id.as_ref().map(|id| id.as_str()),
            Some("0000210")
        );
        assert_eq!(spouses[0].children, 2);
        assert_eq!(spouses[0].comment, "divorced");
        assert!(!spouses[0].current);
    }

    #[test]
    fn awards_group_by_event_and_tally_outcomes() {
        let node = |event: &str, winner: bool| AwardNominationNode {
            award: Some(AwardDetail {
                event: Some(TextValue {
                    text: Some(event.to_owned()),
                }),
                text: Some("Oscar".to_owned()),
                ..AwardDetail::default()
            }),
            is_winner: winner,
            awarded_entities: None,
        };

        let list = normalize_awards(vec![
            node("Academy Awards, USA", true),
            node("Academy Awards, USA", false),
            node("BAFTA Awards", false),
        ]);

        assert_eq!(list.events.len(), 2);
        assert_eq!(list.events[0].event, "Academy Awards, USA");
        assert_eq!(list.events[0].entries.len(), 2);
        assert_eq!(
            list.events[0].entries[0].outcome,
            Some(AwardOutcome::Winner)
        );
        let total = list.total.expect("counts were nonzero");
        assert_eq!(total.wins, 1);
        assert_eq!(total.nominations, 2);
    }

    #[test]
    fn empty_award_response_has_no_total() {
        let list = normalize_awards(Vec::new());
        assert!(list.events.is_empty());
        assert!(list.total.is_none());
    }
}
