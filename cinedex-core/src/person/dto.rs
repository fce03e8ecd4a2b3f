//! Wire shapes for the person queries.
//!
//! Every field is optional. Upstream omits anything it does not know and a
//! partial response must still decode, so nothing here assumes presence.

use serde::Deserialize;

// Shared fragments

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextValue {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlainTextValue {
    pub plain_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameValue {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdValue {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DateComponents {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateBlock {
    pub date_components: Option<DateComponents>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YearValue {
    pub year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleRef {
    pub id: Option<String>,
    pub title_text: Option<TextValue>,
    pub title_type: Option<TextValue>,
    pub release_year: Option<YearValue>,
}

// Single-object queries

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameTextData {
    pub name_text: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrimaryImageData {
    pub primary_image: Option<ImageValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageValue {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BirthNameData {
    pub birth_name: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NickNamesData {
    pub nick_names: Vec<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BirthData {
    pub birth_date: Option<DateBlock>,
    pub birth_location: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeathData {
    pub death_date: Option<DateBlock>,
    pub death_location: Option<TextValue>,
    pub death_cause: Option<TextValue>,
    pub death_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfessionsData {
    pub primary_professions: Vec<CategoryBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryBlock {
    pub category: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankData {
    pub meter_ranking: Option<MeterRankingNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterRankingNode {
    pub current_rank: Option<u32>,
    pub rank_change: Option<RankChangeNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankChangeNode {
    pub change_direction: Option<String>,
    pub difference: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BodyHeightData {
    pub height: Option<DisplayableBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayableBlock {
    pub displayable_property: Option<DisplayableProperty>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayableProperty {
    pub value: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpousesData {
    pub spouses: Vec<SpouseNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpouseNode {
    pub spouse: Option<SpouseIdentity>,
    pub time_range: Option<TimeRange>,
    pub attributes: Vec<TextValue>,
    pub current: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpouseIdentity {
    pub name: Option<IdValue>,
    pub as_markdown: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRange {
    pub from_date: Option<DateBlock>,
    pub to_date: Option<DateBlock>,
}

// Connection nodes

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationNode {
    pub relation_name: Option<RelationName>,
    pub relationship_type: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationName {
    /// Set when the relative has their own page.
    pub name: Option<NameRef>,
    /// Plain display name when they do not.
    pub name_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameRef {
    pub id: Option<String>,
    pub name_text: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BioNode {
    pub text: Option<PlainTextValue>,
    pub author: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextBlockNode {
    pub text: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SalaryNode {
    pub title: Option<TitleRef>,
    pub amount: Option<AmountNode>,
    pub attributes: Vec<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmountNode {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrintBioNode {
    pub title: Option<TextValue>,
    pub authors: Vec<PlainTextValue>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilmBioNode {
    pub title: Option<FilmBioTitle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilmBioTitle {
    pub id: Option<String>,
    pub title_text: Option<TextValue>,
    pub release_year: Option<YearValue>,
    pub series: Option<SeriesBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesBlock {
    pub displayable_episode_number: Option<EpisodeNumberBlock>,
    pub series: Option<SeriesTitle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeNumberBlock {
    pub displayable_season: Option<TextValue>,
    pub episode_number: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesTitle {
    pub title_text: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherWorkNode {
    pub category: Option<TextValue>,
    pub from_date: Option<DateComponents>,
    pub to_date: Option<DateComponents>,
    pub text: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardNominationNode {
    pub award: Option<AwardDetail>,
    pub is_winner: bool,
    pub awarded_entities: Option<AwardedEntities>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardDetail {
    pub event: Option<TextValue>,
    pub text: Option<String>,
    pub category: Option<TextValue>,
    pub event_edition: Option<YearValue>,
    pub notes: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardedEntities {
    pub secondary_award_titles: Vec<SecondaryAwardTitle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecondaryAwardTitle {
    pub title: Option<TitleRef>,
    pub note: Option<PlainTextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KnownForNode {
    pub credit: Option<KnownForCredit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KnownForCredit {
    pub title: Option<TitleRef>,
    pub characters: Vec<NameValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreditNode {
    pub category: Option<IdValue>,
    pub title: Option<TitleRef>,
    pub characters: Vec<NameValue>,
    pub jobs: Vec<TextValue>,
}
