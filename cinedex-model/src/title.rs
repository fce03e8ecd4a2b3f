use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use crate::ids::{NameId, TitleId};

/// Closed set of title kinds as IMDb labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovieType {
    #[default]
    Movie,
    TvSeries,
    TvEpisode,
    TvMiniSeries,
    TvMovie,
    TvSpecial,
    TvShort,
    VideoGame,
    Video,
    Short,
}

impl MovieType {
    /// Maps the page banner label. Unrecognized labels fall back to `Movie`,
    /// which is also what the site means when it prints no label at all.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "TV Series" => MovieType::TvSeries,
            "TV Episode" => MovieType::TvEpisode,
            "TV Mini Series" | "TV Mini-Series" => MovieType::TvMiniSeries,
            "TV Movie" => MovieType::TvMovie,
            "TV Special" => MovieType::TvSpecial,
            "TV Short" => MovieType::TvShort,
            "Video Game" => MovieType::VideoGame,
            "Video" => MovieType::Video,
            "Short" => MovieType::Short,
            _ => MovieType::Movie,
        }
    }
}

impl Display for MovieType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MovieType::Movie => write!(f, "Movie"),
            MovieType::TvSeries => write!(f, "TV Series"),
            MovieType::TvEpisode => write!(f, "TV Episode"),
            MovieType::TvMiniSeries => write!(f, "TV Mini Series"),
            MovieType::TvMovie => write!(f, "TV Movie"),
            MovieType::TvSpecial => write!(f, "TV Special"),
            MovieType::TvShort => write!(f, "TV Short"),
            MovieType::VideoGame => write!(f, "Video Game"),
            MovieType::Video => write!(f, "Video"),
            MovieType::Short => write!(f, "Short"),
        }
    }
}

/// Header facts decoded from the title page banner (or seeded from a search
/// result). Years stay strings because the site uses sentinels: `""` for
/// unknown or still running, `"0"` for a title with no range marker at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleFacts {
    pub title: String,
    pub year: String,
    pub end_year: String,
    pub movie_type: Option<MovieType>,
}

/// One runtime variant from the technical page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runtime {
    pub seconds: u32,
    /// Parenthesized qualifiers, e.g. `"director's cut"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub annotations: Vec<String>,
}

/// Alternate title with the country or context it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aka {
    pub country: String,
    pub title: String,
}

/// "More like this" entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    pub id: TitleId,
    pub title: String,
    pub rating: Option<String>,
    pub image: Option<String>,
}

/// One user-submitted plot summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotSummary {
    pub text: String,
    pub author: Option<String>,
}

/// Spoken line within a quote scene.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub quote: String,
    pub character: Option<QuoteCharacter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteCharacter {
    pub name: String,
    pub url: String,
}

/// Soundtrack listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soundtrack {
    pub track: String,
    /// Credit lines below the track name, newline-joined.
    pub credits: String,
}

/// Director, writer, producer or composer line from the full credits page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrewCredit {
    pub id: Option<NameId>,
    pub name: String,
    pub role: Option<String>,
}

/// Cast table row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastMember {
    pub id: Option<NameId>,
    pub name: String,
    pub role: Option<String>,
    pub thumbnail: Option<String>,
}

/// One episode from the episodes listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Episode {
    pub id: Option<TitleId>,
    pub title: String,
    pub air_date: String,
    pub plot: String,
    pub season: i32,
    pub episode: i32,
    pub image: Option<String>,
}

/// Episodes keyed season → episode number. Entries the site does not number
/// are appended after the highest key of their season.
pub type SeasonMap = BTreeMap<i32, BTreeMap<i32, Episode>>;

/// Filming location, real place and the place it stood in for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub real: String,
    pub fictional: String,
}

/// Certification entries for one country, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Certificate {
    pub country: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratings: Vec<String>,
}

/// Person reference from the jsonLD block (stars, creators).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRef {
    pub id: Option<NameId>,
    pub name: String,
}
