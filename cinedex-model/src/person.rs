use std::fmt::{self, Display, Formatter};

use crate::date::PartialDate;
use crate::ids::{NameId, TitleId};

/// Birth facts, any part of which may be unknown.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInfo {
    pub date: PartialDate,
    pub place: Option<String>,
}

/// Death facts. Empty for living people.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathInfo {
    pub date: PartialDate,
    pub place: Option<String>,
    pub cause: Option<String>,
    pub status: Option<DeathStatus>,
}

/// Upstream life-status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathStatus {
    Alive,
    Dead,
    PresumedDead,
}

impl DeathStatus {
    pub fn from_upstream(raw: &str) -> Option<Self> {
        match raw {
            "ALIVE" => Some(DeathStatus::Alive),
            "DEAD" => Some(DeathStatus::Dead),
            "PRESUMED_DEAD" => Some(DeathStatus::PresumedDead),
            _ => None,
        }
    }
}

impl Display for DeathStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeathStatus::Alive => write!(f, "Alive"),
            DeathStatus::Dead => write!(f, "Dead"),
            DeathStatus::PresumedDead => write!(f, "Presumed dead"),
        }
    }
}

/// One marriage entry, in upstream order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spouse {
    pub id: Option<NameId>,
    pub name: String,
    pub from: PartialDate,
    pub to: PartialDate,
    /// Attribute text other than the children count, joined.
    pub comment: String,
    pub children: u32,
    pub current: bool,
}

/// Child, parent or other relative.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relative {
    pub id: Option<NameId>,
    pub name: String,
    /// Upstream relationship label, e.g. `"Sibling"`.
    pub relation: String,
}

/// Mini-biography text with attribution.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BioEntry {
    pub text: String,
    pub author: Option<String>,
}

/// Reported pay for one title.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalaryEntry {
    pub title_id: Option<TitleId>,
    pub title: String,
    pub year: Option<i32>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub comments: Vec<String>,
}

/// Book about or by the person.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintBiography {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
}

/// Film or programme portraying the person.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilmBiography {
    pub title_id: Option<TitleId>,
    pub title: String,
    pub year: Option<i32>,
    pub series_title: Option<String>,
    pub series_season: Option<String>,
    pub series_episode: Option<String>,
}

/// Work outside film and television (stage, books, appearances).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtherWork {
    pub category: Option<String>,
    pub from: PartialDate,
    pub to: PartialDate,
    pub text: Option<String>,
}

/// Popularity meter position and its latest movement.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterRanking {
    pub current_rank: Option<u32>,
    pub direction: Option<RankDirection>,
    pub difference: Option<i64>,
}

/// Upstream meter movement enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankDirection {
    Up,
    Down,
    Flat,
}

impl RankDirection {
    pub fn from_upstream(raw: &str) -> Option<Self> {
        match raw {
            "UP" => Some(RankDirection::Up),
            "DOWN" => Some(RankDirection::Down),
            "FLAT" => Some(RankDirection::Flat),
            _ => None,
        }
    }
}

impl Display for RankDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RankDirection::Up => write!(f, "Up"),
            RankDirection::Down => write!(f, "Down"),
            RankDirection::Flat => write!(f, "Flat"),
        }
    }
}

/// Height in both display systems, split from the upstream display string.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyHeight {
    /// E.g. `5' 8"`.
    pub imperial: Option<String>,
    /// Meters as printed, e.g. `"1.73"`.
    pub metric: Option<String>,
}
