use std::fmt::{self, Display, Formatter};

use crate::ids::TitleId;

/// Narrowing options for the award listing. The default selects everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardFilter {
    /// Only nominations that were won.
    pub wins_only: bool,
    /// Restrict to one award event, e.g. `"ev0000003"` for the Oscars.
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AwardOutcome {
    Winner,
    Nominee,
}

impl Display for AwardOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwardOutcome::Winner => write!(f, "Winner"),
            AwardOutcome::Nominee => write!(f, "Nominee"),
        }
    }
}

/// Title a nomination was earned for.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardTitle {
    pub id: Option<TitleId>,
    pub name: String,
    pub note: Option<String>,
}

/// One nomination or win.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardEntry {
    pub year: Option<i32>,
    pub winner: bool,
    pub category: Option<String>,
    pub award_name: Option<String>,
    pub notes: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<AwardTitle>,
    pub outcome: Option<AwardOutcome>,
}

/// All entries for one award event, in the order nominations first appeared.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardEvent {
    /// Event display name, e.g. `"Academy Awards, USA"`.
    pub event: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<AwardEntry>,
}

/// Win and nomination counts across every listed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardTally {
    pub wins: u32,
    pub nominations: u32,
}

/// Grouped award listing. Events keep first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<AwardEvent>,
    /// Present only when at least one win or nomination was counted.
    pub total: Option<AwardTally>,
}
