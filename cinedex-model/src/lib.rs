//! Typed records shared across the cinedex crates.
//!
//! Everything here is plain data: the resolvers in `cinedex-core` fill these
//! structs in, and consumers read them. Serde derives are feature-gated so a
//! consumer that never serializes pays nothing for it.
#![allow(missing_docs)]

pub mod awards;
pub mod credits;
pub mod date;
pub mod error;
pub mod ids;
pub mod person;
pub mod title;

pub use awards::{
    AwardEntry, AwardEvent, AwardFilter, AwardList, AwardOutcome, AwardTally,
    AwardTitle,
};
pub use credits::{CreditCategory, CreditEntry, CreditList, KnownForEntry};
pub use date::PartialDate;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{NameId, TitleId};
pub use person::{
    BioEntry, BirthInfo, BodyHeight, DeathInfo, DeathStatus, FilmBiography,
    MeterRanking, OtherWork, PrintBiography, RankDirection, Relative,
    SalaryEntry, Spouse,
};
pub use title::{
    Aka, CastMember, Certificate, CrewCredit, Episode, Location, MovieType,
    PersonRef, PlotSummary, Quote, QuoteCharacter, Recommendation, Runtime,
    SeasonMap, Soundtrack, TitleFacts,
};
