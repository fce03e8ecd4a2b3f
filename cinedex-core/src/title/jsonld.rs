//! Structured-data block embedded in the main title page.
//!
//! The page carries one `application/ld+json` script whose shape is looser
//! than the schema.org spec suggests: `genre` may be a string or a list,
//! `actor` an object or a list, and `creator` mixes people with companies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use cinedex_model::{NameId, PersonRef};

static SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script type="application/ld\+json">(.+?)</script>"#)
        .expect("hardcoded regex")
});

/// A value that upstream serializes as either a scalar or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LdPerson {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JsonLd {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    pub genre: Option<OneOrMany<String>>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub actor: Option<OneOrMany<LdPerson>>,
    pub creator: Option<OneOrMany<LdPerson>>,
}

impl JsonLd {
    pub fn genres(self) -> Vec<String> {
        self.genre.map(OneOrMany::into_vec).unwrap_or_default()
    }

    pub fn stars(self) -> Vec<PersonRef> {
        self.actor
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(person_ref)
            .collect()
    }

    /// Credited creators, series pages only. Companies are filtered out.
    pub fn creators(self) -> Vec<PersonRef> {
        if self.kind.as_deref() != Some("TVSeries") {
            return Vec::new();
        }
        self.creator
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| entry.kind.as_deref() == Some("Person"))
            .map(person_ref)
            .collect()
    }
}

fn person_ref(entry: LdPerson) -> PersonRef {
    PersonRef {
        id: entry.url.as_deref().and_then(NameId::extract),
        name: entry.name.unwrap_or_default(),
    }
}

/// Pull the first structured-data script out of raw page markup.
pub(crate) fn extract(markup: &str) -> Option<JsonLd> {
    let payload = SCRIPT.captures(markup)?.get(1)?.as_str();
    serde_json::from_str(payload).ok()
}
