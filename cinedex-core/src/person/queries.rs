//! GraphQL documents for the person resolver.
//!
//! Field shapes mirror what upstream actually serves. Everything decodes
//! into the optional-heavy DTOs in [`super::dto`], so a field upstream
//! decides not to send never breaks the decode.

pub const NAME: &str = r#"query Name($id: ID!) {
  name(id: $id) {
    nameText {
      text
    }
  }
}"#;

pub const PRIMARY_IMAGE: &str = r#"query PrimaryImage($id: ID!) {
  name(id: $id) {
    primaryImage {
      url
    }
  }
}"#;

pub const BIRTH_NAME: &str = r#"query BirthName($id: ID!) {
  name(id: $id) {
    birthName {
      text
    }
  }
}"#;

pub const NICK_NAMES: &str = r#"query NickName($id: ID!) {
  name(id: $id) {
    nickNames {
      text
    }
  }
}"#;

pub const BIRTH: &str = r#"query BirthDate($id: ID!) {
  name(id: $id) {
    birthDate {
      dateComponents {
        day
        month
        year
      }
    }
    birthLocation {
      text
    }
  }
}"#;

pub const DEATH: &str = r#"query DeathDate($id: ID!) {
  name(id: $id) {
    deathDate {
      dateComponents {
        day
        month
        year
      }
    }
    deathLocation {
      text
    }
    deathCause {
      text
    }
    deathStatus
  }
}"#;

pub const PROFESSIONS: &str = r#"query Professions($id: ID!) {
  name(id: $id) {
    primaryProfessions {
      category {
        text
      }
    }
  }
}"#;

pub const RANK: &str = r#"query Rank($id: ID!) {
  name(id: $id) {
    meterRanking {
      currentRank
      rankChange {
        changeDirection
        difference
      }
    }
  }
}"#;

pub const BODY_HEIGHT: &str = r#"query BodyHeight($id: ID!) {
  name(id: $id) {
    height {
      displayableProperty {
        value {
          plainText
        }
      }
    }
  }
}"#;

pub const SPOUSES: &str = r#"query Spouses($id: ID!) {
  name(id: $id) {
    spouses {
      spouse {
        name {
          id
        }
        asMarkdown {
          plainText
        }
      }
      timeRange {
        fromDate {
          dateComponents {
            day
            month
            year
          }
        }
        toDate {
          dateComponents {
            day
            month
            year
          }
        }
      }
      attributes {
        text
      }
      current
    }
  }
}"#;

pub const MINI_BIO: &str = r#"query MiniBio($id: ID!) {
  name(id: $id) {
    bios(first: 9999) {
      edges {
        node {
          text {
            plainText
          }
          author {
            plainText
          }
        }
      }
    }
  }
}"#;

pub const SALARIES: &str = r#"query Salaries($id: ID!) {
  name(id: $id) {
    titleSalaries(first: 9999) {
      edges {
        node {
          title {
            titleText {
              text
            }
            id
            releaseYear {
              year
            }
          }
          amount {
            amount
            currency
          }
          attributes {
            text
          }
        }
      }
    }
  }
}"#;

pub const PUB_PRINT: &str = r#"query PubPrint($id: ID!) {
  name(id: $id) {
    publicityListings(first: 9999, filter: {categories: ["namePrintBiography"]}) {
      edges {
        node {
          ... on NamePrintBiography {
            title {
              text
            }
            authors {
              plainText
            }
            isbn
            publisher
          }
        }
      }
    }
  }
}"#;

pub const PUB_FILM: &str = r#"query PubFilm($id: ID!) {
  name(id: $id) {
    publicityListings(first: 9999, filter: {categories: ["nameFilmBiography"]}) {
      edges {
        node {
          ... on NameFilmBiography {
            title {
              titleText {
                text
              }
              id
              releaseYear {
                year
              }
              series {
                displayableEpisodeNumber {
                  displayableSeason {
                    text
                  }
                  episodeNumber {
                    text
                  }
                }
                series {
                  titleText {
                    text
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

pub const PUB_OTHER: &str = r#"query PubOther($id: ID!) {
  name(id: $id) {
    otherWorks(first: 9999) {
      edges {
        node {
          category {
            text
          }
          fromDate
          toDate
          text {
            plainText
          }
        }
      }
    }
  }
}"#;

pub const KNOWN_FOR: &str = r#"query KnownFor($id: ID!) {
  name(id: $id) {
    knownFor(first: 9999) {
      edges {
        node {
          credit {
            title {
              id
              titleText {
                text
              }
              releaseYear {
                year
                endYear
              }
            }
            ... on Cast {
              characters {
                name
              }
            }
          }
        }
      }
    }
  }
}"#;

/// Trivia, quotes, and trademarks share one shape with only the field name
/// varying. Runs under the operation name `Data`.
pub fn text_list(field: &str) -> String {
    format!(
        r#"query Data($id: ID!) {{
  name(id: $id) {{
    {field}(first: 9999) {{
      edges {{
        node {{
          text {{
            plainText
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Family relations filtered to one relationship class (`CHILDREN`,
/// `PARENTS`, or `OTHERS`). Runs under the operation name `Data`.
pub fn relations(relationship_types: &str) -> String {
    format!(
        r#"query Data($id: ID!) {{
  name(id: $id) {{
    relations(first: 9999, filter: {{relationshipTypes: {relationship_types}}}) {{
      edges {{
        node {{
          relationName {{
            name {{
              id
              nameText {{
                text
              }}
            }}
            nameText
          }}
          relationshipType {{
            text
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Award nominations, most prestigious first. `wins_only` collapses the
/// list to wins; `event` narrows it to one award event id.
pub fn awards(wins_only: bool, event: Option<&str>) -> String {
    let wins = if wins_only { "WINS_ONLY" } else { "null" };
    let event = event
        .map(|id| format!(" events: \"{}\"", id.trim()))
        .unwrap_or_default();
    format!(
        r#"query Award($id: ID!) {{
  name(id: $id) {{
    awardNominations(
      first: 9999
      sort: {{by: PRESTIGIOUS, order: DESC}}
      filter: {{wins: {wins}{event}}}
    ) {{
      edges {{
        node {{
          award {{
            event {{
              text
            }}
            text
            category {{
              text
            }}
            eventEdition {{
              year
            }}
            notes {{
              plainText
            }}
          }}
          isWinner
          awardedEntities {{
            ... on AwardedNames {{
              secondaryAwardTitles {{
                title {{
                  id
                  titleText {{
                    text
                  }}
                }}
                note {{
                  plainText
                }}
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Node fragment for the paginated full credit listing.
pub const CREDIT_FRAGMENT: &str = r#"category {
            id
          }
          title {
            id
            titleText {
              text
            }
            titleType {
              text
            }
            releaseYear {
              year
              endYear
            }
          }
          ... on Cast {
            characters {
              name
            }
          }
          ... on Crew {
            jobs {
              text
            }
          }"#;

/// Node fragment for the paginated alias listing.
pub const AKA_FRAGMENT: &str = "text";
