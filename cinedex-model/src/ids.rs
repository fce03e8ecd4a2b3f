use crate::error::ModelError;

/// Strongly typed IMDb name identifier, stored without the `nm` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NameId(String);

impl NameId {
    const PREFIX: &'static str = "nm";

    /// Accepts `nm0000206` or the bare `0000206` form.
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        let digits = strip_prefix(raw.trim(), Self::PREFIX)?;
        Ok(NameId(digits.to_string()))
    }

    /// First `nm<digits>` occurrence in arbitrary text (hrefs, jsonLD urls).
    pub fn extract(haystack: &str) -> Option<Self> {
        extract_digits(haystack, Self::PREFIX).map(NameId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefixed form IMDb expects in queries and URLs.
    pub fn qualified(&self) -> String {
        format!("{}{}", Self::PREFIX, self.0)
    }
}

impl std::fmt::Display for NameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly typed IMDb title identifier, stored without the `tt` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TitleId(String);

impl TitleId {
    const PREFIX: &'static str = "tt";

    /// Accepts `tt0306414` or the bare `0306414` form.
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        let digits = strip_prefix(raw.trim(), Self::PREFIX)?;
        Ok(TitleId(digits.to_string()))
    }

    /// First `tt<digits>` occurrence in arbitrary text (hrefs, jsonLD urls).
    pub fn extract(haystack: &str) -> Option<Self> {
        extract_digits(haystack, Self::PREFIX).map(TitleId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefixed form IMDb expects in queries and URLs.
    pub fn qualified(&self) -> String {
        format!("{}{}", Self::PREFIX, self.0)
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TitleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn strip_prefix<'a>(raw: &'a str, prefix: &str) -> Result<&'a str, ModelError> {
    let digits = raw.strip_prefix(prefix).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::InvalidId(raw.to_string()));
    }
    Ok(digits)
}

fn extract_digits(haystack: &str, prefix: &str) -> Option<String> {
    let mut search = haystack;
    while let Some(pos) = search.find(prefix) {
        let tail = &search[pos + prefix.len()..];
        let digits: String =
            tail.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            return Some(digits);
        }
        search = tail;
    }
    None
}
