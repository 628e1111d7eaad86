//! Response model of the DBLP publication search API.
//!
//! The API reports `hit`, `author` and `ee` either as a bare value or as a
//! list depending on how many entries there are. Those fields are normalised
//! into a `Vec` while decoding so nothing downstream has to check the shape.
//! Fields inside a hit that have an unexpected JSON type decode as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::DblpError;

/// A value the API sends either alone or inside a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?
        .map(Vec::from)
        .unwrap_or_default())
}

/// Decode `T` if the value fits, otherwise treat the field as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(one_or_many::<D, Value>(deserializer)?
        .into_iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Malformed author entries keep their position with no name.
fn lenient_authors<'de, D>(deserializer: D) -> Result<Vec<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(one_or_many::<D, Value>(deserializer)?
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

/// `@total` is documented as a string but numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HitCount {
    Number(u64),
    Text(String),
}

impl HitCount {
    pub fn value(&self) -> Result<u64, DblpError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| DblpError::InvalidTotal(s.clone())),
        }
    }
}

/// Top-level search document: `{ "result": { "hits": { ... } } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: SearchResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub hits: Hits,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hits {
    #[serde(rename = "@total", default)]
    pub total: Option<HitCount>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub hit: Vec<Hit>,
}

/// One matched bibliographic record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<Info>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub authors: Option<Authors>,

    /// Electronic edition links.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub ee: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authors {
    #[serde(default, deserialize_with = "lenient_authors")]
    pub author: Vec<Author>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

/// One page of search results with the hit count already parsed.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub total: u64,
    pub hits: Vec<Hit>,
}

impl SearchResponse {
    /// Missing `@total` counts as zero hits.
    pub fn into_page(self) -> Result<SearchPage, DblpError> {
        let hits = self.result.hits;
        let total = match hits.total {
            Some(count) => count.value()?,
            None => 0,
        };
        Ok(SearchPage {
            total,
            hits: hits.hit,
        })
    }
}
