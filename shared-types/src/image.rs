use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One record from the image search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceImage {
    pub nasa_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keys the object form has used for its list, in lookup order.
pub const LIST_KEYS: [&str; 3] = ["items", "data", "results"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("expected a JSON array or object, got {0}")]
    UnexpectedShape(&'static str),
    #[error("`{key}` must be a list of images")]
    ListNotArray { key: &'static str },
    #[error("none of the {count} records could be read")]
    NoReadableRecords { count: usize },
}

/// Raw body of a search response: either a bare array of records, or an
/// object such as `{ query, returned, items: [...] }`. Older deployments put
/// the list under `data` or `results` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
    List(Vec<Value>),
    Wrapped(Map<String, Value>),
}

impl TryFrom<Value> for SearchPayload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(records) => Ok(SearchPayload::List(records)),
            Value::Object(map) => Ok(SearchPayload::Wrapped(map)),
            Value::Null => Err(PayloadError::UnexpectedShape("null")),
            Value::Bool(_) => Err(PayloadError::UnexpectedShape("a boolean")),
            Value::Number(_) => Err(PayloadError::UnexpectedShape("a number")),
            Value::String(_) => Err(PayloadError::UnexpectedShape("a string")),
        }
    }
}

/// A normalized page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub images: Vec<SpaceImage>,
    /// Count reported by the service, or the number of records in the list
    /// when the service did not report one.
    pub returned: usize,
    /// Records in the list that could not be read and were left out.
    #[serde(default)]
    pub skipped: usize,
}

impl SearchPayload {
    pub fn from_json(value: Value) -> Result<Self, PayloadError> {
        Self::try_from(value)
    }

    /// Extracts the images. Unreadable records are skipped and counted; a
    /// non-empty list with no readable record at all is an error, so a broken
    /// response is never shown as "no results".
    pub fn normalize(self) -> Result<SearchPage, PayloadError> {
        match self {
            SearchPayload::List(records) => decode_records(records, None),
            SearchPayload::Wrapped(mut map) => {
                let returned = map
                    .get("returned")
                    .and_then(Value::as_u64)
                    .map(|count| count as usize);

                let list = LIST_KEYS.iter().find_map(|key| match map.remove(*key) {
                    None | Some(Value::Null) => None,
                    Some(value) => Some((*key, value)),
                });

                match list {
                    Some((_, Value::Array(records))) => decode_records(records, returned),
                    Some((key, _)) => Err(PayloadError::ListNotArray { key }),
                    None => Ok(SearchPage {
                        returned: returned.unwrap_or(0),
                        ..SearchPage::default()
                    }),
                }
            }
        }
    }
}

impl TryFrom<SearchPayload> for SearchPage {
    type Error = PayloadError;

    fn try_from(payload: SearchPayload) -> Result<Self, Self::Error> {
        payload.normalize()
    }
}

fn decode_records(records: Vec<Value>, returned: Option<usize>) -> Result<SearchPage, PayloadError> {
    let count = records.len();
    let images: Vec<SpaceImage> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();

    if count > 0 && images.is_empty() {
        return Err(PayloadError::NoReadableRecords { count });
    }

    Ok(SearchPage {
        returned: returned.unwrap_or(count),
        skipped: count - images.len(),
        images,
    })
}
