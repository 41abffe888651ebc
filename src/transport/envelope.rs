use serde_json::{Map, Value};

use crate::domain::Paginated;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,
}

/// Records live in a `value` array at the top level of every response.
pub const VALUE_KEY: &str = "value";

/// Key under which an endpoint reports its continuation link.
///
/// The provider is not consistent about it, so each paginated endpoint names its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLinkKey {
    /// `nextLink`
    Camel,
    /// `next_link`
    Snake,
}

impl NextLinkKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "nextLink",
            Self::Snake => "next_link",
        }
    }
}

pub(crate) fn parse_body(json: &str) -> Result<Map<String, Value>, TransportError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(body) => Ok(body),
        _ => Err(TransportError::NotAnObject),
    }
}

/// Objects of the `value` array. A missing or non-array `value` yields nothing, and
/// non-object elements are skipped.
pub(crate) fn value_objects(body: &Map<String, Value>) -> Vec<&Map<String, Value>> {
    match body.get(VALUE_KEY) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn decode_records<T>(
    json: &str,
    build: impl Fn(&Map<String, Value>) -> T,
) -> Result<Vec<T>, TransportError> {
    let body = parse_body(json)?;
    Ok(value_objects(&body).into_iter().map(build).collect())
}

/// Decode one page. Without a `value` key the continuation link is dropped too.
pub(crate) fn decode_page<T>(
    json: &str,
    next_link: NextLinkKey,
    build: impl Fn(&Map<String, Value>) -> T,
) -> Result<Paginated<T>, TransportError> {
    let body = parse_body(json)?;
    if !body.contains_key(VALUE_KEY) {
        return Ok(Paginated::empty());
    }

    Ok(Paginated {
        values: value_objects(&body).into_iter().map(build).collect(),
        next_link: body
            .get(next_link.as_str())
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}
