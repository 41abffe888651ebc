//! Shared plumbing for flat, string-typed provider records.

use serde_json::{Map, Value};

/// Resolve the first wire key holding a non-null scalar value.
///
/// Keys are tried in order, so earlier keys take priority when several are present.
/// Strings are kept verbatim, numbers and booleans keep their JSON text, and
/// `null`, arrays and objects count as absent.
pub(crate) fn first_present(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(scalar_text)
}

/// Expand a nested collection the provider sends as one object, an array of
/// objects, or either of those wrapped in an `{"entry": ...}` object.
///
/// Absent and `null` values yield an empty list. Non-object array items are dropped.
pub(crate) fn nested_objects(value: Option<&Value>) -> Vec<&Map<String, Value>> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        Some(Value::Object(object)) => match object.get(ENTRY_KEY) {
            Some(inner) if object.len() == 1 => nested_objects(Some(inner)),
            _ => vec![object],
        },
        Some(_) => Vec::new(),
    }
}

const ENTRY_KEY: &str = "entry";

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `Y`/`N` flag column interpreted as a boolean. Anything other than `Y` is `false`.
pub(crate) fn flag(value: Option<&str>) -> bool {
    value == Some("Y")
}

/// Decimal column interpreted as `f64`, `0.0` when absent or unparseable.
pub(crate) fn decimal(value: Option<&str>) -> f64 {
    value
        .and_then(|text| text.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub(crate) fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_owned()
}

/// Declare a flat record of `Option<String>` attributes together with the ordered
/// wire keys each attribute is read from.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: [$($key:literal),+ $(,)?]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<String>,
            )*
        }

        impl $name {
            /// Attribute name and its wire keys, in lookup priority order.
            pub const WIRE_FIELDS: &'static [(&'static str, &'static [&'static str])] = &[
                $((stringify!($field), &[$($key),+]),)*
            ];

            /// Build a record from one JSON object of the provider response.
            ///
            /// Never fails: unknown keys are ignored and missing ones stay `None`.
            pub fn from_wire(object: &serde_json::Map<String, serde_json::Value>) -> Self {
                Self {
                    $($field: $crate::domain::record::first_present(object, &[$($key),+]),)*
                }
            }
        }
    };
}

pub(crate) use wire_record;
