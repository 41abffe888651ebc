use serde::Deserialize;
use serde_json::Value;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    error: Option<ErrorText>,
    #[serde(default)]
    message: Option<ErrorText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ErrorText {
    Text(String),
    Detail {
        #[serde(alias = "Message")]
        message: String,
    },
    Other(Value),
}

impl ErrorText {
    fn into_message(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Detail { message } => Some(message),
            Self::Other(Value::Null) => None,
            Self::Other(value) => Some(value.to_string()),
        }
    }
}

/// Message to report for a non-2xx response.
///
/// Reads `error`, then `message`, from a JSON body; anything else yields
/// [`GENERIC_ERROR_MESSAGE`].
pub fn decode_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorJsonBody>(body)
        .ok()
        .and_then(|parsed| {
            parsed
                .error
                .and_then(ErrorText::into_message)
                .or_else(|| parsed.message.and_then(ErrorText::into_message))
        })
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}
