use serde::Serialize;
use serde::ser::SerializeStruct;
use serde_json::{Map, Value};

/// Normalized result of a GeezSMS call.
///
/// Successful responses carry the decoded JSON with any `data` envelope removed.
/// Network-level failures are reported as [`ApiResponse::Failed`] instead of an error.
///
/// Serializes to the same shape as [`ApiResponse::into_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Data(Value),
    Failed(RequestFailure),
}

/// A call that never produced a usable response (connection error, timeout, garbled body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
    pub error_details: String,
}

impl RequestFailure {
    pub const MESSAGE: &'static str = "request failed";

    pub fn new(error_details: impl Into<String>) -> Self {
        Self {
            message: Self::MESSAGE.to_owned(),
            error_details: error_details.into(),
        }
    }
}

impl Serialize for RequestFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("RequestFailure", 3)?;
        state.serialize_field("status", &false)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("error_details", &self.error_details)?;
        state.end()
    }
}

impl ApiResponse {
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Data(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Look up a top-level key of the response data.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data().and_then(|value| value.get(key))
    }

    /// Flatten into the untyped mapping shape.
    ///
    /// Failures become `{"status": false, "message": "request failed", "error_details": ...}`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Data(value) => value,
            Self::Failed(failure) => {
                let mut map = Map::new();
                map.insert("status".to_owned(), Value::Bool(false));
                map.insert("message".to_owned(), Value::String(failure.message));
                map.insert(
                    "error_details".to_owned(),
                    Value::String(failure.error_details),
                );
                Value::Object(map)
            }
        }
    }
}
