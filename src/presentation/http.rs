//! Transport-agnostic request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Account;
use crate::presentation::error::HttpError;

/// Incoming request. Only `body` is read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a new [`HttpRequest`] carrying `body`.
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }

    /// Returns the field value if it is a non-empty string.
    ///
    /// Missing keys, `null`, empty strings and non-string values all count
    /// as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body
            .as_ref()?
            .get(name)?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}

/// Outgoing result with a status code and a body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

/// Either the created account or an error value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(HttpError),
}
