//! Error values returned in response bodies.

use serde::ser::{Serialize, Serializer};

/// Error carried by a 400 or 500 response.
///
/// Compared by kind, field and message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("{field} is required")]
    MissingParam { field: String },
    #[error("{field} is not valid")]
    InvalidParam { field: String },
    #[error("Internal server error")]
    Internal,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam {
            field: field.into(),
        }
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam {
            field: field.into(),
        }
    }

    /// Kind discriminator, as written in serialized bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "MissingParamError",
            Self::InvalidParam { .. } => "InvalidParamError",
            Self::Internal => "InternalServerError",
        }
    }

    /// Offending field, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => {
                Some(field.as_str())
            },
            Self::Internal => None,
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    message: String,
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ErrorBody {
            error: self.kind(),
            field: self.field(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}
