//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Status-code variants map one-to-one onto the HTTP responses the API
/// documents. Resource modules narrow `NotFound` and `UnprocessableEntity`
/// into resource-specific variants; [`Error::is_not_found`] and
/// [`Error::is_conflict`] treat both forms alike.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a status code (DNS, connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint URL given to the client could not be used as a base URL.
    #[error("Invalid endpoint URL `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    /// A relative path resolved outside the configured endpoint.
    #[error("Invalid request path `{0}`")]
    InvalidPath(String),
    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// A success response carried a body that does not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("Header missing (HTTP 400)")]
    HeaderMissing,
    #[error("Authentication error with CloudHealth (HTTP 401)")]
    Authentication,
    #[error("Access forbidden by CloudHealth (HTTP 403)")]
    Forbidden,
    #[error("Resource not found (HTTP 404)")]
    NotFound,
    #[error("Unprocessable entity (HTTP 422), check whether a resource with the same name already exists")]
    UnprocessableEntity,
    #[error("Too many requests (HTTP 429)")]
    TooManyRequests,
    #[error("Unknown response from CloudHealth: `{status}`")]
    UnknownResponse { status: u16 },
    /// A client-side precondition failed before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("AWS account {id} not found")]
    AwsAccountNotFound { id: i64 },
    #[error("Bad request, check whether an AWS account named `{name}` already exists")]
    AwsAccountExists { name: String },
    #[error("Customer {id} not found")]
    CustomerNotFound { id: i64 },
    #[error("Bad request, check whether a customer named `{name}` already exists")]
    CustomerExists { name: String },
}

impl Error {
    /// HTTP status code behind this error, if it came from a classified response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HeaderMissing => Some(400),
            Self::Authentication => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound | Self::AwsAccountNotFound { .. } | Self::CustomerNotFound { .. } => {
                Some(404)
            }
            Self::UnprocessableEntity
            | Self::AwsAccountExists { .. }
            | Self::CustomerExists { .. } => Some(422),
            Self::TooManyRequests => Some(429),
            Self::UnknownResponse { status } => Some(*status),
            _ => None,
        }
    }

    /// True for the generic and every resource-specific not-found variant.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for the generic and every resource-specific 422 variant.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(422)
    }

    pub(crate) fn remap_not_found(self, specific: impl FnOnce() -> Error) -> Error {
        match self {
            Self::NotFound => specific(),
            other => other,
        }
    }

    pub(crate) fn remap_conflict(self, specific: impl FnOnce() -> Error) -> Error {
        match self {
            Self::UnprocessableEntity => specific(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_covers_specific_variants() {
        assert_eq!(Error::AwsAccountNotFound { id: 1 }.status(), Some(404));
        assert_eq!(Error::CustomerExists { name: "x".into() }.status(), Some(422));
        assert_eq!(Error::UnknownResponse { status: 418 }.status(), Some(418));
        assert_eq!(Error::Validation("measures".into()).status(), None);
    }

    #[test]
    fn remap_keeps_failure_class() {
        let err = Error::NotFound.remap_not_found(|| Error::CustomerNotFound { id: 7 });
        assert!(matches!(err, Error::CustomerNotFound { id: 7 }));
        assert!(err.is_not_found());

        let err = Error::UnprocessableEntity.remap_conflict(|| Error::AwsAccountExists {
            name: "prod".into(),
        });
        assert!(err.is_conflict());
        assert!(err.to_string().contains("prod"));
    }

    #[test]
    fn remap_leaves_other_errors_alone() {
        let err = Error::Forbidden.remap_not_found(|| Error::CustomerNotFound { id: 7 });
        assert!(matches!(err, Error::Forbidden));

        let err = Error::NotFound.remap_conflict(|| Error::CustomerExists { name: "a".into() });
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn forbidden_and_authentication_differ() {
        assert_ne!(Error::Forbidden.to_string(), Error::Authentication.to_string());
        assert_ne!(Error::Forbidden.status(), Error::Authentication.status());
    }
}
