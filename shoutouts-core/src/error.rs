use crate::contract::ApiError;

/// Errors that abort a shoutout run. There is no partial-success variant.
#[derive(Debug, thiserror::Error)]
pub enum ShoutoutError {
    /// A required configuration field is missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Fetching team members, team repositories, or an explicit user failed.
    #[error("failed to resolve {what}: {source}")]
    Resolution {
        what: String,
        #[source]
        source: ApiError,
    },

    /// Fetching pull requests for one repository failed.
    #[error("failed to fetch pull requests for {repository}: {source}")]
    Aggregation {
        repository: String,
        #[source]
        source: ApiError,
    },
}

impl ShoutoutError {
    pub fn resolution(what: impl Into<String>, source: ApiError) -> Self {
        Self::Resolution {
            what: what.into(),
            source,
        }
    }

    pub fn aggregation(repository: impl Into<String>, source: ApiError) -> Self {
        Self::Aggregation {
            repository: repository.into(),
            source,
        }
    }
}
