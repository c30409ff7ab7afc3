use thiserror::Error;

/// The network stage a remote failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Geocode,
    Weather,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Geocode => "geocode",
            Stage::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can stop a lookup. Each value is terminal for the current
/// run; none of them is fatal to the process, and nothing retries.
#[derive(Debug, Error)]
pub enum LookupError {
    /// One or more required fields were blank; carries the blank fields'
    /// placeholder labels in field order.
    #[error("required fields are missing: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The endpoint answered with a non-success status.
    #[error("{stage} request failed with status {status}")]
    RemoteService { stage: Stage, status: String },

    /// The request never completed: DNS, timeout, connection reset, or an
    /// unreadable body.
    #[error("{stage} request could not be completed")]
    Network {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    /// The geocode endpoint returned an empty result set.
    #[error("no locations matched the query")]
    NoResults,

    /// The API key was missing or empty at startup.
    #[error("weather lookups are not configured: {0}")]
    Configuration(String),
}

impl LookupError {
    pub(crate) fn transport(stage: Stage, source: reqwest::Error) -> Self {
        LookupError::Network { stage, source }
    }

    pub(crate) fn bad_status(stage: Stage, status: reqwest::StatusCode) -> Self {
        LookupError::RemoteService { stage, status: status.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_labels_in_order() {
        let err = LookupError::Validation(vec!["City".to_string(), "Country".to_string()]);
        assert_eq!(err.to_string(), "required fields are missing: City, Country");
    }

    #[test]
    fn remote_service_error_carries_stage_and_status() {
        let err = LookupError::RemoteService {
            stage: Stage::Weather,
            status: "502 Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "weather request failed with status 502 Bad Gateway");
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Geocode.as_str(), "geocode");
        assert_eq!(Stage::Weather.to_string(), "weather");
    }
}
