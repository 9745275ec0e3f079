use std::fmt;

use crate::wire::JobPayload;

pub type Generation = u64;

/// Parameters forwarded to the start-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub query: String,
    pub exclude_keywords: String,
    pub exclude_titles: String,
    pub results_wanted: u32,
}

/// Human-readable status returned by the start and health endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReply {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReply {
    /// Service has no data yet, or reports an error condition.
    Message(String),
    Jobs(Vec<JobPayload>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchStarted {
        result: Result<StatusReply, ServiceError>,
    },
    ResultsFetched {
        generation: Generation,
        result: Result<FetchReply, ServiceError>,
    },
    HealthChecked {
        result: Result<StatusReply, ServiceError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not the JSON shape the endpoint promises.
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
