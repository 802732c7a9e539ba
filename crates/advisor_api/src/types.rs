use std::fmt;

use thiserror::Error;

/// Payload of a successful recommendation fetch, wire-shaped: products come
/// back as `(product_id, label)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationReport {
    pub customer_id: Option<String>,
    pub products: Vec<(String, String)>,
    pub explanation: String,
}

/// Completion events emitted by the api runtime, one per issued command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    FetchCompleted {
        customer_id: String,
        result: Result<RecommendationReport, ApiError>,
    },
    SimulationCompleted {
        result: Result<(), ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiFailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailureKind {
    /// Success status but an entirely absent or null body.
    NoBody,
    /// Non-success status; `detail` is the backend's error message when the
    /// body carried one.
    HttpStatus { status: u16, detail: Option<String> },
    Timeout,
    Network,
    /// Body present but not decodable as the expected shape.
    InvalidBody,
}

impl fmt::Display for ApiFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailureKind::NoBody => write!(f, "no body"),
            ApiFailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            ApiFailureKind::Timeout => write!(f, "timeout"),
            ApiFailureKind::Network => write!(f, "network error"),
            ApiFailureKind::InvalidBody => write!(f, "invalid body"),
        }
    }
}
