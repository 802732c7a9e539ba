//! Advisor api: backend HTTP contract and command/event runtime.
mod api;
mod handle;
mod types;

pub use api::{
    ApiSettings, HttpRecommendationApi, RecommendationApi, API_KEY_HEADER, SIMULATION_EVENT_COUNT,
    SIMULATION_EVENT_DELAY_SECS,
};
pub use handle::ClientHandle;
pub use types::{ApiError, ApiFailureKind, ClientEvent, RecommendationReport};
