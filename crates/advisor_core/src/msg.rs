use crate::RecommendationSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the customer-id input box.
    InputChanged(String),
    /// User asked for an immediate fetch of the active customer.
    FetchRequested,
    /// Recurring timer fired for the customer it was armed with.
    PollTick { customer_id: String },
    /// Backend fetch resolved for `customer_id`.
    FetchCompleted {
        customer_id: String,
        result: Result<RecommendationSet, FetchFailure>,
    },
    /// User asked to start a usage simulation.
    SimulateRequested,
    /// Simulation start resolved.
    SimulationCompleted { result: Result<(), SimulationFailure> },
    /// Application is shutting down; release the poll timer.
    Shutdown,
}

/// Why a recommendation fetch failed, as far as the core cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The backend answered with an entirely absent or null body.
    NoData,
    /// Transport failure or error status; `detail` is the backend's
    /// message when it sent one.
    Request { detail: Option<String> },
}

impl FetchFailure {
    /// Human-readable message shown next to the fetch controls.
    pub fn into_message(self) -> String {
        match self {
            FetchFailure::NoData => "no data received".to_string(),
            FetchFailure::Request { detail: Some(detail) } => detail,
            FetchFailure::Request { detail: None } => "error fetching recommendations".to_string(),
        }
    }
}

/// Why a simulation start failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationFailure {
    pub detail: Option<String>,
}

impl SimulationFailure {
    /// Human-readable message shown next to the simulate control.
    pub fn into_message(self) -> String {
        self.detail
            .unwrap_or_else(|| "error starting simulation".to_string())
    }
}
