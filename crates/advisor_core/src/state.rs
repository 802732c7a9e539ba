use std::time::Duration;

use crate::msg::{FetchFailure, SimulationFailure};
use crate::view_model::{AppViewModel, RecommendationRow};

/// Interval between poll-tick fetches for the armed customer.
pub const POLL_PERIOD: Duration = Duration::from_secs(10);

/// One recommended product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecommendation {
    pub product_id: String,
    pub label: String,
}

/// A recommendation list and its explanation. Replaced wholesale on each
/// successful fetch so the two are never shown out of step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSet {
    pub products: Vec<ProductRecommendation>,
    pub explanation: String,
}

/// Poll scheduler state: either no timer, or a timer armed for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PollState {
    #[default]
    Idle,
    Active(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    customer_input: String,
    customer_ids: Vec<String>,
    poll: PollState,
    recommendations: Option<RecommendationSet>,
    fetch_error: Option<String>,
    simulation_error: Option<String>,
    fetching: bool,
    simulating: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First customer id from the input, if any. Drives fetch and poll.
    pub fn active_customer(&self) -> Option<&str> {
        self.customer_ids.first().map(String::as_str)
    }

    pub fn customer_ids(&self) -> &[String] {
        &self.customer_ids
    }

    pub fn poll(&self) -> &PollState {
        &self.poll
    }

    pub fn view(&self) -> AppViewModel {
        let (recommendations, explanation) = match &self.recommendations {
            Some(set) => (
                set.products
                    .iter()
                    .map(|product| RecommendationRow {
                        product_id: product.product_id.clone(),
                        label: product.label.clone(),
                    })
                    .collect(),
                Some(set.explanation.clone()),
            ),
            None => (Vec::new(), None),
        };

        AppViewModel {
            customer_input: self.customer_input.clone(),
            customer_ids: self.customer_ids.clone(),
            active_customer: self.active_customer().map(ToOwned::to_owned),
            recommendations,
            explanation,
            fetching: self.fetching,
            simulating: self.simulating,
            fetch_error: self.fetch_error.clone(),
            simulation_error: self.simulation_error.clone(),
            polling: matches!(self.poll, PollState::Active(_)),
        }
    }

    /// Returns the dirty flag and clears it; callers render when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_customer_input(&mut self, raw: String, ids: Vec<String>) {
        if self.customer_input != raw || self.customer_ids != ids {
            self.mark_dirty();
        }
        self.customer_input = raw;
        self.customer_ids = ids;
    }

    pub(crate) fn set_poll(&mut self, poll: PollState) {
        if self.poll != poll {
            self.poll = poll;
            self.mark_dirty();
        }
    }

    /// Start-of-attempt bookkeeping: loading on, own prior error cleared.
    pub(crate) fn begin_fetch(&mut self) {
        self.fetching = true;
        self.fetch_error = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_fetch_completed(
        &mut self,
        customer_id: &str,
        result: Result<RecommendationSet, FetchFailure>,
    ) {
        // Loading always clears, even for a stale response.
        self.fetching = false;
        self.mark_dirty();

        if self.active_customer() != Some(customer_id) {
            // Stale: the triggering customer is no longer active. Keep the view.
            return;
        }

        match result {
            Ok(set) => {
                self.recommendations = Some(set);
                self.fetch_error = None;
            }
            Err(failure) => {
                // A failed fetch never blanks a previously successful view.
                self.fetch_error = Some(failure.into_message());
            }
        }
    }

    pub(crate) fn begin_simulation(&mut self) {
        self.simulating = true;
        self.simulation_error = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_simulation_completed(&mut self, result: Result<(), SimulationFailure>) {
        self.simulating = false;
        self.mark_dirty();
        if let Err(failure) = result {
            self.simulation_error = Some(failure.into_message());
        }
    }
}

/// Split raw input on commas, trim each piece, and drop empty ones.
pub fn parse_customer_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
