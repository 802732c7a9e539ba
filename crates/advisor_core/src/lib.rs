//! Advisor core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FetchFailure, Msg, SimulationFailure};
pub use state::{
    parse_customer_ids, AppState, PollState, ProductRecommendation, RecommendationSet, POLL_PERIOD,
};
pub use update::update;
pub use view_model::{AppViewModel, RecommendationRow};
