use std::sync::mpsc;
use std::thread;

use advisor_api::{ApiError, ApiFailureKind, ClientEvent, ClientHandle, RecommendationReport};
use advisor_core::{
    Effect, FetchFailure, Msg, ProductRecommendation, RecommendationSet, SimulationFailure,
    POLL_PERIOD,
};
use advisor_logging::{advisor_info, advisor_warn};

use super::poll::PollTimer;

/// Executes effects from the pure core against the api runtime and the
/// owned poll timer, and pumps api events back into the message channel.
pub struct EffectRunner {
    client: ClientHandle,
    poll: PollTimer,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        client: ClientHandle,
        events: mpsc::Receiver<ClientEvent>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        spawn_event_loop(events, msg_tx.clone());
        Self {
            client,
            poll: PollTimer::new(),
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRecommendations { customer_id } => {
                    advisor_info!("fetching recommendations for {customer_id}");
                    self.client.fetch(customer_id);
                }
                Effect::ArmPoll { customer_id } => {
                    advisor_info!("arming poll for {customer_id}");
                    self.poll
                        .arm(customer_id, POLL_PERIOD, self.msg_tx.clone());
                }
                Effect::CancelPoll => {
                    self.poll.cancel();
                }
                Effect::StartSimulation { customers } => {
                    match &customers {
                        Some(list) => {
                            advisor_info!("starting usage simulation for {} customers", list.len())
                        }
                        None => advisor_info!("starting usage simulation for all customers"),
                    }
                    self.client.simulate(customers);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                ClientEvent::FetchCompleted {
                    customer_id,
                    result,
                } => Msg::FetchCompleted {
                    customer_id,
                    result: result.map(map_report).map_err(map_fetch_failure),
                },
                ClientEvent::SimulationCompleted { result } => Msg::SimulationCompleted {
                    result: result.map_err(map_simulation_failure),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn map_report(report: RecommendationReport) -> RecommendationSet {
    RecommendationSet {
        products: report
            .products
            .into_iter()
            .map(|(product_id, label)| ProductRecommendation { product_id, label })
            .collect(),
        explanation: report.explanation,
    }
}

fn map_fetch_failure(err: ApiError) -> FetchFailure {
    advisor_warn!("fetch failed: {err}");
    match err.kind {
        ApiFailureKind::NoBody => FetchFailure::NoData,
        ApiFailureKind::HttpStatus { detail, .. } => FetchFailure::Request { detail },
        ApiFailureKind::Timeout | ApiFailureKind::Network | ApiFailureKind::InvalidBody => {
            FetchFailure::Request { detail: None }
        }
    }
}

fn map_simulation_failure(err: ApiError) -> SimulationFailure {
    advisor_warn!("simulation start failed: {err}");
    match err.kind {
        ApiFailureKind::HttpStatus { detail, .. } => SimulationFailure { detail },
        _ => SimulationFailure { detail: None },
    }
}
