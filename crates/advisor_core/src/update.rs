use crate::state::parse_customer_ids;
use crate::{AppState, Effect, Msg, PollState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => {
            let ids = parse_customer_ids(&raw);
            let next_active = ids.first().cloned();
            state.set_customer_input(raw, ids);

            match (state.poll().clone(), next_active) {
                (PollState::Idle, None) => Vec::new(),
                // Edits that leave the first customer alone keep the timer.
                (PollState::Active(armed), Some(next)) if armed == next => Vec::new(),
                (PollState::Idle, Some(next)) => {
                    state.begin_fetch();
                    state.set_poll(PollState::Active(next.clone()));
                    vec![
                        Effect::FetchRecommendations {
                            customer_id: next.clone(),
                        },
                        Effect::ArmPoll { customer_id: next },
                    ]
                }
                (PollState::Active(_), Some(next)) => {
                    state.begin_fetch();
                    state.set_poll(PollState::Active(next.clone()));
                    vec![
                        Effect::CancelPoll,
                        Effect::FetchRecommendations {
                            customer_id: next.clone(),
                        },
                        Effect::ArmPoll { customer_id: next },
                    ]
                }
                (PollState::Active(_), None) => {
                    state.set_poll(PollState::Idle);
                    vec![Effect::CancelPoll]
                }
            }
        }
        Msg::FetchRequested => match state.active_customer() {
            Some(customer_id) => {
                let customer_id = customer_id.to_owned();
                state.begin_fetch();
                vec![Effect::FetchRecommendations { customer_id }]
            }
            None => Vec::new(),
        },
        Msg::PollTick { customer_id } => {
            // A tick can race a cancellation; only the armed customer fetches.
            if state.poll() == &PollState::Active(customer_id.clone()) {
                state.begin_fetch();
                vec![Effect::FetchRecommendations { customer_id }]
            } else {
                Vec::new()
            }
        }
        Msg::FetchCompleted {
            customer_id,
            result,
        } => {
            state.apply_fetch_completed(&customer_id, result);
            Vec::new()
        }
        Msg::SimulateRequested => {
            state.begin_simulation();
            let ids = state.customer_ids();
            let customers = if ids.is_empty() {
                None
            } else {
                Some(ids.to_vec())
            };
            vec![Effect::StartSimulation { customers }]
        }
        Msg::SimulationCompleted { result } => {
            state.apply_simulation_completed(result);
            Vec::new()
        }
        Msg::Shutdown => {
            if matches!(state.poll(), PollState::Active(_)) {
                state.set_poll(PollState::Idle);
                vec![Effect::CancelPoll]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
