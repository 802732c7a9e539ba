use advisor_core::{
    update, AppState, Effect, FetchFailure, Msg, ProductRecommendation, RecommendationSet,
};

fn sample_set() -> RecommendationSet {
    RecommendationSet {
        products: vec![ProductRecommendation {
            product_id: "p1".to_string(),
            label: "Savings Plan".to_string(),
        }],
        explanation: "matches spending pattern".to_string(),
    }
}

fn with_active(customer_id: &str) -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::InputChanged(customer_id.to_string()));
    state
}

fn complete(state: AppState, customer_id: &str, result: Result<RecommendationSet, FetchFailure>) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            customer_id: customer_id.to_string(),
            result,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn successful_fetch_replaces_result_and_explanation_together() {
    let state = with_active("cust001");

    let state = complete(state, "cust001", Ok(sample_set()));
    let view = state.view();

    assert_eq!(view.recommendations.len(), 1);
    assert_eq!(view.recommendations[0].product_id, "p1");
    assert_eq!(view.recommendations[0].label, "Savings Plan");
    assert_eq!(view.explanation.as_deref(), Some("matches spending pattern"));
    assert!(!view.fetching);
    assert_eq!(view.fetch_error, None);
}

#[test]
fn empty_product_list_still_replaces_the_previous_result() {
    let state = with_active("cust001");
    let state = complete(state, "cust001", Ok(sample_set()));

    let (state, _effects) = update(state, Msg::FetchRequested);
    let replacement = RecommendationSet {
        products: Vec::new(),
        explanation: "no recent activity".to_string(),
    };
    let state = complete(state, "cust001", Ok(replacement));
    let view = state.view();

    assert!(view.recommendations.is_empty());
    assert_eq!(view.explanation.as_deref(), Some("no recent activity"));
}

#[test]
fn failed_fetch_keeps_the_previous_result() {
    let state = with_active("cust001");
    let state = complete(state, "cust001", Ok(sample_set()));

    let (state, _effects) = update(state, Msg::FetchRequested);
    let state = complete(
        state,
        "cust001",
        Err(FetchFailure::Request {
            detail: Some("customer not found".to_string()),
        }),
    );
    let view = state.view();

    assert_eq!(view.fetch_error.as_deref(), Some("customer not found"));
    assert_eq!(view.recommendations.len(), 1);
    assert_eq!(view.explanation.as_deref(), Some("matches spending pattern"));
    assert!(!view.fetching);
}

#[test]
fn failure_without_detail_gets_the_generic_message() {
    let state = with_active("cust001");

    let state = complete(state, "cust001", Err(FetchFailure::Request { detail: None }));

    assert_eq!(
        state.view().fetch_error.as_deref(),
        Some("error fetching recommendations")
    );
}

#[test]
fn missing_body_reports_no_data_received() {
    let state = with_active("cust001");
    let state = complete(state, "cust001", Ok(sample_set()));

    let (state, _effects) = update(state, Msg::FetchRequested);
    let state = complete(state, "cust001", Err(FetchFailure::NoData));
    let view = state.view();

    assert_eq!(view.fetch_error.as_deref(), Some("no data received"));
    assert_eq!(view.recommendations.len(), 1);
}

#[test]
fn stale_completion_is_dropped_but_clears_loading() {
    let state = with_active("cust001");
    let (state, _effects) = update(state, Msg::InputChanged("cust002".to_string()));

    let state = complete(state, "cust001", Ok(sample_set()));
    let view = state.view();

    assert!(view.recommendations.is_empty());
    assert_eq!(view.explanation, None);
    assert_eq!(view.fetch_error, None);
    assert!(!view.fetching);
}

#[test]
fn stale_failure_does_not_surface_an_error() {
    let state = with_active("cust001");
    let (state, _effects) = update(state, Msg::InputChanged("cust002".to_string()));

    let state = complete(
        state,
        "cust001",
        Err(FetchFailure::Request {
            detail: Some("customer not found".to_string()),
        }),
    );

    assert_eq!(state.view().fetch_error, None);
}

#[test]
fn a_new_attempt_clears_the_previous_fetch_error() {
    let state = with_active("cust001");
    let state = complete(state, "cust001", Err(FetchFailure::Request { detail: None }));
    assert!(state.view().fetch_error.is_some());

    let (state, effects) = update(state, Msg::FetchRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchRecommendations {
            customer_id: "cust001".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.fetch_error, None);
    assert!(view.fetching);
}

#[test]
fn manual_fetch_without_an_active_customer_is_a_noop() {
    let (state, effects) = update(AppState::new(), Msg::FetchRequested);

    assert!(effects.is_empty());
    assert!(!state.view().fetching);
}
