#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub customer_input: String,
    pub customer_ids: Vec<String>,
    pub active_customer: Option<String>,
    pub recommendations: Vec<RecommendationRow>,
    pub explanation: Option<String>,
    pub fetching: bool,
    pub simulating: bool,
    pub fetch_error: Option<String>,
    pub simulation_error: Option<String>,
    pub polling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    pub product_id: String,
    pub label: String,
}
