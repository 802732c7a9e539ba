#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one recommendation request for `customer_id`.
    FetchRecommendations { customer_id: String },
    /// Arm the recurring poll timer for `customer_id`. The runner must
    /// cancel any previous timer before starting the new one.
    ArmPoll { customer_id: String },
    /// Cancel the live poll timer, if any.
    CancelPoll,
    /// Start a usage simulation; `None` means all customers.
    StartSimulation { customers: Option<Vec<String>> },
}
