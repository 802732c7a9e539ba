//! Terminal front-end: line parsing and view rendering.

use std::fmt::Write;

use advisor_core::AppViewModel;

/// One user action read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// The line replaces the customer-id input.
    InputChanged(String),
    /// Immediate fetch for the active customer.
    Fetch,
    /// Start a usage simulation.
    Simulate,
    Quit,
}

pub fn parse_line(line: &str) -> ConsoleCommand {
    match line.trim() {
        "/quit" | "/q" => ConsoleCommand::Quit,
        "/fetch" => ConsoleCommand::Fetch,
        "/sim" => ConsoleCommand::Simulate,
        _ => ConsoleCommand::InputChanged(line.to_string()),
    }
}

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    match &view.active_customer {
        Some(customer) => {
            let suffix = if view.fetching { " (fetching...)" } else { "" };
            let _ = writeln!(out, "Active customer: {customer}{suffix}");
        }
        None => {
            let _ = writeln!(out, "No active customer. Type comma-separated customer ids.");
        }
    }

    if !view.recommendations.is_empty() || view.explanation.is_some() {
        let _ = writeln!(out, "Recommendations:");
        for row in &view.recommendations {
            let _ = writeln!(out, "  Product ID: {} - {}", row.product_id, row.label);
        }
        if let Some(explanation) = &view.explanation {
            let _ = writeln!(out, "Explanation: {explanation}");
        }
    }

    if let Some(error) = &view.fetch_error {
        let _ = writeln!(out, "Fetch error: {error}");
    }
    if view.simulating {
        let _ = writeln!(out, "Simulation starting...");
    }
    if let Some(error) = &view.simulation_error {
        let _ = writeln!(out, "Simulation error: {error}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::RecommendationRow;

    #[test]
    fn slash_commands_parse() {
        assert_eq!(parse_line(" /quit "), ConsoleCommand::Quit);
        assert_eq!(parse_line("/fetch"), ConsoleCommand::Fetch);
        assert_eq!(parse_line("/sim"), ConsoleCommand::Simulate);
        assert_eq!(
            parse_line("cust001, cust002"),
            ConsoleCommand::InputChanged("cust001, cust002".to_string())
        );
    }

    #[test]
    fn render_shows_products_and_explanation_together() {
        let view = AppViewModel {
            active_customer: Some("cust001".to_string()),
            recommendations: vec![RecommendationRow {
                product_id: "p1".to_string(),
                label: "Savings Plan".to_string(),
            }],
            explanation: Some("matches spending pattern".to_string()),
            ..AppViewModel::default()
        };

        let out = render(&view);
        assert!(out.contains("Product ID: p1 - Savings Plan"));
        assert!(out.contains("Explanation: matches spending pattern"));
    }

    #[test]
    fn render_keeps_stale_view_next_to_fetch_error() {
        let view = AppViewModel {
            active_customer: Some("cust001".to_string()),
            recommendations: vec![RecommendationRow {
                product_id: "p1".to_string(),
                label: "Savings Plan".to_string(),
            }],
            explanation: Some("matches spending pattern".to_string()),
            fetch_error: Some("customer not found".to_string()),
            ..AppViewModel::default()
        };

        let out = render(&view);
        assert!(out.contains("Product ID: p1 - Savings Plan"));
        assert!(out.contains("Fetch error: customer not found"));
    }
}
