//! Recommendation cards

use std::fmt::Write;

use crate::rules::Rule;

use super::escape::{escape_html, format_metric};

/// Renders one card for a rule
pub fn render_card(rule: &Rule) -> String {
    format!(
        r#"<div class="card">
    <div class="antecedent">🛒 Customers buying: {antecedents}</div>
    <div class="consequent">➕ Likely to add: {consequents}</div>
    <div class="metrics">
        <div class="success-rate">🎯 {success}% Success</div>
        <div class="frequency">📊 {frequency}% Frequency</div>
    </div>
</div>"#,
        antecedents = escape_html(&rule.antecedents.to_string()),
        consequents = escape_html(&rule.consequents.to_string()),
        success = format_metric(rule.success_rate()),
        frequency = format_metric(rule.combination_frequency()),
    )
}

/// Renders the card grid, one card per rule in the given order
pub fn render_cards<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> String {
    let mut html = String::from("<div class=\"grid-container\">\n");
    for rule in rules {
        // Writing to a String cannot fail
        let _ = writeln!(html, "{}", render_card(rule));
    }
    html.push_str("</div>");
    html
}
