//! Full dashboard page
//!
//! Layout: sidebar with the two threshold sliders, then the main column with
//! the pairing count, the card grid (or the empty-result warning) and the
//! Relationship Explorer chart.

use std::fmt::Write;

use crate::advisor::{Recommendations, Thresholds};

use super::cards::render_cards;
use super::chart::render_chart;
use super::escape::escape_html;
use super::style::STYLESHEET;

pub const TITLE: &str = "Retail Product Pair Advisor";
pub const SUBTITLE: &str = "Smart suggestions for product combinations";

/// Renders the dashboard for one set of recommendations
pub fn render_dashboard(recs: &Recommendations) -> String {
    let mut main = String::new();
    let _ = writeln!(main, "<h2>Showing {} Product Pairings</h2>", recs.len());

    match recs.warning() {
        Some(warning) => {
            let _ = writeln!(main, r#"<div class="warning">⚠️ {}</div>"#, escape_html(warning));
        }
        None => {
            main.push_str(&render_cards(recs.iter()));
            main.push_str("\n<h2>Relationship Explorer</h2>\n");
            main.push_str(&render_chart(&recs.rules));
        }
    }

    render_shell(&recs.thresholds, &main)
}

/// Renders the page with an error box in place of results
pub fn render_error(thresholds: &Thresholds, message: &str) -> String {
    let main = format!(
        r#"<div class="error">{}</div>"#,
        escape_html(message)
    );
    render_shell(thresholds, &main)
}

fn render_shell(thresholds: &Thresholds, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="layout">
<aside class="sidebar">
{sidebar}
</aside>
<main class="main">
<h1>{title}</h1>
<p>{subtitle}</p>
{main}
</main>
</div>
</body>
</html>
"#,
        title = TITLE,
        subtitle = SUBTITLE,
        style = STYLESHEET,
        sidebar = render_sidebar(thresholds),
        main = main,
    )
}

/// Slider form. Moving a slider updates its readout; releasing it
/// resubmits the form so the page re-renders with the new thresholds.
fn render_sidebar(thresholds: &Thresholds) -> String {
    format!(
        r#"<h2>Adjust Recommendations</h2>
<form method="get" action="/">
<label for="min_success">Minimum Probability (%): <output id="min_success_out">{success}</output>
<span class="help">Chance customers will buy both items together</span>
</label>
<input type="range" id="min_success" name="min_success" min="{s_lo}" max="{s_hi}" step="1" value="{success}"
    oninput="document.getElementById('min_success_out').value = this.value"
    onchange="this.form.submit()">
<label for="min_frequency">Minimum Frequency (%): <output id="min_frequency_out">{frequency:.2}%</output>
<span class="help">How often this combination appears in all transactions</span>
</label>
<input type="range" id="min_frequency" name="min_frequency" min="{f_lo:.1}" max="{f_hi:.1}" step="{f_step}" value="{frequency}"
    oninput="document.getElementById('min_frequency_out').value = Number(this.value).toFixed(2) + '%'"
    onchange="this.form.submit()">
<noscript><button type="submit">Apply</button></noscript>
</form>"#,
        success = thresholds.min_success,
        s_lo = Thresholds::MIN_SUCCESS_LOWER,
        s_hi = Thresholds::MIN_SUCCESS_UPPER,
        frequency = thresholds.min_frequency,
        f_lo = Thresholds::MIN_FREQUENCY_LOWER,
        f_hi = Thresholds::MIN_FREQUENCY_UPPER,
        f_step = Thresholds::MIN_FREQUENCY_STEP,
    )
}
