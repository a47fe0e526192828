//! HTML rendering for the dashboard
//!
//! Pure functions from recommendations to markup. Every item name is
//! escaped before it reaches the page.

mod cards;
mod chart;
mod escape;
mod page;
mod style;

pub use cards::{render_card, render_cards};
pub use chart::{render_chart, ChartPoint, ScatterChart, LIFT_LABEL, X_LABEL, Y_LABEL};
pub use escape::{escape_html, format_metric};
pub use page::{render_dashboard, render_error, SUBTITLE, TITLE};
pub use style::STYLESHEET;
