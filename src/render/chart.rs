//! Relationship Explorer scatter chart
//!
//! x = combination frequency, y = success rate, marker size and color =
//! lift. Rendered as inline SVG; each marker carries a `<title>` tooltip.

use std::fmt::Write;

use crate::rules::{MetricRange, Rule};

use super::escape::{escape_html, format_metric};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 440.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 120.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 56.0;

const MIN_RADIUS: f64 = 4.0;
const MAX_RADIUS: f64 = 16.0;
const TICK_TARGET: f64 = 5.0;

pub const X_LABEL: &str = "Frequency (%)";
pub const Y_LABEL: &str = "Success Rate (%)";
pub const LIFT_LABEL: &str = "Strength";

/// Sequential palette, low lift to high lift
const PALETTE: [(u8, u8, u8); 10] = [
    (0x0d, 0x08, 0x87),
    (0x46, 0x03, 0x9f),
    (0x72, 0x01, 0xa8),
    (0x9c, 0x17, 0x9e),
    (0xbd, 0x37, 0x86),
    (0xd8, 0x57, 0x6b),
    (0xed, 0x79, 0x53),
    (0xfb, 0x9f, 0x3a),
    (0xfd, 0xca, 0x26),
    (0xf0, 0xf9, 0x21),
];

/// Linear mapping from a data range onto a pixel range
#[derive(Debug, Clone, Copy)]
struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// One plotted rule
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: String,
    pub tooltip: String,
}

/// A laid-out scatter chart ready to serialise as SVG
#[derive(Debug, Clone)]
pub struct ScatterChart {
    points: Vec<ChartPoint>,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
    lift: MetricRange,
}

impl ScatterChart {
    /// Lays out the chart, or returns None when there is nothing to plot
    pub fn from_rules(rules: &[Rule]) -> Option<Self> {
        let x = MetricRange::of(rules.iter().map(Rule::combination_frequency))?;
        let y = MetricRange::of(rules.iter().map(Rule::success_rate))?;
        let lift = MetricRange::of(rules.iter().map(|r| r.lift))?;

        let x_domain = padded_domain(x);
        let y_domain = padded_domain(y);
        let x_scale = Scale {
            domain: x_domain,
            range: (MARGIN_LEFT, WIDTH - MARGIN_RIGHT),
        };
        let y_scale = Scale {
            domain: y_domain,
            range: (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP),
        };
        let radius_scale = Scale {
            domain: (lift.min, lift.max),
            range: (MIN_RADIUS, MAX_RADIUS),
        };

        let points = rules
            .iter()
            .map(|rule| ChartPoint {
                cx: x_scale.map(rule.combination_frequency()),
                cy: y_scale.map(rule.success_rate()),
                radius: radius_scale.map(rule.lift),
                color: lift_color(rule.lift, lift),
                tooltip: tooltip(rule),
            })
            .collect();

        Some(Self {
            points,
            x_domain,
            y_domain,
            lift,
        })
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Serialises the chart as a standalone `<svg>` element
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(4096 + self.points.len() * 256);
        let _ = write!(
            svg,
            r#"<svg class="scatter" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{y} vs {x}">"#,
            w = WIDTH,
            h = HEIGHT,
            x = X_LABEL,
            y = Y_LABEL,
        );

        self.write_axes(&mut svg);

        for p in &self.points {
            let _ = write!(
                svg,
                r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="0.8" stroke="#ffffff" stroke-width="0.8"><title>{}</title></circle>"##,
                p.cx,
                p.cy,
                p.radius,
                p.color,
                escape_html(&p.tooltip),
            );
        }

        self.write_legend(&mut svg);
        svg.push_str("</svg>");
        svg
    }

    fn write_axes(&self, svg: &mut String) {
        let plot_left = MARGIN_LEFT;
        let plot_right = WIDTH - MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = HEIGHT - MARGIN_BOTTOM;

        let x_scale = Scale {
            domain: self.x_domain,
            range: (plot_left, plot_right),
        };
        let y_scale = Scale {
            domain: self.y_domain,
            range: (plot_bottom, plot_top),
        };

        let _ = write!(
            svg,
            r##"<rect x="{l}" y="{t}" width="{w}" height="{h}" fill="#e5ecf6"/>"##,
            l = plot_left,
            t = plot_top,
            w = plot_right - plot_left,
            h = plot_bottom - plot_top,
        );

        for tick in ticks(self.x_domain) {
            let x = x_scale.map(tick);
            let _ = write!(
                svg,
                r##"<line x1="{x:.2}" y1="{t}" x2="{x:.2}" y2="{b}" stroke="#ffffff"/><text x="{x:.2}" y="{ty}" font-size="11" text-anchor="middle" fill="#444">{label}</text>"##,
                t = plot_top,
                b = plot_bottom,
                ty = plot_bottom + 16.0,
                label = tick_label(tick, self.x_domain),
            );
        }

        for tick in ticks(self.y_domain) {
            let y = y_scale.map(tick);
            let _ = write!(
                svg,
                r##"<line x1="{l}" y1="{y:.2}" x2="{r}" y2="{y:.2}" stroke="#ffffff"/><text x="{tx}" y="{ty:.2}" font-size="11" text-anchor="end" fill="#444">{label}</text>"##,
                l = plot_left,
                r = plot_right,
                tx = plot_left - 6.0,
                ty = y + 4.0,
                label = tick_label(tick, self.y_domain),
            );
        }

        let _ = write!(
            svg,
            r##"<text x="{cx}" y="{by}" font-size="13" text-anchor="middle" fill="#2a3f5f">{x}</text><text x="16" y="{cy}" font-size="13" text-anchor="middle" fill="#2a3f5f" transform="rotate(-90 16 {cy})">{y}</text>"##,
            cx = (plot_left + plot_right) / 2.0,
            by = HEIGHT - 12.0,
            cy = (plot_top + plot_bottom) / 2.0,
            x = X_LABEL,
            y = Y_LABEL,
        );
    }

    fn write_legend(&self, svg: &mut String) {
        let x = WIDTH - MARGIN_RIGHT + 28.0;
        let top = MARGIN_TOP + 22.0;
        let height = HEIGHT - MARGIN_BOTTOM - top;

        svg.push_str(r#"<defs><linearGradient id="lift-scale" x1="0" y1="1" x2="0" y2="0">"#);
        let last = (PALETTE.len() - 1) as f64;
        for (i, (r, g, b)) in PALETTE.iter().enumerate() {
            let _ = write!(
                svg,
                r##"<stop offset="{:.3}" stop-color="#{:02x}{:02x}{:02x}"/>"##,
                i as f64 / last,
                r,
                g,
                b
            );
        }
        svg.push_str("</linearGradient></defs>");

        let _ = write!(
            svg,
            r##"<text x="{x}" y="{ly}" font-size="12" fill="#2a3f5f">{label}</text><rect x="{x}" y="{top}" width="14" height="{height}" fill="url(#lift-scale)"/><text x="{tx}" y="{max_y}" font-size="11" fill="#444">{max}</text><text x="{tx}" y="{min_y}" font-size="11" fill="#444">{min}</text>"##,
            ly = top - 8.0,
            label = LIFT_LABEL,
            tx = x + 20.0,
            max_y = top + 10.0,
            min_y = top + height,
            max = format!("{:.2}", self.lift.max),
            min = format!("{:.2}", self.lift.min),
        );
    }
}

/// Data extent plus 8% padding, or a unit window around a single value
fn padded_domain(range: MetricRange) -> (f64, f64) {
    let span = range.span();
    if span == 0.0 {
        let pad = if range.min == 0.0 { 1.0 } else { range.min.abs() * 0.1 };
        return (range.min - pad, range.max + pad);
    }
    let pad = span * 0.08;
    (range.min - pad, range.max + pad)
}

/// Rounds a raw step to 1, 2 or 5 times a power of ten
fn nice_step(span: f64) -> f64 {
    let raw = span / TICK_TARGET;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual < 1.5 {
        1.0
    } else if residual < 3.5 {
        2.0
    } else if residual < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced tick values inside the domain
fn ticks(domain: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = domain;
    if hi <= lo {
        return vec![lo];
    }
    let step = nice_step(hi - lo);
    let first = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0.0;
    loop {
        let v = first + i * step;
        if v > hi + step * 1e-9 {
            break;
        }
        out.push(v);
        i += 1.0;
    }
    out
}

fn tick_label(value: f64, domain: (f64, f64)) -> String {
    let step = nice_step(domain.1 - domain.0);
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    // Avoid printing "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Interpolates the palette at the rule's position within the lift range
fn lift_color(lift: f64, range: MetricRange) -> String {
    let t = if range.span() == 0.0 {
        0.5
    } else {
        ((lift - range.min) / range.span()).clamp(0.0, 1.0)
    };

    let pos = t * (PALETTE.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(PALETTE.len() - 1);
    let frac = pos - lower as f64;

    let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
    let (r0, g0, b0) = PALETTE[lower];
    let (r1, g1, b1) = PALETTE[upper];
    format!("#{:02x}{:02x}{:02x}", lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

fn tooltip(rule: &Rule) -> String {
    format!(
        "{}\nconsequents={}\n{}={}\n{}={}\n{}={}",
        rule.antecedents,
        rule.consequents,
        Y_LABEL,
        format_metric(rule.success_rate()),
        X_LABEL,
        format_metric(rule.combination_frequency()),
        LIFT_LABEL,
        rule.lift,
    )
}

/// Renders the chart for the given rules, or an empty string if there are none
pub fn render_chart(rules: &[Rule]) -> String {
    ScatterChart::from_rules(rules)
        .map(|chart| chart.to_svg())
        .unwrap_or_default()
}
