//! pair-advisor - Retail Product Pair Advisor
//!
//! Loads precomputed association rules, filters them by two thresholds and
//! serves the surviving product pairings as a browser dashboard.

pub mod advisor;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod render;
pub mod rules;
