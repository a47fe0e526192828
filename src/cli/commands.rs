//! CLI command implementations
//!
//! Every command follows the same startup order:
//! 1. Resolve configuration (file, then flags)
//! 2. Load and validate the rule file (fatal on failure)
//! 3. Serve, or answer once and exit

use std::path::Path;

use serde_json::{json, Value};

use crate::advisor::{Advisor, RecommendationsView, Thresholds};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, LogSink, Logger};
use crate::rules::{RuleLoader, RuleSet};

use super::args::{Command, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
///
/// One-shot commands print a single JSON envelope on stdout, so their log
/// lines all go to stderr.
pub fn run_command(cmd: Command) -> CliResult<()> {
    if !matches!(cmd, Command::Serve { .. }) {
        Logger::set_sink(LogSink::Stderr);
    }

    match cmd {
        Command::Serve { source, host, port } => serve(&source, host, port),
        Command::Recommend {
            source,
            min_success,
            min_frequency,
        } => one_shot(recommend(&source, min_success, min_frequency)),
        Command::Check { source } => one_shot(check(&source)),
    }
}

/// Print the result of a one-shot command in the JSON envelope
fn one_shot(result: CliResult<Value>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), &e.to_string())?;
            Err(e)
        }
    }
}

/// Load the rule file, logging the outcome
pub fn load_rules(path: &Path) -> CliResult<RuleSet> {
    let path_str = path.display().to_string();

    match RuleLoader::new(path).load() {
        Ok(rules) => {
            log_event_with_fields(
                Event::RulesLoaded,
                &[("path", &path_str), ("count", &rules.len().to_string())],
            );
            Ok(rules)
        }
        Err(e) => {
            log_event_with_fields(
                Event::RulesLoadFailed,
                &[
                    ("path", &path_str),
                    ("code", e.code().code()),
                    ("error", e.message()),
                ],
            );
            Err(e.into())
        }
    }
}

fn boot(source: &SourceArgs) -> CliResult<(Config, Advisor)> {
    log_event(Event::BootStart);

    let config = Config::resolve(source)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_path", &config.data_path.display().to_string())],
    );

    let rules = load_rules(&config.data_path)?;
    Ok((config, Advisor::new(rules)))
}

/// Serve the dashboard until the process is stopped
pub fn serve(source: &SourceArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let (config, advisor) = boot(source)?;
    let defaults = config.default_thresholds()?;
    let config = config.with_listener(host, port);

    let server = HttpServer::with_config(config.http, advisor, defaults);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            log_event_with_fields(Event::ServerFailed, &[("error", &e.to_string())]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// Filter and sort once, returning the same payload as `/api/recommendations`
pub fn recommend(
    source: &SourceArgs,
    min_success: Option<u32>,
    min_frequency: Option<f64>,
) -> CliResult<Value> {
    let (config, advisor) = boot(source)?;
    let defaults = config.default_thresholds()?;

    let thresholds = Thresholds::new(
        min_success.unwrap_or(defaults.min_success),
        min_frequency.unwrap_or(defaults.min_frequency),
    )?;

    let recommendations = advisor.recommend(thresholds);
    if recommendations.is_empty() {
        log_event_with_fields(
            Event::RecommendationsEmpty,
            &[
                ("min_success", &thresholds.min_success.to_string()),
                ("min_frequency", &thresholds.min_frequency.to_string()),
            ],
        );
    }

    let view = RecommendationsView::from(&recommendations);
    Ok(serde_json::to_value(&view)?)
}

/// Validate the rule file and summarize it
pub fn check(source: &SourceArgs) -> CliResult<Value> {
    let (config, advisor) = boot(source)?;
    let summary = advisor.rules().summary();

    Ok(json!({
        "data_path": config.data_path.display().to_string(),
        "summary": summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const RULES_CSV: &str = "\
antecedents,consequents,support,confidence,lift
\"frozenset({'milk'})\",\"frozenset({'bread'})\",0.045,0.62,1.8
\"frozenset({'eggs'})\",\"frozenset({'bacon'})\",0.012,0.35,1.2
\"frozenset({'tea'})\",\"frozenset({'biscuits'})\",0.030,0.81,2.4
";

    fn write_rules(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("associationRules.csv");
        fs::write(&path, RULES_CSV).unwrap();
        path
    }

    fn source_for(data: PathBuf) -> SourceArgs {
        SourceArgs {
            config: None,
            data: Some(data),
        }
    }

    #[test]
    fn test_recommend_defaults() {
        let dir = TempDir::new().unwrap();
        let source = source_for(write_rules(&dir));

        let data = recommend(&source, None, None).unwrap();
        assert_eq!(data["count"], 2);
        assert_eq!(data["scanned_count"], 3);
        assert_eq!(data["rules"][0]["success_rate"], 81.0);
        assert_eq!(data["rules"][1]["success_rate"], 62.0);
        assert!(data["warning"].is_null());
    }

    #[test]
    fn test_recommend_strict_thresholds_empty() {
        let dir = TempDir::new().unwrap();
        let source = source_for(write_rules(&dir));

        let data = recommend(&source, Some(100), None).unwrap();
        assert_eq!(data["count"], 0);
        assert!(data["warning"]
            .as_str()
            .unwrap()
            .starts_with("No recommendations meet current criteria"));
    }

    #[test]
    fn test_recommend_rejects_out_of_range() {
        let dir = TempDir::new().unwrap();
        let source = source_for(write_rules(&dir));

        let err = recommend(&source, None, Some(9.0)).unwrap_err();
        assert_eq!(err.code_str(), "PAIR_THRESHOLD_INVALID");
    }

    #[test]
    fn test_recommend_uses_config_defaults() {
        let dir = TempDir::new().unwrap();
        let data_path = write_rules(&dir);
        let config_path = dir.path().join("advisor.json");
        let config = json!({
            "data_path": data_path.to_string_lossy(),
            "default_min_success": 70,
        });
        fs::write(&config_path, config.to_string()).unwrap();

        let source = SourceArgs {
            config: Some(config_path),
            data: None,
        };
        let data = recommend(&source, None, None).unwrap();
        assert_eq!(data["count"], 1);
        assert_eq!(data["thresholds"]["min_success"], 70);
    }

    #[test]
    fn test_check_summary() {
        let dir = TempDir::new().unwrap();
        let source = source_for(write_rules(&dir));

        let data = check(&source).unwrap();
        assert_eq!(data["summary"]["rule_count"], 3);
        assert_eq!(data["summary"]["success_rate"]["min"], 35.0);
        assert_eq!(data["summary"]["success_rate"]["max"], 81.0);
    }

    #[test]
    fn test_missing_rule_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let source = source_for(dir.path().join("absent.csv"));

        let err = check(&source).unwrap_err();
        assert_eq!(err.code_str(), "PAIR_DATA_NOT_FOUND");
        assert!(err.to_string().starts_with("[FATAL]"));
    }

    #[test]
    fn test_malformed_rule_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "antecedents,consequents,support\nmilk,bread,0.1\n").unwrap();

        let err = check(&source_for(path)).unwrap_err();
        assert_eq!(err.code_str(), "PAIR_DATA_MALFORMED");
    }

    #[test]
    fn test_serve_fails_before_binding_without_rules() {
        let dir = TempDir::new().unwrap();
        let source = source_for(dir.path().join("absent.csv"));

        let err = serve(&source, None, Some(0)).unwrap_err();
        assert_eq!(err.code_str(), "PAIR_DATA_NOT_FOUND");
    }
}
