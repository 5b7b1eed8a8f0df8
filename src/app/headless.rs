//! Headless mode: analyze once and print a report, no TUI

use crate::analysis::{Analysis, ApiResponse};
use crate::config::Settings;
use crate::ui::{AnalysisJob, AnalysisMode, BLANK_CODE_MESSAGE};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Source file; `None` or `-` reads stdin
    pub input: Option<PathBuf>,
    pub json: bool,
    pub live: bool,
}

impl HeadlessOptions {
    fn reads_stdin(&self) -> bool {
        self.input
            .as_deref()
            .map_or(true, |p| p == Path::new("-"))
    }
}

/// Analyze once and print the report. Returns whether the analysis succeeded.
pub async fn run_headless(settings: &Settings, options: &HeadlessOptions) -> Result<bool> {
    if options.live && options.reads_stdin() {
        anyhow::bail!("--live needs a FILE argument; stdin is used for the API key prompt");
    }

    let code = read_code(options)?;
    if code.trim().is_empty() {
        anyhow::bail!(BLANK_CODE_MESSAGE);
    }

    let mode = if options.live {
        let api_key = prompt_api_key()?;
        AnalysisMode::Live(settings.llm_config(&api_key))
    } else {
        AnalysisMode::Mock {
            delay: settings.mock_delay(),
        }
    };

    let result = AnalysisJob { code, mode }.run().await;
    let success = result.is_success();

    let output = if options.json {
        serde_json::to_string_pretty(&result)?
    } else {
        format_report(&result)
    };
    println!("{}", output);

    Ok(success)
}

fn read_code(options: &HeadlessOptions) -> Result<String> {
    match &options.input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read code from stdin")?;
            Ok(code)
        }
    }
}

/// Ask for the credential on the terminal. Never read from the environment.
fn prompt_api_key() -> Result<String> {
    eprint!("  OpenAI API key: ");
    io::stderr().flush()?;

    let mut key = String::new();
    io::stdin()
        .lock()
        .read_line(&mut key)
        .context("Failed to read API key")?;
    let key = key.trim().to_string();

    if key.is_empty() {
        anyhow::bail!("No API key provided");
    }
    Ok(key)
}

/// Plain-text rendering of a result, in tab order
pub fn format_report(result: &ApiResponse<Analysis>) -> String {
    let mut out = String::new();
    let stamped = result.timestamp().to_rfc3339();
    match result {
        ApiResponse::Failure { error, .. } => {
            let _ = writeln!(out, "Analysis failed [{}] at {}", error.code, stamped);
            let _ = writeln!(out, "  {}", error.message);
        }
        ApiResponse::Success { data, .. } => {
            let _ = writeln!(
                out,
                "Analysis {} at {}: {} finding(s)",
                data.id,
                stamped,
                data.total_findings()
            );
            if data.is_empty() {
                let _ = writeln!(out, "  Nothing to flag.");
            }

            let _ = writeln!(out, "\nSuggestions ({})", data.suggestions.len());
            if data.suggestions.is_empty() {
                let _ = writeln!(out, "  No suggestions found. Your code looks good!");
            }
            for s in &data.suggestions {
                let line = s.line.map(|l| format!(" line {}", l)).unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  [{}] {}{}: {}",
                    s.severity.label(),
                    s.kind.label(),
                    line,
                    s.message
                );
                if let Some(alternative) = &s.modern_alternative {
                    let _ = writeln!(out, "      {}", alternative);
                }
            }

            let _ = writeln!(out, "\nType Issues ({})", data.type_issues.len());
            if data.type_issues.is_empty() {
                let _ = writeln!(out, "  No type issues detected!");
            }
            for issue in &data.type_issues {
                let _ = writeln!(out, "  line {}: {}", issue.line, issue.message);
                let _ = writeln!(out, "      Solution: {}", issue.solution);
            }

            let _ = writeln!(out, "\nModern Patterns ({})", data.modern_patterns.len());
            if data.modern_patterns.is_empty() {
                let _ = writeln!(out, "  No modern patterns suggested at this time");
            }
            for pattern in &data.modern_patterns {
                let _ = writeln!(out, "  {}: {}", pattern.name, pattern.description);
                let _ = writeln!(out, "      {}", pattern.example);
                for benefit in &pattern.benefits {
                    let _ = writeln!(out, "      - {}", benefit);
                }
            }
        }
    }
    out.trim_end().to_string()
}
