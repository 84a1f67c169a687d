// WHY: concurrent search over independent inputs for the CLI and benchmarks
// Texts are immutable, so each input is searched on tokio's blocking pool with no coordination

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::palindrome::{longest_palindrome, LetterRange};
use crate::prose::Text;

/// Configuration for batch searching
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Abort the batch when any input fails to parse
    pub fail_fast: bool,
}

/// One raw text plus a label for reporting (file path or `<inline>`)
#[derive(Debug, Clone)]
pub struct InputText {
    pub source: String,
    pub content: String,
}

impl InputText {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}

/// Per-input search outcome
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PalindromeReport {
    /// Input label
    pub source: String,
    /// Number of sentences parsed
    pub sentence_count: usize,
    /// Number of letters in the letter-index space
    pub letter_count: usize,
    /// Letter bounds of the longest palindrome
    pub range: Option<LetterRange>,
    /// Longest palindrome rendered with original formatting
    pub palindrome: Option<String>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (success, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl PalindromeReport {
    /// Report for an input that never reached the engine (e.g. unreadable file)
    pub fn failed(source: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            sentence_count: 0,
            letter_count: 0,
            range: None,
            palindrome: None,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Console line in the `Longest palindrome: '...'` format
    pub fn display_line(&self) -> String {
        match (&self.palindrome, &self.error) {
            (Some(palindrome), None) => format!("Longest palindrome: '{palindrome}'"),
            (_, Some(error)) => format!("Execution failed for {}. {}", self.source, error),
            (None, None) => format!("No palindrome found in {}", self.source),
        }
    }
}

/// Parse one input and search it synchronously
pub fn search_input(input: &InputText) -> PalindromeReport {
    let start_time = Instant::now();

    match Text::parse(&input.content) {
        Ok(text) => {
            let found = longest_palindrome(&text);
            PalindromeReport {
                source: input.source.clone(),
                sentence_count: text.sentences().len(),
                letter_count: text.letter_count(),
                range: Some(found.range),
                palindrome: Some(found.text.to_string()),
                processing_time_ms: start_time.elapsed().as_millis() as u64,
                status: "success".to_string(),
                error: None,
            }
        }
        Err(e) => {
            warn!("Invalid input {}: {}", input.source, e);
            PalindromeReport {
                processing_time_ms: start_time.elapsed().as_millis() as u64,
                ..PalindromeReport::failed(input.source.clone(), e.to_string())
            }
        }
    }
}

/// Search every input concurrently, returning reports in input order
pub async fn process_inputs_parallel(
    inputs: Vec<InputText>,
    config: &BatchConfig,
) -> Result<Vec<PalindromeReport>> {
    info!("Starting palindrome search over {} inputs", inputs.len());

    let handles = inputs
        .into_iter()
        .map(|input| tokio::task::spawn_blocking(move || search_input(&input)));
    let joined = futures::future::join_all(handles).await;

    let mut reports = Vec::with_capacity(joined.len());
    for result in joined {
        let report = result?;
        if config.fail_fast {
            if let Some(ref error) = report.error {
                anyhow::bail!("Failed to process {}: {}", report.source, error);
            }
        }
        reports.push(report);
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    info!(
        "Completed palindrome search: {} successful, {} failed",
        reports.len() - failed,
        failed
    );
    Ok(reports)
}

/// Write all reports as pretty JSON
pub async fn write_stats_file(stats_path: &Path, reports: &[PalindromeReport]) -> Result<()> {
    let content = serde_json::to_string_pretty(reports)?;

    if let Some(parent) = stats_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(stats_path, content).await?;
    info!("Wrote stats for {} inputs to {}", reports.len(), stats_path.display());
    Ok(())
}
