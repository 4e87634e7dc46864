//! Query response envelopes
//!
//! The query service answers with `{ query, output, html_output?, data? }`.
//! Only `query` and the report text matter here; `data` is consulted for a
//! structured play event, which wins over re-parsing the report.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::event::PlayEvent;
use crate::extract::{is_longest_play_query, strip_markup, NarrativeExtractor};

/// Keys under `data` that may carry a structured event.
const STRUCTURED_EVENT_KEYS: &[&str] = &["play_event", "playEvent", "longest_play"];

/// Failures while obtaining an envelope.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input given: pass --envelope FILE, or --query TEXT with --report FILE")]
    Missing,
    #[error("failed to read {}: {source}", display_path(.path))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid envelope {}: {source}", display_path(.path))]
    InvalidEnvelope {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Where the command line said the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A full JSON envelope
    Envelope(PathBuf),
    /// A query plus a plain-text report
    Report { query: String, report: PathBuf },
}

impl InputSource {
    pub fn load(&self) -> Result<QueryEnvelope, InputError> {
        match self {
            InputSource::Envelope(path) => QueryEnvelope::load(path),
            InputSource::Report { query, report } => {
                let text = read_input(report)?;
                Ok(QueryEnvelope::from_report(query.as_str(), text))
            }
        }
    }
}

/// Response from the upstream query service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryEnvelope {
    pub query: String,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_longest_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

fn default_success() -> bool {
    true
}

/// Where the resolved event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// Deserialized from the envelope's `data`
    Structured,
    /// Reconstructed from the report text
    Narrative,
}

impl QueryEnvelope {
    /// Build an envelope from a query and a plain report.
    pub fn from_report(query: impl Into<String>, report: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            success: true,
            output: report.into(),
            ..Self::default()
        }
    }

    /// Load an envelope from a JSON file, or stdin when the path is `-`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = read_input(path)?;
        Self::parse_str(&content).map_err(|source| InputError::InvalidEnvelope {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The report as text: `output`, or the stripped markup when `output`
    /// is blank.
    pub fn report_text(&self) -> String {
        if !self.output.trim().is_empty() {
            return self.output.clone();
        }
        match &self.html_output {
            Some(html) => strip_markup(html),
            None => String::new(),
        }
    }

    /// Structured event carried in `data`, if any.
    pub fn structured_event(&self) -> Option<PlayEvent> {
        let data = self.data.as_ref()?;
        STRUCTURED_EVENT_KEYS.iter().find_map(|key| {
            let value = data.get(key)?;
            match PlayEvent::deserialize(value) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(key, error = %e, "ignoring malformed structured play event");
                    None
                }
            }
        })
    }

    /// Whether this result is a longest-play answer.
    ///
    /// An explicit `is_longest_play` from the service wins; otherwise the
    /// query must pass the extractor's longest-play gate.
    pub fn is_longest_play(&self) -> bool {
        self.is_longest_play
            .unwrap_or_else(|| is_longest_play_query(&self.query))
    }

    /// Resolve the event to animate, preferring the structured field.
    ///
    /// Results that are not longest-play answers never resolve, whatever
    /// `data` carries.
    pub fn resolve_event(&self, extractor: &NarrativeExtractor) -> Option<(PlayEvent, EventSource)> {
        if !self.success {
            debug!("envelope reports failure; nothing to animate");
            return None;
        }
        if !self.is_longest_play() {
            debug!(query = %self.query, "not a longest-play result; nothing to animate");
            return None;
        }
        if let Some(event) = self.structured_event() {
            debug!("using structured play event from envelope data");
            return Some((event, EventSource::Structured));
        }
        extractor
            .extract(&self.query, &self.report_text())
            .map(|event| (event, EventSource::Narrative))
    }
}

/// Read a whole file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    let unreadable = |source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map_err(unreadable)?;
        return Ok(content);
    }
    fs::read_to_string(path).map_err(unreadable)
}
