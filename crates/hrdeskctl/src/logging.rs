//! Logging for hrdeskctl
//!
//! Three separate outputs:
//! - diagnostics through `tracing`, always on stderr
//! - interaction records: `[<ts>] USER: ...` / `[<ts>] AGENT: ...` on stdout
//! - the interaction journal, one JSON object per exchange

use crate::demo::Exchange;
use hrdesk_common::Intent;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "HRDESK_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Local ISO 8601 timestamp with microseconds and no offset
pub fn iso_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Two lines sharing one timestamp
pub fn format_interaction(ts: &str, user_query: &str, agent_reply: &str) -> String {
    format!("[{ts}] USER: {user_query}\n[{ts}] AGENT: {agent_reply}")
}

/// Print a timestamped record of one exchange
pub fn log_interaction(
    out: &mut impl Write,
    user_query: &str,
    agent_reply: &str,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        format_interaction(&iso_timestamp(), user_query, agent_reply)
    )
}

/// Journal line for one routed exchange
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    /// RFC 3339 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    pub intent: Intent,
    pub query: String,
    pub reply: String,
}

impl JournalEntry {
    pub fn from_exchange(exchange: &Exchange) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339(),
            req_id: uuid::Uuid::new_v4().to_string(),
            intent: exchange.intent,
            query: exchange.query.clone(),
            reply: exchange.reply.clone(),
        }
    }

    /// Discover journal path with fallback chain
    ///
    /// Priority:
    /// 1. $HRDESK_LOG_FILE
    /// 2. $XDG_STATE_HOME/hrdesk/interactions.jsonl
    /// 3. ~/.local/state/hrdesk/interactions.jsonl
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("HRDESK_LOG_FILE") {
            return Some(PathBuf::from(path));
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(Path::new(&xdg_state).join("hrdesk/interactions.jsonl"));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(Path::new(&home).join(".local/state/hrdesk/interactions.jsonl"));
        }

        None
    }

    /// Append to the discovered journal, falling back to `fallback`
    pub fn write(&self, fallback: &mut impl Write) -> anyhow::Result<()> {
        self.write_at(Self::discover_path().as_deref(), fallback)
    }

    /// Append to `path`; write the line to `fallback` when there is no
    /// path or the file cannot be opened
    pub fn write_at(&self, path: Option<&Path>, fallback: &mut impl Write) -> anyhow::Result<()> {
        let json = serde_json::to_string(self)?;

        if let Some(path) = path {
            match Self::append_to(&json, path) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "journal not writable, using fallback");
                }
            }
        }

        writeln!(fallback, "{}", json)?;
        Ok(())
    }

    /// Append one JSON line, creating parent directories
    pub fn append_to(json: &str, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }
}

/// Where a journal line goes when the journal file is unusable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JournalFallback {
    /// The command's own output stream
    #[default]
    Output,
    /// stderr; keeps JSON output parseable
    Stderr,
}

/// Applies the enabled logging outputs to each exchange
#[derive(Debug, Clone, Copy, Default)]
pub struct Recorder {
    pub interactions: bool,
    pub journal: bool,
    pub journal_fallback: JournalFallback,
}

impl Recorder {
    pub fn record(&self, out: &mut impl Write, exchange: &Exchange) -> anyhow::Result<()> {
        if self.interactions {
            log_interaction(out, &exchange.query, &exchange.reply)?;
        }
        if self.journal {
            let entry = JournalEntry::from_exchange(exchange);
            match self.journal_fallback {
                JournalFallback::Output => entry.write(out)?,
                JournalFallback::Stderr => entry.write(&mut std::io::stderr())?,
            }
        }
        Ok(())
    }
}
