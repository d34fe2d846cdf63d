//! Fuzzer log parsing.
//!
//! Two independent grammars run over the same log text: Medusa reports carry
//! absolute block/time per call, Echidna reports carry per-call delays. Each
//! grammar produces `FailedTest` records tagged with its dialect; the grammars
//! share nothing but the argument tokenizer in [`args`].

pub mod args;
pub mod echidna;
pub mod medusa;

use serde::Serialize;

pub use args::CallArgument;

/// Placeholder sender for Echidna calls printed without a `from:` clause.
pub const DEFAULT_SYMBOLIC_SENDER: &str = "USER1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    Medusa,
    Echidna,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Medusa => "medusa",
            Self::Echidna => "echidna",
        }
    }
}

/// Which grammars to run over a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectSelection {
    /// Medusa only when a Medusa failure marker is present, Echidna otherwise.
    Auto,
    Medusa,
    Echidna,
    /// Both grammars unconditionally, Medusa records first.
    Both,
}

impl DialectSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Medusa => "medusa",
            Self::Echidna => "echidna",
            Self::Both => "both",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "medusa" => Some(Self::Medusa),
            "echidna" => Some(Self::Echidna),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    fn runs(self, log: &str) -> (bool, bool) {
        match self {
            Self::Auto => {
                let medusa = medusa::has_failure_marker(log);
                (medusa, !medusa)
            }
            Self::Medusa => (true, false),
            Self::Echidna => (false, true),
            Self::Both => (true, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CallTiming {
    /// Cumulative simulation clock as reported by Medusa.
    Absolute { block: u64, time: u64 },
    /// Advancement since the previous call as reported by Echidna.
    Incremental { block_delay: u64, time_delay: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCall {
    pub step: u64,
    pub method: String,
    pub args: Vec<CallArgument>,
    pub timing: CallTiming,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedTest {
    pub dialect: Dialect,
    pub property: String,
    pub calls: Vec<ParsedCall>,
}

impl FailedTest {
    /// Builds a record, ordering calls by step. Returns `None` for an empty
    /// call list so unparsable sequences never reach the emitter.
    pub fn new(dialect: Dialect, property: String, mut calls: Vec<ParsedCall>) -> Option<Self> {
        if calls.is_empty() {
            tracing::debug!(
                "[PARSE] dropping {} failure '{}' with no parseable calls",
                dialect.as_str(),
                property
            );
            return None;
        }
        calls.sort_by_key(|call| call.step);
        Some(Self {
            dialect,
            property,
            calls,
        })
    }
}

/// Extracts every failure report from `log`, in discovery order per dialect.
pub fn parse_failed_tests(
    log: &str,
    selection: DialectSelection,
    default_sender: &str,
) -> Vec<FailedTest> {
    let (run_medusa, run_echidna) = selection.runs(log);
    let mut failed = Vec::new();
    if run_medusa {
        failed.extend(medusa::parse_failures(log));
    }
    if run_echidna {
        failed.extend(echidna::parse_failures(log, default_sender));
    }
    tracing::info!(
        "[PARSE] dialects={} medusa={} echidna={} failures={}",
        selection.as_str(),
        run_medusa,
        run_echidna,
        failed.len()
    );
    failed
}

/// Normalizes a sender token, keeping it verbatim when it is not an address.
pub(crate) fn normalize_sender(raw: &str) -> String {
    if !raw.starts_with("0x") {
        return raw.to_string();
    }
    crate::utils::hex::to_checksum_address(raw).unwrap_or_else(|err| {
        tracing::debug!("[PARSE] keeping sender verbatim: {err}");
        raw.to_string()
    })
}
