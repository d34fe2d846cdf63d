//! Medusa failure reports.
//!
//! ```text
//! ⇾ [FAILED] Assertion Test: CryticTester.deposit(uint256)
//! [Call Sequence]
//! 1) CryticTester.deposit(address,uint256)(0x1b8223, 5) (block=23898, time=406129, gas=12500000, gasprice=1, value=0, sender=0x10000)
//! [Execution Trace]
//! ```

use super::args::{parse_arguments, take_parenthesized};
use super::{normalize_sender, CallTiming, Dialect, FailedTest, ParsedCall};
use regex::Regex;
use std::sync::LazyLock;

const CALL_SEQUENCE_HEADER: &str = "[Call Sequence]";

static FAILURE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[FAILED\]\s+(?:Assertion|Property) Test:\s+(?:\w+\.)?(\w+)\(")
        .expect("medusa failure marker regex")
});

static CALL_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\)\s+\w+\.(\w+)").expect("medusa call head regex")
});

// Anything between `time=` and `sender=` (gas, gasprice, value, ...) is ignored.
static CALL_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(block=(\d+),\s*time=(\d+)\s*,.*?sender=([^)\s,]+)")
        .expect("medusa call tail regex")
});

pub fn has_failure_marker(log: &str) -> bool {
    FAILURE_MARKER.is_match(log)
}

/// Parses one call-sequence line. Lines that do not fit the grammar yield `None`.
pub fn parse_call_line(line: &str) -> Option<ParsedCall> {
    let head = CALL_HEAD.captures(line)?;
    let step = head[1].parse::<u64>().ok()?;
    let method = head[2].to_string();

    let after_head = &line[head.get(0)?.end()..];
    let (_param_types, after_types) = take_parenthesized(after_head)?;
    let (raw_args, after_args) = take_parenthesized(after_types)?;

    let tail = CALL_TAIL.captures(after_args)?;
    let block = tail[1].parse::<u64>().ok()?;
    let time = tail[2].parse::<u64>().ok()?;

    Some(ParsedCall {
        step,
        method,
        args: parse_arguments(raw_args),
        timing: CallTiming::Absolute { block, time },
        sender: normalize_sender(&tail[3]),
    })
}

/// Call lines found anywhere in `text`, ignoring failure markers.
pub fn parse_call_lines(text: &str) -> Vec<ParsedCall> {
    text.lines().filter_map(parse_call_line).collect()
}

pub fn parse_failures(log: &str) -> Vec<FailedTest> {
    let lines = log.lines().collect::<Vec<_>>();
    let markers = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            FAILURE_MARKER
                .captures(line)
                .map(|caps| (idx, caps[1].to_string()))
        })
        .collect::<Vec<_>>();

    let mut failed = Vec::new();
    for (pos, (start, method)) in markers.iter().enumerate() {
        let end = markers
            .get(pos + 1)
            .map(|(next, _)| *next)
            .unwrap_or(lines.len());
        let block = &lines[start + 1..end];

        let Some(header) = block
            .iter()
            .position(|line| line.contains(CALL_SEQUENCE_HEADER))
        else {
            tracing::debug!("[PARSE] medusa failure '{}' has no call sequence", method);
            continue;
        };

        let calls = block[header + 1..]
            .iter()
            .filter_map(|line| parse_call_line(line))
            .collect::<Vec<_>>();
        failed.extend(FailedTest::new(Dialect::Medusa, method.clone(), calls));
    }
    failed
}
