//! Echidna failure reports.
//!
//! ```text
//! echidna_solvent: failed!💥
//!   Call sequence:
//!     CryticTester.deposit(1,0x10000) from: 0x0000000000000000000000000000000000010000 Time delay: 5 seconds Block delay: 2
//!     *wait* Time delay: 100 seconds Block delay: 10
//!     CryticTester.withdraw(1)
//! echidna_other: passing
//! ```

use super::args::{parse_arguments, take_parenthesized};
use super::{normalize_sender, CallTiming, Dialect, FailedTest, ParsedCall};
use regex::Regex;
use std::sync::LazyLock;

static PROPERTY_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\w+):\s+(failed!|passing)").expect("echidna property status regex")
});

static CALL_SEQUENCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Call sequence:").expect("echidna call sequence regex"));

static CALL_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\w+\.)?(\w+)").expect("echidna call head regex")
});

// Clauses are accepted in this fixed order; each one is optional.
static CALL_CLAUSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:from:\s*(\S+))?\s*(?:Value:\s*\S+)?\s*(?:Time delay:\s*(\d+)(?:\s*seconds)?)?\s*(?:Block delay:\s*(\d+))?\s*$",
    )
    .expect("echidna call clauses regex")
});

static WAIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*\*wait\*\s*(?:Time delay:\s*(\d+)(?:\s*seconds)?)?\s*(?:Block delay:\s*(\d+))?\s*$",
    )
    .expect("echidna wait regex")
});

/// A call line before step numbering and wait folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCall {
    pub method: String,
    pub raw_args: String,
    pub sender: Option<String>,
    pub time_delay: u64,
    pub block_delay: u64,
}

fn capture_u64(caps: &regex::Captures<'_>, group: usize) -> Option<u64> {
    match caps.get(group) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    }
}

pub fn parse_call_line(line: &str) -> Option<RawCall> {
    let head = CALL_HEAD.captures(line)?;
    let method = head[1].to_string();
    let (raw_args, rest) = take_parenthesized(&line[head.get(0)?.end()..])?;
    let clauses = CALL_CLAUSES.captures(rest)?;

    Some(RawCall {
        method,
        raw_args: raw_args.to_string(),
        sender: clauses.get(1).map(|m| m.as_str().to_string()),
        time_delay: capture_u64(&clauses, 2)?,
        block_delay: capture_u64(&clauses, 3)?,
    })
}

/// `*wait*` lines advance the clock without a call: `(time_delay, block_delay)`.
pub fn parse_wait_line(line: &str) -> Option<(u64, u64)> {
    let caps = WAIT_LINE.captures(line)?;
    Some((capture_u64(&caps, 1)?, capture_u64(&caps, 2)?))
}

/// Turns the lines of one call sequence into numbered calls. Pending waits are
/// added to the delays of the call that follows them.
pub fn parse_call_sequence<'a, I>(lines: I, default_sender: &str) -> Vec<ParsedCall>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut calls = Vec::new();
    let (mut pending_time, mut pending_block) = (0u64, 0u64);

    for line in lines {
        if let Some((time, block)) = parse_wait_line(line) {
            pending_time = pending_time.saturating_add(time);
            pending_block = pending_block.saturating_add(block);
            continue;
        }
        let Some(raw) = parse_call_line(line) else {
            continue;
        };
        let sender = match raw.sender.as_deref() {
            Some(from) => normalize_sender(from),
            None => default_sender.to_string(),
        };
        calls.push(ParsedCall {
            step: calls.len() as u64 + 1,
            method: raw.method,
            args: parse_arguments(&raw.raw_args),
            timing: CallTiming::Incremental {
                block_delay: raw.block_delay.saturating_add(pending_block),
                time_delay: raw.time_delay.saturating_add(pending_time),
            },
            sender,
        });
        pending_time = 0;
        pending_block = 0;
    }
    calls
}

pub fn parse_failures(log: &str, default_sender: &str) -> Vec<FailedTest> {
    let lines = log.lines().collect::<Vec<_>>();
    let statuses = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            PROPERTY_STATUS
                .captures(line)
                .map(|caps| (idx, caps[1].to_string(), &caps[2] == "failed!"))
        })
        .collect::<Vec<_>>();

    let mut failed = Vec::new();
    for (pos, (start, property, is_failure)) in statuses.iter().enumerate() {
        if !is_failure {
            continue;
        }
        let end = statuses
            .get(pos + 1)
            .map(|(next, _, _)| *next)
            .unwrap_or(lines.len());
        let block = &lines[*start..end];

        let Some(header) = block
            .iter()
            .position(|line| CALL_SEQUENCE_HEADER.is_match(line))
        else {
            tracing::debug!("[PARSE] echidna property '{}' has no call sequence", property);
            continue;
        };

        let calls = parse_call_sequence(block[header + 1..].iter().copied(), default_sender);
        failed.extend(FailedTest::new(Dialect::Echidna, property.clone(), calls));
    }
    failed
}
