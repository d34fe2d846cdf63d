//! Foundry test rendering.
//!
//! Medusa records re-assert the absolute clock with `_setUp2(time, block, sender)`;
//! Echidna records advance it with `_setUp(sender, N seconds, M)`. A setup line is
//! only written when the actor changes or the clock moves.

use crate::error::{ConvertError, Result};
use crate::parser::{CallTiming, FailedTest, ParsedCall};
use crate::scanner::TEST_FUNCTION_PREFIX;
use serde::Serialize;
use std::fmt::Write as _;
use std::ops::RangeInclusive;

const INDENT: &str = "    ";

/// Setup-suppression state for one record. Never shared across records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupState {
    pub last_sender: Option<String>,
    pub last_time: u64,
    pub last_block: u64,
}

impl SetupState {
    /// Folds one call into the state, returning the next state and the setup
    /// statement to emit before the call (if any).
    pub fn advance(self, call: &ParsedCall) -> (Self, Option<String>) {
        let sender_changed = self.last_sender.as_deref() != Some(call.sender.as_str());
        match call.timing {
            CallTiming::Absolute { block, time } => {
                let clock_moved = time != self.last_time || block != self.last_block;
                if !sender_changed && !clock_moved {
                    return (self, None);
                }
                let line = format!("_setUp2({time}, {block}, {});", call.sender);
                (
                    Self {
                        last_sender: Some(call.sender.clone()),
                        last_time: time,
                        last_block: block,
                    },
                    Some(line),
                )
            }
            CallTiming::Incremental {
                block_delay,
                time_delay,
            } => {
                if !sender_changed && time_delay == 0 && block_delay == 0 {
                    return (self, None);
                }
                let line = format!(
                    "_setUp({}, {time_delay} seconds, {block_delay});",
                    call.sender
                );
                (
                    Self {
                        last_sender: Some(call.sender.clone()),
                        ..self
                    },
                    Some(line),
                )
            }
        }
    }
}

pub fn render_call(call: &ParsedCall) -> String {
    let args = call
        .args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({args});", call.method)
}

/// Body statements for one record, setup lines interleaved before their calls.
pub fn render_statements(test: &FailedTest) -> Vec<String> {
    let (_, lines) = test.calls.iter().fold(
        (SetupState::default(), Vec::with_capacity(test.calls.len() * 2)),
        |(state, mut lines), call| {
            let (next, setup) = state.advance(call);
            lines.extend(setup);
            lines.push(render_call(call));
            (next, lines)
        },
    );
    lines
}

pub fn test_function_name(suffix: &str) -> String {
    format!("{TEST_FUNCTION_PREFIX}{suffix}")
}

/// Renders one test function. `suffix` is the zero-padded number (or `XX`).
pub fn render_test(suffix: &str, test: &FailedTest) -> String {
    let mut code = String::new();
    let _ = writeln!(
        code,
        "{INDENT}function {}() public {{",
        test_function_name(suffix)
    );
    for statement in render_statements(test) {
        let _ = writeln!(code, "{INDENT}{INDENT}{statement}");
    }
    let _ = writeln!(code, "{INDENT}}}");
    code
}

pub fn format_test_number(number: u64) -> String {
    format!("{number:02}")
}

/// Numbers for `count` tests appended after `last_test_number`.
pub fn test_numbers(last_test_number: u64, count: usize) -> Result<RangeInclusive<u64>> {
    if count == 0 {
        return Ok(1..=0);
    }
    let end = u64::try_from(count)
        .ok()
        .and_then(|count| last_test_number.checked_add(count))
        .ok_or(ConvertError::TestNumberOverflow {
            last: last_test_number,
            count,
        })?;
    Ok(last_test_number + 1..=end)
}

/// Renders every record, numbered from `last_test_number + 1`, separated by a
/// blank line and trimmed as a whole.
pub fn render_tests(last_test_number: u64, tests: &[FailedTest]) -> Result<String> {
    let mut output = String::new();
    for (number, test) in test_numbers(last_test_number, tests.len())?.zip(tests) {
        output.push_str(&render_test(&format_test_number(number), test));
        output.push('\n');
    }
    tracing::info!(
        "[EMIT] rendered {} tests starting after #{}",
        tests.len(),
        last_test_number
    );
    Ok(output.trim().to_string())
}

#[derive(Debug, Serialize)]
pub struct NumberedFailure<'a> {
    pub test_name: String,
    #[serde(flatten)]
    pub failure: &'a FailedTest,
}

/// JSON report of the parsed records and the names they would be emitted under.
pub fn render_json_report(last_test_number: u64, tests: &[FailedTest]) -> Result<String> {
    let numbered = test_numbers(last_test_number, tests.len())?
        .zip(tests)
        .map(|(number, failure)| NumberedFailure {
            test_name: test_function_name(&format_test_number(number)),
            failure,
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&numbered)?)
}
