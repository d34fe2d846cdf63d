//! Scanner + parser + emitter, wired together over in-memory text.

use crate::emitter::{render_json_report, render_test, render_tests};
use crate::error::{ConvertError, Result};
use crate::parser::{medusa, parse_failed_tests, Dialect, FailedTest};
use crate::scanner::last_test_number;
use crate::utils::config::{ConverterConfig, OutputFormat};

const SEQUENCE_PROPERTY: &str = "call_sequence";
/// Left for the user to renumber when pasting.
const SEQUENCE_TEST_SUFFIX: &str = "XX";

#[derive(Debug)]
pub struct Conversion {
    pub last_test_number: u64,
    pub failures: Vec<FailedTest>,
    pub output: String,
}

/// Converts a fuzzer log into tests numbered after those already in `existing_tests`.
pub fn convert(existing_tests: &str, log: &str, config: &ConverterConfig) -> Result<Conversion> {
    let last = last_test_number(existing_tests);
    let failures = parse_failed_tests(log, config.dialect, &config.default_sender);
    if failures.is_empty() {
        return Err(ConvertError::NoFailuresFound);
    }

    let output = match config.output_format {
        OutputFormat::Solidity => render_tests(last, &failures)?,
        OutputFormat::Json => render_json_report(last, &failures)?,
    };
    Ok(Conversion {
        last_test_number: last,
        failures,
        output,
    })
}

/// Renders every Medusa call line in `text` as one placeholder-numbered test,
/// for call sequences copied out of a report without their failure header.
pub fn convert_sequence(text: &str) -> Result<String> {
    let calls = medusa::parse_call_lines(text);
    let test = FailedTest::new(Dialect::Medusa, SEQUENCE_PROPERTY.to_string(), calls)
        .ok_or(ConvertError::NoFailuresFound)?;
    tracing::info!("[EMIT] rendered call sequence with {} calls", test.calls.len());
    Ok(render_test(SEQUENCE_TEST_SUFFIX, &test).trim_end().to_string())
}
