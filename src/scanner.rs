use regex::Regex;
use std::sync::LazyLock;

pub const TEST_FUNCTION_PREFIX: &str = "test_CryticToFoundry_";

static TEST_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"function\s+{}(\d+)\s*\(\s*\)",
        regex::escape(TEST_FUNCTION_PREFIX)
    ))
    .expect("test function regex")
});

/// Highest `test_CryticToFoundry_<N>` number declared in `source`, or 0.
///
/// Generated tests are appended by hand, so declaration order says nothing about
/// numbering; every match is considered.
pub fn last_test_number(source: &str) -> u64 {
    let last = TEST_FUNCTION
        .captures_iter(source)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    tracing::debug!("[SCAN] last generated test number: {last}");
    last
}
