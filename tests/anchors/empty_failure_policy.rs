use crate::anchor_utils::parse_all;
use crytic_converter::error::ConvertError;
use crytic_converter::pipeline::convert;
use crytic_converter::utils::config::ConverterConfig;

const NOISE: &str = "\
fuzzing (4242/50000) | cov: 1337
echidna_solvent: passing
echidna_accounting: passing
[PASSED] Assertion Test: CryticTester.deposit(uint256)
Unique instructions: 512
";

#[test]
fn test_passing_and_unparseable_lines_yield_no_records() {
    assert!(parse_all(NOISE).is_empty());
}

#[test]
fn test_empty_parse_surfaces_no_failures_found() {
    let err = convert("", NOISE, &ConverterConfig::default()).expect_err("nothing to emit");
    assert!(matches!(err, ConvertError::NoFailuresFound));
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn test_failure_with_unparseable_sequence_is_dropped() {
    let log = "\
echidna_broken: failed!💥
  Call sequence:
    this is not a call
echidna_ok: failed!💥
  Call sequence:
    CryticTester.f(1)
";
    let failed = parse_all(log);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].property, "echidna_ok");
}
