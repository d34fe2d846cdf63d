use crate::anchor_utils::{echidna_report, medusa_report};
use crytic_converter::parser::{parse_failed_tests, Dialect, DialectSelection};

fn mixed_log() -> String {
    let mut log = medusa_report(
        "deposit",
        &["1) CryticTester.deposit(uint256)(1) (block=1, time=1, sender=0x10000)"],
    );
    // Medusa console noise that happens to look like an Echidna status line.
    log.push_str(&echidna_report("oracle_check", &["ping(1)"]));
    log
}

#[test]
fn test_auto_runs_only_medusa_when_marker_present() {
    let failed = parse_failed_tests(&mixed_log(), DialectSelection::Auto, "USER1");
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].dialect, Dialect::Medusa);
}

#[test]
fn test_both_reports_medusa_records_before_echidna() {
    let failed = parse_failed_tests(&mixed_log(), DialectSelection::Both, "USER1");
    let dialects = failed.iter().map(|f| f.dialect).collect::<Vec<_>>();
    assert_eq!(dialects, vec![Dialect::Medusa, Dialect::Echidna]);
}

#[test]
fn test_forced_echidna_ignores_medusa_blocks() {
    let failed = parse_failed_tests(&mixed_log(), DialectSelection::Echidna, "USER1");
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].property, "oracle_check");
}
