use crate::anchor_utils::{echidna_report, parse_all};
use crytic_converter::emitter::render_statements;

#[test]
fn test_same_sender_without_delay_suppresses_setup() {
    let log = echidna_report(
        "echidna_solvent",
        &[
            "CryticTester.deposit(1) from: 0x10000",
            "CryticTester.deposit(2) from: 0x10000",
            "CryticTester.withdraw(3) from: 0x10000 Time delay: 10 seconds",
        ],
    );
    let failed = parse_all(&log);
    assert_eq!(failed.len(), 1);

    let statements = render_statements(&failed[0]);
    let sender = "0x0000000000000000000000000000000000010000";
    assert_eq!(
        statements,
        vec![
            format!("_setUp({sender}, 0 seconds, 0);"),
            "deposit(1);".to_string(),
            "deposit(2);".to_string(),
            format!("_setUp({sender}, 10 seconds, 0);"),
            "withdraw(3);".to_string(),
        ]
    );
}

#[test]
fn test_sender_change_forces_setup_without_delay() {
    let log = echidna_report(
        "echidna_solvent",
        &["f() from: 0x10000", "f() from: 0x20000", "f()"],
    );
    let statements = render_statements(&parse_all(&log)[0]);
    assert_eq!(
        statements.iter().filter(|s| s.starts_with("_setUp(")).count(),
        3
    );
    assert_eq!(statements[4], "_setUp(USER1, 0 seconds, 0);");
}
