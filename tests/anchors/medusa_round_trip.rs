use crate::anchor_utils::{medusa_report, parse_all, CHECKSUMMED_10000};
use crytic_converter::emitter::render_tests;
use crytic_converter::parser::{CallArgument, CallTiming, Dialect};
use crytic_converter::utils::hex::to_checksum_address;

#[test]
fn test_single_medusa_call_renders_one_setup_and_one_call() {
    let log = medusa_report(
        "deposit",
        &["1) CryticTester.deposit(address,uint256)(0xabc, 5) (block=100, time=200, gas=12500000, gasprice=1, value=0, sender=0x10000)"],
    );
    let failed = parse_all(&log);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].dialect, Dialect::Medusa);
    assert_eq!(failed[0].property, "deposit");

    let call = &failed[0].calls[0];
    assert_eq!(call.timing, CallTiming::Absolute { block: 100, time: 200 });
    assert_eq!(call.sender, CHECKSUMMED_10000);

    let token = to_checksum_address("0xabc").expect("short address pads");
    assert_eq!(call.args[0], CallArgument::Address(token.clone()));

    let rendered = render_tests(0, &failed).expect("numbered");
    assert_eq!(rendered.matches("_setUp2(").count(), 1);
    assert!(rendered.contains(&format!("_setUp2(200, 100, {CHECKSUMMED_10000});")));
    assert!(rendered.contains(&format!("deposit(address({token}), 5);")));
    assert!(rendered.starts_with("function test_CryticToFoundry_01() public {"));
}

#[test]
fn test_medusa_steps_are_rendered_in_step_order() {
    let log = medusa_report(
        "withdraw",
        &[
            "2) CryticTester.withdraw(uint256)(1) (block=11, time=21, sender=0x10000)",
            "1) CryticTester.deposit(uint256)(1) (block=10, time=20, sender=0x10000)",
        ],
    );
    let rendered = render_tests(0, &parse_all(&log)).expect("numbered");
    let deposit = rendered.find("deposit(1);").expect("deposit emitted");
    let withdraw = rendered.find("withdraw(1);").expect("withdraw emitted");
    assert!(deposit < withdraw);
    assert_eq!(rendered.matches("_setUp2(").count(), 2);
}
