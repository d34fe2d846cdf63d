use crate::anchor_utils::medusa_report;
use crytic_converter::pipeline::convert;
use crytic_converter::utils::config::ConverterConfig;

#[test]
fn test_three_failures_continue_after_existing_fifth_test() {
    let existing = "
    function test_CryticToFoundry_02() public {}
    function test_CryticToFoundry_05() public {}
    function test_CryticToFoundry_04() public {}";
    let log = [
        medusa_report("a", &["1) CryticTester.a()() (block=1, time=1, sender=0x10000)"]),
        medusa_report("b", &["1) CryticTester.b()() (block=1, time=1, sender=0x10000)"]),
        medusa_report("c", &["1) CryticTester.c()() (block=1, time=1, sender=0x10000)"]),
    ]
    .concat();

    let conversion = convert(existing, &log, &ConverterConfig::default()).expect("three failures");
    assert_eq!(conversion.failures.len(), 3);

    let expected = [("06", "a();"), ("07", "b();"), ("08", "c();")];
    let mut cursor = 0;
    for (number, call) in expected {
        let header = format!("function test_CryticToFoundry_{number}() public {{");
        let at = conversion.output[cursor..]
            .find(&header)
            .map(|offset| cursor + offset)
            .unwrap_or_else(|| panic!("missing {header}"));
        let call_at = conversion.output[at..].find(call).expect("call in body");
        cursor = at + call_at;
    }
    assert!(!conversion.output.contains("test_CryticToFoundry_09"));
    assert_eq!(conversion.output.matches("\n\n").count(), 2);
}
