use crytic_converter::scanner::last_test_number;

#[test]
fn test_scanner_returns_maximum_over_unordered_tests() {
    let source = r#"
// SPDX-License-Identifier: GPL-2.0
pragma solidity ^0.8.0;

contract CryticToFoundry is Test, TargetFunctions, FoundryAsserts {
    function setUp() public {
        setup();
    }

    function test_CryticToFoundry_03() public {
        deposit(1);
    }

    function test_CryticToFoundry_21() public {
        deposit(2);
    }

    function test_CryticToFoundry_07() public {
        deposit(3);
    }
}
"#;
    assert_eq!(last_test_number(source), 21);
}

#[test]
fn test_scanner_without_generated_tests_starts_at_zero() {
    let source = "contract CryticToFoundry { function setUp() public {} function test_other() public {} }";
    assert_eq!(last_test_number(source), 0);
}
