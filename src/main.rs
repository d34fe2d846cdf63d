//! Converter binary: paste-ready Foundry tests from a Medusa/Echidna log.
//!
//! `crytic_to_foundry <CryticToFoundry.t.sol> [LOG_FILE]`: the test file is only
//! read to continue its numbering; generated functions go to stdout.

use anyhow::Context;
use crytic_converter::error::ConvertError;
use crytic_converter::pipeline::convert;
use crytic_converter::runtime::{
    emit_config_status, emit_conversion_status, init_tracing, parse_converter_args, read_log,
    read_source,
};
use crytic_converter::utils::config::ConverterConfig;
use crytic_converter::utils::env_guard::load_dot_env;
use std::process::ExitCode;

fn run() -> anyhow::Result<String> {
    let args = parse_converter_args()?;
    let config = ConverterConfig::from_env()?;
    emit_config_status(&args, &config);

    let existing_tests = read_source(&args.tests_path)?;
    let log = read_log(args.log_path.as_deref())?;

    let conversion = convert(&existing_tests, &log, &config)
        .with_context(|| format!("converting log against {}", args.tests_path.display()))?;
    emit_conversion_status(conversion.last_test_number, &conversion.failures);
    Ok(conversion.output)
}

fn main() -> ExitCode {
    load_dot_env();
    init_tracing();

    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<ConvertError>()
                .map(ConvertError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
