use crate::emitter::test_numbers;
use crate::parser::FailedTest;
use crate::runtime::ConverterArgs;
use crate::utils::config::ConverterConfig;

pub fn emit_config_status(args: &ConverterArgs, config: &ConverterConfig) {
    let log_source = args
        .log_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    tracing::info!(
        "[CONFIG] tests={} log={} dialect={} format={} default_sender={}",
        args.tests_path.display(),
        log_source,
        config.dialect.as_str(),
        config.output_format.as_str(),
        config.default_sender
    );
}

pub fn emit_conversion_status(last_test_number: u64, failures: &[FailedTest]) {
    let numbers = match test_numbers(last_test_number, failures.len()) {
        Ok(numbers) => numbers,
        Err(err) => {
            tracing::warn!("[EMIT] {err}");
            return;
        }
    };
    for (number, failure) in numbers.zip(failures) {
        tracing::info!(
            "[EMIT] #{:02} {} '{}' calls={}",
            number,
            failure.dialect.as_str(),
            failure.property,
            failure.calls.len()
        );
    }
}
