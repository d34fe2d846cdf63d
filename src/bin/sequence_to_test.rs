use crytic_converter::error::ConvertError;
use crytic_converter::pipeline::convert_sequence;
use crytic_converter::runtime::{init_tracing, parse_sequence_args, read_log};
use crytic_converter::utils::env_guard::load_dot_env;
use std::process::ExitCode;

fn run() -> Result<String, ConvertError> {
    let log_path = parse_sequence_args()?;
    let text = read_log(log_path.as_deref())?;
    convert_sequence(&text)
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
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
