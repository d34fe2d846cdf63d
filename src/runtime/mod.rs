pub mod args;
pub mod input;
pub mod status;

pub use args::{
    parse_converter_args, parse_sequence_args, ConverterArgs, CONVERTER_USAGE, SEQUENCE_USAGE,
};
pub use input::{read_log, read_source};
pub use status::{emit_config_status, emit_conversion_status};

/// Installs the stderr tracing subscriber. Stdout carries only generated code.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
