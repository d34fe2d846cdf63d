use crate::error::{ConvertError, Result};
use std::path::PathBuf;

pub const CONVERTER_USAGE: &str = "crytic_to_foundry <CryticToFoundry.t.sol> [LOG_FILE]";
pub const SEQUENCE_USAGE: &str = "sequence_to_test [LOG_FILE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterArgs {
    pub tests_path: PathBuf,
    /// `None` (or `-`) reads the log from stdin.
    pub log_path: Option<PathBuf>,
}

fn collect_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| arg.as_ref().to_string())
        .collect::<Vec<_>>()
}

fn log_path_from(raw: Option<&String>) -> Option<PathBuf> {
    raw.filter(|path| path.as_str() != "-").map(PathBuf::from)
}

fn reject_flags(args: &[String], usage: &str) -> Result<()> {
    if let Some(flag) = args.iter().find(|arg| arg.starts_with("--")) {
        return Err(ConvertError::Usage(format!(
            "{usage} (flags are configured through CONVERTER_* environment keys, got `{flag}`)"
        )));
    }
    Ok(())
}

pub fn parse_converter_args_from_iter<I, S>(args: I) -> Result<ConverterArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let supplied = collect_args(args);
    reject_flags(&supplied, CONVERTER_USAGE)?;
    match supplied.as_slice() {
        [tests] | [tests, _] => Ok(ConverterArgs {
            tests_path: PathBuf::from(tests),
            log_path: log_path_from(supplied.get(1)),
        }),
        _ => Err(ConvertError::Usage(CONVERTER_USAGE.to_string())),
    }
}

pub fn parse_converter_args() -> Result<ConverterArgs> {
    parse_converter_args_from_iter(std::env::args().skip(1))
}

pub fn parse_sequence_args_from_iter<I, S>(args: I) -> Result<Option<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let supplied = collect_args(args);
    reject_flags(&supplied, SEQUENCE_USAGE)?;
    if supplied.len() > 1 {
        return Err(ConvertError::Usage(SEQUENCE_USAGE.to_string()));
    }
    Ok(log_path_from(supplied.first()))
}

pub fn parse_sequence_args() -> Result<Option<PathBuf>> {
    parse_sequence_args_from_iter(std::env::args().skip(1))
}
