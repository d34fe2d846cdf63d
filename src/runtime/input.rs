use crate::error::{ConvertError, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the whole of `reader` as the log; empty input counts as no input.
pub fn read_log_from<R: Read>(mut reader: R) -> Result<String> {
    let mut log = String::new();
    reader
        .read_to_string(&mut log)
        .map_err(|source| ConvertError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    if log.trim().is_empty() {
        return Err(ConvertError::NoInputProvided);
    }
    Ok(log)
}

/// Log text from `path`, or from stdin when no path was given. An interactive
/// stdin is treated as "no input" instead of blocking on the terminal.
pub fn read_log(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        tracing::info!("[INPUT] reading fuzzer log from {}", path.display());
        return read_source(path);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(ConvertError::NoInputProvided);
    }
    tracing::info!("[INPUT] reading fuzzer log from stdin");
    read_log_from(stdin.lock())
}
