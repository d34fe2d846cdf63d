use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("no fuzzer log provided: pass a LOG_FILE argument or pipe the log on stdin")]
    NoInputProvided,
    #[error("no failed tests found in the log")]
    NoFailuresFound,
    #[error("invalid address `{token}`: {reason}")]
    InvalidAddress { token: String, reason: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("cannot number {count} new test(s) after test #{last}: numbering overflows u64")]
    TestNumberOverflow { last: u64, count: usize },
}

impl ConvertError {
    /// Process exit status for this error; each "nothing to do" case is distinct
    /// from a crash so wrapper scripts can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 64,
            Self::NoInputProvided => 66,
            Self::NoFailuresFound => 2,
            Self::Io { .. } => 74,
            Self::InvalidConfig(_) => 78,
            Self::TestNumberOverflow { .. } => 65,
            Self::InvalidAddress { .. } | Self::Render(_) => 1,
        }
    }
}
