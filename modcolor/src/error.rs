use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid {encoding} input: '{input}'")]
    Parse { encoding: String, input: String },

    #[error("Unknown encoding: '{0}'")]
    UnknownEncoding(String),

    #[error("Invalid modifier: {0}")]
    InvalidModifier(String),

    #[error("Missing value for '{0}'")]
    MissingValue(String),

    #[error("Unknown flag: '{0}'")]
    UnknownFlag(String),

    #[error("No input color given")]
    NoInput,

    #[error("IO:{msg}")]
    Io { source: io::Error, msg: String },
}

impl ColorError {
    pub(crate) fn parse(encoding: impl ToString, input: &str) -> Self {
        ColorError::Parse {
            encoding: encoding.to_string(),
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;
