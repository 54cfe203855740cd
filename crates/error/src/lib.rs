use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors surfaced by the paging simulator. Every failure is either fatal before the
/// simulation starts (bad input, bad geometry) or reported per process, never retried.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// A process record is malformed: missing fields, wrong types, impossible values.
    InvalidData(String),
    /// A caller handed over arguments that make no sense together, e.g. duplicate pids.
    InvalidInput(String),
    /// The memory geometry cannot be turned into a frame table.
    InvalidConfig(String),
    /// Reading or writing a file failed.
    IO(String),
    /// A frame index fell outside the frame table.
    OutOfBounds,
    ArithmeticOverflow,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::IO(msg) => write!(f, "io error: {msg}"),
            Error::OutOfBounds => write!(f, "frame index out of bounds"),
            Error::ArithmeticOverflow => write!(f, "arithmetic overflow"),
        }
    }
}

/// Constructs an `Err(Error::InvalidData)` from a format string.
#[macro_export]
macro_rules! errdata {
    ($($args:tt)*) => { Err($crate::Error::InvalidData(format!($($args)*))).into() };
}

/// Constructs an `Err(Error::InvalidInput)` from a format string.
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => { Err($crate::Error::InvalidInput(format!($($args)*))).into() };
}

/// Constructs an `Err(Error::InvalidConfig)` from a format string.
#[macro_export]
macro_rules! errconfig {
    ($($args:tt)*) => { Err($crate::Error::InvalidConfig(format!($($args)*))).into() };
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(_: std::num::TryFromIntError) -> Self {
        Error::ArithmeticOverflow
    }
}
