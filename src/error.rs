use derive_builder::UninitializedFieldError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Element not initialized {msg}")]
    Uninitialized { msg: String },
    #[error("{0}")]
    Ode(#[from] OdeError),
}

impl Error {
    pub(crate) fn uninitialized<T: Into<String>>(msg: T) -> Self {
        Error::Uninitialized { msg: msg.into() }
    }
}

impl From<UninitializedFieldError> for Error {
    fn from(err: UninitializedFieldError) -> Self {
        Error::uninitialized(err.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OdeError {
    #[error("Lambda order {0} is not one of 1, 3, 4 or 5")]
    InvalidLambda(i32),
    #[error("{0} is not a valid Ode identifier")]
    UnknownMethod(String),
    #[error(
        "Encountered NAN after {computation} computations while solving at timestamp {timestamp}"
    )]
    NAN { computation: usize, timestamp: f64 },
    #[error("Time span is not sorted")]
    UnsortedTimeSpan,
}
