use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable credentials. Fatal: the bot refuses to start.
    #[error("configuration error: {0}")]
    Config(String),

    /// A malformed uploaded document. Recoverable: the previous FAQ stays.
    #[error("malformed FAQ document: {0}")]
    InputFormat(String),

    /// A failed call to the model provider. Recoverable: the caller
    /// substitutes a fixed fallback and the session continues.
    #[error("provider call failed: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
