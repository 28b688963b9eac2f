use std::{io, result};

use png::EncodingError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid or empty filename specified.")]
    InvalidFilename,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    ImageEncoding(#[from] EncodingError),
    #[error("Cannot allocate a {0}x{0} canvas.")]
    InvalidSize(u32),
    #[error("Text {0:?} has no drawable glyphs.")]
    NoGlyphs(String),
    #[error("Font unavailable: {0}")]
    Font(String),
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] toml_dep::de::Error),
}

#[cfg(feature = "system_font")]
impl From<ttf_parser::FaceParsingError> for Error {
    fn from(error: ttf_parser::FaceParsingError) -> Error {
        Error::Font(error.to_string())
    }
}

impl From<Error> for String {
    fn from(error: Error) -> String {
        error.to_string()
    }
}
