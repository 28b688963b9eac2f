#[macro_use]
mod profile;

pub mod badge;
pub mod batch;
pub mod config;
pub mod error;
#[cfg(feature = "log")]
pub mod log;
