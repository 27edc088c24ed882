//! Errors raised at the boundary of the corpus model.
//!
//! Parsing a record tree never fails on missing or mistyped fields; these
//! errors only cover loading the raw bytes and reading them as JSON at all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading a local resource failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The location is neither an existing file nor a URL.
    #[error("cannot read from non-existing file: {0}")]
    NotFound(String),

    /// The location is a URL and no remote fetcher is available.
    #[error("remote resources are not supported: {0}")]
    RemoteUnsupported(String),

    /// The buffer is not valid JSON.
    #[error("invalid JSON in {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
