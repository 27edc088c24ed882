use std::fs;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Resolves a path or URL to raw bytes before any parsing happens.
pub trait ByteLoader {
    fn load(&self, location: &str) -> Result<Vec<u8>>;
}

/// Loads local files. URLs are recognized but not fetched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl FsLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ByteLoader for FsLoader {
    fn load(&self, location: &str) -> Result<Vec<u8>> {
        let path = Path::new(location);

        if path.exists() {
            let bytes = fs::read(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(location, bytes = bytes.len(), "loaded local resource");
            return Ok(bytes);
        }

        if is_remote(location) {
            return Err(Error::RemoteUnsupported(location.to_string()));
        }

        Err(Error::NotFound(location.to_string()))
    }
}

fn is_remote(location: &str) -> bool {
    Url::parse(location)
        .map(|url| matches!(url.scheme(), "http" | "https" | "ftp"))
        .unwrap_or(false)
}
