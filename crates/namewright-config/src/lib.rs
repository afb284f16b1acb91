//! Configuration loading for namewright.
//!
//! This crate is responsible for:
//! - Loading the configuration record ([`RawConfig`]) from TOML files
//! - Providing a simple default search strategy (`./namewright.toml`, `./serverless.toml`)
//!
//! Applying defaults, CLI precedence and value checks is not done here; that
//! is [`namewright_core::resolve`], which performs no I/O and sees the file
//! values only after command-line overrides have replaced them.
//!
//! A minimal file:
//!
//! ```toml
//! service = "orders"
//!
//! [provider]
//! region = "West US"
//! stage = "dev"
//! prefix = "sls"
//!
//! [provider.storageAccount]
//! name = "ordersstore"
//!
//! [deploy]
//! rollback = true
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use namewright_core::{NamingError, RawConfig, Result};

/// File names probed by [`load_default`], in order.
pub const DEFAULT_FILE_NAMES: [&str; 2] = ["namewright.toml", "serverless.toml"];

/// Load configuration from a specific file path.
///
/// A missing file maps to [`NamingError::ConfigNotFound`], other read
/// failures to [`NamingError::Io`], parse failures to
/// [`NamingError::InvalidConfig`] keyed by the file path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RawConfig> {
    let path_ref = path.as_ref();
    let contents = match fs::read_to_string(path_ref) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(NamingError::ConfigNotFound(path_ref.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let cfg = parse(&contents).map_err(|err| {
        NamingError::invalid_config(
            path_ref.display().to_string(),
            format!("failed to parse config: {}", err),
        )
    })?;

    tracing::debug!(path = %path_ref.display(), "loaded naming configuration");
    Ok(cfg)
}

/// Parse configuration from a TOML string.
pub fn load_from_str(contents: &str) -> Result<RawConfig> {
    parse(contents).map_err(|err| NamingError::Toml(err.to_string()))
}

fn parse(contents: &str) -> std::result::Result<RawConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Attempt to load configuration from the current directory.
///
/// Probes each of [`DEFAULT_FILE_NAMES`] in order and loads the first one
/// that exists.
pub fn load_default() -> Result<RawConfig> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_from_dir(&dir)
}

/// Same as [`load_default`], rooted at `dir`.
pub fn load_from_dir(dir: &Path) -> Result<RawConfig> {
    for name in DEFAULT_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.exists() {
            return load_from_path(&candidate);
        }
    }

    Err(NamingError::ConfigNotFound(format!(
        "{} (also tried {})",
        dir.join(DEFAULT_FILE_NAMES[0]).display(),
        DEFAULT_FILE_NAMES[1]
    )))
}
