//! Run-scoped converter configuration.
//!
//! Binds the CLI paths to a loaded and validated [`ClientConfig`]. All
//! configuration failures happen here, before any source workbook I/O.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rmk_model::ClientConfig;

/// Everything one conversion run needs: the source workbook, the output
/// directory, and the bound client configuration. Not persisted.
#[derive(Debug)]
pub struct ConverterConfig {
    pub source_file: PathBuf,
    pub output_path: PathBuf,
    pub client: ClientConfig,
}

impl ConverterConfig {
    /// Resolve and validate the run configuration.
    ///
    /// Checks that the source file exists, creates the output directory if
    /// missing, loads the client configuration JSON, and runs its
    /// validation.
    ///
    /// # Errors
    ///
    /// Fails on any missing path, unreadable or invalid JSON, or a client
    /// configuration that does not satisfy its invariants.
    pub fn resolve(
        source_file: &Path,
        output_path: &Path,
        client_config_file: &Path,
    ) -> Result<Self> {
        if !source_file.is_file() {
            bail!("source file '{}' not found", source_file.display());
        }

        let output_path = std::path::absolute(output_path)
            .with_context(|| format!("invalid output path '{}'", output_path.display()))?;
        if !output_path.is_dir() {
            fs::create_dir_all(&output_path)
                .with_context(|| format!("invalid output path '{}'", output_path.display()))?;
        }

        if !client_config_file.is_file() {
            bail!(
                "client configuration file '{}' not found",
                client_config_file.display()
            );
        }
        let json = fs::read_to_string(client_config_file).with_context(|| {
            format!(
                "failed to read client configuration file '{}'",
                client_config_file.display()
            )
        })?;
        let client: ClientConfig = serde_json::from_str(&json).with_context(|| {
            format!(
                "failed to parse client configuration file '{}'",
                client_config_file.display()
            )
        })?;
        client.validate().context("invalid client configuration")?;

        Ok(Self {
            source_file: source_file.to_path_buf(),
            output_path,
            client,
        })
    }
}
