// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Every option has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! out_dir = "internal/dao"
//! contract_suffix = "dao"
//! models_package = "models"
//! db_handle = "Db"
//! header = "// Code generated by crud-gen. DO NOT EDIT.\n\n"
//! # operations_template = "..."
//! # contract_template = "..."
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    record::identifier_problem
};

/// Header written at the top of both generated files by default.
pub const DEFAULT_HEADER: &str = "// Code generated by crud-gen. DO NOT EDIT.\n\n";

/// Options controlling where files go and what the templates reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory both output files are written to.
    pub out_dir: PathBuf,

    /// Appended to the target name to form the contract file name.
    pub contract_suffix: String,

    /// Package qualifying model types (`models.Person`).
    pub models_package: String,

    /// Database handle used by generated operations.
    pub db_handle: String,

    /// Text written before the first block of each file.
    pub header: String,

    /// Replacement for the built-in operations template.
    pub operations_template: Option<String>,

    /// Replacement for the built-in contract template.
    pub contract_template: Option<String>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir:             PathBuf::from("."),
            contract_suffix:     "dao".to_string(),
            models_package:      "models".to_string(),
            db_handle:           "Db".to_string(),
            header:              DEFAULT_HEADER.to_string(),
            operations_template: None,
            contract_template:   None
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML, unknown keys, or invalid
    /// values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read `{}`: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Set the contract file suffix.
    #[must_use]
    pub fn with_contract_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.contract_suffix = suffix.into();
        self
    }

    /// Set the models package qualifier.
    #[must_use]
    pub fn with_models_package(mut self, package: impl Into<String>) -> Self {
        self.models_package = package.into();
        self
    }

    /// Set the database handle name.
    #[must_use]
    pub fn with_db_handle(mut self, handle: impl Into<String>) -> Self {
        self.db_handle = handle.into();
        self
    }

    /// Set the file header.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Replace the operations template.
    #[must_use]
    pub fn with_operations_template(mut self, template: impl Into<String>) -> Self {
        self.operations_template = Some(template.into());
        self
    }

    /// Replace the contract template.
    #[must_use]
    pub fn with_contract_template(mut self, template: impl Into<String>) -> Self {
        self.contract_template = Some(template.into());
        self
    }

    /// Check values that end up in file names or generated source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first invalid option.
    pub fn validate(&self) -> Result<()> {
        if self.contract_suffix.is_empty() {
            return Err(Error::Config(
                "contract_suffix must not be empty; both files would share one path".to_string()
            ));
        }
        if self.contract_suffix.contains(['/', '\\']) {
            return Err(Error::Config("contract_suffix must not contain path separators".to_string()));
        }
        if let Some(reason) = identifier_problem(&self.models_package) {
            return Err(Error::Config(format!("models_package {reason}")));
        }
        if let Some(reason) = identifier_problem(&self.db_handle) {
            return Err(Error::Config(format!("db_handle {reason}")));
        }
        Ok(())
    }
}
