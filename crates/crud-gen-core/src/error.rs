// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for code generation.

use std::{io, path::PathBuf};

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while rendering or writing generated code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record descriptor cannot be rendered.
    #[error("invalid record `{record}`: {reason}")]
    InvalidRecord {
        /// Type name as supplied (may be empty).
        record: String,
        /// What is wrong with it.
        reason: String
    },

    /// The target name cannot be used as a file name and receiver prefix.
    #[error("invalid target `{target}`: {reason}")]
    InvalidTarget {
        /// Target name as supplied.
        target: String,
        /// What is wrong with it.
        reason: String
    },

    /// Template text is malformed or references an unknown slot.
    #[error("template error at byte {offset}: {reason}")]
    Template {
        /// Byte offset of the offending marker.
        offset: usize,
        /// What is wrong with it.
        reason: String
    },

    /// An output file could not be written.
    #[error("failed to write `{}`", path.display())]
    Write {
        /// Path that was being written.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String)
}

impl Error {
    pub(crate) fn invalid_record(record: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            record: record.to_string(),
            reason: reason.into()
        }
    }

    pub(crate) fn template(offset: usize, reason: impl Into<String>) -> Self {
        Self::Template {
            offset,
            reason: reason.into()
        }
    }
}
