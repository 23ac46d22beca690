// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for type validation and code emission.

use thiserror::Error;

/// Failure while appending generated code to the output sink.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The underlying writer rejected the fragment.
    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),
}

/// Type-system rule violations detected by the driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// An enum was declared on top of a non-integer storage type.
    #[error("enum `{enum_name}` cannot use `{storage}` as its storage type")]
    InvalidEnumStorage {
        /// Fully-qualified name of the offending enum.
        enum_name: String,
        /// Display name of the rejected storage type.
        storage: String,
    },

    /// A struct field has no fixed ABI size.
    #[error("field `{field}` of type `{ty}` has no fixed size")]
    UnsizedField { field: String, ty: String },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
