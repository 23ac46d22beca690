// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! How generated code reacts when a parcel read/write reports failure.

use crate::config::EmitConfig;
use crate::error::EmitError;
use crate::formatter::Formatter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Error policy threaded into every emitted serialization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Leave the status unchecked.
    Ignore,
    /// Jump to the configured error label.
    Goto,
    /// Leave the enclosing loop or switch.
    Break,
    /// Return the status to the caller.
    Return,
}

impl ErrorMode {
    pub const ALL: [ErrorMode; 4] = [
        ErrorMode::Ignore,
        ErrorMode::Goto,
        ErrorMode::Break,
        ErrorMode::Return,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorMode::Ignore => "ignore",
            ErrorMode::Goto => "goto",
            ErrorMode::Break => "break",
            ErrorMode::Return => "return",
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown error mode `{s}` (expected ignore, goto, break or return)"))
    }
}

/// Emit the status check that follows a serialization call.
pub fn handle_error<W: Write>(
    out: &mut Formatter<W>,
    mode: ErrorMode,
    config: &EmitConfig,
) -> Result<(), EmitError> {
    let status = &config.status_var;
    let ok = &config.ok_status;
    match mode {
        ErrorMode::Ignore => write!(out, "/* {status} ignored! */\n\n")?,
        ErrorMode::Goto => write!(
            out,
            "if ({status} != {ok}) {{ goto {}; }}\n\n",
            config.error_label
        )?,
        ErrorMode::Break => write!(out, "if ({status} != {ok}) {{ break; }}\n\n")?,
        ErrorMode::Return => write!(out, "if ({status} != {ok}) {{ return {status}; }}\n\n")?,
    }
    Ok(())
}
