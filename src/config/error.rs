// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::BindingError;

/// Errors that can occur while loading, watching or writing key configs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// A line could not be parsed as an assignment.
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    /// Left-hand side of an assignment is not a binding category.
    #[error("Unknown binding category '{name}' on line {line}")]
    UnknownCategory { line: usize, name: String },
    /// A `$variable` was referenced but never defined.
    #[error("Undefined variable '${variable}' on line {line}")]
    UndefinedVariable { variable: String, line: usize },
    /// Refused to overwrite an existing file.
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Descriptors parsed but the bindings could not be assembled.
    #[error(transparent)]
    Bindings(#[from] BindingError),
    /// File watcher could not be set up.
    #[error("Failed to watch config: {0}")]
    Watch(#[from] notify::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
