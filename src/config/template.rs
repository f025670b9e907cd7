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

//! Default key config template
//!
//! `init` writes this file so users start from the effective defaults
//! instead of an empty file.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::Path};
use tracing::info;

use crate::config::ConfigError;

/// Commented template equivalent to the built-in defaults.
pub const DEFAULT_TEMPLATE: &str = r#"# REPL key bindings
#
# One key pattern per line: <category> = <pattern>
# Repeat a category to bind several patterns. A category with no lines
# (or only empty values) uses its built-in default.
#
# Patterns join parts with '+':
#   named keys  Enter, Tab, Space, Escape, Backspace, Delete, Insert, Home,
#               End, PageUp, PageDown, UpArrow, DownArrow, LeftArrow,
#               RightArrow, F1-F24, A-Z
#   modifiers   Control (or Ctrl), Alt, Shift
#   characters  any other single character, e.g. '.' or '(' (no modifiers)
#
# Variables: define with `$name = value`, use as `$name`.

$mod = Control

commit-completion = Enter
commit-completion = Tab
commit-completion = Space
commit-completion = .
commit-completion = (

trigger-completion-list = $mod+Space
trigger-completion-list = $mod+J

# No defaults: the shell decides what Enter does
# insert-newline = Shift+Enter
# submit-input = Enter
"#;

/// Writes [`DEFAULT_TEMPLATE`] to `path` atomically.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` if the file exists and `force` is
/// false, or `ConfigError::WriteFailed` if the atomic write fails.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(DEFAULT_TEMPLATE.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit: {}", e)))?;

    info!(path = %path.display(), "wrote default key config");
    Ok(())
}
