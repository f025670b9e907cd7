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

//! src/config/file.rs
//!
//! Key configuration file parser
//!
//! The file format is line based:
//!
//! ```text
//! # full-line comment
//! $mod = Control
//! trigger-completion-list = $mod+Space
//! trigger-completion-list = $mod+J
//! commit-completion = Enter
//! submit-input =
//! ```
//!
//! - One descriptor per line; repeated categories append in file order
//! - An empty value is the "unconfigured" sentinel
//! - `$name = value` defines a variable usable in any value
//! - Only whole lines can be comments, since `#` is a valid literal key
//!
//! # Architecture
//! Two passes, like any config with forward-referenced variables:
//! 1. First pass: Collect variable definitions
//! 2. Second pass: Parse assignments with variable substitution
//!
//! Descriptors are collected verbatim; turning them into chords is left to
//! [`KeyBindings::build`] so the same error path serves every config source.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    sequence::preceded,
    IResult, Parser,
};
use regex::{Captures, Regex};
use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use crate::config::ConfigError;
use crate::core::{BindingCategory, KeyBindings, RawKeyConfig};

static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z0-9_-]+)")
        .expect("variable reference pattern should be valid regex")
});

/// Parse a complete key configuration file
///
/// # Errors
/// Returns the first problem found, with a 1-based line number.
///
/// # Example
/// ```
/// use repl_keybindings::config::file::parse_config_file;
///
/// let raw = parse_config_file("$mod = Control\nsubmit-input = $mod+Enter\n")?;
/// assert_eq!(raw.submit_input, vec!["Control+Enter".to_string()]);
/// # Ok::<(), repl_keybindings::config::ConfigError>(())
/// ```
pub fn parse_config_file(content: &str) -> Result<RawKeyConfig, ConfigError> {
    // First pass: Collect variable definitions
    let variables = collect_variables(content);

    // Second pass: Parse assignments with variable substitution
    let mut raw = RawKeyConfig::default();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        if line_trimmed.starts_with('$') {
            parse_variable(line_trimmed).map_err(|e| ConfigError::InvalidSyntax {
                line: line_num,
                message: format!("expected `$name = value`: {}", e),
            })?;
            continue;
        }

        let (name, value) = match parse_assignment(line_trimmed) {
            Ok((_, assignment)) => assignment,
            Err(e) => {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("expected `<category> = <key pattern>`: {}", e),
                });
            }
        };

        let category: BindingCategory =
            name.parse().map_err(|_| ConfigError::UnknownCategory {
                line: line_num,
                name: name.to_string(),
            })?;

        let value = substitute_variables(value, &variables).map_err(|variable| {
            ConfigError::UndefinedVariable {
                variable,
                line: line_num,
            }
        })?;

        raw.push(category, value);
    }

    Ok(raw)
}

/// Read and parse a key configuration file
pub fn load_config_file(path: &Path) -> Result<RawKeyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_config_file(&content)
}

/// Read, parse and assemble bindings from a file in one step
pub fn load_bindings(path: &Path) -> Result<KeyBindings, ConfigError> {
    let raw = load_config_file(path)?;
    Ok(KeyBindings::build(&raw)?)
}

/// Collect variable definitions
///
/// ```text
/// $mod = Control
/// ```
///
/// Later definitions of the same name win. Malformed lines are skipped here
/// and reported by the second pass.
pub fn collect_variables(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('$'))
        .filter_map(|line| parse_variable(line).ok())
        .map(|(_, (name, value))| (name.to_string(), value.to_string()))
        .collect()
}

/// Substitute `$name` references in a value
///
/// References match whole names only, so `$modx` never expands `$mod`.
/// Returns the first referenced name with no definition as the error. A
/// bare `$` is a literal key and is left alone.
pub fn substitute_variables(
    value: &str,
    variables: &HashMap<String, String>,
) -> Result<String, String> {
    if let Some(caps) = VARIABLE_REF
        .captures_iter(value)
        .find(|caps| !variables.contains_key(&caps[1]))
    {
        return Err(caps[1].to_string());
    }

    let substituted = VARIABLE_REF.replace_all(value, |caps: &Captures| {
        variables.get(&caps[1]).cloned().unwrap_or_default()
    });
    Ok(substituted.into_owned())
}

/// Parse a single assignment line
///
/// Format: `NAME = VALUE`, where the value runs to the end of the line and
/// may be empty. Only the first `=` separates, so `= =` binds the `=` key.
pub fn parse_assignment(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) =
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;

    Ok(("", (name, input.trim_end())))
}

/// Parse a `$name = value` line
pub fn parse_variable(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(char('$'), parse_assignment).parse(input)
}
