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

//! src/core/bindings.rs
//!
//! Binding group assembly and runtime matching
//!
//! Raw descriptor lists (one per [`BindingCategory`]) are parsed into a
//! [`KeyBindings`] value once at startup. Assembly is all-or-nothing: a
//! single malformed descriptor fails the whole build, and nothing falls back
//! to defaults except categories that were left unconfigured.
//!
//! Matching is pure and allocation-free; it is safe to call on every key
//! press from any thread.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

use crate::core::defaults::default_chords;
use crate::core::parser::{parse_key_chord, PatternError};
use crate::core::types::{KeyChordSet, KeyEvent};

/// Named purpose a chord set serves
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BindingCategory {
    /// Accept the highlighted completion
    CommitCompletion,
    /// Open the completion list
    TriggerCompletionList,
    /// Insert a line break instead of submitting
    InsertNewline,
    /// Submit the current input for evaluation
    SubmitInput,
}

impl BindingCategory {
    /// All categories, also the default dispatch priority
    pub const ALL: [BindingCategory; 4] = [
        BindingCategory::CommitCompletion,
        BindingCategory::TriggerCompletionList,
        BindingCategory::InsertNewline,
        BindingCategory::SubmitInput,
    ];

    /// Configuration name of the category
    pub fn name(self) -> &'static str {
        match self {
            BindingCategory::CommitCompletion => "commit-completion",
            BindingCategory::TriggerCompletionList => "trigger-completion-list",
            BindingCategory::InsertNewline => "insert-newline",
            BindingCategory::SubmitInput => "submit-input",
        }
    }
}

impl fmt::Display for BindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BindingCategory {
    type Err = BindingError;

    /// Accepts kebab-case or snake_case, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
            .ok_or_else(|| BindingError::UnknownCategory(s.to_string()))
    }
}

/// Errors raised while assembling key bindings
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BindingError {
    /// A descriptor in the given category failed to parse
    #[error("invalid key pattern '{descriptor}' for {category}: {source}")]
    InvalidPattern {
        category: BindingCategory,
        descriptor: String,
        source: PatternError,
    },

    /// Category name not recognised
    #[error("unknown binding category '{0}'")]
    UnknownCategory(String),
}

/// Unparsed descriptor lists, one per category
///
/// An empty list means "use the built-in default". The struct deserialises
/// from any serde format with kebab-case keys, so a host can embed it in its
/// own settings file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RawKeyConfig {
    pub commit_completion: Vec<String>,
    pub trigger_completion_list: Vec<String>,
    pub insert_newline: Vec<String>,
    pub submit_input: Vec<String>,
}

impl RawKeyConfig {
    pub fn descriptors(&self, category: BindingCategory) -> &[String] {
        match category {
            BindingCategory::CommitCompletion => &self.commit_completion,
            BindingCategory::TriggerCompletionList => &self.trigger_completion_list,
            BindingCategory::InsertNewline => &self.insert_newline,
            BindingCategory::SubmitInput => &self.submit_input,
        }
    }

    pub fn descriptors_mut(&mut self, category: BindingCategory) -> &mut Vec<String> {
        match category {
            BindingCategory::CommitCompletion => &mut self.commit_completion,
            BindingCategory::TriggerCompletionList => &mut self.trigger_completion_list,
            BindingCategory::InsertNewline => &mut self.insert_newline,
            BindingCategory::SubmitInput => &mut self.submit_input,
        }
    }

    /// Append one descriptor to a category
    pub fn push(&mut self, category: BindingCategory, descriptor: impl Into<String>) {
        self.descriptors_mut(category).push(descriptor.into());
    }

    /// Replace a category's descriptors wholesale
    pub fn set(&mut self, category: BindingCategory, descriptors: Vec<String>) {
        *self.descriptors_mut(category) = descriptors;
    }
}

/// The assembled binding groups
///
/// Built once and never mutated; share it with `Arc` or through
/// [`BindingsHandle`](crate::config::BindingsHandle).
///
/// # Example
/// ```
/// use repl_keybindings::core::{
///     BindingCategory, Key, KeyBindings, KeyEvent, Modifiers, RawKeyConfig,
/// };
///
/// let mut raw = RawKeyConfig::default();
/// raw.push(BindingCategory::TriggerCompletionList, "Enter");
/// raw.push(BindingCategory::TriggerCompletionList, "Control+Space");
///
/// let bindings = KeyBindings::build(&raw)?;
/// let enter = KeyEvent::key(Key::Enter, Modifiers::NONE);
/// assert!(bindings.matches(&enter, BindingCategory::TriggerCompletionList));
/// # Ok::<(), repl_keybindings::core::BindingError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct KeyBindings {
    commit_completion: KeyChordSet,
    trigger_completion_list: KeyChordSet,
    insert_newline: KeyChordSet,
    submit_input: KeyChordSet,
}

impl KeyBindings {
    /// Parse and assemble every category
    ///
    /// # Errors
    ///
    /// Returns `BindingError::InvalidPattern` for the first descriptor that
    /// fails to parse; no partially built value is exposed.
    pub fn build(raw: &RawKeyConfig) -> Result<Self, BindingError> {
        Ok(Self {
            commit_completion: build_category(raw, BindingCategory::CommitCompletion)?,
            trigger_completion_list: build_category(raw, BindingCategory::TriggerCompletionList)?,
            insert_newline: build_category(raw, BindingCategory::InsertNewline)?,
            submit_input: build_category(raw, BindingCategory::SubmitInput)?,
        })
    }

    pub fn chords(&self, category: BindingCategory) -> &KeyChordSet {
        match category {
            BindingCategory::CommitCompletion => &self.commit_completion,
            BindingCategory::TriggerCompletionList => &self.trigger_completion_list,
            BindingCategory::InsertNewline => &self.insert_newline,
            BindingCategory::SubmitInput => &self.submit_input,
        }
    }

    /// Does the event trigger the given category?
    pub fn matches(&self, event: &KeyEvent, category: BindingCategory) -> bool {
        self.chords(category).matches(event)
    }

    /// First category in `priority` order whose chords match the event
    ///
    /// Pass [`BindingCategory::ALL`] for the default order, or a narrower
    /// slice when some actions are not available (no completion list open).
    pub fn dispatch(
        &self,
        event: &KeyEvent,
        priority: &[BindingCategory],
    ) -> Option<BindingCategory> {
        priority
            .iter()
            .copied()
            .find(|category| self.matches(event, *category))
    }

    /// Categories with their chord sets, in [`BindingCategory::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (BindingCategory, &KeyChordSet)> {
        BindingCategory::ALL
            .into_iter()
            .map(move |category| (category, self.chords(category)))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            commit_completion: default_chords(BindingCategory::CommitCompletion),
            trigger_completion_list: default_chords(BindingCategory::TriggerCompletionList),
            insert_newline: default_chords(BindingCategory::InsertNewline),
            submit_input: default_chords(BindingCategory::SubmitInput),
        }
    }
}

fn build_category(
    raw: &RawKeyConfig,
    category: BindingCategory,
) -> Result<KeyChordSet, BindingError> {
    let mut chords = Vec::new();

    for descriptor in raw.descriptors(category) {
        let chord = parse_key_chord(descriptor).map_err(|source| BindingError::InvalidPattern {
            category,
            descriptor: descriptor.clone(),
            source,
        })?;

        // Empty descriptors only mean "not configured"
        if chord.is_configured() {
            chords.push(chord);
        }
    }

    if chords.is_empty() {
        debug!(%category, "no key patterns configured, using defaults");
        return Ok(default_chords(category));
    }

    debug!(%category, count = chords.len(), "key patterns configured");
    Ok(KeyChordSet::new(chords))
}
