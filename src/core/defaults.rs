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

//! Built-in chord sets used when a category is not configured
//!
//! Defaults are chord values, never descriptor strings, so they cannot fail
//! to parse.

use crate::core::bindings::BindingCategory;
use crate::core::types::{Key, KeyChord, KeyChordSet, Modifiers};

/// Enter, Tab, Space, `.` and `(`
pub const COMMIT_COMPLETION: [KeyChord; 5] = [
    KeyChord::key(Key::Enter),
    KeyChord::key(Key::Tab),
    KeyChord::key(Key::Space),
    KeyChord::literal('.'),
    KeyChord::literal('('),
];

/// Control+Space and Control+J
pub const TRIGGER_COMPLETION_LIST: [KeyChord; 2] = [
    KeyChord::named(Key::Space, Modifiers::CONTROL),
    KeyChord::named(Key::Letter('J'), Modifiers::CONTROL),
];

/// Default chord set for a category
///
/// `insert-newline` and `submit-input` have no defaults; the host decides
/// what an empty set falls back to.
pub fn default_chords(category: BindingCategory) -> KeyChordSet {
    match category {
        BindingCategory::CommitCompletion => KeyChordSet::new(COMMIT_COMPLETION.to_vec()),
        BindingCategory::TriggerCompletionList => {
            KeyChordSet::new(TRIGGER_COMPLETION_LIST.to_vec())
        }
        BindingCategory::InsertNewline | BindingCategory::SubmitInput => KeyChordSet::default(),
    }
}
