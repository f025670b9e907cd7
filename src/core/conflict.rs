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

//! Cross-category conflict detection
//!
//! A chord bound to two or more categories (Enter both committing a
//! completion and submitting input) is legal: the host resolves it by
//! dispatch priority. It is still worth surfacing, so this module indexes
//! chords by category and reports the overlaps.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - List all conflicts: O(n log n) where n = number of unique chords

use std::collections::HashMap;

use crate::core::bindings::{BindingCategory, KeyBindings};
use crate::core::types::KeyChord;

/// Indexes chords by the categories that bind them.
pub struct ConflictDetector {
    /// Maps each chord to the distinct categories using it.
    bindings: HashMap<KeyChord, Vec<BindingCategory>>,
}

/// A chord claimed by more than one category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// The contested chord
    pub chord: KeyChord,

    /// Categories binding it (always 2 or more, in insertion order)
    pub categories: Vec<BindingCategory>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Builds a detector over every chord in `bindings`.
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let mut detector = Self::new();
        for (category, chords) in bindings.iter() {
            for chord in chords {
                detector.add_binding(*chord, category);
            }
        }
        detector
    }

    /// Records that `category` binds `chord`.
    ///
    /// Repeating a chord within one category is not a conflict and is
    /// recorded once.
    pub fn add_binding(&mut self, chord: KeyChord, category: BindingCategory) {
        let categories = self.bindings.entry(chord).or_default();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    /// Finds all chords bound by 2 or more categories.
    ///
    /// Sorted by the chord's descriptor text so output is stable.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, categories)| categories.len() > 1)
            .map(|(chord, categories)| Conflict {
                chord: *chord,
                categories: categories.clone(),
            })
            .collect();

        conflicts.sort_by_key(|c| c.chord.to_string());
        conflicts
    }

    /// Returns true if this chord is bound by 2 or more categories.
    pub fn has_conflict(&self, chord: &KeyChord) -> bool {
        self.bindings
            .get(chord)
            .map(|categories| categories.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the number of distinct (chord, category) pairs tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
