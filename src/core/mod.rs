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

//! src/core/mod.rs
//!
//! Core key-binding logic
//!
//! This module contains the fundamental data structures and algorithms:
//! - Type definitions for keys, modifiers, chords and key events
//! - The descriptor parser (`"Control+Space"` → `KeyChord`)
//! - Binding group assembly with built-in defaults
//! - The runtime matcher and cross-category conflict detection
//!
//! Nothing here performs I/O, so everything is unit-testable without a
//! terminal or config file.

pub mod bindings;
pub mod conflict;
pub mod defaults;
pub mod parser;
pub mod types;

pub use bindings::{BindingCategory, BindingError, KeyBindings, RawKeyConfig};
pub use conflict::{Conflict, ConflictDetector};
pub use parser::{parse_key_chord, PatternError};
pub use types::*;

#[cfg(test)]
mod tests;
