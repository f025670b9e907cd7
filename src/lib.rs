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

//! REPL Key Bindings
//!
//! Key-chord parsing and the key-binding model for an interactive shell
//! front-end. Users write key patterns such as `"Control+Space"` or `"."`;
//! this crate turns them into binding groups and decides, for every key
//! press, which action (if any) fires.
//!
//! # Features
//!
//! - **Pattern parsing:** Case-insensitive `Modifier+Key` descriptors with typed errors
//! - **Built-in defaults:** Unconfigured categories fall back to sensible chords
//! - **All-or-nothing builds:** Malformed configuration is always an error
//! - **Lock-free matching:** Immutable bindings, safe to query from any thread
//! - **Live reload:** Config file watching with replace-on-success semantics
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, parser, binding assembly, matcher, conflicts)
//! - **`config`:** Config file format, reload handle, watcher, default template
//! - **`input`:** crossterm key event adapter
//! - **`logging`:** tracing subscriber setup for the CLI
//!
//! # Examples
//!
//! ## Building bindings
//!
//! ```
//! use repl_keybindings::core::{
//!     BindingCategory, Key, KeyBindings, KeyEvent, Modifiers, RawKeyConfig,
//! };
//!
//! let mut raw = RawKeyConfig::default();
//! raw.push(BindingCategory::InsertNewline, "Shift+Enter");
//!
//! let bindings = KeyBindings::build(&raw)?;
//! let press = KeyEvent::key(Key::Enter, Modifiers::SHIFT);
//! assert!(bindings.matches(&press, BindingCategory::InsertNewline));
//! # Ok::<(), repl_keybindings::core::BindingError>(())
//! ```
//!
//! ## Loading a config file
//!
//! ```no_run
//! use repl_keybindings::config::load_bindings;
//! use std::path::Path;
//!
//! let bindings = load_bindings(Path::new("/tmp/keys.conf"))?;
//! for (category, chords) in bindings.iter() {
//!     println!("{category}: {chords}");
//! }
//! # Ok::<(), repl_keybindings::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod logging;

// Re-export commonly used types for convenience
pub use self::core::{BindingCategory, KeyBindings, KeyChord, KeyEvent, RawKeyConfig};
