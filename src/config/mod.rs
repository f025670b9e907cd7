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

//! Key configuration files and the active-bindings lifecycle.
//!
//! This module covers everything around the pure core that touches the
//! outside world:
//!
//! - **File format**: `keys.conf` parsing with variables (`file`)
//! - **Active bindings**: replace-on-success reload handle (`handle`)
//! - **Live reload**: notify-based watcher for the config file (`watcher`)
//! - **Bootstrapping**: atomic write of a default template (`template`)
//!
//! # Example
//!
//! ```no_run
//! use repl_keybindings::config::{BindingsHandle, ConfigWatcher};
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("/home/user/.config/repl/keys.conf");
//! let handle = BindingsHandle::default();
//! handle.reload_from_file(&path)?;
//!
//! let watcher = ConfigWatcher::new(path)?;
//! // In the input loop:
//! if let Some(Err(e)) = watcher.reload_if_changed(&handle) {
//!     eprintln!("Keeping previous bindings: {}", e);
//! }
//! # Ok::<(), repl_keybindings::config::ConfigError>(())
//! ```

use std::path::PathBuf;

pub mod error;
pub mod file;
pub mod handle;
pub mod template;
pub mod watcher;

pub use error::ConfigError;
pub use file::{load_bindings, load_config_file, parse_config_file};
pub use handle::BindingsHandle;
pub use template::{write_default_config, DEFAULT_TEMPLATE};
pub use watcher::ConfigWatcher;

/// Default location of the key config, before tilde expansion
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/repl/keys.conf";

/// Expands a leading `~` (and `~user`) in a config path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests;
