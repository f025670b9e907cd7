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

//! Owned handle to the active key bindings
//!
//! The input loop holds a `BindingsHandle` instead of reading a global.
//! Reloads are all-or-nothing:
//! - **Build first**: a complete `KeyBindings` is assembled off to the side
//! - **Swap on success**: only then does it replace the active value
//! - **Keep on failure**: a bad config leaves the previous bindings in place
//!
//! Readers take an `Arc` snapshot, so a reload never blocks matching for
//! longer than a pointer copy.

use std::{
    path::Path,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::{info, warn};

use crate::config::{file::load_config_file, ConfigError};
use crate::core::{
    BindingCategory, BindingError, ConflictDetector, KeyBindings, KeyEvent, RawKeyConfig,
};

/// Shared, replaceable reference to the active bindings.
///
/// # Example
///
/// ```
/// use repl_keybindings::config::BindingsHandle;
/// use repl_keybindings::core::{BindingCategory, Key, KeyEvent, Modifiers, RawKeyConfig};
///
/// let handle = BindingsHandle::default();
///
/// let mut raw = RawKeyConfig::default();
/// raw.push(BindingCategory::SubmitInput, "Control+Enter");
/// handle.reload(&raw)?;
///
/// let press = KeyEvent::key(Key::Enter, Modifiers::CONTROL);
/// assert!(handle.matches(&press, BindingCategory::SubmitInput));
/// # Ok::<(), repl_keybindings::core::BindingError>(())
/// ```
#[derive(Debug)]
pub struct BindingsHandle {
    active: RwLock<Arc<KeyBindings>>,
}

impl BindingsHandle {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            active: RwLock::new(Arc::new(bindings)),
        }
    }

    /// Snapshot of the active bindings.
    pub fn current(&self) -> Arc<KeyBindings> {
        // Writers only swap the Arc, so a poisoned lock still holds valid bindings
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs new bindings, returning the ones they replace.
    pub fn replace(&self, bindings: KeyBindings) -> Arc<KeyBindings> {
        self.install(Arc::new(bindings))
    }

    /// Builds bindings from `raw` and activates them only if the build succeeds.
    ///
    /// # Errors
    ///
    /// Returns the build error; the previously active bindings stay in place.
    pub fn reload(&self, raw: &RawKeyConfig) -> Result<Arc<KeyBindings>, BindingError> {
        let bindings = KeyBindings::build(raw).inspect_err(|e| {
            warn!(error = %e, "rejected key bindings, keeping previous configuration");
        })?;

        for conflict in ConflictDetector::from_bindings(&bindings).find_conflicts() {
            let categories: Vec<&str> = conflict.categories.iter().map(|c| c.name()).collect();
            warn!(chord = %conflict.chord, ?categories, "key chord bound to several actions");
        }

        let bindings = Arc::new(bindings);
        self.install(Arc::clone(&bindings));
        info!("key bindings reloaded");
        Ok(bindings)
    }

    /// Reads `path` and reloads from it, with the same all-or-nothing rule.
    pub fn reload_from_file(&self, path: &Path) -> Result<Arc<KeyBindings>, ConfigError> {
        let raw = load_config_file(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read key config");
        })?;
        Ok(self.reload(&raw)?)
    }

    /// Matches against the currently active bindings.
    pub fn matches(&self, event: &KeyEvent, category: BindingCategory) -> bool {
        self.current().matches(event, category)
    }

    fn install(&self, bindings: Arc<KeyBindings>) -> Arc<KeyBindings> {
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, bindings)
    }
}

impl Default for BindingsHandle {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
