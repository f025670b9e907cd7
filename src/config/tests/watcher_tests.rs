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

use super::super::*;
use crate::core::{
    BindingCategory, BindingError, Key, KeyBindings, KeyEvent, Modifiers, PatternError,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_watcher_starts_without_pending_changes() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("keys.conf");
    fs::write(&config_path, "submit-input = Enter\n").unwrap();

    let watcher = ConfigWatcher::new(config_path.clone()).unwrap();
    assert_eq!(watcher.path(), config_path.as_path());

    let handle = BindingsHandle::default();
    assert!(watcher.reload_if_changed(&handle).is_none());
}

#[test]
fn test_watcher_on_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing").join("keys.conf");

    assert!(matches!(
        ConfigWatcher::new(config_path),
        Err(ConfigError::Watch(_))
    ));
}

/// Replace the config the way editors do: write a sibling then rename it over
fn replace_config(path: &Path, content: &str) {
    let staging = path.with_extension("conf.tmp");
    fs::write(&staging, content).unwrap();
    fs::rename(&staging, path).unwrap();
}

/// Poll the watcher until it reports a reload, or fail after a few seconds
fn wait_for_reload(
    watcher: &ConfigWatcher,
    handle: &BindingsHandle,
) -> Result<Arc<KeyBindings>, ConfigError> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(result) = watcher.reload_if_changed(handle) {
            return result;
        }
        assert!(Instant::now() < deadline, "Watcher never reported the change");
        thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn test_watcher_reloads_changed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("keys.conf");
    fs::write(&config_path, "submit-input = Enter\n").unwrap();

    let handle = BindingsHandle::default();
    handle.reload_from_file(&config_path).unwrap();
    let watcher = ConfigWatcher::new(config_path.clone()).unwrap();

    replace_config(&config_path, "submit-input = F5\n");

    let active = wait_for_reload(&watcher, &handle).unwrap();
    let f5 = KeyEvent::key(Key::F(5), Modifiers::NONE);
    assert!(active.matches(&f5, BindingCategory::SubmitInput));
    assert!(handle.matches(&f5, BindingCategory::SubmitInput));
    assert!(!handle.matches(
        &KeyEvent::key(Key::Enter, Modifiers::NONE),
        BindingCategory::SubmitInput
    ));
}

#[test]
fn test_watcher_keeps_previous_bindings_on_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("keys.conf");
    fs::write(&config_path, "submit-input = F5\n").unwrap();

    let handle = BindingsHandle::default();
    handle.reload_from_file(&config_path).unwrap();
    let before = handle.current();
    let watcher = ConfigWatcher::new(config_path.clone()).unwrap();

    replace_config(&config_path, "submit-input = Control+Alt\n");

    match wait_for_reload(&watcher, &handle) {
        Err(ConfigError::Bindings(BindingError::InvalidPattern { source, .. })) => {
            assert_eq!(source, PatternError::MissingPrimary);
        }
        other => panic!("Expected InvalidPattern, got: {:?}", other),
    }
    assert!(Arc::ptr_eq(&handle.current(), &before));
}
