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

//! Terminal input adapter
//!
//! Converts crossterm key events into [`KeyEvent`]s the matcher
//! understands.
//!
//! # Architecture
//!
//! ```text
//! crossterm::event::KeyEvent
//!     → key_event_from_crossterm() → KeyEvent → KeyBindings::matches()
//! ```

use crossterm::event::{KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Key, KeyEvent, Modifiers};

/// Convert crossterm modifiers, dropping the ones chords cannot express
pub fn modifiers_from_crossterm(modifiers: KeyModifiers) -> Modifiers {
    let mut result = Modifiers::NONE;
    if modifiers.contains(KeyModifiers::CONTROL) {
        result |= Modifiers::CONTROL;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result |= Modifiers::ALT;
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        result |= Modifiers::SHIFT;
    }
    result
}

/// Convert a crossterm key event
///
/// Returns `None` for key releases and for keys with no counterpart
/// (media keys, Caps Lock, ...). Letters become named keys and keep the
/// typed character; other printable characters become character presses.
pub fn key_event_from_crossterm(event: &TermKeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mods = modifiers_from_crossterm(event.modifiers);
    let named = |key: Key| Some(KeyEvent::key(key, mods));

    match event.code {
        KeyCode::Enter => named(Key::Enter),
        KeyCode::Tab => named(Key::Tab),
        // Terminals report Shift+Tab as its own code
        KeyCode::BackTab => Some(KeyEvent::key(Key::Tab, mods | Modifiers::SHIFT)),
        KeyCode::Esc => named(Key::Escape),
        KeyCode::Backspace => named(Key::Backspace),
        KeyCode::Delete => named(Key::Delete),
        KeyCode::Insert => named(Key::Insert),
        KeyCode::Home => named(Key::Home),
        KeyCode::End => named(Key::End),
        KeyCode::PageUp => named(Key::PageUp),
        KeyCode::PageDown => named(Key::PageDown),
        KeyCode::Up => named(Key::Up),
        KeyCode::Down => named(Key::Down),
        KeyCode::Left => named(Key::Left),
        KeyCode::Right => named(Key::Right),
        KeyCode::F(n) if (1..=24).contains(&n) => named(Key::F(n)),
        KeyCode::Char(' ') => Some(KeyEvent::key(Key::Space, mods).with_char(' ')),
        KeyCode::Char(c) => Some(match Key::letter(c) {
            Some(key) => KeyEvent::key(key, mods).with_char(c),
            None => KeyEvent::char(c).with_modifiers(mods),
        }),
        _ => None,
    }
}
