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

//! src/core/types.rs
//!
//! Core type definitions for key chords
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier` / `Modifiers`: Keyboard modifier keys (CONTROL, ALT, SHIFT)
//! - `Key`: Named keys such as Enter, Tab or F1
//! - `KeyChord`: Modifiers plus exactly one primary (named key or character)
//! - `KeyChordSet`: Ordered alternatives that trigger the same action
//! - `KeyEvent`: A live key press reported by the host input loop
//!
//! Chords are immutable once constructed and hash consistently, so they can
//! be used as HashMap keys in conflict detection.

use serde::{Serialize, Serializer};
use std::{fmt, ops};

/// Keyboard modifier keys
///
/// Names are matched case-insensitively; `ctrl` is accepted for Control.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modifier {
    /// Control key
    Control,
    /// Alt key
    Alt,
    /// Shift key
    Shift,
}

impl Modifier {
    /// All modifiers in display order
    pub const ALL: [Modifier; 3] = [Modifier::Control, Modifier::Alt, Modifier::Shift];

    /// Looks up a modifier by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "control" | "ctrl" => Some(Modifier::Control),
            "alt" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Modifier::Control => 0b001,
            Modifier::Alt => 0b010,
            Modifier::Shift => 0b100,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Control => write!(f, "Control"),
            Modifier::Alt => write!(f, "Alt"),
            Modifier::Shift => write!(f, "Shift"),
        }
    }
}

/// Set of modifier keys stored as a bitfield
///
/// Order-independent and deduplicated by construction: `Control+Shift` and
/// `Shift+Control+Shift` produce the same value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CONTROL: Modifiers = Modifiers(Modifier::Control.bit());
    pub const ALT: Modifiers = Modifiers(Modifier::Alt.bit());
    pub const SHIFT: Modifiers = Modifiers(Modifier::Shift.bit());

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in `other`
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the individual modifiers in display order
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |m| self.contains(Modifiers::from(*m)))
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        Modifiers(modifier.bit())
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Modifiers::NONE, |acc, m| acc | Modifiers::from(m))
    }
}

impl ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl ops::BitOrAssign<Modifier> for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifier) {
        *self = self.union(Modifiers::from(rhs));
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", mods)
    }
}

/// A named (non-character) key
///
/// Letters are named keys so they can carry modifiers (`Control+J`).
/// `Letter` always holds an uppercase ASCII letter; use [`Key::letter`] to
/// construct one from arbitrary input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    Enter,
    Tab,
    Space,
    Escape,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function keys F1-F24
    F(u8),
    /// Letter keys A-Z
    Letter(char),
}

impl Key {
    /// Looks up a named key, case-insensitively
    ///
    /// Recognises the canonical names plus a few common aliases
    /// (`Return`, `Spacebar`, `Esc`, `Del`, `Ins`, `Up`/`UpArrow`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let key = match lower.as_str() {
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "space" | "spacebar" => Key::Space,
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "insert" | "ins" => Key::Insert,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "up" | "uparrow" => Key::Up,
            "down" | "downarrow" => Key::Down,
            "left" | "leftarrow" => Key::Left,
            "right" | "rightarrow" => Key::Right,
            _ => return Self::function_key(&lower).or_else(|| Self::single_letter(name)),
        };
        Some(key)
    }

    /// Letter key for an ASCII letter of either case
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Key::Letter(c.to_ascii_uppercase()))
    }

    fn function_key(lower: &str) -> Option<Self> {
        let digits = lower.strip_prefix('f')?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let n: u8 = digits.parse().ok()?;
        (1..=24).contains(&n).then_some(Key::F(n))
    }

    fn single_letter(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::letter(c),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Space => write!(f, "Space"),
            Key::Escape => write!(f, "Escape"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Insert => write!(f, "Insert"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PageUp"),
            Key::PageDown => write!(f, "PageDown"),
            Key::Up => write!(f, "UpArrow"),
            Key::Down => write!(f, "DownArrow"),
            Key::Left => write!(f, "LeftArrow"),
            Key::Right => write!(f, "RightArrow"),
            Key::F(n) => write!(f, "F{}", n),
            Key::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// The non-modifier part of a chord
///
/// `Unresolved` only appears in the "unconfigured" sentinel chord and as the
/// starting state while a descriptor is being parsed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primary {
    Unresolved,
    Named(Key),
    Literal(char),
}

/// A single key gesture: modifiers plus exactly one primary
///
/// Fields are private so the invariants hold for every value:
/// - exactly one primary (except for [`KeyChord::UNCONFIGURED`])
/// - literal characters never carry modifiers
///
/// # Example
/// ```
/// use repl_keybindings::core::{Key, KeyChord, Modifiers};
///
/// let chord = KeyChord::named(Key::Space, Modifiers::CONTROL);
/// assert_eq!(chord.to_string(), "Control+Space");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KeyChord {
    modifiers: Modifiers,
    primary: Primary,
}

impl KeyChord {
    /// Sentinel produced by an empty descriptor: "not configured, use default"
    pub const UNCONFIGURED: KeyChord = KeyChord {
        modifiers: Modifiers::NONE,
        primary: Primary::Unresolved,
    };

    /// Chord for a named key held with `modifiers`
    pub const fn named(key: Key, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            primary: Primary::Named(key),
        }
    }

    /// Chord for a named key with no modifiers
    pub const fn key(key: Key) -> Self {
        Self::named(key, Modifiers::NONE)
    }

    /// Chord for a literal character (never carries modifiers)
    pub const fn literal(ch: char) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            primary: Primary::Literal(ch),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn primary(&self) -> Primary {
        self.primary
    }

    /// False only for the sentinel chord
    pub fn is_configured(&self) -> bool {
        self.primary != Primary::Unresolved
    }

    /// Checks whether a live key press triggers this chord
    ///
    /// Named keys compare key and modifier set exactly. Literal characters
    /// compare the produced character with Shift masked out, since Shift is
    /// part of typing a character (`(`); Control or Alt never match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match self.primary {
            Primary::Unresolved => false,
            Primary::Named(key) => event.key == Some(key) && event.modifiers == self.modifiers,
            Primary::Literal(ch) => {
                event.ch == Some(ch)
                    && !event.modifiers.contains(Modifiers::CONTROL)
                    && !event.modifiers.contains(Modifiers::ALT)
            }
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = match self.primary {
            Primary::Unresolved => return Ok(()),
            Primary::Named(key) => key.to_string(),
            Primary::Literal(ch) => ch.to_string(),
        };

        if self.modifiers.is_empty() {
            write!(f, "{}", primary)
        } else {
            write!(f, "{}+{}", self.modifiers, primary)
        }
    }
}

impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered alternatives: any chord in the set triggers the action
///
/// Order and duplicates are kept as configured so diagnostics can point at
/// the original entries; matching does not depend on either.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyChordSet(Vec<KeyChord>);

impl KeyChordSet {
    pub fn new(chords: Vec<KeyChord>) -> Self {
        Self(chords)
    }

    /// True if any chord in the set matches the event
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.0.iter().any(|chord| chord.matches(event))
    }

    /// First chord matching the event
    pub fn find(&self, event: &KeyEvent) -> Option<&KeyChord> {
        self.0.iter().find(|chord| chord.matches(event))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyChord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[KeyChord] {
        &self.0
    }
}

impl FromIterator<KeyChord> for KeyChordSet {
    fn from_iter<I: IntoIterator<Item = KeyChord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeyChordSet {
    type Item = &'a KeyChord;
    type IntoIter = std::slice::Iter<'a, KeyChord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for KeyChordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chords = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", chords)
    }
}

/// A live key press as reported by the host input loop
///
/// A press may carry both a named key and the character it produced
/// (Space produces `' '`), only a key (F1), or only a character (`.`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyEvent {
    pub modifiers: Modifiers,
    pub key: Option<Key>,
    pub ch: Option<char>,
}

impl KeyEvent {
    /// Press of a named key
    pub const fn key(key: Key, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            key: Some(key),
            ch: None,
        }
    }

    /// Press producing a character, without modifiers
    pub const fn char(ch: char) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key: None,
            ch: Some(ch),
        }
    }

    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = Some(ch);
        self
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Synthesises the press a chord describes
    ///
    /// Returns `None` for the sentinel chord, which describes no press.
    pub fn from_chord(chord: &KeyChord) -> Option<Self> {
        match chord.primary() {
            Primary::Unresolved => None,
            Primary::Named(key) => Some(Self::key(key, chord.modifiers())),
            Primary::Literal(ch) => Some(Self::char(ch)),
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }
        match (self.key, self.ch) {
            (Some(key), _) => write!(f, "{}", key),
            (None, Some(ch)) => write!(f, "{}", ch),
            (None, None) => write!(f, "<none>"),
        }
    }
}
