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

//! src/core/parser.rs
//!
//! Key chord descriptor parser
//!
//! Turns user-facing descriptors such as `"Control+F1"`, `"."` or
//! `"Alt+Enter"` into [`KeyChord`] values. The grammar is:
//!
//! ```text
//! descriptor := "" | part ("+" part)*
//! part       := named-key | modifier | single-character
//! ```
//!
//! Each part is classified in a fixed order: named key first, then modifier
//! name, then single-character literal. Names are case-insensitive.
//!
//! # Architecture
//! Classification produces a [`Token`]; the tokens are folded into a
//! [`Primary`] state (`Unresolved -> Named | Literal`) while modifiers
//! accumulate by union. The fold rejects a second primary immediately, the
//! remaining checks run once all parts are consumed.

use thiserror::Error;

use crate::core::types::{Key, KeyChord, Modifier, Modifiers, Primary};

/// Reasons a descriptor cannot be turned into a chord
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PatternError {
    /// Only modifiers were given
    #[error("no key or character given, only modifiers")]
    MissingPrimary,

    /// Two named keys, or two literal characters
    #[error("more than one key or character given")]
    AmbiguousPrimary,

    /// A named key together with a literal character
    #[error("a named key and a literal character cannot be combined")]
    ConflictingPrimary,

    /// A literal character with one or more modifiers
    #[error("literal characters do not support modifiers")]
    UnsupportedModifierCombination,

    /// A part that is neither a key, a modifier nor a single character
    #[error("unrecognized token '{0}'")]
    UnrecognizedToken(String),
}

/// One classified `+`-delimited part of a descriptor
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    Key(Key),
    Modifier(Modifier),
    Literal(char),
}

/// Classify a single descriptor part
///
/// Order matters: named keys win over modifiers, and both win over the
/// single-character fallback (`"A"` is the A key, not the literal `'A'`).
pub fn classify_token(part: &str) -> Result<Token, PatternError> {
    if let Some(key) = Key::from_name(part) {
        return Ok(Token::Key(key));
    }
    if let Some(modifier) = Modifier::from_name(part) {
        return Ok(Token::Modifier(modifier));
    }

    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Token::Literal(ch)),
        _ => Err(PatternError::UnrecognizedToken(part.to_string())),
    }
}

/// Parse one descriptor into a chord
///
/// An empty (or whitespace-only) descriptor yields
/// [`KeyChord::UNCONFIGURED`] rather than an error.
///
/// # Example
/// ```
/// use repl_keybindings::core::parser::{parse_key_chord, PatternError};
/// use repl_keybindings::core::{Key, KeyChord, Modifiers};
///
/// let chord = parse_key_chord("ctrl+space")?;
/// assert_eq!(chord, KeyChord::named(Key::Space, Modifiers::CONTROL));
///
/// assert_eq!(parse_key_chord("Control+."), Err(PatternError::UnsupportedModifierCombination));
/// # Ok::<(), PatternError>(())
/// ```
pub fn parse_key_chord(descriptor: &str) -> Result<KeyChord, PatternError> {
    if descriptor.trim().is_empty() {
        return Ok(KeyChord::UNCONFIGURED);
    }

    let mut modifiers = Modifiers::NONE;
    let mut primary = Primary::Unresolved;

    for part in descriptor.split('+') {
        primary = match (classify_token(part.trim())?, primary) {
            (Token::Modifier(modifier), current) => {
                modifiers |= modifier;
                current
            }
            (Token::Key(key), Primary::Unresolved) => Primary::Named(key),
            (Token::Literal(ch), Primary::Unresolved) => Primary::Literal(ch),
            (Token::Key(_), Primary::Named(_)) | (Token::Literal(_), Primary::Literal(_)) => {
                return Err(PatternError::AmbiguousPrimary);
            }
            (Token::Key(_), Primary::Literal(_)) | (Token::Literal(_), Primary::Named(_)) => {
                return Err(PatternError::ConflictingPrimary);
            }
        };
    }

    match primary {
        Primary::Unresolved => Err(PatternError::MissingPrimary),
        Primary::Named(key) => Ok(KeyChord::named(key, modifiers)),
        Primary::Literal(_) if !modifiers.is_empty() => {
            Err(PatternError::UnsupportedModifierCombination)
        }
        Primary::Literal(ch) => Ok(KeyChord::literal(ch)),
    }
}
