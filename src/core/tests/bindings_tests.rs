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

//! Binding assembly and matcher tests

use crate::core::{
    bindings::*,
    defaults::{COMMIT_COMPLETION, TRIGGER_COMPLETION_LIST},
    parser::PatternError,
    types::{Key, KeyChord, KeyEvent, Modifiers},
};

fn press(key: Key) -> KeyEvent {
    KeyEvent::key(key, Modifiers::NONE)
}

fn raw_with(category: BindingCategory, descriptors: &[&str]) -> RawKeyConfig {
    let mut raw = RawKeyConfig::default();
    raw.set(category, descriptors.iter().map(|d| d.to_string()).collect());
    raw
}

#[test]
fn test_category_names_round_trip() {
    for category in BindingCategory::ALL {
        assert_eq!(category.name().parse::<BindingCategory>(), Ok(category));
    }
    assert_eq!(
        "TRIGGER_COMPLETION_LIST".parse::<BindingCategory>(),
        Ok(BindingCategory::TriggerCompletionList)
    );
    assert_eq!(
        "open-docs".parse::<BindingCategory>(),
        Err(BindingError::UnknownCategory("open-docs".to_string()))
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let bindings = KeyBindings::build(&RawKeyConfig::default()).unwrap();

    assert_eq!(bindings, KeyBindings::default());
    assert_eq!(
        bindings.chords(BindingCategory::CommitCompletion).as_slice(),
        &COMMIT_COMPLETION
    );
    assert_eq!(
        bindings.chords(BindingCategory::TriggerCompletionList).as_slice(),
        &TRIGGER_COMPLETION_LIST
    );
    assert!(bindings.chords(BindingCategory::InsertNewline).is_empty());
    assert!(bindings.chords(BindingCategory::SubmitInput).is_empty());
}

#[test]
fn test_default_commit_completion_matches_exactly_its_chords() {
    let bindings = KeyBindings::default();
    let commit = BindingCategory::CommitCompletion;

    assert!(bindings.matches(&press(Key::Enter), commit));
    assert!(bindings.matches(&press(Key::Tab), commit));
    assert!(bindings.matches(&press(Key::Space).with_char(' '), commit));
    assert!(bindings.matches(&KeyEvent::char('.'), commit));
    assert!(bindings.matches(&KeyEvent::char('('), commit));

    assert!(!bindings.matches(&press(Key::Escape), commit));
    assert!(!bindings.matches(&KeyEvent::key(Key::Enter, Modifiers::CONTROL), commit));
    assert!(!bindings.matches(&KeyEvent::key(Key::Space, Modifiers::CONTROL), commit));
    assert!(!bindings.matches(&KeyEvent::char(','), commit));
    assert!(!bindings.matches(&press(Key::Letter('A')).with_char('a'), commit));
    assert!(!bindings.matches(&KeyEvent::char('.').with_modifiers(Modifiers::CONTROL), commit));
    assert!(!bindings.matches(&KeyEvent::char('(').with_modifiers(Modifiers::ALT), commit));
    assert!(bindings.matches(&KeyEvent::char('(').with_modifiers(Modifiers::SHIFT), commit));
}

#[test]
fn test_every_default_chord_matches_its_own_press() {
    let bindings = KeyBindings::default();

    for (category, chords) in bindings.iter() {
        for chord in chords {
            let event = KeyEvent::from_chord(chord).unwrap();
            assert!(bindings.matches(&event, category), "{chord} in {category}");
        }
        assert!(!bindings.matches(&press(Key::Escape), category));
    }
}

#[test]
fn test_configured_descriptors_replace_defaults() {
    let raw = raw_with(
        BindingCategory::TriggerCompletionList,
        &["Enter", "Control+Space"],
    );
    let bindings = KeyBindings::build(&raw).unwrap();
    let trigger = BindingCategory::TriggerCompletionList;

    assert!(bindings.matches(&press(Key::Enter), trigger));
    assert!(bindings.matches(&KeyEvent::key(Key::Space, Modifiers::CONTROL), trigger));
    assert!(!bindings.matches(&press(Key::Space), trigger));
    // Control+J default no longer applies
    assert!(!bindings.matches(
        &KeyEvent::key(Key::Letter('J'), Modifiers::CONTROL),
        trigger
    ));
    // Other categories keep their defaults
    assert_eq!(
        bindings.chords(BindingCategory::CommitCompletion).as_slice(),
        &COMMIT_COMPLETION
    );
}

#[test]
fn test_order_and_duplicates_preserved() {
    let raw = raw_with(BindingCategory::SubmitInput, &["Enter", "F5", "Enter"]);
    let bindings = KeyBindings::build(&raw).unwrap();

    assert_eq!(
        bindings.chords(BindingCategory::SubmitInput).as_slice(),
        &[
            KeyChord::key(Key::Enter),
            KeyChord::key(Key::F(5)),
            KeyChord::key(Key::Enter)
        ]
    );
}

#[test]
fn test_reordering_descriptors_does_not_change_matches() {
    let forward = KeyBindings::build(&raw_with(
        BindingCategory::InsertNewline,
        &["Shift+Enter", "Control+Enter", "."],
    ))
    .unwrap();
    let reversed = KeyBindings::build(&raw_with(
        BindingCategory::InsertNewline,
        &[".", "Control+Enter", "Shift+Enter"],
    ))
    .unwrap();

    let events = [
        KeyEvent::key(Key::Enter, Modifiers::SHIFT),
        KeyEvent::key(Key::Enter, Modifiers::CONTROL),
        KeyEvent::key(Key::Enter, Modifiers::ALT),
        press(Key::Enter),
        KeyEvent::char('.'),
        KeyEvent::char(','),
    ];

    for event in events {
        assert_eq!(
            forward.matches(&event, BindingCategory::InsertNewline),
            reversed.matches(&event, BindingCategory::InsertNewline),
            "{event}"
        );
    }
}

#[test]
fn test_sentinel_descriptors_fall_back_to_defaults() {
    let raw = raw_with(BindingCategory::CommitCompletion, &["", "  "]);
    let bindings = KeyBindings::build(&raw).unwrap();

    assert_eq!(
        bindings.chords(BindingCategory::CommitCompletion).as_slice(),
        &COMMIT_COMPLETION
    );
}

#[test]
fn test_sentinel_mixed_with_real_descriptor_is_dropped() {
    let raw = raw_with(BindingCategory::SubmitInput, &["", "Enter"]);
    let bindings = KeyBindings::build(&raw).unwrap();

    assert_eq!(
        bindings.chords(BindingCategory::SubmitInput).as_slice(),
        &[KeyChord::key(Key::Enter)]
    );
}

#[test]
fn test_malformed_descriptor_fails_whole_build() {
    let mut raw = raw_with(BindingCategory::CommitCompletion, &["Enter", "Control+."]);
    raw.push(BindingCategory::SubmitInput, "Enter");

    let err = KeyBindings::build(&raw).unwrap_err();
    assert_eq!(
        err,
        BindingError::InvalidPattern {
            category: BindingCategory::CommitCompletion,
            descriptor: "Control+.".to_string(),
            source: PatternError::UnsupportedModifierCombination,
        }
    );

    let message = err.to_string();
    assert!(message.contains("commit-completion"));
    assert!(message.contains("Control+."));
}

#[test]
fn test_malformed_descriptor_never_falls_back_to_defaults() {
    let raw = raw_with(BindingCategory::TriggerCompletionList, &["Control+Alt"]);

    assert!(matches!(
        KeyBindings::build(&raw),
        Err(BindingError::InvalidPattern {
            category: BindingCategory::TriggerCompletionList,
            source: PatternError::MissingPrimary,
            ..
        })
    ));
}

#[test]
fn test_dispatch_follows_priority() {
    let raw = raw_with(BindingCategory::SubmitInput, &["Enter"]);
    let bindings = KeyBindings::build(&raw).unwrap();
    let enter = press(Key::Enter);

    assert_eq!(
        bindings.dispatch(&enter, &BindingCategory::ALL),
        Some(BindingCategory::CommitCompletion)
    );
    // Completion list closed: commit is not available
    assert_eq!(
        bindings.dispatch(&enter, &[BindingCategory::InsertNewline, BindingCategory::SubmitInput]),
        Some(BindingCategory::SubmitInput)
    );
    assert_eq!(bindings.dispatch(&press(Key::Escape), &BindingCategory::ALL), None);
}

#[test]
fn test_raw_config_deserializes_kebab_case() {
    let raw: RawKeyConfig = serde_json::from_str(
        r#"{ "trigger-completion-list": ["Control+Space"], "submit-input": ["Enter"] }"#,
    )
    .unwrap();

    assert_eq!(raw.trigger_completion_list, vec!["Control+Space".to_string()]);
    assert_eq!(raw.submit_input, vec!["Enter".to_string()]);
    assert!(raw.commit_completion.is_empty());
}

#[test]
fn test_bindings_serialize_as_descriptor_lists() {
    let value = serde_json::to_value(KeyBindings::default()).unwrap();

    assert_eq!(
        value["trigger-completion-list"],
        serde_json::json!(["Control+Space", "Control+J"])
    );
    assert_eq!(value["insert-newline"], serde_json::json!([]));
}

#[test]
fn test_bindings_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KeyBindings>();
}
