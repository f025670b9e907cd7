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

//! CLI entry point for repl-keybindings
//!
//! Provides a command-line interface for validating key configs, listing
//! the effective bindings, simulating key presses and writing a default
//! config.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use repl_keybindings::{
    config::{self, ConfigError, DEFAULT_CONFIG_PATH},
    core::{
        parse_key_chord, BindingCategory, ConflictDetector, KeyBindings, KeyEvent, RawKeyConfig,
    },
    logging,
};
use std::path::Path;
use tracing::info;

#[derive(Parser)]
#[command(name = "repl-keybindings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to key config file [default: ~/.config/repl/keys.conf]
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Per-category patterns that replace the config file's entries
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Key pattern that commits the selected completion (repeatable)
    #[arg(long, value_name = "KEY", global = true)]
    commit_completion: Vec<String>,

    /// Key pattern that opens the completion list (repeatable)
    #[arg(long, value_name = "KEY", global = true)]
    trigger_completion_list: Vec<String>,

    /// Key pattern that inserts a newline (repeatable)
    #[arg(long, value_name = "KEY", global = true)]
    insert_newline: Vec<String>,

    /// Key pattern that submits the input (repeatable)
    #[arg(long, value_name = "KEY", global = true)]
    submit_input: Vec<String>,
}

impl Overrides {
    fn apply(self, raw: &mut RawKeyConfig) {
        let entries = [
            (BindingCategory::CommitCompletion, self.commit_completion),
            (BindingCategory::TriggerCompletionList, self.trigger_completion_list),
            (BindingCategory::InsertNewline, self.insert_newline),
            (BindingCategory::SubmitInput, self.submit_input),
        ];

        for (category, descriptors) in entries {
            if !descriptors.is_empty() {
                info!(%category, "overriding config file from command line");
                raw.set(category, descriptors);
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the key config and report conflicting chords
    Check,

    /// List the effective key bindings
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate key presses against the bindings
    Test {
        /// Only test this category (default: dispatch across all)
        #[arg(short = 'k', long)]
        category: Option<BindingCategory>,

        /// Key presses written as patterns, e.g. "Control+Space" or "."
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Write a default key config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let explicit = cli.config.is_some();
    let path = config::expand_path(cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH));

    if let Commands::Init { force } = cli.command {
        return init_config(&path, force);
    }

    let mut raw = load_raw_config(&path, explicit)?;
    cli.overrides.apply(&mut raw);

    match cli.command {
        Commands::Check => check_bindings(&raw),
        Commands::List { json } => list_bindings(&raw, json)?,
        Commands::Test { category, keys } => test_keys(&raw, category, &keys)?,
        Commands::Init { .. } => {}
    }

    Ok(())
}

/// Read the config file, treating a missing default file as "all defaults"
fn load_raw_config(path: &Path, explicit: bool) -> anyhow::Result<RawKeyConfig> {
    match config::load_config_file(path) {
        Ok(raw) => {
            println!("{} Loaded config: {}", "→".cyan(), path.display());
            Ok(raw)
        }
        Err(ConfigError::NotFound(_)) if !explicit => {
            println!("{} No config at {}, using defaults", "→".cyan(), path.display());
            Ok(RawKeyConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load {}", path.display())),
    }
}

/// Build bindings or exit with a readable error
fn build_or_exit(raw: &RawKeyConfig) -> KeyBindings {
    match KeyBindings::build(raw) {
        Ok(bindings) => bindings,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Validate config and print cross-category conflicts
fn check_bindings(raw: &RawKeyConfig) {
    let bindings = build_or_exit(raw);
    let conflicts = ConflictDetector::from_bindings(&bindings).find_conflicts();

    println!("{} {}", "✓".green().bold(), "Key bindings are valid".bold());

    if conflicts.is_empty() {
        println!("{} No chord is bound to more than one action", "✓".green());
        return;
    }

    println!(
        "\n{} {} chord{} bound to several actions:\n",
        "⚠".yellow().bold(),
        conflicts.len(),
        if conflicts.len() == 1 { "" } else { "s" }
    );

    for conflict in &conflicts {
        let categories = conflict
            .categories
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {} → {}", conflict.chord.to_string().cyan().bold(), categories);
    }

    println!(
        "\n{}",
        "The first matching action in dispatch order wins for these chords.".yellow()
    );
}

/// Print the effective bindings
fn list_bindings(raw: &RawKeyConfig, json: bool) -> anyhow::Result<()> {
    let bindings = build_or_exit(raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&bindings)?);
        return Ok(());
    }

    for (category, chords) in bindings.iter() {
        let name = category.name().cyan().bold();
        if chords.is_empty() {
            println!("{} → {}", name, "(not bound, shell default)".dimmed());
        } else {
            println!("{} → {}", name, chords.to_string().green());
        }
    }

    Ok(())
}

/// Simulate key presses and report what fires
fn test_keys(
    raw: &RawKeyConfig,
    category: Option<BindingCategory>,
    keys: &[String],
) -> anyhow::Result<()> {
    let bindings = build_or_exit(raw);

    for key in keys {
        let chord = parse_key_chord(key).with_context(|| format!("Invalid key press '{}'", key))?;
        let Some(event) = KeyEvent::from_chord(&chord) else {
            println!("{} empty key press skipped", "-".dimmed());
            continue;
        };

        let press = event.to_string().bold();
        match category {
            Some(category) if bindings.matches(&event, category) => {
                println!("{} {} → {}", "✓".green(), press, category);
            }
            Some(category) => {
                println!("{} {} does not trigger {}", "✗".red(), press, category);
            }
            None => match bindings.dispatch(&event, &BindingCategory::ALL) {
                Some(category) => println!("{} {} → {}", "✓".green(), press, category),
                None => println!("{} {} → {}", "-".dimmed(), press, "no action".dimmed()),
            },
        }
    }

    Ok(())
}

/// Write the default template
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    config::write_default_config(path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote default key config: {}", "✓".green(), path.display());
    Ok(())
}
