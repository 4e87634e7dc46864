//! Config subcommands handler

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use toml_edit::DocumentMut;

use playreel::config::{describe_setting, migrate_config, MigrateResult};
use playreel::tui::current_theme;
use playreel::tui::theme::ansi;
use playreel::Config;

/// Print the effective configuration, noting where it comes from.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let origin = if path.exists() {
        format!("# {}", path.display())
    } else {
        format!("# {} does not exist; showing defaults", path.display())
    };
    println!("{}", theme.secondary_text(&origin));
    println!("{}", theme.primary_text(&toml::to_string_pretty(config)?));
    report_problems(config);
    Ok(())
}

/// Open the config file in `$VISUAL`/`$EDITOR`, then check what was saved.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    if !path.exists() {
        Config::default().save_to(&path)?;
        println!(
            "{}",
            theme.secondary_text(&format!("Created {} with default settings", path.display()))
        );
    }

    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to start editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }

    match Config::load_from(&path) {
        Ok(config) => {
            println!("{}", theme.success_text("Config saved and valid."));
            report_problems(&config);
        }
        Err(e) => eprintln!(
            "{}",
            theme.error_text(&format!(
                "{:#}\nOther commands fail until this is fixed; run `playreel config edit` again.",
                e
            ))
        ),
    }
    Ok(())
}

/// Add settings the file is missing, after showing them and asking.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;

    if !path.exists() {
        println!(
            "{}",
            theme.primary_text(&format!("No config file at {}.", path.display()))
        );
        if !confirm("Create it with default settings?")? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }
        Config::default().save_to(&path)?;
        println!("{}", theme.success_text("Config file created."));
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let result = migrate_config(&content)?;
    let merged: Config = toml::from_str(&result.content).with_context(|| {
        format!(
            "{} has settings playreel cannot read; fix them with `playreel config edit`",
            path.display()
        )
    })?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config already has every setting."));
        report_problems(&merged);
        return Ok(());
    }

    println!(
        "{}",
        theme.primary_text(&format!(
            "{} missing setting(s) for {}:",
            result.added_fields.len(),
            path.display()
        ))
    );
    print_additions(&result);
    report_problems(&merged);

    if !confirm("Add them?")? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }
    write_config(&path, &result.content)?;
    println!("{}", theme.success_text("Config updated."));
    Ok(())
}

/// List added settings by section with their default value and meaning.
fn print_additions(result: &MigrateResult) {
    let theme = current_theme();
    let doc: Option<DocumentMut> = result.content.parse().ok();
    let mut section_shown = String::new();

    for field in &result.added_fields {
        let Some((section, key)) = field.split_once('.') else {
            continue;
        };
        if section != section_shown {
            let note = if result.sections_added.iter().any(|s| s == section) {
                " (new section)"
            } else {
                ""
            };
            println!("  [{}]{}", section, theme.secondary_text(note));
            section_shown = section.to_string();
        }

        let value = doc
            .as_ref()
            .and_then(|doc| doc.get(section))
            .and_then(|table| table.get(key))
            .and_then(|item| item.as_value())
            .map(|value| value.to_string().trim().to_string())
            .unwrap_or_default();
        let doc_line = describe_setting(field)
            .map(|doc| format!("  # {}", doc))
            .unwrap_or_default();
        println!(
            "{}+ {} = {}{}{}",
            ansi::GREEN,
            key,
            value,
            ansi::RESET,
            theme.secondary_text(&doc_line)
        );
    }
}

fn report_problems(config: &Config) {
    let theme = current_theme();
    for problem in config.problems() {
        eprintln!("{}", theme.error_text(&format!("warning: {}", problem)));
    }
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write config: {}", path.display()))
}

/// Ask a yes/no question on the terminal; anything but y/yes is a no.
///
/// Without a terminal on stdin nothing is asked and the answer is no.
fn confirm(question: &str) -> Result<bool> {
    let theme = current_theme();
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("stdin is not a terminal; run from a terminal to apply")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(question));
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
