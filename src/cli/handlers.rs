// src/cli/handlers.rs
use std::fs;
use std::io::Write;
use std::path::Path;
use serde::Serialize;

use crate::cli::{Args, CliCommand};
use crate::core::{AppConfig, PolicyConfig};
use crate::error::{PassgenError, Result};
use crate::generators::{check_password, PasswordGenerator, RandomSource, SeededRandom, ThreadRandom};
use crate::models::{PolicyOverrides, PolicyViolation};
use crate::utils::truncate_string;
use crate::words::WordList;

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    passwords: &'a [String],
}

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    valid: bool,
    violations: &'a [PolicyViolation],
}

// Run the parsed command. Returns false when a validated password fails the policy.
pub fn run(args: &Args, app: &AppConfig, out: &mut dyn Write) -> Result<bool> {
    let policy = resolve_policy(args, app)?;
    log::debug!("Resolved policy: {:?}", policy);

    match &args.command {
        CliCommand::Generate { count, words, seed, max_attempts } => {
            let words_path = words.as_deref().or(app.words_path.as_deref());
            let attempts = max_attempts.unwrap_or(app.max_attempts);
            let passwords = match seed {
                Some(seed) => generate(&policy, app, *count, words_path, attempts, SeededRandom::new(*seed))?,
                None => generate(&policy, app, *count, words_path, attempts, ThreadRandom)?,
            };
            handle_generate(&passwords, args.json, out)?;
            Ok(true)
        }
        CliCommand::Validate { password } => handle_validate(&policy, password, args.json, out),
        CliCommand::Policy => {
            handle_policy(&policy, args.json, out)?;
            Ok(true)
        }
    }
}

/// Environment, then the policy file, then command-line flags.
pub fn resolve_policy(args: &Args, app: &AppConfig) -> Result<PolicyConfig> {
    let mut overrides = app.policy.clone();
    if let Some(path) = &args.policy {
        overrides = overrides.merge(load_policy_file(path)?);
    }
    overrides = overrides.merge(args.overrides.to_overrides());

    let policy = PolicyConfig::resolve(Some(&overrides))?;
    Ok(policy)
}

pub fn load_policy_file(path: &Path) -> Result<PolicyOverrides> {
    let content = fs::read_to_string(path)
        .map_err(|e| PassgenError::PolicyFile(format!("{}: {}", path.display(), e)))?;
    let overrides = serde_json::from_str(&content)
        .map_err(|e| PassgenError::PolicyFile(format!("{}: {}", path.display(), e)))?;
    log::info!("Loaded policy overrides from {}", path.display());
    Ok(overrides)
}

pub fn generate<R: RandomSource>(
    policy: &PolicyConfig,
    app: &AppConfig,
    count: usize,
    words_path: Option<&Path>,
    max_attempts: usize,
    mut rng: R,
) -> Result<Vec<String>> {
    let words = match words_path {
        Some(path) => WordList::from_path(path, &mut rng)?,
        None => WordList::builtin(),
    };
    log::info!("Generating {} password(s) from {} words", count, words.len());

    let mut generator = PasswordGenerator::with_sources(policy.clone(), words, rng)
        .max_attempts(max_attempts)
        .max_word_batches(app.max_word_batches);

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generator.get_password()?);
    }
    Ok(passwords)
}

pub fn handle_generate(passwords: &[String], json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &GenerateOutput { passwords })?;
        writeln!(out)?;
        return Ok(());
    }
    for password in passwords {
        writeln!(out, "{}", password)?;
    }
    Ok(())
}

pub fn handle_validate(policy: &PolicyConfig, password: &str, json: bool, out: &mut dyn Write) -> Result<bool> {
    let report = check_password(password, policy);

    if json {
        serde_json::to_writer(
            &mut *out,
            &ValidateOutput {
                valid: report.is_valid(),
                violations: &report.violations,
            },
        )?;
        writeln!(out)?;
    } else if report.is_valid() {
        writeln!(out, "✅ {} is compliant", truncate_string(password, 40))?;
    } else {
        writeln!(out, "❌ {} is not compliant: {}", truncate_string(password, 40), report)?;
    }

    Ok(report.is_valid())
}

pub fn handle_policy(policy: &PolicyConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    let overrides = policy.to_overrides();
    if json {
        serde_json::to_writer_pretty(&mut *out, &overrides)?;
        writeln!(out)?;
        return Ok(());
    }

    let (word_min, word_max) = policy.word_length_window();
    writeln!(out, "Length:             {}..={}", policy.min_password_length(), policy.max_password_length())?;
    writeln!(out, "Length limit:       {}", if policy.enforce_length_limit() { "enforced" } else { "off" })?;
    writeln!(out, "Special characters: {}", policy.special_characters().iter().collect::<String>())?;
    writeln!(out, "Specials appended:  {}", policy.num_special_characters())?;
    writeln!(out, "Number suffix:      0..={}", policy.random_number_max())?;
    writeln!(out, "Words per batch:    {}", policy.password_byte_length())?;
    writeln!(out, "Word length:        {}..={}", word_min, word_max)?;
    Ok(())
}
