// src/cli/mod.rs
use std::path::PathBuf;
use clap::{Args as ClapArgs, Parser};

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;
use crate::models::PolicyOverrides;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON file with policy overrides
    #[arg(long, global = true, env = "PASSGEN_POLICY_FILE")]
    pub policy: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: PolicyArgs,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}

// Per-field policy overrides; these win over the policy file and environment
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct PolicyArgs {
    /// Do not reject passwords above the maximum length
    #[arg(long, global = true)]
    pub no_length_limit: bool,

    /// Allowed special characters
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub special_characters: Option<String>,

    /// Number of special characters appended
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub num_special: Option<i64>,

    /// Words fetched per batch
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub byte_length: Option<i64>,

    /// Largest number in the suffix (inclusive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub number_max: Option<i64>,

    /// Minimum password length
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub min_length: Option<i64>,

    /// Maximum password length
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_length: Option<i64>,
}

impl PolicyArgs {
    pub fn to_overrides(&self) -> PolicyOverrides {
        PolicyOverrides {
            enforce_length_limit: if self.no_length_limit { Some(false) } else { None },
            special_characters: self.special_characters.clone(),
            num_special_characters: self.num_special,
            password_byte_length: self.byte_length,
            random_number_max: self.number_max,
            min_password_length: self.min_length,
            max_password_length: self.max_length,
        }
    }
}
