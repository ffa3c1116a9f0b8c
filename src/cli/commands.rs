// src/cli/commands.rs
use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate compliant passwords
    Generate {
        /// How many passwords to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Word list: a text file, a JSON array, or a directory of words-a?.json shards
        #[arg(long, env = "PASSGEN_WORDS_PATH")]
        words: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many rejected candidates
        #[arg(long)]
        max_attempts: Option<usize>,
    },

    /// Check a password against the policy
    Validate {
        /// Password to check
        #[arg(required = true, allow_hyphen_values = true)]
        password: String,
    },

    /// Print the resolved policy
    Policy,
}
