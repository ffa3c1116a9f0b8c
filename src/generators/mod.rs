// src/generators/mod.rs
pub mod password;
pub mod random;
pub mod validation;

pub use password::{GenerationError, PasswordGenerator};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use validation::{check_password, is_valid_password};
