//! reading whitespace-separated problem instances

pub mod error;
pub mod tokens;

pub use error::InputError;
pub use tokens::{InputFile, Tokens};
