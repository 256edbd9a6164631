pub mod commands;
pub mod directory;
pub mod generate;

pub use commands::{Cli, Commands};
