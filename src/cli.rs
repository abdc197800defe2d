// src/cli.rs
pub mod args;
pub mod value_enum;

pub use args::{Args, Command};
pub use value_enum::OutputFormat;
