pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, CodeserverArgs, Commands, DevmodeArgs, LaunchArgs};
