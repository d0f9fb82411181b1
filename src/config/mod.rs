pub mod profile_file;

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
