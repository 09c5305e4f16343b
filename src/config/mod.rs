#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storage::LocalStorage;
