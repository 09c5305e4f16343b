pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LocalStorage;

pub use crate::core::{engine::ViewEngine, pipeline::ChannelPipeline};
pub use crate::domain::model::{Block, Channel, Fragment, RenderTarget, User};
pub use crate::utils::error::{Result, ViewError};
