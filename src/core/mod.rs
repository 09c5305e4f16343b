pub mod engine;
pub mod page;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    Block, Channel, ChannelSnapshot, Fragment, RenderTarget, RenderedPage, User,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
