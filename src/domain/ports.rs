use crate::domain::model::{ChannelSnapshot, RenderedPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn channel_slug(&self) -> &str;
    fn page_size(&self) -> usize;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ChannelSnapshot>;
    async fn transform(&self, snapshot: ChannelSnapshot) -> Result<RenderedPage>;
    async fn load(&self, document: RenderedPage) -> Result<String>;
}
