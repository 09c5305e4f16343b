use crate::core::{page, render};
use crate::domain::model::{
    Block, Channel, ChannelSnapshot, ContentsPage, RenderTarget, RenderedPage,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, ViewError};
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Response};

pub struct ChannelPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ChannelPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    // Caching is explicitly disabled on every channel request.
    async fn fetch(&self, url: &str) -> Result<Response> {
        tracing::debug!(url, "issuing channel API request");
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, url, "channel API response");

        if !status.is_success() {
            return Err(ViewError::UnexpectedStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_channel(&self) -> Result<Channel> {
        let url = format!(
            "{}/channels/{}",
            self.config.api_base(),
            self.config.channel_slug()
        );
        let channel = self.fetch(&url).await?.json().await?;
        Ok(channel)
    }

    async fn fetch_blocks(&self) -> Result<Vec<Block>> {
        // position_desc asks the API for newest-first so the listing can
        // be rendered in delivered order.
        let url = format!(
            "{}/channels/{}/contents?per={}&sort=position_desc",
            self.config.api_base(),
            self.config.channel_slug(),
            self.config.page_size()
        );
        let listing: ContentsPage = self.fetch(&url).await?.json().await?;

        let mut blocks = Vec::with_capacity(listing.data.len());
        for value in listing.data {
            if let Some(block) = Block::from_value(value)? {
                blocks.push(block);
            }
        }
        Ok(blocks)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ChannelPipeline<S, C> {
    async fn extract(&self) -> Result<ChannelSnapshot> {
        // The metadata and contents fetches have no ordering dependency
        // between them; each is internally sequential.
        let (channel, blocks) = tokio::try_join!(self.fetch_channel(), self.fetch_blocks())?;
        Ok(ChannelSnapshot { channel, blocks })
    }

    async fn transform(&self, snapshot: ChannelSnapshot) -> Result<RenderedPage> {
        let slots = page::channel_slots(&snapshot.channel);

        let mut users = RenderTarget::new();
        page::render_users(
            &snapshot.channel.collaborators,
            &snapshot.channel.owner,
            &mut users,
        );

        let mut blocks = RenderTarget::new();
        render::render_blocks(&snapshot.blocks, &mut blocks);

        let html = page::render_document(&slots, &users, &blocks);
        Ok(RenderedPage {
            html,
            block_fragments: blocks.len(),
            user_fragments: users.len(),
        })
    }

    async fn load(&self, document: RenderedPage) -> Result<String> {
        let output_path = format!("{}/index.html", self.config.output_path());
        self.storage
            .write_file("index.html", document.html.as_bytes())
            .await?;
        Ok(output_path)
    }
}
