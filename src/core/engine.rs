use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs the three pipeline stages in strict sequence:
/// fetch, render, write.
pub struct ViewEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ViewEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching channel data...");
        let snapshot = self.pipeline.extract().await?;
        tracing::info!(
            blocks = snapshot.blocks.len(),
            collaborators = snapshot.channel.collaborators.len(),
            "Fetched channel: {}",
            snapshot.channel.title
        );

        tracing::info!("Rendering page...");
        let document = self.pipeline.transform(snapshot).await?;
        tracing::info!(
            block_fragments = document.block_fragments,
            user_fragments = document.user_fragments,
            "Rendered document"
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(document).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
