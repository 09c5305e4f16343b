use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "arena-view")]
#[command(about = "Renders a public Are.na channel into a static HTML page")]
pub struct CliConfig {
    /// Channel slug, the tail of the channel URL.
    #[arg(long)]
    pub slug: String,

    #[arg(long, default_value = "https://api.are.na/v3")]
    pub api_base: String,

    /// Blocks fetched per listing request (single page, no pagination).
    #[arg(long, default_value = "100")]
    pub per: usize,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn channel_slug(&self) -> &str {
        &self.slug
    }

    fn page_size(&self) -> usize {
        self.per
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_non_empty_string("slug", &self.slug)?;
        validation::validate_positive_number("per", self.per, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
