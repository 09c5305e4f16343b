use serde::Deserialize;
use serde_json::Value;

use crate::utils::error::Result;

/// Channel metadata as returned by `GET /channels/<slug>` (v3 schema:
/// descriptions arrive pre-rendered under `description.html`).
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub title: String,
    pub description: HtmlText,
    pub counts: Counts,
    pub slug: String,
    pub owner: User,
    #[serde(default)]
    pub collaborators: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlText {
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Counts {
    pub blocks: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub first_name: String,
    pub slug: String,
    pub avatar_image: AvatarImage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvatarImage {
    pub display: String,
}

/// Contents listing envelope: blocks arrive nested under a top-level
/// `data` array.
#[derive(Debug, Deserialize)]
pub struct ContentsPage {
    pub data: Vec<Value>,
}

/// One channel block. The kind set is closed: adding a kind is a
/// compile-checked change to every match on this enum, not a silently
/// skipped string branch.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    Link(LinkBlock),
    Image(ImageBlock),
    Text(TextBlock),
    Attachment(AttachmentBlock),
    Embed(EmbedBlock),
}

impl Block {
    /// Classifies one raw contents entry. An unrecognized top-level kind
    /// is skipped (`Ok(None)`); a recognized kind with malformed or
    /// missing fields is a fatal deserialization error.
    pub fn from_value(value: Value) -> Result<Option<Block>> {
        match value.get("type").and_then(Value::as_str) {
            Some("Link" | "Image" | "Text" | "Attachment" | "Embed") => {
                Ok(Some(serde_json::from_value(value)?))
            }
            kind => {
                tracing::debug!(?kind, "skipping unrecognized block kind");
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkBlock {
    pub title: String,
    pub description: HtmlText,
    pub image: ImageSet,
    pub source: Source,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSet {
    pub alt_text: Option<String>,
    pub small: ImageVariant,
    pub medium: ImageVariant,
    pub large: ImageVariant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageVariant {
    pub src_2x: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageBlock {
    pub image: ImageSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextBlock {
    pub content: Option<HtmlText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentBlock {
    pub attachment: Attachment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    pub content_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedBlock {
    pub embed: Embed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: String,
    pub html: String,
}

/// One self-contained unit of markup for a rendered block or user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

/// Ordered, append-only fragment sink. Passed explicitly into render
/// functions so they stay testable without a live page.
#[derive(Debug, Default)]
pub struct RenderTarget {
    fragments: Vec<Fragment>,
}

impl RenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::as_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Everything `extract` pulls from the API for one channel.
#[derive(Debug, Clone)]
pub struct ChannelSnapshot {
    pub channel: Channel,
    pub blocks: Vec<Block>,
}

/// Output of `transform`: the assembled document plus fragment counts
/// for logging.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub block_fragments: usize,
    pub user_fragments: usize,
}
