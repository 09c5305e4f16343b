use crate::domain::model::{Attachment, Block, Embed, Fragment, LinkBlock, RenderTarget};

/// Two-level dispatch: top-level block kind first, then category
/// substring for attachments and embeds. Pure: at most one fragment per
/// block, no mutation of the input.
pub fn render_block(block: &Block) -> Option<Fragment> {
    match block {
        Block::Link(link) => Some(render_link(link)),
        // No rendering rule yet.
        Block::Image(_) => None,
        // No rendering rule yet.
        Block::Text(_) => None,
        Block::Attachment(block) => render_attachment(&block.attachment),
        Block::Embed(block) => render_embed(&block.embed),
    }
}

/// Renders every block in visiting order into the shared target.
pub fn render_blocks(blocks: &[Block], target: &mut RenderTarget) {
    for block in blocks {
        if let Some(fragment) = render_block(block) {
            target.append(fragment);
        }
    }
}

fn render_link(link: &LinkBlock) -> Fragment {
    let alt_text = link.image.alt_text.as_deref().unwrap_or("");

    Fragment::new(format!(
        r#"<li>
	<p><em>Link</em></p>
	<figure>
		<picture>
			<source media="(width < 500px)" srcset="{small}">
			<source media="(width < 1000px)" srcset="{medium}">
			<img alt="{alt}" src="{large}">
		</picture>
		<figcaption>
			<h3>{title}</h3>
			{body}
		</figcaption>
	</figure>
	<p><a href="{source}">See the original ↗</a></p>
</li>"#,
        small = link.image.small.src_2x,
        medium = link.image.medium.src_2x,
        large = link.image.large.src_2x,
        alt = alt_text,
        title = link.title,
        body = link.description.html,
        source = link.source.url,
    ))
}

// Category match order is a contract: video is tested before pdf and
// audio, so the first containment wins for ambiguous category strings.
fn render_attachment(attachment: &Attachment) -> Option<Fragment> {
    let content_type = &attachment.content_type;

    if content_type.contains("video") {
        Some(Fragment::new(format!(
            r#"<li>
	<p><em>Video</em></p>
	<video controls src="{}"></video>
</li>"#,
            attachment.url
        )))
    } else if content_type.contains("pdf") {
        // No rendering rule yet.
        None
    } else if content_type.contains("audio") {
        Some(Fragment::new(format!(
            r#"<li>
	<p><em>Audio</em></p>
	<audio controls src="{}"></audio>
</li>"#,
            attachment.url
        )))
    } else {
        None
    }
}

// Same contract here: video before rich.
fn render_embed(embed: &Embed) -> Option<Fragment> {
    if embed.kind.contains("video") {
        // Provider-supplied embed markup is passed through verbatim.
        Some(Fragment::new(format!(
            r#"<li>
	<p><em>Linked Video</em></p>
	{}
</li>"#,
            embed.html
        )))
    } else if embed.kind.contains("rich") {
        // No rendering rule yet.
        None
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        AttachmentBlock, EmbedBlock, HtmlText, ImageBlock, ImageSet, ImageVariant, Source,
        TextBlock,
    };

    fn image_set() -> ImageSet {
        ImageSet {
            alt_text: Some("a specimen".to_string()),
            small: ImageVariant {
                src_2x: "https://img.example/s.jpg".to_string(),
            },
            medium: ImageVariant {
                src_2x: "https://img.example/m.jpg".to_string(),
            },
            large: ImageVariant {
                src_2x: "https://img.example/l.jpg".to_string(),
            },
        }
    }

    fn link_block(title: &str, url: &str) -> Block {
        Block::Link(LinkBlock {
            title: title.to_string(),
            description: HtmlText {
                html: "<p>about this link</p>".to_string(),
            },
            image: image_set(),
            source: Source {
                url: url.to_string(),
            },
        })
    }

    fn attachment_block(content_type: &str, url: &str) -> Block {
        Block::Attachment(AttachmentBlock {
            attachment: Attachment {
                content_type: content_type.to_string(),
                url: url.to_string(),
            },
        })
    }

    fn embed_block(kind: &str, html: &str) -> Block {
        Block::Embed(EmbedBlock {
            embed: Embed {
                kind: kind.to_string(),
                html: html.to_string(),
            },
        })
    }

    #[test]
    fn link_renders_title_source_and_breakpoints() {
        let block = link_block("Specimen Sheet", "https://typography.example/specimen");

        let fragment = render_block(&block).unwrap();
        let html = fragment.as_html();

        assert!(html.contains("Specimen Sheet"));
        assert!(html.contains(r#"href="https://typography.example/specimen""#));
        assert!(html.contains(r#"srcset="https://img.example/s.jpg""#));
        assert!(html.contains(r#"srcset="https://img.example/m.jpg""#));
        assert!(html.contains(r#"src="https://img.example/l.jpg""#));
        assert!(html.contains("<p>about this link</p>"));
    }

    #[test]
    fn link_without_alt_text_renders_empty_alt() {
        let mut image = image_set();
        image.alt_text = None;
        let block = Block::Link(LinkBlock {
            title: "No alt".to_string(),
            description: HtmlText {
                html: String::new(),
            },
            image,
            source: Source {
                url: "https://example.com".to_string(),
            },
        });

        let fragment = render_block(&block).unwrap();
        assert!(fragment.as_html().contains(r#"alt="""#));
    }

    #[test]
    fn image_and_text_have_no_rendering_rule() {
        assert!(render_block(&Block::Image(ImageBlock { image: image_set() })).is_none());
        assert!(render_block(&Block::Text(TextBlock { content: None })).is_none());
    }

    #[test]
    fn video_attachment_uses_attachment_url_as_playback_source() {
        let block = attachment_block("video/mp4", "https://cdn.example/clip.mp4");

        let fragment = render_block(&block).unwrap();
        let html = fragment.as_html();

        assert!(html.contains("<video controls"));
        assert!(html.contains(r#"src="https://cdn.example/clip.mp4""#));
    }

    #[test]
    fn audio_attachment_renders_audio_element() {
        let block = attachment_block("audio/mpeg", "https://cdn.example/track.mp3");

        let fragment = render_block(&block).unwrap();
        assert!(fragment.as_html().contains("<audio controls"));
    }

    #[test]
    fn pdf_attachment_is_a_placeholder_not_an_error() {
        let block = attachment_block("application/pdf", "https://cdn.example/paper.pdf");
        assert!(render_block(&block).is_none());
    }

    #[test]
    fn unknown_attachment_category_renders_nothing() {
        let block = attachment_block("application/zip", "https://cdn.example/pack.zip");
        assert!(render_block(&block).is_none());
    }

    #[test]
    fn ambiguous_category_takes_the_video_branch_first() {
        // Contains both "video" and "audio": the video branch is tested
        // first and wins.
        let block = attachment_block("video/x-with-audio", "https://cdn.example/both.mkv");

        let fragment = render_block(&block).unwrap();
        assert!(fragment.as_html().contains("<video controls"));
        assert!(!fragment.as_html().contains("<audio"));
    }

    #[test]
    fn video_embed_passes_provider_markup_through_verbatim() {
        let provider_html = r#"<iframe src="https://player.example/v/123"></iframe>"#;
        let block = embed_block("video", provider_html);

        let fragment = render_block(&block).unwrap();
        assert!(fragment.as_html().contains(provider_html));
    }

    #[test]
    fn rich_embed_is_a_placeholder_not_an_error() {
        let block = embed_block("rich", "<blockquote>quoted</blockquote>");
        assert!(render_block(&block).is_none());
    }

    #[test]
    fn unknown_embed_category_renders_nothing() {
        let block = embed_block("photo", "<img>");
        assert!(render_block(&block).is_none());
    }

    #[test]
    fn render_blocks_preserves_input_order() {
        let blocks = vec![
            link_block("first", "https://example.com/1"),
            link_block("second", "https://example.com/2"),
            link_block("third", "https://example.com/3"),
        ];

        let mut target = RenderTarget::new();
        render_blocks(&blocks, &mut target);

        assert_eq!(target.len(), 3);
        assert!(target.fragments()[0].as_html().contains("first"));
        assert!(target.fragments()[1].as_html().contains("second"));
        assert!(target.fragments()[2].as_html().contains("third"));
    }

    #[test]
    fn placeholder_blocks_are_skipped_in_a_mixed_listing() {
        let blocks = vec![
            link_block("kept", "https://example.com/kept"),
            Block::Text(TextBlock { content: None }),
            attachment_block("application/pdf", "https://cdn.example/skip.pdf"),
            attachment_block("video/mp4", "https://cdn.example/kept.mp4"),
        ];

        let mut target = RenderTarget::new();
        render_blocks(&blocks, &mut target);

        assert_eq!(target.len(), 2);
        assert!(target.fragments()[0].as_html().contains("kept"));
        assert!(target.fragments()[1].as_html().contains("kept.mp4"));
    }
}
