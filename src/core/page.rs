use crate::domain::model::{Channel, Fragment, RenderTarget, User};

/// The four identified metadata slots of the channel page. Filling them
/// has no ordering dependency on block rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSlots {
    pub title: String,
    pub description_html: String,
    pub block_count: String,
    pub canonical_url: String,
}

pub fn channel_slots(channel: &Channel) -> ChannelSlots {
    ChannelSlots {
        title: channel.title.clone(),
        description_html: channel.description.html.clone(),
        block_count: channel.counts.blocks.to_string(),
        canonical_url: format!("https://www.are.na/channel/{}", channel.slug),
    }
}

/// One user card, appended to an explicit sink so the function can be
/// exercised without a page.
pub fn render_user(user: &User, target: &mut RenderTarget) {
    target.append(Fragment::new(format!(
        r#"<address>
	<img src="{avatar}">
	<h3>{name}</h3>
	<p><a href="https://are.na/{slug}">Are.na profile ↗</a></p>
</address>"#,
        avatar = user.avatar_image.display,
        name = user.first_name,
        slug = user.slug,
    )));
}

/// Collaborators first, in listing order, then the owner. Pure append:
/// no dedup, no sort.
pub fn render_users(collaborators: &[User], owner: &User, target: &mut RenderTarget) {
    for collaborator in collaborators {
        render_user(collaborator, target);
    }
    render_user(owner, target);
}

/// Interpolates the metadata slots, user cards, and block list into one
/// complete HTML document.
pub fn render_document(slots: &ChannelSlots, users: &RenderTarget, blocks: &RenderTarget) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
	<meta charset="utf-8">
	<meta name="viewport" content="width=device-width, initial-scale=1">
	<title>{title}</title>
</head>
<body>
	<header>
		<h1 id="channel-title">{title}</h1>
		<div id="channel-description">{description}</div>
		<p><span id="channel-count">{count}</span> blocks</p>
		<p><a id="channel-link" href="{link}">View on Are.na ↗</a></p>
	</header>
	<section id="channel-users">
{users}
	</section>
	<ul id="channel-blocks">
{blocks}
	</ul>
</body>
</html>
"#,
        title = slots.title,
        description = slots.description_html,
        count = slots.block_count,
        link = slots.canonical_url,
        users = users.to_html(),
        blocks = blocks.to_html(),
    )
}
