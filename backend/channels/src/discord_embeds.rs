//! Discord Embed Builder
//!
//! Maps platform-neutral replies onto Discord interaction responses, clamping
//! every piece to Discord's embed limits.

use serenity::all::{CreateEmbed, CreateInteractionResponseMessage, Timestamp};

use gwscan_core::{Card, DisplaySection, Reply, ReplyBody};

/// Discord accepts at most ten embeds per message.
pub const MAX_EMBEDS: usize = 10;
const MAX_FIELDS: usize = 25;
const MAX_TITLE: usize = 256;
const MAX_FIELD_NAME: usize = 256;
const MAX_FIELD_VALUE: usize = 1024;
const MAX_CONTENT: usize = 2000;

pub fn render_reply(reply: &Reply) -> CreateInteractionResponseMessage {
    let message = CreateInteractionResponseMessage::new().ephemeral(reply.ephemeral);
    match &reply.body {
        ReplyBody::Text(text) => message.content(clamp(text, MAX_CONTENT)),
        ReplyBody::Card(card) => message.embeds(render_card(card)),
    }
}

/// The card as a main embed followed by one embed per section group.
/// Groups beyond [`MAX_EMBEDS`] are dropped.
pub fn render_card(card: &Card) -> Vec<CreateEmbed> {
    let mut main = CreateEmbed::new()
        .title(clamp(&card.title, MAX_TITLE))
        .url(&card.url)
        .colour(card.color)
        .fields(fields(&card.sections));

    if let Some(image) = &card.image {
        main = main.image(image);
    }
    if let Some(thumbnail) = &card.thumbnail {
        main = main.thumbnail(thumbnail);
    }
    if card.timestamped {
        main = main.timestamp(Timestamp::now());
    }

    let mut embeds = vec![main];
    embeds.extend(card.groups.iter().take(MAX_EMBEDS - 1).map(|group| {
        CreateEmbed::new()
            .title(clamp(&group.title, MAX_TITLE))
            .colour(card.color)
            .fields(fields(&group.sections))
    }));
    embeds
}

fn fields(sections: &[DisplaySection]) -> Vec<(String, String, bool)> {
    sections
        .iter()
        .take(MAX_FIELDS)
        .map(|s| {
            (
                clamp(&s.name, MAX_FIELD_NAME),
                clamp(&s.value, MAX_FIELD_VALUE),
                s.inline,
            )
        })
        .collect()
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
fn clamp(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
