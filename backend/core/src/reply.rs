//! Platform-neutral reply payload.
//!
//! Channel adapters render these into their native UI (Discord embeds);
//! nothing here knows about a particular chat platform.

use serde::Serialize;

/// One labeled piece of a rendered reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySection {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl DisplaySection {
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), inline: false }
    }

    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), inline: true }
    }
}

/// A titled block of sections built from one item of a nested list
/// (e.g. one token transfer of a transaction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionGroup {
    pub title: String,
    pub sections: Vec<DisplaySection>,
}

/// Rich reply: title, explorer link and ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub url: String,
    pub color: u32,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub sections: Vec<DisplaySection>,
    pub groups: Vec<SectionGroup>,
    /// Stamp the card with the time it was rendered.
    pub timestamped: bool,
}

impl Card {
    pub fn new(title: impl Into<String>, url: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            color,
            image: None,
            thumbnail: None,
            sections: Vec::new(),
            groups: Vec::new(),
            timestamped: true,
        }
    }

    /// Use the same logo as image and thumbnail.
    pub fn with_logo(mut self, logo_url: impl Into<String>) -> Self {
        let logo = logo_url.into();
        self.image = Some(logo.clone());
        self.thumbnail = Some(logo);
        self
    }

    pub fn with_sections(mut self, sections: Vec<DisplaySection>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_groups(mut self, groups: Vec<SectionGroup>) -> Self {
        self.groups = groups;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ReplyBody {
    Text(String),
    Card(Card),
}

/// What a command sends back for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub body: ReplyBody,
    /// Only visible to the requester.
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { body: ReplyBody::Text(text.into()), ephemeral: false }
    }

    pub fn card(card: Card) -> Self {
        Self { body: ReplyBody::Card(card), ephemeral: false }
    }

    pub fn private(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            ReplyBody::Text(t) => Some(t),
            ReplyBody::Card(_) => None,
        }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match &self.body {
            ReplyBody::Card(c) => Some(c),
            ReplyBody::Text(_) => None,
        }
    }
}
