//! Lookup of the user-facing strings of a row.
use serde::Deserialize;

use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TogglePromptInclusion,
    AlwaysAllow,
    Parameters,
    NoDescription,
}

impl Key {
    pub const ALL: [Key; 4] = [
        Key::TogglePromptInclusion,
        Key::AlwaysAllow,
        Key::Parameters,
        Key::NoDescription,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Key::TogglePromptInclusion => "mcp:tool.togglePromptInclusion",
            Key::AlwaysAllow => "mcp:tool.alwaysAllow",
            Key::Parameters => "mcp:tool.parameters",
            Key::NoDescription => "mcp:tool.noDescription",
        }
    }
}

pub trait Locale {
    fn translate(&self, key: Key) -> Cow<'_, str>;
}

impl<F> Locale for F
where
    F: Fn(Key) -> String,
{
    fn translate(&self, key: Key) -> Cow<'_, str> {
        Cow::Owned(self(key))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn translate(&self, key: Key) -> Cow<'_, str> {
        Cow::Borrowed(match key {
            Key::TogglePromptInclusion => "Toggle inclusion in prompt",
            Key::AlwaysAllow => "Always allow",
            Key::Parameters => "Parameters",
            Key::NoDescription => "No description available",
        })
    }
}

/// A flat table of translations keyed by [`Key::as_str`].
///
/// Missing entries fall back to [`English`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }

    pub fn insert(&mut self, key: Key, text: impl Into<String>) {
        let _ = self.entries.insert(key.as_str().to_owned(), text.into());
    }
}

impl Locale for Catalog {
    fn translate(&self, key: Key) -> Cow<'_, str> {
        match self.entries.get(key.as_str()) {
            Some(text) => Cow::Borrowed(text),
            None => English.translate(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_falls_back_to_english() {
        let catalog = Catalog::from_json(
            br#"{ "mcp:tool.alwaysAllow": "Toujours autoriser", "mcp:tool.unknown": "?" }"#,
        )
        .unwrap();

        assert_eq!(catalog.translate(Key::AlwaysAllow), "Toujours autoriser");
        assert_eq!(catalog.translate(Key::Parameters), "Parameters");
    }

    #[test]
    fn closures_translate() {
        let keys = |key: Key| key.as_str().to_owned();

        for key in Key::ALL {
            assert_eq!(keys.translate(key), key.as_str());
        }
    }
}
