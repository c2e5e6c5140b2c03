use crate::mcp::{Address, Source};

/// What the parent list knows about the server a row belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub server_name: Option<String>,
    pub server_source: Option<Source>,
    pub always_allow_mcp: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server(self, name: impl Into<String>) -> Self {
        Self {
            server_name: Some(name.into()),
            ..self
        }
    }

    pub fn source(self, source: Source) -> Self {
        Self {
            server_source: Some(source),
            ..self
        }
    }

    pub fn always_allow_mcp(self, always_allow_mcp: bool) -> Self {
        Self {
            always_allow_mcp,
            ..self
        }
    }

    /// The name of the server, if there is one to notify.
    ///
    /// An empty name counts as no server at all.
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn effective_source(&self) -> Source {
        self.server_source.unwrap_or_default()
    }

    pub fn address(&self) -> Option<Address> {
        Some(Address {
            server: self.server_name()?.to_owned(),
            source: self.effective_source(),
        })
    }

    pub fn shows_prompt_toggle(&self) -> bool {
        self.server_name().is_some()
    }

    pub fn shows_always_allow(&self) -> bool {
        self.server_name().is_some() && self.always_allow_mcp
    }
}
