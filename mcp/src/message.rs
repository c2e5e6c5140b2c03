use crate::{Bytes, Setting, Source};

use serde::{Deserialize, Serialize};

/// A request for the host to change a setting of a tool.
///
/// Messages are one-way. The host applies the change on its own and
/// eventually reports the new state by supplying an updated [`Tool`](crate::Tool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Message {
    ToggleToolAlwaysAllow {
        server_name: String,
        source: Source,
        tool_name: String,
        always_allow: bool,
    },
    ToggleToolEnabledForPrompt {
        server_name: String,
        source: Source,
        tool_name: String,
        is_enabled: bool,
    },
}

/// The server a [`Message`] is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub server: String,
    pub source: Source,
}

impl Message {
    pub fn toggle(
        setting: Setting,
        address: &Address,
        tool_name: impl Into<String>,
        value: bool,
    ) -> Self {
        let server_name = address.server.clone();
        let source = address.source;
        let tool_name = tool_name.into();

        match setting {
            Setting::AlwaysAllow => Self::ToggleToolAlwaysAllow {
                server_name,
                source,
                tool_name,
                always_allow: value,
            },
            Setting::EnabledForPrompt => Self::ToggleToolEnabledForPrompt {
                server_name,
                source,
                tool_name,
                is_enabled: value,
            },
        }
    }

    pub fn setting(&self) -> Setting {
        match self {
            Self::ToggleToolAlwaysAllow { .. } => Setting::AlwaysAllow,
            Self::ToggleToolEnabledForPrompt { .. } => Setting::EnabledForPrompt,
        }
    }

    /// The requested value of the [`setting`](Self::setting).
    pub fn value(&self) -> bool {
        match self {
            Self::ToggleToolAlwaysAllow { always_allow, .. } => *always_allow,
            Self::ToggleToolEnabledForPrompt { is_enabled, .. } => *is_enabled,
        }
    }

    pub fn server_name(&self) -> &str {
        match self {
            Self::ToggleToolAlwaysAllow { server_name, .. }
            | Self::ToggleToolEnabledForPrompt { server_name, .. } => server_name,
        }
    }

    pub fn source(&self) -> Source {
        match self {
            Self::ToggleToolAlwaysAllow { source, .. }
            | Self::ToggleToolEnabledForPrompt { source, .. } => *source,
        }
    }

    pub fn tool_name(&self) -> &str {
        match self {
            Self::ToggleToolAlwaysAllow { tool_name, .. }
            | Self::ToggleToolEnabledForPrompt { tool_name, .. } => tool_name,
        }
    }

    pub fn serialize(&self) -> serde_json::Result<Bytes> {
        serde_json::to_vec(self).map(Bytes::from_owner)
    }

    pub fn deserialize(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }
}
