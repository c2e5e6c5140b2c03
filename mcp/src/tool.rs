use crate::Value;
use crate::schema::Parameters;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A tool exposed by an MCP server, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub always_allow: bool,
    #[serde(default)]
    pub enabled_for_prompt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            always_allow: false,
            enabled_for_prompt: false,
            input_schema: None,
        }
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn always_allow(self, always_allow: bool) -> Self {
        Self {
            always_allow,
            ..self
        }
    }

    pub fn enabled_for_prompt(self, enabled_for_prompt: bool) -> Self {
        Self {
            enabled_for_prompt,
            ..self
        }
    }

    pub fn input_schema(self, input_schema: Value) -> Self {
        Self {
            input_schema: Some(input_schema),
            ..self
        }
    }

    /// Returns the current value of the given setting.
    pub fn setting(&self, setting: Setting) -> bool {
        match setting {
            Setting::AlwaysAllow => self.always_allow,
            Setting::EnabledForPrompt => self.enabled_for_prompt,
        }
    }

    /// Narrows the untyped input schema into its parameters.
    ///
    /// This never fails; anything malformed is treated as missing.
    pub fn parameters(&self) -> Parameters {
        Parameters::from_schema(self.input_schema.as_ref())
    }
}

/// The scope a server configuration is registered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Global,
    Project,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Global => "global",
            Source::Project => "project",
        })
    }
}

/// A per-tool setting that can be toggled by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Skip the confirmation step before the tool is invoked.
    AlwaysAllow,
    /// Include the tool definition in the prompt sent to the model.
    EnabledForPrompt,
}
