//! The visual tree of a single tool row.
use crate::locale::{Key, Locale};
use crate::mcp::Tool;
use crate::transport::Transport;
use crate::{Context, Notifier};

use serde::Serialize;

use std::fmt;

/// Renders a tool as a [`Row`].
///
/// Rendering is a pure function of its inputs. The returned row carries
/// the handlers of its toggles; see [`Row::click`].
pub fn render(tool: &Tool, context: &Context, locale: &(impl Locale + ?Sized)) -> Row {
    let prompt_toggle = context.shows_prompt_toggle().then(|| Switch {
        checked: tool.enabled_for_prompt,
        title: locale.translate(Key::TogglePromptInclusion).into_owned(),
    });

    let always_allow = context.shows_always_allow().then(|| Checkbox {
        checked: tool.always_allow,
        label: locale.translate(Key::AlwaysAllow).into_owned(),
    });

    let description = tool
        .description
        .as_ref()
        .filter(|description| !description.is_empty())
        .cloned();

    let parameters = tool.parameters();

    let parameters = (!parameters.is_empty()).then(|| {
        let fallback = locale.translate(Key::NoDescription);

        ParameterList {
            label: locale.translate(Key::Parameters).into_owned(),
            entries: parameters
                .iter()
                .map(|parameter| ParameterEntry {
                    name: parameter.name.to_owned(),
                    is_required: parameter.is_required,
                    description: parameter.description.unwrap_or(&fallback).to_owned(),
                })
                .collect(),
        }
    });

    Row {
        header: Header {
            icon: Icon::SymbolMethod,
            name: tool.name.clone(),
            prompt_toggle,
            always_allow,
        },
        description,
        parameters,
        notifier: Notifier::new(tool, context),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub header: Header,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterList>,
    #[serde(skip)]
    notifier: Notifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub icon: Icon,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_toggle: Option<Switch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_allow: Option<Checkbox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    SymbolMethod,
}

/// An on/off switch with a tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switch {
    pub checked: bool,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkbox {
    pub checked: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterList {
    pub label: String,
    pub entries: Vec<ParameterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterEntry {
    pub name: String,
    pub is_required: bool,
    pub description: String,
}

/// A clickable area of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Header,
    PromptToggle,
    AlwaysAllow,
    Description,
    Parameters,
}

/// Whether a click should reach the ancestors of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Stop,
    Continue,
}

impl Row {
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Handles a click on the given area of the row.
    ///
    /// Rows usually live inside an expandable list item, so clicks on the
    /// header never propagate. Clicking a toggle that is not shown does
    /// nothing.
    pub fn click(&self, control: Control, transport: &(impl Transport + ?Sized)) -> Propagation {
        match control {
            Control::Header => Propagation::Stop,
            Control::PromptToggle => {
                if self.header.prompt_toggle.is_some() {
                    self.notifier.toggle_enabled_for_prompt(transport);
                }

                Propagation::Stop
            }
            Control::AlwaysAllow => {
                if self.header.always_allow.is_some() {
                    self.notifier.toggle_always_allow(transport);
                }

                Propagation::Stop
            }
            Control::Description | Control::Parameters => Propagation::Continue,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;

        if let Some(description) = &self.description {
            write!(f, "\n    {description}")?;
        }

        if let Some(parameters) = &self.parameters {
            write!(f, "\n    {}", parameters.label.to_uppercase())?;

            for entry in &parameters.entries {
                let marker = if entry.is_required { "*" } else { "" };

                write!(
                    f,
                    "\n      {name}{marker}  {description}",
                    name = entry.name,
                    description = entry.description
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)?;

        if let Some(switch) = &self.prompt_toggle {
            let state = if switch.checked { "on" } else { "off" };

            write!(f, "  ({state})")?;
        }

        if let Some(checkbox) = &self.always_allow {
            let mark = if checkbox.checked { "x" } else { " " };

            write!(f, "  [{mark}] {label}", label = checkbox.label)?;
        }

        Ok(())
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Icon::SymbolMethod => "ƒ",
        })
    }
}
