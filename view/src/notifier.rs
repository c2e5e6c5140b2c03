use crate::Context;
use crate::mcp::{Address, Message, Setting, Tool};
use crate::transport::Transport;

/// Asks the host to flip a setting of a tool.
///
/// A [`Notifier`] is a snapshot of the tool it was created from. Toggling
/// does not change it: the flipped value only shows up once the host
/// supplies an updated [`Tool`] and the row is rendered again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    tool: String,
    always_allow: bool,
    enabled_for_prompt: bool,
    address: Option<Address>,
}

impl Notifier {
    pub fn new(tool: &Tool, context: &Context) -> Self {
        Self {
            tool: tool.name.clone(),
            always_allow: tool.always_allow,
            enabled_for_prompt: tool.enabled_for_prompt,
            address: context.address(),
        }
    }

    /// Composes the message a toggle of the given setting would post.
    ///
    /// Returns `None` when there is no server to address.
    pub fn message(&self, setting: Setting) -> Option<Message> {
        let address = self.address.as_ref()?;

        let current = match setting {
            Setting::AlwaysAllow => self.always_allow,
            Setting::EnabledForPrompt => self.enabled_for_prompt,
        };

        Some(Message::toggle(setting, address, &self.tool, !current))
    }

    pub fn toggle(&self, setting: Setting, transport: &(impl Transport + ?Sized)) {
        let Some(message) = self.message(setting) else {
            log::trace!("no server to notify about {tool}", tool = self.tool);
            return;
        };

        let bytes = match message.serialize() {
            Ok(bytes) => bytes,
            Err(error) => {
                log::error!("{error}");
                return;
            }
        };

        log::debug!(
            "requesting {setting:?} = {value} for {server}/{tool}",
            value = message.value(),
            server = message.server_name(),
            tool = message.tool_name(),
        );

        if let Err(error) = transport.post(bytes) {
            log::warn!("{error}");
        }
    }

    pub fn toggle_enabled_for_prompt(&self, transport: &(impl Transport + ?Sized)) {
        self.toggle(Setting::EnabledForPrompt, transport);
    }

    pub fn toggle_always_allow(&self, transport: &(impl Transport + ?Sized)) {
        self.toggle(Setting::AlwaysAllow, transport);
    }
}
