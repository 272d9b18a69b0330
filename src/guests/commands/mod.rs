use crate::model::GuestList;

pub mod create;
pub mod init;
pub mod read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command hands back to the caller.
///
/// `guests` is the list as it stands after the command ran. `added` is set
/// only by `create`.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub guests: GuestList,
    pub added: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_guests(mut self, guests: GuestList) -> Self {
        self.guests = guests;
        self
    }

    pub fn with_added(mut self, name: impl Into<String>) -> Self {
        self.added = Some(name.into());
        self
    }
}
