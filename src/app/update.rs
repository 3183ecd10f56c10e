use super::messages::Message;
use super::state::App;
use crossterm::event::KeyEvent;

mod navigation;
mod shortcuts;

pub use shortcuts::KeyMap;

/// What the loop must do after a message has been reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Quit,
}

impl App {
    /// Decode a key press; unbound keys produce no message.
    pub fn message_for_key(&self, key: KeyEvent) -> Option<Message> {
        self.keymap.decode(key)
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NextSpread => self.handle_next_spread(),
            Message::PreviousSpread => self.handle_previous_spread(),
            Message::JumpToEnd => self.handle_jump_to_end(),
            Message::JumpToStart => self.handle_jump_to_start(),
            Message::Quit => return Effect::Quit,
        }
        Effect::Redraw
    }
}
