use super::super::messages::Message;
use crate::config::KeyBindings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// A single parsed binding such as `ctrl+n` or `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shortcut {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl Shortcut {
    fn parse(raw: &str) -> Option<Shortcut> {
        let normalized = normalize_shortcut_token(raw);
        let mut modifiers = KeyModifiers::NONE;
        let mut code = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                key => code = Some(parse_key_code(key)?),
            }
        }

        code.map(|code| Shortcut { code, modifiers })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let pressed = match key.code {
            KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
            other => other,
        };
        pressed == self.code && key.modifiers == self.modifiers
    }
}

fn normalize_shortcut_token(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace("spacebar", "space")
}

fn parse_key_code(token: &str) -> Option<KeyCode> {
    let code = match token {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Maps key presses to reader commands using the configured bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(Shortcut, Message)>,
}

impl KeyMap {
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let entries = [
            (&keys.quit, &defaults.quit, Message::Quit),
            (&keys.next_spread, &defaults.next_spread, Message::NextSpread),
            (
                &keys.previous_spread,
                &defaults.previous_spread,
                Message::PreviousSpread,
            ),
            (&keys.jump_end, &defaults.jump_end, Message::JumpToEnd),
            (&keys.jump_start, &defaults.jump_start, Message::JumpToStart),
        ];

        let bindings = entries
            .into_iter()
            .filter_map(|(raw, fallback, message)| {
                let shortcut = Shortcut::parse(raw).or_else(|| {
                    warn!(binding = %raw, ?message, "Unrecognized key binding; using default");
                    Shortcut::parse(fallback)
                })?;
                Some((shortcut, message))
            })
            .collect();
        KeyMap { bindings }
    }

    /// Ctrl+C always quits since raw mode swallows the interrupt signal.
    pub fn decode(&self, key: KeyEvent) -> Option<Message> {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return Some(Message::Quit);
        }
        self.bindings
            .iter()
            .find(|(shortcut, _)| shortcut.matches(&key))
            .map(|&(_, message)| message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_cover_navigation() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default());
        let none = KeyModifiers::NONE;
        assert_eq!(keymap.decode(press(KeyCode::Char('q'), none)), Some(Message::Quit));
        assert_eq!(keymap.decode(press(KeyCode::Right, none)), Some(Message::NextSpread));
        assert_eq!(keymap.decode(press(KeyCode::Left, none)), Some(Message::PreviousSpread));
        assert_eq!(keymap.decode(press(KeyCode::End, none)), Some(Message::JumpToEnd));
        assert_eq!(keymap.decode(press(KeyCode::Home, none)), Some(Message::JumpToStart));
    }

    #[test]
    fn unbound_keys_decode_to_nothing() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default());
        assert_eq!(keymap.decode(press(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(keymap.decode(press(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default());
        assert_eq!(
            keymap.decode(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
    }

    #[test]
    fn parses_modified_and_named_bindings() {
        assert_eq!(
            Shortcut::parse(" Ctrl+N "),
            Some(Shortcut {
                code: KeyCode::Char('n'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            Shortcut::parse("SpaceBar"),
            Some(Shortcut {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE,
            })
        );
        assert_eq!(Shortcut::parse("pagedown").map(|s| s.code), Some(KeyCode::PageDown));
        assert_eq!(Shortcut::parse("nonsense"), None);
        assert_eq!(Shortcut::parse("ctrl+"), None);
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default());
        assert_eq!(
            keymap.decode(press(KeyCode::Right, KeyModifiers::SHIFT)),
            None
        );
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let keys = KeyBindings {
            next_spread: "space".to_string(),
            previous_spread: "b".to_string(),
            jump_end: "bogus-key".to_string(),
            ..KeyBindings::default()
        };
        let keymap = KeyMap::from_bindings(&keys);
        let none = KeyModifiers::NONE;
        assert_eq!(keymap.decode(press(KeyCode::Char(' '), none)), Some(Message::NextSpread));
        assert_eq!(keymap.decode(press(KeyCode::Char('b'), none)), Some(Message::PreviousSpread));
        assert_eq!(keymap.decode(press(KeyCode::Right, none)), None);
        // An unparseable binding falls back to its default key.
        assert_eq!(keymap.decode(press(KeyCode::End, none)), Some(Message::JumpToEnd));
    }
}
