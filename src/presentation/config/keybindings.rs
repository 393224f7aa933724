use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-triggerable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    Reset,
}

/// Flat mapping from a key press to an action
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Bindings used when the configuration does not override them
    pub fn default_bindings() -> Self {
        let bindings = [
            ("<q>", Action::Quit),
            ("<esc>", Action::Quit),
            ("<ctrl-z>", Action::Suspend),
            ("<r>", Action::Reset),
        ];
        Self(
            bindings
                .iter()
                .filter_map(|(raw, action)| parse_key_event(raw).ok().map(|key| (key, *action)))
                .collect(),
        )
    }

    /// Add every default binding the user did not set
    pub fn merge_defaults(&mut self, defaults: &KeyBindings) {
        for (key, action) in defaults.iter() {
            self.entry(*key).or_insert(*action);
        }
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse a key written as `<q>`, `<ctrl-c>`, `<esc>` or `<alt-shift-x>`.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`: expected `<key>`"))?;
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`: empty key"));
    }

    let (modifiers, key) = extract_modifiers(inner);
    let code = parse_key_code(key).ok_or_else(|| format!("Unable to parse `{raw}`"))?;

    let modifiers = match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers | KeyModifiers::SHIFT,
        _ => modifiers,
    };
    Ok(KeyEvent::new(code, modifiers))
}

fn extract_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        if lower.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lower.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lower.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (modifiers, current)
}

fn parse_key_code(raw: &str) -> Option<KeyCode> {
    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}
