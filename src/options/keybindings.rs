use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Key bindings: which physical key (as a DOM-style code string such as
/// `"KeyD"` or `"Escape"`) issues which [`KeyAction`].
///
/// A `[keybindings.bindings]` table in a preset replaces the whole map, so
/// a preset that binds one action leaves the others unbound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action → key code. Ordered so saved presets are stable.
    pub bindings: BTreeMap<KeyAction, String>,
    /// Key code → action, derived from `bindings`.
    #[serde(skip)]
    by_key: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        [
            (KeyAction::ClosePanel, "Escape"),
            (KeyAction::ToggleDarkMode, "KeyD"),
            (KeyAction::ToggleGyroscope, "KeyG"),
            (KeyAction::ToggleAudio, "KeyM"),
            (KeyAction::ToggleFallbackView, "KeyL"),
        ]
        .into_iter()
        .fold(
            Self {
                bindings: BTreeMap::new(),
                by_key: FxHashMap::default(),
            },
            |mut opts, (action, key)| {
                opts.bind(action, key);
                opts
            },
        )
    }
}

impl KeybindingOptions {
    /// Derive the key → action index from `bindings`. Must run after
    /// deserializing. When two actions share a key the later one in action
    /// order wins and a warning is logged.
    pub fn rebuild_reverse_map(&mut self) {
        self.by_key.clear();
        for (&action, key) in &self.bindings {
            if let Some(prev) = self.by_key.insert(key.clone(), action) {
                log::warn!("key {key} bound to both {prev:?} and {action:?}");
            }
        }
    }

    /// Bind `action` to `key`, replacing its previous key. An action that
    /// held `key` before is left unbound.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        if let Some(old) = self.bindings.insert(action, key.to_owned()) {
            let _ = self.by_key.remove(&old);
        }
        if let Some(prev) = self.by_key.insert(key.to_owned(), action) {
            if prev != action {
                log::debug!("key {key} moved from {prev:?} to {action:?}");
                let _ = self.bindings.remove(&prev);
            }
        }
    }

    /// Action issued by `key`, if bound.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_drops_the_old_key() {
        let mut keys = KeybindingOptions::default();
        keys.bind(KeyAction::ToggleDarkMode, "KeyT");
        assert_eq!(keys.lookup("KeyT"), Some(KeyAction::ToggleDarkMode));
        assert_eq!(keys.lookup("KeyD"), None);
        assert_eq!(keys.key_for(KeyAction::ToggleDarkMode), Some("KeyT"));
    }

    #[test]
    fn taking_a_key_unbinds_its_holder() {
        let mut keys = KeybindingOptions::default();
        keys.bind(KeyAction::ToggleAudio, "KeyD");
        assert_eq!(keys.lookup("KeyD"), Some(KeyAction::ToggleAudio));
        assert_eq!(keys.key_for(KeyAction::ToggleDarkMode), None);
        assert_eq!(keys.lookup("KeyM"), None);

        let mut rebuilt = keys.clone();
        rebuilt.rebuild_reverse_map();
        assert_eq!(rebuilt, keys);
    }
}
