//! Listen and react to keyboard events.

use smol_str::SmolStr;

/// A keyboard key, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// The Escape key.
    Escape,
    /// A character-producing key.
    Character(SmolStr),
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A key was pressed.
    KeyPressed {
        /// The key identifier.
        key: Key,
    },
}
