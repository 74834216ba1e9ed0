//! The slide-out mobile navigation menu.

use log::trace;
use yj_site_core::dom::{Aria, Class, Target};

use crate::effect::Effect;

/// The mobile menu controller.
///
/// Open/closed state is mirrored into a marker class on the header, a
/// marker class on the panel, and ARIA attributes on both the trigger and
/// the panel; [`Menu::open`] and [`Menu::close`] are exact inverses.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    is_open: bool,
}

impl Menu {
    /// Creates a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The effects that mirror the current state into the document.
    ///
    /// Emitted once at boot so the ARIA attributes have a defined baseline
    /// before any interaction.
    pub fn sync(&self) -> Vec<Effect> {
        vec![
            Effect::SetAria(Target::MenuButton, Aria::Expanded(self.is_open)),
            Effect::SetAria(Target::MobileNav, Aria::Hidden(!self.is_open)),
        ]
    }

    /// Opens the menu. No-op when already open.
    pub fn open(&mut self) -> Vec<Effect> {
        if self.is_open {
            return Vec::new();
        }

        trace!("opening mobile menu");
        self.is_open = true;

        vec![
            Effect::AddClass(Target::Header, Class::IsMenuOpen),
            Effect::AddClass(Target::MobileNav, Class::IsOpen),
            Effect::SetAria(Target::MenuButton, Aria::Expanded(true)),
            Effect::SetAria(Target::MobileNav, Aria::Hidden(false)),
        ]
    }

    /// Closes the menu. No-op when already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open {
            return Vec::new();
        }

        trace!("closing mobile menu");
        self.is_open = false;

        vec![
            Effect::RemoveClass(Target::Header, Class::IsMenuOpen),
            Effect::RemoveClass(Target::MobileNav, Class::IsOpen),
            Effect::SetAria(Target::MenuButton, Aria::Expanded(false)),
            Effect::SetAria(Target::MobileNav, Aria::Hidden(true)),
        ]
    }

    /// Opens the menu when closed, closes it when open.
    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.is_open { self.close() } else { self.open() }
    }
}
