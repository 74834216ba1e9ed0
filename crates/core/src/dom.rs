//! Role-addressed document targets and the state they carry.
//!
//! The behavior layer never holds element handles. Effects name their target
//! by the role it plays in the document contract, and the host resolves each
//! role to zero or more concrete elements. A role that resolves to nothing is
//! ignored by the host; that is the degradation path for optional elements,
//! not an error.

use crate::contact::Panel;
use crate::page::Page;

/// One of the two parallel sets of navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavSet {
    /// The links in the desktop header bar.
    Desktop,
    /// The links inside the slide-out mobile panel.
    Mobile,
}

/// A role-addressed element (or collection of elements) in the document.
///
/// Singular targets resolve to at most one element. The plural targets
/// ([`Target::Pages`], [`Target::NavLinks`]) resolve to every element of the
/// collection, and class effects apply to each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// The site header container.
    Header,
    /// The mobile menu trigger control.
    MenuButton,
    /// The slide-out mobile navigation panel.
    MobileNav,
    /// The container of one named page.
    Page(Page),
    /// Every page container.
    Pages,
    /// The navigation link for one page within one link set.
    NavLink(NavSet, Page),
    /// Every navigation link of one link set.
    NavLinks(NavSet),
    /// The contact container holding the two sub-views.
    ContactWindow,
    /// One of the two ordered sub-views of the contact container.
    ContactView(Panel),
    /// The transient "address copied" indicator.
    CopiedIndicator,
}

/// A marker class toggled on a [`Target`].
///
/// These names must stay in sync with the companion stylesheet; the behavior
/// layer only toggles them, the stylesheet gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Class {
    /// Marks the header while the mobile menu is open.
    IsMenuOpen,
    /// Marks the mobile panel as open.
    IsOpen,
    /// Marks the single active page, or the nav links pointing at it.
    IsActive,
    /// Marks the contact container while the quote sub-view is shown.
    IsQuote,
    /// Reveals the copy-confirmation indicator.
    Show,
    /// Places an entering page off-screen to the right.
    EnterFromRight,
    /// Places an entering page off-screen to the left.
    EnterFromLeft,
    /// Slides a leaving page off-screen to the left.
    LeaveToLeft,
    /// Slides a leaving page off-screen to the right.
    LeaveToRight,
}

impl Class {
    /// The four transition-animation classes, as cleaned up between runs.
    pub const ANIMATION: &'static [Class] = &[
        Class::EnterFromRight,
        Class::EnterFromLeft,
        Class::LeaveToLeft,
        Class::LeaveToRight,
    ];

    /// The class name as written in the stylesheet.
    pub const fn as_str(self) -> &'static str {
        match self {
            Class::IsMenuOpen => "is-menu-open",
            Class::IsOpen => "is-open",
            Class::IsActive => "is-active",
            Class::IsQuote => "is-quote",
            Class::Show => "show",
            Class::EnterFromRight => "enter-from-right",
            Class::EnterFromLeft => "enter-from-left",
            Class::LeaveToLeft => "leave-to-left",
            Class::LeaveToRight => "leave-to-right",
        }
    }
}

/// An ARIA attribute write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aria {
    /// `aria-expanded`, set on the menu trigger.
    Expanded(bool),
    /// `aria-hidden`, set on the mobile panel.
    Hidden(bool),
}

impl Aria {
    /// The attribute name.
    pub const fn name(self) -> &'static str {
        match self {
            Aria::Expanded(_) => "aria-expanded",
            Aria::Hidden(_) => "aria-hidden",
        }
    }

    /// The attribute value, already rendered as the document expects it.
    pub const fn value(self) -> &'static str {
        match self {
            Aria::Expanded(true) | Aria::Hidden(true) => "true",
            Aria::Expanded(false) | Aria::Hidden(false) => "false",
        }
    }
}
