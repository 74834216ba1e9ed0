//! Named sections of the single-page layout.
//!
//! Exactly one [`Page`] is active at any settled moment. The order of
//! [`Page::ORDER`] decides the slide [`Direction`] of a transition.

use std::fmt;

use crate::dom::Class;

/// One named, mutually-exclusive content section of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Page {
    /// The landing section.
    #[default]
    Inicio,
    /// The services section.
    Servicios,
    /// The portfolio section.
    Portafolio,
    /// The "about us" section.
    Quienes,
    /// The clients section.
    Clientes,
    /// The contact and quote section.
    Cotizacion,
}

impl Page {
    /// Every page, in presentation order.
    ///
    /// A transition to a page later in this sequence slides forward; to an
    /// earlier one, backward.
    pub const ORDER: &'static [Page] = &[
        Page::Inicio,
        Page::Servicios,
        Page::Portafolio,
        Page::Quienes,
        Page::Clientes,
        Page::Cotizacion,
    ];

    /// The `data-page` name of this page, as used in the document.
    pub const fn name(self) -> &'static str {
        match self {
            Page::Inicio => "inicio",
            Page::Servicios => "servicios",
            Page::Portafolio => "portafolio",
            Page::Quienes => "quienes",
            Page::Clientes => "clientes",
            Page::Cotizacion => "cotizacion",
        }
    }

    /// Resolves a raw `data-page` name to a [`Page`].
    ///
    /// Returns `None` for names outside the fixed set; callers treat that as
    /// a benign no-op, never an error.
    pub fn parse(name: &str) -> Option<Page> {
        Page::ORDER.iter().copied().find(|page| page.name() == name)
    }

    /// The position of this page within [`Page::ORDER`].
    pub fn position(self) -> usize {
        Page::ORDER
            .iter()
            .position(|page| *page == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The slide direction of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The target enters from the right, the old page leaves to the left.
    #[default]
    Forward,
    /// The target enters from the left, the old page leaves to the right.
    Backward,
}

impl Direction {
    /// Computes the direction of a transition between two raw page names.
    ///
    /// A name absent from [`Page::ORDER`] always resolves to
    /// [`Direction::Forward`].
    #[must_use]
    pub fn between(from: &str, to: &str) -> Direction {
        match (Page::parse(from), Page::parse(to)) {
            (Some(from), Some(to)) if to.position() < from.position() => Direction::Backward,
            _ => Direction::Forward,
        }
    }

    /// The class that places an entering page off-screen on its start side.
    pub const fn enter_class(self) -> Class {
        match self {
            Direction::Forward => Class::EnterFromRight,
            Direction::Backward => Class::EnterFromLeft,
        }
    }

    /// The class that slides a leaving page off-screen on its exit side.
    pub const fn leave_class(self) -> Class {
        match self {
            Direction::Forward => Class::LeaveToLeft,
            Direction::Backward => Class::LeaveToRight,
        }
    }
}
