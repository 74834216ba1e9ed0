//! The behavior layer of the YJ Publicidad single-page site, as a headless
//! state machine.
//!
//! Everything the site does between a click and a style change lives here:
//! the mobile menu, the directional page transitions, the two-panel contact
//! window, the email compose links, and the copy-address flow. None of it
//! touches a document. The [`App`] consumes [`Message`]s and returns
//! [`Effect`]s; a host (a DOM binding, or a test harness) performs them and
//! feeds ambient [`Event`]s back in.
//!
//! # Overview
//!
//! The loop is the Elm one:
//!
//! 1. Create an [`App`] from [`Settings`] and apply the effects of
//!    [`App::boot`] to the document.
//! 2. Translate each interaction into a [`Message`] and call
//!    [`App::update`].
//! 3. Perform the returned [`Effect`]s in order. Effects address elements
//!    by role ([`Target`]); an effect on an element the document does not
//!    have is skipped, which is the whole degradation story.
//! 4. Deliver keyboard, resize, and animation-frame events through
//!    [`App::handle_event`], and elapsed [`Timer`]s as
//!    [`Message::TimerFired`].
//!
//! # Example
//!
//! A host switching to the services page:
//!
//! ```
//! use yj_site::{App, Effect, Event, Message, Page, Settings, Timer};
//! use yj_site::core::window;
//! use yj_site::core::time::Instant;
//!
//! let mut app = App::new(Settings::default());
//!
//! // The initial render: closed menu, landing page active.
//! let _ = app.boot();
//! assert_eq!(app.router().current(), Some(Page::Inicio));
//!
//! // A click on a navigation link starts a slide transition...
//! let effects = app.update(Message::NavLinkPressed("servicios".into()));
//! assert!(effects.contains(&Effect::RequestRedraw));
//!
//! // ...the next animation frame releases it...
//! let _ = app.handle_event(Event::Window(window::Event::RedrawRequested(
//!     Instant::now(),
//! )));
//!
//! // ...and the cleanup timer settles it.
//! let _ = app.update(Message::TimerFired(Timer::TransitionCleanup));
//! assert_eq!(app.router().current(), Some(Page::Servicios));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use yj_site_core as core;
pub use yj_site_runtime as runtime;

pub use crate::core::clipboard;
pub use crate::core::compose;
pub use crate::core::{
    Aria, Class, Direction, Event, FormData, NavSet, Page, Panel, Settings, Size, Target,
};
pub use crate::runtime::{App, Effect, Message, Timer};
