//! A renderer-agnostic runtime for the YJ Publicidad site behavior layer.
//!
//! The runtime drives the types of [`yj_site_core`] with the Elm loop:
//! hosts translate user interactions into [`Message`]s, feed them to
//! [`App::update`], and apply the returned [`Effect`]s to the document.
//! Ambient inputs (keyboard, viewport, animation frames) arrive through
//! [`App::handle_event`]; timers the runtime started come back as
//! [`Message::TimerFired`].
//!
//! Every controller is a plain state machine with no document handle, so the
//! whole behavior layer runs under test without a rendering surface.

pub mod contact;
pub mod copy;
pub mod effect;
pub mod menu;
pub mod router;

mod app;

pub use app::{App, Message};
pub use effect::{Effect, Timer};
