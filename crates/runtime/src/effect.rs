//! The side effects a host performs on behalf of the runtime.

use yj_site_core::dom::{Aria, Class, Target};
use yj_site_core::time::Duration;

/// A named one-shot timer owned by the runtime.
///
/// Starting a timer that is already pending restarts it; two timers of the
/// same kind never run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Ends a page transition: deactivates the old page and returns the
    /// router to idle.
    TransitionCleanup,
    /// Hides the copy-confirmation indicator.
    HideCopied,
    /// Flips the contact panel to quote mode after the quote shortcut's
    /// page switch has settled.
    RevealQuote,
}

/// A declarative instruction for the host.
///
/// Effects are returned by [`App::update`] in order and applied by the host
/// before the next message is dispatched. An effect addressed at an element
/// the document does not contain is silently ignored; that is how optional
/// parts of the page contract degrade.
///
/// [`App::update`]: crate::App::update
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add a marker class to the target (each element of a plural target).
    AddClass(Target, Class),

    /// Remove a marker class from the target (each element of a plural
    /// target).
    RemoveClass(Target, Class),

    /// Write an ARIA attribute on the target.
    SetAria(Target, Aria),

    /// Reset the target's internal scroll position to the top, without
    /// animation.
    ScrollToTop(Target),

    /// Force a synchronous layout read of the target.
    ///
    /// This pins the target's just-applied starting position before the
    /// next frame mutates its classes; without it the browser coalesces
    /// both class changes into one style pass and the slide snaps instead
    /// of animating.
    SyncLayout(Target),

    /// Request one animation frame, delivered back as
    /// [`window::Event::RedrawRequested`].
    ///
    /// [`window::Event::RedrawRequested`]: yj_site_core::window::Event::RedrawRequested
    RequestRedraw,

    /// Start (or restart) a one-shot timer, delivered back as
    /// [`Message::TimerFired`] after the duration elapses.
    ///
    /// [`Message::TimerFired`]: crate::Message::TimerFired
    StartTimer(Timer, Duration),

    /// Cancel a pending timer, if any.
    CancelTimer(Timer),

    /// Write the text to the system clipboard, reporting the outcome back
    /// as [`Message::CopyResolved`].
    ///
    /// [`Message::CopyResolved`]: crate::Message::CopyResolved
    WriteClipboard(String),

    /// Open the URL in a new browsing context.
    ///
    /// The new context must not receive a reference back to its opener
    /// (`noopener` isolation).
    OpenDetached(String),

    /// Show a blocking notice with the manual-copy text, used when the
    /// clipboard write failed.
    ShowCopyFallback(String),
}
