//! Handle events of the user interface.

use crate::keyboard;
use crate::window;

/// An ambient user interface event.
///
/// These are the document-level inputs the behavior layer subscribes to,
/// as opposed to the per-control interactions carried by runtime messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Keyboard(keyboard::Event),

    /// A viewport event.
    Window(window::Event),
}
