//! Access the clipboard.
//!
//! The runtime never talks to a system clipboard directly; it emits a write
//! request and the host performs it through whatever backend it has. This
//! module defines the capability the host implements, plus two ready-made
//! implementations for environments without a clipboard and for tests.

use thiserror::Error;

/// A failed clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No clipboard backend is available in this environment.
    #[error("no clipboard backend is available")]
    Unavailable,

    /// The environment refused the write (e.g. a denied permission).
    #[error("clipboard access was denied")]
    Denied,
}

/// A buffer for short-term storage and transfer within and between
/// applications.
pub trait Clipboard {
    /// Writes the given text contents to the clipboard.
    fn write_text(&mut self, contents: String) -> Result<(), Error>;
}

/// A null implementation of the [`Clipboard`] trait.
///
/// Every write fails with [`Error::Unavailable`], which exercises the
/// manual-copy fallback path.
#[derive(Debug, Clone, Copy)]
pub struct Null;

impl Clipboard for Null {
    fn write_text(&mut self, _contents: String) -> Result<(), Error> {
        Err(Error::Unavailable)
    }
}

/// An in-memory [`Clipboard`] that records the last written text.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    contents: Option<String>,
}

impl Memory {
    /// Creates an empty in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last written text, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for Memory {
    fn write_text(&mut self, contents: String) -> Result<(), Error> {
        self.contents = Some(contents);

        Ok(())
    }
}
