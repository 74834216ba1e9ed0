//! Copy the destination address with a transient confirmation.

use log::warn;
use yj_site_core::clipboard;
use yj_site_core::dom::{Class, Target};
use yj_site_core::time::Duration;

use crate::effect::{Effect, Timer};

/// The copy-address flow.
///
/// The clipboard write itself is asynchronous on the host side: the runtime
/// emits [`Effect::WriteClipboard`] and learns the outcome later through
/// [`AddressCopy::resolved`]. Success reveals the confirmation indicator for
/// a fixed duration; because [`Effect::StartTimer`] restarts a pending timer
/// of the same kind, rapid repeated copies extend a single display cycle
/// instead of stacking indicators.
#[derive(Debug, Clone)]
pub struct AddressCopy {
    destination: String,
    shown_for: Duration,
}

impl AddressCopy {
    /// Creates the flow for the given destination address.
    pub fn new(destination: impl Into<String>, shown_for: Duration) -> Self {
        Self {
            destination: destination.into(),
            shown_for,
        }
    }

    /// The address handed to the clipboard.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Requests the clipboard write.
    pub fn request(&self) -> Vec<Effect> {
        vec![Effect::WriteClipboard(self.destination.clone())]
    }

    /// Handles the outcome of the clipboard write.
    ///
    /// On failure the user gets a blocking notice with the address in plain
    /// text, so a manual copy is always possible.
    pub fn resolved(&self, outcome: Result<(), clipboard::Error>) -> Vec<Effect> {
        match outcome {
            Ok(()) => vec![
                Effect::AddClass(Target::CopiedIndicator, Class::Show),
                Effect::StartTimer(Timer::HideCopied, self.shown_for),
            ],
            Err(error) => {
                warn!("clipboard write failed: {error}");

                vec![Effect::ShowCopyFallback(format!(
                    "No se pudo copiar automáticamente. Copia manualmente: {}",
                    self.destination
                ))]
            }
        }
    }

    /// Hides the confirmation indicator once its timer fires.
    pub fn hide(&self) -> Vec<Effect> {
        vec![Effect::RemoveClass(Target::CopiedIndicator, Class::Show)]
    }
}
