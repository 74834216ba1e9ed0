//! Configure the behavior layer.

use crate::compose;
use crate::time::Duration;

/// The tunable knobs of the behavior layer.
///
/// The timing fields must stay synchronized with the companion stylesheet:
/// [`Settings::transition_duration`] mirrors the CSS transition duration of
/// the page slides, and changing one without the other leaves pages in a
/// half-finished visual state until cleanup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// The address every compose link targets and the copy control copies.
    pub destination: String,

    /// How long a page slide runs before cleanup.
    pub transition_duration: Duration,

    /// How long the copy-confirmation indicator stays visible.
    pub copied_duration: Duration,

    /// The viewport width, in logical pixels, beyond which the mobile menu
    /// closes unconditionally.
    pub menu_breakpoint: f32,

    /// The delay between the quote shortcut's page switch and the contact
    /// panel flipping to quote mode.
    ///
    /// Slightly longer than [`Settings::transition_duration`] so the panel
    /// flips after the slide has settled.
    pub quote_reveal_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        let transition_duration = Duration::from_millis(700);

        Self {
            destination: compose::DESTINATION.to_owned(),
            transition_duration,
            copied_duration: Duration::from_millis(1400),
            menu_breakpoint: 900.0,
            quote_reveal_delay: transition_duration + Duration::from_millis(50),
        }
    }
}
