//! The two-panel contact window.

use log::trace;
use yj_site_core::contact::Panel;
use yj_site_core::dom::{Class, Target};

use crate::effect::Effect;

/// The contact window controller.
///
/// Toggles which of the two sub-views (contact info vs. quote form) is
/// visible. Switching is idempotent; re-opening the shown panel only resets
/// its scroll.
#[derive(Debug, Clone, Default)]
pub struct ContactWindow {
    panel: Panel,
}

impl ContactWindow {
    /// Creates a window showing the contact-info sub-view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sub-view currently shown.
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Shows the given sub-view.
    pub fn open(&mut self, panel: Panel) -> Vec<Effect> {
        trace!("opening contact panel {panel:?}");
        self.panel = panel;

        let marker = match panel {
            Panel::Cotizacion => Effect::AddClass(Target::ContactWindow, Class::IsQuote),
            Panel::Contactos => Effect::RemoveClass(Target::ContactWindow, Class::IsQuote),
        };

        vec![marker, Effect::ScrollToTop(Target::ContactView(panel))]
    }
}
