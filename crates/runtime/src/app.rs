//! The application: one state struct, one message enum, one update step.

use log::debug;
use smol_str::SmolStr;
use yj_site_core::clipboard;
use yj_site_core::compose;
use yj_site_core::contact::{FormData, Panel};
use yj_site_core::event::Event;
use yj_site_core::keyboard::{self, Key};
use yj_site_core::page::Page;
use yj_site_core::settings::Settings;
use yj_site_core::window;

use crate::contact::ContactWindow;
use crate::copy::AddressCopy;
use crate::effect::{Effect, Timer};
use crate::menu::Menu;
use crate::router::Router;

/// A discrete interaction with the site.
///
/// Hosts translate clicks on role-addressed controls into these variants;
/// ambient inputs arrive wrapped in [`Message::Event`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The mobile menu trigger was pressed.
    MenuToggled,
    /// A close control inside the mobile panel was pressed.
    MenuClosePressed,
    /// A navigation link was pressed; the payload is its raw `data-page`
    /// value.
    NavLinkPressed(SmolStr),
    /// The brand mark was pressed.
    BrandPressed,
    /// The home page's quote shortcut was pressed.
    QuoteShortcutPressed,
    /// The "request a quote" control inside the contact window was pressed.
    RequestQuotePressed,
    /// The "back to contact info" control was pressed.
    BackToContactsPressed,
    /// The send-via-Gmail control was pressed, with a fresh form snapshot.
    GmailPressed(FormData),
    /// The send-via-Outlook control was pressed, with a fresh form snapshot.
    OutlookPressed(FormData),
    /// The copy-address control was pressed.
    CopyAddressPressed,
    /// The host finished the clipboard write requested earlier.
    CopyResolved(Result<(), clipboard::Error>),
    /// A timer started by the runtime elapsed.
    TimerFired(Timer),
    /// An ambient document event.
    Event(Event),
}

/// The whole behavior layer of the site.
///
/// Owns every controller and dispatches [`Message`]s to them. All state
/// lives here explicitly; there are no ambient globals.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    menu: Menu,
    router: Router,
    contact: ContactWindow,
    copy: AddressCopy,
}

impl App {
    /// Creates the app with the given [`Settings`].
    pub fn new(settings: Settings) -> Self {
        let router = Router::new(settings.transition_duration);
        let copy = AddressCopy::new(&settings.destination, settings.copied_duration);

        Self {
            settings,
            menu: Menu::new(),
            router,
            contact: ContactWindow::new(),
            copy,
        }
    }

    /// The effects of the initial render: the ARIA baseline of the closed
    /// menu and an immediate, non-animated entry of the landing page.
    pub fn boot(&mut self) -> Vec<Effect> {
        let mut effects = self.menu.sync();
        effects.extend(self.go_to(Page::Inicio, true));

        effects
    }

    /// Applies one message and returns the effects the host must perform.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::MenuToggled => self.menu.toggle(),
            Message::MenuClosePressed => self.menu.close(),
            Message::NavLinkPressed(name) => match Page::parse(&name) {
                Some(page) => {
                    let mut effects = self.go_to(page, false);

                    // Entering the contact page from the menu always lands
                    // on the contact-info sub-view.
                    if page == Page::Cotizacion {
                        effects.extend(self.contact.open(Panel::Contactos));
                    }

                    effects
                }
                None => {
                    debug!("dropping nav request for unknown page {name:?}");
                    Vec::new()
                }
            },
            Message::BrandPressed => self.go_to(Page::Inicio, false),
            Message::QuoteShortcutPressed => {
                let mut effects = self.go_to(Page::Cotizacion, false);
                effects.push(Effect::StartTimer(
                    Timer::RevealQuote,
                    self.settings.quote_reveal_delay,
                ));

                effects
            }
            Message::RequestQuotePressed => self.contact.open(Panel::Cotizacion),
            Message::BackToContactsPressed => self.contact.open(Panel::Contactos),
            Message::GmailPressed(data) => vec![Effect::OpenDetached(compose::gmail_url(
                &self.settings.destination,
                &data,
            ))],
            Message::OutlookPressed(data) => vec![Effect::OpenDetached(compose::outlook_url(
                &self.settings.destination,
                &data,
            ))],
            Message::CopyAddressPressed => self.copy.request(),
            Message::CopyResolved(outcome) => self.copy.resolved(outcome),
            Message::TimerFired(Timer::TransitionCleanup) => self.router.on_cleanup(),
            Message::TimerFired(Timer::HideCopied) => self.copy.hide(),
            Message::TimerFired(Timer::RevealQuote) => self.contact.open(Panel::Cotizacion),
            Message::Event(event) => self.on_event(event),
        }
    }

    /// Convenience wrapper: applies an ambient document event.
    pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
        self.update(Message::Event(event))
    }

    /// The mobile menu controller.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The page transition controller.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The contact window controller.
    pub fn contact(&self) -> &ContactWindow {
        &self.contact
    }

    /// The settings the app was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn on_event(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key: Key::Escape }) => self.menu.close(),
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Vec::new(),
            Event::Window(window::Event::Resized(size)) => {
                if size.width > self.settings.menu_breakpoint {
                    self.menu.close()
                } else {
                    Vec::new()
                }
            }
            Event::Window(window::Event::RedrawRequested(_)) => self.router.on_redraw(),
        }
    }

    /// Switches pages and closes the mobile menu, as every page switch does.
    fn go_to(&mut self, page: Page, immediate: bool) -> Vec<Effect> {
        match self.router.show(page, immediate) {
            Some(mut effects) => {
                effects.extend(self.menu.close());

                effects
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Message};
    use crate::effect::{Effect, Timer};
    use yj_site_core::clipboard;
    use yj_site_core::contact::{FormData, Panel};
    use yj_site_core::dom::{Aria, Class, Target};
    use yj_site_core::event::Event;
    use yj_site_core::keyboard::{self, Key};
    use yj_site_core::page::Page;
    use yj_site_core::settings::Settings;
    use yj_site_core::time::Duration;
    use yj_site_core::window::{self, Size};

    fn booted() -> App {
        let mut app = App::new(Settings::default());
        let _ = app.boot();

        app
    }

    fn key_pressed(key: Key) -> Message {
        Message::Event(Event::Keyboard(keyboard::Event::KeyPressed { key }))
    }

    fn resized(width: f32) -> Message {
        Message::Event(Event::Window(window::Event::Resized(Size::new(
            width, 600.0,
        ))))
    }

    #[test]
    fn test_boot_lands_on_inicio_with_a_closed_menu() {
        let mut app = App::new(Settings::default());
        let effects = app.boot();

        assert_eq!(app.router().current(), Some(Page::Inicio));
        assert!(!app.menu().is_open());
        assert!(effects.contains(&Effect::SetAria(Target::MenuButton, Aria::Expanded(false))));
        assert!(effects.contains(&Effect::SetAria(Target::MobileNav, Aria::Hidden(true))));
        assert!(effects.contains(&Effect::AddClass(
            Target::Page(Page::Inicio),
            Class::IsActive
        )));
        assert!(!effects.contains(&Effect::RequestRedraw));
    }

    #[test]
    fn test_escape_closes_the_menu() {
        let mut app = booted();
        let _ = app.update(Message::MenuToggled);
        assert!(app.menu().is_open());

        let effects = app.update(key_pressed(Key::Escape));

        assert!(!app.menu().is_open());
        assert!(effects.contains(&Effect::SetAria(Target::MenuButton, Aria::Expanded(false))));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut app = booted();
        let _ = app.update(Message::MenuToggled);

        assert!(app.update(key_pressed(Key::Character("q".into()))).is_empty());
        assert!(app.menu().is_open());
    }

    #[test]
    fn test_widening_past_the_breakpoint_closes_the_menu() {
        let mut app = booted();
        let _ = app.update(Message::MenuToggled);

        assert!(app.update(resized(640.0)).is_empty());
        assert!(app.menu().is_open());

        let _ = app.update(resized(1024.0));
        assert!(!app.menu().is_open());
    }

    #[test]
    fn test_selecting_a_page_closes_the_menu() {
        let mut app = booted();
        let _ = app.update(Message::MenuToggled);

        let effects = app.update(Message::NavLinkPressed("servicios".into()));

        assert!(!app.menu().is_open());
        assert!(effects.contains(&Effect::RemoveClass(Target::MobileNav, Class::IsOpen)));
    }

    #[test]
    fn test_nav_to_cotizacion_resets_the_contact_panel() {
        let mut app = booted();
        let _ = app.update(Message::RequestQuotePressed);
        assert_eq!(app.contact().panel(), Panel::Cotizacion);

        let effects = app.update(Message::NavLinkPressed("cotizacion".into()));

        assert_eq!(app.contact().panel(), Panel::Contactos);
        assert!(effects.contains(&Effect::RemoveClass(Target::ContactWindow, Class::IsQuote)));
    }

    #[test]
    fn test_unknown_nav_names_are_dropped() {
        let mut app = booted();

        assert!(app.update(Message::NavLinkPressed("promos".into())).is_empty());
        assert_eq!(app.router().current(), Some(Page::Inicio));
    }

    #[test]
    fn test_brand_returns_home() {
        let mut app = booted();
        let _ = app.update(Message::NavLinkPressed("clientes".into()));
        settle(&mut app);

        let _ = app.update(Message::BrandPressed);
        settle(&mut app);

        assert_eq!(app.router().current(), Some(Page::Inicio));
    }

    #[test]
    fn test_quote_shortcut_navigates_and_schedules_the_reveal() {
        let mut app = booted();
        let effects = app.update(Message::QuoteShortcutPressed);

        assert_eq!(app.router().current(), Some(Page::Cotizacion));
        assert!(effects.contains(&Effect::StartTimer(
            Timer::RevealQuote,
            Duration::from_millis(750)
        )));

        settle(&mut app);
        let effects = app.update(Message::TimerFired(Timer::RevealQuote));

        assert_eq!(app.contact().panel(), Panel::Cotizacion);
        assert!(effects.contains(&Effect::AddClass(Target::ContactWindow, Class::IsQuote)));
    }

    #[test]
    fn test_compose_effects_open_detached() {
        let mut app = booted();
        let data = FormData::new("Ana", "ana@example.com", "", "hola");

        let gmail = app.update(Message::GmailPressed(data.clone()));
        let outlook = app.update(Message::OutlookPressed(data));

        let Effect::OpenDetached(gmail_url) = &gmail[0] else {
            panic!("expected a detached open");
        };
        let Effect::OpenDetached(outlook_url) = &outlook[0] else {
            panic!("expected a detached open");
        };

        assert!(gmail_url.starts_with("https://mail.google.com/mail/?view=cm&fs=1"));
        assert!(outlook_url.starts_with("https://outlook.office.com/mail/deeplink/compose"));
        assert!(gmail_url.contains("yfranco%40yjpublicidad.pe"));
        assert!(outlook_url.contains("yfranco%40yjpublicidad.pe"));
    }

    #[test]
    fn test_copy_flow_restarts_a_single_display_cycle() {
        let mut app = booted();

        let request = app.update(Message::CopyAddressPressed);
        assert_eq!(
            request,
            [Effect::WriteClipboard("yfranco@yjpublicidad.pe".to_owned())]
        );

        // Two rapid copies: each success restarts the same hide timer, so
        // the indicator is shown once and hidden once.
        let first = app.update(Message::CopyResolved(Ok(())));
        let second = app.update(Message::CopyResolved(Ok(())));
        assert_eq!(first, second);
        assert!(first.contains(&Effect::StartTimer(
            Timer::HideCopied,
            Duration::from_millis(1400)
        )));

        let hidden = app.update(Message::TimerFired(Timer::HideCopied));
        assert_eq!(
            hidden,
            [Effect::RemoveClass(Target::CopiedIndicator, Class::Show)]
        );
    }

    #[test]
    fn test_copy_failure_mentions_the_address() {
        let mut app = booted();
        let _ = app.update(Message::CopyAddressPressed);

        let effects = app.update(Message::CopyResolved(Err(clipboard::Error::Denied)));

        let Effect::ShowCopyFallback(notice) = &effects[0] else {
            panic!("expected the fallback notice");
        };
        assert!(notice.contains("yfranco@yjpublicidad.pe"));
    }

    /// Runs an in-flight transition to completion.
    fn settle(app: &mut App) {
        use yj_site_core::time::Instant;

        let _ = app.handle_event(Event::Window(window::Event::RedrawRequested(Instant::now())));
        let _ = app.update(Message::TimerFired(Timer::TransitionCleanup));
    }
}
