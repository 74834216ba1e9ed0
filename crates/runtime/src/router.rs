//! Switch between pages with directional slide transitions.

use log::{debug, trace};
use yj_site_core::dom::{Class, NavSet, Target};
use yj_site_core::page::{Direction, Page};
use yj_site_core::time::Duration;

use crate::effect::{Effect, Timer};

/// Where an in-flight transition currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// The target is staged off-screen; the next animation frame releases it.
    AwaitingRedraw,
    /// Both pages are sliding; the cleanup timer ends the transition.
    AwaitingCleanup,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Option<Page>,
    to: Page,
    direction: Direction,
    stage: Stage,
}

/// The page transition controller.
///
/// A state machine over {idle, transitioning}: at most one transition is in
/// flight at a time, and while one is, non-immediate requests are dropped —
/// never queued. A started transition always runs to completion through
/// [`Router::on_redraw`] and [`Router::on_cleanup`].
#[derive(Debug)]
pub struct Router {
    active: Option<Page>,
    transition: Option<Transition>,
    duration: Duration,
}

impl Router {
    /// Creates an idle router with no active page yet.
    ///
    /// `duration` is the slide length; it must match the CSS transition
    /// duration of the page containers.
    pub fn new(duration: Duration) -> Self {
        Self {
            active: None,
            transition: None,
            duration,
        }
    }

    /// The page that is active, or becoming active.
    pub fn current(&self) -> Option<Page> {
        self.transition
            .as_ref()
            .map(|transition| transition.to)
            .or(self.active)
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Requests a switch to `target`.
    ///
    /// Returns `None` when the request is dropped: a transition is already
    /// in flight (and `immediate` is unset) or `target` is already the
    /// active page. `immediate` skips the animation entirely; it is meant
    /// for the initial render.
    pub fn show(&mut self, target: Page, immediate: bool) -> Option<Vec<Effect>> {
        if self.transition.is_some() && !immediate {
            debug!("dropping request for {target}: transition in flight");
            return None;
        }

        if self.active == Some(target) {
            trace!("dropping request for {target}: already active");
            return None;
        }

        let from = self.active.unwrap_or_default().name();
        let direction = Direction::between(from, target.name());
        trace!("showing {target} ({direction:?}, immediate: {immediate})");

        let mut effects = highlight(target);

        if immediate {
            if self.transition.take().is_some() {
                effects.push(Effect::CancelTimer(Timer::TransitionCleanup));
            }

            effects.push(Effect::RemoveClass(Target::Pages, Class::IsActive));
            effects.extend(strip_animation(Target::Pages));
            effects.push(Effect::AddClass(Target::Page(target), Class::IsActive));

            self.active = Some(target);

            return Some(effects);
        }

        let page = Target::Page(target);

        effects.extend(strip_animation(page));
        effects.push(Effect::AddClass(page, Class::IsActive));
        effects.push(Effect::AddClass(page, direction.enter_class()));
        // Pin the staged off-screen position before the frame that releases it.
        effects.push(Effect::SyncLayout(page));
        effects.push(Effect::RequestRedraw);

        self.transition = Some(Transition {
            from: self.active,
            to: target,
            direction,
            stage: Stage::AwaitingRedraw,
        });

        Some(effects)
    }

    /// Advances an in-flight transition on the animation frame: releases the
    /// target towards its rest position, starts the old page's slide-out,
    /// and arms the cleanup timer.
    pub fn on_redraw(&mut self) -> Vec<Effect> {
        let Some(transition) = &mut self.transition else {
            return Vec::new();
        };

        if transition.stage != Stage::AwaitingRedraw {
            return Vec::new();
        }

        let mut effects = vec![Effect::RemoveClass(
            Target::Page(transition.to),
            transition.direction.enter_class(),
        )];

        if let Some(from) = transition.from {
            effects.extend(strip_animation(Target::Page(from)));
            effects.push(Effect::AddClass(
                Target::Page(from),
                transition.direction.leave_class(),
            ));
        }

        effects.push(Effect::StartTimer(Timer::TransitionCleanup, self.duration));
        transition.stage = Stage::AwaitingCleanup;

        effects
    }

    /// Ends an in-flight transition once the cleanup timer fires:
    /// deactivates the old page, strips residual animation classes, resets
    /// the new page's scroll, and returns to idle.
    pub fn on_cleanup(&mut self) -> Vec<Effect> {
        match self.transition {
            Some(transition) if transition.stage == Stage::AwaitingCleanup => {
                self.transition = None;

                let mut effects = Vec::new();

                if let Some(from) = transition.from {
                    effects.push(Effect::RemoveClass(Target::Page(from), Class::IsActive));
                    effects.extend(strip_animation(Target::Page(from)));
                }

                effects.extend(strip_animation(Target::Page(transition.to)));
                effects.push(Effect::ScrollToTop(Target::Page(transition.to)));

                self.active = Some(transition.to);
                trace!("transition settled on {}", transition.to);

                effects
            }
            _ => Vec::new(),
        }
    }
}

/// Marks the target's links as active and all their siblings as inactive,
/// in both navigation sets.
fn highlight(target: Page) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(4);

    for set in [NavSet::Desktop, NavSet::Mobile] {
        effects.push(Effect::RemoveClass(Target::NavLinks(set), Class::IsActive));
        effects.push(Effect::AddClass(
            Target::NavLink(set, target),
            Class::IsActive,
        ));
    }

    effects
}

fn strip_animation(target: Target) -> impl Iterator<Item = Effect> {
    Class::ANIMATION
        .iter()
        .map(move |class| Effect::RemoveClass(target, *class))
}

#[cfg(test)]
mod tests {
    use super::{Router, Stage};
    use crate::effect::{Effect, Timer};
    use yj_site_core::dom::{Class, NavSet, Target};
    use yj_site_core::page::Page;
    use yj_site_core::time::Duration;

    fn router() -> Router {
        Router::new(Duration::from_millis(700))
    }

    #[test]
    fn test_immediate_show_activates_only_the_target() {
        let mut router = router();
        let effects = router.show(Page::Inicio, true).expect("request accepted");

        assert_eq!(router.current(), Some(Page::Inicio));
        assert!(!router.is_transitioning());
        assert!(effects.contains(&Effect::RemoveClass(Target::Pages, Class::IsActive)));
        assert!(effects.contains(&Effect::AddClass(
            Target::Page(Page::Inicio),
            Class::IsActive
        )));
        assert!(!effects.contains(&Effect::RequestRedraw));
    }

    #[test]
    fn test_showing_the_active_page_is_dropped() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);

        assert!(router.show(Page::Inicio, false).is_none());
        assert!(router.show(Page::Inicio, true).is_none());
    }

    #[test]
    fn test_animated_show_stages_enter_then_releases_on_redraw() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);

        let staged = router
            .show(Page::Servicios, false)
            .expect("request accepted");
        let target = Target::Page(Page::Servicios);

        assert!(router.is_transitioning());
        assert!(staged.contains(&Effect::AddClass(target, Class::IsActive)));
        assert!(staged.contains(&Effect::AddClass(target, Class::EnterFromRight)));

        let sync = staged
            .iter()
            .position(|effect| *effect == Effect::SyncLayout(target))
            .expect("layout is forced");
        let redraw = staged
            .iter()
            .position(|effect| *effect == Effect::RequestRedraw)
            .expect("a frame is requested");
        assert!(sync < redraw);

        let released = router.on_redraw();
        assert!(released.contains(&Effect::RemoveClass(target, Class::EnterFromRight)));
        assert!(released.contains(&Effect::AddClass(
            Target::Page(Page::Inicio),
            Class::LeaveToLeft
        )));
        assert!(released.contains(&Effect::StartTimer(
            Timer::TransitionCleanup,
            Duration::from_millis(700)
        )));
    }

    #[test]
    fn test_cleanup_settles_the_transition() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);
        let _ = router.show(Page::Clientes, false);
        let _ = router.on_redraw();

        let effects = router.on_cleanup();

        assert!(!router.is_transitioning());
        assert_eq!(router.current(), Some(Page::Clientes));
        assert!(effects.contains(&Effect::RemoveClass(
            Target::Page(Page::Inicio),
            Class::IsActive
        )));
        assert!(effects.contains(&Effect::ScrollToTop(Target::Page(Page::Clientes))));
    }

    #[test]
    fn test_requests_in_flight_are_dropped_not_queued() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);
        let _ = router.show(Page::Servicios, false);

        assert!(router.show(Page::Clientes, false).is_none());
        assert_eq!(router.current(), Some(Page::Servicios));

        let _ = router.on_redraw();
        assert!(router.show(Page::Clientes, false).is_none());

        let _ = router.on_cleanup();
        assert_eq!(router.current(), Some(Page::Servicios));
        assert!(router.show(Page::Clientes, false).is_some());
    }

    #[test]
    fn test_direction_is_backward_towards_earlier_pages() {
        let mut router = router();
        let _ = router.show(Page::Clientes, true);
        let _ = router
            .show(Page::Inicio, false)
            .expect("request accepted");

        let released = router.on_redraw();

        assert!(released.contains(&Effect::RemoveClass(
            Target::Page(Page::Inicio),
            Class::EnterFromLeft
        )));
        assert!(released.contains(&Effect::AddClass(
            Target::Page(Page::Clientes),
            Class::LeaveToRight
        )));
    }

    #[test]
    fn test_immediate_show_cancels_an_in_flight_transition() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);
        let _ = router.show(Page::Servicios, false);
        let _ = router.on_redraw();

        let effects = router
            .show(Page::Quienes, true)
            .expect("immediate bypasses the guard");

        assert!(effects.contains(&Effect::CancelTimer(Timer::TransitionCleanup)));
        assert!(!router.is_transitioning());
        assert_eq!(router.current(), Some(Page::Quienes));
        assert!(router.on_cleanup().is_empty());
    }

    #[test]
    fn test_nav_highlight_touches_both_link_sets() {
        let mut router = router();
        let effects = router.show(Page::Portafolio, true).expect("accepted");

        for set in [NavSet::Desktop, NavSet::Mobile] {
            assert!(effects.contains(&Effect::RemoveClass(Target::NavLinks(set), Class::IsActive)));
            assert!(effects.contains(&Effect::AddClass(
                Target::NavLink(set, Page::Portafolio),
                Class::IsActive
            )));
        }
    }

    #[test]
    fn test_stray_redraws_and_timers_are_ignored() {
        let mut router = router();
        let _ = router.show(Page::Inicio, true);

        assert!(router.on_redraw().is_empty());
        assert!(router.on_cleanup().is_empty());

        let _ = router.show(Page::Servicios, false);
        // Cleanup cannot fire before the redraw released the slide.
        assert!(router.on_cleanup().is_empty());
        assert_eq!(
            router.transition.map(|transition| transition.stage),
            Some(Stage::AwaitingRedraw)
        );
    }
}
