use iced::event::{self, Status};
use iced::time::Instant;
use iced::{Event, Subscription, Task, mouse, touch, window};

use crate::classifier::ScrollDirection;
use crate::error::Result;
use crate::event::{RevealEffect, RevealEvent, RevealIntent};
use crate::presenter::{self, Presentation};
use crate::reducer::{self, PointerTracker};
use crate::settings::Settings;
use crate::state::{RevealState, RevealableState};

/// Read-only snapshot of the reveal widget for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealViewModel {
    pub opacity: f32,
    pub state: RevealableState,
    pub scroll_direction: ScrollDirection,
    pub is_animating: bool,
}

/// Reveal widget owning its session state.
#[derive(Debug)]
pub struct RevealWidget {
    settings: Settings,
    state: RevealState,
    pointer: PointerTracker,
}

impl RevealWidget {
    /// Validate `settings` and mount a new session.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let state = RevealState::new(settings.start_revealed());

        Ok(Self {
            settings,
            state,
            pointer: PointerTracker::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(&mut self, intent: RevealIntent) -> Task<RevealEvent> {
        match self.apply(intent, Instant::now()) {
            Some(effect) => Task::done(RevealEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    /// Same as [`RevealWidget::reduce`] with an explicit clock, for hosts
    /// outside the iced runtime.
    pub fn apply(
        &mut self,
        intent: RevealIntent,
        now: Instant,
    ) -> Option<RevealEffect> {
        reducer::reduce(
            &mut self.state,
            &mut self.pointer,
            &self.settings,
            intent,
            now,
        )
    }

    /// Build a read-only view model for the presentation layer.
    pub fn vm(&self) -> RevealViewModel {
        RevealViewModel {
            opacity: self.state.opacity(),
            state: self.state.phase(),
            scroll_direction: self.state.scroll_direction(),
            is_animating: self.is_animating(),
        }
    }

    pub fn opacity(&self) -> f32 {
        self.state.opacity()
    }

    pub fn state(&self) -> RevealableState {
        self.state.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.state.transition().is_some()
    }

    /// Layout of the revealable given whether the list has any items.
    pub fn presentation(&self, list_is_empty: bool) -> Presentation {
        presenter::present(
            self.state.opacity(),
            self.state.phase(),
            list_is_empty,
            &self.settings,
        )
    }

    /// Pointer presses and releases, plus frame ticks while an animation
    /// runs or a wheel gesture waits to settle.
    ///
    /// The listener sees events the `scrollable` captured, which is how
    /// touch drags reach the gesture tracker.
    pub fn subscription(&self) -> Subscription<RevealEvent> {
        let pointer = event::listen_with(pointer_intent);
        if !self.is_animating() && !self.pointer.is_free_scrolling() {
            return pointer;
        }

        Subscription::batch([
            pointer,
            window::frames()
                .map(|frame| RevealEvent::Intent(RevealIntent::Tick(frame))),
        ])
    }

    /// Stop any running animation. The widget stays usable afterwards.
    pub fn dispose(&mut self) {
        let _ = self.state.cancel_transition();
    }
}

fn pointer_intent(
    event: Event,
    _status: Status,
    _window: window::Id,
) -> Option<RevealEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => {
            RevealIntent::PointerPressed
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
        ) => RevealIntent::PointerReleased,
        _ => return None,
    };

    Some(RevealEvent::Intent(intent))
}

impl Drop for RevealWidget {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::classifier::{DragInfo, ScrollNotification};
    use crate::error::RevealError;
    use crate::event::RevealCommand;
    use crate::settings::Completer;

    fn widget() -> RevealWidget {
        RevealWidget::new(
            Settings::default()
                .with_revealable_height(100.0)
                .with_opacity_threshold(0.5)
                .with_animation_runtime(Duration::from_millis(300)),
        )
        .expect("valid settings")
    }

    #[test]
    fn given_invalid_height_when_created_then_error() {
        let result =
            RevealWidget::new(Settings::default().with_revealable_height(-1.0));
        assert!(matches!(result, Err(RevealError::InvalidHeight(_))));
    }

    #[test]
    fn given_start_revealed_when_created_then_view_model_is_open() {
        let widget =
            RevealWidget::new(Settings::default().with_start_revealed(true))
                .expect("valid settings");
        let vm = widget.vm();
        assert_eq!(vm.state, RevealableState::Open);
        assert_eq!(vm.opacity, 1.0);
        assert!(!vm.is_animating);
    }

    #[test]
    fn given_running_animation_when_disposed_then_animation_stops() {
        let now = Instant::now();
        let mut widget = widget();
        let drag = DragInfo { started_at: 0.0 };
        let _ = widget.apply(
            RevealIntent::Scrolled(ScrollNotification::dragged(-30.0, drag)),
            now,
        );
        let _ = widget.apply(
            RevealIntent::ScrollEnded { position: -30.0 },
            now,
        );
        assert!(widget.is_animating());

        widget.dispose();
        assert!(!widget.is_animating());
    }

    #[test]
    fn given_manual_close_with_override_when_open_then_snaps_closed() {
        let mut widget =
            RevealWidget::new(Settings::default().with_start_revealed(true))
                .expect("valid settings");
        let effect = widget.apply(
            RevealIntent::Command(RevealCommand::Close(Some(Completer::Snap))),
            Instant::now(),
        );
        assert_eq!(effect, Some(RevealEffect::Closed));
        assert_eq!(widget.opacity(), 0.0);
    }

    #[test]
    fn given_manual_open_without_override_when_partial_then_animates() {
        let now = Instant::now();
        let mut widget = widget();
        let drag = DragInfo { started_at: 0.0 };
        let _ = widget.apply(
            RevealIntent::Scrolled(ScrollNotification::dragged(-20.0, drag)),
            now,
        );

        let effect =
            widget.apply(RevealIntent::Command(RevealCommand::Open(None)), now);
        assert_eq!(effect, None);
        assert_eq!(widget.state(), RevealableState::Opening);

        let effect = widget.apply(
            RevealIntent::Tick(now + Duration::from_millis(60)),
            now,
        );
        assert_eq!(effect, Some(RevealEffect::Opened));
    }

    #[test]
    fn given_captured_touch_events_when_mapped_then_pointer_intents() {
        let position = iced::Point::new(10.0, 200.0);
        let finger = touch::Finger(0);

        assert_eq!(
            pointer_intent(
                Event::Touch(touch::Event::FingerPressed {
                    id: finger,
                    position
                }),
                Status::Captured,
                window::Id::unique(),
            ),
            Some(RevealEvent::Intent(RevealIntent::PointerPressed))
        );
        assert_eq!(
            pointer_intent(
                Event::Touch(touch::Event::FingerLifted {
                    id: finger,
                    position
                }),
                Status::Captured,
                window::Id::unique(),
            ),
            Some(RevealEvent::Intent(RevealIntent::PointerReleased))
        );
        assert_eq!(
            pointer_intent(
                Event::Touch(touch::Event::FingerMoved {
                    id: finger,
                    position
                }),
                Status::Captured,
                window::Id::unique(),
            ),
            None
        );
    }

    #[test]
    fn given_mouse_buttons_when_mapped_then_only_left_button_counts() {
        assert_eq!(
            pointer_intent(
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
                Status::Ignored,
                window::Id::unique(),
            ),
            Some(RevealEvent::Intent(RevealIntent::PointerReleased))
        );
        assert_eq!(
            pointer_intent(
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
                Status::Ignored,
                window::Id::unique(),
            ),
            None
        );
    }
}
