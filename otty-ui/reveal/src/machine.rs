//! Scroll-driven transitions of the reveal state.
//!
//! Every scroll update runs through [`on_scroll_update`]: the notification
//! is classified against the last gesture end, the drag may take over
//! control of opacity, and a drag release resolves the gesture through the
//! completion engine. [`on_scroll_end`] handles the list settling.

use iced::time::Instant;

use crate::classifier::{
    ScrollDirection, ScrollNotification, ScrollSource, classify,
};
use crate::engine;
use crate::settings::Settings;
use crate::state::{RevealState, RevealableState};

pub(crate) fn on_scroll_update(
    state: &mut RevealState,
    settings: &Settings,
    notification: &ScrollNotification,
    now: Instant,
) {
    let update = classify(notification, state.last_end_position());
    log::trace!(
        "reveal: scroll update delta={:.1} direction={:?} source={:?}",
        update.delta,
        update.direction,
        update.source
    );

    let Some(direction) = update.direction else {
        state.record_drag(notification.drag);
        return;
    };
    state.set_scroll_direction(direction);

    if update.source == ScrollSource::UserAction {
        let takes_over = match direction {
            ScrollDirection::Forward => state.phase().is_revealing(),
            ScrollDirection::Reverse => state.phase().is_concealing(),
            ScrollDirection::Idle => false,
        };
        if takes_over {
            state.begin_user_scrolling();
        }
    }

    if state.phase() != RevealableState::UserScrolling {
        state.record_drag(notification.drag);
        return;
    }

    let released = state.last_drag().is_some() && notification.drag.is_none();
    state.record_drag(notification.drag);

    let distance = update.distance();
    match (direction, released) {
        (ScrollDirection::Forward, false) => {
            push_up(state, settings, distance)
        },
        (ScrollDirection::Reverse, false) => {
            pull_down(state, settings, distance)
        },
        (ScrollDirection::Forward, true) => {
            if !state.phase().is_concealing() {
                engine::resolve(state, settings, settings.completer(), now);
            }
        },
        (ScrollDirection::Reverse, true) => {
            if !state.phase().is_revealing() {
                engine::resolve(state, settings, settings.completer(), now);
            }
        },
        (ScrollDirection::Idle, _) => {},
    }
}

/// The list settled; resolve what the gesture left behind.
///
/// Pushing past the top always closes, regardless of the threshold.
pub(crate) fn on_scroll_end(
    state: &mut RevealState,
    settings: &Settings,
    position: f32,
    now: Instant,
) {
    match state.scroll_direction() {
        ScrollDirection::Forward if !state.phase().is_concealing() => {
            engine::close(state, settings, settings.completer(), now);
        },
        ScrollDirection::Reverse if !state.phase().is_revealing() => {
            engine::resolve(state, settings, settings.completer(), now);
        },
        _ => {},
    }

    state.finish_gesture(position);
}

/// Content pushed up by `scrolled` pixels while the drag is in control.
pub(crate) fn push_up(
    state: &mut RevealState,
    settings: &Settings,
    scrolled: f32,
) {
    if state.phase() == RevealableState::Closed {
        return;
    }

    let height = settings.revealable_height();
    if scrolled >= height {
        state.settle_closed();
        return;
    }

    state.track_drag(((height - scrolled) / height).clamp(0.0, 1.0));
}

/// Content pulled down by `scrolled` pixels while the drag is in control.
///
/// Opacity never decreases within one pull.
pub(crate) fn pull_down(
    state: &mut RevealState,
    settings: &Settings,
    scrolled: f32,
) {
    if state.phase() == RevealableState::Open {
        return;
    }

    let height = settings.revealable_height();
    if scrolled >= height {
        state.settle_open();
        return;
    }

    let fraction = (scrolled / height).clamp(0.0, 1.0);
    state.track_drag(state.opacity().max(fraction));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::classifier::DragInfo;

    const DRAG: DragInfo = DragInfo { started_at: 0.0 };

    fn settings() -> Settings {
        Settings::default()
            .with_revealable_height(100.0)
            .with_opacity_threshold(0.5)
            .with_animation_runtime(Duration::from_millis(300))
    }

    fn drag_to(state: &mut RevealState, position: f32, now: Instant) {
        on_scroll_update(
            state,
            &settings(),
            &ScrollNotification::dragged(position, DRAG),
            now,
        );
    }

    fn release_at(state: &mut RevealState, position: f32, now: Instant) {
        on_scroll_update(
            state,
            &settings(),
            &ScrollNotification::released(position),
            now,
        );
    }

    #[test]
    fn given_closed_when_pulled_down_then_user_scrolling_tracks_fraction() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -40.0, now);

        assert_eq!(state.phase(), RevealableState::UserScrolling);
        assert!((state.opacity() - 0.4).abs() < 1e-6);
        assert_eq!(state.scroll_direction(), ScrollDirection::Reverse);
    }

    #[test]
    fn given_pull_with_jitter_when_dragged_then_opacity_never_decreases() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        let mut last = 0.0;
        for position in [-10.0, -30.0, -25.0, -45.0, -20.0, -50.0] {
            drag_to(&mut state, position, now);
            assert!(state.opacity() >= last);
            last = state.opacity();
        }
        assert!((last - 0.5).abs() < 1e-6);
    }

    #[test]
    fn given_pull_beyond_height_when_dragged_then_open_immediately() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -20.0, now);
        drag_to(&mut state, -100.0, now);
        assert_eq!(state.phase(), RevealableState::Open);
        assert_eq!(state.opacity(), 1.0);

        drag_to(&mut state, -140.0, now);
        assert_eq!(state.phase(), RevealableState::Open);
    }

    #[test]
    fn given_non_closed_states_when_pushed_past_height_then_closed() {
        for opacity in [0.1, 0.5, 1.0] {
            let mut state = RevealState::new(false);
            state.track_drag(opacity);
            push_up(&mut state, &settings(), 100.0);
            assert_eq!(state.phase(), RevealableState::Closed);
            assert_eq!(state.opacity(), 0.0);
        }

        let now = Instant::now();
        let mut state = RevealState::new(true);
        drag_to(&mut state, 150.0, now);
        assert_eq!(state.phase(), RevealableState::Closed);
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn given_non_open_states_when_pulled_past_height_then_open() {
        for opacity in [0.0, 0.3, 0.99] {
            let mut state = RevealState::new(false);
            state.track_drag(opacity);
            pull_down(&mut state, &settings(), 120.0);
            assert_eq!(state.phase(), RevealableState::Open);
            assert_eq!(state.opacity(), 1.0);
        }
    }

    #[test]
    fn given_open_when_pushed_up_partially_then_opacity_interpolates() {
        let now = Instant::now();
        let mut state = RevealState::new(true);
        drag_to(&mut state, 25.0, now);
        assert_eq!(state.phase(), RevealableState::UserScrolling);
        assert!((state.opacity() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn given_closed_when_pushed_up_then_ignored_but_direction_recorded() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, 60.0, now);
        assert_eq!(state.phase(), RevealableState::Closed);
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.scroll_direction(), ScrollDirection::Forward);
    }

    #[test]
    fn given_rebound_without_drag_when_closed_then_ignored() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        release_at(&mut state, -30.0, now);
        assert_eq!(state.phase(), RevealableState::Closed);
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn given_pull_of_forty_when_released_then_closes() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -40.0, now);
        release_at(&mut state, -40.0, now);
        assert_eq!(state.phase(), RevealableState::Closing);

        engine::advance(&mut state, now + Duration::from_millis(120));
        assert_eq!(state.phase(), RevealableState::Closed);
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn given_pull_of_sixty_when_released_then_opens() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -60.0, now);
        assert!((state.opacity() - 0.6).abs() < 1e-6);
        release_at(&mut state, -60.0, now);
        assert_eq!(state.phase(), RevealableState::Opening);

        engine::advance(&mut state, now + Duration::from_millis(180));
        assert_eq!(state.phase(), RevealableState::Open);
        assert_eq!(state.opacity(), 1.0);
    }

    #[test]
    fn given_opening_animation_when_user_pushes_up_then_drag_takes_over() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -60.0, now);
        release_at(&mut state, -60.0, now);
        on_scroll_end(&mut state, &settings(), 0.0, now);
        assert_eq!(state.phase(), RevealableState::Opening);

        drag_to(&mut state, 10.0, now + Duration::from_millis(10));
        assert_eq!(state.phase(), RevealableState::UserScrolling);
        assert!(state.transition().is_none());
        assert!((state.opacity() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn given_forward_direction_when_scroll_ends_then_force_closes() {
        let now = Instant::now();
        let mut state = RevealState::new(true);
        drag_to(&mut state, 5.0, now);
        release_at(&mut state, 5.0, now);
        // 0.95 is above the threshold, so the release itself reopens.
        assert_eq!(state.phase(), RevealableState::Opening);

        on_scroll_end(&mut state, &settings(), 5.0, now);
        assert_eq!(state.phase(), RevealableState::Closing);
        assert_eq!(state.last_end_position(), 5.0);
    }

    #[test]
    fn given_reverse_direction_when_scroll_ends_then_threshold_decides() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -70.0, now);
        on_scroll_end(&mut state, &settings(), -70.0, now);

        assert_eq!(state.phase(), RevealableState::Opening);
        assert_eq!(state.last_end_position(), 0.0);
        assert!(state.last_drag().is_none());
    }

    #[test]
    fn given_mid_drag_updates_when_processed_then_baseline_unchanged() {
        let now = Instant::now();
        let mut state = RevealState::new(false);
        drag_to(&mut state, -10.0, now);
        drag_to(&mut state, -30.0, now);
        assert_eq!(state.last_end_position(), 0.0);
    }
}
