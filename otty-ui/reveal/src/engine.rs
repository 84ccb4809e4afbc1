//! Gesture completion: pick an end state and reach it by snap or animation.

use std::time::Duration;

use iced::time::Instant;

use crate::animation::Animation;
use crate::settings::{Completer, Settings};
use crate::state::{RevealState, Transition, TransitionKind};

/// Animation length for a completion starting at `opacity`.
///
/// Both directions scale the configured runtime by the current opacity and
/// round to whole milliseconds.
pub(crate) fn animation_duration(runtime: Duration, opacity: f32) -> Duration {
    let opacity = f64::from(opacity.clamp(0.0, 1.0));
    let millis = (runtime.as_millis() as f64 * opacity).round();
    Duration::from_millis(millis as u64)
}

/// Resolve a released gesture by comparing opacity with the threshold.
pub(crate) fn resolve(
    state: &mut RevealState,
    settings: &Settings,
    completer: Completer,
    now: Instant,
) {
    if state.opacity() >= settings.opacity_threshold_to_reveal() {
        open(state, settings, completer, now);
    } else {
        close(state, settings, completer, now);
    }
}

pub(crate) fn open(
    state: &mut RevealState,
    settings: &Settings,
    completer: Completer,
    now: Instant,
) {
    if state.phase().is_revealing() {
        return;
    }

    state.cancel_transition();
    match completer {
        Completer::Snap => state.settle_open(),
        Completer::Animate => {
            let start_opacity = state.opacity();
            let duration =
                animation_duration(settings.animation_runtime(), start_opacity);
            if duration.is_zero() {
                state.settle_open();
                return;
            }

            let animation = Animation::start(now, duration, 0.0, 1.0);
            state
                .begin_transition(Transition::opening(animation, start_opacity));
        },
    }
}

pub(crate) fn close(
    state: &mut RevealState,
    settings: &Settings,
    completer: Completer,
    now: Instant,
) {
    if state.phase().is_concealing() {
        return;
    }

    state.cancel_transition();
    match completer {
        Completer::Snap => state.settle_closed(),
        Completer::Animate => {
            let start_opacity = state.opacity();
            let duration =
                animation_duration(settings.animation_runtime(), start_opacity);
            if duration.is_zero() {
                state.settle_closed();
                return;
            }

            let animation = Animation::start(now, duration, 1.0, 0.0);
            state
                .begin_transition(Transition::closing(animation, start_opacity));
        },
    }
}

/// Advance the running animation to `now`, settling it when finished.
pub(crate) fn advance(state: &mut RevealState, now: Instant) {
    let Some(transition) = state.transition().copied() else {
        return;
    };

    if transition.is_finished(now) {
        match transition.kind() {
            TransitionKind::Opening => state.settle_open(),
            TransitionKind::Closing => state.settle_closed(),
        }
        return;
    }

    state.set_opacity(transition.opacity_at(now));
}
