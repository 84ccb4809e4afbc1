use std::time::Duration;

use iced::time::Instant;

use crate::classifier::{DragInfo, ScrollNotification};
use crate::engine;
use crate::event::{RevealCommand, RevealEffect, RevealIntent};
use crate::machine;
use crate::settings::Settings;
use crate::state::{RevealState, RevealableState};

/// Quiet period after which scrolling without a pointer down counts as
/// finished.
pub(crate) const SCROLL_SETTLE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Hold {
    /// A mouse button or finger is down.
    Pressed,
    /// Wheel, keyboard or scrollbar scrolling with nothing held.
    Free { last_scroll: Instant },
}

/// Gesture bookkeeping for the built-in `scrollable` adapter.
#[derive(Debug, Default)]
pub(crate) struct PointerTracker {
    drag: Option<DragInfo>,
    hold: Option<Hold>,
    position: f32,
    scrolled: bool,
}

impl PointerTracker {
    fn press(&mut self) {
        if self.hold.is_none() {
            self.drag = Some(DragInfo {
                started_at: self.position,
            });
            self.scrolled = false;
        }
        self.hold = Some(Hold::Pressed);
    }

    /// Returns whether the released drag moved the list.
    fn release(&mut self) -> bool {
        if self.hold != Some(Hold::Pressed) {
            return false;
        }
        self.finish()
    }

    /// Ends a free gesture that stayed quiet for [`SCROLL_SETTLE`].
    fn settle(&mut self, now: Instant) -> bool {
        match self.hold {
            Some(Hold::Free { last_scroll })
                if now.saturating_duration_since(last_scroll)
                    >= SCROLL_SETTLE =>
            {
                self.finish()
            },
            _ => false,
        }
    }

    fn finish(&mut self) -> bool {
        let scrolled = self.drag.is_some() && self.scrolled;
        self.drag = None;
        self.hold = None;
        self.scrolled = false;
        scrolled
    }

    fn scroll_to(
        &mut self,
        position: f32,
        now: Instant,
    ) -> ScrollNotification {
        match self.hold {
            Some(Hold::Pressed) => {},
            Some(Hold::Free { .. }) => {
                self.hold = Some(Hold::Free { last_scroll: now });
            },
            None => {
                self.drag = Some(DragInfo {
                    started_at: self.position,
                });
                self.hold = Some(Hold::Free { last_scroll: now });
            },
        }
        self.position = position;
        self.scrolled = true;

        ScrollNotification {
            position,
            drag: self.drag,
        }
    }

    pub(crate) fn is_free_scrolling(&self) -> bool {
        matches!(self.hold, Some(Hold::Free { .. }))
    }
}

/// Reduce an intent into state updates, reporting a settlement if one
/// happened.
pub(crate) fn reduce(
    state: &mut RevealState,
    pointer: &mut PointerTracker,
    settings: &Settings,
    intent: RevealIntent,
    now: Instant,
) -> Option<RevealEffect> {
    let before = state.phase();

    match intent {
        RevealIntent::Scrolled(notification) => {
            machine::on_scroll_update(state, settings, &notification, now);
        },
        RevealIntent::ScrollEnded { position } => {
            machine::on_scroll_end(state, settings, position, now);
        },
        RevealIntent::ListScrolled { position } => {
            let notification = pointer.scroll_to(position, now);
            machine::on_scroll_update(state, settings, &notification, now);
        },
        RevealIntent::PointerPressed => pointer.press(),
        RevealIntent::PointerReleased => {
            if pointer.release() {
                end_gesture(state, settings, pointer.position, now);
            }
        },
        RevealIntent::Tick(frame) => {
            engine::advance(state, frame);
            if pointer.settle(frame) {
                end_gesture(state, settings, pointer.position, frame);
            }
        },
        RevealIntent::Command(RevealCommand::Open(completer)) => {
            let completer = completer.unwrap_or(settings.completer());
            engine::open(state, settings, completer, now);
        },
        RevealIntent::Command(RevealCommand::Close(completer)) => {
            let completer = completer.unwrap_or(settings.completer());
            engine::close(state, settings, completer, now);
        },
    }

    settlement(before, state.phase())
}

fn end_gesture(
    state: &mut RevealState,
    settings: &Settings,
    position: f32,
    now: Instant,
) {
    machine::on_scroll_update(
        state,
        settings,
        &ScrollNotification::released(position),
        now,
    );
    machine::on_scroll_end(state, settings, position, now);
}

fn settlement(
    before: RevealableState,
    after: RevealableState,
) -> Option<RevealEffect> {
    if before == after || !after.is_settled() {
        return None;
    }

    match after {
        RevealableState::Open => Some(RevealEffect::Opened),
        _ => Some(RevealEffect::Closed),
    }
}
