use iced::time::Instant;

use crate::animation::Animation;
use crate::classifier::{DragInfo, ScrollDirection};

/// Lifecycle of the revealable element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealableState {
    /// Fully hidden, idle.
    #[default]
    Closed,
    /// An animation is driving opacity toward 0.
    Closing,
    /// The active drag controls opacity directly.
    UserScrolling,
    /// An animation is driving opacity toward 1.
    Opening,
    /// Fully shown, idle.
    Open,
}

impl RevealableState {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Open | Self::Closed)
    }

    /// Open or heading there.
    pub fn is_revealing(self) -> bool {
        matches!(self, Self::Open | Self::Opening)
    }

    /// Closed or heading there.
    pub fn is_concealing(self) -> bool {
        matches!(self, Self::Closed | Self::Closing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransitionKind {
    Opening,
    Closing,
}

/// The single in-flight completion animation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transition {
    kind: TransitionKind,
    animation: Animation,
    start_opacity: f32,
}

impl Transition {
    pub(crate) fn opening(animation: Animation, start_opacity: f32) -> Self {
        Self {
            kind: TransitionKind::Opening,
            animation,
            start_opacity,
        }
    }

    pub(crate) fn closing(animation: Animation, start_opacity: f32) -> Self {
        Self {
            kind: TransitionKind::Closing,
            animation,
            start_opacity,
        }
    }

    pub(crate) fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Opacity the revealable should show at `now`.
    pub(crate) fn opacity_at(&self, now: Instant) -> f32 {
        let aux = self.animation.value(now);
        match self.kind {
            TransitionKind::Opening => {
                (aux + self.start_opacity).clamp(0.0, 1.0)
            },
            TransitionKind::Closing => {
                (aux * self.start_opacity).clamp(0.0, 1.0)
            },
        }
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.animation.is_finished(now)
    }
}

/// Mutable session state of one mounted reveal widget.
#[derive(Debug)]
pub(crate) struct RevealState {
    opacity: f32,
    phase: RevealableState,
    scroll_direction: ScrollDirection,
    last_end_position: f32,
    last_drag: Option<DragInfo>,
    transition: Option<Transition>,
}

impl RevealState {
    pub(crate) fn new(start_revealed: bool) -> Self {
        let (opacity, phase) = if start_revealed {
            (1.0, RevealableState::Open)
        } else {
            (0.0, RevealableState::Closed)
        };

        Self {
            opacity,
            phase,
            scroll_direction: ScrollDirection::Idle,
            last_end_position: 0.0,
            last_drag: None,
            transition: None,
        }
    }

    pub(crate) fn opacity(&self) -> f32 {
        self.opacity
    }

    pub(crate) fn phase(&self) -> RevealableState {
        self.phase
    }

    pub(crate) fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub(crate) fn last_end_position(&self) -> f32 {
        self.last_end_position
    }

    pub(crate) fn last_drag(&self) -> Option<DragInfo> {
        self.last_drag
    }

    pub(crate) fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub(crate) fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.scroll_direction = direction;
    }

    pub(crate) fn record_drag(&mut self, drag: Option<DragInfo>) {
        self.last_drag = drag;
    }

    /// Hand opacity control to the active drag, stopping any animation.
    pub(crate) fn begin_user_scrolling(&mut self) {
        self.cancel_transition();
        if self.phase != RevealableState::UserScrolling {
            log::debug!("reveal: {:?} -> UserScrolling", self.phase);
        }
        self.phase = RevealableState::UserScrolling;
    }

    pub(crate) fn track_drag(&mut self, opacity: f32) {
        self.phase = RevealableState::UserScrolling;
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub(crate) fn settle_open(&mut self) {
        self.transition = None;
        if self.phase != RevealableState::Open {
            log::debug!("reveal: {:?} -> Open", self.phase);
        }
        self.phase = RevealableState::Open;
        self.opacity = 1.0;
    }

    pub(crate) fn settle_closed(&mut self) {
        self.transition = None;
        if self.phase != RevealableState::Closed {
            log::debug!("reveal: {:?} -> Closed", self.phase);
        }
        self.phase = RevealableState::Closed;
        self.opacity = 0.0;
    }

    /// Install `transition`, replacing whatever was running.
    pub(crate) fn begin_transition(&mut self, transition: Transition) {
        self.cancel_transition();
        self.phase = match transition.kind() {
            TransitionKind::Opening => RevealableState::Opening,
            TransitionKind::Closing => RevealableState::Closing,
        };
        log::debug!(
            "reveal: start {:?} from opacity {:.3} over {:?}",
            transition.kind(),
            transition.start_opacity,
            transition.animation.duration(),
        );
        self.transition = Some(transition);
    }

    /// Stop the running animation, if any, leaving opacity where it was.
    pub(crate) fn cancel_transition(&mut self) -> Option<Transition> {
        let cancelled = self.transition.take();
        if let Some(transition) = cancelled.as_ref() {
            log::debug!(
                "reveal: cancel {:?} at opacity {:.3}",
                transition.kind(),
                self.opacity
            );
        }
        cancelled
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Close the gesture: store the new baseline and forget the drag.
    pub(crate) fn finish_gesture(&mut self, position: f32) {
        self.last_end_position = position.max(0.0);
        self.last_drag = None;
    }
}
