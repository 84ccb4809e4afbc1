use std::time::Duration;

use crate::error::RevealError;

const DEFAULT_REVEALABLE_HEIGHT: f32 = 100.0;
const DEFAULT_OPACITY_THRESHOLD: f32 = 0.5;
const DEFAULT_ANIMATION_RUNTIME_MS: u64 = 300;

/// How a resolved gesture reaches its end state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Completer {
    /// Interpolate opacity over a duration scaled by the current opacity.
    #[default]
    Animate,
    /// Jump to the end state immediately.
    Snap,
}

/// Immutable configuration of a reveal widget.
#[derive(Debug, Clone)]
pub struct Settings {
    revealable_height: f32,
    opacity_threshold_to_reveal: f32,
    animation_runtime: Duration,
    reveal_when_empty: bool,
    start_revealed: bool,
    completer: Completer,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            revealable_height: DEFAULT_REVEALABLE_HEIGHT,
            opacity_threshold_to_reveal: DEFAULT_OPACITY_THRESHOLD,
            animation_runtime: Duration::from_millis(
                DEFAULT_ANIMATION_RUNTIME_MS,
            ),
            reveal_when_empty: false,
            start_revealed: false,
            completer: Completer::Animate,
        }
    }
}

impl Settings {
    /// Pixel distance that maps to a full 0% to 100% reveal.
    pub fn with_revealable_height(mut self, height: f32) -> Self {
        self.revealable_height = height;
        self
    }

    /// Opacity at or above which a released gesture resolves to open.
    pub fn with_opacity_threshold(mut self, threshold: f32) -> Self {
        self.opacity_threshold_to_reveal = threshold;
        self
    }

    /// Duration of an animation covering the whole reveal distance.
    pub fn with_animation_runtime(mut self, runtime: Duration) -> Self {
        self.animation_runtime = runtime;
        self
    }

    pub fn with_reveal_when_empty(mut self, reveal: bool) -> Self {
        self.reveal_when_empty = reveal;
        self
    }

    pub fn with_start_revealed(mut self, revealed: bool) -> Self {
        self.start_revealed = revealed;
        self
    }

    pub fn with_completer(mut self, completer: Completer) -> Self {
        self.completer = completer;
        self
    }

    pub fn revealable_height(&self) -> f32 {
        self.revealable_height
    }

    pub fn opacity_threshold_to_reveal(&self) -> f32 {
        self.opacity_threshold_to_reveal
    }

    pub fn animation_runtime(&self) -> Duration {
        self.animation_runtime
    }

    pub fn reveal_when_empty(&self) -> bool {
        self.reveal_when_empty
    }

    pub fn start_revealed(&self) -> bool {
        self.start_revealed
    }

    pub fn completer(&self) -> Completer {
        self.completer
    }

    /// Reject values that would make opacity math meaningless.
    pub(crate) fn validate(&self) -> Result<(), RevealError> {
        if !self.revealable_height.is_finite() || self.revealable_height <= 0.0
        {
            return Err(RevealError::InvalidHeight(self.revealable_height));
        }

        if !(0.0..=1.0).contains(&self.opacity_threshold_to_reveal) {
            return Err(RevealError::InvalidThreshold(
                self.opacity_threshold_to_reveal,
            ));
        }

        Ok(())
    }
}
