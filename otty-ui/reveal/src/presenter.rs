use crate::settings::Settings;
use crate::state::RevealableState;

/// Layout of the revealable for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Effective opacity, drives transparency and scale.
    pub opacity: f32,
    /// Height available to the revealable content.
    pub height: f32,
}

impl Presentation {
    /// Fully hidden revealables render a placeholder instead of content.
    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Opacity actually shown to the user.
///
/// Empty lists force the revealable visible when configured to, and an
/// open revealable is always fully visible.
pub fn effective_opacity(
    opacity: f32,
    state: RevealableState,
    list_is_empty: bool,
    reveal_when_empty: bool,
) -> f32 {
    if (list_is_empty && reveal_when_empty) || state == RevealableState::Open {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

pub(crate) fn present(
    opacity: f32,
    state: RevealableState,
    list_is_empty: bool,
    settings: &Settings,
) -> Presentation {
    let opacity = effective_opacity(
        opacity,
        state,
        list_is_empty,
        settings.reveal_when_empty(),
    );

    Presentation {
        opacity,
        height: opacity * settings.revealable_height(),
    }
}
