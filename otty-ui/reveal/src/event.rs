use iced::time::Instant;

use crate::classifier::ScrollNotification;
use crate::settings::Completer;

/// Manual toggles issued by the revealable content itself.
///
/// `None` falls back to the configured completer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommand {
    Open(Option<Completer>),
    Close(Option<Completer>),
}

/// Intent events reduced by [`RevealWidget`](crate::RevealWidget).
#[derive(Debug, Clone, PartialEq)]
pub enum RevealIntent {
    /// Raw position update from a host that tracks drags itself.
    Scrolled(ScrollNotification),
    /// The list settled at `position`.
    ScrollEnded { position: f32 },
    /// Viewport offset reported by the embedded `scrollable`.
    ListScrolled { position: f32 },
    /// Mouse button or finger went down in the window.
    PointerPressed,
    /// Mouse button or finger was released.
    PointerReleased,
    /// Animation frame, also used to end quiet wheel gestures.
    Tick(Instant),
    Command(RevealCommand),
}

/// Effect events produced when the revealable settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    Opened,
    Closed,
}

/// Reveal event stream routed through the host update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEvent {
    /// Intent event reduced by the reveal widget.
    Intent(RevealIntent),
    /// Settlement reported to the host.
    Effect(RevealEffect),
}

impl From<RevealCommand> for RevealEvent {
    fn from(command: RevealCommand) -> Self {
        RevealEvent::Intent(RevealIntent::Command(command))
    }
}
