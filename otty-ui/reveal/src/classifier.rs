/// User gesture attached to a scroll notification while it is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInfo {
    /// Scroll position at the moment the gesture began.
    pub started_at: f32,
}

/// Raw scroll position update emitted by the embedded list.
///
/// `drag` is present while the user moves the list and absent once the
/// gesture is released or when the platform corrects an overscroll on its
/// own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNotification {
    pub position: f32,
    pub drag: Option<DragInfo>,
}

impl ScrollNotification {
    pub fn dragged(position: f32, drag: DragInfo) -> Self {
        Self {
            position,
            drag: Some(drag),
        }
    }

    pub fn released(position: f32) -> Self {
        Self {
            position,
            drag: None,
        }
    }
}

/// Sign of the most recent scroll delta.
///
/// `Forward` pushes content up (offset grows), `Reverse` pulls it down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Idle,
    Forward,
    Reverse,
}

/// Who moved the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    UserAction,
    AutomatedRebound,
}

/// Classified view of a notification relative to the last gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub delta: f32,
    /// `None` when `delta` is zero.
    pub direction: Option<ScrollDirection>,
    pub source: ScrollSource,
}

impl ScrollUpdate {
    /// Absolute distance travelled since the last gesture end.
    pub fn distance(&self) -> f32 {
        self.delta.abs()
    }
}

/// Classify `notification` against the baseline `last_end_position`.
pub fn classify(
    notification: &ScrollNotification,
    last_end_position: f32,
) -> ScrollUpdate {
    let delta = notification.position - last_end_position;
    let direction = if delta > 0.0 {
        Some(ScrollDirection::Forward)
    } else if delta < 0.0 {
        Some(ScrollDirection::Reverse)
    } else {
        None
    };
    let source = if notification.drag.is_some() {
        ScrollSource::UserAction
    } else {
        ScrollSource::AutomatedRebound
    };

    ScrollUpdate {
        delta,
        direction,
        source,
    }
}
