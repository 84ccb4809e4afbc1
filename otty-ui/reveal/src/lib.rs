//! Pull-to-reveal header for scrollable lists in [`iced`].
//!
//! A revealable element sits above a list. Pulling the list down shows it
//! progressively, pushing content up hides it, and releasing the drag
//! completes the move with an animation or a snap.
//!
//! This crate is split into two layers:
//! - the gesture core ([`RevealWidget`], [`classify`], [`effective_opacity`])
//!   that turns scroll positions into an opacity and a [`RevealableState`];
//! - the view helper ([`RevealView`]) that stacks the revealable, an optional
//!   divider and a `scrollable` list in `iced`.
//!
//! The recommended flow:
//! 1. keep a [`RevealWidget`] in your app state;
//! 2. route [`RevealEvent::Intent`] values back into
//!    [`RevealWidget::reduce`] and handle [`RevealEvent::Effect`] yourself;
//! 3. batch [`RevealWidget::subscription`] into your subscriptions. It
//!    reports pointer and touch presses over the window, which the
//!    `scrollable` would otherwise swallow, and delivers animation frames.
//!
//! The header is clipped to `opacity × height`, but its transparency is left
//! to the content: read [`RevealContext::opacity`] and apply it to colors.
//!
//! See `examples/reveal_list.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{button, text};
//! use iced::{Element, Task};
//! use otty_ui_reveal::{RevealEvent, RevealView, RevealWidget};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Reveal(RevealEvent),
//! }
//!
//! struct State {
//!     reveal: RevealWidget,
//!     items: Vec<String>,
//! }
//!
//! fn update(state: &mut State, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Reveal(RevealEvent::Intent(intent)) => {
//!             state.reveal.reduce(intent).map(Message::Reveal)
//!         },
//!         Message::Reveal(RevealEvent::Effect(_)) => Task::none(),
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     RevealView::new(&state.reveal, Message::Reveal, |ctx| {
//!         button(text("Hide")).on_press(ctx.hooks.close(None)).into()
//!     })
//!     .items(state.items.len(), |index| text(&state.items[index]).into())
//!     .view()
//!     .unwrap_or_else(|err| text(err.to_string()).into())
//! }
//! ```

mod animation;
mod classifier;
mod engine;
mod error;
mod event;
mod machine;
mod presenter;
mod reducer;
mod settings;
mod state;
mod view;
mod widget;

pub use classifier::{
    DragInfo, ScrollDirection, ScrollNotification, ScrollSource, ScrollUpdate,
    classify,
};
pub use error::{Result, RevealError};
pub use event::{RevealCommand, RevealEffect, RevealEvent, RevealIntent};
pub use presenter::{Presentation, effective_opacity};
pub use settings::{Completer, Settings};
pub use state::RevealableState;
pub use view::{RevealContext, RevealHooks, RevealView};
pub use widget::{RevealViewModel, RevealWidget};
