use std::rc::Rc;

use iced::widget::{Column, Space, container, scrollable};
use iced::{Element, Length, Size};

use crate::error::{Result, RevealError};
use crate::event::{RevealCommand, RevealEvent, RevealIntent};
use crate::settings::Completer;
use crate::widget::RevealWidget;

type EventMapper<'a, Message> = dyn Fn(RevealEvent) -> Message + 'a;
type ContentBuilder<'a, Message> =
    dyn Fn(&RevealContext<'a, Message>) -> Element<'a, Message> + 'a;
type DividerBuilder<'a, Message> = dyn Fn() -> Element<'a, Message> + 'a;
type ItemBuilder<'a, Message> = dyn Fn(usize) -> Element<'a, Message> + 'a;

/// Manual open/close hooks handed to the revealable content.
pub struct RevealHooks<'a, Message> {
    on_event: Rc<EventMapper<'a, Message>>,
}

impl<Message> RevealHooks<'_, Message> {
    /// Message that opens the revealable, optionally overriding the
    /// configured completer.
    pub fn open(&self, completer: Option<Completer>) -> Message {
        (self.on_event)(RevealCommand::Open(completer).into())
    }

    /// Message that closes the revealable.
    pub fn close(&self, completer: Option<Completer>) -> Message {
        (self.on_event)(RevealCommand::Close(completer).into())
    }
}

/// Rendering context passed to the revealable content builder.
pub struct RevealContext<'a, Message> {
    /// Space available to the content. `height` is already scaled by
    /// opacity. `width` is unconstrained (`f32::INFINITY`): the header fills
    /// the width of the view, so size horizontally with `Length::Fill`.
    pub size: Size,
    /// Effective opacity in `[0, 1]`.
    ///
    /// The view only clips the header to its scaled height. Transparency is
    /// up to the content: apply this value to colors to fade it.
    pub opacity: f32,
    pub hooks: RevealHooks<'a, Message>,
}

/// Revealable header stacked above a scrollable list.
pub struct RevealView<'a, Message> {
    widget: &'a RevealWidget,
    on_event: Rc<EventMapper<'a, Message>>,
    content: Box<ContentBuilder<'a, Message>>,
    divider: Option<Box<DividerBuilder<'a, Message>>>,
    list: Option<Element<'a, Message>>,
    items: Option<(usize, Box<ItemBuilder<'a, Message>>)>,
    list_is_empty: bool,
    spacing: f32,
}

impl<'a, Message> RevealView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a view over `widget` whose events are wrapped by `on_event`.
    pub fn new(
        widget: &'a RevealWidget,
        on_event: impl Fn(RevealEvent) -> Message + 'a,
        content: impl Fn(&RevealContext<'a, Message>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        Self {
            widget,
            on_event: Rc::new(on_event),
            content: Box::new(content),
            divider: None,
            list: None,
            items: None,
            list_is_empty: false,
            spacing: 0.0,
        }
    }

    /// Use a pre-built list as scroll content.
    pub fn list(mut self, list: impl Into<Element<'a, Message>>) -> Self {
        self.list = Some(list.into());
        self
    }

    /// Build the list from `count` items.
    pub fn items(
        mut self,
        count: usize,
        item: impl Fn(usize) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.items = Some((count, Box::new(item)));
        self.list_is_empty = count == 0;
        self
    }

    /// Tell the view whether a pre-built list has no items.
    pub fn list_is_empty(mut self, empty: bool) -> Self {
        self.list_is_empty = empty;
        self
    }

    /// Static content placed between the revealable and the list.
    pub fn divider(
        mut self,
        divider: impl Fn() -> Element<'a, Message> + 'a,
    ) -> Self {
        self.divider = Some(Box::new(divider));
        self
    }

    /// Vertical spacing between list items built with [`Self::items`].
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Build the `Element` for the reveal view.
    ///
    /// Fails when neither or both list sources were supplied.
    pub fn view(self) -> Result<Element<'a, Message>> {
        let list_content: Element<'a, Message> = match (self.list, self.items)
        {
            (Some(list), None) => list,
            (None, Some((count, item))) => {
                Column::with_children((0..count).map(item))
                    .spacing(self.spacing)
                    .into()
            },
            (None, None) => {
                log::warn!("reveal view requested without a list source");
                return Err(RevealError::MissingListSource);
            },
            (Some(_), Some(_)) => {
                log::warn!("reveal view requested with two list sources");
                return Err(RevealError::ConflictingListSource);
            },
        };

        let presentation = self.widget.presentation(self.list_is_empty);
        let header: Element<'a, Message> = if presentation.is_hidden() {
            Space::new().into()
        } else {
            let context = RevealContext {
                size: Size::new(f32::INFINITY, presentation.height),
                opacity: presentation.opacity,
                hooks: RevealHooks {
                    on_event: Rc::clone(&self.on_event),
                },
            };
            container((self.content)(&context))
                .width(Length::Fill)
                .height(Length::Fixed(presentation.height))
                .clip(true)
                .into()
        };

        let on_scroll = Rc::clone(&self.on_event);
        let list = scrollable(list_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(move |viewport| {
                on_scroll(RevealEvent::Intent(RevealIntent::ListScrolled {
                    position: viewport.absolute_offset().y,
                }))
            });

        let mut column = Column::new().width(Length::Fill).push(header);
        if let Some(divider) = self.divider.as_ref() {
            column = column.push(divider());
        }

        Ok(column.push(list).into())
    }
}
