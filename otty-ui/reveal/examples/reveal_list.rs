use std::time::Duration;

use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length, Size, Subscription, Task};
use otty_ui_reveal::{
    Completer, RevealEffect, RevealEvent, RevealView, RevealWidget, Settings,
};

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size(Size {
            width: 480.0,
            height: 720.0,
        })
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Event {
    Reveal(RevealEvent),
    AddItem,
    ClearItems,
}

struct App {
    reveal: RevealWidget,
    items: Vec<String>,
    status: String,
}

impl App {
    fn new() -> (Self, Task<Event>) {
        let settings = Settings::default()
            .with_revealable_height(96.0)
            .with_opacity_threshold(0.4)
            .with_animation_runtime(Duration::from_millis(250))
            .with_reveal_when_empty(true);
        let reveal = RevealWidget::new(settings)
            .expect("failed to create the reveal widget");

        (
            Self {
                reveal,
                items: (1..=60).map(|index| format!("Item {index}")).collect(),
                status: String::from("pull the list down"),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        String::from("reveal_list")
    }

    fn subscription(&self) -> Subscription<Event> {
        self.reveal.subscription().map(Event::Reveal)
    }

    fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::Reveal(RevealEvent::Intent(intent)) => {
                return self.reveal.reduce(intent).map(Event::Reveal);
            },
            Event::Reveal(RevealEvent::Effect(effect)) => {
                self.status = match effect {
                    RevealEffect::Opened => String::from("revealed"),
                    RevealEffect::Closed => String::from("hidden"),
                };
            },
            Event::AddItem => {
                self.items.push(format!("Item {}", self.items.len() + 1));
            },
            Event::ClearItems => self.items.clear(),
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Event> {
        let reveal = RevealView::new(&self.reveal, Event::Reveal, |ctx| {
            let color = Color {
                a: ctx.opacity,
                ..Color::WHITE
            };
            container(
                row![
                    text("Search and filters").color(color),
                    button(text("Snap close"))
                        .on_press(ctx.hooks.close(Some(Completer::Snap))),
                ]
                .spacing(12),
            )
            .padding(12)
            .width(Length::Fill)
            .into()
        })
        .divider(|| container(text("Items").size(12)).padding(4).into())
        .items(self.items.len(), |index| {
            container(text(&self.items[index])).padding(8).into()
        })
        .spacing(2.0)
        .view()
        .unwrap_or_else(|err| text(err.to_string()).into());

        column![
            row![
                button(text("Add")).on_press(Event::AddItem),
                button(text("Clear")).on_press(Event::ClearItems),
                text(&self.status),
            ]
            .spacing(8)
            .padding(8),
            reveal,
        ]
        .into()
    }
}
