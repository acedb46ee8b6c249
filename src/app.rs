// SPDX-License-Identifier: MPL-2.0
//! Iced demo application embedding the carousel controller.
//!
//! This is the presentation binding: it forwards raw pointer and timer events
//! into the controller and re-renders purely from the
//! [`CarouselSnapshot`](crate::carousel::CarouselSnapshot) plus the static
//! slide list. All interaction policy lives in the controller; this file only
//! translates Iced events into gesture/navigation calls and draws the result.

use crate::carousel::{Carousel, CarouselConfig, GestureEvent};
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{
    alignment, mouse, time, window, Background, Color, Element, Length, Point, Subscription, Task,
    Theme,
};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 500.0;

/// One unit of demo content addressed by the carousel index.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub color: Color,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Copy)]
pub struct Flags {
    /// Validated carousel configuration built from CLI arguments.
    pub config: CarouselConfig,
}

/// Root Iced application state: the controller plus the slide list it
/// addresses.
pub struct App {
    carousel: Carousel,
    slides: Vec<Slide>,
    /// Last known cursor position inside the slide area. Presses carry no
    /// position in Iced, so the drag origin comes from the latest move.
    cursor: Option<Point>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
    GoTo(usize),
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    PointerExited,
    /// Periodic tick from the autoplay subscription.
    AutoplayTick(std::time::Instant),
}

/// Demo slide palette, cycled by index.
fn slide_color(index: usize) -> Color {
    const PALETTE: [(f32, f32, f32); 5] = [
        (0.22, 0.42, 0.69),
        (0.69, 0.32, 0.25),
        (0.27, 0.55, 0.36),
        (0.55, 0.36, 0.62),
        (0.76, 0.58, 0.22),
    ];
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::from_rgb(r, g, b)
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the controller from the validated flags and arms autoplay,
    /// matching the original slider which auto-advances from startup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let slides = (0..flags.config.item_count())
            .map(|i| Slide {
                title: format!("Slide {}", i + 1),
                color: slide_color(i),
            })
            .collect();

        let mut carousel = Carousel::new(flags.config);
        carousel.start();

        (
            Self {
                carousel,
                slides,
                cursor: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Iced Carousel".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The autoplay timer: a subscription derived from controller state on
    /// every frame. It disappears whenever the controller reports no tick
    /// interval (stopped, mid-drag, too few slides), so the timer can never
    /// outlive or fight the controller.
    fn subscription(&self) -> Subscription<Message> {
        match self.carousel.tick_interval() {
            Some(interval) => time::every(interval).map(Message::AutoplayTick),
            None => Subscription::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateNext => {
                self.carousel.next();
                log::debug!("manual next -> index {}", self.carousel.current_index());
            }
            Message::NavigatePrevious => {
                self.carousel.prev();
                log::debug!("manual prev -> index {}", self.carousel.current_index());
            }
            Message::GoTo(index) => {
                self.carousel.go_to(index);
            }
            Message::PointerPressed => {
                if let Some(position) = self.cursor {
                    self.carousel.gesture(GestureEvent::Down(position));
                }
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                self.carousel.gesture(GestureEvent::Move(position));
            }
            Message::PointerReleased => {
                self.carousel.gesture(GestureEvent::Up);
            }
            Message::PointerExited => {
                self.cursor = None;
                self.carousel.gesture(GestureEvent::Cancel);
            }
            Message::AutoplayTick(_) => {
                self.carousel.tick();
                log::debug!("autoplay tick -> index {}", self.carousel.current_index());
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        if self.slides.is_empty() {
            return empty_state();
        }

        let snapshot = self.carousel.snapshot();
        let slide = &self.slides[snapshot.current_index.min(self.slides.len() - 1)];

        let stage_content = Column::new()
            .spacing(12)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(slide.title.clone()).size(42))
            .push(Text::new("drag horizontally to navigate").size(14));

        let stage_color = slide.color;
        let stage = Container::new(stage_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(stage_color)),
                ..Default::default()
            });

        let cursor_interaction = if snapshot.is_dragging {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        let stage = mouse_area(stage)
            .on_press(Message::PointerPressed)
            .on_release(Message::PointerReleased)
            .on_move(Message::PointerMoved)
            .on_exit(Message::PointerExited)
            .interaction(cursor_interaction);

        let mut dots = Row::new().spacing(8);
        for index in 0..self.slides.len() {
            let marker = if index == snapshot.current_index {
                "●"
            } else {
                "○"
            };
            dots = dots.push(
                button(Text::new(marker))
                    .style(button::text)
                    .on_press(Message::GoTo(index)),
            );
        }

        let controls = Row::new()
            .spacing(16)
            .align_y(alignment::Vertical::Center)
            .push(button(Text::new("‹")).on_press(Message::NavigatePrevious))
            .push(dots)
            .push(button(Text::new("›")).on_press(Message::NavigateNext));

        let status = Text::new(format!(
            "Slide {} / {}{}",
            snapshot.current_index + 1,
            self.slides.len(),
            if snapshot.is_dragging {
                "  (dragging)"
            } else {
                ""
            }
        ))
        .size(14);

        Column::new()
            .spacing(12)
            .padding(16)
            .align_x(alignment::Horizontal::Center)
            .push(stage)
            .push(controls)
            .push(status)
            .into()
    }
}

/// Placeholder shown when the demo is launched with zero slides; the
/// controller treats every operation as a no-op in this state.
fn empty_state<'a>() -> Element<'a, Message> {
    let message = Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("No slides to show").size(24))
        .push(Text::new("Launch with --slides N to populate the carousel").size(14));

    Container::new(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
