//! Album carousel view
//!
//! Draws the current slide with previous/next buttons over its edges and a
//! row of dot indicators below. Clicks come back as a [`CarouselCommand`].

use eframe::egui;

use crate::carousel::{Carousel, CarouselCommand, SlideIndex};
use crate::config::Slide;
use crate::gui::constants::*;
use crate::gui::slides::SlideTextures;

pub fn ui(
    ui: &mut egui::Ui,
    carousel: &Carousel,
    slides: &[Slide],
    textures: &SlideTextures,
    accent: egui::Color32,
) -> Option<CarouselCommand> {
    let mut command = None;
    let current = carousel.current();

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SLIDE_HEIGHT),
        egui::Sense::hover(),
    );
    let alt = slides.get(current.get()).and_then(|s| s.alt.as_deref());
    paint_slide(ui, rect, current, textures.get(current.get()), alt);

    let nav_size = egui::vec2(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE);
    let inset = PADDING + NAV_BUTTON_SIZE / 2.0;
    let prev_rect = egui::Rect::from_center_size(
        egui::pos2(rect.left() + inset, rect.center().y),
        nav_size,
    );
    let next_rect = egui::Rect::from_center_size(
        egui::pos2(rect.right() - inset, rect.center().y),
        nav_size,
    );

    if ui
        .put(prev_rect, egui::Button::new("<").corner_radius(NAV_BUTTON_SIZE as u8 / 2))
        .on_hover_text("Previous slide")
        .clicked()
    {
        command = Some(CarouselCommand::Previous);
    }
    if ui
        .put(next_rect, egui::Button::new(">").corner_radius(NAV_BUTTON_SIZE as u8 / 2))
        .on_hover_text("Next slide")
        .clicked()
    {
        command = Some(CarouselCommand::Next);
    }

    ui.add_space(ITEM_SPACING);
    if let Some(target) = indicators(ui, carousel, accent) {
        command = Some(CarouselCommand::JumpTo(target));
    }

    command
}

/// Arrow keys step the album, Home/End jump to the first/last slide, while
/// nothing else wants the keyboard. Every press this frame yields a command.
pub fn keyboard_commands(ctx: &egui::Context, carousel: &Carousel) -> Vec<CarouselCommand> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    let keys = ctx.input_mut(|i| KeyPresses {
        previous: i.count_and_consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft),
        next: i.count_and_consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight),
        first: i.consume_key(egui::Modifiers::NONE, egui::Key::Home),
        last: i.consume_key(egui::Modifiers::NONE, egui::Key::End),
    });
    key_commands(carousel, keys)
}

#[derive(Debug, Default, Clone, Copy)]
struct KeyPresses {
    previous: usize,
    next: usize,
    first: bool,
    last: bool,
}

fn key_commands(carousel: &Carousel, keys: KeyPresses) -> Vec<CarouselCommand> {
    let mut commands = Vec::with_capacity(keys.previous + keys.next + 2);
    commands.extend(std::iter::repeat_n(CarouselCommand::Previous, keys.previous));
    commands.extend(std::iter::repeat_n(CarouselCommand::Next, keys.next));

    let edge = |wanted: bool, position: usize| {
        wanted
            .then(|| carousel.index(position))
            .flatten()
            .map(CarouselCommand::JumpTo)
    };
    commands.extend(edge(keys.first, 0));
    commands.extend(edge(keys.last, carousel.len() - 1));
    commands
}

fn paint_slide(
    ui: &egui::Ui,
    rect: egui::Rect,
    slide: SlideIndex,
    texture: Option<&egui::TextureHandle>,
    alt: Option<&str>,
) {
    let rounding = egui::CornerRadius::same(CARD_ROUNDING);
    match texture {
        Some(texture) => {
            egui::Image::new(texture)
                .corner_radius(rounding)
                .maintain_aspect_ratio(true)
                .paint_at(ui, rect);
        }
        None => {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, rounding, PLACEHOLDER_FILL);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                slide_label(slide),
                egui::FontId::proportional(18.0),
                PLACEHOLDER_TEXT,
            );
        }
    }

    if let Some(alt) = alt {
        ui.interact(rect, ui.id().with("slide_alt"), egui::Sense::hover())
            .on_hover_text(alt);
    }
}

fn indicators(ui: &mut egui::Ui, carousel: &Carousel, accent: egui::Color32) -> Option<SlideIndex> {
    let spacing = ITEM_SPACING;
    let row_width = carousel.len() as f32 * (INDICATOR_DIAMETER + spacing) - spacing;
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

        for slide in carousel.indices() {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(INDICATOR_DIAMETER, INDICATOR_DIAMETER),
                egui::Sense::click(),
            );
            let color = if carousel.is_current(slide) { accent } else { INDICATOR_IDLE };
            ui.painter()
                .circle_filled(rect.center(), INDICATOR_DIAMETER / 2.0, color);

            if response
                .on_hover_text(indicator_hover(slide))
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
            {
                clicked = Some(slide);
            }
        }
    });

    clicked
}

fn slide_label(slide: SlideIndex) -> String {
    format!("Slide {slide}")
}

fn indicator_hover(slide: SlideIndex) -> String {
    format!("Go to slide {slide}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_labels_are_one_based() {
        let carousel = Carousel::new(NonZeroUsize::new(4).unwrap());
        let first = carousel.index(0).unwrap();
        let last = carousel.index(3).unwrap();
        assert_eq!(slide_label(first), "Slide 1");
        assert_eq!(indicator_hover(last), "Go to slide 4");
    }

    #[test]
    fn test_every_arrow_press_becomes_a_command() {
        let carousel = Carousel::new(NonZeroUsize::new(4).unwrap());
        let commands = key_commands(
            &carousel,
            KeyPresses {
                previous: 1,
                next: 3,
                ..KeyPresses::default()
            },
        );
        assert_eq!(
            commands,
            vec![
                CarouselCommand::Previous,
                CarouselCommand::Next,
                CarouselCommand::Next,
                CarouselCommand::Next,
            ]
        );
        assert!(key_commands(&carousel, KeyPresses::default()).is_empty());
    }

    #[test]
    fn test_home_and_end_jump_to_edges() {
        let carousel = Carousel::new(NonZeroUsize::new(4).unwrap());
        let commands = key_commands(
            &carousel,
            KeyPresses {
                first: true,
                last: true,
                ..KeyPresses::default()
            },
        );
        let targets: Vec<usize> = commands
            .iter()
            .map(|c| match c {
                CarouselCommand::JumpTo(slide) => slide.get(),
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(targets, vec![0, 3]);
    }
}
