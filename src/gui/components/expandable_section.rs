use eframe::egui;

use super::card;
use crate::disclosure::Disclosure;
use crate::gui::constants::*;

/// Card with a clickable title bar; the body is only built while open.
///
/// Returns true when the title bar was clicked this frame.
pub fn ui(
    ui: &mut egui::Ui,
    section: &Disclosure,
    accent: egui::Color32,
    add_body: impl FnOnce(&mut egui::Ui),
) -> bool {
    card(ui, |ui| {
        let header = ui
            .horizontal(|ui| {
                ui.label(
                    egui::RichText::new(section.title())
                        .size(SECTION_TITLE_SIZE)
                        .strong()
                        .color(TITLE_TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(section.marker())
                            .size(SECTION_TITLE_SIZE + 4.0)
                            .strong()
                            .color(accent),
                    );
                });
            })
            .response;

        let clicked = ui
            .interact(
                header.rect,
                ui.id().with(("section_header", section.title())),
                egui::Sense::click(),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked();

        if section.is_open() {
            ui.add_space(ITEM_SPACING);
            add_body(ui);
        }

        clicked
    })
    .inner
}
