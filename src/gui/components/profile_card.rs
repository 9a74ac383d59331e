use eframe::egui;

use super::card;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileCardAction {
    None,
    ViewAlbum,
}

/// Avatar placeholder, name and the "View Album" link
pub fn ui(ui: &mut egui::Ui, name: &str, accent: egui::Color32) -> ProfileCardAction {
    let mut action = ProfileCardAction::None;

    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            avatar(ui);
            ui.add_space(ITEM_SPACING);
            ui.label(
                egui::RichText::new(name)
                    .size(NAME_TEXT_SIZE)
                    .strong()
                    .color(TITLE_TEXT),
            );
            if ui
                .link(egui::RichText::new("View Album").color(accent))
                .clicked()
            {
                action = ProfileCardAction::ViewAlbum;
            }
        });
    });

    action
}

/// Grey circle with a simple head-and-shoulders silhouette
fn avatar(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(AVATAR_DIAMETER, AVATAR_DIAMETER),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = AVATAR_DIAMETER / 2.0;
    let figure = egui::Color32::from_rgb(107, 114, 128);

    painter.circle_filled(center, radius, PLACEHOLDER_FILL);
    painter.circle_filled(center - egui::vec2(0.0, radius * 0.22), radius * 0.22, figure);

    let shoulders = egui::Rect::from_center_size(
        center + egui::vec2(0.0, radius * 0.38),
        egui::vec2(radius * 0.95, radius * 0.42),
    );
    painter.rect_filled(shoulders, egui::CornerRadius::same(24), figure);
}
